//! Process configuration from environment variables.
//!
//! `GAME_SERVER` and `TOKEN` locate the server and identify the player.
//! `GAME_ID` pins a specific match; when unset the client asks for a
//! practice match instead. `SEED` makes the chooser deterministic and
//! `SPECIAL_RATE` enables the random special-move policy. Empty variables
//! count as unset.

use std::env;

pub const DEFAULT_SERVER: &str = "https://gbc2023.tenka1.klab.jp";
pub const DEFAULT_TOKEN: &str = "YOUR_TOKEN";

#[derive(Debug, Clone)]
pub struct Config {
    pub server: String,
    pub token: String,
    pub game_id: Option<u64>,
    pub seed: Option<u64>,
    pub special_rate: f64,
}

#[derive(Debug, PartialEq, thiserror::Error)]
pub enum ConfigError {
    #[error("{name} is not an integer: '{value}'")]
    BadInt { name: &'static str, value: String },

    #[error("{name} is not a number: '{value}'")]
    BadFloat { name: &'static str, value: String },
}

impl Config {
    pub fn from_env() -> Result<Config, ConfigError> {
        let server = env::var("GAME_SERVER").unwrap_or_else(|_| DEFAULT_SERVER.to_string());
        let token = env::var("TOKEN").unwrap_or_else(|_| DEFAULT_TOKEN.to_string());
        if token == DEFAULT_TOKEN {
            log::warn!("TOKEN is not set, playing with the placeholder token");
        }

        let special_rate = match non_empty_var("SPECIAL_RATE") {
            Some(raw) => raw
                .parse()
                .map_err(|_| ConfigError::BadFloat { name: "SPECIAL_RATE", value: raw })?,
            None => 0.0,
        };

        Ok(Config {
            server,
            token,
            game_id: parse_u64("GAME_ID")?,
            seed: parse_u64("SEED")?,
            special_rate,
        })
    }
}

fn non_empty_var(name: &str) -> Option<String> {
    env::var(name).ok().filter(|raw| !raw.is_empty())
}

fn parse_u64(name: &'static str) -> Result<Option<u64>, ConfigError> {
    match non_empty_var(name) {
        Some(raw) => raw
            .parse()
            .map(Some)
            .map_err(|_| ConfigError::BadInt { name, value: raw }),
        None => Ok(None),
    }
}
