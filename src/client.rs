//! Blocking HTTP client for the game server.
//!
//! Every API call is a GET whose parameters ride in the path. Transport
//! failures and 5xx answers are retried a fixed number of times with a
//! short pause; any other non-200 answer is treated as a caller mistake
//! and fails at once.

use serde::de::DeserializeOwned;
use std::thread;
use std::time::Duration;

use crate::board::Action;
use crate::protocol::{move_token, MoveResponse, StartResponse};

/// Requests sent per call before the last error is given up on.
pub const ATTEMPTS: u32 = 5;
/// Pause between attempts.
pub const RETRY_PAUSE: Duration = Duration::from_millis(100);

#[derive(Debug, thiserror::Error)]
pub enum ApiError {
    #[error("transport failure: {0}")]
    Transport(#[from] reqwest::Error),

    #[error("server answered with status {status}")]
    Failed { status: u16 },

    #[error("server unavailable, status {status}")]
    Unavailable { status: u16 },

    #[error("malformed payload: {0}")]
    Decode(#[from] serde_json::Error),

    #[error("no game to join: '{0}'")]
    Rejected(String),
}

/// Handle on one server and token pair.
pub struct GameApi {
    http: reqwest::blocking::Client,
    base: String,
    token: String,
}

impl GameApi {
    pub fn new(base: impl Into<String>, token: impl Into<String>) -> Self {
        GameApi {
            http: reqwest::blocking::Client::new(),
            base: base.into(),
            token: token.into(),
        }
    }

    /// Asks for a practice match with the given mode and start delay in
    /// seconds.
    pub fn start(&self, mode: u32, delay: u32) -> Result<StartResponse, ApiError> {
        let url = format!(
            "{}/api/start/{}/{}/{}",
            self.base, self.token, mode, delay
        );
        self.get_with_retry(&url)
    }

    /// Submits one action per own agent and receives the game snapshot.
    pub fn submit_move(
        &self,
        game_id: u64,
        lead: Action,
        trail: Action,
    ) -> Result<MoveResponse, ApiError> {
        let url = format!(
            "{}/api/move/{}/{}/{}/{}",
            self.base,
            self.token,
            game_id,
            move_token(lead),
            move_token(trail)
        );
        self.get_with_retry(&url)
    }

    fn get_with_retry<T: DeserializeOwned>(&self, url: &str) -> Result<T, ApiError> {
        for _ in 0..ATTEMPTS - 1 {
            match self.try_get(url) {
                Ok(value) => return Ok(value),
                Err(err) if retryable(&err) => {
                    log::warn!("retrying {url}: {err}");
                    thread::sleep(RETRY_PAUSE);
                }
                Err(err) => return Err(err),
            }
        }
        self.try_get(url)
    }

    fn try_get<T: DeserializeOwned>(&self, url: &str) -> Result<T, ApiError> {
        log::debug!("GET {url}");
        let response = self.http.get(url).send()?;
        let status = response.status();
        if status.is_server_error() {
            return Err(ApiError::Unavailable { status: status.as_u16() });
        }
        if !status.is_success() {
            return Err(ApiError::Failed { status: status.as_u16() });
        }
        let body = response.text()?;
        Ok(serde_json::from_str(&body)?)
    }
}

fn retryable(err: &ApiError) -> bool {
    matches!(err, ApiError::Transport(_) | ApiError::Unavailable { .. })
}

/// Game id to play: the configured one if set, otherwise whatever practice
/// match the start endpoint hands out.
pub fn resolve_game_id(api: &GameApi, configured: Option<u64>) -> Result<u64, ApiError> {
    if let Some(id) = configured {
        return Ok(id);
    }
    let start = api.start(0, 0)?;
    match start.status.as_str() {
        "ok" | "started" => Ok(start.game_id),
        other => Err(ApiError::Rejected(other.to_string())),
    }
}
