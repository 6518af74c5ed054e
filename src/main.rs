//! Facepaint -- a look-ahead bot for the Tenka1 2023 cube territory game.
//!
//! This binary joins a game on the server named by `GAME_SERVER`, then
//! plays it to the end: submit a pair of moves, read the snapshot back,
//! search for the next pair, repeat.

use std::env;
use std::process::ExitCode;

use facepaint::bot::Bot;
use facepaint::config::Config;

fn main() -> ExitCode {
    if env::var("RUST_LOG").is_err() {
        env::set_var("RUST_LOG", "info");
    }
    env_logger::init();

    let config = match Config::from_env() {
        Ok(config) => config,
        Err(err) => {
            log::error!("{err}");
            return ExitCode::FAILURE;
        }
    };

    let mut bot = match Bot::connect(&config) {
        Ok(bot) => bot,
        Err(err) => {
            log::error!("could not join a game: {err}");
            return ExitCode::FAILURE;
        }
    };

    if let Err(err) = bot.run() {
        log::error!("{err}");
        return ExitCode::FAILURE;
    }
    ExitCode::SUCCESS
}
