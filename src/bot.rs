//! The live game loop: submit a pair, read the snapshot back, plan the
//! next pair, repeat until the server calls the game.
//!
//! Submission is sticky. The move endpoint answers `already_moved` while
//! the current turn still has our pair, so the loop resubmits the same
//! tokens until the turn flips and a fresh snapshot arrives.

use crate::client::{resolve_game_id, ApiError, GameApi};
use crate::config::Config;
use crate::protocol::{decode_state, SnapshotError};
use crate::search::Chooser;

#[derive(Debug, thiserror::Error)]
pub enum BotError {
    #[error(transparent)]
    Api(#[from] ApiError),

    #[error("bad snapshot: {0}")]
    Snapshot(#[from] SnapshotError),
}

/// One bot playing one game.
pub struct Bot {
    api: GameApi,
    chooser: Chooser,
    game_id: u64,
}

impl Bot {
    /// Builds the API handle and resolves the game to play. Does not touch
    /// the network when the config pins a game id.
    pub fn connect(config: &Config) -> Result<Bot, BotError> {
        let api = GameApi::new(config.server.clone(), config.token.clone());
        let game_id = resolve_game_id(&api, config.game_id)?;
        let chooser = match config.seed {
            Some(seed) => Chooser::seeded(seed),
            None => Chooser::new(),
        }
        .with_special_rate(config.special_rate);
        log::info!("joined game {game_id}");
        Ok(Bot { api, chooser, game_id })
    }

    /// Plays until the server reports anything other than a live turn.
    pub fn run(&mut self) -> Result<(), BotError> {
        let mut pair = self.chooser.opening_pair();
        loop {
            let response = self.api.submit_move(self.game_id, pair.0, pair.1)?;
            match response.status.as_str() {
                "ok" => {}
                "already_moved" => {
                    log::debug!("turn {} already has our pair", response.turn);
                    continue;
                }
                other => {
                    log::info!("game over: {other}");
                    return Ok(());
                }
            }

            let state = decode_state(&response)?;
            let plan = self.chooser.choose(&state);
            log::info!(
                "turn {} score {:?} area {:?} best {} ties {} nodes {}{}",
                state.turn,
                state.score,
                state.area,
                plan.score,
                plan.ties.len(),
                plan.nodes,
                if plan.explored { " (explored)" } else { "" },
            );
            log::debug!("submitting {:?}", plan.actions);
            pair = plan.actions;
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn connect_honors_a_pinned_game() {
        let config = Config {
            server: "http://127.0.0.1:1".to_string(),
            token: "unused".to_string(),
            game_id: Some(3),
            seed: Some(1),
            special_rate: 0.0,
        };
        let bot = Bot::connect(&config).unwrap();
        assert_eq!(bot.game_id, 3);
    }
}
