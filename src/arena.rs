//! Offline self-play arena.
//!
//! Pits the search chooser against itself or random movers without a
//! server, which is how changes to evaluation and look-ahead get judged.
//! Games run in parallel and every per-game seed derives from the
//! configured one, so a run is reproducible.
//!
//! The live server rotates each snapshot into the receiving side's frame;
//! the arena skips that and plays every side in the absolute frame, which
//! the simulator accepts as the first side's view.

use rand::rngs::SmallRng;
use rand::{Rng, SeedableRng};
use rayon::prelude::*;

use crate::board::{
    Action, Agent, Cell, CellPos, Dir, GameState, Side, AGENT_COUNT, ALL_SIDES, CELL_COUNT,
    SIDE_COUNT, TOTAL_TURNS,
};
use crate::search::Chooser;
use crate::sim::progress;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Policy {
    /// Look-ahead search via [`Chooser`].
    Search,
    /// Uniformly random steps.
    Random,
}

#[derive(Debug, Clone)]
pub struct ArenaConfig {
    pub games: u32,
    pub turns: u16,
    pub seed: u64,
    pub policies: [Policy; SIDE_COUNT],
    /// Special-move charges each agent starts with.
    pub special_charges: i16,
    /// Chance per turn and agent that a search side spends a charge.
    pub special_rate: f64,
}

impl Default for ArenaConfig {
    fn default() -> Self {
        ArenaConfig {
            games: 10,
            turns: TOTAL_TURNS,
            seed: 1,
            policies: [Policy::Search, Policy::Random, Policy::Random],
            special_charges: 2,
            special_rate: 0.0,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GameReport {
    pub score: [u32; SIDE_COUNT],
    pub area: [u16; SIDE_COUNT],
    /// Side with the strictly highest score, if any.
    pub winner: Option<Side>,
}

#[derive(Debug, Clone, PartialEq)]
pub struct ArenaSummary {
    pub wins: [u32; SIDE_COUNT],
    pub draws: u32,
    pub mean_score: [f64; SIDE_COUNT],
    pub mean_area: [f64; SIDE_COUNT],
}

/// Fresh game: clear field, each agent at the center of its own face, and
/// everyone facing row-increasing.
pub fn seed_state(special_charges: i16) -> GameState {
    let mut agents = [Agent { pos: CellPos::new(0, 2, 2), dir: Dir::RowPlus }; AGENT_COUNT];
    for (slot, agent) in agents.iter_mut().enumerate() {
        agent.pos = CellPos::new(slot as u8, 2, 2);
    }
    GameState::from_parts(
        0,
        [Cell::Clear; CELL_COUNT],
        agents,
        [0; SIDE_COUNT],
        [special_charges; AGENT_COUNT],
    )
}

/// Plays the configured number of games in parallel.
pub fn run(config: &ArenaConfig) -> Vec<GameReport> {
    (0..config.games)
        .into_par_iter()
        .map(|game| play_game(config, config.seed.wrapping_add(u64::from(game))))
        .collect()
}

fn play_game(config: &ArenaConfig, seed: u64) -> GameReport {
    let mut rng = SmallRng::seed_from_u64(seed);
    let mut choosers: [Chooser; SIDE_COUNT] = std::array::from_fn(|_| {
        Chooser::seeded(rng.gen()).with_special_rate(config.special_rate)
    });

    let mut state = seed_state(config.special_charges);
    for _ in 0..config.turns {
        let mut batch = [Action::Hold; AGENT_COUNT];
        for side in ALL_SIDES {
            let [lo, hi] = side.slots();
            match config.policies[side.index()] {
                Policy::Search => {
                    let plan = choosers[side.index()].choose_for(&state, side);
                    batch[lo] = plan.actions.0;
                    batch[hi] = plan.actions.1;
                }
                Policy::Random => {
                    batch[lo] = Action::Step(rng.gen_range(0..4));
                    batch[hi] = Action::Step(rng.gen_range(0..4));
                }
            }
        }
        progress(&mut state, Side::Red, &batch);
    }

    GameReport { score: state.score, area: state.area, winner: winner_of(&state.score) }
}

fn winner_of(score: &[u32; SIDE_COUNT]) -> Option<Side> {
    let top = score.iter().copied().fold(0, u32::max);
    let mut at_top = ALL_SIDES.iter().filter(|side| score[side.index()] == top);
    match (at_top.next(), at_top.next()) {
        (Some(&side), None) => Some(side),
        _ => None,
    }
}

/// Aggregates reports into win counts and per-side means.
pub fn summarize(reports: &[GameReport]) -> ArenaSummary {
    let mut summary = ArenaSummary {
        wins: [0; SIDE_COUNT],
        draws: 0,
        mean_score: [0.0; SIDE_COUNT],
        mean_area: [0.0; SIDE_COUNT],
    };
    for report in reports {
        match report.winner {
            Some(side) => summary.wins[side.index()] += 1,
            None => summary.draws += 1,
        }
        for s in 0..SIDE_COUNT {
            summary.mean_score[s] += f64::from(report.score[s]);
            summary.mean_area[s] += f64::from(report.area[s]);
        }
    }
    if !reports.is_empty() {
        let games = reports.len() as f64;
        for s in 0..SIDE_COUNT {
            summary.mean_score[s] /= games;
            summary.mean_area[s] /= games;
        }
    }
    summary
}
