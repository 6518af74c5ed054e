//! Brute-force look-ahead move selection.
//!
//! A side drives two agents, so one decision is a pair of rotations. The
//! chooser simulates all 16 pairs one turn ahead, then extends each by the
//! 64 ways the pair can follow up over two more turns (the trailing agent
//! sits out the last one), and values a pair as its immediate evaluation
//! plus ten times its best continuation. The 16 roots are scored in
//! parallel.
//!
//! Ties are broken at random, and a small exploration rate occasionally
//! submits a uniformly random pair instead of a best one.

use rand::rngs::SmallRng;
use rand::{Rng, SeedableRng};
use rayon::prelude::*;

use crate::board::{Action, CellPos, GameState, Side, AGENT_COUNT, CELL_COUNT};
use crate::eval;
use crate::sim::progress;

/// Weight of the best continuation relative to the immediate evaluation.
pub const LOOKAHEAD_WEIGHT: i32 = 10;
/// Chance of submitting a random pair instead of a best-scoring one.
pub const EXPLORE_RATE: f64 = 0.1;
/// Positions simulated per decision: 16 roots and 64 continuations each.
pub const NODES_PER_PLAN: u64 = 16 + 16 * 64;

/// One decision, with enough of the search's view to log it.
#[derive(Debug, Clone)]
pub struct Plan {
    /// Chosen actions for the side's lead and trail agent.
    pub actions: (Action, Action),
    /// Value of the best pair.
    pub score: i32,
    /// Every pair that reached the best value, as (lead, trail) rotations.
    pub ties: Vec<(u8, u8)>,
    /// Positions simulated to make this decision.
    pub nodes: u64,
    /// Whether the exploration branch overrode the search result.
    pub explored: bool,
}

/// Move chooser owning the randomness for tie-breaks, exploration, and the
/// optional special-move policy.
pub struct Chooser {
    rng: SmallRng,
    special_rate: f64,
}

impl Chooser {
    pub fn new() -> Self {
        Chooser { rng: SmallRng::from_entropy(), special_rate: 0.0 }
    }

    /// Deterministic chooser for tests and self-play.
    pub fn seeded(seed: u64) -> Self {
        Chooser { rng: SmallRng::seed_from_u64(seed), special_rate: 0.0 }
    }

    /// Sets the per-agent chance of upgrading a chosen step to a special
    /// move. Zero disables specials entirely.
    pub fn with_special_rate(mut self, rate: f64) -> Self {
        self.special_rate = rate;
        self
    }

    /// Random opening pair, for the submission that starts a game before
    /// any snapshot exists.
    pub fn opening_pair(&mut self) -> (Action, Action) {
        (
            Action::Step(self.rng.gen_range(0..4)),
            Action::Step(self.rng.gen_range(0..4)),
        )
    }

    /// Picks the next action pair for the first side.
    pub fn choose(&mut self, state: &GameState) -> Plan {
        self.choose_for(state, Side::Red)
    }

    /// Picks the next action pair for `side`'s two agents.
    pub fn choose_for(&mut self, state: &GameState, side: Side) -> Plan {
        let scores = evaluate_pairs(state, side);
        let (score, ties) = best_pairs(&scores);

        let explored = self.rng.gen::<f64>() < EXPLORE_RATE;
        let (lead, trail) = if explored {
            (self.rng.gen_range(0..4), self.rng.gen_range(0..4))
        } else {
            ties[self.rng.gen_range(0..ties.len())]
        };

        let [lo, hi] = side.slots();
        let actions = (
            self.maybe_special(state.special[lo], Action::Step(lead)),
            self.maybe_special(state.special[hi], Action::Step(trail)),
        );

        Plan { actions, score, ties, nodes: NODES_PER_PLAN, explored }
    }

    /// Upgrades a chosen step to a dash on the same heading or a warp to a
    /// uniformly random cell, if charges remain and the rate allows.
    fn maybe_special(&mut self, charges: i16, chosen: Action) -> Action {
        if self.special_rate <= 0.0 || charges <= 0 || self.rng.gen::<f64>() > self.special_rate {
            return chosen;
        }
        if self.rng.gen::<bool>() {
            match chosen {
                Action::Step(turns) => Action::Dash(turns),
                other => other,
            }
        } else {
            Action::Warp(CellPos::from_index(self.rng.gen_range(0..CELL_COUNT)))
        }
    }
}

impl Default for Chooser {
    fn default() -> Self {
        Chooser::new()
    }
}

/// Values all 16 rotation pairs for `side`, indexed by `lead * 4 + trail`.
pub fn evaluate_pairs(state: &GameState, side: Side) -> [i32; 16] {
    let evaluated: Vec<i32> = (0..16usize)
        .into_par_iter()
        .map(|i| evaluate_pair(state, side, (i / 4) as u8, (i % 4) as u8))
        .collect();
    let mut scores = [0i32; 16];
    scores.copy_from_slice(&evaluated);
    scores
}

/// Best value in a pair table and every (lead, trail) pair that reaches it.
pub fn best_pairs(scores: &[i32; 16]) -> (i32, Vec<(u8, u8)>) {
    let best = scores.iter().copied().fold(i32::MIN, i32::max);
    let ties = (0..16)
        .filter(|&i| scores[i] == best)
        .map(|i| ((i / 4) as u8, (i % 4) as u8))
        .collect();
    (best, ties)
}

fn evaluate_pair(state: &GameState, side: Side, lead: u8, trail: u8) -> i32 {
    let [lo, hi] = side.slots();
    let mut first = state.clone();
    progress(
        &mut first,
        Side::Red,
        &pair_batch(lo, hi, Action::Step(lead), Action::Step(trail)),
    );
    let immediate = eval::score(&first, side);

    // Continuations replay from the position after the root turn; the state
    // is re-filled in place rather than re-cloned.
    let mut best = i32::MIN;
    let mut scratch = first.clone();
    for lead2 in 0..4u8 {
        for trail2 in 0..4u8 {
            for lead3 in 0..4u8 {
                scratch.clone_from(&first);
                progress(
                    &mut scratch,
                    Side::Red,
                    &pair_batch(lo, hi, Action::Step(lead2), Action::Step(trail2)),
                );
                progress(
                    &mut scratch,
                    Side::Red,
                    &pair_batch(lo, hi, Action::Step(lead3), Action::Hold),
                );
                best = best.max(eval::score(&scratch, side));
            }
        }
    }

    immediate + LOOKAHEAD_WEIGHT * best
}

/// Absolute-slot batch with `lead` and `trail` at the side's two slots and
/// everyone else holding.
fn pair_batch(lo: usize, hi: usize, lead: Action, trail: Action) -> [Action; AGENT_COUNT] {
    let mut batch = [Action::Hold; AGENT_COUNT];
    batch[lo] = lead;
    batch[hi] = trail;
    batch
}
