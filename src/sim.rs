//! Turn simulation.
//!
//! Advances a [`GameState`] by whole turns from a move batch. Each turn runs
//! a fixed phase order over a per-call contention mask: normal movement,
//! contested painting, mask reset, special moves (dash and warp), special
//! paint resolution, and score accrual over the second half of the game.
//!
//! The simulator trusts its inputs. Snapshots come validated from the
//! protocol layer, and callers are expected to respect the batch contract;
//! it does not police special-move charges.

use crate::board::{
    batch_slot, shift_face, Action, CellPos, Dir, GameState, Side, AGENT_COUNT, ALL_DIRS,
    CELL_COUNT, SIDE_COUNT, TOTAL_TURNS,
};

/// Advances `state` by `batch.len() / 6` turns on behalf of `side`.
///
/// The batch holds one action per agent slot per turn, laid out in the
/// controlling side's frame: slot idx takes the group element at
/// [`batch_slot`]`(side, idx)`. Slots the side leaves alone hold
/// [`Action::Hold`]. Side 0's frame is the identity, so a batch indexed by
/// absolute slot advances under `Side::Red`.
///
/// # Panics
///
/// Panics if the batch length is not a multiple of six; a malformed batch is
/// a caller bug, not a recoverable condition.
pub fn progress(state: &mut GameState, side: Side, batch: &[Action]) {
    assert!(
        batch.len() % AGENT_COUNT == 0,
        "move batch length {} is not a multiple of {}",
        batch.len(),
        AGENT_COUNT
    );

    let mut mask = [0u8; CELL_COUNT];
    let mut touched: Vec<usize> = Vec::new();

    for group in batch.chunks_exact(AGENT_COUNT) {
        let mut acts = [Action::Hold; AGENT_COUNT];
        for slot in 0..AGENT_COUNT {
            acts[slot] = group[batch_slot(side, slot)];
        }

        // Normal movement: rotate, advance one cell, stake a claim bit.
        let mut dest = [0usize; AGENT_COUNT];
        for slot in 0..AGENT_COUNT {
            if let Action::Step(turns) = acts[slot] {
                state.agents[slot].rotate(turns);
                state.agents[slot].advance();
                dest[slot] = state.agents[slot].pos.index();
                mask[dest[slot]] |= 1 << slot;
            }
        }

        // Contested painting: a claim sticks when it is alone, opposed only
        // by its own side's mate, or lands on ground the side already owns.
        for slot in 0..AGENT_COUNT {
            if matches!(acts[slot], Action::Step(_)) {
                let owner = Side::of_slot(slot);
                let own = 1u8 << slot;
                let with_mate = own | 1 << owner.index();
                let claims = mask[dest[slot]];
                if claims == own
                    || claims == with_mate
                    || state.field[dest[slot]].owner() == Some(owner)
                {
                    state.paint(owner, dest[slot]);
                }
            }
        }

        // Clear the claim bits before specials reuse the mask for side bits.
        for slot in 0..AGENT_COUNT {
            if matches!(acts[slot], Action::Step(_)) {
                mask[dest[slot]] = 0;
            }
        }

        // Special moves mark cells with their side's bit; each cell's first
        // touch queues it for resolution.
        touched.clear();
        for slot in 0..AGENT_COUNT {
            let owner = Side::of_slot(slot);
            match acts[slot] {
                Action::Dash(turns) => {
                    state.special[slot] -= 1;
                    state.agents[slot].rotate(turns);
                    for _ in 0..5 {
                        state.agents[slot].advance();
                        mark(&mut mask, &mut touched, owner, state.agents[slot].pos);
                    }
                }
                Action::Warp(target) => {
                    state.special[slot] -= 1;
                    let landing =
                        CellPos::new(shift_face(owner, target.face), target.row, target.col);
                    mark(&mut mask, &mut touched, owner, landing);
                    for dir in ALL_DIRS {
                        state.agents[slot].pos = landing;
                        state.agents[slot].dir = dir;
                        state.agents[slot].advance();
                        mark(&mut mask, &mut touched, owner, state.agents[slot].pos);
                    }
                    state.agents[slot].pos = landing;
                    state.agents[slot].dir = Dir::RowPlus;
                }
                Action::Hold | Action::Step(_) => {}
            }
        }

        // A specially marked cell repaints only when exactly one side
        // touched it.
        for &index in &touched {
            match mask[index] {
                1 => state.force_paint(Side::Red, index),
                2 => state.force_paint(Side::Green, index),
                4 => state.force_paint(Side::Blue, index),
                _ => {}
            }
            mask[index] = 0;
        }

        if state.turn >= TOTAL_TURNS / 2 {
            for s in 0..SIDE_COUNT {
                state.score[s] += u32::from(state.area[s]);
            }
        }
        state.turn += 1;
    }
}

fn mark(mask: &mut [u8; CELL_COUNT], touched: &mut Vec<usize>, side: Side, pos: CellPos) {
    let index = pos.index();
    if mask[index] == 0 {
        touched.push(index);
    }
    mask[index] |= 1 << side.index();
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::board::{Agent, Cell};

    fn agent(face: u8, row: u8, col: u8, dir: Dir) -> Agent {
        Agent { pos: CellPos::new(face, row, col), dir }
    }

    fn parked() -> [Agent; AGENT_COUNT] {
        let mut agents = [agent(0, 2, 2, Dir::RowPlus); AGENT_COUNT];
        for (slot, a) in agents.iter_mut().enumerate() {
            a.pos = CellPos::new(slot as u8, 2, 2);
        }
        agents
    }

    fn blank(agents: [Agent; AGENT_COUNT]) -> GameState {
        GameState::from_parts(0, [Cell::Clear; CELL_COUNT], agents, [0; SIDE_COUNT], [3; AGENT_COUNT])
    }

    fn only(slot: usize, action: Action) -> [Action; AGENT_COUNT] {
        let mut batch = [Action::Hold; AGENT_COUNT];
        batch[slot] = action;
        batch
    }

    #[test]
    fn single_step_moves_and_paints() {
        let mut agents = parked();
        agents[0] = agent(0, 0, 0, Dir::RowPlus);
        let mut state = blank(agents);

        progress(&mut state, Side::Red, &only(0, Action::Step(0)));

        assert_eq!(state.agents[0].pos, CellPos::new(0, 1, 0));
        assert_eq!(state.agents[0].dir, Dir::RowPlus);
        assert_eq!(state.cell(CellPos::new(0, 1, 0)), Cell::Full(Side::Red));
        assert_eq!(state.area, [1, 0, 0]);
        assert_eq!(state.turn, 1);
        assert_eq!(state.area, state.count_area());
    }

    #[test]
    #[should_panic(expected = "multiple of 6")]
    fn ragged_batch_is_rejected() {
        let mut state = blank(parked());
        let batch = [Action::Hold; 5];
        progress(&mut state, Side::Red, &batch);
    }

    #[test]
    fn multi_turn_batch_advances_per_group() {
        let mut agents = parked();
        agents[0] = agent(0, 0, 0, Dir::RowPlus);
        let mut state = blank(agents);

        let mut batch = [Action::Hold; AGENT_COUNT * 2];
        batch[0] = Action::Step(0);
        batch[AGENT_COUNT] = Action::Step(0);
        progress(&mut state, Side::Red, &batch);

        assert_eq!(state.turn, 2);
        assert_eq!(state.agents[0].pos, CellPos::new(0, 2, 0));
        assert_eq!(state.area, [2, 0, 0]);
    }

    #[test]
    fn rival_collision_leaves_cell_unpainted() {
        let mut agents = parked();
        agents[0] = agent(0, 1, 2, Dir::RowPlus);
        agents[1] = agent(0, 3, 2, Dir::RowMinus);
        let mut state = blank(agents);

        let mut batch = [Action::Hold; AGENT_COUNT];
        batch[0] = Action::Step(0);
        batch[1] = Action::Step(0);
        progress(&mut state, Side::Red, &batch);

        assert_eq!(state.agents[0].pos, CellPos::new(0, 2, 2));
        assert_eq!(state.agents[1].pos, CellPos::new(0, 2, 2));
        assert_eq!(state.cell(CellPos::new(0, 2, 2)), Cell::Clear);
        assert_eq!(state.area, [0, 0, 0]);
    }

    #[test]
    fn collision_on_owned_ground_still_repaints() {
        let mut agents = parked();
        agents[0] = agent(0, 1, 2, Dir::RowPlus);
        agents[1] = agent(0, 3, 2, Dir::RowMinus);
        let mut state = blank(agents);
        state.paint(Side::Green, CellPos::new(0, 2, 2).index());
        state.paint(Side::Green, CellPos::new(0, 2, 2).index());

        let mut batch = [Action::Hold; AGENT_COUNT];
        batch[0] = Action::Step(0);
        batch[1] = Action::Step(0);
        progress(&mut state, Side::Red, &batch);

        // Contested, but green owned the cell, so green's claim goes through.
        assert_eq!(state.cell(CellPos::new(0, 2, 2)), Cell::Full(Side::Green));
        assert_eq!(state.area, [0, 1, 0]);
    }

    #[test]
    fn mirrored_pair_still_paints() {
        let mut agents = parked();
        agents[0] = agent(0, 1, 2, Dir::RowPlus);
        agents[5] = agent(0, 3, 2, Dir::RowMinus);
        let mut state = blank(agents);

        let mut batch = [Action::Hold; AGENT_COUNT];
        batch[0] = Action::Step(0);
        batch[5] = Action::Step(0);
        progress(&mut state, Side::Red, &batch);

        assert_eq!(state.cell(CellPos::new(0, 2, 2)), Cell::Full(Side::Red));
        assert_eq!(state.area, [1, 0, 0]);
    }

    #[test]
    fn stepping_onto_rival_paint_wears_it_down() {
        let mut agents = parked();
        agents[0] = agent(0, 1, 2, Dir::RowPlus);
        let mut state = blank(agents);
        let target = CellPos::new(0, 2, 2).index();
        state.force_paint(Side::Green, target);

        progress(&mut state, Side::Red, &only(0, Action::Step(0)));
        assert_eq!(state.field[target], Cell::Half(Side::Green));
        assert_eq!(state.area, [0, 1, 0]);
    }

    #[test]
    fn dash_paints_its_path() {
        let mut agents = parked();
        agents[0] = agent(0, 0, 2, Dir::RowPlus);
        let mut state = blank(agents);

        progress(&mut state, Side::Red, &only(0, Action::Dash(0)));

        for row in 1..=4 {
            assert_eq!(state.cell(CellPos::new(0, row, 2)), Cell::Full(Side::Red));
        }
        assert_eq!(state.cell(CellPos::new(1, 2, 4)), Cell::Full(Side::Red));
        assert_eq!(state.agents[0].pos, CellPos::new(1, 2, 4));
        assert_eq!(state.agents[0].dir, Dir::ColMinus);
        assert_eq!(state.special[0], 2);
        assert_eq!(state.area, [5, 0, 0]);
    }

    #[test]
    fn warp_stamps_target_and_neighbors() {
        let mut state = blank(parked());
        state.force_paint(Side::Green, CellPos::new(2, 1, 2).index());

        progress(&mut state, Side::Red, &only(0, Action::Warp(CellPos::new(2, 2, 2))));

        let expect = [
            CellPos::new(2, 2, 2),
            CellPos::new(2, 1, 2),
            CellPos::new(2, 3, 2),
            CellPos::new(2, 2, 1),
            CellPos::new(2, 2, 3),
        ];
        for pos in expect {
            assert_eq!(state.cell(pos), Cell::Full(Side::Red), "{:?}", pos);
        }
        assert_eq!(state.agents[0].pos, CellPos::new(2, 2, 2));
        assert_eq!(state.agents[0].dir, Dir::RowPlus);
        assert_eq!(state.special[0], 2);
        assert_eq!(state.area, [5, 0, 0]);
    }

    #[test]
    fn warp_face_is_decoded_in_the_owners_frame() {
        let mut state = blank(parked());

        // Slot 1 belongs to green; green's frame maps encoded face 0 to
        // absolute face 1.
        progress(&mut state, Side::Red, &only(1, Action::Warp(CellPos::new(0, 2, 2))));

        assert_eq!(state.agents[1].pos, CellPos::new(1, 2, 2));
        assert_eq!(state.cell(CellPos::new(1, 2, 2)), Cell::Full(Side::Green));
    }

    #[test]
    fn crossing_dashes_cancel_on_the_shared_cell() {
        let mut agents = parked();
        agents[0] = agent(0, 0, 2, Dir::RowPlus);
        agents[1] = agent(0, 2, 0, Dir::ColPlus);
        let mut state = blank(agents);

        let mut batch = [Action::Hold; AGENT_COUNT];
        batch[0] = Action::Dash(0);
        batch[1] = Action::Dash(0);
        progress(&mut state, Side::Red, &batch);

        // Both dashes marked (0,2,2); neither side gets it.
        assert_eq!(state.cell(CellPos::new(0, 2, 2)), Cell::Clear);
        assert_eq!(state.cell(CellPos::new(0, 1, 2)), Cell::Full(Side::Red));
        assert_eq!(state.cell(CellPos::new(0, 2, 1)), Cell::Full(Side::Green));
        assert_eq!(state.area, state.count_area());
    }

    #[test]
    fn batch_follows_the_controlling_sides_frame() {
        let mut state = blank(parked());
        let start = state.agents.map(|a| a.pos);

        // In green's frame the elements at positions 0 and 5 drive absolute
        // slots 2 and 3.
        let mut batch = [Action::Hold; AGENT_COUNT];
        batch[0] = Action::Step(0);
        batch[5] = Action::Step(0);
        progress(&mut state, Side::Green, &batch);

        for slot in 0..AGENT_COUNT {
            let moved = state.agents[slot].pos != start[slot];
            assert_eq!(moved, slot == 2 || slot == 3, "slot {slot}");
        }
    }

    #[test]
    fn score_accrues_only_from_the_half_way_turn() {
        let mut field = [Cell::Clear; CELL_COUNT];
        field[0] = Cell::Full(Side::Red);
        field[1] = Cell::Full(Side::Red);
        let mut state =
            GameState::from_parts(146, field, parked(), [0; SIDE_COUNT], [0; AGENT_COUNT]);

        let batch = [Action::Hold; AGENT_COUNT];
        progress(&mut state, Side::Red, &batch);
        assert_eq!(state.score, [0, 0, 0]);
        assert_eq!(state.turn, 147);

        progress(&mut state, Side::Red, &batch);
        assert_eq!(state.score, [2, 0, 0]);
        assert_eq!(state.turn, 148);
    }

    #[test]
    fn special_charges_are_not_policed() {
        let mut agents = parked();
        agents[0] = agent(0, 0, 2, Dir::RowPlus);
        let mut state = blank(agents);
        state.special[0] = 0;

        progress(&mut state, Side::Red, &only(0, Action::Dash(0)));
        assert_eq!(state.special[0], -1);
    }
}
