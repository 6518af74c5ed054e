//! Static position evaluation.
//!
//! A position is worth the paint on the board: every cell a side owns earns
//! it points scaled by coat thickness, and every rival cell costs it the
//! same way. Thick coats count for more than thin ones because a rival
//! needs an extra pass to strip them.

use crate::board::{Cell, GameState, Side};

/// Base worth of a cell the side owns, before the coat bonus.
pub const OWN_CELL: i32 = 100;
/// Base cost of a cell a rival owns, before the coat bonus.
pub const RIVAL_CELL: i32 = 50;

/// Scores `state` from `side`'s point of view. Higher is better.
pub fn score(state: &GameState, side: Side) -> i32 {
    let mut total = 0;
    for cell in state.field.iter() {
        match cell {
            Cell::Clear => {}
            _ if cell.owner() == Some(side) => total += OWN_CELL + i32::from(cell.coat()),
            _ => total -= RIVAL_CELL + i32::from(cell.coat()),
        }
    }
    total
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::board::{Agent, CellPos, Dir, AGENT_COUNT, CELL_COUNT, SIDE_COUNT};

    fn state_with(field: [Cell; CELL_COUNT]) -> GameState {
        let agents = [Agent { pos: CellPos::new(0, 0, 0), dir: Dir::RowPlus }; AGENT_COUNT];
        GameState::from_parts(0, field, agents, [0; SIDE_COUNT], [0; AGENT_COUNT])
    }

    #[test]
    fn empty_board_is_neutral() {
        let state = state_with([Cell::Clear; CELL_COUNT]);
        assert_eq!(score(&state, Side::Red), 0);
    }

    #[test]
    fn coats_weigh_in() {
        let mut field = [Cell::Clear; CELL_COUNT];
        field[0] = Cell::Full(Side::Red);
        field[1] = Cell::Half(Side::Red);
        field[2] = Cell::Full(Side::Blue);
        field[3] = Cell::Half(Side::Green);
        let state = state_with(field);

        assert_eq!(score(&state, Side::Red), 102 + 101 - 52 - 51);
        assert_eq!(score(&state, Side::Blue), 102 - 102 - 101 - 51);
    }

    #[test]
    fn fully_owned_board_is_symmetric_for_rivals() {
        let state = state_with([Cell::Full(Side::Green); CELL_COUNT]);
        assert_eq!(score(&state, Side::Green), (CELL_COUNT as i32) * 102);
        assert_eq!(score(&state, Side::Red), -(CELL_COUNT as i32) * 52);
        assert_eq!(score(&state, Side::Red), score(&state, Side::Blue));
    }
}
