//! Agent actions and the side-view permutation.

use super::cell::{Side, AGENT_COUNT, SIDE_COUNT};
use super::geometry::CellPos;

/// One agent's action for a turn.
///
/// Wire move values map as: -1 hold; 0-3 step (rotate by the value, then
/// move one cell); 4-7 dash (rotate, then advance five cells marking the
/// path); 8 and up warp (teleport to the encoded cell and stamp it plus its
/// four neighbors). A warp's face is encoded in the acting side's frame.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Action {
    Hold,
    Step(u8),
    Dash(u8),
    Warp(CellPos),
}

/// Per-side permutation of the six slot/face positions.
///
/// The server rotates each side's view of the game into that side's own
/// frame; this fixed permutation relates frame positions to absolute ones.
/// It is applied in two places: a move batch is laid out in the controlling
/// side's frame, so agent slot idx reads the batch element at
/// `VIEW_SHIFT[side][idx]`; and a warp's encoded face f lands on absolute
/// face `VIEW_SHIFT[owner][f]`. Side 0's row is the identity, which is why a
/// client acting on its own snapshot indexes its batch directly.
pub static VIEW_SHIFT: [[u8; AGENT_COUNT]; SIDE_COUNT] = [
    [0, 1, 2, 3, 4, 5],
    [1, 2, 0, 5, 3, 4],
    [2, 0, 1, 4, 5, 3],
];

/// Batch position that agent slot `slot` reads when `side` is in control.
pub fn batch_slot(side: Side, slot: usize) -> usize {
    VIEW_SHIFT[side.index()][slot] as usize
}

/// Absolute face for a warp target face encoded in `side`'s frame.
pub fn shift_face(side: Side, face: u8) -> u8 {
    VIEW_SHIFT[side.index()][face as usize]
}

#[cfg(test)]
mod tests {
    use super::*;

    /// The arithmetic the table replaces, kept as the reference.
    fn shift_formula(side: usize, pos: usize) -> usize {
        let (i0, i1) = (side / 3, side % 3);
        let (j0, j1) = (pos / 3, pos % 3);
        ((j0 + 1) * i1 + j1) % 3 + (i0 + j0) % 2 * 3
    }

    #[test]
    fn view_shift_matches_formula() {
        for side in 0..SIDE_COUNT {
            for pos in 0..AGENT_COUNT {
                assert_eq!(
                    VIEW_SHIFT[side][pos] as usize,
                    shift_formula(side, pos),
                    "side {side} pos {pos}"
                );
            }
        }
    }

    #[test]
    fn view_shift_rows_are_permutations() {
        for row in VIEW_SHIFT.iter() {
            let mut seen = [false; AGENT_COUNT];
            for &v in row {
                seen[v as usize] = true;
            }
            assert!(seen.iter().all(|&s| s));
        }
    }

    #[test]
    fn own_view_is_identity() {
        for slot in 0..AGENT_COUNT {
            assert_eq!(batch_slot(Side::Red, slot), slot);
        }
        for face in 0..AGENT_COUNT as u8 {
            assert_eq!(shift_face(Side::Red, face), face);
        }
    }

    #[test]
    fn rival_rows_invert_each_other() {
        for pos in 0..AGENT_COUNT {
            let through = VIEW_SHIFT[1][pos] as usize;
            assert_eq!(VIEW_SHIFT[2][through] as usize, pos);
        }
    }
}
