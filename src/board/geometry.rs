//! Cube-surface geometry: faces, directions, and seam crossings.
//!
//! The board is the surface of a cube, six 5x5 faces indexed 0-5. Moving off
//! a face edge continues onto a neighboring face with the coordinates and the
//! direction of travel remapped. Every (face, exit direction) pair has a
//! fixed crossing, stored in a compile-time `static` table so the remap
//! arithmetic is never recomputed per step.

/// Cells per face edge.
pub const FACE_SIZE: usize = 5;
/// Number of cube faces.
pub const FACE_COUNT: usize = 6;
/// Total cells on the board surface.
pub const CELL_COUNT: usize = FACE_COUNT * FACE_SIZE * FACE_SIZE;

/// Highest row/col coordinate on a face.
const EDGE: u8 = FACE_SIZE as u8 - 1;

/// A travel direction in face-local coordinates.
///
/// Directions are quarter-turn indices; rotating by `t` adds `t` modulo 4.
/// Compass names would be misleading on a cube, so the variants name the
/// coordinate delta they apply.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[repr(u8)]
pub enum Dir {
    RowPlus = 0,
    ColPlus = 1,
    RowMinus = 2,
    ColMinus = 3,
}

/// All directions in index order.
pub const ALL_DIRS: [Dir; 4] = [Dir::RowPlus, Dir::ColPlus, Dir::RowMinus, Dir::ColMinus];

impl Dir {
    pub const fn index(self) -> usize {
        self as usize
    }

    /// Direction for an index, taken modulo 4.
    pub const fn from_index(i: u8) -> Dir {
        match i % 4 {
            0 => Dir::RowPlus,
            1 => Dir::ColPlus,
            2 => Dir::RowMinus,
            _ => Dir::ColMinus,
        }
    }

    /// Rotates by the given number of quarter turns.
    pub const fn rotated(self, quarter_turns: u8) -> Dir {
        Dir::from_index(self as u8 + quarter_turns % 4)
    }

    /// The opposite direction.
    pub const fn reversed(self) -> Dir {
        Dir::from_index(self as u8 + 2)
    }

    pub const fn row_delta(self) -> i8 {
        match self {
            Dir::RowPlus => 1,
            Dir::RowMinus => -1,
            _ => 0,
        }
    }

    pub const fn col_delta(self) -> i8 {
        match self {
            Dir::ColPlus => 1,
            Dir::ColMinus => -1,
            _ => 0,
        }
    }
}

/// A cell coordinate: face plus face-local row and column.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct CellPos {
    pub face: u8,
    pub row: u8,
    pub col: u8,
}

impl CellPos {
    pub const fn new(face: u8, row: u8, col: u8) -> Self {
        Self { face, row, col }
    }

    /// Flat index into the 150-cell field: `(face*5 + row)*5 + col`.
    pub const fn index(self) -> usize {
        (self.face as usize * FACE_SIZE + self.row as usize) * FACE_SIZE + self.col as usize
    }

    /// Inverse of [`CellPos::index`].
    pub const fn from_index(i: usize) -> Self {
        Self {
            face: (i / (FACE_SIZE * FACE_SIZE)) as u8,
            row: (i / FACE_SIZE % FACE_SIZE) as u8,
            col: (i % FACE_SIZE) as u8,
        }
    }
}

/// How the departed face's (row, col) produce one coordinate on the entered
/// face.
#[derive(Debug, Clone, Copy)]
pub enum CoordMap {
    Zero,
    Edge,
    Row,
    Col,
    RowFlip,
    ColFlip,
}

impl CoordMap {
    fn apply(self, row: u8, col: u8) -> u8 {
        match self {
            CoordMap::Zero => 0,
            CoordMap::Edge => EDGE,
            CoordMap::Row => row,
            CoordMap::Col => col,
            CoordMap::RowFlip => EDGE - row,
            CoordMap::ColFlip => EDGE - col,
        }
    }
}

/// A directed seam crossing: where travel off one face edge resumes.
#[derive(Debug, Clone, Copy)]
pub struct SeamCrossing {
    /// Face entered.
    pub to: u8,
    /// Direction of travel on the entered face.
    pub enter: Dir,
    /// Row on the entered face, from the departed coordinates.
    pub row: CoordMap,
    /// Column on the entered face, from the departed coordinates.
    pub col: CoordMap,
}

const fn seam(to: u8, enter: Dir, row: CoordMap, col: CoordMap) -> SeamCrossing {
    SeamCrossing { to, enter, row, col }
}

/// Alias variant names for table readability.
use CoordMap::{Col, ColFlip, Edge, Row, RowFlip, Zero};
use Dir::{ColMinus, ColPlus, RowMinus, RowPlus};

/// Seam table indexed by `face * 4 + exit_direction`.
///
/// The coordinate remap and entry direction depend only on the exit
/// direction; the destination face also depends on the departed face. Faces
/// 0-2 meet at one cube vertex and 3-5 at the opposite one, which is why
/// row-plus and col-plus exits stay within a triple while row-minus and
/// col-minus exits cross to the other.
pub static SEAMS: [SeamCrossing; FACE_COUNT * 4] = [
    // face 0
    seam(1, ColMinus, Col, Edge),
    seam(2, RowMinus, Edge, Row),
    seam(4, RowPlus, Zero, ColFlip),
    seam(3, ColPlus, RowFlip, Zero),
    // face 1
    seam(2, ColMinus, Col, Edge),
    seam(0, RowMinus, Edge, Row),
    seam(3, RowPlus, Zero, ColFlip),
    seam(5, ColPlus, RowFlip, Zero),
    // face 2
    seam(0, ColMinus, Col, Edge),
    seam(1, RowMinus, Edge, Row),
    seam(5, RowPlus, Zero, ColFlip),
    seam(4, ColPlus, RowFlip, Zero),
    // face 3
    seam(4, ColMinus, Col, Edge),
    seam(5, RowMinus, Edge, Row),
    seam(1, RowPlus, Zero, ColFlip),
    seam(0, ColPlus, RowFlip, Zero),
    // face 4
    seam(5, ColMinus, Col, Edge),
    seam(3, RowMinus, Edge, Row),
    seam(0, RowPlus, Zero, ColFlip),
    seam(2, ColPlus, RowFlip, Zero),
    // face 5
    seam(3, ColMinus, Col, Edge),
    seam(4, RowMinus, Edge, Row),
    seam(2, RowPlus, Zero, ColFlip),
    seam(1, ColPlus, RowFlip, Zero),
];

/// Advances one cell from `pos` travelling `dir`.
///
/// Within a face this is a plain coordinate delta; leaving the face looks up
/// the seam crossing, which also changes the direction of travel relative to
/// the entered face.
pub fn step(pos: CellPos, dir: Dir) -> (CellPos, Dir) {
    let row = pos.row as i8 + dir.row_delta();
    let col = pos.col as i8 + dir.col_delta();
    if (0..=EDGE as i8).contains(&row) && (0..=EDGE as i8).contains(&col) {
        return (CellPos::new(pos.face, row as u8, col as u8), dir);
    }
    let crossing = &SEAMS[pos.face as usize * 4 + dir.index()];
    let landed = CellPos::new(
        crossing.to,
        crossing.row.apply(pos.row, pos.col),
        crossing.col.apply(pos.row, pos.col),
    );
    (landed, crossing.enter)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn every_pos() -> impl Iterator<Item = CellPos> {
        (0..CELL_COUNT).map(CellPos::from_index)
    }

    #[test]
    fn cell_index_roundtrip() {
        for i in 0..CELL_COUNT {
            assert_eq!(CellPos::from_index(i).index(), i);
        }
        assert_eq!(CellPos::new(3, 1, 4).index(), (3 * 5 + 1) * 5 + 4);
    }

    #[test]
    fn rotation_wraps() {
        assert_eq!(Dir::RowPlus.rotated(0), Dir::RowPlus);
        assert_eq!(Dir::RowPlus.rotated(1), Dir::ColPlus);
        assert_eq!(Dir::ColMinus.rotated(1), Dir::RowPlus);
        assert_eq!(Dir::RowMinus.rotated(6), Dir::RowPlus);
        assert_eq!(Dir::ColPlus.reversed(), Dir::ColMinus);
    }

    #[test]
    fn every_face_has_four_incoming_seams() {
        let mut incoming = [0u8; FACE_COUNT];
        for crossing in SEAMS.iter() {
            incoming[crossing.to as usize] += 1;
        }
        assert_eq!(incoming, [4; FACE_COUNT]);
    }

    #[test]
    fn step_stays_in_bounds() {
        for pos in every_pos() {
            for dir in ALL_DIRS {
                let (landed, _) = step(pos, dir);
                assert!(landed.face < FACE_COUNT as u8);
                assert!(landed.row < FACE_SIZE as u8);
                assert!(landed.col < FACE_SIZE as u8);
            }
        }
    }

    #[test]
    fn step_back_returns_home() {
        for pos in every_pos() {
            for dir in ALL_DIRS {
                let (there, facing) = step(pos, dir);
                let (back, returned) = step(there, facing.reversed());
                assert_eq!(back, pos, "round trip from {:?} going {:?}", pos, dir);
                assert_eq!(returned, dir.reversed());
            }
        }
    }

    #[test]
    fn twenty_steps_circle_the_cube() {
        // A great circle on a 5-wide cube is four faces of five cells.
        for start in every_pos() {
            for dir in ALL_DIRS {
                let (mut pos, mut facing) = (start, dir);
                for _ in 0..20 {
                    let next = step(pos, facing);
                    pos = next.0;
                    facing = next.1;
                }
                assert_eq!((pos, facing), (start, dir));
            }
        }
    }

    #[test]
    fn five_steps_cross_exactly_one_seam() {
        for start in every_pos() {
            for dir in ALL_DIRS {
                let (mut pos, mut facing) = (start, dir);
                let mut crossings = 0;
                for _ in 0..5 {
                    let next = step(pos, facing);
                    if next.0.face != pos.face {
                        crossings += 1;
                    }
                    pos = next.0;
                    facing = next.1;
                }
                assert_eq!(crossings, 1, "from {:?} going {:?}", start, dir);
            }
        }
    }

    #[test]
    fn known_crossings() {
        // Off face 0's high-row edge onto face 1, now travelling col-minus.
        let (pos, facing) = step(CellPos::new(0, 4, 2), Dir::RowPlus);
        assert_eq!(pos, CellPos::new(1, 2, 4));
        assert_eq!(facing, Dir::ColMinus);

        // Off face 1's low-col edge onto face 5 with the row flipped.
        let (pos, facing) = step(CellPos::new(1, 2, 0), Dir::ColMinus);
        assert_eq!(pos, CellPos::new(5, 2, 0));
        assert_eq!(facing, Dir::ColPlus);

        // Off face 4's low-row edge back onto face 0.
        let (pos, facing) = step(CellPos::new(4, 0, 2), Dir::RowMinus);
        assert_eq!(pos, CellPos::new(0, 0, 2));
        assert_eq!(facing, Dir::RowPlus);
    }
}
