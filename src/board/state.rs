//! Agents and the aggregate game state.

use super::cell::{Cell, Side, AGENT_COUNT, SIDE_COUNT};
use super::geometry::{step, CellPos, Dir, CELL_COUNT};

/// Turns in a game; score accrues over the second half.
pub const TOTAL_TURNS: u16 = 294;

/// One agent: a position plus the direction it faces.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Agent {
    pub pos: CellPos,
    pub dir: Dir,
}

impl Agent {
    /// Turns in place by quarter turns.
    pub fn rotate(&mut self, quarter_turns: u8) {
        self.dir = self.dir.rotated(quarter_turns);
    }

    /// Moves one cell forward, crossing seams.
    pub fn advance(&mut self) {
        let (pos, dir) = step(self.pos, self.dir);
        self.pos = pos;
        self.dir = dir;
    }
}

/// Complete game state as the simulator sees it.
///
/// Uses fixed-size arrays throughout, so cloning is a flat copy with no heap
/// traffic. `area` caches the per-side owned-cell counts; it is recounted
/// from the field only when a state is first built, and every later cell
/// write goes through [`GameState::paint`] or [`GameState::force_paint`],
/// which keep it in step.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GameState {
    pub turn: u16,
    pub field: [Cell; CELL_COUNT],
    pub agents: [Agent; AGENT_COUNT],
    pub score: [u32; SIDE_COUNT],
    pub area: [u16; SIDE_COUNT],
    /// Remaining special-move charges per agent slot.
    pub special: [i16; AGENT_COUNT],
}

impl GameState {
    /// Builds a state from parts, counting `area` with a full scan.
    pub fn from_parts(
        turn: u16,
        field: [Cell; CELL_COUNT],
        agents: [Agent; AGENT_COUNT],
        score: [u32; SIDE_COUNT],
        special: [i16; AGENT_COUNT],
    ) -> Self {
        let mut state = GameState {
            turn,
            field,
            agents,
            score,
            area: [0; SIDE_COUNT],
            special,
        };
        state.area = state.count_area();
        state
    }

    pub fn cell(&self, pos: CellPos) -> Cell {
        self.field[pos.index()]
    }

    /// Paints the cell at `index` on behalf of `side`, applying the coat
    /// transition rules.
    pub fn paint(&mut self, side: Side, index: usize) {
        self.set_cell(index, self.field[index].painted(side));
    }

    /// Stamps `side`'s full coat on the cell at `index` regardless of its
    /// current state.
    pub fn force_paint(&mut self, side: Side, index: usize) {
        self.set_cell(index, Cell::Full(side));
    }

    /// Recounts owned cells per side from the field.
    pub fn count_area(&self) -> [u16; SIDE_COUNT] {
        let mut area = [0u16; SIDE_COUNT];
        for cell in self.field.iter() {
            if let Some(side) = cell.owner() {
                area[side.index()] += 1;
            }
        }
        area
    }

    /// Single choke point for cell writes: adjusts `area` by the ownership
    /// change before storing.
    fn set_cell(&mut self, index: usize, cell: Cell) {
        let before = self.field[index].owner();
        let after = cell.owner();
        if before != after {
            if let Some(side) = before {
                self.area[side.index()] -= 1;
            }
            if let Some(side) = after {
                self.area[side.index()] += 1;
            }
        }
        self.field[index] = cell;
    }
}
