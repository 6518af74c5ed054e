//! Board representation and game-state types.
//!
//! Contains the cube geometry and seam table, cell paint states, agent
//! actions with the side-view permutation, and the overall game state.

pub mod action;
pub mod cell;
pub mod geometry;
pub mod state;

pub use action::{batch_slot, shift_face, Action, VIEW_SHIFT};
pub use cell::{Cell, Side, AGENT_COUNT, ALL_SIDES, SIDE_COUNT};
pub use geometry::{
    step, CellPos, CoordMap, Dir, SeamCrossing, ALL_DIRS, CELL_COUNT, FACE_COUNT, FACE_SIZE, SEAMS,
};
pub use state::{Agent, GameState, TOTAL_TURNS};
