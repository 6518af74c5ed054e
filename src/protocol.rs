//! Wire types for the game server's JSON payloads.
//!
//! The move endpoint answers with a full snapshot of the game: the field as
//! a 6x5x5 grid of `[owner, thickness]` pairs, the six agents as
//! `[face, row, col, dir]` quadruples, plus turn, scores, and special-move
//! charges. Payloads for terminal statuses carry only `status`; the other
//! fields fall back to defaults and are not decoded.

use serde::Deserialize;

use crate::board::{
    Action, Agent, Cell, CellPos, Dir, GameState, AGENT_COUNT, CELL_COUNT, FACE_COUNT, FACE_SIZE,
    SIDE_COUNT,
};

/// Response of the move endpoint.
#[derive(Debug, Clone, Deserialize)]
pub struct MoveResponse {
    /// `"ok"`, `"already_moved"`, or a terminal status.
    pub status: String,
    #[serde(default)]
    pub turn: u16,
    /// Last action per agent slot as the server encodes it.
    #[serde(default, rename = "move")]
    pub moves: [i32; AGENT_COUNT],
    #[serde(default)]
    pub score: [u32; SIDE_COUNT],
    #[serde(default)]
    pub field: [[[[i8; 2]; FACE_SIZE]; FACE_SIZE]; FACE_COUNT],
    #[serde(default)]
    pub agent: [[i8; 4]; AGENT_COUNT],
    #[serde(default)]
    pub special: [i16; AGENT_COUNT],
}

/// Response of the practice-match start endpoint.
#[derive(Debug, Clone, Deserialize)]
pub struct StartResponse {
    /// `"ok"` or `"started"` when a game is available.
    pub status: String,
    #[serde(default)]
    pub game_id: u64,
}

#[derive(Debug, PartialEq, Eq, thiserror::Error)]
pub enum SnapshotError {
    #[error("cell ({face},{row},{col}) carries invalid pair [{owner},{val}]")]
    BadCell { face: u8, row: u8, col: u8, owner: i8, val: i8 },

    #[error("agent {slot} is off the cube at ({face},{row},{col})")]
    BadAgentPos { slot: usize, face: i8, row: i8, col: i8 },

    #[error("agent {slot} faces invalid direction {dir}")]
    BadAgentDir { slot: usize, dir: i8 },
}

/// Validates a snapshot and builds the simulator state from it.
pub fn decode_state(snapshot: &MoveResponse) -> Result<GameState, SnapshotError> {
    let mut field = [Cell::Clear; CELL_COUNT];
    for (face, rows) in snapshot.field.iter().enumerate() {
        for (row, cols) in rows.iter().enumerate() {
            for (col, pair) in cols.iter().enumerate() {
                let [owner, val] = *pair;
                let pos = CellPos::new(face as u8, row as u8, col as u8);
                field[pos.index()] =
                    Cell::from_wire(owner, val).ok_or(SnapshotError::BadCell {
                        face: pos.face,
                        row: pos.row,
                        col: pos.col,
                        owner,
                        val,
                    })?;
            }
        }
    }

    let mut agents = [Agent { pos: CellPos::new(0, 0, 0), dir: Dir::RowPlus }; AGENT_COUNT];
    for (slot, quad) in snapshot.agent.iter().enumerate() {
        let [face, row, col, dir] = *quad;
        if !(0..FACE_COUNT as i8).contains(&face)
            || !(0..FACE_SIZE as i8).contains(&row)
            || !(0..FACE_SIZE as i8).contains(&col)
        {
            return Err(SnapshotError::BadAgentPos { slot, face, row, col });
        }
        if !(0..4).contains(&dir) {
            return Err(SnapshotError::BadAgentDir { slot, dir });
        }
        agents[slot] = Agent {
            pos: CellPos::new(face as u8, row as u8, col as u8),
            dir: Dir::from_index(dir as u8),
        };
    }

    Ok(GameState::from_parts(
        snapshot.turn,
        field,
        agents,
        snapshot.score,
        snapshot.special,
    ))
}

/// Path token submitting `action` to the move endpoint.
///
/// Steps submit their rotation digit, dashes append an `s`, and warps name
/// the target cell as `face-row-col`.
///
/// # Panics
///
/// Panics on [`Action::Hold`]; the protocol has no token for sitting still,
/// an agent always submits a move.
pub fn move_token(action: Action) -> String {
    match action {
        Action::Step(turns) => turns.to_string(),
        Action::Dash(turns) => format!("{turns}s"),
        Action::Warp(pos) => format!("{}-{}-{}", pos.face, pos.row, pos.col),
        Action::Hold => panic!("hold has no move token"),
    }
}
