//! Facepaint bot library.
//!
//! Exposes the cube board, turn simulator, look-ahead search, server
//! protocol, and the offline arena for use by integration tests and the
//! binary entry points.

pub mod arena;
pub mod board;
pub mod bot;
pub mod client;
pub mod config;
pub mod eval;
pub mod protocol;
pub mod search;
pub mod sim;
