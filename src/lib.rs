//! Piece supply (workspace facade crate).
//!
//! Re-exports the workspace crates as `piece_supply::{core,input,term,types}` and
//! hosts the console driver shared by the binary and the integration tests.

pub use piece_supply_core as core;
pub use piece_supply_input as input;
pub use piece_supply_term as term;
pub use piece_supply_types as types;

pub mod config;
pub mod driver;
