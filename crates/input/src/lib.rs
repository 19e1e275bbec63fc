//! Console input module (driver-facing).
//!
//! Maps a line typed at the menu prompt into a [`MenuSelection`]. Unknown
//! input is a selection of its own rather than an error, so the driver can
//! answer with a message and keep looping.

pub mod map;

pub use piece_supply_types as types;

pub use map::{parse_selection, MenuSelection};
