//! Console rendering for the piece supply.
//!
//! The core never prints; this crate turns snapshots and command outcomes into
//! text. [`view`] holds the pure string builders (easy to assert on in tests),
//! [`renderer`] writes them to any `io::Write`, optionally colored per piece
//! kind through crossterm.

pub mod renderer;
pub mod view;

pub use piece_supply_core as core;
pub use piece_supply_types as types;

pub use renderer::{kind_color, ConsoleRenderer};
pub use view::{
    describe_invalid, describe_outcome, render_menu, render_queue, render_stack, EMPTY_MARKER,
};
