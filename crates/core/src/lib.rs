//! Core supply logic - pure, deterministic, and testable
//!
//! This crate contains the piece-supply bookkeeping for a block-stacking game:
//! a bounded circular queue of upcoming pieces and a bounded stack of reserved
//! pieces, plus the operations that move pieces between them.
//! It has **zero dependencies** on terminal, menu, or other I/O, making it:
//!
//! - **Deterministic**: the kind selector is injected, so a seed (or a script)
//!   fully determines the generated pieces
//! - **Testable**: every operation returns a structured outcome or a typed
//!   rejection instead of printing
//! - **Allocation-free**: both containers are fixed-size
//!
//! # Module Structure
//!
//! - [`ring`]: fixed-capacity FIFO ring buffer
//! - [`stack`]: fixed-capacity LIFO reserve stack
//! - [`rng`]: seeded LCG and the pluggable [`KindSelector`]
//! - [`supply`]: [`PieceSupply`] and its operation set
//! - [`error`]: rejection reasons
//! - [`snapshot`]: copyable view of both containers for renderers
//!
//! # Rules
//!
//! - The queue starts with 5 pieces (ids 0..4) and holds at most 10
//! - Every piece removed from the queue by play or reserve is replaced by one
//!   freshly generated piece at the back
//! - The stack holds at most 3 pieces and is only filled by reserve
//! - Swaps relocate pieces in place; they never generate or discard
//!
//! # Example
//!
//! ```
//! use piece_supply_core::{PieceSupply, SupplyError};
//!
//! let mut supply = PieceSupply::with_seed(12345);
//! assert_eq!(supply.queue_len(), 5);
//!
//! let played = supply.play().unwrap();
//! assert_eq!(played.played.id, 0);
//!
//! let reserved = supply.reserve().unwrap();
//! assert_eq!(reserved.reserved.id, 1);
//! assert_eq!(supply.top().map(|p| p.id), Some(1));
//!
//! supply.use_reserved().unwrap();
//! assert_eq!(supply.use_reserved(), Err(SupplyError::StackEmpty));
//! ```

pub mod error;
pub mod ring;
pub mod rng;
pub mod snapshot;
pub mod stack;
pub mod supply;

pub use piece_supply_types as types;

// Re-export commonly used types for convenience
pub use error::SupplyError;
pub use ring::RingQueue;
pub use rng::{FnSelector, KindSelector, ScriptedKinds, SimpleRng};
pub use snapshot::SupplySnapshot;
pub use stack::ReserveStack;
pub use supply::{
    CommandOutcome, PieceSupply, PlayOutcome, Replenish, ReserveOutcome, SwapFront, SwapReport,
};
