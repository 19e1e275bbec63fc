//! Core types module - shared data structures and constants
//!
//! This module defines the fundamental types used throughout the workspace.
//! All types are plain data with no behaviour beyond parsing and formatting,
//! making them usable in any context (core bookkeeping, terminal rendering,
//! JSON snapshots).
//!
//! # Container Dimensions
//!
//! | Constant | Value | Description |
//! |----------|-------|-------------|
//! | `QUEUE_CAPACITY` | 10 | Upcoming-piece ring buffer size |
//! | `QUEUE_FILL` | 5 | Steady-state queue length after (re)initialization |
//! | `STACK_CAPACITY` | 3 | Reserved-piece stack size |
//! | `TRIPLE_SWAP_WIDTH` | 3 | Entries exchanged by a triple swap |
//!
//! # Examples
//!
//! ```
//! use piece_supply_types::{PieceKind, SupplyCommand, QUEUE_CAPACITY, STACK_CAPACITY};
//!
//! // Parse from string (case-insensitive)
//! let parsed = PieceKind::from_str("t").unwrap();
//! assert_eq!(parsed, PieceKind::T);
//!
//! // Commands map to menu numbers
//! assert_eq!(SupplyCommand::from_menu_number(2), Some(SupplyCommand::Reserve));
//!
//! assert_eq!(QUEUE_CAPACITY, 10);
//! assert_eq!(STACK_CAPACITY, 3);
//! ```

use std::fmt;

/// Capacity of the upcoming-piece queue
pub const QUEUE_CAPACITY: usize = 10;

/// Queue length established by initialization and kept by play/reserve
pub const QUEUE_FILL: usize = 5;

/// Capacity of the reserve stack
pub const STACK_CAPACITY: usize = 3;

/// Number of queue/stack positions exchanged by a triple swap
pub const TRIPLE_SWAP_WIDTH: usize = 3;

/// Menu number that ends a console session
pub const QUIT_MENU_NUMBER: u8 = 0;


/// The four piece shapes drawn by the supply
///
/// - **I**: straight bar
/// - **O**: 2x2 square
/// - **T**: T-shaped
/// - **L**: L-shaped
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum PieceKind {
    I,
    O,
    T,
    L,
}

impl PieceKind {
    /// Every kind, in selection order
    pub const ALL: [PieceKind; 4] = [PieceKind::I, PieceKind::O, PieceKind::T, PieceKind::L];

    /// Parse piece kind from string (case-insensitive)
    ///
    /// # Examples
    ///
    /// ```
    /// use piece_supply_types::PieceKind;
    ///
    /// assert_eq!(PieceKind::from_str("i"), Some(PieceKind::I));
    /// assert_eq!(PieceKind::from_str("O"), Some(PieceKind::O));
    /// assert_eq!(PieceKind::from_str("z"), None);
    /// ```
    pub fn from_str(s: &str) -> Option<Self> {
        match s.to_lowercase().as_str() {
            "i" => Some(PieceKind::I),
            "o" => Some(PieceKind::O),
            "t" => Some(PieceKind::T),
            "l" => Some(PieceKind::L),
            _ => None,
        }
    }

    /// Parse piece kind from a single letter (case-insensitive)
    pub fn from_char(c: char) -> Option<Self> {
        match c.to_ascii_uppercase() {
            'I' => Some(PieceKind::I),
            'O' => Some(PieceKind::O),
            'T' => Some(PieceKind::T),
            'L' => Some(PieceKind::L),
            _ => None,
        }
    }

    /// Uppercase letter used in rendered tokens
    pub fn as_char(&self) -> char {
        match self {
            PieceKind::I => 'I',
            PieceKind::O => 'O',
            PieceKind::T => 'T',
            PieceKind::L => 'L',
        }
    }

    /// Convert to lowercase string representation
    ///
    /// # Examples
    ///
    /// ```
    /// use piece_supply_types::PieceKind;
    ///
    /// assert_eq!(PieceKind::I.as_str(), "i");
    /// assert_eq!(PieceKind::L.as_str(), "l");
    /// ```
    pub fn as_str(&self) -> &'static str {
        match self {
            PieceKind::I => "i",
            PieceKind::O => "o",
            PieceKind::T => "t",
            PieceKind::L => "l",
        }
    }
}

impl fmt::Display for PieceKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_char())
    }
}

/// A single supplied piece.
///
/// Pieces are only created by the supply's generator. The `id` is unique per
/// supply and strictly increasing in creation order, so it doubles as a
/// creation timestamp when tracing a piece through queue and stack.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Piece {
    pub kind: PieceKind,
    pub id: u32,
}

impl Piece {
    pub fn new(kind: PieceKind, id: u32) -> Self {
        Self { kind, id }
    }
}

impl fmt::Display for Piece {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "[{} {}]", self.kind, self.id)
    }
}

/// Operations a driver can request from the supply
///
/// Menu numbers follow the interactive console layout (1-5, with 0 reserved
/// for exit by the driver).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "camelCase"))]
pub enum SupplyCommand {
    /// Play the front piece of the queue
    Play,
    /// Move the front piece of the queue onto the reserve stack
    Reserve,
    /// Pop and use the top reserved piece
    UseReserved,
    /// Exchange the queue front with the stack top
    SwapFront,
    /// Exchange the three front queue pieces with the three stack pieces
    SwapTriple,
}

impl SupplyCommand {
    /// Every command, in menu order
    pub const ALL: [SupplyCommand; 5] = [
        SupplyCommand::Play,
        SupplyCommand::Reserve,
        SupplyCommand::UseReserved,
        SupplyCommand::SwapFront,
        SupplyCommand::SwapTriple,
    ];

    /// Parse a command name (case-insensitive)
    ///
    /// # Examples
    ///
    /// ```
    /// use piece_supply_types::SupplyCommand;
    ///
    /// assert_eq!(SupplyCommand::from_str("play"), Some(SupplyCommand::Play));
    /// assert_eq!(SupplyCommand::from_str("Use"), Some(SupplyCommand::UseReserved));
    /// assert_eq!(SupplyCommand::from_str("hold"), None);
    /// ```
    pub fn from_str(s: &str) -> Option<Self> {
        match s.to_lowercase().as_str() {
            "play" => Some(SupplyCommand::Play),
            "reserve" => Some(SupplyCommand::Reserve),
            "use" | "usereserved" => Some(SupplyCommand::UseReserved),
            "swap" | "swapfront" => Some(SupplyCommand::SwapFront),
            "triple" | "swaptriple" => Some(SupplyCommand::SwapTriple),
            _ => None,
        }
    }

    /// Short command name accepted by [`SupplyCommand::from_str`]
    pub fn as_str(&self) -> &'static str {
        match self {
            SupplyCommand::Play => "play",
            SupplyCommand::Reserve => "reserve",
            SupplyCommand::UseReserved => "use",
            SupplyCommand::SwapFront => "swap",
            SupplyCommand::SwapTriple => "triple",
        }
    }

    pub fn from_menu_number(n: u8) -> Option<Self> {
        match n {
            1 => Some(SupplyCommand::Play),
            2 => Some(SupplyCommand::Reserve),
            3 => Some(SupplyCommand::UseReserved),
            4 => Some(SupplyCommand::SwapFront),
            5 => Some(SupplyCommand::SwapTriple),
            _ => None,
        }
    }

    pub fn menu_number(&self) -> u8 {
        match self {
            SupplyCommand::Play => 1,
            SupplyCommand::Reserve => 2,
            SupplyCommand::UseReserved => 3,
            SupplyCommand::SwapFront => 4,
            SupplyCommand::SwapTriple => 5,
        }
    }

    /// Menu label shown by console drivers
    pub fn label(&self) -> &'static str {
        match self {
            SupplyCommand::Play => "Play the front piece of the queue",
            SupplyCommand::Reserve => "Send the front piece to the reserve stack",
            SupplyCommand::UseReserved => "Use the top reserved piece",
            SupplyCommand::SwapFront => "Swap the queue front with the stack top",
            SupplyCommand::SwapTriple => "Swap the first 3 queue pieces with the 3 reserved pieces",
        }
    }
}
