//! Board geometry and stone encoding constants.
//!
//! The board side length is fixed at compile time and selected by Cargo
//! features, so every grid in the crate is a statically sized array.
//!
//! # Board Size Configuration
//!
//! - `board9x9` (default): 9x9 board
//! - `board13x13`: 13x13 board
//! - `board19x19`: 19x19 board
//!
//! To compile for a specific board size:
//! ```sh
//! cargo build                                               # 9x9 (default)
//! cargo build --no-default-features --features board19x19   # 19x19
//! ```

// =============================================================================
// Board Geometry
// =============================================================================

/// Board side length (NxN). Standard Go sizes are 9, 13, or 19.
#[cfg(feature = "board9x9")]
pub const BOARD_SIZ: usize = 9;

#[cfg(feature = "board13x13")]
pub const BOARD_SIZ: usize = 13;

#[cfg(feature = "board19x19")]
pub const BOARD_SIZ: usize = 19;

// Compile-time check: exactly one board size feature must be enabled
#[cfg(any(
    all(feature = "board9x9", feature = "board13x13"),
    all(feature = "board9x9", feature = "board19x19"),
    all(feature = "board13x13", feature = "board19x19"),
))]
compile_error!("Cannot enable more than one board size feature at the same time");

#[cfg(not(any(feature = "board9x9", feature = "board13x13", feature = "board19x19")))]
compile_error!(
    "Must enable exactly one board size feature: 'board9x9', 'board13x13' or 'board19x19'"
);

/// Number of intersections on the board.
pub const TOTAL_BOARD_SIZ: usize = BOARD_SIZ * BOARD_SIZ;

/// Bytes needed to store a full grid at 2 bits per intersection.
pub const PACKED_BOARD_SIZ: usize = TOTAL_BOARD_SIZ.div_ceil(4);

// =============================================================================
// Stone Cell Encoding
// =============================================================================

// These values are the 2-bit packed-storage domain; EMPTY must stay 0 so a
// zeroed grid is an empty board.

/// Empty intersection.
pub const EMPTY: u8 = 0;

/// Black stone.
pub const BLACK_STONE: u8 = 1;

/// White stone.
pub const WHITE_STONE: u8 = 2;

/// Marker for intersections outside the board in neighborhood codecs.
pub const ILLEGAL: u8 = 3;

// =============================================================================
// Display Characters
// =============================================================================

/// Character used when rendering an empty intersection.
pub const EMPTY_STONE_CHAR: char = '.';

/// Character used when rendering a black stone.
pub const BLACK_STONE_CHAR: char = 'X';

/// Character used when rendering a white stone.
pub const WHITE_STONE_CHAR: char = 'O';
