//! Goban-Core: the rules and canonicalization core of a Go engine.
//!
//! This crate represents square Go positions, applies moves under the
//! game's legality rules (capture, suicide, simple ko), reduces positions
//! to a canonical symmetry representative for deduplication, and maintains
//! a Zobrist hash that stays consistent with every mutation. Search,
//! evaluation, and game-record handling are left to collaborators built on
//! these primitives.
//!
//! The board side length is fixed at compile time through Cargo features
//! (9x9 by default; see [`constants`]).
//!
//! ## Modules
//!
//! - [`constants`] - Board dimensions and stone encoding
//! - [`moves`] - Moves, coordinates and textual notations
//! - [`board`] - Board state, packed encoding, canonical reduction
//! - [`matrix`] - The 8 square symmetries and their coordinate mapping
//! - [`state_changes`] - Stone placement, captures, ko, liberty analysis
//! - [`zobrist`] - Structural hashing of positions
//!
//! ## Example
//!
//! ```
//! use goban_core::board::{Board, reduce_auto};
//! use goban_core::moves::coord_parse_alpha_num;
//! use goban_core::moves::Move;
//! use goban_core::state_changes::attempt_play;
//!
//! let mut board = Board::new();
//!
//! // Play a move
//! if let Move::Board(pt) = coord_parse_alpha_num("D4") {
//!     attempt_play(&mut board, true, pt).expect("legal move");
//! }
//!
//! // Normalize the position before consulting a shared cache
//! let reduction = reduce_auto(&mut board, true);
//! println!("canonical under {:?}", reduction.transform);
//! ```

pub mod board;
pub mod constants;
pub mod matrix;
pub mod moves;
pub mod state_changes;
pub mod zobrist;
