//! Zobrist hashing of board states.
//!
//! Each (intersection, color) pair is assigned an independent random
//! 64-bit value; a position's hash is the XOR of the values of its
//! occupied intersections. Because XOR is its own inverse, the hash is
//! maintained incrementally through placements and captures and stays
//! exactly equal to a from-scratch computation.
//!
//! Tables are normally loaded whole from a `NxN.zt` file generated
//! offline (see the `gen-table` subcommand); a missing or malformed file
//! is fatal to whatever depends on hashing. Once loaded a table is never
//! mutated, so sharing it between workers is safe by construction.

use std::fs;
use std::path::Path;

use anyhow::{Context, Result, ensure};

use crate::board::Board;
use crate::constants::*;
use crate::moves::Point;

/// Size in bytes of a serialized table: two 64-bit values per
/// intersection.
pub const ZOBRIST_TABLE_SIZ: usize = TOTAL_BOARD_SIZ * 2 * 8;

/// The random-value table backing the structural hash.
pub struct ZobristTable {
    iv: Box<[[u64; 2]; TOTAL_BOARD_SIZ]>,
}

impl ZobristTable {
    /// Conventional file name for the compiled board size, like `9x9.zt`.
    pub fn table_file_name() -> String {
        format!("{BOARD_SIZ}x{BOARD_SIZ}.zt")
    }

    /// Load a table from a file of little-endian 64-bit values, two per
    /// intersection.
    ///
    /// # Errors
    ///
    /// Fails if the file cannot be read or is not exactly
    /// [`ZOBRIST_TABLE_SIZ`] bytes.
    pub fn from_file(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let raw = fs::read(path)
            .with_context(|| format!("could not read zobrist table {}", path.display()))?;
        ensure!(
            raw.len() == ZOBRIST_TABLE_SIZ,
            "zobrist table {} has {} bytes, expected {}",
            path.display(),
            raw.len(),
            ZOBRIST_TABLE_SIZ
        );

        let mut iv = Box::new([[0u64; 2]; TOTAL_BOARD_SIZ]);
        for (m, chunk) in raw.chunks_exact(16).enumerate() {
            iv[m][0] = u64::from_le_bytes(chunk[0..8].try_into().expect("chunk size"));
            iv[m][1] = u64::from_le_bytes(chunk[8..16].try_into().expect("chunk size"));
        }
        Ok(ZobristTable { iv })
    }

    /// Generate a table in-process from a seed. Deterministic for a given
    /// seed and board size.
    pub fn generate(seed: u64) -> Self {
        let mut rng = fastrand::Rng::with_seed(seed);
        let mut iv = Box::new([[0u64; 2]; TOTAL_BOARD_SIZ]);
        for entry in iv.iter_mut() {
            entry[0] = rng.u64(..);
            entry[1] = rng.u64(..);
        }
        ZobristTable { iv }
    }

    /// Write the table in the format read by [`ZobristTable::from_file`].
    ///
    /// # Errors
    ///
    /// Fails if the file cannot be written.
    pub fn save(&self, path: impl AsRef<Path>) -> Result<()> {
        let path = path.as_ref();
        let mut raw = Vec::with_capacity(ZOBRIST_TABLE_SIZ);
        for entry in self.iv.iter() {
            raw.extend_from_slice(&entry[0].to_le_bytes());
            raw.extend_from_slice(&entry[1].to_le_bytes());
        }
        fs::write(path, raw)
            .with_context(|| format!("could not write zobrist table {}", path.display()))
    }

    /// Compute the hash of a board state from scratch.
    pub fn new_hash(&self, b: &Board) -> u64 {
        let mut hash = 0u64;
        for (m, &c) in b.p.iter().enumerate() {
            if c != EMPTY {
                hash ^= self.iv[m][(c - 1) as usize];
            }
        }
        hash
    }

    /// Fold one stone in or out of a hash.
    ///
    /// `stone` is the color being placed or removed; the update is the
    /// same XOR either way.
    #[inline]
    pub fn update_hash(&self, hash: &mut u64, m: Point, stone: u8) {
        debug_assert!(stone == BLACK_STONE || stone == WHITE_STONE);
        *hash ^= self.iv[m][(stone - 1) as usize];
    }
}
