//! Goban-Core command line utility.
//!
//! ## Usage
//!
//! - `goban-core demo` - Play a short scripted sequence and show the
//!   board, its hash, and its canonical reduction
//! - `goban-core gen-table` - Generate the Zobrist table file for the
//!   compiled board size

use std::path::PathBuf;

use anyhow::Result;
use clap::{Parser, Subcommand};

use goban_core::board::{Board, reduce_auto};
use goban_core::constants::BOARD_SIZ;
use goban_core::moves::{Move, coord_parse_alpha_num, coord_to_alpha_num};
use goban_core::state_changes::attempt_play;
use goban_core::zobrist::ZobristTable;

/// Rules and canonicalization core of a Go engine
#[derive(Parser)]
#[command(name = "goban-core")]
#[command(author, version, about, long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Subcommand)]
enum Commands {
    /// Run a short demo of play, hashing and canonical reduction
    Demo,
    /// Write a Zobrist table file for the compiled board size
    GenTable {
        /// Output file (defaults to the NxN.zt convention)
        #[arg(long)]
        out: Option<PathBuf>,
        /// Seed for the table contents
        #[arg(long, default_value_t = 0)]
        seed: u64,
    },
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    match cli.command {
        Some(Commands::GenTable { out, seed }) => gen_table(out, seed),
        Some(Commands::Demo) | None => run_demo(),
    }
}

fn gen_table(out: Option<PathBuf>, seed: u64) -> Result<()> {
    let path = out.unwrap_or_else(|| PathBuf::from(ZobristTable::table_file_name()));
    let table = ZobristTable::generate(seed);
    table.save(&path)?;
    println!("wrote {} ({BOARD_SIZ}x{BOARD_SIZ})", path.display());
    Ok(())
}

fn run_demo() -> Result<()> {
    println!("Goban-Core: Go rules and canonicalization core\n");

    let table = ZobristTable::generate(0);
    let mut board = Board::new();
    let mut is_black = true;

    for coord in ["C4", "D4", "E4", "G7", "D5", "G6", "D3"] {
        let Move::Board(pt) = coord_parse_alpha_num(coord) else {
            continue;
        };
        match attempt_play(&mut board, is_black, pt) {
            Ok(captured) => {
                let color = if is_black { "black" } else { "white" };
                println!("{color} {coord}: {captured} captured");
                is_black = !is_black;
            }
            Err(err) => println!("{coord}: {err}"),
        }
    }

    println!("\n{board}");
    println!("hash: {:016x}", table.new_hash(&board));

    let mut canonical = board.clone();
    let reduction = reduce_auto(&mut canonical, is_black);
    println!(
        "canonical under {:?} (colors inverted: {})",
        reduction.transform, reduction.inverted
    );
    println!("\n{canonical}");
    if let Move::Board(pt) = canonical.last_played {
        println!("last move maps to {}", coord_to_alpha_num(pt));
    }
    Ok(())
}
