// SPDX-License-Identifier: Apache-2.0

//! Quads CLI, ranks hands and dumps the lookup tables.
#![warn(clippy::all, rust_2018_idioms, missing_docs)]
use anyhow::{Result, bail};
use clap::{Parser, Subcommand, ValueEnum};
use std::path::PathBuf;

use quads_eval::{Card, FourCardEval, ThreeCardEval};

#[derive(Debug, Parser)]
#[command(about = "Three and four card poker hand evaluator")]
struct Cli {
    /// The table variant to use.
    #[clap(long, short, value_enum, default_value = "three")]
    variant: Variant,
    #[command(subcommand)]
    command: Command,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
enum Variant {
    /// Three card hands.
    Three,
    /// Four card hands.
    Four,
}

#[derive(Debug, Subcommand)]
enum Command {
    /// Ranks the given cards, e.g. `quads rank AH KH QH`.
    Rank {
        /// The cards as rank and suit pairs ("AH KD 2C ...").
        cards: Vec<String>,
    },
    /// Writes the lookup tables to disk, one `product,rank` line per entry.
    Dump {
        /// The directory for the flush and unsuited table files.
        #[clap(long, short, default_value = ".")]
        dir: PathBuf,
    },
}

fn main() -> Result<()> {
    env_logger::builder()
        .filter_level(log::LevelFilter::Info)
        .format_target(false)
        .format_timestamp_millis()
        .init();

    let cli = Cli::parse();
    match cli.command {
        Command::Rank { cards } => rank(cli.variant, &cards),
        Command::Dump { dir } => dump(cli.variant, &dir),
    }
}

fn rank(variant: Variant, cards: &[String]) -> Result<()> {
    let pool = cards
        .iter()
        .map(|s| s.parse())
        .collect::<Result<Vec<Card>>>()?;

    let min_size = match variant {
        Variant::Three => ThreeCardEval::HAND_SIZE,
        Variant::Four => FourCardEval::HAND_SIZE,
    };

    if pool.len() < min_size {
        bail!("need at least {min_size} cards, got {}", pool.len());
    }

    let (rank, class, pct) = match variant {
        Variant::Three => {
            let eval = ThreeCardEval::new();
            let rank = eval.evaluate(&pool, &[]);
            (rank, eval.rank_class(rank)?.to_string(), eval.percentage(rank))
        }
        Variant::Four => {
            let eval = FourCardEval::new();
            let rank = eval.evaluate(&pool, &[]);
            (rank, eval.rank_class(rank)?.to_string(), eval.percentage(rank))
        }
    };

    println!("Rank:       {rank}");
    println!("Class:      {class}");
    println!("Percentage: {pct:.4}");

    Ok(())
}

fn dump(variant: Variant, dir: &std::path::Path) -> Result<()> {
    match variant {
        Variant::Three => {
            let eval = ThreeCardEval::new();
            eval.write_tables_to_disk(
                dir.join("three_card_flush.csv"),
                dir.join("three_card_unsuited.csv"),
            )?;
            log::info!("three card tables written to {}", dir.display());
        }
        Variant::Four => {
            let eval = FourCardEval::new();
            eval.write_tables_to_disk(
                dir.join("four_card_flush.csv"),
                dir.join("four_card_unsuited.csv"),
            )?;
            log::info!("four card tables written to {}", dir.display());
        }
    }

    Ok(())
}
