//! CLI frontend for the Farkle dice game.

mod commands;
mod console;

use std::path::PathBuf;
use std::process;

use clap::{ArgAction, Parser, Subcommand};
use tracing_subscriber::filter::LevelFilter;

#[derive(Parser)]
#[command(
    name = "farkle",
    about = "Play, score and simulate the Farkle dice game",
    version,
    propagate_version = true
)]
struct Cli {
    /// Log more to stderr (-v info, -vv debug)
    #[arg(short, long, global = true, action = ArgAction::Count)]
    verbose: u8,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Play an interactive game at the console
    Play {
        /// Player names, in turn order
        #[arg(short, long, num_args = 1.., default_value = "Player")]
        players: Vec<String>,

        /// Score needed to win
        #[arg(short, long, default_value = "10000")]
        target: u32,

        /// RNG seed for reproducible dice
        #[arg(short, long)]
        seed: Option<u64>,

        /// JSON scoring table to use instead of the standard rules
        #[arg(short, long)]
        catalog: Option<PathBuf>,
    },

    /// List every scoring selection for a roll
    Score {
        /// Die values (1-6), up to six
        #[arg(required = true)]
        dice: Vec<u8>,

        /// Print JSON instead of a table
        #[arg(long)]
        json: bool,

        /// JSON scoring table to use instead of the standard rules
        #[arg(short, long)]
        catalog: Option<PathBuf>,
    },

    /// Show the scoring patterns
    Catalog {
        /// Print the table as JSON rows
        #[arg(long)]
        json: bool,

        /// JSON scoring table to show instead of the standard rules
        #[arg(short, long)]
        catalog: Option<PathBuf>,
    },

    /// Simulate many turns with a threshold bot
    Simulate {
        /// Number of turns to play
        #[arg(short = 'n', long, default_value = "1000")]
        turns: u32,

        /// Bank once the turn score reaches this
        #[arg(long, default_value = "300")]
        bank_at: u32,

        /// Bank when fewer dice than this would be rolled
        #[arg(long, default_value = "2")]
        min_dice: usize,

        /// RNG seed for deterministic simulation
        #[arg(short, long, default_value = "42")]
        seed: u64,

        /// Target score (turns past it end as instant wins)
        #[arg(short, long, default_value = "10000")]
        target: u32,

        /// JSON scoring table to use instead of the standard rules
        #[arg(short, long)]
        catalog: Option<PathBuf>,
    },
}

fn init_tracing(verbose: u8) {
    let level = match verbose {
        0 => LevelFilter::WARN,
        1 => LevelFilter::INFO,
        _ => LevelFilter::DEBUG,
    };
    tracing_subscriber::fmt()
        .with_max_level(level)
        .with_writer(std::io::stderr)
        .with_target(false)
        .init();
}

fn main() {
    let cli = Cli::parse();
    init_tracing(cli.verbose);

    let result = match cli.command {
        Commands::Play {
            players,
            target,
            seed,
            catalog,
        } => commands::play::run(&players, target, seed, catalog.as_deref()),
        Commands::Score {
            dice,
            json,
            catalog,
        } => commands::score::run(&dice, json, catalog.as_deref()),
        Commands::Catalog { json, catalog } => commands::catalog::run(json, catalog.as_deref()),
        Commands::Simulate {
            turns,
            bank_at,
            min_dice,
            seed,
            target,
            catalog,
        } => commands::simulate::run(
            turns,
            bank_at,
            min_dice,
            seed,
            target,
            catalog.as_deref(),
        ),
    };

    if let Err(e) = result {
        eprintln!("error: {e}");
        process::exit(1);
    }
}
