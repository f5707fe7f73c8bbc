//! # Price Gap CLI (`pgap`)
//!
//! ## Usage
//!
//! ```bash
//! pgap --config ./config/pgap.toml <command>
//! ```
//!
//! ## Commands
//!
//! | Command | Description |
//! |---------|-------------|
//! | `pgap find --gap <k> [VALUES]...` | Find two positions whose values differ by `k` |
//! | `pgap serve` | Start the HTTP server |
//!
//! ## Examples
//!
//! ```bash
//! # Values as arguments (space or comma separated)
//! pgap find --gap 2 4 1 6 3 8
//! pgap find --gap 2 4,1,6,3,8
//!
//! # Negative values go after `--`
//! pgap find --gap 2 -- -3 7 1 -1 4
//!
//! # From a file or stdin, JSON output
//! pgap find --gap 0 --input prices.txt --json
//! echo "[5, 5, 5]" | pgap find --gap 0
//!
//! # Smallest (i, j) instead of smallest j
//! pgap find --gap 2 --tie-break lexicographic 1 10 12 3
//! ```

use clap::{Parser, Subcommand};
use std::path::PathBuf;

use price_gap::{config, find, input, logging, server, TieBreak};

/// Price Gap CLI: find two positions in an integer sequence whose values
/// differ by an exact gap.
#[derive(Parser)]
#[command(
    name = "pgap",
    about = "Price Gap: find two positions whose values differ by an exact gap",
    version
)]
struct Cli {
    /// Path to configuration file (TOML).
    ///
    /// Defaults to `./config/pgap.toml`. `find` falls back to built-in
    /// defaults when the file does not exist; `serve` requires it.
    #[arg(long, global = true, default_value = "./config/pgap.toml")]
    config: PathBuf,

    #[command(subcommand)]
    command: Commands,
}

/// Top-level CLI commands.
#[derive(Subcommand)]
enum Commands {
    /// Find two positions whose values differ by exactly the gap.
    ///
    /// Values come from the positional arguments, from `--input`, or from
    /// stdin when it is piped and no values are given. Prints the pair and
    /// its values, or `no pair found`.
    Find {
        /// Target gap `k`. Must be non-negative.
        #[arg(short = 'k', long, allow_negative_numbers = true)]
        gap: i64,

        /// Sequence values, space or comma separated.
        #[arg(value_delimiter = ',', allow_negative_numbers = true, conflicts_with = "input")]
        values: Vec<i64>,

        /// Read the sequence from a file (`-` for stdin).
        #[arg(long)]
        input: Option<PathBuf>,

        /// Tie-break policy: `earliest_second` or `lexicographic`.
        /// Overrides `[search].tie_break`.
        #[arg(long)]
        tie_break: Option<TieBreak>,

        /// Print the result as JSON.
        #[arg(long)]
        json: bool,
    },

    /// Start the HTTP server.
    ///
    /// Binds to the address configured in `[server].bind` and serves
    /// `POST /api/price-gap-pair`, `GET /health` and `GET /`.
    Serve,
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    match cli.command {
        Commands::Find {
            gap,
            values,
            input: input_path,
            tie_break,
            json,
        } => {
            let cfg = config::load_config_or_default(&cli.config)?;
            logging::init(&cfg.logging);
            if !cli.config.exists() {
                tracing::debug!("no config at {}, using defaults", cli.config.display());
            }

            let values = match input_path {
                Some(path) => input::read_sequence(&path)?,
                None if values.is_empty() && input::stdin_is_piped() => input::read_stdin()?,
                None => values,
            };

            find::run_find(&cfg, &values, gap, tie_break, json)?;
        }
        Commands::Serve => {
            let cfg = config::load_config(&cli.config)?;
            logging::init(&cfg.logging);
            server::run_server(&cfg).await?;
        }
    }

    Ok(())
}
