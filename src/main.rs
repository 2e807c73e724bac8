// SPDX-License-Identifier: AGPL-3.0-or-later
// SPDX-FileCopyrightText: 2025 Jonathan D.A. Jewell
//
//! Graphwalk CLI - random weighted graphs and the six textbook walks

use anyhow::{Context, Result};
use clap::{CommandFactory, Parser, Subcommand};
use graphwalk::commands::{self, OutputFormat, Style};
use graphwalk::config;
use graphwalk::types::Algorithm;
use std::path::PathBuf;
use tracing_subscriber::EnvFilter;

#[derive(Parser)]
#[command(name = "graphwalk")]
#[command(author, version, about, long_about = None)]
#[command(propagate_version = true)]
struct Cli {
    /// Increase verbosity (-v, -vv, -vvv)
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    verbose: u8,

    /// Quiet mode (suppress non-error output)
    #[arg(short, long, global = true)]
    quiet: bool,

    /// Configuration file path
    #[arg(short, long, env = "GRAPHWALK_CONFIG", global = true)]
    config: Option<PathBuf>,

    /// Disable colored output
    #[arg(
        long,
        env = "NO_COLOR",
        global = true,
        value_parser = clap::builder::FalseyValueParser::new()
    )]
    no_color: bool,

    /// Output in JSON format
    #[arg(long, global = true)]
    json: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Generate a random weighted graph
    Generate {
        /// Seed for a reproducible graph
        #[arg(long)]
        seed: Option<u64>,

        /// Output format
        #[arg(short, long, value_enum, default_value_t = OutputFormat::Text)]
        format: OutputFormat,

        /// Output file (stdout if not specified)
        #[arg(short, long)]
        output: Option<PathBuf>,
    },

    /// Run an algorithm over a graph
    Run {
        /// Algorithm to run, by short or display name (defaults to the configured one)
        #[arg(value_parser = str::parse::<Algorithm>)]
        algorithm: Option<Algorithm>,

        /// Graph JSON file (a random graph is generated if omitted)
        #[arg(short, long, conflicts_with = "seed")]
        input: Option<PathBuf>,

        /// Seed for the generated graph
        #[arg(long)]
        seed: Option<u64>,

        /// Start node id (defaults to the first node)
        #[arg(long)]
        start: Option<String>,

        /// Output format
        #[arg(short, long, value_enum, default_value_t = OutputFormat::Text)]
        format: OutputFormat,

        /// Output file (stdout if not specified)
        #[arg(short, long)]
        output: Option<PathBuf>,
    },

    /// List the algorithms, or describe one
    Algorithms {
        /// Algorithm to describe
        name: Option<String>,
    },

    /// Show the effective configuration
    Config {
        /// Dotted configuration key (omit to show everything)
        key: Option<String>,
    },

    /// Generate shell completions
    Completions {
        /// Shell type (bash, zsh, fish, powershell)
        shell: clap_complete::Shell,
    },
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    let config = config::load(cli.config.as_deref()).context("Failed to load configuration")?;

    // Initialize logging
    let log_level = match cli.verbose {
        0 if cli.quiet => "error",
        0 => config.log_level.as_str(),
        1 => "debug",
        _ => "trace",
    };

    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(log_level));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .with_writer(std::io::stderr)
        .init();

    let style = Style::new(config.color && !cli.no_color);
    let pick = |format: OutputFormat| if cli.json { OutputFormat::Json } else { format };

    // Execute command
    match cli.command {
        Commands::Generate { seed, format, output } => {
            commands::generate::run(&config.generator, seed, pick(format), output.as_deref(), style)
        }
        Commands::Run { algorithm, input, seed, start, format, output } => {
            let args = commands::run::RunArgs { algorithm, input, seed, start, output };
            commands::run::run(&config, args, pick(format), style)
        }
        Commands::Algorithms { name } => commands::algorithms::run(name.as_deref(), style),
        Commands::Config { key } => commands::config::run(&config, key.as_deref()),
        Commands::Completions { shell } => commands::completions::run(shell, &mut Cli::command()),
    }
}
