//! choicekit CLI: validate, inspect and answer selection questions.

use std::path::PathBuf;
use std::process;

use clap::{Parser, Subcommand};

use crate::config::OutputFormat;

mod commands;
mod config;

#[derive(Parser)]
#[command(
    name = "choicekit",
    version,
    about = "Selection question scoring and interaction reporting"
)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Validate question set TOML files
    Validate {
        /// Path to question set file or directory
        #[arg(long)]
        question_set: PathBuf,
    },

    /// Show a question's choices and interaction object
    Inspect {
        /// Path to question set file or directory
        #[arg(long)]
        question_set: PathBuf,

        /// Question id
        #[arg(long)]
        question: String,
    },

    /// Submit an answer and print the judgement
    Answer {
        /// Path to question set file or directory
        #[arg(long)]
        question_set: PathBuf,

        /// Question id
        #[arg(long)]
        question: String,

        /// Selected item numbers, 1-based and comma-separated (e.g. "1,3")
        #[arg(long)]
        select: String,

        /// Output format (defaults to the configured format)
        #[arg(long, value_enum)]
        format: Option<OutputFormat>,

        /// Save the answer state to the configured state directory
        #[arg(long)]
        save: bool,

        /// Append the interaction record as a JSON line to this file
        #[arg(long)]
        track: Option<PathBuf>,

        /// Config file path
        #[arg(long)]
        config: Option<PathBuf>,
    },

    /// Replay a saved answer state
    Restore {
        /// Path to question set file or directory
        #[arg(long)]
        question_set: PathBuf,

        /// Saved state JSON
        #[arg(long)]
        state: PathBuf,

        /// Output format (defaults to the configured format)
        #[arg(long, value_enum)]
        format: Option<OutputFormat>,

        /// Config file path
        #[arg(long)]
        config: Option<PathBuf>,
    },

    /// Create starter config and example question set
    Init,
}

fn main() {
    tracing_subscriber::fmt()
        .with_writer(std::io::stderr)
        .with_env_filter(
            tracing_subscriber::EnvFilter::from_default_env()
                .add_directive("choicekit=info".parse().expect("valid directive")),
        )
        .init();

    let cli = Cli::parse();

    let result = match cli.command {
        Commands::Validate { question_set } => commands::validate::execute(question_set),
        Commands::Inspect {
            question_set,
            question,
        } => commands::inspect::execute(question_set, question),
        Commands::Answer {
            question_set,
            question,
            select,
            format,
            save,
            track,
            config,
        } => commands::answer::execute(question_set, question, select, format, save, track, config),
        Commands::Restore {
            question_set,
            state,
            format,
            config,
        } => commands::restore::execute(question_set, state, format, config),
        Commands::Init => commands::init::execute(),
    };

    if let Err(e) = result {
        eprintln!("Error: {e:#}");
        process::exit(1);
    }
}
