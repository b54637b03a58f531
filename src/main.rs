//! AAC Board - picture board for Augmentative and Alternative Communication
//!
//! Each subcommand loads a board file, acts on it, and reports through
//! stdout. Errors go to stderr with a nonzero exit code.

use aacboard::cli::{AddArgs, CliResult, ConfigArgs, SessionArgs, ShowArgs, SpeakArgs};
use clap::{Parser, Subcommand};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

/// AAC Board - picture board for Augmentative and Alternative Communication
#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
struct Cli {
    /// Enable verbose logging
    #[arg(short, long, global = true)]
    verbose: bool,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// List the pictograms of a category
    Show(ShowArgs),
    /// Add a pictogram to a board file
    Add(AddArgs),
    /// Select pictograms in order and print what they say
    Speak(SpeakArgs),
    /// Run an interactive session
    Session(SessionArgs),
    /// Manage configuration
    Config(ConfigArgs),
}

impl Command {
    fn execute(&self) -> CliResult<()> {
        match self {
            Self::Show(args) => args.execute(),
            Self::Add(args) => args.execute(),
            Self::Speak(args) => args.execute(),
            Self::Session(args) => args.execute(),
            Self::Config(args) => args.execute(),
        }
    }
}

fn main() {
    let cli = Cli::parse();

    // Logs go to stderr so stdout stays parseable
    let filter = if cli.verbose { "debug" } else { "warn" };
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env().unwrap_or_else(|_| filter.into()),
        )
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();

    if let Err(e) = cli.command.execute() {
        eprintln!("Error: {}", e);
        std::process::exit(e.exit_code());
    }
}
