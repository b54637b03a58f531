//! Interactive session: a line-oriented front end over one `BoardState`.
//!
//! Reads one command per line from stdin and writes results to stdout.
//! Failed commands print an `error:` line and the session continues.

use crate::cli::common::{board_load_error, category_label, load_config, CliError, CliResult};
use crate::models::{BoardState, Registration};
use crate::services::BoardService;
use clap::Args;
use std::io::{self, BufRead, Write};
use std::path::{Path, PathBuf};
use tracing::warn;

const HELP: &str = "\
Commands:
  add <image> <text>    Add a pictogram to the open category
  link <image> <text>   Add a pictogram that opens a new category
  select <image>        Speak a pictogram and follow it if it opens a category
  images                List pictograms in the open category
  current               Show the open category
  reset                 Return to the root board
  export [path]         Write the board file
  help                  Show this help
  quit                  End the session";

/// Run an interactive board session on stdin/stdout
#[derive(Debug, Clone, Args)]
pub struct SessionArgs {
    /// Board file to start from (an empty board is used if it does not exist)
    #[arg(short, long, value_name = "FILE")]
    pub board: Option<PathBuf>,

    /// Export destination used by `export` without a path
    #[arg(short, long, value_name = "FILE")]
    pub output: Option<PathBuf>,
}

impl SessionArgs {
    /// Execute the session command
    pub fn execute(&self) -> CliResult<()> {
        let config = load_config()?;
        let triggers = config.trigger_set();

        let mut board = match &self.board {
            Some(path) => BoardService::load_or_default(path, triggers)
                .map_err(|e| board_load_error(path, e))?,
            None => BoardState::new(triggers),
        };

        let default_export = self
            .output
            .clone()
            .or_else(|| self.board.clone())
            .unwrap_or_else(|| config.export.output_path());

        let stdin = io::stdin();
        let stdout = io::stdout();
        run_session(&mut board, stdin.lock(), stdout.lock(), &default_export)
            .map_err(|e| CliError::io(format!("Session I/O failed: {e}")))
    }
}

/// Outcome of one session command.
enum Step {
    Continue,
    Quit,
}

/// Runs commands from `input` until end of input or `quit`.
pub fn run_session<R: BufRead, W: Write>(
    board: &mut BoardState,
    input: R,
    mut out: W,
    default_export: &Path,
) -> io::Result<()> {
    for line in input.lines() {
        let line = line?;
        let line = line.trim_end_matches('\r');
        if line.trim().is_empty() {
            continue;
        }

        match run_command(board, line, &mut out, default_export)? {
            Step::Continue => {}
            Step::Quit => break,
        }
        out.flush()?;
    }

    Ok(())
}

fn run_command<W: Write>(
    board: &mut BoardState,
    line: &str,
    out: &mut W,
    default_export: &Path,
) -> io::Result<Step> {
    let (command, rest) = line
        .trim_start()
        .split_once(' ')
        .unwrap_or((line.trim(), ""));

    match command {
        "add" | "link" => match rest.split_once(' ') {
            Some((image, text)) if !image.is_empty() => {
                add_pictogram(board, command == "link", image, text, out)?;
            }
            _ => writeln!(out, "error: usage: {command} <image> <text>")?,
        },
        "select" => {
            let image = rest.trim();
            if image.is_empty() {
                writeln!(out, "error: usage: select <image>")?;
            } else {
                writeln!(out, "{}", board.select(image))?;
            }
        }
        "images" => {
            for image in board.images_in_current_category() {
                writeln!(out, "{image}")?;
            }
        }
        "current" => writeln!(out, "{}", category_label(board.current_category_name()))?,
        "reset" => {
            board.reset();
            writeln!(out, "{}", category_label(board.current_category_name()))?;
        }
        "export" => {
            let path = match rest.trim() {
                "" => default_export.to_path_buf(),
                path => PathBuf::from(path),
            };
            match board.export(&path) {
                Ok(()) => writeln!(out, "exported {}", path.display())?,
                Err(e) => {
                    warn!("Export to {} failed: {:#}", path.display(), e);
                    writeln!(out, "error: {e:#}")?;
                }
            }
        }
        "help" => writeln!(out, "{HELP}")?,
        "quit" | "exit" => return Ok(Step::Quit),
        other => writeln!(out, "error: unknown command '{other}' (try 'help')")?,
    }

    Ok(Step::Continue)
}

fn add_pictogram<W: Write>(
    board: &mut BoardState,
    link: bool,
    image: &str,
    text: &str,
    out: &mut W,
) -> io::Result<()> {
    let registration = if link {
        match board.add_category(image, text) {
            Ok(registration) => Some(registration),
            Err(e) => return writeln!(out, "error: {e}"),
        }
    } else {
        board.add(image, text)
    };

    match registration {
        Some(Registration::Created) => writeln!(out, "added {image} (new category '{text}')"),
        Some(Registration::Renamed { previous }) => {
            writeln!(out, "added {image} (category '{previous}' renamed to '{text}')")
        }
        Some(Registration::Unchanged) | None => writeln!(out, "added {image}"),
    }
}
