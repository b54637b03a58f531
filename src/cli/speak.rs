//! Speak command: replays pictogram selections against a board.

use crate::cli::common::{board_load_error, category_label, load_config, CliError, CliResult};
use crate::models::BoardState;
use crate::services::BoardService;
use clap::Args;
use serde::Serialize;
use std::path::PathBuf;

/// Select pictograms in order, starting from the root board
#[derive(Debug, Clone, Args)]
pub struct SpeakArgs {
    /// Path to board file
    #[arg(short, long, value_name = "FILE")]
    pub board: PathBuf,

    /// Image locations to select, in order
    #[arg(value_name = "IMAGE", required = true)]
    pub images: Vec<String>,

    /// Output results as JSON
    #[arg(long)]
    pub json: bool,
}

#[derive(Debug, Serialize, PartialEq, Eq)]
struct SpokenItem {
    image: String,
    text: String,
    category_key: String,
    category_name: String,
}

#[derive(Debug, Serialize)]
struct SpeakResponse {
    spoken: Vec<SpokenItem>,
}

impl SpeakArgs {
    /// Execute the speak command
    pub fn execute(&self) -> CliResult<()> {
        let config = load_config()?;
        let mut board = BoardService::load(&self.board, config.trigger_set())
            .map_err(|e| board_load_error(&self.board, e))?;

        let response = SpeakResponse {
            spoken: replay(&mut board, &self.images),
        };

        if self.json {
            println!(
                "{}",
                serde_json::to_string(&response)
                    .map_err(|e| CliError::io(format!("Failed to serialize JSON: {e}")))?
            );
        } else {
            for item in &response.spoken {
                println!(
                    "{} -> \"{}\" [{}]",
                    item.image,
                    item.text,
                    category_label(&item.category_name)
                );
            }
        }

        Ok(())
    }
}

fn replay(board: &mut BoardState, images: &[String]) -> Vec<SpokenItem> {
    images
        .iter()
        .map(|image| {
            let text = board.select(image);
            SpokenItem {
                image: image.clone(),
                text,
                category_key: board.current_category_key().to_string(),
                category_name: board.current_category_name().to_string(),
            }
        })
        .collect()
}
