//! Add command for placing pictograms on a board file.

use crate::cli::common::{board_load_error, category_label, load_config, CliError, CliResult};
use crate::models::{validate_image_location, validate_text, BoardState, Registration};
use crate::services::BoardService;
use clap::Args;
use std::path::PathBuf;

/// Add a pictogram to a board file
#[derive(Debug, Clone, Args)]
pub struct AddArgs {
    /// Path to board file (created if it does not exist)
    #[arg(short, long, value_name = "FILE")]
    pub board: PathBuf,

    /// Image location identifying the pictogram
    #[arg(short, long, value_name = "LOC")]
    pub image: String,

    /// Text spoken when the pictogram is selected
    #[arg(short, long, value_name = "TEXT")]
    pub text: String,

    /// Category key (trigger image) to add the pictogram to
    #[arg(short, long, value_name = "KEY")]
    pub category: Option<String>,

    /// Make the pictogram open a new category named after its text
    #[arg(long)]
    pub category_trigger: bool,
}

impl AddArgs {
    /// Execute the add command
    pub fn execute(&self) -> CliResult<()> {
        let config = load_config()?;
        let mut board = BoardService::load_or_default(&self.board, config.trigger_set())
            .map_err(|e| board_load_error(&self.board, e))?;

        let registration = self.apply(&mut board)?;

        BoardService::save(&board, &self.board)
            .map_err(|e| CliError::io(format!("Failed to save board: {e:#}")))?;

        println!(
            "Added '{}' to {}.",
            self.image,
            category_label(board.current_category_name())
        );
        match registration {
            Some(Registration::Created) => println!("Registered category '{}'.", self.text),
            Some(Registration::Renamed { previous }) => {
                println!("Renamed category '{}' to '{}'.", previous, self.text);
            }
            Some(Registration::Unchanged) | None => {}
        }

        Ok(())
    }

    /// Navigates to the target category and adds the pictogram.
    fn apply(&self, board: &mut BoardState) -> CliResult<Option<Registration>> {
        validate_image_location(&self.image)
            .and_then(|()| validate_text(&self.text))
            .map_err(|e| CliError::validation(e.to_string()))?;

        if let Some(key) = &self.category {
            if key.is_empty() || board.category(key).is_none() {
                return Err(CliError::validation(format!("Category '{key}' not found")));
            }
            board.select(key);
        }

        let opens = self.category_trigger || board.is_category_trigger(&self.image);
        if board.is_at_root() && !opens {
            return Err(CliError::validation(
                "Pictograms on the root board must open a category. \
                 Use --category to add to a sub-board or --category-trigger to create one.",
            ));
        }

        if self.category_trigger {
            board
                .add_category(self.image.as_str(), self.text.as_str())
                .map(Some)
                .map_err(|e| CliError::validation(e.to_string()))
        } else {
            Ok(board.add(self.image.as_str(), self.text.as_str()))
        }
    }
}
