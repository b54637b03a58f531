//! Show command for listing a board's categories and pictograms.

use crate::cli::common::{board_load_error, category_label, load_config, CliError, CliResult};
use crate::models::{BoardState, Category};
use crate::services::BoardService;
use clap::Args;
use serde::Serialize;
use std::path::PathBuf;

/// List the categories and pictograms of a board
#[derive(Debug, Clone, Args)]
pub struct ShowArgs {
    /// Path to board file
    #[arg(short, long, value_name = "FILE")]
    pub board: PathBuf,

    /// Category key (trigger image) to list instead of the root board
    #[arg(short, long, value_name = "KEY")]
    pub category: Option<String>,

    /// Output results as JSON
    #[arg(long)]
    pub json: bool,
}

// JSON response types
#[derive(Debug, Serialize)]
struct CategoryItem {
    key: String,
    name: String,
    image_count: usize,
}

#[derive(Debug, Serialize)]
struct PictogramItem {
    image: String,
    text: String,
    opens_category: bool,
}

#[derive(Debug, Serialize)]
struct ShowResponse {
    category_key: String,
    category_name: String,
    pictograms: Vec<PictogramItem>,
    categories: Vec<CategoryItem>,
}

impl ShowArgs {
    /// Execute the show command
    pub fn execute(&self) -> CliResult<()> {
        let config = load_config()?;
        let board = BoardService::load(&self.board, config.trigger_set())
            .map_err(|e| board_load_error(&self.board, e))?;

        let response = build_response(&board, self.category.as_deref())?;

        if self.json {
            println!(
                "{}",
                serde_json::to_string(&response)
                    .map_err(|e| CliError::io(format!("Failed to serialize JSON: {e}")))?
            );
        } else {
            print_human_readable(&response);
        }

        Ok(())
    }
}

fn build_response(board: &BoardState, key: Option<&str>) -> CliResult<ShowResponse> {
    let key = key.unwrap_or(crate::models::ROOT_KEY);
    let category = board
        .category(key)
        .ok_or_else(|| CliError::validation(format!("Category '{key}' not found")))?;

    let categories = board
        .categories()
        .filter(|(key, _)| !key.is_empty())
        .map(|(key, category)| CategoryItem {
            key: key.to_string(),
            name: category.name().to_string(),
            image_count: category.len(),
        })
        .collect();

    Ok(ShowResponse {
        category_key: key.to_string(),
        category_name: category.name().to_string(),
        pictograms: pictogram_items(category),
        categories,
    })
}

fn pictogram_items(category: &Category) -> Vec<PictogramItem> {
    category
        .pictograms()
        .map(|(image, pictogram)| PictogramItem {
            image: image.clone(),
            text: pictogram.text().to_string(),
            opens_category: pictogram.opens_category(),
        })
        .collect()
}

fn print_human_readable(response: &ShowResponse) {
    if response.categories.is_empty() {
        println!("No categories defined.");
    } else {
        println!("Categories ({}):", response.categories.len());
        for cat in &response.categories {
            println!("  {:<30} {:<20} {} images", cat.key, cat.name, cat.image_count);
        }
    }
    println!();

    println!(
        "{} ({} pictograms):",
        category_label(&response.category_name),
        response.pictograms.len()
    );
    for item in &response.pictograms {
        let marker = if item.opens_category { " [opens]" } else { "" };
        println!("  {:<30} {}{}", item.image, item.text, marker);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::TriggerSet;

    fn sample_board() -> BoardState {
        let mut board = BoardState::new(TriggerSet::new(["img/food/plate.png"]));
        board.add("img/food/plate.png", "Food");
        board.select("img/food/plate.png");
        board.add("img/food/apple.png", "Apple");
        board.reset();
        board
    }

    #[test]
    fn test_build_response_root() {
        let response = build_response(&sample_board(), None).unwrap();

        assert_eq!(response.category_key, "");
        assert_eq!(response.pictograms.len(), 1);
        assert!(response.pictograms[0].opens_category);
        assert_eq!(response.categories.len(), 1);
        assert_eq!(response.categories[0].image_count, 1);
    }

    #[test]
    fn test_build_response_category() {
        let response = build_response(&sample_board(), Some("img/food/plate.png")).unwrap();

        assert_eq!(response.category_name, "Food");
        assert_eq!(response.pictograms[0].image, "img/food/apple.png");
        assert!(!response.pictograms[0].opens_category);
    }

    #[test]
    fn test_build_response_unknown_category() {
        let err = build_response(&sample_board(), Some("img/none.png")).unwrap_err();
        assert_eq!(err.exit_code(), 1);
    }
}
