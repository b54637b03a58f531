//! Library-level tests for board navigation and the board file format.

use aacboard::models::{BoardState, Pictogram, Registration, TriggerSet, ROOT_KEY};
use aacboard::parser::{generate_board_text, parse_board_str};
use aacboard::services::BoardService;
use std::fs;

mod fixtures;
use fixtures::*;

#[test]
fn test_scenario_navigation() {
    let mut board = test_board_scenario();

    assert_eq!(
        board.images_in_current_category(),
        vec!["img/food/plate.png", "img/apple.png"]
    );

    assert_eq!(board.select("img/food/plate.png"), "Food");
    assert_eq!(board.current_category_name(), "Food");
    assert_eq!(board.current_category_key(), "img/food/plate.png");
    assert!(board.images_in_current_category().is_empty());

    board.reset();
    assert!(board.is_at_root());
    assert_eq!(board.current_category_key(), ROOT_KEY);
    assert_eq!(board.select("img/apple.png"), "Apple");
    assert!(board.is_at_root());
}

#[test]
fn test_scenario_export_exact_content() {
    let temp_dir = temp_dir();
    let path = temp_dir.path().join("board.txt");

    test_board_scenario().export(&path).unwrap();

    assert_eq!(fs::read_to_string(&path).unwrap(), "img/food/plate.png Food\n");
}

#[test]
fn test_export_category_items() {
    let mut board = BoardState::new(default_triggers());
    board.add("img/food/plate.png", "Food");
    board.select("img/food/plate.png");
    board.add("img/food/apple.png", "Apple");
    board.reset();
    board.add("img/clothing/hanger.png", "Clothes");
    board.select("img/clothing/hanger.png");
    board.add("img/clothing/shirt.png", "Shirt");

    assert_eq!(
        generate_board_text(&board),
        "img/food/plate.png Food\n\
         >img/food/apple.png Apple\n\
         img/clothing/hanger.png Clothes\n\
         >img/clothing/shirt.png Shirt\n"
    );
}

#[test]
fn test_unknown_image_keeps_category() {
    let mut board = parse_board_str(FOOD_BOARD, default_triggers()).unwrap();

    board.select("img/food/plate.png");
    assert_eq!(board.select("img/missing.png"), "Image not found");
    assert_eq!(board.current_category_name(), "Food");
}

#[test]
fn test_reregistration_renames_and_keeps_items() {
    let mut board = parse_board_str(FOOD_BOARD, default_triggers()).unwrap();

    let registration = board.add_category("img/food/plate.png", "Meals").unwrap();
    assert_eq!(
        registration,
        Registration::Renamed {
            previous: "Food".to_string()
        }
    );

    let category = board.category("img/food/plate.png").unwrap();
    assert_eq!(category.name(), "Meals");
    assert_eq!(category.len(), 2);
}

#[test]
fn test_loaded_board_links_open_categories() {
    let board = parse_board_str(TWO_CATEGORY_BOARD, TriggerSet::default()).unwrap();
    let root = board.category(ROOT_KEY).unwrap();

    assert_eq!(
        root.pictogram("img/clothing/hanger.png"),
        Some(&Pictogram::Opens("Clothes".to_string()))
    );
    assert_eq!(board.category_count(), 3);
    assert!(board.is_category_trigger("img/clothing/hanger.png"));
}

#[test]
fn test_service_round_trip() {
    let temp_dir = temp_dir();
    let source = write_board_file(&temp_dir, "source.txt", TWO_CATEGORY_BOARD);
    let target = temp_dir.path().join("target.txt");

    let board = BoardService::load(&source, default_triggers()).unwrap();
    assert_eq!(board.triggers(), &default_triggers());
    BoardService::save(&board, &target).unwrap();

    assert_eq!(fs::read_to_string(&target).unwrap(), TWO_CATEGORY_BOARD);
}

#[test]
fn test_load_or_default_missing_file() {
    let temp_dir = temp_dir();
    let board =
        BoardService::load_or_default(&temp_dir.path().join("new.txt"), default_triggers())
            .unwrap();

    assert_eq!(board.category_count(), 1);
    assert!(board.images_in_current_category().is_empty());
}

#[test]
fn test_load_rejects_orphan_item() {
    let err = parse_board_str(">img/food/apple.png Apple\n", default_triggers()).unwrap_err();
    assert!(format!("{err:#}").contains("Line 1"));
}

#[test]
fn test_export_refuses_text_that_would_add_a_header() {
    let temp_dir = temp_dir();
    let path = write_board_file(&temp_dir, "board.txt", FOOD_BOARD);
    let mut board = BoardService::load(&path, default_triggers()).unwrap();

    board.select("img/food/plate.png");
    board.add("img/food/apple.png", "I want\nimg/evil.png Evil");

    assert!(board.export(&path).is_err());
    assert_eq!(fs::read_to_string(&path).unwrap(), FOOD_BOARD);

    let reloaded = BoardService::load(&path, default_triggers()).unwrap();
    assert_eq!(reloaded.category_count(), 2);
    assert!(reloaded.category("img/evil.png").is_none());
}

#[test]
fn test_item_prefix_key_cannot_become_a_header() {
    let mut board = BoardState::new(default_triggers());

    assert!(board.add_category(">box.png", "Toys").is_err());
    assert_eq!(generate_board_text(&board), "");
}
