//! Tests for line parsing and file loading.
mod common;
use barkeep::loader::line::{parse_cocktail_line, parse_ingredient_line};
use barkeep::prelude::*;
use common::{cocktails_csv, ingredients_csv, stocked_bar};
use std::fs;
use std::path::Path;

fn write_file(dir: &Path, name: &str, content: &str) -> String {
    let path = dir.join(name);
    fs::write(&path, content).unwrap();
    path.to_str().unwrap().to_string()
}

#[test]
fn parse_ingredient_line_happy_path() {
    let parsed = parse_ingredient_line("whiskey,4,smokey").unwrap();
    assert_eq!(parsed.name, "whiskey");
    assert_eq!(parsed.price, 4);
    assert_eq!(parsed.flavor, "smokey");
}

#[test]
fn parse_ingredient_line_strips_bom() {
    let parsed = parse_ingredient_line("\u{feff}whiskey,4,smokey").unwrap();
    assert_eq!(parsed.name, "whiskey");
}

#[test]
fn parse_ingredient_line_rejects_bad_rows() {
    // wrong field count
    assert!(parse_ingredient_line("whiskey,4").is_err());
    assert!(parse_ingredient_line("whiskey,4,smokey,extra").is_err());
    // non-numeric and negative prices
    assert!(parse_ingredient_line("whiskey,four,smokey").is_err());
    assert!(parse_ingredient_line("whiskey,-4,smokey").is_err());
    // non-alphabetic flavor
    assert!(parse_ingredient_line("whiskey,4,smokey1").is_err());
    assert!(parse_ingredient_line("whiskey,4,").is_err());
}

#[test]
fn parse_cocktail_line_happy_path() {
    let parsed = parse_cocktail_line("Whiskey Sour,\"whiskey,lemon\",20").unwrap();
    assert_eq!(parsed.name, "Whiskey Sour");
    assert_eq!(parsed.ingredients, vec!["whiskey", "lemon"]);
    assert_eq!(parsed.strength_percent, 20);
}

#[test]
fn parse_cocktail_line_rejects_bad_rows() {
    // unquoted ingredient list
    assert!(parse_cocktail_line("Sour,whiskey,20").is_err());
    // missing closing quote
    assert!(parse_cocktail_line("Sour,\"whiskey,20").is_err());
    // missing or bad strength
    assert!(parse_cocktail_line("Sour,\"whiskey\"").is_err());
    assert!(parse_cocktail_line("Sour,\"whiskey\",strong").is_err());
}

#[test]
fn load_round_trip() {
    let dir = tempfile::tempdir().unwrap();
    let ingredients = write_file(dir.path(), "ingredients.csv", &ingredients_csv());
    let cocktails = write_file(dir.path(), "cocktails.csv", &cocktails_csv());

    let mut bar = Bar::new("Roundtrip");
    assert_eq!(loader::load_ingredients(&mut bar, &ingredients).unwrap(), 5);
    assert_eq!(loader::load_cocktails(&mut bar, &cocktails).unwrap(), 3);
    assert_eq!(bar.cocktails().len(), 3);

    let sour = &bar.cocktails()["Whiskey Sour"];
    assert_eq!(sour.price(), 5);
    assert_eq!(sour.strength(), Some(0.20));
}

#[test]
fn load_dispatches_on_path_substring() {
    let dir = tempfile::tempdir().unwrap();
    let ingredients = write_file(dir.path(), "ingredients.csv", &ingredients_csv());
    let cocktails = write_file(dir.path(), "cocktails.csv", &cocktails_csv());

    let mut bar = Bar::new("Dispatch");
    loader::load(&mut bar, &ingredients).unwrap();
    loader::load(&mut bar, &cocktails).unwrap();
    assert_eq!(bar.ingredients().len(), 5);
    assert_eq!(bar.cocktails().len(), 3);

    let menu = write_file(dir.path(), "menu.csv", "");
    assert!(matches!(
        loader::load(&mut bar, &menu),
        Err(LoadError::UnknownFormat(_))
    ));
}

#[test]
fn cocktails_before_ingredients_is_a_lookup_error() {
    let dir = tempfile::tempdir().unwrap();
    let cocktails = write_file(dir.path(), "cocktails.csv", &cocktails_csv());

    let mut bar = Bar::new("Impatient");
    let err = loader::load_cocktails(&mut bar, &cocktails).unwrap_err();
    match err {
        LoadError::UnknownIngredient {
            line_no,
            cocktail,
            ingredient,
            ..
        } => {
            assert_eq!(line_no, 1);
            assert_eq!(cocktail, "Whiskey Sour");
            assert_eq!(ingredient, "whiskey");
        }
        other => panic!("expected UnknownIngredient, got {other:?}"),
    }
}

#[test]
fn malformed_line_aborts_with_position_and_content() {
    let dir = tempfile::tempdir().unwrap();
    let path = write_file(
        dir.path(),
        "ingredients.csv",
        "whiskey,4,smokey\nlemon,one,sour\n",
    );

    let mut bar = Bar::new("Strict");
    let err = loader::load_ingredients(&mut bar, &path).unwrap_err();
    match err {
        LoadError::Parse { line_no, line, .. } => {
            assert_eq!(line_no, 2);
            assert_eq!(line, "lemon,one,sour");
        }
        other => panic!("expected Parse, got {other:?}"),
    }
    // Partial load: rows before the failure stay registered.
    assert_eq!(bar.ingredients().len(), 1);
    assert!(bar.ingredients().contains_key("whiskey"));
}

#[test]
fn blank_lines_are_skipped() {
    let dir = tempfile::tempdir().unwrap();
    let path = write_file(
        dir.path(),
        "ingredients.csv",
        "whiskey,4,smokey\n\nlemon,1,sour\n\n",
    );

    let mut bar = Bar::new("Sparse");
    assert_eq!(loader::load_ingredients(&mut bar, &path).unwrap(), 2);
}

#[test]
fn bom_on_first_row_does_not_leak_into_keys() {
    let dir = tempfile::tempdir().unwrap();
    let path = write_file(dir.path(), "ingredients.csv", "\u{feff}whiskey,4,smokey\n");

    let mut bar = Bar::new("Spreadsheet");
    loader::load_ingredients(&mut bar, &path).unwrap();
    assert!(bar.ingredients().contains_key("whiskey"));
    assert!(!bar.ingredients().contains_key("\u{feff}whiskey"));
}

#[test]
fn missing_file_is_an_io_error() {
    let mut bar = stocked_bar();
    assert!(matches!(
        loader::load_ingredients(&mut bar, "no/such/ingredients.csv"),
        Err(LoadError::Io { .. })
    ));
}

#[test]
fn unknown_ingredient_mid_file_keeps_earlier_cocktails() {
    let dir = tempfile::tempdir().unwrap();
    let ingredients = write_file(dir.path(), "ingredients.csv", &ingredients_csv());
    let cocktails = write_file(
        dir.path(),
        "cocktails.csv",
        "Whiskey Sour,\"whiskey,lemon\",20\nGhost,\"ectoplasm\",50\n",
    );

    let mut bar = Bar::new("Haunted");
    loader::load_ingredients(&mut bar, &ingredients).unwrap();
    let err = loader::load_cocktails(&mut bar, &cocktails).unwrap_err();
    assert!(matches!(err, LoadError::UnknownIngredient { line_no: 2, .. }));
    assert_eq!(bar.cocktails().len(), 1);
}
