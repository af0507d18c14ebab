//! End-to-end test: load a menu from files, serve a session's worth of
//! operations, and report on the result.
mod common;
use barkeep::prelude::*;
use common::{cocktails_csv, ingredients_csv};
use std::fs;

#[test]
fn full_evening_at_the_bar() {
    let dir = tempfile::tempdir().unwrap();
    let ingredients_path = dir.path().join("ingredients.csv");
    let cocktails_path = dir.path().join("cocktails.csv");
    fs::write(&ingredients_path, ingredients_csv()).unwrap();
    fs::write(&cocktails_path, cocktails_csv()).unwrap();

    let mut bar = Bar::new("The Tilted Glass");
    loader::load(&mut bar, ingredients_path.to_str().unwrap()).unwrap();
    loader::load(&mut bar, cocktails_path.to_str().unwrap()).unwrap();

    // The menu is up.
    assert_eq!(bar.ingredients().len(), 5);
    assert_eq!(bar.cocktails().len(), 3);
    assert_eq!(bar.cocktails()["Whiskey Sour"].strength(), Some(0.20));

    // A guest asks for something sour, then orders the first suggestion
    // twice.
    let suggestion = bar.recommend("sour")[0].name().to_string();
    assert_eq!(suggestion, "Whiskey Sour");
    bar.order_by_name(&suggestion).unwrap();
    bar.order_by_name(&suggestion).unwrap();
    assert_eq!(bar.tab(), 10);

    // Another guest invents a drink and orders it by catalog position.
    bar.create_cocktail("Mint Fizz", &["mint", "soda"], None)
        .unwrap();
    let index = bar.cocktails().get_index_of("Mint Fizz").unwrap();
    bar.order_by_index(index).unwrap();
    assert_eq!(bar.tab(), 13);

    // The receipt itemises everything in order.
    assert_eq!(
        bar.receipt(),
        "Whiskey Sour - $5\nWhiskey Sour - $5\nMint Fizz - $3"
    );

    // Closing reports.
    let summary = PriceSummary::for_menu(&bar).unwrap();
    assert_eq!(summary.count, 4);
    assert_eq!(summary.min, 3);

    let distribution = FlavorDistribution::for_bar(&bar);
    let fresh = distribution
        .flavors
        .iter()
        .find(|c| c.flavor == "fresh")
        .unwrap();
    assert_eq!(fresh.cocktails, 2); // Mojito and Mint Fizz
}
