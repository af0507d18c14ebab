//! Common test utilities for building stocked bars and menu files.
use barkeep::prelude::*;

/// The ingredients every fixture bar stocks, in stocking order.
#[allow(dead_code)]
pub const STOCK: &[(&str, u32, &str)] = &[
    ("whiskey", 4, "smokey"),
    ("lemon", 1, "sour"),
    ("rum", 3, "sweet"),
    ("mint", 2, "fresh"),
    ("soda", 1, "fizzy"),
];

/// A bar with the fixture stock and no cocktails.
#[allow(dead_code)]
pub fn stocked_bar() -> Bar {
    let mut bar = Bar::new("The Tilted Glass");
    for &(name, price, flavor) in STOCK {
        bar.add_ingredient(Ingredient::new(name, price, flavor));
    }
    bar
}

/// A bar with the fixture stock and three cocktails:
///
/// - `Whiskey Sour` (whiskey, lemon) - $5, strength 0.20
/// - `Mojito` (rum, mint, soda, lemon) - $7, strength 0.10
/// - `Rum Twist` (rum, lemon) - $4, no strength
#[allow(dead_code)]
pub fn full_bar() -> Bar {
    let mut bar = stocked_bar();
    bar.create_cocktail("Whiskey Sour", &["whiskey", "lemon"], Some(0.20))
        .expect("fixture ingredients are stocked");
    bar.create_cocktail("Mojito", &["rum", "mint", "soda", "lemon"], Some(0.10))
        .expect("fixture ingredients are stocked");
    bar.create_cocktail("Rum Twist", &["rum", "lemon"], None)
        .expect("fixture ingredients are stocked");
    bar
}

/// The fixture stock as ingredients-file content.
#[allow(dead_code)]
pub fn ingredients_csv() -> String {
    STOCK
        .iter()
        .map(|(name, price, flavor)| format!("{},{},{}\n", name, price, flavor))
        .collect()
}

/// A cocktails file matching the fixture stock.
#[allow(dead_code)]
pub fn cocktails_csv() -> String {
    concat!(
        "Whiskey Sour,\"whiskey,lemon\",20\n",
        "Mojito,\"rum,mint,soda,lemon\",10\n",
        "Rum Twist,\"rum,lemon\",35\n",
    )
    .to_string()
}
