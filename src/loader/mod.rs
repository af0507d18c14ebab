//! Flat-file ingestion for menu data.
//!
//! Two formats are understood: an ingredients file (`Name,Price,Flavor` per
//! line) and a cocktails file (`Name,"Ing1,Ing2,...",StrengthPercent` per
//! line). Cocktail rows resolve their ingredient names against the bar's
//! current stock, so the ingredients file must be loaded first.
//!
//! A malformed line aborts the load; whatever was registered before the
//! failing line stays registered (partial load, no rollback).

pub mod line;

use crate::bar::Bar;
use crate::error::LoadError;
use crate::menu::{Cocktail, Ingredient};
use log::info;
use std::fs;

/// The two file formats the loader understands.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MenuFormat {
    Ingredients,
    Cocktails,
}

impl MenuFormat {
    /// Infers the format from the file path, keeping the original
    /// substring-based dispatch: `"cocktails"` anywhere in the path means a
    /// cocktails file, otherwise `"ingredients"` means an ingredients file.
    pub fn infer(path: &str) -> Option<MenuFormat> {
        if path.contains("cocktails") {
            Some(MenuFormat::Cocktails)
        } else if path.contains("ingredients") {
            Some(MenuFormat::Ingredients)
        } else {
            None
        }
    }
}

/// Loads a menu file into the bar, inferring the format from the path.
///
/// Returns the number of rows registered.
pub fn load(bar: &mut Bar, path: &str) -> Result<usize, LoadError> {
    match MenuFormat::infer(path) {
        Some(MenuFormat::Ingredients) => load_ingredients(bar, path),
        Some(MenuFormat::Cocktails) => load_cocktails(bar, path),
        None => Err(LoadError::UnknownFormat(path.to_string())),
    }
}

/// Loads an ingredients file, registering one ingredient per row.
pub fn load_ingredients(bar: &mut Bar, path: &str) -> Result<usize, LoadError> {
    let content = read(path)?;
    let mut count = 0;
    for (line_no, raw) in numbered_lines(&content) {
        let parsed = line::parse_ingredient_line(raw).map_err(|reason| LoadError::Parse {
            path: path.to_string(),
            line_no,
            line: raw.to_string(),
            reason,
        })?;
        bar.add_ingredient(Ingredient::new(parsed.name, parsed.price, parsed.flavor));
        count += 1;
    }
    info!("loaded {count} ingredients from '{path}'");
    Ok(count)
}

/// Loads a cocktails file, registering one cocktail per row.
///
/// Every ingredient name in a row must already be stocked; an unknown name
/// aborts the load with [`LoadError::UnknownIngredient`].
pub fn load_cocktails(bar: &mut Bar, path: &str) -> Result<usize, LoadError> {
    let content = read(path)?;
    let mut count = 0;
    for (line_no, raw) in numbered_lines(&content) {
        let parsed = line::parse_cocktail_line(raw).map_err(|reason| LoadError::Parse {
            path: path.to_string(),
            line_no,
            line: raw.to_string(),
            reason,
        })?;

        let mut ingredients = Vec::with_capacity(parsed.ingredients.len());
        for name in &parsed.ingredients {
            let ingredient = bar.ingredients().get(name).cloned().ok_or_else(|| {
                LoadError::UnknownIngredient {
                    path: path.to_string(),
                    line_no,
                    cocktail: parsed.name.clone(),
                    ingredient: name.clone(),
                }
            })?;
            ingredients.push(ingredient);
        }

        let strength = parsed.strength_percent as f64 / 100.0;
        bar.add_cocktail(Cocktail::new(parsed.name, ingredients, Some(strength)));
        count += 1;
    }
    info!("loaded {count} cocktails from '{path}'");
    Ok(count)
}

fn read(path: &str) -> Result<String, LoadError> {
    fs::read_to_string(path).map_err(|source| LoadError::Io {
        path: path.to_string(),
        source,
    })
}

/// Yields `(1-based line number, line)` pairs, skipping blank lines.
fn numbered_lines(content: &str) -> impl Iterator<Item = (usize, &str)> {
    content
        .lines()
        .enumerate()
        .map(|(i, l)| (i + 1, l))
        .filter(|(_, l)| !l.trim().is_empty())
}
