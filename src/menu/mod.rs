//! Menu value types: ingredients and the cocktails built from them.

mod cocktail;
mod ingredient;

pub use cocktail::Cocktail;
pub use ingredient::Ingredient;
