use super::Ingredient;
use indexmap::IndexSet;
use serde::Serialize;
use std::fmt;

/// A cocktail: a named, ordered list of ingredients and an optional strength.
///
/// The ingredient list keeps duplicates and input order. Duplicates count
/// multiple times toward [`price`](Cocktail::price) but only once toward
/// [`flavors`](Cocktail::flavors); the asymmetry is intentional and matches
/// the original menu semantics.
#[derive(Clone, Serialize)]
pub struct Cocktail {
    name: String,
    ingredients: Vec<Ingredient>,
    strength: Option<f64>,
}

impl Cocktail {
    /// Creates a cocktail from an already-resolved ingredient list.
    ///
    /// `strength` is the fractional alcohol-by-volume, e.g. `Some(0.2)` for a
    /// file row carrying a strength of `20` percent.
    pub fn new(
        name: impl Into<String>,
        ingredients: Vec<Ingredient>,
        strength: Option<f64>,
    ) -> Self {
        Cocktail {
            name: name.into(),
            ingredients,
            strength,
        }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn ingredients(&self) -> &[Ingredient] {
        &self.ingredients
    }

    pub fn strength(&self) -> Option<f64> {
        self.strength
    }

    /// Total price: the sum over the stored ingredient list as-is, so a
    /// double shot costs double.
    pub fn price(&self) -> u32 {
        self.ingredients.iter().map(|i| i.price).sum()
    }

    /// Deduplicated flavors, in first-seen order.
    pub fn flavors(&self) -> IndexSet<&str> {
        self.ingredients.iter().map(|i| i.flavor.as_str()).collect()
    }

    /// Deduplicated ingredient names, in first-seen order.
    pub fn ingredient_names(&self) -> IndexSet<&str> {
        self.ingredients.iter().map(|i| i.name.as_str()).collect()
    }

    pub fn has_flavor(&self, flavor: &str) -> bool {
        self.ingredients.iter().any(|i| i.flavor == flavor)
    }

    /// Combines two cocktails into a new one named `"A x B"`.
    ///
    /// The ingredient list is the union of both, deduplicated by ingredient
    /// name with first-seen order (left operand first). The result carries no
    /// strength and is not registered with any bar.
    pub fn combine(&self, other: &Cocktail) -> Cocktail {
        let mut seen: IndexSet<&str> = IndexSet::new();
        let mut ingredients = Vec::new();
        for ing in self.ingredients.iter().chain(other.ingredients.iter()) {
            if seen.insert(ing.name.as_str()) {
                ingredients.push(ing.clone());
            }
        }
        Cocktail {
            name: format!("{} x {}", self.name, other.name),
            ingredients,
            strength: None,
        }
    }
}

impl fmt::Display for Cocktail {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} - ${}", self.name, self.price())
    }
}

impl fmt::Debug for Cocktail {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Cocktail({})", self.name)
    }
}
