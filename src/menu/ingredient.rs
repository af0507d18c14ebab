use serde::Serialize;
use std::fmt;

/// A single ingredient: a name, a whole-unit price, and a flavor tag.
///
/// Ingredients are immutable once created and are identified by name within
/// a [`Bar`](crate::bar::Bar). Prices are whole currency units; `u32` keeps
/// negative prices unrepresentable.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize)]
pub struct Ingredient {
    pub name: String,
    pub price: u32,
    pub flavor: String,
}

impl Ingredient {
    pub fn new(name: impl Into<String>, price: u32, flavor: impl Into<String>) -> Self {
        Ingredient {
            name: name.into(),
            price,
            flavor: flavor.into(),
        }
    }
}

impl fmt::Display for Ingredient {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} - ${}", self.name, self.price)
    }
}
