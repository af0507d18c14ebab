//! The aggregate root: a bar owning its ingredient stock, its cocktail
//! catalog, and the running order.

use crate::error::OrderError;
use crate::menu::{Cocktail, Ingredient};
use indexmap::{IndexMap, IndexSet};
use itertools::Itertools;
use log::debug;
use std::fmt;

/// How many cocktails [`Bar::recommend`] returns at most.
pub const RECOMMEND_LIMIT: usize = 4;

/// A bar: named, stocked with ingredients, serving a cocktail catalog and
/// keeping one running order.
///
/// Both catalog maps iterate in insertion order; that order is part of the
/// contract for [`recommend`](Bar::recommend), [`order_by_index`](Bar::order_by_index)
/// and [`get_flavors`](Bar::get_flavors).
pub struct Bar {
    name: String,
    ingredients: IndexMap<String, Ingredient>,
    cocktails: IndexMap<String, Cocktail>,
    order: Vec<Cocktail>,
}

impl Bar {
    pub fn new(name: impl Into<String>) -> Self {
        Bar {
            name: name.into(),
            ingredients: IndexMap::new(),
            cocktails: IndexMap::new(),
            order: Vec::new(),
        }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn ingredients(&self) -> &IndexMap<String, Ingredient> {
        &self.ingredients
    }

    pub fn cocktails(&self) -> &IndexMap<String, Cocktail> {
        &self.cocktails
    }

    /// Cocktails placed on the order so far, oldest first.
    ///
    /// Entries are the cocktails as they were when ordered; re-registering a
    /// cocktail under the same name later does not rewrite past orders.
    pub fn order(&self) -> &[Cocktail] {
        &self.order
    }

    /// Stocks an ingredient, overwriting any prior entry with the same name.
    pub fn add_ingredient(&mut self, ingredient: Ingredient) {
        debug!("stocking ingredient '{}'", ingredient.name);
        self.ingredients.insert(ingredient.name.clone(), ingredient);
    }

    /// Registers a cocktail, overwriting any prior entry with the same name.
    pub fn add_cocktail(&mut self, cocktail: Cocktail) {
        debug!("registering cocktail '{}'", cocktail.name());
        self.cocktails.insert(cocktail.name().to_string(), cocktail);
    }

    /// Builds a cocktail from named ingredients and registers it.
    ///
    /// Every name must resolve against the current stock. Empty names and
    /// empty ingredient lists are accepted, yielding a zero-price cocktail.
    pub fn create_cocktail<S: AsRef<str>>(
        &mut self,
        name: &str,
        ingredient_names: &[S],
        strength: Option<f64>,
    ) -> Result<&Cocktail, OrderError> {
        let mut ingredients = Vec::with_capacity(ingredient_names.len());
        for ingredient_name in ingredient_names {
            let ingredient_name = ingredient_name.as_ref();
            let ingredient = self
                .ingredients
                .get(ingredient_name)
                .ok_or_else(|| OrderError::UnknownIngredient(ingredient_name.to_string()))?;
            ingredients.push(ingredient.clone());
        }
        self.add_cocktail(Cocktail::new(name, ingredients, strength));
        Ok(&self.cocktails[name])
    }

    /// Returns up to [`RECOMMEND_LIMIT`] cocktails carrying the given flavor.
    ///
    /// First-match-wins over catalog insertion order; this is not a ranked
    /// search.
    pub fn recommend(&self, flavor: &str) -> Vec<&Cocktail> {
        self.cocktails
            .values()
            .filter(|c| c.has_flavor(flavor))
            .take(RECOMMEND_LIMIT)
            .collect()
    }

    /// The catalog sorted by price ascending; ties keep insertion order.
    pub fn menu_by_price(&self) -> Vec<&Cocktail> {
        self.cocktails
            .values()
            .sorted_by_key(|c| c.price())
            .collect()
    }

    /// Places the named cocktail on the order.
    pub fn order_by_name(&mut self, name: &str) -> Result<(), OrderError> {
        let cocktail = self
            .cocktails
            .get(name)
            .ok_or_else(|| OrderError::UnknownCocktail(name.to_string()))?;
        self.order.push(cocktail.clone());
        Ok(())
    }

    /// Places a cocktail on the order by its catalog position (insertion
    /// order, zero-based).
    pub fn order_by_index(&mut self, index: usize) -> Result<(), OrderError> {
        let (_, cocktail) = self
            .cocktails
            .get_index(index)
            .ok_or(OrderError::IndexOutOfRange {
                index,
                len: self.cocktails.len(),
            })?;
        self.order.push(cocktail.clone());
        Ok(())
    }

    /// The running total over everything ordered so far, repeats counted
    /// each time.
    pub fn tab(&self) -> u32 {
        self.order.iter().map(Cocktail::price).sum()
    }

    /// Deduplicated flavors across the stocked ingredients, in stocking
    /// order.
    pub fn get_flavors(&self) -> Vec<&str> {
        let flavors: IndexSet<&str> = self
            .ingredients
            .values()
            .map(|i| i.flavor.as_str())
            .collect();
        flavors.into_iter().collect()
    }

    /// The itemised order, one display line per cocktail, or `"Nothing!"`
    /// when nothing has been ordered.
    pub fn receipt(&self) -> String {
        if self.order.is_empty() {
            "Nothing!".to_string()
        } else {
            self.order.iter().map(|c| c.to_string()).join("\n")
        }
    }
}

impl fmt::Display for Bar {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{}: {} drink(s) on the order - ${}",
            self.name,
            self.order.len(),
            self.tab()
        )
    }
}
