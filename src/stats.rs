//! Descriptive reports over a bar's menu.
//!
//! Three reports are available: a price summary over the cocktail catalog, a
//! flavor distribution across stock and catalog, and an ingredient usage
//! count. Each renders as text (the distribution includes a proportional
//! `#` bar) and serializes to JSON for export.

use crate::bar::Bar;
use crate::menu::Cocktail;
use itertools::Itertools;
use serde::Serialize;
use std::cmp::Reverse;
use std::fmt;

/// Width of the proportional bar in the rendered flavor distribution.
const CHART_WIDTH: usize = 40;

/// Count, min, max, mean, and median over the catalog's cocktail prices.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct PriceSummary {
    pub count: usize,
    pub min: u32,
    pub max: u32,
    pub mean: f64,
    pub median: f64,
}

impl PriceSummary {
    /// Summarises the registered cocktails; `None` for an empty catalog.
    pub fn for_menu(bar: &Bar) -> Option<PriceSummary> {
        let mut prices: Vec<u32> = bar.cocktails().values().map(Cocktail::price).collect();
        if prices.is_empty() {
            return None;
        }
        prices.sort_unstable();

        let count = prices.len();
        let mean = prices.iter().map(|&p| f64::from(p)).sum::<f64>() / count as f64;
        let median = if count % 2 == 1 {
            f64::from(prices[count / 2])
        } else {
            f64::from(prices[count / 2 - 1] + prices[count / 2]) / 2.0
        };

        Some(PriceSummary {
            count,
            min: prices[0],
            max: prices[count - 1],
            mean,
            median,
        })
    }
}

impl fmt::Display for PriceSummary {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "Cocktail prices ({} on the menu)", self.count)?;
        writeln!(f, "  min:    ${}", self.min)?;
        writeln!(f, "  max:    ${}", self.max)?;
        writeln!(f, "  mean:   ${:.2}", self.mean)?;
        write!(f, "  median: ${:.2}", self.median)
    }
}

/// One flavor's footprint: how many stocked ingredients carry it and how
/// many cocktails contain it.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct FlavorCount {
    pub flavor: String,
    pub ingredients: usize,
    pub cocktails: usize,
}

/// Per-flavor counts across the whole bar, in stocking order.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct FlavorDistribution {
    pub flavors: Vec<FlavorCount>,
}

impl FlavorDistribution {
    pub fn for_bar(bar: &Bar) -> FlavorDistribution {
        let flavors = bar
            .get_flavors()
            .into_iter()
            .map(|flavor| FlavorCount {
                ingredients: bar
                    .ingredients()
                    .values()
                    .filter(|i| i.flavor == flavor)
                    .count(),
                cocktails: bar
                    .cocktails()
                    .values()
                    .filter(|c| c.has_flavor(flavor))
                    .count(),
                flavor: flavor.to_string(),
            })
            .collect();
        FlavorDistribution { flavors }
    }
}

impl fmt::Display for FlavorDistribution {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.flavors.is_empty() {
            return write!(f, "No flavors behind the bar.");
        }
        let widest = self.flavors.iter().map(|c| c.flavor.len()).max().unwrap_or(0);
        let most = self.flavors.iter().map(|c| c.cocktails).max().unwrap_or(0);
        for (i, count) in self.flavors.iter().enumerate() {
            if i > 0 {
                writeln!(f)?;
            }
            let bar_len = if most == 0 {
                0
            } else {
                count.cocktails * CHART_WIDTH / most
            };
            write!(
                f,
                "{:widest$}  {:>3} ingredient(s)  {:>3} cocktail(s)  {}",
                count.flavor,
                count.ingredients,
                count.cocktails,
                "#".repeat(bar_len),
            )?;
        }
        Ok(())
    }
}

/// One ingredient's use count: the number of cocktail slots referencing it,
/// duplicates within a single cocktail counted each time.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct UsageCount {
    pub ingredient: String,
    pub uses: usize,
}

/// Ingredient usage across the catalog, most-used first; ties keep stocking
/// order.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct IngredientUsage {
    pub uses: Vec<UsageCount>,
}

impl IngredientUsage {
    pub fn for_bar(bar: &Bar) -> IngredientUsage {
        let uses = bar
            .ingredients()
            .keys()
            .map(|name| UsageCount {
                ingredient: name.clone(),
                uses: bar
                    .cocktails()
                    .values()
                    .flat_map(|c| c.ingredients())
                    .filter(|i| &i.name == name)
                    .count(),
            })
            .sorted_by_key(|u| Reverse(u.uses))
            .collect();
        IngredientUsage { uses }
    }
}

impl fmt::Display for IngredientUsage {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.uses.is_empty() {
            return write!(f, "No ingredients behind the bar.");
        }
        let widest = self.uses.iter().map(|u| u.ingredient.len()).max().unwrap_or(0);
        for (i, usage) in self.uses.iter().enumerate() {
            if i > 0 {
                writeln!(f)?;
            }
            write!(
                f,
                "{:widest$}  used in {} cocktail slot(s)",
                usage.ingredient, usage.uses
            )?;
        }
        Ok(())
    }
}
