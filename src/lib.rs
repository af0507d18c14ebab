//! # Barkeep - In-Memory Bar Catalog and Order Engine
//!
//! **Barkeep** models a bar's menu: ingredients, cocktails composed of
//! ingredients, and one running order. Menus load from two flat files, the
//! catalog answers flavor-based recommendations, and the running tab is the
//! sum over everything ordered so far.
//!
//! ## Core Workflow
//!
//! 1.  **Stock the bar**: load an ingredients file (`Name,Price,Flavor` per
//!     line) with [`loader::load_ingredients`], or stock ingredients directly
//!     with [`Bar::add_ingredient`](bar::Bar::add_ingredient).
//! 2.  **Register cocktails**: load a cocktails file
//!     (`Name,"Ing1,Ing2,...",StrengthPercent` per line) with
//!     [`loader::load_cocktails`]; rows resolve their ingredient names
//!     against the stock, so ingredients load first.
//! 3.  **Serve**: recommend by flavor, place orders by name or by catalog
//!     index, and read the running tab.
//! 4.  **Report**: run one of the [`stats`] reports over the catalog.
//!
//! ## Quick Start
//!
//! ```rust,no_run
//! use barkeep::prelude::*;
//!
//! fn main() -> Result<()> {
//!     let mut bar = Bar::new("The Tilted Glass");
//!
//!     // Ingredients first; cocktail rows reference them by name.
//!     loader::load_ingredients(&mut bar, "data/ingredients.csv")?;
//!     loader::load_cocktails(&mut bar, "data/cocktails.csv")?;
//!
//!     for cocktail in bar.recommend("sour") {
//!         println!("how about: {}", cocktail);
//!     }
//!
//!     bar.order_by_name("Whiskey Sour")?;
//!     bar.order_by_name("Whiskey Sour")?;
//!     println!("your tab: ${}", bar.tab());
//!
//!     if let Some(summary) = PriceSummary::for_menu(&bar) {
//!         println!("{}", summary);
//!     }
//!     Ok(())
//! }
//! ```

pub mod bar;
pub mod error;
pub mod loader;
pub mod menu;
pub mod prelude;
pub mod stats;
