//! Prelude module for convenient imports
//!
//! Re-exports the most commonly used types from the barkeep crate so callers
//! can bring the whole surface in with one `use`.

// The aggregate root
pub use crate::bar::{Bar, RECOMMEND_LIMIT};

// Menu value types
pub use crate::menu::{Cocktail, Ingredient};

// File ingestion
pub use crate::loader::{self, MenuFormat};

// Analytics reports
pub use crate::stats::{FlavorDistribution, IngredientUsage, PriceSummary};

// Error types
pub use crate::error::{LoadError, OrderError};

// Result type alias for convenience
pub type Result<T> = std::result::Result<T, Box<dyn std::error::Error>>;
