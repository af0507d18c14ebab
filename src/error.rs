use thiserror::Error;

/// Errors that can occur while loading menu data files.
#[derive(Error, Debug)]
pub enum LoadError {
    #[error("failed to read '{path}': {source}")]
    Io {
        path: String,
        #[source]
        source: std::io::Error,
    },

    #[error("{path}:{line_no}: malformed line '{line}': {reason}")]
    Parse {
        path: String,
        line_no: usize,
        line: String,
        reason: String,
    },

    #[error("{path}:{line_no}: cocktail '{cocktail}' references unknown ingredient '{ingredient}'")]
    UnknownIngredient {
        path: String,
        line_no: usize,
        cocktail: String,
        ingredient: String,
    },

    #[error("cannot tell whether '{0}' is an ingredients or a cocktails file")]
    UnknownFormat(String),
}

/// Errors that can occur while working with a bar's catalog and order.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum OrderError {
    #[error("no cocktail named '{0}' on the menu")]
    UnknownCocktail(String),

    #[error("menu index {index} is out of range, the menu has {len} cocktails")]
    IndexOutOfRange { index: usize, len: usize },

    #[error("no ingredient named '{0}' behind the bar")]
    UnknownIngredient(String),
}
