//! Error types.

/// The wrapped content violates the container's structural assumptions.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ConfigError {
    #[error("Container expects exactly one child element, found {found}")]
    ChildCount { found: usize },

    #[error("Container child must be a <table>, found <{tag}>")]
    NotATable { tag: String },
}

#[derive(Debug, thiserror::Error)]
pub enum Error {
    #[error(transparent)]
    Config(#[from] ConfigError),

    #[error(transparent)]
    Parse(#[from] tabledom::ParseError),

    #[error("Invalid container configuration: {0}")]
    Json(#[from] serde_json::Error),
}

pub type Result<T> = std::result::Result<T, Error>;
