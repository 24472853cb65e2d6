use thiserror::Error;

#[derive(Debug, Error)]
pub enum CatalogError {
    #[error("unknown domain: {0}")]
    UnknownDomain(String),

    #[error("no preset with id {id:?} in {domain} catalog")]
    UnknownPreset { domain: String, id: String },

    #[error("duplicate preset id {0:?}")]
    DuplicatePreset(String),

    #[error("fallback id {0:?} is not a preset in this catalog")]
    UnknownFallback(String),

    #[error("rule #{index} points at unknown preset {id:?}")]
    UnknownRuleCategory { index: usize, id: String },

    #[error("arrow error: {0}")]
    Arrow(#[from] arrow::error::ArrowError),
}

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("reading config {path}: {source}")]
    Io {
        path: std::path::PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("parsing config: {0}")]
    Json(#[from] serde_json::Error),

    #[error("invalid {domain} catalog: {source}")]
    Catalog {
        domain: String,
        #[source]
        source: CatalogError,
    },
}
