//! Core types for stylekit: presets, keyword rule tables, per-domain catalogs,
//! Arrow schemas, and JSON configuration.

pub mod builtin;
pub mod catalog;
pub mod config;
mod error;
pub mod preset;
pub mod rule;
pub mod schema;

pub use catalog::Catalog;
pub use config::{DomainOverride, StyleConfig};
pub use error::{CatalogError, ConfigError};
pub use preset::{Domain, Preset};
pub use rule::{KeywordRule, RuleTable};
