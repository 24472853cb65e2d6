//! JSON configuration layered over the built-in catalogs.
//!
//! ```json
//! {
//!   "article": {
//!     "fallback": "warm",
//!     "rules": [{ "category_id": "warm", "keywords": ["story"] }],
//!     "presets": [{ "id": "warm", "name": "Warm", "description": "", "best_for": "" }]
//!   }
//! }
//! ```
//!
//! Per domain, `rules` replaces the built-in table, `fallback` replaces the
//! fallback id and each entry of `presets` is upserted by id. The merged
//! catalog must pass [`Catalog::validate`].

use std::path::Path;

use serde::{Deserialize, Serialize};
use tracing::{info, warn};

use crate::builtin;
use crate::catalog::Catalog;
use crate::error::ConfigError;
use crate::preset::{Domain, Preset};
use crate::rule::RuleTable;

/// Overrides for a single domain. Every field is optional.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct DomainOverride {
    #[serde(default)]
    pub fallback: Option<String>,
    #[serde(default)]
    pub rules: Option<RuleTable>,
    #[serde(default)]
    pub presets: Vec<Preset>,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct StyleConfig {
    #[serde(default)]
    pub article: Option<DomainOverride>,
    #[serde(default)]
    pub infographic: Option<DomainOverride>,
    #[serde(default, rename = "social-card", alias = "social_card")]
    pub social_card: Option<DomainOverride>,
}

impl StyleConfig {
    pub fn from_json(json: &str) -> Result<Self, ConfigError> {
        Ok(serde_json::from_str(json)?)
    }

    pub fn load(path: &Path) -> Result<Self, ConfigError> {
        let text = std::fs::read_to_string(path).map_err(|source| ConfigError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        let config = Self::from_json(&text)?;
        info!(path = %path.display(), "loaded style config");
        Ok(config)
    }

    pub fn override_for(&self, domain: Domain) -> Option<&DomainOverride> {
        match domain {
            Domain::Article => self.article.as_ref(),
            Domain::Infographic => self.infographic.as_ref(),
            Domain::SocialCard => self.social_card.as_ref(),
        }
    }

    /// Built-in catalog for `domain` with this config's overrides applied.
    pub fn catalog(&self, domain: Domain) -> Result<Catalog, ConfigError> {
        let mut catalog = builtin::catalog(domain);

        if let Some(ov) = self.override_for(domain) {
            for preset in &ov.presets {
                catalog.upsert(preset.clone());
            }
            if let Some(rules) = &ov.rules {
                if rules.is_empty() {
                    warn!(%domain, "config replaces rule table with an empty one; every input will fall back");
                }
                catalog.rules = rules.clone();
            }
            if let Some(fallback) = &ov.fallback {
                catalog.fallback_id = fallback.clone();
            }
            info!(
                %domain,
                presets = catalog.len(),
                rules = catalog.rules.len(),
                fallback = %catalog.fallback_id,
                "applied config overrides"
            );
        }

        catalog.validate().map_err(|source| ConfigError::Catalog {
            domain: domain.to_string(),
            source,
        })?;
        Ok(catalog)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::CatalogError;
    use std::io::Write;

    #[test]
    fn empty_config_yields_builtins() {
        let config = StyleConfig::from_json("{}").unwrap();
        for domain in Domain::ALL {
            assert_eq!(config.catalog(domain).unwrap(), builtin::catalog(domain));
        }
    }

    #[test]
    fn fallback_override() {
        let config = StyleConfig::from_json(r#"{"article": {"fallback": "warm"}}"#).unwrap();
        let cat = config.catalog(Domain::Article).unwrap();
        assert_eq!(cat.fallback_id, "warm");
        // Other domains untouched.
        assert_eq!(config.catalog(Domain::Infographic).unwrap().fallback_id, "flat");
    }

    #[test]
    fn rules_override_replaces_table() {
        let config = StyleConfig::from_json(
            r#"{"infographic": {"rules": [{"category_id": "map", "keywords": ["港口"]}]}}"#,
        )
        .unwrap();
        let cat = config.catalog(Domain::Infographic).unwrap();
        assert_eq!(cat.rules.len(), 1);
        assert_eq!(cat.rules.as_slice()[0].category_id, "map");
    }

    #[test]
    fn presets_are_upserted() {
        let config = StyleConfig::from_json(
            r#"{"social-card": {
                "presets": [
                    {"id": "bold", "name": "Louder", "description": "", "best_for": ""},
                    {"id": "neon", "name": "Neon", "description": "", "best_for": "nightlife"}
                ],
                "rules": [{"category_id": "neon", "keywords": ["night"]}]
            }}"#,
        )
        .unwrap();
        let cat = config.catalog(Domain::SocialCard).unwrap();
        assert_eq!(cat.get("bold").unwrap().name, "Louder");
        assert_eq!(cat.get("neon").unwrap().best_for, "nightlife");
        assert_eq!(cat.len(), builtin::catalog(Domain::SocialCard).len() + 1);
    }

    #[test]
    fn social_card_alias_accepted() {
        let config = StyleConfig::from_json(r#"{"social_card": {"fallback": "quote"}}"#).unwrap();
        assert_eq!(config.catalog(Domain::SocialCard).unwrap().fallback_id, "quote");
    }

    #[test]
    fn invalid_override_is_rejected() {
        let config = StyleConfig::from_json(r#"{"article": {"fallback": "nope"}}"#).unwrap();
        let err = config.catalog(Domain::Article).unwrap_err();
        assert!(matches!(
            err,
            ConfigError::Catalog {
                source: CatalogError::UnknownFallback(_),
                ..
            }
        ));
    }

    #[test]
    fn unknown_keys_rejected() {
        assert!(matches!(
            StyleConfig::from_json(r#"{"poster": {}}"#),
            Err(ConfigError::Json(_))
        ));
    }

    #[test]
    fn load_from_file() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        write!(file, r#"{{"article": {{"fallback": "tech"}}}}"#).unwrap();

        let config = StyleConfig::load(file.path()).unwrap();
        assert_eq!(config.catalog(Domain::Article).unwrap().fallback_id, "tech");
    }

    #[test]
    fn load_missing_file() {
        let err = StyleConfig::load(Path::new("/nonexistent/stylekit.json")).unwrap_err();
        assert!(matches!(err, ConfigError::Io { .. }));
    }
}
