//! Preset records and the domains they belong to.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::CatalogError;

/// Which family of generated imagery a preset catalog serves.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum Domain {
    /// Article cover and inline illustrations.
    Article,
    /// Data-led infographics.
    Infographic,
    /// Social-media share cards.
    SocialCard,
}

impl Domain {
    pub const ALL: [Domain; 3] = [Domain::Article, Domain::Infographic, Domain::SocialCard];

    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Article => "article",
            Self::Infographic => "infographic",
            Self::SocialCard => "social-card",
        }
    }
}

impl fmt::Display for Domain {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Domain {
    type Err = CatalogError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "article" => Ok(Self::Article),
            "infographic" => Ok(Self::Infographic),
            "social-card" | "social_card" | "social" => Ok(Self::SocialCard),
            other => Err(CatalogError::UnknownDomain(other.to_string())),
        }
    }
}

/// A named bundle of visual parameters for one style.
///
/// Every field is an opaque payload for downstream prompt builders; nothing in
/// this workspace interprets the color or element strings.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Preset {
    pub id: String,
    pub name: String,
    pub description: String,
    /// What kind of content the style suits.
    pub best_for: String,
    /// Color references (hex codes or named colors).
    #[serde(default)]
    pub colors: Vec<String>,
    #[serde(default)]
    pub background: String,
    /// Decorative motifs.
    #[serde(default)]
    pub elements: Vec<String>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn domain_parses_canonical_and_aliases() {
        assert_eq!("article".parse::<Domain>().unwrap(), Domain::Article);
        assert_eq!("Infographic".parse::<Domain>().unwrap(), Domain::Infographic);
        assert_eq!("social-card".parse::<Domain>().unwrap(), Domain::SocialCard);
        assert_eq!("social_card".parse::<Domain>().unwrap(), Domain::SocialCard);
        assert_eq!(" social ".parse::<Domain>().unwrap(), Domain::SocialCard);
    }

    #[test]
    fn domain_rejects_unknown() {
        let err = "poster".parse::<Domain>().unwrap_err();
        assert!(matches!(err, CatalogError::UnknownDomain(ref d) if d == "poster"));
    }

    #[test]
    fn domain_display_matches_serde() {
        for domain in Domain::ALL {
            let json = serde_json::to_string(&domain).unwrap();
            assert_eq!(json, format!("\"{domain}\""));
        }
    }

    #[test]
    fn preset_optional_fields_default() {
        let json = r#"{
            "id": "plain",
            "name": "Plain",
            "description": "No decoration",
            "best_for": "anything"
        }"#;
        let preset: Preset = serde_json::from_str(json).unwrap();
        assert_eq!(preset.id, "plain");
        assert!(preset.colors.is_empty());
        assert!(preset.background.is_empty());
        assert!(preset.elements.is_empty());
    }
}
