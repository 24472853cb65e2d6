//! Per-domain preset catalogs: the lookup side of classification.
//!
//! The classifier only ever returns a string id. A [`Catalog`] turns that id
//! back into a [`Preset`] and is where unknown ids are caught.

use std::collections::HashSet;

use serde::{Deserialize, Serialize};

use crate::error::CatalogError;
use crate::preset::{Domain, Preset};
use crate::rule::RuleTable;

/// Presets, keyword rules and fallback id for one domain.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Catalog {
    pub domain: Domain,
    pub fallback_id: String,
    pub presets: Vec<Preset>,
    pub rules: RuleTable,
}

impl Catalog {
    pub fn get(&self, id: &str) -> Option<&Preset> {
        self.presets.iter().find(|p| p.id == id)
    }

    /// Like [`get`](Self::get), but an unknown id is an error.
    pub fn resolve(&self, id: &str) -> Result<&Preset, CatalogError> {
        self.get(id).ok_or_else(|| CatalogError::UnknownPreset {
            domain: self.domain.to_string(),
            id: id.to_string(),
        })
    }

    /// The fallback preset. Only fails on a catalog that skipped `validate`.
    pub fn fallback(&self) -> Result<&Preset, CatalogError> {
        self.resolve(&self.fallback_id)
    }

    /// Preset ids in declaration order.
    pub fn ids(&self) -> impl Iterator<Item = &str> {
        self.presets.iter().map(|p| p.id.as_str())
    }

    pub fn len(&self) -> usize {
        self.presets.len()
    }

    pub fn is_empty(&self) -> bool {
        self.presets.is_empty()
    }

    /// Replace the preset with the same id, or append it.
    pub fn upsert(&mut self, preset: Preset) {
        match self.presets.iter_mut().find(|p| p.id == preset.id) {
            Some(slot) => *slot = preset,
            None => self.presets.push(preset),
        }
    }

    /// Check that ids are unique and that the fallback and every rule point
    /// at a preset that exists.
    pub fn validate(&self) -> Result<(), CatalogError> {
        let mut seen = HashSet::with_capacity(self.presets.len());
        for preset in &self.presets {
            if !seen.insert(preset.id.as_str()) {
                return Err(CatalogError::DuplicatePreset(preset.id.clone()));
            }
        }

        if !seen.contains(self.fallback_id.as_str()) {
            return Err(CatalogError::UnknownFallback(self.fallback_id.clone()));
        }

        for (index, id) in self.rules.category_ids().enumerate() {
            if !seen.contains(id) {
                return Err(CatalogError::UnknownRuleCategory {
                    index,
                    id: id.to_string(),
                });
            }
        }

        Ok(())
    }
}
