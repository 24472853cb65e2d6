//! Keyword-overlap classification of free text into style presets.
//!
//! Text is trimmed and lower-cased, then every rule is scored by how many of
//! its keywords occur in it as literal substrings. The highest score wins;
//! on a tie the rule listed first wins. No rule above zero, or blank input,
//! means the fallback id.
//!
//! Matching is plain containment, so a keyword also hits inside longer words
//! ("art" matches "article"). Duplicate keywords in a rule each count.

use serde::Serialize;
use stylekit_core::{Catalog, ConfigError, Domain, KeywordRule, StyleConfig, builtin};
use tracing::debug;

/// Pick the best-fitting category id for `text`.
///
/// Returns either `fallback_id` or the `category_id` of a rule in `rules`.
/// Never fails; empty rules, blank text and blank keywords are all fine.
pub fn select_best_category<'a>(
    text: &str,
    rules: &'a [KeywordRule],
    fallback_id: &'a str,
) -> &'a str {
    match best_rule(&normalize(text), rules) {
        Some((index, _)) => &rules[index].category_id,
        None => fallback_id,
    }
}

/// Score of one rule against a text, with the keywords that hit.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct RuleScore<'a> {
    pub category_id: &'a str,
    pub score: usize,
    pub matched: Vec<&'a str>,
}

/// Score every rule in table order. Blank text scores zero everywhere.
pub fn score_rules<'a>(text: &str, rules: &'a [KeywordRule]) -> Vec<RuleScore<'a>> {
    let normalized = normalize(text);
    rules
        .iter()
        .map(|rule| {
            let matched: Vec<&str> = if normalized.is_empty() {
                Vec::new()
            } else {
                rule.keywords
                    .iter()
                    .filter(|k| keyword_hits(&normalized, k))
                    .map(|k| k.as_str())
                    .collect()
            };
            RuleScore {
                category_id: &rule.category_id,
                score: matched.len(),
                matched,
            }
        })
        .collect()
}

fn normalize(text: &str) -> String {
    text.trim().to_lowercase()
}

fn keyword_hits(normalized: &str, keyword: &str) -> bool {
    !keyword.trim().is_empty() && normalized.contains(&keyword.to_lowercase())
}

fn rule_score(normalized: &str, rule: &KeywordRule) -> usize {
    rule.keywords
        .iter()
        .filter(|k| keyword_hits(normalized, k))
        .count()
}

/// Index and score of the winning rule, if any rule scores above zero.
fn best_rule(normalized: &str, rules: &[KeywordRule]) -> Option<(usize, usize)> {
    if normalized.is_empty() {
        return None;
    }

    let mut best = None;
    let mut best_score = 0;
    for (index, rule) in rules.iter().enumerate() {
        let score = rule_score(normalized, rule);
        // Strict: an equal score never displaces an earlier rule.
        if score > best_score {
            best_score = score;
            best = Some((index, score));
        }
    }
    best
}

/// Classification result for a single text.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Classification {
    pub text: String,
    pub domain: Domain,
    pub category_id: String,
    /// Winning rule's keyword hits; 0 when the fallback was used.
    pub score: usize,
    /// True when no rule scored and `category_id` is the catalog fallback.
    pub fallback: bool,
}

/// Holds one catalog per domain and classifies text against it.
#[derive(Debug, Clone)]
pub struct Classifier {
    article: Catalog,
    infographic: Catalog,
    social_card: Catalog,
}

impl Classifier {
    /// Classifier over the built-in catalogs.
    pub fn builtin() -> Self {
        Self {
            article: builtin::catalog(Domain::Article),
            infographic: builtin::catalog(Domain::Infographic),
            social_card: builtin::catalog(Domain::SocialCard),
        }
    }

    /// Classifier over the built-in catalogs with `config` overrides applied.
    pub fn from_config(config: &StyleConfig) -> Result<Self, ConfigError> {
        Ok(Self {
            article: config.catalog(Domain::Article)?,
            infographic: config.catalog(Domain::Infographic)?,
            social_card: config.catalog(Domain::SocialCard)?,
        })
    }

    /// Replace the catalog for `catalog.domain`.
    pub fn with_catalog(mut self, catalog: Catalog) -> Self {
        match catalog.domain {
            Domain::Article => self.article = catalog,
            Domain::Infographic => self.infographic = catalog,
            Domain::SocialCard => self.social_card = catalog,
        }
        self
    }

    pub fn catalog(&self, domain: Domain) -> &Catalog {
        match domain {
            Domain::Article => &self.article,
            Domain::Infographic => &self.infographic,
            Domain::SocialCard => &self.social_card,
        }
    }

    /// Classify a single text against the catalog for `domain`.
    pub fn classify(&self, domain: Domain, text: &str) -> Classification {
        let catalog = self.catalog(domain);
        let rules = catalog.rules.as_slice();

        let (category_id, score) = match best_rule(&normalize(text), rules) {
            Some((index, score)) => (rules[index].category_id.clone(), score),
            None => (catalog.fallback_id.clone(), 0),
        };
        let fallback = score == 0;

        debug!(%domain, category = %category_id, score, fallback, "classified text");

        Classification {
            text: text.to_string(),
            domain,
            category_id,
            score,
            fallback,
        }
    }

    /// Classify many texts against the catalog for `domain`, in input order.
    pub fn classify_batch<I, S>(&self, domain: Domain, texts: I) -> Vec<Classification>
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        texts
            .into_iter()
            .map(|t| self.classify(domain, t.as_ref()))
            .collect()
    }
}
