//! Keyword rule tables used to score free text against preset ids.

use serde::{Deserialize, Serialize};

/// One category and the keywords that vote for it.
///
/// `category_id` is opaque here; whether it names a real preset is checked by
/// [`Catalog::validate`](crate::Catalog::validate), not by the classifier.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct KeywordRule {
    pub category_id: String,
    #[serde(default)]
    pub keywords: Vec<String>,
}

impl KeywordRule {
    pub fn new<I, S>(category_id: impl Into<String>, keywords: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            category_id: category_id.into(),
            keywords: keywords.into_iter().map(Into::into).collect(),
        }
    }
}

/// Ordered rule list. Position decides ties: the earlier rule wins.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct RuleTable {
    rules: Vec<KeywordRule>,
}

impl RuleTable {
    pub fn new(rules: Vec<KeywordRule>) -> Self {
        Self { rules }
    }

    pub fn as_slice(&self) -> &[KeywordRule] {
        &self.rules
    }

    pub fn iter(&self) -> std::slice::Iter<'_, KeywordRule> {
        self.rules.iter()
    }

    pub fn len(&self) -> usize {
        self.rules.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rules.is_empty()
    }

    /// Category ids in table order (duplicates kept).
    pub fn category_ids(&self) -> impl Iterator<Item = &str> {
        self.rules.iter().map(|r| r.category_id.as_str())
    }

    pub fn push(&mut self, rule: KeywordRule) {
        self.rules.push(rule);
    }
}

impl From<Vec<KeywordRule>> for RuleTable {
    fn from(rules: Vec<KeywordRule>) -> Self {
        Self::new(rules)
    }
}

impl FromIterator<KeywordRule> for RuleTable {
    fn from_iter<T: IntoIterator<Item = KeywordRule>>(iter: T) -> Self {
        Self::new(iter.into_iter().collect())
    }
}

impl<'a> IntoIterator for &'a RuleTable {
    type Item = &'a KeywordRule;
    type IntoIter = std::slice::Iter<'a, KeywordRule>;

    fn into_iter(self) -> Self::IntoIter {
        self.rules.iter()
    }
}
