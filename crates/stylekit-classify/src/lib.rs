//! Classification layer: scores free text against keyword rule tables and
//! picks the best-fit preset id.

mod classifier;
pub mod rules;

pub use classifier::{Classification, Classifier, RuleScore, score_rules, select_best_category};
pub use rules::{rules_from_batches, rules_to_batch};
