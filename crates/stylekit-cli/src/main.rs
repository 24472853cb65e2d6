mod display;
mod ipc;

use std::path::{Path, PathBuf};

use anyhow::Context;
use clap::{Parser, Subcommand};
use stylekit_classify::{Classifier, score_rules};
use stylekit_core::schema::presets_to_batch;
use stylekit_core::{Domain, StyleConfig};

#[derive(Parser)]
#[command(name = "stylekit", version)]
#[command(about = "Pick visual style presets for generated article art, infographics and social cards")]
struct Cli {
    /// JSON file with per-domain catalog overrides
    #[arg(long, global = true, env = "STYLEKIT_CONFIG")]
    config: Option<PathBuf>,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand)]
enum Command {
    /// Pick the best-fit preset for a piece of text
    Classify {
        /// article, infographic or social-card
        #[arg(short, long, default_value = "article")]
        domain: Domain,

        /// Arrow IPC file replacing the domain's keyword rules
        #[arg(long)]
        rules: Option<PathBuf>,

        /// Print every rule's score and matched keywords
        #[arg(long)]
        explain: bool,

        /// Print the result as JSON
        #[arg(long)]
        json: bool,

        /// Text to classify (words are joined with spaces)
        #[arg(required = true)]
        text: Vec<String>,
    },

    /// List the presets of a domain
    Presets {
        #[arg(short, long, default_value = "article")]
        domain: Domain,
    },

    /// Show one preset as a card
    Show {
        #[arg(short, long, default_value = "article")]
        domain: Domain,

        id: String,
    },

    /// Write presets and rules as Arrow IPC files
    Export {
        /// Export only this domain (default: all)
        #[arg(short, long)]
        domain: Option<Domain>,

        #[arg(short, long, default_value = ".")]
        out: PathBuf,
    },
}

fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt().with_writer(std::io::stderr).init();

    let cli = Cli::parse();
    tracing::debug!("stylekit v{}", env!("CARGO_PKG_VERSION"));

    let classifier = load_classifier(cli.config.as_deref())?;

    match cli.command {
        Command::Classify {
            domain,
            rules,
            explain,
            json,
            text,
        } => {
            let classifier = match rules {
                Some(path) => with_rules_file(classifier, domain, &path)?,
                None => classifier,
            };
            classify(&classifier, domain, &text.join(" "), explain, json)
        }
        Command::Presets { domain } => {
            let batch = presets_to_batch(classifier.catalog(domain))?;
            // id, name, best_for, background
            let summary = batch.project(&[1, 2, 4, 6])?;
            arrow::util::pretty::print_batches(&[summary])?;
            Ok(())
        }
        Command::Show { domain, id } => {
            let catalog = classifier.catalog(domain);
            catalog.resolve(&id)?;
            let idx = catalog
                .ids()
                .position(|p| p == id)
                .context("preset vanished from catalog")?;
            let keywords: Vec<String> = catalog
                .rules
                .iter()
                .filter(|r| r.category_id == id)
                .flat_map(|r| r.keywords.iter().cloned())
                .collect();

            let row = presets_to_batch(catalog)?.slice(idx, 1);
            print!("{}", display::render_preset_card(&row, &keywords)?);
            Ok(())
        }
        Command::Export { domain, out } => {
            let domains = match domain {
                Some(d) => vec![d],
                None => Domain::ALL.to_vec(),
            };
            for d in domains {
                let (presets, rules) = ipc::export_catalog(classifier.catalog(d), &out)?;
                println!("{}", presets.display());
                println!("{}", rules.display());
            }
            Ok(())
        }
    }
}

fn load_classifier(config: Option<&Path>) -> anyhow::Result<Classifier> {
    match config {
        Some(path) => {
            let config = StyleConfig::load(path)?;
            Ok(Classifier::from_config(&config)?)
        }
        None => Ok(Classifier::builtin()),
    }
}

/// Swap in a rule table read from an Arrow IPC file, checked against the
/// domain's presets.
fn with_rules_file(
    classifier: Classifier,
    domain: Domain,
    path: &Path,
) -> anyhow::Result<Classifier> {
    let mut catalog = classifier.catalog(domain).clone();
    catalog.rules = ipc::read_rules(path)?;
    catalog.validate().with_context(|| {
        format!(
            "rules in {} do not match the {domain} presets",
            path.display()
        )
    })?;
    Ok(classifier.with_catalog(catalog))
}

fn classify(
    classifier: &Classifier,
    domain: Domain,
    text: &str,
    explain: bool,
    json: bool,
) -> anyhow::Result<()> {
    let catalog = classifier.catalog(domain);
    let result = classifier.classify(domain, text);
    let preset = catalog.resolve(&result.category_id)?;

    if json {
        let value = if explain {
            serde_json::json!({
                "classification": result,
                "preset": preset,
                "scores": score_rules(text, catalog.rules.as_slice()),
            })
        } else {
            serde_json::json!({
                "classification": result,
                "preset": preset,
            })
        };
        println!("{}", serde_json::to_string_pretty(&value)?);
        return Ok(());
    }

    if result.fallback {
        println!("{}\t{}\t(fallback)", preset.id, preset.name);
    } else {
        println!("{}\t{}\t(score {})", preset.id, preset.name, result.score);
    }

    if explain {
        let scores = score_rules(text, catalog.rules.as_slice());
        print!("{}", display::render_scores(&scores)?);
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::CommandFactory;
    use stylekit_classify::rules_to_batch;
    use stylekit_core::{KeywordRule, RuleTable};

    #[test]
    fn cli_definition_is_valid() {
        Cli::command().debug_assert();
    }

    #[test]
    fn parses_classify_args() {
        let cli = Cli::try_parse_from([
            "stylekit", "classify", "-d", "social-card", "--explain", "新品", "发布",
        ])
        .unwrap();
        match cli.command {
            Command::Classify {
                domain,
                explain,
                json,
                text,
                ..
            } => {
                assert_eq!(domain, Domain::SocialCard);
                assert!(explain);
                assert!(!json);
                assert_eq!(text, vec!["新品", "发布"]);
            }
            _ => panic!("expected classify"),
        }
    }

    #[test]
    fn rejects_unknown_domain() {
        assert!(Cli::try_parse_from(["stylekit", "presets", "-d", "poster"]).is_err());
    }

    #[test]
    fn builtin_without_config() {
        let clf = load_classifier(None).unwrap();
        assert_eq!(clf.catalog(Domain::Article).fallback_id, "notion");
    }

    #[test]
    fn config_file_applied() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("stylekit.json");
        std::fs::write(&path, r#"{"infographic": {"fallback": "map"}}"#).unwrap();

        let clf = load_classifier(Some(&path)).unwrap();
        assert_eq!(clf.catalog(Domain::Infographic).fallback_id, "map");
    }

    #[test]
    fn rules_file_replaces_domain_rules() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("rules.arrow");
        let table: RuleTable = vec![KeywordRule::new("nature", ["天气"])].into();
        let batch = rules_to_batch(&table).unwrap();
        ipc::write_batches(&path, &batch.schema(), &[batch]).unwrap();

        let clf = with_rules_file(Classifier::builtin(), Domain::Article, &path).unwrap();
        let c = clf.classify(Domain::Article, "今天天气很好");
        assert_eq!(c.category_id, "nature");
        assert!(!c.fallback);
    }

    #[test]
    fn rules_file_with_unknown_preset_rejected() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("rules.arrow");
        let table: RuleTable = vec![KeywordRule::new("ghost", ["x"])].into();
        let batch = rules_to_batch(&table).unwrap();
        ipc::write_batches(&path, &batch.schema(), &[batch]).unwrap();

        let err = with_rules_file(Classifier::builtin(), Domain::Article, &path).unwrap_err();
        assert!(format!("{err:#}").contains("ghost"));
    }
}
