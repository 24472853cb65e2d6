//! Vertical card display for preset records.
//!
//! Renders a single-row preset RecordBatch as grouped, human-readable
//! sections, formatting scalar and `List<Utf8>` columns.

use std::fmt::Write;

use arrow::array::*;
use arrow::datatypes::DataType;
use arrow::record_batch::RecordBatch;

use stylekit_classify::RuleScore;

// ── Schema section groupings ──

const IDENTITY: &[&str] = &["domain", "id", "name"];

const GUIDANCE: &[&str] = &["description", "best_for"];

const VISUALS: &[&str] = &["colors", "background", "elements"];

// ── Public API ──

/// Render row 0 of a preset batch as a card, followed by its rule keywords.
pub fn render_preset_card(batch: &RecordBatch, keywords: &[String]) -> anyhow::Result<String> {
    if batch.num_rows() == 0 {
        anyhow::bail!("no preset row to display");
    }

    let id = get_utf8(batch, "id").unwrap_or_default();
    let name = get_utf8(batch, "name").unwrap_or_default();

    let mut out = String::new();
    writeln!(out, "=== {id} ===")?;
    if !name.is_empty() {
        writeln!(out, "{name}")?;
    }
    writeln!(out)?;

    render_section(&mut out, batch, "Identity", IDENTITY)?;
    render_section(&mut out, batch, "Guidance", GUIDANCE)?;
    render_section(&mut out, batch, "Visuals", VISUALS)?;

    let keywords: Vec<&str> = keywords
        .iter()
        .map(|k| k.as_str())
        .filter(|k| !k.trim().is_empty())
        .collect();
    if !keywords.is_empty() {
        writeln!(out, "Keywords")?;
        writeln!(out, "  {}", keywords.join(", "))?;
    }

    Ok(out)
}

/// Render per-rule scores, marking the winner: the first row holding the
/// highest non-zero score.
pub fn render_scores(scores: &[RuleScore<'_>]) -> Result<String, std::fmt::Error> {
    let best = scores.iter().map(|s| s.score).max().unwrap_or(0);
    let winner = scores.iter().position(|s| best > 0 && s.score == best);

    let mut out = String::new();
    for (i, s) in scores.iter().enumerate() {
        let mark = if winner == Some(i) { '*' } else { ' ' };
        writeln!(
            out,
            "{mark} {:<14} {:>2}  {}",
            s.category_id,
            s.score,
            s.matched.join(", ")
        )?;
    }
    Ok(out)
}

// ── Section rendering ──

fn render_section(
    out: &mut String,
    batch: &RecordBatch,
    header: &str,
    cols: &[&str],
) -> std::fmt::Result {
    let has_data = cols.iter().any(|&col| {
        batch
            .schema()
            .index_of(col)
            .ok()
            .is_some_and(|i| !batch.column(i).is_null(0))
    });
    if !has_data {
        return Ok(());
    }

    writeln!(out, "{header}")?;
    for &col_name in cols {
        let idx = match batch.schema().index_of(col_name) {
            Ok(i) => i,
            Err(_) => continue,
        };
        let col = batch.column(idx);
        if col.is_null(0) {
            continue;
        }

        match col.data_type() {
            DataType::Utf8 | DataType::LargeUtf8 => {
                if let Some(v) = col_str(col.as_ref(), 0)
                    && !v.is_empty()
                {
                    writeln!(out, "  {:<14} {}", col_name, v)?;
                }
            }
            DataType::List(_) => {
                let items = list_utf8(col.as_ref());
                if !items.is_empty() {
                    writeln!(out, "  {:<14} {}", col_name, items.join(", "))?;
                }
            }
            other => writeln!(out, "  {:<14} ({other})", col_name)?,
        }
    }
    writeln!(out)
}

// ── Helpers ──

fn get_utf8(batch: &RecordBatch, col_name: &str) -> Option<String> {
    let col = batch.column_by_name(col_name)?;
    col_str(col.as_ref(), 0).map(str::to_string)
}

/// Get a string value from a column that might be Utf8 or LargeUtf8.
fn col_str(col: &dyn Array, i: usize) -> Option<&str> {
    if col.is_null(i) {
        return None;
    }
    if let Some(arr) = col.as_any().downcast_ref::<StringArray>() {
        return Some(arr.value(i));
    }
    if let Some(arr) = col.as_any().downcast_ref::<LargeStringArray>() {
        return Some(arr.value(i));
    }
    None
}

fn list_utf8(col: &dyn Array) -> Vec<String> {
    let Some(list) = col.as_any().downcast_ref::<ListArray>() else {
        return Vec::new();
    };
    let values = list.value(0);
    (0..values.len())
        .filter_map(|i| col_str(values.as_ref(), i).map(str::to_string))
        .collect()
}
