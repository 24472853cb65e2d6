//! Keyword rule tables exchanged as Arrow RecordBatches.
//!
//! One row per rule: `category_id` (Utf8 or LargeUtf8) and `keywords`
//! (List or LargeList of strings). Row order across all batches is rule
//! order, which decides ties during classification.

use std::sync::Arc;

use arrow::array::{Array, ArrayRef, LargeListArray, LargeStringArray, ListArray, StringArray};
use arrow::record_batch::RecordBatch;
use stylekit_core::schema::{rule_schema, string_list_array};
use stylekit_core::{KeywordRule, RuleTable};

/// Build a RuleTable from Arrow batches, keeping row order.
///
/// A null `keywords` list yields a rule with no keywords; null list items are
/// skipped. A null `category_id` is an error.
pub fn rules_from_batches(batches: &[RecordBatch]) -> anyhow::Result<RuleTable> {
    let mut table = RuleTable::default();

    for batch in batches {
        let id_col = batch
            .column_by_name("category_id")
            .ok_or_else(|| anyhow::anyhow!("missing 'category_id' column"))?;
        let keywords_col = batch
            .column_by_name("keywords")
            .ok_or_else(|| anyhow::anyhow!("missing 'keywords' column"))?;

        for row in 0..batch.num_rows() {
            let category_id = get_string(id_col.as_ref(), row)
                .ok_or_else(|| anyhow::anyhow!("null or non-string category_id at row {row}"))?;
            let keywords = get_string_list(keywords_col.as_ref(), row).unwrap_or_default();
            table.push(KeywordRule {
                category_id,
                keywords,
            });
        }
    }

    Ok(table)
}

/// Render a RuleTable as a single RecordBatch matching [`rule_schema`].
pub fn rules_to_batch(table: &RuleTable) -> anyhow::Result<RecordBatch> {
    let ids = StringArray::from_iter_values(table.category_ids());
    let keywords = string_list_array(table.iter().map(|r| r.keywords.as_slice()));

    Ok(RecordBatch::try_new(
        Arc::new(rule_schema()),
        vec![Arc::new(ids) as ArrayRef, keywords],
    )?)
}

// ── Arrow extraction helpers ──

fn get_string(col: &dyn Array, row: usize) -> Option<String> {
    if col.is_null(row) {
        return None;
    }
    col.as_any()
        .downcast_ref::<StringArray>()
        .map(|arr| arr.value(row).to_string())
        .or_else(|| {
            col.as_any()
                .downcast_ref::<LargeStringArray>()
                .map(|arr| arr.value(row).to_string())
        })
}

fn get_string_list(col: &dyn Array, row: usize) -> Option<Vec<String>> {
    if col.is_null(row) {
        return None;
    }

    if let Some(list) = col.as_any().downcast_ref::<ListArray>() {
        return Some(strings_from_array(list.value(row).as_ref()));
    }
    if let Some(list) = col.as_any().downcast_ref::<LargeListArray>() {
        return Some(strings_from_array(list.value(row).as_ref()));
    }

    None
}

fn strings_from_array(arr: &dyn Array) -> Vec<String> {
    let mut out = Vec::with_capacity(arr.len());
    if let Some(a) = arr.as_any().downcast_ref::<StringArray>() {
        for i in 0..a.len() {
            if !a.is_null(i) {
                out.push(a.value(i).to_string());
            }
        }
    } else if let Some(a) = arr.as_any().downcast_ref::<LargeStringArray>() {
        for i in 0..a.len() {
            if !a.is_null(i) {
                out.push(a.value(i).to_string());
            }
        }
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::select_best_category;
    use arrow::array::{LargeListBuilder, LargeStringBuilder, ListBuilder, StringBuilder};
    use arrow::datatypes::{DataType, Field, Schema};

    /// Build a rule batch; `None` keywords become a null list.
    fn rule_batch(rows: &[(Option<&str>, Option<Vec<Option<&str>>>)]) -> RecordBatch {
        let ids = StringArray::from(rows.iter().map(|(id, _)| *id).collect::<Vec<_>>());

        let mut kw_builder = ListBuilder::new(StringBuilder::new());
        for (_, kws) in rows {
            match kws {
                Some(values) => {
                    for v in values {
                        kw_builder.values().append_option(*v);
                    }
                    kw_builder.append(true);
                }
                None => kw_builder.append(false),
            }
        }

        let schema = Schema::new(vec![
            Field::new("category_id", DataType::Utf8, true),
            Field::new(
                "keywords",
                DataType::List(Arc::new(Field::new("item", DataType::Utf8, true))),
                true,
            ),
        ]);

        RecordBatch::try_new(
            Arc::new(schema),
            vec![Arc::new(ids), Arc::new(kw_builder.finish())],
        )
        .unwrap()
    }

    #[test]
    fn extracts_rules_in_row_order() {
        let batch = rule_batch(&[
            (Some("notion"), Some(vec![Some("知识"), Some("效率")])),
            (Some("warm"), Some(vec![Some("故事"), Some("情感")])),
        ]);

        let table = rules_from_batches(&[batch]).unwrap();
        assert_eq!(table.len(), 2);
        assert_eq!(table.as_slice()[0], KeywordRule::new("notion", ["知识", "效率"]));
        assert_eq!(table.as_slice()[1], KeywordRule::new("warm", ["故事", "情感"]));
    }

    #[test]
    fn null_keyword_list_gives_empty_rule() {
        let batch = rule_batch(&[(Some("bare"), None)]);
        let table = rules_from_batches(&[batch]).unwrap();
        assert_eq!(table.len(), 1);
        assert!(table.as_slice()[0].keywords.is_empty());
    }

    #[test]
    fn null_keyword_items_skipped() {
        let batch = rule_batch(&[(Some("a"), Some(vec![Some("x"), None, Some("y")]))]);
        let table = rules_from_batches(&[batch]).unwrap();
        assert_eq!(table.as_slice()[0].keywords, vec!["x", "y"]);
    }

    #[test]
    fn null_category_id_is_error() {
        let batch = rule_batch(&[(Some("a"), None), (None, Some(vec![Some("x")]))]);
        let err = rules_from_batches(&[batch]).unwrap_err();
        assert!(err.to_string().contains("row 1"), "{err}");
    }

    #[test]
    fn missing_column_is_error() {
        let schema = Schema::new(vec![Field::new("category_id", DataType::Utf8, false)]);
        let batch = RecordBatch::try_new(
            Arc::new(schema),
            vec![Arc::new(StringArray::from(vec!["a"]))],
        )
        .unwrap();
        let err = rules_from_batches(&[batch]).unwrap_err();
        assert!(err.to_string().contains("keywords"));
    }

    #[test]
    fn multiple_batches_concatenate_in_order() {
        let b1 = rule_batch(&[(Some("first"), Some(vec![Some("shared")]))]);
        let b2 = rule_batch(&[(Some("second"), Some(vec![Some("shared")]))]);

        let table = rules_from_batches(&[b1, b2]).unwrap();
        let ids: Vec<_> = table.category_ids().collect();
        assert_eq!(ids, vec!["first", "second"]);
        // Tie goes to the rule from the earlier batch.
        assert_eq!(select_best_category("shared", table.as_slice(), "fb"), "first");
    }

    #[test]
    fn large_types_accepted() {
        let ids = LargeStringArray::from(vec!["tech"]);
        let mut kw_builder = LargeListBuilder::new(LargeStringBuilder::new());
        kw_builder.values().append_value("AI");
        kw_builder.append(true);

        let schema = Schema::new(vec![
            Field::new("category_id", DataType::LargeUtf8, false),
            Field::new(
                "keywords",
                DataType::LargeList(Arc::new(Field::new("item", DataType::LargeUtf8, true))),
                true,
            ),
        ]);
        let batch = RecordBatch::try_new(
            Arc::new(schema),
            vec![Arc::new(ids), Arc::new(kw_builder.finish())],
        )
        .unwrap();

        let table = rules_from_batches(&[batch]).unwrap();
        assert_eq!(table.as_slice()[0], KeywordRule::new("tech", ["AI"]));
    }

    #[test]
    fn batch_export_matches_schema() {
        let table = stylekit_core::builtin::catalog(stylekit_core::Domain::Article).rules;
        let batch = rules_to_batch(&table).unwrap();
        assert_eq!(batch.schema().as_ref(), &rule_schema());
        assert_eq!(batch.num_rows(), table.len());
        assert_eq!(rules_from_batches(&[batch]).unwrap(), table);
    }

    #[test]
    fn empty_batches() {
        let table = rules_from_batches(&[]).unwrap();
        assert!(table.is_empty());
    }
}
