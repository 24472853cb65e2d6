//! Arrow schema definitions for preset catalogs and keyword rules.

use std::sync::Arc;

use arrow::array::{ArrayRef, ListBuilder, StringArray, StringBuilder};
use arrow::datatypes::{DataType, Field, Schema};
use arrow::record_batch::RecordBatch;

use crate::catalog::Catalog;
use crate::error::CatalogError;

fn utf8_list() -> DataType {
    DataType::List(Arc::new(Field::new("item", DataType::Utf8, true)))
}

/// Schema for one preset per row.
pub fn preset_schema() -> Schema {
    Schema::new(vec![
        Field::new("domain", DataType::Utf8, false),
        Field::new("id", DataType::Utf8, false),
        Field::new("name", DataType::Utf8, false),
        Field::new("description", DataType::Utf8, true),
        Field::new("best_for", DataType::Utf8, true),
        Field::new("colors", utf8_list(), true),
        Field::new("background", DataType::Utf8, true),
        Field::new("elements", utf8_list(), true),
    ])
}

/// Schema for one keyword rule per row. Row order is rule order.
pub fn rule_schema() -> Schema {
    Schema::new(vec![
        Field::new("category_id", DataType::Utf8, false),
        Field::new("keywords", utf8_list(), true),
    ])
}

/// Build a `List<Utf8>` column from per-row string slices.
pub fn string_list_array<'a, I>(rows: I) -> ArrayRef
where
    I: IntoIterator<Item = &'a [String]>,
{
    let mut builder = ListBuilder::new(StringBuilder::new());
    for values in rows {
        for v in values {
            builder.values().append_value(v);
        }
        builder.append(true);
    }
    Arc::new(builder.finish())
}

fn string_array<'a>(values: impl Iterator<Item = &'a str>) -> ArrayRef {
    Arc::new(StringArray::from_iter_values(values))
}

/// Render a catalog's presets as a single RecordBatch in declaration order.
pub fn presets_to_batch(catalog: &Catalog) -> Result<RecordBatch, CatalogError> {
    let presets = &catalog.presets;
    let n = presets.len();

    let columns: Vec<ArrayRef> = vec![
        Arc::new(StringArray::from(vec![catalog.domain.as_str(); n])),
        string_array(presets.iter().map(|p| p.id.as_str())),
        string_array(presets.iter().map(|p| p.name.as_str())),
        string_array(presets.iter().map(|p| p.description.as_str())),
        string_array(presets.iter().map(|p| p.best_for.as_str())),
        string_list_array(presets.iter().map(|p| p.colors.as_slice())),
        string_array(presets.iter().map(|p| p.background.as_str())),
        string_list_array(presets.iter().map(|p| p.elements.as_slice())),
    ];

    Ok(RecordBatch::try_new(Arc::new(preset_schema()), columns)?)
}
