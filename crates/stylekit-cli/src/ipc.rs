//! Arrow IPC file I/O for exported catalogs and rule tables.

use std::fs::File;
use std::path::{Path, PathBuf};

use anyhow::Context;
use arrow::datatypes::Schema;
use arrow::ipc::reader::FileReader;
use arrow::ipc::writer::FileWriter;
use arrow::record_batch::RecordBatch;
use stylekit_classify::{rules_from_batches, rules_to_batch};
use stylekit_core::schema::presets_to_batch;
use stylekit_core::{Catalog, RuleTable};
use tracing::info;

pub fn write_batches(path: &Path, schema: &Schema, batches: &[RecordBatch]) -> anyhow::Result<()> {
    let file = File::create(path).with_context(|| format!("creating {}", path.display()))?;
    let mut writer = FileWriter::try_new(file, schema)?;
    for batch in batches {
        writer.write(batch)?;
    }
    writer.finish()?;

    let rows: usize = batches.iter().map(|b| b.num_rows()).sum();
    info!(path = %path.display(), rows, "wrote arrow file");
    Ok(())
}

pub fn read_batches(path: &Path) -> anyhow::Result<Vec<RecordBatch>> {
    let file = File::open(path).with_context(|| format!("opening {}", path.display()))?;
    let reader = FileReader::try_new(file, None)
        .with_context(|| format!("{} is not an Arrow IPC file", path.display()))?;
    let batches = reader.collect::<Result<Vec<_>, _>>()?;

    let rows: usize = batches.iter().map(|b| b.num_rows()).sum();
    info!(path = %path.display(), rows, "read arrow file");
    Ok(batches)
}

/// Load a rule table from an IPC file written by [`export_catalog`] (or any
/// file with `category_id` and `keywords` columns).
pub fn read_rules(path: &Path) -> anyhow::Result<RuleTable> {
    let batches = read_batches(path)?;
    rules_from_batches(&batches).with_context(|| format!("reading rules from {}", path.display()))
}

/// Write `<domain>_presets.arrow` and `<domain>_rules.arrow` into `dir`.
///
/// Returns the two paths written.
pub fn export_catalog(catalog: &Catalog, dir: &Path) -> anyhow::Result<(PathBuf, PathBuf)> {
    std::fs::create_dir_all(dir).with_context(|| format!("creating {}", dir.display()))?;
    let stem = catalog.domain.as_str().replace('-', "_");

    let presets_path = dir.join(format!("{stem}_presets.arrow"));
    let presets = presets_to_batch(catalog)?;
    write_batches(&presets_path, &presets.schema(), &[presets])?;

    let rules_path = dir.join(format!("{stem}_rules.arrow"));
    let rules = rules_to_batch(&catalog.rules)?;
    write_batches(&rules_path, &rules.schema(), &[rules])?;

    Ok((presets_path, rules_path))
}
