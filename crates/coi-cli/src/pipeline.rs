//! Load, transform, and save workflows behind each command.
//!
//! Every workflow is one full read, transform, write cycle; nothing is
//! streamed and nothing is resumed.

use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use tracing::{info, info_span};

use coi_enrich::{Pass, PassReport, run_passes};
use coi_ingest::{
    BuildOptions, ColumnSelector, CplMerge, build_am_best_index, build_collection, list_sheets,
    merge_cpl, read_table,
};
use coi_store::{
    AM_BEST_FILE_NAME, StoreError, batch_file_name, load_collection, save_collection, save_json,
};

/// Row and column counts of one sheet.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SheetStats {
    pub name: String,
    pub rows: usize,
    pub columns: usize,
    /// Header names with their 1-based positions, as accepted by column selectors.
    pub headers: Vec<(usize, String)>,
}

/// User-facing message and suggestion of the first store error in `error`'s chain.
pub fn store_guidance(error: &anyhow::Error) -> Option<(String, Option<String>)> {
    error
        .chain()
        .find_map(|cause| cause.downcast_ref::<StoreError>())
        .map(|store| (store.user_message(), store.suggestion()))
}

/// Statistics for every sheet of a source.
pub fn inspect_source(source: &Path) -> Result<Vec<SheetStats>> {
    let sheets =
        list_sheets(source).with_context(|| format!("list sheets of {}", source.display()))?;
    let mut stats = Vec::with_capacity(sheets.len());
    for sheet in sheets {
        let table = read_table(source, Some(&sheet))
            .with_context(|| format!("read sheet {sheet} of {}", source.display()))?;
        stats.push(SheetStats {
            name: sheet,
            rows: table.non_empty_rows(),
            columns: table.non_empty_columns(),
            headers: table.numbered_headers(),
        });
    }
    Ok(stats)
}

/// Inputs of one extraction batch.
#[derive(Debug, Clone)]
pub struct ExtractRequest {
    pub source: PathBuf,
    /// Sheet to read; the first sheet when absent.
    pub sheet: Option<String>,
    pub options: BuildOptions,
    pub output_dir: PathBuf,
}

#[derive(Debug, Clone)]
pub struct ExtractResult {
    pub table: String,
    pub created: usize,
    pub skipped: usize,
    /// Store written, or `None` when the batch produced no records.
    pub destination: Option<PathBuf>,
}

/// Build records from a sheet and save them to the batch's store.
pub fn extract(request: &ExtractRequest) -> Result<ExtractResult> {
    let table = read_table(&request.source, request.sheet.as_deref())
        .with_context(|| format!("read {}", request.source.display()))?;
    let _span = info_span!("extract", table = %table.name).entered();

    let outcome = build_collection(&table, &request.options)
        .with_context(|| format!("build records from {}", table.name))?;
    let destination = if outcome.collection.is_empty() {
        info!("no records built; nothing saved");
        None
    } else {
        let path = request
            .output_dir
            .join(batch_file_name(&request.source, &table.name));
        save_collection(&outcome.collection, &path)
            .with_context(|| format!("save {}", path.display()))?;
        Some(path)
    };

    Ok(ExtractResult {
        table: table.name,
        created: outcome.created,
        skipped: outcome.skipped,
        destination,
    })
}

/// Inputs of one CPL merge.
#[derive(Debug, Clone)]
pub struct CplRequest {
    pub store: PathBuf,
    pub source: PathBuf,
    pub sheet: Option<String>,
    pub code_column: ColumnSelector,
    pub value_column: ColumnSelector,
    pub dry_run: bool,
}

/// Merge CPL restrictions from a sheet into an existing store.
pub fn merge_cpl_into_store(request: &CplRequest) -> Result<CplMerge> {
    let _span = info_span!("cpl", store = %request.store.display()).entered();
    let mut collection = load_collection(&request.store)
        .with_context(|| format!("load {}", request.store.display()))?;
    let table = read_table(&request.source, request.sheet.as_deref())
        .with_context(|| format!("read {}", request.source.display()))?;
    let merge = merge_cpl(
        &mut collection,
        &table,
        &request.code_column,
        &request.value_column,
    )
    .with_context(|| format!("merge cpl from {}", table.name))?;

    if request.dry_run {
        info!("dry run; store not written");
    } else {
        save_collection(&collection, &request.store)
            .with_context(|| format!("save {}", request.store.display()))?;
    }
    Ok(merge)
}

/// Run passes over a store in order, then save it once.
pub fn enrich_store(store: &Path, passes: &[Pass], dry_run: bool) -> Result<Vec<PassReport>> {
    let _span = info_span!("enrich", store = %store.display()).entered();
    let mut collection =
        load_collection(store).with_context(|| format!("load {}", store.display()))?;
    let reports = run_passes(&mut collection, passes);

    if dry_run {
        info!("dry run; store not written");
    } else {
        save_collection(&collection, store)
            .with_context(|| format!("save {}", store.display()))?;
    }
    Ok(reports)
}

#[derive(Debug, Clone)]
pub struct AmBestResult {
    pub carriers: usize,
    pub destination: PathBuf,
}

/// Build the AM Best carrier index from a sheet and save it.
pub fn extract_am_best(
    source: &Path,
    sheet: Option<&str>,
    output_dir: &Path,
) -> Result<AmBestResult> {
    let table =
        read_table(source, sheet).with_context(|| format!("read {}", source.display()))?;
    let _span = info_span!("am_best", table = %table.name).entered();
    let index = build_am_best_index(&table)
        .with_context(|| format!("build am best index from {}", table.name))?;
    let destination = output_dir.join(AM_BEST_FILE_NAME);
    save_json(&index, &destination).with_context(|| format!("save {}", destination.display()))?;
    Ok(AmBestResult {
        carriers: index.len(),
        destination,
    })
}
