use anyhow::{Context, Result};
use tracing::info_span;

use coi_cli::pipeline::{
    CplRequest, ExtractRequest, enrich_store, extract, extract_am_best, inspect_source,
    merge_cpl_into_store,
};
use coi_ingest::BuildOptions;
use coi_store::list_stores;

use crate::cli::{AmBestArgs, CplArgs, EnrichArgs, ExtractArgs, ListArgs, SheetsArgs};
use crate::summary::{
    print_am_best, print_cpl, print_extract, print_passes, print_sheets, print_stores,
};

pub fn run_sheets(args: &SheetsArgs) -> Result<()> {
    let _span = info_span!("sheets", source = %args.source.display()).entered();
    let sheets = inspect_source(&args.source)?;
    print_sheets(&args.source, &sheets, args.columns);
    Ok(())
}

pub fn run_extract(args: &ExtractArgs) -> Result<()> {
    let _span = info_span!("extract", source = %args.source.display()).entered();
    let request = ExtractRequest {
        source: args.source.clone(),
        sheet: args.sheet.clone(),
        options: BuildOptions::default()
            .with_category(args.category.clone())
            .with_cpl_column(args.cpl_column.clone()),
        output_dir: args.output_dir.clone(),
    };
    let result = extract(&request)?;
    print_extract(&result);
    Ok(())
}

pub fn run_cpl(args: &CplArgs) -> Result<()> {
    let request = CplRequest {
        store: args.store.clone(),
        source: args.source.clone(),
        sheet: args.sheet.clone(),
        code_column: args.code_column.clone(),
        value_column: args.value_column.clone(),
        dry_run: args.dry_run,
    };
    let merge = merge_cpl_into_store(&request)?;
    print_cpl(&args.store, &merge, args.dry_run);
    Ok(())
}

pub fn run_enrich(args: &EnrichArgs) -> Result<()> {
    let passes = args.selected_passes();
    let reports = enrich_store(&args.store, &passes, args.dry_run)?;
    print_passes(&args.store, &reports, args.dry_run);
    Ok(())
}

pub fn run_am_best(args: &AmBestArgs) -> Result<()> {
    let result = extract_am_best(&args.source, args.sheet.as_deref(), &args.output_dir)?;
    print_am_best(&result);
    Ok(())
}

pub fn run_list(args: &ListArgs) -> Result<()> {
    let _span = info_span!("list", dir = %args.dir.display()).entered();
    let stores =
        list_stores(&args.dir).with_context(|| format!("list stores in {}", args.dir.display()))?;
    print_stores(&args.dir, &stores);
    Ok(())
}
