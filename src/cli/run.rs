// src/cli/run.rs
// The filter command: walk the root and rewrite every OBJ file

use anyhow::{Context, Result};
use objtrim::config::TrimConfig;
use objtrim::walker::{RunSummary, filter_files};
use tracing::info;

/// Run the filter over the configured root and print a one-line summary
pub fn run_filter(config: &TrimConfig) -> Result<RunSummary> {
    let rules = config.rules();
    let options = config.options();

    info!(
        root = %config.root.display(),
        materials = rules.excluded_materials().len(),
        faces = %rules.face_range(),
        dry_run = options.dry_run,
        "Filtering OBJ files"
    );

    let summary = filter_files(&config.root, &rules, options)
        .with_context(|| format!("Filtering stopped under {}", config.root.display()))?;

    let verb = if options.dry_run { "would remove" } else { "removed" };
    println!(
        "{} files visited, {} changed, {} {} lines ({} material, {} face)",
        summary.files_visited,
        summary.files_changed,
        verb,
        summary.lines_removed(),
        summary.materials_dropped,
        summary.faces_dropped
    );

    Ok(summary)
}
