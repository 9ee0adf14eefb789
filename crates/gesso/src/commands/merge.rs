//! Config merge command.

use std::path::PathBuf;

use anyhow::Result;
use gesso_config::{load, merge_all, render, save, validate, Format};

/// Run the merge command.
///
/// Layers are folded left to right, so later files take precedence. The
/// merged config goes to stdout unless `--output` names a file.
pub async fn run(paths: Vec<PathBuf>, output: Option<PathBuf>) -> Result<()> {
    let mut layers = Vec::with_capacity(paths.len());
    for path in &paths {
        layers.push(load(path)?);
    }

    let merged = merge_all(&layers);

    // Issues in the merged result are reported but do not block the merge
    let result = validate(&merged);
    for issue in &result.issues {
        tracing::warn!("{}", issue);
    }

    match output {
        Some(path) => {
            save(&merged, &path)?;
            tracing::info!("Wrote merged config to {}", path.display());
        }
        None => {
            // Render in the base layer's format
            let format = paths
                .first()
                .and_then(|path| Format::from_path(path).ok())
                .unwrap_or(Format::Toml);
            print!("{}", render(&merged, format)?);
        }
    }

    Ok(())
}
