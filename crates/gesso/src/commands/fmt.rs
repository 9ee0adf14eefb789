//! Canonical formatting command.

use std::fs;
use std::path::PathBuf;

use anyhow::{bail, Context, Result};
use gesso_config::{load, render, Format};

/// Run the fmt command.
pub async fn run(paths: Vec<PathBuf>, check: bool) -> Result<()> {
    let mut stale = 0;

    for path in &paths {
        let format = Format::from_path(path)?;
        let config = load(path)?;
        let canonical = render(&config, format)?;

        let current = fs::read_to_string(path)
            .with_context(|| format!("Failed to read {}", path.display()))?;
        if current == canonical {
            tracing::debug!("{} is already canonical", path.display());
            continue;
        }

        if check {
            tracing::warn!("{} is not in canonical form", path.display());
            stale += 1;
        } else {
            fs::write(path, &canonical)
                .with_context(|| format!("Failed to write {}", path.display()))?;
            tracing::info!("Formatted {}", path.display());
        }
    }

    if stale > 0 {
        bail!("{} config files need formatting", stale);
    }

    Ok(())
}
