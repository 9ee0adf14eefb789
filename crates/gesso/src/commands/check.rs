//! Config validation command.

use std::path::{Path, PathBuf};

use anyhow::{bail, Result};
use gesso_config::{coverage, load, validate};

use crate::watcher::{ConfigWatcher, WatchEvent};

/// Run the check command.
///
/// Every file is checked and every issue reported before the exit code
/// is decided, so one bad config never hides another.
pub async fn run(paths: Vec<PathBuf>, root: Option<PathBuf>, watch: bool) -> Result<()> {
    if watch {
        return watch_loop(&paths, root.as_deref()).await;
    }

    let failures = check_all(&paths, root.as_deref());
    if failures > 0 {
        bail!(
            "{} of {} config files failed validation",
            failures,
            paths.len()
        );
    }

    Ok(())
}

async fn watch_loop(paths: &[PathBuf], root: Option<&Path>) -> Result<()> {
    check_all(paths, root);

    let (_watcher, mut rx) = ConfigWatcher::new(paths)?;
    tracing::info!("Watching for config changes... (press Ctrl+C to stop)");

    while let Some(event) = rx.recv().await {
        match event {
            WatchEvent::ConfigChanged(path) => {
                tracing::info!("{} changed, re-checking...", path.display());
                check_all(paths, root);
            }
            WatchEvent::ConfigRemoved(path) => {
                tracing::warn!("{} was removed", path.display());
            }
        }
    }

    Ok(())
}

fn check_all(paths: &[PathBuf], root: Option<&Path>) -> usize {
    let mut failures = 0;
    for path in paths {
        if !check_one(path, root) {
            failures += 1;
        }
    }
    failures
}

/// Check a single config file. Returns false when the file fails to load
/// or validation found issues.
fn check_one(path: &Path, root: Option<&Path>) -> bool {
    let config = match load(path) {
        Ok(config) => config,
        Err(e) => {
            tracing::error!("{}", e);
            return false;
        }
    };

    let result = validate(&config);
    for issue in &result.issues {
        tracing::warn!("{}: {}", path.display(), issue);
    }

    if config.content.is_empty() {
        tracing::warn!(
            "{}: no content globs, no templates will be scanned",
            path.display()
        );
    }

    if let Some(root) = root {
        match coverage(&config, root) {
            Ok(report) => {
                for entry in &report {
                    if entry.matches == 0 {
                        tracing::warn!(
                            "{}: pattern {:?} matches nothing under {}",
                            path.display(),
                            entry.pattern,
                            root.display()
                        );
                    } else {
                        tracing::debug!(
                            "{}: pattern {:?} matches {} files",
                            path.display(),
                            entry.pattern,
                            entry.matches
                        );
                    }
                }
            }
            Err(e) => {
                tracing::error!("{}", e);
                return false;
            }
        }
    }

    if result.is_valid() {
        tracing::info!("{}: ok", path.display());
        true
    } else {
        tracing::error!("{}: {} issues", path.display(), result.issues.len());
        false
    }
}
