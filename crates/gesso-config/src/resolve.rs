//! Resolution of content globs against a project tree.
//!
//! Resolution stays at the path level: callers learn which files the
//! config selects, never what is inside them.

use std::path::{Path, PathBuf};

use globset::{Glob, GlobSet, GlobSetBuilder};
use rayon::prelude::*;
use walkdir::WalkDir;

use crate::config::BuildConfig;

#[derive(Debug, thiserror::Error)]
pub enum ResolveError {
    #[error("Failed to resolve content globs: {0} is not a directory")]
    RootNotFound(String),

    #[error("Failed to compile content pattern {pattern:?}: {message}")]
    InvalidPattern { pattern: String, message: String },

    #[error("Failed to build glob set: {0}")]
    GlobSetError(String),
}

/// How many files under the root a single content pattern selected.
#[derive(Debug, Clone, PartialEq)]
pub struct PatternCoverage {
    pub pattern: String,
    pub matches: usize,
}

/// List every file under `root` selected by the config's content globs.
///
/// Paths come back relative to `root`, sorted, and listed once even when
/// several patterns select the same file.
pub fn matched_files(
    config: &BuildConfig,
    root: impl AsRef<Path>,
) -> Result<Vec<PathBuf>, ResolveError> {
    let root = root.as_ref();
    let globset = build_globset(&config.content)?;

    let mut matched: Vec<PathBuf> = walk(root)?
        .into_par_iter()
        .filter(|path| globset.is_match(path))
        .collect();
    matched.sort();

    Ok(matched)
}

/// Count matches per content pattern, in config order.
///
/// A pattern with zero matches usually means a stale glob or a typo in
/// the directory name.
pub fn coverage(
    config: &BuildConfig,
    root: impl AsRef<Path>,
) -> Result<Vec<PatternCoverage>, ResolveError> {
    let root = root.as_ref();
    let globset = build_globset(&config.content)?;

    let mut counts = vec![0usize; config.content.len()];
    for path in walk(root)? {
        for index in globset.matches(&path) {
            counts[index] += 1;
        }
    }

    Ok(config
        .content
        .iter()
        .zip(counts)
        .map(|(pattern, matches)| PatternCoverage {
            pattern: pattern.clone(),
            matches,
        })
        .collect())
}

fn build_globset(patterns: &[String]) -> Result<GlobSet, ResolveError> {
    let mut builder = GlobSetBuilder::new();
    for pattern in patterns {
        let glob = Glob::new(normalize(pattern)).map_err(|e| ResolveError::InvalidPattern {
            pattern: pattern.clone(),
            message: e.to_string(),
        })?;
        builder.add(glob);
    }
    builder
        .build()
        .map_err(|e| ResolveError::GlobSetError(e.to_string()))
}

// Content globs are conventionally anchored with a leading "./" that
// globset would treat as a literal path component.
fn normalize(pattern: &str) -> &str {
    pattern.strip_prefix("./").unwrap_or(pattern)
}

fn walk(root: &Path) -> Result<Vec<PathBuf>, ResolveError> {
    if !root.is_dir() {
        return Err(ResolveError::RootNotFound(root.display().to_string()));
    }

    Ok(WalkDir::new(root)
        .into_iter()
        .filter_map(|entry| entry.ok())
        .filter(|entry| entry.file_type().is_file())
        .map(|entry| {
            entry
                .path()
                .strip_prefix(root)
                .unwrap_or_else(|_| entry.path())
                .to_path_buf()
        })
        .collect())
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;

    fn fixture() -> tempfile::TempDir {
        let dir = tempfile::tempdir().unwrap();
        fs::create_dir_all(dir.path().join("view/sub")).unwrap();
        fs::create_dir_all(dir.path().join("web")).unwrap();
        fs::write(dir.path().join("view/home.templ"), "").unwrap();
        fs::write(dir.path().join("view/sub/nav.templ"), "").unwrap();
        fs::write(dir.path().join("view/readme.md"), "").unwrap();
        fs::write(dir.path().join("web/app.templ"), "").unwrap();
        dir
    }

    fn config_with_content(patterns: &[&str]) -> BuildConfig {
        BuildConfig {
            content: patterns.iter().map(|s| s.to_string()).collect(),
            ..Default::default()
        }
    }

    #[test]
    fn globs_match_relative_to_the_root() {
        let dir = fixture();
        let config = config_with_content(&["./view/**/*.templ"]);

        let files = matched_files(&config, dir.path()).unwrap();

        assert_eq!(
            files,
            vec![
                PathBuf::from("view/home.templ"),
                PathBuf::from("view/sub/nav.templ"),
            ]
        );
    }

    #[test]
    fn overlapping_patterns_list_files_once() {
        let dir = fixture();
        let config = config_with_content(&["./view/**/*.templ", "./**/*.templ"]);

        let files = matched_files(&config, dir.path()).unwrap();

        assert_eq!(files.len(), 3);
        assert!(files.contains(&PathBuf::from("web/app.templ")));
    }

    #[test]
    fn coverage_reports_unmatched_patterns() {
        let dir = fixture();
        let config = config_with_content(&["./view/**/*.templ", "./pages/**/*.templ"]);

        let report = coverage(&config, dir.path()).unwrap();

        assert_eq!(
            report,
            vec![
                PatternCoverage {
                    pattern: "./view/**/*.templ".to_string(),
                    matches: 2,
                },
                PatternCoverage {
                    pattern: "./pages/**/*.templ".to_string(),
                    matches: 0,
                },
            ]
        );
    }

    #[test]
    fn invalid_pattern_is_an_error() {
        let dir = fixture();
        let config = config_with_content(&["./view/["]);

        let err = matched_files(&config, dir.path()).unwrap_err();

        assert!(matches!(err, ResolveError::InvalidPattern { .. }));
    }

    #[test]
    fn missing_root_is_an_error() {
        let config = config_with_content(&["./view/**/*.templ"]);

        let err = matched_files(&config, "/no/such/root").unwrap_err();

        assert!(matches!(err, ResolveError::RootNotFound(_)));
    }
}
