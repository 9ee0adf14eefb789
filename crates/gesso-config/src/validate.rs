//! Semantic validation of a loaded configuration.
//!
//! Validation never fails and never stops early: every defect is
//! collected into one [`ValidationResult`] so all issues surface
//! together, and the caller decides whether to proceed.

use std::fmt;

use globset::Glob;

use crate::config::{BuildConfig, Padding};

/// Breakpoint names recognized in a per-breakpoint padding mapping.
///
/// The set is fixed by the consuming framework (640, 768, 1024, 1280,
/// and 1536 pixel thresholds).
pub const BREAKPOINTS: &[&str] = &["sm", "md", "lg", "xl", "2xl"];

/// Reserved padding key for the value below the smallest breakpoint.
pub const DEFAULT_PADDING_KEY: &str = "DEFAULT";

/// A single semantic defect in an otherwise well-formed configuration.
#[derive(Debug, Clone, PartialEq)]
pub struct ValidationIssue {
    /// Path of the offending field, e.g. `theme.container.padding.tablet`.
    pub field: String,

    /// What is wrong with it.
    pub message: String,
}

impl fmt::Display for ValidationIssue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}: {}", self.field, self.message)
    }
}

/// Every issue found in one pass over a configuration.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ValidationResult {
    /// Collected issues, in field order. Empty means valid.
    pub issues: Vec<ValidationIssue>,
}

impl ValidationResult {
    /// True when no issues were found.
    pub fn is_valid(&self) -> bool {
        self.issues.is_empty()
    }
}

/// Check a configuration against its semantic invariants.
///
/// Three things are checked: every `content` entry compiles as a glob,
/// every padding-mapping key names a known breakpoint (or `DEFAULT`),
/// and `plugins` carries no duplicate references. Syntactic problems are
/// the loader's job and never reach this function.
pub fn validate(config: &BuildConfig) -> ValidationResult {
    let mut issues = Vec::new();

    for (i, pattern) in config.content.iter().enumerate() {
        if let Err(e) = Glob::new(pattern) {
            issues.push(ValidationIssue {
                field: format!("content[{}]", i),
                message: format!("invalid glob pattern {:?}: {}", pattern, e),
            });
        }
    }

    if let Some(Padding::PerBreakpoint(map)) = &config.theme.container.padding {
        for key in map.keys() {
            if key != DEFAULT_PADDING_KEY && !BREAKPOINTS.contains(&key.as_str()) {
                issues.push(ValidationIssue {
                    field: format!("theme.container.padding.{}", key),
                    message: format!(
                        "unknown breakpoint {:?} (expected {} or one of: {})",
                        key,
                        DEFAULT_PADDING_KEY,
                        BREAKPOINTS.join(", ")
                    ),
                });
            }
        }
    }

    for (i, plugin) in config.plugins.iter().enumerate() {
        if config.plugins[..i].contains(plugin) {
            issues.push(ValidationIssue {
                field: format!("plugins[{}]", i),
                message: format!("duplicate plugin reference {:?}", plugin),
            });
        }
    }

    ValidationResult { issues }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::{Container, Theme};
    use indexmap::IndexMap;

    fn config_with_padding(padding: Padding) -> BuildConfig {
        BuildConfig {
            content: vec!["./view/**/*.templ".to_string()],
            theme: Theme {
                container: Container {
                    center: Some(true),
                    padding: Some(padding),
                },
            },
            plugins: vec![],
        }
    }

    #[test]
    fn valid_config_has_no_issues() {
        let config = config_with_padding(Padding::Uniform("1rem".to_string()));

        let result = validate(&config);

        assert!(result.is_valid());
        assert!(result.issues.is_empty());
    }

    #[test]
    fn all_known_breakpoints_are_accepted() {
        let mut map = IndexMap::new();
        map.insert("DEFAULT".to_string(), "1rem".to_string());
        for bp in BREAKPOINTS {
            map.insert(bp.to_string(), "2rem".to_string());
        }

        let result = validate(&config_with_padding(Padding::PerBreakpoint(map)));

        assert!(result.is_valid());
    }

    #[test]
    fn unknown_breakpoint_yields_exactly_one_issue() {
        let map = IndexMap::from([
            ("DEFAULT".to_string(), "1rem".to_string()),
            ("tablet".to_string(), "2rem".to_string()),
        ]);

        let result = validate(&config_with_padding(Padding::PerBreakpoint(map)));

        assert_eq!(result.issues.len(), 1);
        assert_eq!(result.issues[0].field, "theme.container.padding.tablet");
        assert!(result.issues[0].message.contains("tablet"));
    }

    #[test]
    fn invalid_glob_is_reported() {
        let config = BuildConfig {
            content: vec!["./view/**/*.templ".to_string(), "./web/[".to_string()],
            ..Default::default()
        };

        let result = validate(&config);

        assert_eq!(result.issues.len(), 1);
        assert_eq!(result.issues[0].field, "content[1]");
    }

    #[test]
    fn duplicate_plugin_is_reported() {
        let config = BuildConfig {
            plugins: vec![
                "@tailwindcss/typography".to_string(),
                "@tailwindcss/forms".to_string(),
                "@tailwindcss/typography".to_string(),
            ],
            ..Default::default()
        };

        let result = validate(&config);

        assert_eq!(result.issues.len(), 1);
        assert_eq!(result.issues[0].field, "plugins[2]");
    }

    #[test]
    fn issues_are_collected_rather_than_fail_fast() {
        let config = BuildConfig {
            content: vec!["./view/[".to_string()],
            theme: Theme {
                container: Container {
                    center: None,
                    padding: Some(Padding::PerBreakpoint(IndexMap::from([(
                        "phablet".to_string(),
                        "2rem".to_string(),
                    )]))),
                },
            },
            plugins: vec!["typography".to_string(), "typography".to_string()],
        };

        let result = validate(&config);

        let fields: Vec<&str> = result.issues.iter().map(|i| i.field.as_str()).collect();
        assert_eq!(
            fields,
            vec!["content[0]", "theme.container.padding.phablet", "plugins[1]"]
        );
    }

    #[test]
    fn issue_display_includes_field_path() {
        let issue = ValidationIssue {
            field: "plugins[1]".to_string(),
            message: "duplicate plugin reference \"typography\"".to_string(),
        };

        assert_eq!(
            issue.to_string(),
            "plugins[1]: duplicate plugin reference \"typography\""
        );
    }
}
