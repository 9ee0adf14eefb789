//! Typed build configuration for utility-class generation.
//!
//! This crate loads `tailwind.toml` style descriptors from TOML, JSON, or
//! YAML, validates them without failing fast, and deep-merges layered
//! configs into the single value a build step consumes.

pub mod config;
pub mod loader;
pub mod merge;
pub mod resolve;
pub mod validate;

pub use config::{BuildConfig, Container, Padding, Theme};
pub use loader::{load, render, save, ConfigError, Format};
pub use merge::{merge, merge_all};
pub use resolve::{coverage, matched_files, PatternCoverage, ResolveError};
pub use validate::{validate, ValidationIssue, ValidationResult, BREAKPOINTS, DEFAULT_PADDING_KEY};
