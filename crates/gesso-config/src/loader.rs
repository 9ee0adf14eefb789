//! Reading and writing configuration files.
//!
//! The declarative source is a single self-describing file; the format is
//! chosen by extension. All formats deserialize into the same
//! [`BuildConfig`], and a loaded value re-serializes to an equivalent
//! source (round-trip safe).

use std::fs;
use std::path::Path;

use crate::config::BuildConfig;

/// On-disk formats a configuration can be written in.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Format {
    Toml,
    Json,
    Yaml,
}

impl Format {
    /// Determine the format from a path's extension.
    pub fn from_path(path: &Path) -> Result<Self, ConfigError> {
        let ext = path.extension().and_then(|e| e.to_str()).unwrap_or("");
        match ext {
            "toml" => Ok(Format::Toml),
            "json" => Ok(Format::Json),
            "yaml" | "yml" => Ok(Format::Yaml),
            _ => Err(ConfigError::UnsupportedFormat(path.display().to_string())),
        }
    }
}

/// Errors that can occur when loading or writing a configuration.
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("Failed to read config: {0}")]
    ReadError(String),

    #[error("Failed to parse {path}: {message}")]
    ParseError { path: String, message: String },

    #[error("Unsupported config format: {0} (expected .toml, .json, .yaml, or .yml)")]
    UnsupportedFormat(String),

    #[error("Failed to serialize config: {0}")]
    SerializeError(String),

    #[error("Failed to write config: {0}")]
    WriteError(String),
}

/// Load a build configuration from a file.
///
/// Absent `content`, `theme`, and `plugins` sections independently
/// default to empty; there is no missing-field error. A malformed source
/// aborts with a descriptive [`ConfigError::ParseError`], so the caller
/// never sees a partially applied config.
pub fn load(path: impl AsRef<Path>) -> Result<BuildConfig, ConfigError> {
    let path = path.as_ref();
    let format = Format::from_path(path)?;

    let source = fs::read_to_string(path)
        .map_err(|e| ConfigError::ReadError(format!("{}: {}", path.display(), e)))?;

    let config = parse(&source, format).map_err(|message| ConfigError::ParseError {
        path: path.display().to_string(),
        message,
    })?;

    tracing::debug!("Loaded config from {}", path.display());

    Ok(config)
}

/// Serialize a configuration in the given format.
///
/// Output is canonical: modeled fields only, empty sections omitted,
/// trailing newline. Loading the result yields a value equal to `config`.
pub fn render(config: &BuildConfig, format: Format) -> Result<String, ConfigError> {
    let mut out = match format {
        Format::Toml => {
            toml::to_string_pretty(config).map_err(|e| ConfigError::SerializeError(e.to_string()))?
        }
        Format::Json => serde_json::to_string_pretty(config)
            .map_err(|e| ConfigError::SerializeError(e.to_string()))?,
        Format::Yaml => {
            serde_yaml::to_string(config).map_err(|e| ConfigError::SerializeError(e.to_string()))?
        }
    };

    if !out.ends_with('\n') {
        out.push('\n');
    }

    Ok(out)
}

/// Write a configuration to a file, format chosen by extension.
pub fn save(config: &BuildConfig, path: impl AsRef<Path>) -> Result<(), ConfigError> {
    let path = path.as_ref();
    let format = Format::from_path(path)?;
    let rendered = render(config, format)?;

    fs::write(path, rendered)
        .map_err(|e| ConfigError::WriteError(format!("{}: {}", path.display(), e)))?;

    Ok(())
}

fn parse(source: &str, format: Format) -> Result<BuildConfig, String> {
    match format {
        Format::Toml => toml::from_str(source).map_err(|e| e.to_string()),
        Format::Json => serde_json::from_str(source).map_err(|e| e.to_string()),
        Format::Yaml => serde_yaml::from_str(source).map_err(|e| e.to_string()),
    }
}
