//! Scaffold a build config in a project.

use std::fs;
use std::path::Path;

use anyhow::{Context, Result};

/// Run the init command.
pub async fn run(yes: bool) -> Result<()> {
    tracing::info!("Initializing gesso...");

    let config_path = Path::new("tailwind.toml");

    // Check if a config already exists
    if config_path.exists() && !yes {
        tracing::warn!("tailwind.toml already exists. Use --yes to overwrite.");
        return Ok(());
    }

    fs::write(config_path, DEFAULT_CONFIG).context("Failed to write tailwind.toml")?;
    tracing::info!("Created tailwind.toml");

    tracing::info!("Run 'gesso check' to validate it.");

    Ok(())
}

const DEFAULT_CONFIG: &str = r#"# Gesso Configuration

# Globs selecting the template files scanned for utility classes
content = ["./view/**/*.templ"]

# Plugins applied in order, for example:
# plugins = ["@tailwindcss/typography"]
plugins = []

[theme.container]
# Center the container horizontally
center = true

# Horizontal padding, one value for every breakpoint:
padding = "1rem"

# Or per breakpoint ("DEFAULT" covers the unprefixed utility):
# padding = { DEFAULT = "1rem", sm = "2rem", lg = "4rem" }
"#;
