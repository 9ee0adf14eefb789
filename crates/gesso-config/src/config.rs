//! Typed build configuration consumed by the utility-class build step.

use indexmap::IndexMap;
use serde::{Deserialize, Serialize};

use crate::validate::DEFAULT_PADDING_KEY;

/// Declarative build configuration.
///
/// Mirrors the on-disk shape: glob patterns naming the template files to
/// scan for class names, container theme tokens, and an ordered list of
/// plugin references. The value is plain data, constructed once by
/// [`load`](crate::loader::load) or [`merge`](crate::merge::merge) and
/// read-only afterwards.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct BuildConfig {
    /// Glob patterns selecting the files scanned for class names,
    /// relative to the project root.
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub content: Vec<String>,

    /// Design-token overrides for generated utilities.
    #[serde(default, skip_serializing_if = "Theme::is_empty")]
    pub theme: Theme,

    /// Ordered plugin references, resolved by the consuming build tool.
    /// Order may affect utility precedence.
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub plugins: Vec<String>,
}

impl BuildConfig {
    /// True when nothing is configured. The empty config is the merge
    /// identity.
    pub fn is_empty(&self) -> bool {
        self.content.is_empty() && self.theme.is_empty() && self.plugins.is_empty()
    }
}

/// Theme section. Only the container settings are modeled; unknown theme
/// keys in the source are ignored on load.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Theme {
    /// Container utility settings.
    #[serde(default, skip_serializing_if = "Container::is_empty")]
    pub container: Container,
}

impl Theme {
    /// True when no theme value is set.
    pub fn is_empty(&self) -> bool {
        self.container.is_empty()
    }
}

/// Settings for generated container utilities.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Container {
    /// Center the container with automatic horizontal margins.
    ///
    /// Kept optional so merging can tell "explicitly false" apart from
    /// "not set"; [`Container::centered`] gives the effective flag.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub center: Option<bool>,

    /// Horizontal padding: one value for every breakpoint, or a mapping
    /// from breakpoint name to value.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub padding: Option<Padding>,
}

impl Container {
    /// True when no container value is set.
    pub fn is_empty(&self) -> bool {
        self.center.is_none() && self.padding.is_none()
    }

    /// Effective centering flag (absent means false).
    pub fn centered(&self) -> bool {
        self.center.unwrap_or(false)
    }
}

/// Container padding: a uniform scalar or per-breakpoint values.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum Padding {
    /// A single value applied at every breakpoint, e.g. `"1rem"`.
    Uniform(String),

    /// Per-breakpoint values keyed by breakpoint name, plus `DEFAULT`
    /// for the value below the smallest breakpoint. Source order is
    /// preserved.
    PerBreakpoint(IndexMap<String, String>),
}

impl Padding {
    /// Padding in effect below the smallest breakpoint, if any.
    pub fn base(&self) -> Option<&str> {
        match self {
            Padding::Uniform(value) => Some(value),
            Padding::PerBreakpoint(map) => map.get(DEFAULT_PADDING_KEY).map(String::as_str),
        }
    }
}
