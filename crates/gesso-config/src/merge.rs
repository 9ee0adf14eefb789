//! Deep merge for layered configurations.
//!
//! A project keeps one base config plus thin per-target overlays instead
//! of near-duplicate files; merging folds them into the single value the
//! build step consumes.

use crate::config::{BuildConfig, Container, Padding, Theme};

/// Deep-merge `overlay` onto `base`.
///
/// Sequences (`content`, `plugins`) concatenate base-then-overlay and
/// de-duplicate by value; the first occurrence keeps its position.
/// Scalars set in the overlay replace the base value; absent overlay
/// scalars keep the base. Padding mappings merge key-wise with the
/// overlay winning per key; when one side is uniform and the other a
/// mapping, the overlay replaces the base wholesale. The empty config is
/// an identity on both sides, so folding layers is well defined.
pub fn merge(base: &BuildConfig, overlay: &BuildConfig) -> BuildConfig {
    BuildConfig {
        content: merge_sequence(&base.content, &overlay.content),
        theme: Theme {
            container: merge_container(&base.theme.container, &overlay.theme.container),
        },
        plugins: merge_sequence(&base.plugins, &overlay.plugins),
    }
}

/// Fold any number of layers left to right, lowest precedence first.
pub fn merge_all<'a, I>(layers: I) -> BuildConfig
where
    I: IntoIterator<Item = &'a BuildConfig>,
{
    layers
        .into_iter()
        .fold(BuildConfig::default(), |acc, layer| merge(&acc, layer))
}

fn merge_sequence(base: &[String], overlay: &[String]) -> Vec<String> {
    let mut merged = Vec::with_capacity(base.len() + overlay.len());
    for value in base.iter().chain(overlay) {
        if !merged.contains(value) {
            merged.push(value.clone());
        }
    }
    merged
}

fn merge_container(base: &Container, overlay: &Container) -> Container {
    Container {
        center: overlay.center.or(base.center),
        padding: merge_padding(base.padding.as_ref(), overlay.padding.as_ref()),
    }
}

fn merge_padding(base: Option<&Padding>, overlay: Option<&Padding>) -> Option<Padding> {
    match (base, overlay) {
        (_, None) => base.cloned(),
        (Some(Padding::PerBreakpoint(b)), Some(Padding::PerBreakpoint(o))) => {
            let mut merged = b.clone();
            for (key, value) in o {
                merged.insert(key.clone(), value.clone());
            }
            Some(Padding::PerBreakpoint(merged))
        }
        // Uniform over uniform, or a shape change either way: overlay wins.
        (_, Some(o)) => Some(o.clone()),
    }
}
