//! Dataset manifests: which field paths a source knows about.
//!
//! A manifest is a tree of levels. Each level names a field category
//! (`pathogen`, `lineage`, ...) and offers options that lead either to a
//! deeper level or to a leaf, plus an optional default option:
//!
//! ```json
//! { "pathogen": {
//!     "default": "flu",
//!     "zika": "",
//!     "flu": { "lineage": { "default": "h3n2", "h3n2": "", "h1n1pdm": "" } }
//! } }
//! ```

mod catalog;
mod check;
mod parse;
mod set;

pub use check::check_fields_against_manifest;
pub use set::ManifestSet;

use std::path::Path;

use anyhow::{Context, Result};

/// Reserved option key naming a level's default option.
pub const DEFAULT_KEY: &str = "default";

/// One node of a manifest tree.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ManifestNode {
    /// A complete dataset; no further fields.
    Leaf,
    Level(ManifestLevel),
}

/// A level offering options for one field category.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ManifestLevel {
    pub category: String,
    pub default: Option<String>,
    /// Options in key order.
    pub options: Vec<(String, ManifestNode)>,
}

impl ManifestLevel {
    /// Finds the option matching `field`, preferring an exact match over a
    /// case-insensitive one. Returns the manifest's own spelling of the key.
    pub fn find_option(&self, field: &str) -> Option<(&str, &ManifestNode)> {
        self.options
            .iter()
            .find(|(key, _)| key == field)
            .or_else(|| {
                let wanted = field.to_lowercase();
                self.options
                    .iter()
                    .find(|(key, _)| key.to_lowercase() == wanted)
            })
            .map(|(key, node)| (key.as_str(), node))
    }

    /// The default option and its subtree, if the level declares one.
    pub fn default_option(&self) -> Option<(&str, &ManifestNode)> {
        let default = self.default.as_deref()?;
        self.options
            .iter()
            .find(|(key, _)| key == default)
            .map(|(key, node)| (key.as_str(), node))
    }
}

/// Parsed manifest for one source.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Manifest {
    root: ManifestNode,
}

impl Manifest {
    pub fn new(root: ManifestNode) -> Self {
        Self { root }
    }

    pub fn root(&self) -> &ManifestNode {
        &self.root
    }

    /// Parses a manifest from JSON text.
    pub fn from_json_str(json: &str) -> Result<Self> {
        let value: serde_json::Value = serde_json::from_str(json).context("parse manifest JSON")?;
        let root = parse::parse_node(&value, "")?;
        Ok(Self { root })
    }

    /// Reads and parses a manifest file.
    pub fn load(path: &Path) -> Result<Self> {
        let data = std::fs::read_to_string(path)
            .with_context(|| format!("read manifest: {}", path.display()))?;
        let manifest = Self::from_json_str(&data)
            .with_context(|| format!("load manifest: {}", path.display()))?;
        tracing::debug!(
            "loaded manifest {} ({} datasets)",
            path.display(),
            manifest.datasets().len()
        );
        Ok(manifest)
    }
}

#[cfg(test)]
pub(crate) mod fixtures {
    use super::Manifest;

    pub const FLU_ZIKA: &str = r#"{
        "pathogen": {
            "default": "flu",
            "zika": "",
            "flu": {
                "lineage": {
                    "default": "h3n2",
                    "h3n2": { "segment": { "default": "ha", "ha": "", "na": "" } },
                    "h1n1pdm": { "segment": { "default": "ha", "ha": "", "na": "" } }
                }
            },
            "Ebola": {}
        }
    }"#;

    pub fn flu_zika() -> Manifest {
        Manifest::from_json_str(FLU_ZIKA).unwrap()
    }
}
