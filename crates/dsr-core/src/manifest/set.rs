//! The manifests loaded for each manifest-backed source.

use anyhow::Result;

use crate::config::ManifestPaths;
use crate::error::ResolveError;
use crate::resolver::FieldValidator;
use crate::source::SourceCategory;

use super::{check_fields_against_manifest, Manifest};

/// Manifests for the local, live and staging sources. Community sources
/// never have one.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ManifestSet {
    pub local: Option<Manifest>,
    pub live: Option<Manifest>,
    pub staging: Option<Manifest>,
}

impl ManifestSet {
    /// Loads every manifest file named in `paths`.
    pub fn load(paths: &ManifestPaths) -> Result<Self> {
        let load = |path: &Option<std::path::PathBuf>| -> Result<Option<Manifest>> {
            path.as_deref().map(Manifest::load).transpose()
        };
        let set = Self {
            local: load(&paths.local)?,
            live: load(&paths.live)?,
            staging: load(&paths.staging)?,
        };
        tracing::info!(
            "manifests loaded: local={} live={} staging={}",
            set.local.is_some(),
            set.live.is_some(),
            set.staging.is_some()
        );
        Ok(set)
    }

    /// Manifest used to validate fields for `source`.
    pub fn for_source(&self, source: SourceCategory) -> Option<&Manifest> {
        match source {
            SourceCategory::Local => self.local.as_ref(),
            SourceCategory::Live => self.live.as_ref(),
            SourceCategory::Staging => self.staging.as_ref(),
            SourceCategory::Github => None,
        }
    }
}

impl FieldValidator for ManifestSet {
    /// Without a manifest for `source` the fields pass through unchanged.
    fn check_fields(
        &self,
        source: SourceCategory,
        fields: &[String],
    ) -> Result<Vec<String>, ResolveError> {
        match self.for_source(source) {
            Some(manifest) => check_fields_against_manifest(manifest, source, fields),
            None => {
                tracing::debug!("no {} manifest loaded; fields not validated", source);
                Ok(fields.to_vec())
            }
        }
    }
}
