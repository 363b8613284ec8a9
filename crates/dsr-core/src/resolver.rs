//! Resolving request paths to URL paths and storage locations.
//!
//! The resolver holds everything it needs (storage roots, community URL
//! template, field validator) and is built once at startup; it never reads
//! or mutates global state.

use crate::config::{fill_community_template, DsrConfig};
use crate::error::ResolveError;
use crate::manifest::{Manifest, ManifestSet};
use crate::path_model::{
    split_path_trim_once, Segment, StorageKey, StorageLocation, StorageRoot, UrlPath,
};
use crate::source::SourceCategory;

/// Validates and normalises requested fields for a source.
///
/// Implementations fail with [`ResolveError::UnknownManifestField`] when a
/// field cannot be resolved.
pub trait FieldValidator {
    fn check_fields(
        &self,
        source: SourceCategory,
        fields: &[String],
    ) -> Result<Vec<String>, ResolveError>;
}

/// Manifest-backed listing of a source's datasets.
#[derive(Debug, Clone, Copy)]
pub struct AvailableDatasets<'a> {
    pub available: &'a Manifest,
    pub source: SourceCategory,
}

impl AvailableDatasets<'_> {
    pub fn datasets(&self) -> Vec<Vec<String>> {
        self.available.datasets()
    }

    pub fn default_dataset(&self) -> Option<Vec<String>> {
        self.available.default_dataset()
    }
}

/// Result of [`SourceResolver::construct_path_to_get`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ResolvedLocation {
    /// Source-prefixed path exposed to clients.
    pub url_path: UrlPath,
    /// File name the storage location ends with.
    pub storage_key: StorageKey,
    /// File or URL the dataset JSON is fetched from.
    pub storage: StorageLocation,
}

/// Maps request paths to dataset locations.
#[derive(Debug, Clone)]
pub struct SourceResolver<V = ManifestSet> {
    local_root: StorageRoot,
    live_root: StorageRoot,
    staging_root: StorageRoot,
    community_url_template: String,
    validator: V,
}

impl SourceResolver<ManifestSet> {
    /// Builds a resolver from configuration, loading the configured manifests.
    pub fn from_config(cfg: &DsrConfig) -> anyhow::Result<Self> {
        let manifests = ManifestSet::load(&cfg.manifests)?;
        Ok(Self::new(cfg, manifests)?)
    }

    /// Datasets listed by the local or live manifest.
    ///
    /// `None` for any other source or when the manifest was not loaded;
    /// callers then fall back to source-specific validation.
    pub fn collect_datasets(&self, source: SourceCategory) -> Option<AvailableDatasets<'_>> {
        let available = match source {
            SourceCategory::Local => self.validator.local.as_ref(),
            SourceCategory::Live => self.validator.live.as_ref(),
            SourceCategory::Staging | SourceCategory::Github => None,
        }?;
        Some(AvailableDatasets { available, source })
    }
}

impl<V: FieldValidator> SourceResolver<V> {
    /// Builds a resolver with an explicit field validator.
    ///
    /// Fails if the live or staging base URL cannot be parsed.
    pub fn new(cfg: &DsrConfig, validator: V) -> Result<Self, ResolveError> {
        Ok(Self {
            local_root: StorageRoot::Directory(cfg.local_data_path.clone()),
            live_root: StorageRoot::remote(&cfg.remote_data_live_baseurl)?,
            staging_root: StorageRoot::remote(&cfg.remote_data_staging_baseurl)?,
            community_url_template: cfg.community_url_template.clone(),
            validator,
        })
    }

    pub fn validator(&self) -> &V {
        &self.validator
    }

    /// Builds the client URL path and storage location for `path`.
    ///
    /// The first path segment picks the storage root: `local`, `community`
    /// and `staging` are recognised and anything else is the live remote.
    /// `json_type` adds a `_<type>` tag before `.json`.
    pub fn construct_path_to_get(
        &self,
        source: SourceCategory,
        path: &str,
        json_type: Option<&str>,
    ) -> Result<ResolvedLocation, ResolveError> {
        let segments = split_path_trim_once(path);
        let first = segments.first().map(|s| s.normalized.as_str());

        let (root, mut url_path, fields) = match first {
            Some("community") => {
                return self.construct_community_path(path, &segments, json_type);
            }
            Some("local") => (
                &self.local_root,
                UrlPath::with_prefix(["local"]),
                self.check_normalized(source, &segments[1..])?,
            ),
            Some("staging") => (
                &self.staging_root,
                UrlPath::default(),
                self.check_normalized(source, &segments[1..])?,
            ),
            _ => (
                &self.live_root,
                UrlPath::default(),
                self.check_normalized(source, &segments)?,
            ),
        };

        url_path.push_fields(fields.iter().cloned());
        let storage_key =
            StorageKey::new(fields, json_type).ok_or_else(|| ResolveError::EmptyDataset {
                path: path.to_string(),
            })?;
        let storage = root.locate(&storage_key);
        tracing::debug!(
            "resolved {} ({}) -> url_path={} storage={}",
            path,
            source,
            url_path,
            storage
        );

        Ok(ResolvedLocation {
            url_path,
            storage_key,
            storage,
        })
    }

    /// `community/<org>/<repo>/<fields>...`: fields keep their case and are
    /// not validated. Without fields the repository name is the only field,
    /// in the URL path as well as the file name.
    fn construct_community_path(
        &self,
        path: &str,
        segments: &[Segment],
        json_type: Option<&str>,
    ) -> Result<ResolvedLocation, ResolveError> {
        let malformed = || ResolveError::MalformedCommunityPath {
            path: path.to_string(),
        };
        let [_, org, repo, rest @ ..] = segments else {
            return Err(malformed());
        };
        if org.original.is_empty() || repo.original.is_empty() {
            return Err(malformed());
        }

        let base = fill_community_template(
            &self.community_url_template,
            &org.original,
            &repo.original,
        );
        let root = StorageRoot::remote(&base)?;

        let fields: Vec<String> = if rest.is_empty() {
            vec![repo.original.clone()]
        } else {
            rest.iter().map(|s| s.original.clone()).collect()
        };
        let mut url_path = UrlPath::with_prefix([
            "community",
            org.original.as_str(),
            repo.original.as_str(),
        ]);
        url_path.push_fields(fields.iter().cloned());

        let storage_key = StorageKey::new(fields, json_type).ok_or_else(malformed)?;
        let storage = root.locate(&storage_key);
        tracing::debug!(
            "resolved community {} -> url_path={} storage={}",
            path,
            url_path,
            storage
        );

        Ok(ResolvedLocation {
            url_path,
            storage_key,
            storage,
        })
    }

    fn check_normalized(
        &self,
        source: SourceCategory,
        segments: &[Segment],
    ) -> Result<Vec<String>, ResolveError> {
        let fields: Vec<String> = segments.iter().map(|s| s.normalized.clone()).collect();
        self.validator.check_fields(source, &fields)
    }
}
