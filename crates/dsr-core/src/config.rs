use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};

/// Placeholders filled in the community URL template.
pub const ORG_PLACEHOLDER: &str = "{org}";
pub const REPO_PLACEHOLDER: &str = "{repo}";

const DEFAULT_COMMUNITY_URL_TEMPLATE: &str = "https://rawgit.com/{org}/{repo}/master/auspice/";

/// Manifest files to load at startup (optional `[manifests]` section).
///
/// A source without a file has no manifest: its datasets cannot be listed
/// and its fields are not validated.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ManifestPaths {
    #[serde(default)]
    pub local: Option<PathBuf>,
    #[serde(default)]
    pub live: Option<PathBuf>,
    #[serde(default)]
    pub staging: Option<PathBuf>,
}

/// Global configuration loaded from `~/.config/dsr/config.toml`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DsrConfig {
    /// Directory holding local dataset JSON files.
    pub local_data_path: PathBuf,
    /// Base URL of the live remote (default source).
    pub remote_data_live_baseurl: String,
    /// Base URL of the staging remote.
    pub remote_data_staging_baseurl: String,
    /// Raw-content URL template for community repositories; `{org}` and
    /// `{repo}` are substituted.
    #[serde(default = "default_community_url_template")]
    pub community_url_template: String,
    #[serde(default)]
    pub manifests: ManifestPaths,
}

fn default_community_url_template() -> String {
    DEFAULT_COMMUNITY_URL_TEMPLATE.to_string()
}

impl Default for DsrConfig {
    fn default() -> Self {
        Self {
            local_data_path: PathBuf::from("data"),
            remote_data_live_baseurl: "http://data.nextstrain.org/".to_string(),
            remote_data_staging_baseurl: "http://staging.nextstrain.org/".to_string(),
            community_url_template: default_community_url_template(),
            manifests: ManifestPaths::default(),
        }
    }
}

impl DsrConfig {
    /// Fills the community template for one repository.
    pub fn community_base_url(&self, org: &str, repo: &str) -> String {
        fill_community_template(&self.community_url_template, org, repo)
    }

    /// Serializes the configuration as it would be written to disk.
    pub fn to_toml(&self) -> Result<String> {
        Ok(toml::to_string_pretty(self)?)
    }

    /// Makes relative local paths relative to `base_dir`.
    pub fn resolve_relative_to(mut self, base_dir: &Path) -> Self {
        let anchor = |p: PathBuf| {
            if p.is_relative() {
                base_dir.join(p)
            } else {
                p
            }
        };
        self.local_data_path = anchor(self.local_data_path);
        self.manifests.local = self.manifests.local.map(&anchor);
        self.manifests.live = self.manifests.live.map(&anchor);
        self.manifests.staging = self.manifests.staging.map(&anchor);
        self
    }
}

/// Substitutes `{org}` and `{repo}` in a community URL template.
pub fn fill_community_template(template: &str, org: &str, repo: &str) -> String {
    template
        .replace(ORG_PLACEHOLDER, org)
        .replace(REPO_PLACEHOLDER, repo)
}

pub fn config_path() -> Result<PathBuf> {
    let xdg_dirs = xdg::BaseDirectories::with_prefix("dsr")?;
    Ok(xdg_dirs.place_config_file("config.toml")?)
}

/// Load configuration from an explicit file. Relative paths inside it are
/// taken relative to the file's directory.
pub fn load_from(path: &Path) -> Result<DsrConfig> {
    let data =
        fs::read_to_string(path).with_context(|| format!("read config: {}", path.display()))?;
    let cfg: DsrConfig =
        toml::from_str(&data).with_context(|| format!("parse config: {}", path.display()))?;
    let base_dir = path.parent().unwrap_or_else(|| Path::new("."));
    Ok(cfg.resolve_relative_to(base_dir))
}

/// Load configuration from disk, creating a default file if none exists.
pub fn load_or_init() -> Result<DsrConfig> {
    let path = config_path()?;
    if !path.exists() {
        let default_cfg = DsrConfig::default();
        let toml = default_cfg.to_toml()?;
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent)?;
        }
        fs::write(&path, toml)?;
        tracing::info!("created default config at {}", path.display());
        let base_dir = path.parent().unwrap_or_else(|| Path::new("."));
        return Ok(default_cfg.resolve_relative_to(base_dir));
    }

    load_from(&path)
}
