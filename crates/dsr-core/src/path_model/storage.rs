//! Storage keys and the roots they are placed under.

use std::fmt;
use std::path::PathBuf;

use url::Url;

use crate::error::ResolveError;

/// Extension every stored dataset file carries.
pub const JSON_EXTENSION: &str = ".json";

/// Flat file name of a dataset: fields joined by `_`, an optional
/// `_<type>` tag, then `.json` (e.g. `flu_ha_tree.json`).
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StorageKey {
    fields: Vec<String>,
    json_type: Option<String>,
}

impl StorageKey {
    /// Returns `None` when there are no fields to name the file after.
    /// An empty `json_type` counts as no type.
    pub fn new(fields: Vec<String>, json_type: Option<&str>) -> Option<Self> {
        if fields.is_empty() {
            return None;
        }
        Some(Self {
            fields,
            json_type: json_type.filter(|t| !t.is_empty()).map(str::to_string),
        })
    }

    pub fn fields(&self) -> &[String] {
        &self.fields
    }

    pub fn json_type(&self) -> Option<&str> {
        self.json_type.as_deref()
    }

    pub fn file_name(&self) -> String {
        let mut name = self.fields.join("_");
        if let Some(json_type) = &self.json_type {
            name.push('_');
            name.push_str(json_type);
        }
        name.push_str(JSON_EXTENSION);
        name
    }
}

/// Directory or base URL that storage keys are resolved against.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum StorageRoot {
    Directory(PathBuf),
    Remote(Url),
}

impl StorageRoot {
    /// Parses a remote base URL. The URL must be able to carry path segments.
    pub fn remote(base: &str) -> Result<Self, ResolveError> {
        let url = Url::parse(base).map_err(|e| ResolveError::InvalidBaseUrl {
            url: base.to_string(),
            reason: e.to_string(),
        })?;
        if url.cannot_be_a_base() {
            return Err(ResolveError::InvalidBaseUrl {
                url: base.to_string(),
                reason: "URL cannot be a base".to_string(),
            });
        }
        Ok(StorageRoot::Remote(url))
    }

    /// Places `key` under this root.
    ///
    /// Remote roots get the file name appended to the base path, so a base
    /// with or without a trailing slash behaves the same and the scheme
    /// separator is never touched. Escapes already present in the name (such
    /// as `%20`) are kept as they are.
    pub fn locate(&self, key: &StorageKey) -> StorageLocation {
        let name = key.file_name();
        match self {
            StorageRoot::Directory(dir) => StorageLocation::File(dir.join(name)),
            StorageRoot::Remote(base) => {
                let mut url = base.clone();
                let path = format!("{}/{}", base.path().trim_end_matches('/'), name);
                url.set_path(&path);
                StorageLocation::Url(url)
            }
        }
    }
}

impl fmt::Display for StorageRoot {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            StorageRoot::Directory(dir) => write!(f, "{}", dir.display()),
            StorageRoot::Remote(url) => f.write_str(url.as_str()),
        }
    }
}

/// Where a dataset's JSON file is actually fetched from.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum StorageLocation {
    File(PathBuf),
    Url(Url),
}

impl StorageLocation {
    pub fn is_remote(&self) -> bool {
        matches!(self, StorageLocation::Url(_))
    }
}

impl fmt::Display for StorageLocation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            StorageLocation::File(path) => write!(f, "{}", path.display()),
            StorageLocation::Url(url) => f.write_str(url.as_str()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::path::Path;

    fn key(fields: &[&str], json_type: Option<&str>) -> StorageKey {
        StorageKey::new(fields.iter().map(|f| f.to_string()).collect(), json_type).unwrap()
    }

    #[test]
    fn file_name_joins_with_underscores() {
        assert_eq!(key(&["flu", "ha"], None).file_name(), "flu_ha.json");
        assert_eq!(
            key(&["flu", "ha"], Some("tree")).file_name(),
            "flu_ha_tree.json"
        );
        assert_eq!(
            key(&["zika"], Some("root-sequence")).file_name(),
            "zika_root-sequence.json"
        );
    }

    #[test]
    fn empty_type_is_ignored() {
        let k = key(&["zika"], Some(""));
        assert_eq!(k.json_type(), None);
        assert_eq!(k.file_name(), "zika.json");
    }

    #[test]
    fn no_fields_no_key() {
        assert!(StorageKey::new(Vec::new(), Some("tree")).is_none());
    }

    #[test]
    fn remote_root_keeps_scheme_separator() {
        let root = StorageRoot::remote("https://rawgit.com/org/repo/master/auspice/").unwrap();
        let loc = root.locate(&key(&["ha"], None));
        assert_eq!(
            loc.to_string(),
            "https://rawgit.com/org/repo/master/auspice/ha.json"
        );
        assert!(loc.is_remote());
    }

    #[test]
    fn remote_root_without_trailing_slash() {
        let root = StorageRoot::remote("http://data.nextstrain.org").unwrap();
        let loc = root.locate(&key(&["flu", "ha"], Some("meta")));
        assert_eq!(loc.to_string(), "http://data.nextstrain.org/flu_ha_meta.json");

        let root = StorageRoot::remote("http://example.org/bucket").unwrap();
        let loc = root.locate(&key(&["zika"], None));
        assert_eq!(loc.to_string(), "http://example.org/bucket/zika.json");
    }

    #[test]
    fn remote_root_keeps_existing_escapes() {
        let root = StorageRoot::remote("https://rawgit.com/org/repo/master/auspice/").unwrap();
        let loc = root.locate(&key(&["my%20data"], None));
        assert_eq!(
            loc.to_string(),
            "https://rawgit.com/org/repo/master/auspice/my%20data.json"
        );

        let root = StorageRoot::remote("http://data.nextstrain.org/").unwrap();
        let loc = root.locate(&key(&["flu", "a b"], Some("tree")));
        assert_eq!(
            loc.to_string(),
            "http://data.nextstrain.org/flu_a%20b_tree.json"
        );
    }

    #[test]
    fn directory_root_joins_file_name() {
        let root = StorageRoot::Directory(PathBuf::from("/srv/data"));
        let loc = root.locate(&key(&["flu", "ha"], None));
        assert_eq!(
            loc,
            StorageLocation::File(Path::new("/srv/data").join("flu_ha.json"))
        );
        assert!(!loc.is_remote());
    }

    #[test]
    fn rejects_unusable_base_urls() {
        assert!(matches!(
            StorageRoot::remote("not a url"),
            Err(ResolveError::InvalidBaseUrl { .. })
        ));
        assert!(matches!(
            StorageRoot::remote("mailto:someone@example.org"),
            Err(ResolveError::InvalidBaseUrl { .. })
        ));
    }
}
