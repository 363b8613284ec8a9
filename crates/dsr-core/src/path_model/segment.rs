//! Splitting request paths into segments.

/// One `/`-separated piece of a request path.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Segment {
    /// Lower-cased form, used only for matching.
    pub normalized: String,
    /// The segment as received, used for output.
    pub original: String,
}

impl Segment {
    pub fn new(original: &str) -> Self {
        Self {
            normalized: original.to_lowercase(),
            original: original.to_string(),
        }
    }
}

/// Splits `path` on `/` after trimming every leading and trailing slash.
///
/// An empty remainder yields no segments, so `""` and `"/"` are equivalent.
pub fn split_path(path: &str) -> Vec<Segment> {
    split_trimmed(path.trim_matches('/'))
}

/// Like [`split_path`] but trims at most one leading and one trailing slash.
///
/// Extra slashes survive as empty segments.
pub fn split_path_trim_once(path: &str) -> Vec<Segment> {
    let trimmed = path.strip_prefix('/').unwrap_or(path);
    let trimmed = trimmed.strip_suffix('/').unwrap_or(trimmed);
    split_trimmed(trimmed)
}

fn split_trimmed(trimmed: &str) -> Vec<Segment> {
    if trimmed.is_empty() {
        return Vec::new();
    }
    trimmed.split('/').map(Segment::new).collect()
}
