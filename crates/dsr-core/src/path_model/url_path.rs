//! Client-facing URL paths: source prefix plus dataset fields joined by `/`.

use std::fmt;

/// Hierarchical URL path of a resolved dataset.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct UrlPath {
    segments: Vec<String>,
    prefix_len: usize,
}

impl UrlPath {
    /// Starts a path with the given source prefix segments.
    pub fn with_prefix<I, S>(prefix: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let segments: Vec<String> = prefix.into_iter().map(Into::into).collect();
        let prefix_len = segments.len();
        Self {
            segments,
            prefix_len,
        }
    }

    /// Appends dataset fields after the prefix.
    pub fn push_fields<I, S>(&mut self, fields: I)
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.segments.extend(fields.into_iter().map(Into::into));
    }

    pub fn prefix(&self) -> &[String] {
        &self.segments[..self.prefix_len]
    }

    /// Dataset fields without the source prefix.
    pub fn fields(&self) -> &[String] {
        &self.segments[self.prefix_len..]
    }

    pub fn is_empty(&self) -> bool {
        self.segments.is_empty()
    }
}

impl fmt::Display for UrlPath {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.segments.join("/"))
    }
}
