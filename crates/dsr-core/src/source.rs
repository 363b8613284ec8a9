//! Source classification: which data source a request path targets.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::path_model::split_path;

/// Segment that may precede the source label without changing the source.
const STATUS_SEGMENT: &str = "status";

/// Where a requested dataset's manifest and storage root come from.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SourceCategory {
    /// Files under the configured local data directory.
    Local,
    /// The staging remote.
    Staging,
    /// Community datasets hosted in GitHub repositories (`community/...` URLs).
    Github,
    /// The default live remote.
    Live,
}

impl SourceCategory {
    pub fn as_str(self) -> &'static str {
        match self {
            SourceCategory::Local => "local",
            SourceCategory::Staging => "staging",
            SourceCategory::Github => "github",
            SourceCategory::Live => "live",
        }
    }

    /// Label used for this source as the first URL path segment, if any.
    /// Live datasets carry no prefix.
    pub fn url_label(self) -> Option<&'static str> {
        match self {
            SourceCategory::Local => Some("local"),
            SourceCategory::Staging => Some("staging"),
            SourceCategory::Github => Some("community"),
            SourceCategory::Live => None,
        }
    }
}

impl fmt::Display for SourceCategory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Error returned when parsing an unknown category name.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("unknown source category {0:?} (expected local, staging, github or live)")]
pub struct UnknownSourceCategory(pub String);

impl FromStr for SourceCategory {
    type Err = UnknownSourceCategory;

    /// Accepts the category names plus `community` as an alias of `github`.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "local" => Ok(SourceCategory::Local),
            "staging" => Ok(SourceCategory::Staging),
            "github" | "community" => Ok(SourceCategory::Github),
            "live" => Ok(SourceCategory::Live),
            _ => Err(UnknownSourceCategory(s.to_string())),
        }
    }
}

/// Classifies a request path by its first segment.
///
/// A leading `status` segment is skipped. An empty path is the live source;
/// an unrecognized first segment yields `None`, which callers must handle
/// separately from the live default.
pub fn get_source(path: &str) -> Option<SourceCategory> {
    let segments = split_path(path);
    let mut normalized = segments.iter().map(|s| s.normalized.as_str());

    let mut first = normalized.next();
    if first == Some(STATUS_SEGMENT) {
        first = normalized.next();
    }

    match first {
        None => Some(SourceCategory::Live),
        Some("local") => Some(SourceCategory::Local),
        Some("staging") => Some(SourceCategory::Staging),
        Some("community") => Some(SourceCategory::Github),
        Some(_) => None,
    }
}
