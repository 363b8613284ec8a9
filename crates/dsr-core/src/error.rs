//! Errors surfaced by path construction and field validation.

use crate::source::SourceCategory;

/// Failure while resolving a request path to a storage location.
///
/// None of these are retried; callers map them to a bad-request or
/// not-found response.
#[derive(Debug, thiserror::Error)]
pub enum ResolveError {
    /// `community/...` path with fewer than org and repo segments.
    #[error("Community URLs must be of format community/githubOrgName/repoName/... (got {path:?})")]
    MalformedCommunityPath { path: String },

    /// A requested field is not known to the manifest of `category`.
    #[error("unknown field {field:?} for {category} manifest")]
    UnknownManifestField {
        category: SourceCategory,
        field: String,
    },

    /// Nothing left to build a storage key from.
    #[error("no dataset fields in path {path:?}")]
    EmptyDataset { path: String },

    /// A configured or templated storage root is not a usable base URL.
    #[error("invalid base URL {url:?}: {reason}")]
    InvalidBaseUrl { url: String, reason: String },
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn community_message_names_expected_format() {
        let err = ResolveError::MalformedCommunityPath {
            path: "/community/org".to_string(),
        };
        let msg = err.to_string();
        assert!(msg.contains("community/githubOrgName/repoName/..."));
        assert!(msg.contains("/community/org"));
    }

    #[test]
    fn unknown_field_message_names_source() {
        let err = ResolveError::UnknownManifestField {
            category: SourceCategory::Local,
            field: "zika".to_string(),
        };
        assert_eq!(err.to_string(), "unknown field \"zika\" for local manifest");
    }
}
