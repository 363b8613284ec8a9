//! Validation and normalisation of requested fields against a manifest.

use crate::error::ResolveError;
use crate::source::SourceCategory;

use super::{Manifest, ManifestNode};

/// Walks `manifest` with the requested `fields` and returns the full,
/// normalised field path.
///
/// At each level the next field is consumed if it names an option (case
/// insensitive; the manifest's spelling is returned). Otherwise the level's
/// default is filled in without consuming anything. A level with neither, or
/// a field left over once a leaf is reached, is an
/// [`ResolveError::UnknownManifestField`].
pub fn check_fields_against_manifest(
    manifest: &Manifest,
    source: SourceCategory,
    fields: &[String],
) -> Result<Vec<String>, ResolveError> {
    let unknown = |field: &str| ResolveError::UnknownManifestField {
        category: source,
        field: field.to_string(),
    };

    let mut remaining = fields.iter().peekable();
    let mut resolved = Vec::new();
    let mut node = manifest.root();

    while let ManifestNode::Level(level) = node {
        let requested = remaining
            .peek()
            .and_then(|field| level.find_option(field));
        let (key, child) = match requested {
            Some(found) => {
                remaining.next();
                found
            }
            None => match level.default_option() {
                Some(found) => found,
                None => {
                    let field = remaining.peek().map_or(level.category.as_str(), |f| f.as_str());
                    return Err(unknown(field));
                }
            },
        };
        resolved.push(key.to_string());
        node = child;
    }

    if let Some(extra) = remaining.next() {
        return Err(unknown(extra));
    }
    Ok(resolved)
}
