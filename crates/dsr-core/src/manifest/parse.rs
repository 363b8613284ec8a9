//! Conversion from JSON values to manifest trees.

use anyhow::{bail, Result};
use serde_json::Value;

use super::{ManifestLevel, ManifestNode, DEFAULT_KEY};

/// Parses one node; `at` is the slash-joined option path for error messages.
pub(super) fn parse_node(value: &Value, at: &str) -> Result<ManifestNode> {
    let map = match value {
        Value::Null | Value::Bool(true) => return Ok(ManifestNode::Leaf),
        Value::String(s) if s.is_empty() => return Ok(ManifestNode::Leaf),
        Value::Object(map) if map.is_empty() => return Ok(ManifestNode::Leaf),
        Value::Object(map) => map,
        other => bail!("{}: unexpected manifest value {}", location(at), other),
    };

    if map.len() != 1 {
        bail!(
            "{}: a level must name exactly one field category, found {}",
            location(at),
            map.len()
        );
    }
    let Some((category, options)) = map.iter().next() else {
        bail!("{}: empty level", location(at));
    };
    let Value::Object(options) = options else {
        bail!(
            "{}: options of category {:?} must be an object",
            location(at),
            category
        );
    };

    let mut default = None;
    let mut parsed = Vec::with_capacity(options.len());
    for (key, child) in options {
        if key == DEFAULT_KEY {
            let Some(name) = child.as_str() else {
                bail!(
                    "{}: default of category {:?} must be a string",
                    location(at),
                    category
                );
            };
            default = Some(name.to_string());
            continue;
        }
        let child_at = format!("{at}/{key}");
        parsed.push((key.clone(), parse_node(child, &child_at)?));
    }

    if parsed.is_empty() {
        bail!(
            "{}: category {:?} offers no options",
            location(at),
            category
        );
    }
    if let Some(name) = &default {
        if !parsed.iter().any(|(key, _)| key == name) {
            bail!(
                "{}: default {:?} of category {:?} is not one of its options",
                location(at),
                name,
                category
            );
        }
    }

    Ok(ManifestNode::Level(ManifestLevel {
        category: category.clone(),
        default,
        options: parsed,
    }))
}

fn location(at: &str) -> &str {
    if at.is_empty() {
        "manifest root"
    } else {
        at
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn parse(json: &str) -> Result<ManifestNode> {
        parse_node(&serde_json::from_str(json).unwrap(), "")
    }

    #[test]
    fn leaves() {
        for json in [r#""""#, "null", "true", "{}"] {
            assert_eq!(parse(json).unwrap(), ManifestNode::Leaf, "{json}");
        }
    }

    #[test]
    fn nested_levels() {
        let node = parse(r#"{"pathogen": {"default": "zika", "zika": "", "ebola": ""}}"#).unwrap();
        let ManifestNode::Level(level) = node else {
            panic!("expected level");
        };
        assert_eq!(level.category, "pathogen");
        assert_eq!(level.default.as_deref(), Some("zika"));
        let keys: Vec<&str> = level.options.iter().map(|(k, _)| k.as_str()).collect();
        assert_eq!(keys, ["ebola", "zika"]);
    }

    #[test]
    fn rejects_multi_category_level() {
        let err = parse(r#"{"a": {"x": ""}, "b": {"y": ""}}"#).unwrap_err();
        assert!(err.to_string().contains("exactly one field category"));
    }

    #[test]
    fn rejects_dangling_default() {
        let err = parse(r#"{"pathogen": {"default": "flu", "zika": ""}}"#).unwrap_err();
        assert!(err.to_string().contains("not one of its options"));
    }

    #[test]
    fn rejects_non_string_default_and_scalars() {
        assert!(parse(r#"{"pathogen": {"default": 3, "zika": ""}}"#).is_err());
        assert!(parse("42").is_err());
        assert!(parse(r#""zika""#).is_err());
    }

    #[test]
    fn error_names_nested_location() {
        let err = parse(r#"{"pathogen": {"flu": {"lineage": []}}}"#).unwrap_err();
        assert!(err.to_string().starts_with("/flu:"), "{err}");
    }
}
