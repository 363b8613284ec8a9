//! `dsr resolve <path>` – print URL path and storage location.

use anyhow::Result;
use dsr_core::resolver::{FieldValidator, ResolvedLocation, SourceResolver};
use dsr_core::source::{get_source, SourceCategory};
use dsr_core::tree_name::guess_tree_name;

pub fn run_resolve<V: FieldValidator>(
    resolver: &SourceResolver<V>,
    path: &str,
    source: Option<SourceCategory>,
    json_type: Option<&str>,
) -> Result<()> {
    let source = effective_source(path, source);
    let location = resolver.construct_path_to_get(source, path, json_type)?;
    print!("{}", describe(source, &location));
    Ok(())
}

/// Explicit source, else the classified one; unrecognized paths are live.
pub(crate) fn effective_source(path: &str, explicit: Option<SourceCategory>) -> SourceCategory {
    explicit.or_else(|| get_source(path)).unwrap_or_else(|| {
        tracing::info!("unrecognized source for {}; using live", path);
        SourceCategory::Live
    })
}

pub(crate) fn describe(source: SourceCategory, location: &ResolvedLocation) -> String {
    let mut out = format!(
        "source:   {source}\nurl path: {}\nstorage:  {}\n",
        location.url_path, location.storage
    );
    if let Some(tree) = guess_tree_name(location.url_path.fields()) {
        out.push_str(&format!("tree:     {tree}\n"));
    }
    out
}
