//! `dsr datasets <source>` – list datasets from a source's manifest.

use anyhow::{bail, Result};
use dsr_core::path_model::UrlPath;
use dsr_core::resolver::{AvailableDatasets, SourceResolver};
use dsr_core::source::SourceCategory;

pub fn run_datasets(resolver: &SourceResolver, source: SourceCategory) -> Result<()> {
    let Some(available) = resolver.collect_datasets(source) else {
        bail!("no manifest loaded for {source} datasets (only local and live can be listed)");
    };
    let lines = listing_lines(&available);
    if lines.is_empty() {
        println!("No datasets in {source} manifest.");
    }
    for line in lines {
        println!("{line}");
    }
    Ok(())
}

/// One line per dataset as a client URL path; the default is starred.
pub(crate) fn listing_lines(available: &AvailableDatasets<'_>) -> Vec<String> {
    let default = available.default_dataset();
    available
        .datasets()
        .into_iter()
        .map(|fields| {
            let marker = if default.as_ref() == Some(&fields) { '*' } else { ' ' };
            let mut url_path = UrlPath::with_prefix(available.source.url_label());
            url_path.push_fields(fields);
            format!("{marker} {url_path}")
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use dsr_core::manifest::Manifest;

    #[test]
    fn local_listing_is_prefixed_and_marks_default() {
        let manifest = Manifest::from_json_str(
            r#"{"pathogen": {"default": "zika", "zika": "", "ebola": ""}}"#,
        )
        .unwrap();
        let available = AvailableDatasets {
            available: &manifest,
            source: SourceCategory::Local,
        };
        assert_eq!(listing_lines(&available), ["  local/ebola", "* local/zika"]);
    }

    #[test]
    fn live_listing_has_no_prefix() {
        let manifest =
            Manifest::from_json_str(r#"{"pathogen": {"flu": {"segment": {"ha": "", "na": ""}}}}"#)
                .unwrap();
        let available = AvailableDatasets {
            available: &manifest,
            source: SourceCategory::Live,
        };
        assert_eq!(listing_lines(&available), ["  flu/ha", "  flu/na"]);
    }
}
