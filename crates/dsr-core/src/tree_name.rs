//! Guessing which gene or genome segment a path names.

/// Gene and segment codes recognised as tree names.
pub const TREE_NAMES: [&str; 10] = ["HA", "NA", "PB1", "PB2", "PA", "NP", "NS", "MP", "L", "S"];

/// Returns the first segment that is a known tree name, in its original case.
pub fn guess_tree_name<S: AsRef<str>>(segments: &[S]) -> Option<&str> {
    segments.iter().map(AsRef::<str>::as_ref).find(|segment| {
        let upper = segment.to_uppercase();
        TREE_NAMES.iter().any(|name| *name == upper)
    })
}
