//! `dsr guess-tree <segment>...` – guess the tree name from path segments.

use anyhow::{bail, Result};
use dsr_core::tree_name::guess_tree_name;

pub fn run_guess_tree(args: &[String]) -> Result<()> {
    let segments = split_args(args);
    match guess_tree_name(&segments) {
        Some(name) => println!("{name}"),
        None => bail!("no known tree name in {}", segments.join("/")),
    }
    Ok(())
}

/// Accepts both separate segments and slash-separated paths.
pub(crate) fn split_args(args: &[String]) -> Vec<&str> {
    args.iter()
        .flat_map(|arg| arg.split('/'))
        .filter(|segment| !segment.is_empty())
        .collect()
}
