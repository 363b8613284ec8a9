//! Listing the datasets a manifest makes available.

use super::{Manifest, ManifestNode};

impl Manifest {
    /// Every complete dataset field path, depth first in key order.
    pub fn datasets(&self) -> Vec<Vec<String>> {
        let mut out = Vec::new();
        let mut prefix = Vec::new();
        collect(&self.root, &mut prefix, &mut out);
        out
    }

    /// Dataset reached by following defaults from the root, if every level
    /// on the way has one.
    pub fn default_dataset(&self) -> Option<Vec<String>> {
        let mut path = Vec::new();
        let mut node = &self.root;
        while let ManifestNode::Level(level) = node {
            let (key, child) = level.default_option()?;
            path.push(key.to_string());
            node = child;
        }
        if path.is_empty() {
            None
        } else {
            Some(path)
        }
    }
}

fn collect(node: &ManifestNode, prefix: &mut Vec<String>, out: &mut Vec<Vec<String>>) {
    match node {
        ManifestNode::Leaf => {
            if !prefix.is_empty() {
                out.push(prefix.clone());
            }
        }
        ManifestNode::Level(level) => {
            for (key, child) in &level.options {
                prefix.push(key.clone());
                collect(child, prefix, out);
                prefix.pop();
            }
        }
    }
}
