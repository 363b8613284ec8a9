//! Request path modeling and the two path-construction strategies.
//!
//! A request path is split once into [`Segment`] pairs that keep the
//! lower-cased form used for matching next to the original form used for
//! output. Resolved datasets are then rendered twice: as a hierarchical
//! [`UrlPath`] joined by `/`, and as a flat [`StorageKey`] joined by `_`
//! that is placed under a [`StorageRoot`].

mod segment;
mod storage;
mod url_path;

pub use segment::{split_path, split_path_trim_once, Segment};
pub use storage::{StorageKey, StorageLocation, StorageRoot, JSON_EXTENSION};
pub use url_path::UrlPath;
