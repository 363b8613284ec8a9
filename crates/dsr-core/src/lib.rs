pub mod config;
pub mod error;
pub mod logging;
pub mod manifest;
pub mod path_model;
pub mod resolver;
pub mod source;
pub mod tree_name;
