//! CLI command handlers. Each command is in its own file.

mod datasets;
mod guess_tree;
mod resolve;
mod show_config;
mod source;

pub use datasets::run_datasets;
pub use guess_tree::run_guess_tree;
pub use resolve::run_resolve;
pub use show_config::run_show_config;
pub use source::run_source;
