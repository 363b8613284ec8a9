//! `dsr source <path>` – classify a request path.

use dsr_core::source::get_source;

pub fn run_source(path: &str) {
    match get_source(path) {
        Some(source) => println!("{source}"),
        None => println!("unrecognized"),
    }
}
