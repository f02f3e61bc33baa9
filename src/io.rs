//! Edge-list input and plain-text report output.

pub mod loader;
pub mod report;

pub use loader::{load_network, parse_edges, read_network, EdgeRecord};
pub use report::{output_path, render_report, write_report, Report};
