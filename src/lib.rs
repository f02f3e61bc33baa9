pub mod config;
pub mod error;
pub mod graph;
pub mod io;

pub use config::FlowConfig;
pub use error::{Error, Result};
pub use graph::{AugmentingPath, EdgeFlow, EdgeId, FlowNetwork, FlowSummary};
