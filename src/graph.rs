//! Flow networks and maximum flow.
//!
//! - [`residual`]: the capacitated network with paired residual edges
//! - [`edmond_karp`]: shortest augmenting path search and the flow loop
//!
//! # Examples
//!
//! ```rust
//! use flownet::graph::FlowNetwork;
//!
//! let mut net: FlowNetwork<&str, i64> = FlowNetwork::new();
//! net.add_edge("s", "a", 3).unwrap();
//! net.add_edge("a", "t", 2).unwrap();
//! net.add_edge("s", "t", 1).unwrap();
//!
//! assert_eq!(net.max_flow(&"s", &"t").unwrap(), 3);
//! ```

pub mod edmond_karp;
pub mod residual;


pub use edmond_karp::{AugmentingPath, EdgeFlow, FlowSummary};
pub use residual::{Edge, EdgeId, FlowNetwork};
