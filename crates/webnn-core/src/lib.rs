//! Core types for translating ONNX graphs into WebNN graphs.
//!
//! This crate holds what every operator builder needs to see but none of
//! them owns:
//! - **Types**: ONNX tensor data type codes and node attributes
//! - **Graph**: the node representation and typed attribute access
//! - **Config**: the options of the WebNN context a model is built against
//! - **Logging**: subscriber setup for hosts and tests
//!
//! ## Example
//!
//! ```rust
//! use webnn_core::{GraphNode, NodeAttrHelper, NodeAttribute, TensorDataType};
//!
//! let node = GraphNode::new("Cast", "cast0")
//!     .with_input("X")
//!     .with_output("Y")
//!     .with_attribute("to", NodeAttribute::Int(TensorDataType::Uint8.to_onnx()));
//! let to = NodeAttrHelper::new(&node).get_int("to", TensorDataType::Float.to_onnx())?;
//! assert_eq!(TensorDataType::from_onnx(to), Some(TensorDataType::Uint8));
//! # Ok::<(), webnn_core::BuildError>(())
//! ```

#![deny(missing_docs)]
#![warn(clippy::all)]

pub mod config;
pub mod error;
pub mod graph;
pub mod logging;
pub mod types;

pub use config::{ContextOptions, DeviceType, PowerPreference};
pub use error::{BuildError, Result};
pub use graph::{GraphNode, NodeAttrHelper};
pub use types::{NodeAttribute, TensorDataType};
