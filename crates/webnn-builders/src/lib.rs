//! ONNX to WebNN operator builders.
//!
//! A build pass walks ONNX nodes in dependency order and hands each one to
//! the [`OpBuilder`] registered for its op type. The builder emits WebNN
//! operations through the pass's [`ModelBuilder`] and registers one operand
//! per node output.
//!
//! ```rust
//! use webnn_builders::{
//!     create_op_builder_registrations, GraphBackend, ModelBuilder, OperandDataType,
//!     RecordingGraphBuilder,
//! };
//! use webnn_core::{ContextOptions, GraphNode, NodeAttribute, TensorDataType};
//!
//! let registrations = create_op_builder_registrations()?;
//! let mut graph = RecordingGraphBuilder::new();
//! let mut model_builder = ModelBuilder::new(&mut graph, ContextOptions::default());
//! model_builder.add_input("X", OperandDataType::Float32, vec![2, 2])?;
//!
//! let cast = GraphNode::new("Cast", "cast0")
//!     .with_input("X")
//!     .with_output("Y")
//!     .with_attribute("to", NodeAttribute::Int(TensorDataType::Uint8.to_onnx()));
//! model_builder.add_operations(&[cast], &registrations)?;
//!
//! let y = model_builder.get_operand("Y")?;
//! let op = model_builder.builder().operation(y).unwrap();
//! assert_eq!(op.output.data_type, OperandDataType::Uint8);
//! # Ok::<(), webnn_core::BuildError>(())
//! ```

pub mod backend;
pub mod data_type;
pub mod model_builder;
pub mod ops;

pub use backend::{
    GraphBackend, Operand, OperandDescriptor, Operation, OperationKind, OperatorOptions,
    RecordingGraphBuilder,
};
pub use data_type::{operand_data_type_from_onnx, to_operand_data_type, OperandDataType};
pub use model_builder::ModelBuilder;
pub use ops::{
    create_cast_op_builder, create_op_builder_registrations, CastOpBuilder, OpBuilder,
    OpBuilderRegistrations,
};
