// ONNX operator builders for the WebNN graph API
//
// Each builder translates one ONNX node into WebNN operations and registers
// the results under the node's output names. Builders are selected by ONNX
// op type through `OpBuilderRegistrations`.

mod cast;

pub use cast::{create_cast_op_builder, CastOpBuilder};

use crate::model_builder::ModelBuilder;
use std::collections::HashMap;
use tracing::{debug, info};
use webnn_core::{BuildError, ContextOptions, GraphNode, Result};

/// Trait for translating one ONNX node into WebNN operations
pub trait OpBuilder: Send + Sync {
    /// Emit the node's operations and register one operand per output.
    ///
    /// On error nothing may have been registered.
    fn add_to_model_builder_impl(&self, model_builder: &mut ModelBuilder<'_>, node: &GraphNode)
        -> Result<()>;

    /// Checked entry point used by the build pass
    fn add_to_model_builder(
        &self,
        model_builder: &mut ModelBuilder<'_>,
        node: &GraphNode,
    ) -> Result<()> {
        if node.outputs.is_empty() {
            return Err(BuildError::InvalidNode {
                node: node.name().to_string(),
                reason: format!("{} node has no outputs", node.op_type),
            });
        }
        self.add_to_model_builder_impl(model_builder, node)?;
        debug!("Operator name: [{}] type: [{}] was added", node.name(), node.op_type);
        Ok(())
    }

    /// Whether this builder can translate `node` for a context with `options`
    fn is_op_supported(&self, node: &GraphNode, options: &ContextOptions) -> bool {
        if node.outputs.is_empty() {
            debug!("{} [{}] has no outputs", node.op_type, node.name());
            return false;
        }
        if !self.has_supported_inputs(node) {
            debug!(
                "{} [{}] has unsupported input count {}",
                node.op_type,
                node.name(),
                node.inputs.len()
            );
            return false;
        }
        self.is_op_supported_impl(node, options)
    }

    /// Operator-specific support checks
    fn is_op_supported_impl(&self, _node: &GraphNode, _options: &ContextOptions) -> bool {
        true
    }

    /// Input count check against `min_inputs`/`max_inputs`
    fn has_supported_inputs(&self, node: &GraphNode) -> bool {
        let count = node.inputs.len();
        count >= self.min_inputs() && count <= self.max_inputs()
    }

    /// Minimum number of inputs
    fn min_inputs(&self) -> usize {
        1
    }

    /// Maximum number of inputs
    fn max_inputs(&self) -> usize {
        usize::MAX
    }
}

/// Registry owning every op builder, keyed by ONNX op type
#[derive(Default)]
pub struct OpBuilderRegistrations {
    builders: HashMap<String, Box<dyn OpBuilder>>,
}

impl OpBuilderRegistrations {
    /// Create an empty registry
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a registry holding every built-in builder
    pub fn with_builtins() -> Result<Self> {
        let mut registrations = Self::new();
        create_cast_op_builder("Cast", &mut registrations)?;

        info!(
            "Registered {} WebNN op builders",
            registrations.builders.len()
        );
        Ok(registrations)
    }

    /// Register a builder for `op_type`
    ///
    /// Each op type may be registered once; a second registration is
    /// rejected and the existing builder is kept.
    pub fn register(&mut self, op_type: &str, builder: Box<dyn OpBuilder>) -> Result<()> {
        if self.builders.contains_key(op_type) {
            return Err(BuildError::DuplicateRegistration {
                op_type: op_type.to_string(),
            });
        }
        self.builders.insert(op_type.to_string(), builder);
        Ok(())
    }

    /// Get the builder for an op type
    pub fn get(&self, op_type: &str) -> Option<&dyn OpBuilder> {
        self.builders.get(op_type).map(|builder| builder.as_ref())
    }

    /// Check if an op type has a builder
    pub fn is_supported(&self, op_type: &str) -> bool {
        self.builders.contains_key(op_type)
    }

    /// Sorted list of registered op types
    pub fn supported_operators(&self) -> Vec<String> {
        let mut ops: Vec<String> = self.builders.keys().cloned().collect();
        ops.sort();
        ops
    }

    /// Number of registered builders
    pub fn len(&self) -> usize {
        self.builders.len()
    }

    /// Whether the registry is empty
    pub fn is_empty(&self) -> bool {
        self.builders.is_empty()
    }
}

/// Create the registry used by a default build pass
pub fn create_op_builder_registrations() -> Result<OpBuilderRegistrations> {
    OpBuilderRegistrations::with_builtins()
}
