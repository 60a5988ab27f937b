//! Build-pass context shared by all operator builders.

use crate::backend::{GraphBackend, Operand, OperandDescriptor};
use crate::data_type::OperandDataType;
use crate::ops::OpBuilderRegistrations;
use std::collections::HashMap;
use tracing::{debug, info, info_span, trace};
use webnn_core::{BuildError, ContextOptions, GraphNode, Result};

/// Tracks the operands produced so far and forwards emission to the backend.
///
/// The backend is borrowed for the duration of one pass. If any node fails
/// the pass stops and the partially built graph must be discarded.
pub struct ModelBuilder<'a> {
    builder: &'a mut dyn GraphBackend,
    options: ContextOptions,
    operands: HashMap<String, Operand>,
}

impl<'a> ModelBuilder<'a> {
    /// Start a pass against `builder`.
    pub fn new(builder: &'a mut dyn GraphBackend, options: ContextOptions) -> Self {
        Self {
            builder,
            options,
            operands: HashMap::new(),
        }
    }

    /// Context options of this pass.
    pub fn options(&self) -> &ContextOptions {
        &self.options
    }

    /// Whether int64 operands can be created.
    pub fn is_int64_supported(&self) -> bool {
        self.options.is_int64_supported()
    }

    /// The backend, for read-only inspection.
    pub fn builder(&self) -> &(dyn GraphBackend + 'a) {
        &*self.builder
    }

    /// The backend, for emitting operations.
    pub fn builder_mut(&mut self) -> &mut (dyn GraphBackend + 'a) {
        &mut *self.builder
    }

    /// Operand registered under `name`.
    pub fn get_operand(&self, name: &str) -> Result<Operand> {
        self.operands
            .get(name)
            .copied()
            .ok_or_else(|| BuildError::MissingOperand {
                name: name.to_string(),
            })
    }

    /// Whether `name` has been registered.
    pub fn has_operand(&self, name: &str) -> bool {
        self.operands.contains_key(name)
    }

    /// Register `operand` under `name`. Each name may be registered once.
    pub fn add_operand(&mut self, name: &str, operand: Operand) -> Result<()> {
        if self.operands.contains_key(name) {
            return Err(BuildError::DuplicateOperand {
                name: name.to_string(),
            });
        }
        trace!("Registered operand {} -> #{}", name, operand.index());
        self.operands.insert(name.to_string(), operand);
        Ok(())
    }

    /// Number of registered operands.
    pub fn operand_count(&self) -> usize {
        self.operands.len()
    }

    /// Registered operand names, sorted.
    pub fn operand_names(&self) -> Vec<&str> {
        let mut names: Vec<&str> = self.operands.keys().map(String::as_str).collect();
        names.sort_unstable();
        names
    }

    /// Declare a graph input and register it under its own name.
    pub fn add_input(
        &mut self,
        name: &str,
        data_type: OperandDataType,
        shape: Vec<u32>,
    ) -> Result<Operand> {
        if self.has_operand(name) {
            return Err(BuildError::DuplicateOperand {
                name: name.to_string(),
            });
        }
        let operand = self
            .builder
            .input(name, OperandDescriptor::new(data_type, shape))?;
        self.add_operand(name, operand)?;
        Ok(operand)
    }

    /// Run every node through its registered builder, in the given order.
    ///
    /// Nodes are expected in an order where each input is already
    /// registered. The first failure ends the pass; the returned error always
    /// names the failing node.
    pub fn add_operations(
        &mut self,
        nodes: &[GraphNode],
        registrations: &OpBuilderRegistrations,
    ) -> Result<()> {
        let span = info_span!("webnn_build", nodes = nodes.len());
        let _guard = span.enter();
        info!("Building WebNN graph from {} nodes", nodes.len());

        for node in nodes {
            let op_builder = registrations.get(&node.op_type).ok_or_else(|| {
                BuildError::UnsupportedOperator {
                    op_type: node.op_type.clone(),
                    node: node.name().to_string(),
                }
            })?;
            debug!("Adding node: {} ({})", node.name(), node.op_type);
            op_builder
                .add_to_model_builder(self, node)
                .map_err(|err| err.in_node(node.name(), &node.op_type))?;
        }

        info!(
            "WebNN graph built: {} operations, {} operands",
            self.builder.operation_count(),
            self.operands.len()
        );
        Ok(())
    }
}
