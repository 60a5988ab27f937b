//! The WebNN graph builder seam.
//!
//! [`GraphBackend`] is the subset of `MLGraphBuilder` the operator builders
//! call. Operations live in a table owned by the backend; an [`Operand`] is an
//! index into that table, so builders never hold backend memory directly.

use crate::data_type::OperandDataType;
use serde::{Deserialize, Serialize};
use webnn_core::{BuildError, Result};

/// Handle to the output of one backend operation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct Operand(usize);

impl Operand {
    /// Position of the producing operation in the backend table.
    pub fn index(self) -> usize {
        self.0
    }
}

/// Type and shape of an operand.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct OperandDescriptor {
    /// Element type.
    pub data_type: OperandDataType,
    /// Dimensions; empty for scalars.
    pub shape: Vec<u32>,
}

impl OperandDescriptor {
    /// Create a descriptor.
    pub fn new(data_type: OperandDataType, shape: Vec<u32>) -> Self {
        Self { data_type, shape }
    }
}

/// `MLOperatorOptions`.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct OperatorOptions {
    /// Diagnostic label, set to the ONNX node name.
    pub label: Option<String>,
}

impl OperatorOptions {
    /// Options carrying only a label.
    pub fn labeled(label: impl Into<String>) -> Self {
        Self {
            label: Some(label.into()),
        }
    }
}

/// What an operation computes.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum OperationKind {
    /// Named graph input.
    Input {
        /// Input name.
        name: String,
    },
    /// Element type conversion.
    Cast,
}

impl OperationKind {
    /// WebNN method name.
    pub fn name(&self) -> &'static str {
        match self {
            Self::Input { .. } => "input",
            Self::Cast => "cast",
        }
    }
}

/// One emitted backend operation.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Operation {
    /// Operation kind.
    pub kind: OperationKind,
    /// Input operands, in call order.
    pub inputs: Vec<Operand>,
    /// Output type and shape.
    pub output: OperandDescriptor,
    /// Options passed at emission.
    pub options: OperatorOptions,
}

/// Graph construction calls available to operator builders.
pub trait GraphBackend {
    /// Declare a named graph input.
    fn input(&mut self, name: &str, descriptor: OperandDescriptor) -> Result<Operand>;

    /// Emit `cast(input, type, options)`.
    fn cast(
        &mut self,
        input: Operand,
        data_type: OperandDataType,
        options: &OperatorOptions,
    ) -> Result<Operand>;

    /// The operation that produced `operand`.
    fn operation(&self, operand: Operand) -> Option<&Operation>;

    /// Number of operations emitted so far.
    fn operation_count(&self) -> usize;
}

/// In-process backend that records every operation it is asked to emit.
#[derive(Debug, Default)]
pub struct RecordingGraphBuilder {
    operations: Vec<Operation>,
}

impl RecordingGraphBuilder {
    /// Empty graph.
    pub fn new() -> Self {
        Self::default()
    }

    /// All operations in emission order.
    pub fn operations(&self) -> &[Operation] {
        &self.operations
    }

    fn push(&mut self, operation: Operation) -> Operand {
        self.operations.push(operation);
        Operand(self.operations.len() - 1)
    }

    fn descriptor(&self, operand: Operand) -> Result<&OperandDescriptor> {
        self.operations
            .get(operand.index())
            .map(|op| &op.output)
            .ok_or_else(|| {
                BuildError::Backend(format!("operand {} does not exist", operand.index()))
            })
    }
}

impl GraphBackend for RecordingGraphBuilder {
    fn input(&mut self, name: &str, descriptor: OperandDescriptor) -> Result<Operand> {
        let duplicate = self
            .operations
            .iter()
            .any(|op| matches!(&op.kind, OperationKind::Input { name: n } if n == name));
        if duplicate {
            return Err(BuildError::Backend(format!(
                "input '{}' is already declared",
                name
            )));
        }

        Ok(self.push(Operation {
            kind: OperationKind::Input {
                name: name.to_string(),
            },
            inputs: Vec::new(),
            output: descriptor,
            options: OperatorOptions::default(),
        }))
    }

    fn cast(
        &mut self,
        input: Operand,
        data_type: OperandDataType,
        options: &OperatorOptions,
    ) -> Result<Operand> {
        let shape = self.descriptor(input)?.shape.clone();
        Ok(self.push(Operation {
            kind: OperationKind::Cast,
            inputs: vec![input],
            output: OperandDescriptor::new(data_type, shape),
            options: options.clone(),
        }))
    }

    fn operation(&self, operand: Operand) -> Option<&Operation> {
        self.operations.get(operand.index())
    }

    fn operation_count(&self) -> usize {
        self.operations.len()
    }
}
