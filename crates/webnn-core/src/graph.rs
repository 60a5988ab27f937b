//! Graph node representation and attribute access.
//!
//! Nodes are produced by the model loader and handed to the operator
//! builders unchanged. Builders read them through [`NodeAttrHelper`], which
//! applies the schema default when an attribute is absent.

use crate::error::{BuildError, Result};
use crate::types::NodeAttribute;
use serde::{Deserialize, Serialize};
use std::collections::HashMap;

/// A single operation in the source graph.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct GraphNode {
    /// ONNX operator type, e.g. `Cast`.
    pub op_type: String,
    /// Input value names, in operator order.
    pub inputs: Vec<String>,
    /// Output value names, in operator order.
    pub outputs: Vec<String>,
    /// Attributes by name.
    pub attributes: HashMap<String, NodeAttribute>,
    /// Optional node name.
    pub name: Option<String>,
}

impl GraphNode {
    /// Create a node with no inputs, outputs or attributes.
    pub fn new(op_type: impl Into<String>, name: impl Into<String>) -> Self {
        Self {
            op_type: op_type.into(),
            name: Some(name.into()),
            ..Self::default()
        }
    }

    /// Append an input name.
    pub fn with_input(mut self, input: impl Into<String>) -> Self {
        self.inputs.push(input.into());
        self
    }

    /// Append an output name.
    pub fn with_output(mut self, output: impl Into<String>) -> Self {
        self.outputs.push(output.into());
        self
    }

    /// Set an attribute.
    pub fn with_attribute(mut self, name: impl Into<String>, value: NodeAttribute) -> Self {
        self.attributes.insert(name.into(), value);
        self
    }

    /// Node name, or an empty string for anonymous nodes.
    pub fn name(&self) -> &str {
        self.name.as_deref().unwrap_or("")
    }

    /// Look up a raw attribute.
    pub fn attribute(&self, name: &str) -> Option<&NodeAttribute> {
        self.attributes.get(name)
    }
}

/// Typed attribute lookup with schema defaults.
pub struct NodeAttrHelper<'a> {
    node: &'a GraphNode,
}

impl<'a> NodeAttrHelper<'a> {
    /// Wrap a node.
    pub fn new(node: &'a GraphNode) -> Self {
        Self { node }
    }

    /// Whether the attribute is present.
    pub fn has_attr(&self, name: &str) -> bool {
        self.node.attributes.contains_key(name)
    }

    /// Integer attribute, or `default` when absent.
    pub fn get_int(&self, name: &str, default: i64) -> Result<i64> {
        match self.node.attribute(name) {
            None => Ok(default),
            Some(NodeAttribute::Int(v)) => Ok(*v),
            Some(other) => Err(self.wrong_kind(name, "int", other)),
        }
    }

    // The getters below cover the remaining ONNX attribute kinds for
    // builders beyond Cast.

    /// Float attribute, or `default` when absent.
    pub fn get_float(&self, name: &str, default: f64) -> Result<f64> {
        match self.node.attribute(name) {
            None => Ok(default),
            Some(NodeAttribute::Float(v)) => Ok(*v),
            Some(other) => Err(self.wrong_kind(name, "float", other)),
        }
    }

    /// String attribute, or `default` when absent.
    pub fn get_string(&self, name: &str, default: &str) -> Result<String> {
        match self.node.attribute(name) {
            None => Ok(default.to_string()),
            Some(NodeAttribute::String(v)) => Ok(v.clone()),
            Some(other) => Err(self.wrong_kind(name, "string", other)),
        }
    }

    /// Integer-list attribute, or `default` when absent.
    pub fn get_ints(&self, name: &str, default: &[i64]) -> Result<Vec<i64>> {
        match self.node.attribute(name) {
            None => Ok(default.to_vec()),
            Some(NodeAttribute::IntArray(v)) => Ok(v.clone()),
            Some(other) => Err(self.wrong_kind(name, "ints", other)),
        }
    }

    fn wrong_kind(&self, name: &str, expected: &str, found: &NodeAttribute) -> BuildError {
        BuildError::InvalidAttribute {
            node: self.node.name().to_string(),
            name: name.to_string(),
            reason: format!("expected {}, found {}", expected, found.kind()),
        }
    }
}
