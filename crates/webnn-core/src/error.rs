//! Error types for WebNN graph building.

use thiserror::Error;

/// Result type for graph-building operations.
pub type Result<T> = std::result::Result<T, BuildError>;

/// Errors that can abort a model-building pass.
///
/// Every variant that originates from a node carries the node name so the
/// caller can tell which part of the model could not be translated.
#[derive(Error, Debug)]
pub enum BuildError {
    /// The requested tensor data type has no WebNN operand data type.
    #[error("The {op_type} node has unsupported 'to' type, name: {node} type: {type_code}")]
    UnsupportedType {
        /// Operator type of the failing node.
        op_type: String,
        /// Name of the failing node.
        node: String,
        /// Raw ONNX data type code.
        type_code: i64,
    },

    /// An input operand was never registered with the model builder.
    #[error("Operand not found: {name}")]
    MissingOperand {
        /// Output name that was looked up.
        name: String,
    },

    /// An operand name was registered twice within one pass.
    #[error("Operand already registered: {name}")]
    DuplicateOperand {
        /// Output name that was registered twice.
        name: String,
    },

    /// Two builders were registered for the same operator type.
    #[error("Op builder already registered for op type: {op_type}")]
    DuplicateRegistration {
        /// Operator type name.
        op_type: String,
    },

    /// No builder is registered for the node's operator type.
    #[error("Unsupported operator {op_type} (node: {node})")]
    UnsupportedOperator {
        /// Operator type name.
        op_type: String,
        /// Name of the node that required it.
        node: String,
    },

    /// The node does not have the shape the builder requires.
    #[error("Invalid node {node}: {reason}")]
    InvalidNode {
        /// Name of the node.
        node: String,
        /// What is wrong with it.
        reason: String,
    },

    /// An attribute has the wrong kind of value.
    #[error("Invalid attribute '{name}' on node {node}: {reason}")]
    InvalidAttribute {
        /// Name of the node.
        node: String,
        /// Attribute name.
        name: String,
        /// What is wrong with it.
        reason: String,
    },

    /// The graph backend refused an operation.
    #[error("Backend error: {0}")]
    Backend(String),

    /// A node failed with an error raised outside its builder, such as an
    /// operand lookup or the backend.
    #[error("Failed to add node {node} ({op_type}): {source}")]
    Node {
        /// Name of the failing node.
        node: String,
        /// Operator type of the failing node.
        op_type: String,
        /// Underlying error.
        #[source]
        source: Box<BuildError>,
    },

    /// Context options could not be parsed.
    #[error("Configuration error: {0}")]
    Config(#[from] serde_json::Error),

    /// IO error while reading configuration.
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

impl BuildError {
    /// Name of the node the error is attributed to, if any.
    pub fn node_name(&self) -> Option<&str> {
        match self {
            Self::UnsupportedType { node, .. }
            | Self::UnsupportedOperator { node, .. }
            | Self::InvalidNode { node, .. }
            | Self::InvalidAttribute { node, .. }
            | Self::Node { node, .. } => Some(node),
            _ => None,
        }
    }

    /// Attribute this error to a node unless it already names one.
    pub fn in_node(self, node: &str, op_type: &str) -> Self {
        if self.node_name().is_some() {
            return self;
        }
        Self::Node {
            node: node.to_string(),
            op_type: op_type.to_string(),
            source: Box::new(self),
        }
    }

    /// The innermost error, looking through node attribution.
    pub fn root_cause(&self) -> &BuildError {
        match self {
            Self::Node { source, .. } => source.root_cause(),
            other => other,
        }
    }
}
