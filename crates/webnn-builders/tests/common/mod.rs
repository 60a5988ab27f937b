// Common test utilities for webnn-builders tests

#![allow(dead_code)]

use webnn_core::{GraphNode, NodeAttribute, TensorDataType};

/// Cast node reading `input` and writing `output`, with `to` set when given
pub fn cast_node(name: &str, input: &str, output: &str, to: Option<i64>) -> GraphNode {
    let node = GraphNode::new("Cast", name).with_input(input).with_output(output);
    match to {
        Some(code) => node.with_attribute("to", NodeAttribute::Int(code)),
        None => node,
    }
}

/// Cast node targeting a known ONNX type
pub fn cast_to(name: &str, input: &str, output: &str, to: TensorDataType) -> GraphNode {
    cast_node(name, input, output, Some(to.to_onnx()))
}

/// Every ONNX type with a WebNN mapping, paired with the expected tag for
/// (int64 unsupported, int64 supported)
pub fn expected_mapping() -> Vec<(TensorDataType, &'static str, &'static str)> {
    vec![
        (TensorDataType::Int4, "int4", "int4"),
        (TensorDataType::Uint4, "uint4", "uint4"),
        (TensorDataType::Bool, "uint8", "uint8"),
        (TensorDataType::Uint8, "uint8", "uint8"),
        (TensorDataType::Int8, "int8", "int8"),
        (TensorDataType::Float16, "float16", "float16"),
        (TensorDataType::Float, "float32", "float32"),
        (TensorDataType::Int32, "int32", "int32"),
        (TensorDataType::Int64, "int32", "int64"),
        (TensorDataType::Uint32, "uint32", "uint32"),
        (TensorDataType::Uint64, "uint64", "uint64"),
    ]
}
