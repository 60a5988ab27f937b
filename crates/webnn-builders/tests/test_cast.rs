//! Tests for the Cast op builder

mod common;

use common::{cast_node, cast_to, expected_mapping};
use webnn_builders::{
    CastOpBuilder, GraphBackend, ModelBuilder, OpBuilder, OperandDataType, OperationKind,
    RecordingGraphBuilder,
};
use webnn_core::{BuildError, ContextOptions, DeviceType, NodeAttribute, TensorDataType};

fn cpu() -> ContextOptions {
    ContextOptions::new().with_device_type(DeviceType::Cpu)
}

fn gpu() -> ContextOptions {
    ContextOptions::new().with_device_type(DeviceType::Gpu)
}

// ============ Successful builds ============

#[test]
fn test_cast_to_uint8_end_to_end() {
    let mut graph = RecordingGraphBuilder::new();
    let mut mb = ModelBuilder::new(&mut graph, gpu());
    let x = mb.add_input("X", OperandDataType::Float32, vec![3]).unwrap();

    let node = cast_to("cast0", "X", "Y", TensorDataType::Uint8);
    CastOpBuilder.add_to_model_builder(&mut mb, &node).unwrap();

    let y = mb.get_operand("Y").unwrap();
    assert_eq!(mb.operand_names(), vec!["X", "Y"]);
    assert_eq!(mb.get_operand("X").unwrap(), x);

    let op = mb.builder().operation(y).unwrap();
    assert_eq!(op.kind, OperationKind::Cast);
    assert_eq!(op.inputs, vec![x]);
    assert_eq!(op.output.data_type.as_str(), "uint8");
    assert_eq!(op.output.shape, vec![3]);
    assert_eq!(op.options.label.as_deref(), Some("cast0"));
    assert_eq!(mb.builder().operation_count(), 2);
}

#[test]
fn test_cast_registers_exactly_one_operand() {
    let mut graph = RecordingGraphBuilder::new();
    let mut mb = ModelBuilder::new(&mut graph, cpu());
    mb.add_input("X", OperandDataType::Float32, vec![2, 2]).unwrap();
    mb.add_input("other", OperandDataType::Int32, vec![1]).unwrap();
    let before_other = mb.get_operand("other").unwrap();

    let node = cast_to("cast_f32", "X", "Y", TensorDataType::Float);
    CastOpBuilder.add_to_model_builder(&mut mb, &node).unwrap();

    assert_eq!(mb.operand_count(), 3);
    assert_eq!(mb.get_operand("other").unwrap(), before_other);
    let y = mb.get_operand("Y").unwrap();
    assert_eq!(
        mb.builder().operation(y).unwrap().output.data_type,
        OperandDataType::Float32
    );
}

#[test]
fn test_cast_defaults_to_float32() {
    let mut graph = RecordingGraphBuilder::new();
    let mut mb = ModelBuilder::new(&mut graph, cpu());
    mb.add_input("X", OperandDataType::Int32, vec![4]).unwrap();

    let node = cast_node("cast_default", "X", "Y", None);
    CastOpBuilder.add_to_model_builder(&mut mb, &node).unwrap();

    let y = mb.get_operand("Y").unwrap();
    assert_eq!(
        mb.builder().operation(y).unwrap().output.data_type,
        OperandDataType::Float32
    );
}

#[test]
fn test_cast_every_supported_type() {
    for (ty, without_int64, with_int64) in expected_mapping() {
        for (options, expected) in [(gpu(), without_int64), (cpu(), with_int64)] {
            let mut graph = RecordingGraphBuilder::new();
            let mut mb = ModelBuilder::new(&mut graph, options);
            mb.add_input("X", OperandDataType::Float32, vec![1]).unwrap();

            let node = cast_to("c", "X", "Y", ty);
            CastOpBuilder.add_to_model_builder(&mut mb, &node).unwrap();

            let y = mb.get_operand("Y").unwrap();
            let tag = mb.builder().operation(y).unwrap().output.data_type;
            assert_eq!(tag.as_str(), expected, "{ty}");
        }
    }
}

#[test]
fn test_cast_int64_downgrades_without_support() {
    let mut graph = RecordingGraphBuilder::new();
    let mut mb = ModelBuilder::new(&mut graph, gpu());
    mb.add_input("X", OperandDataType::Float32, vec![1]).unwrap();

    let node = cast_to("to_i64", "X", "Y", TensorDataType::Int64);
    CastOpBuilder.add_to_model_builder(&mut mb, &node).unwrap();

    let y = mb.get_operand("Y").unwrap();
    assert_eq!(
        mb.builder().operation(y).unwrap().output.data_type,
        OperandDataType::Int32
    );
}

// ============ Failures ============

#[test]
fn test_cast_unsupported_type_names_node_and_code() {
    let mut graph = RecordingGraphBuilder::new();
    let mut mb = ModelBuilder::new(&mut graph, cpu());
    mb.add_input("X", OperandDataType::Float32, vec![1]).unwrap();

    for code in [
        TensorDataType::Double.to_onnx(),
        TensorDataType::Bfloat16.to_onnx(),
        TensorDataType::String.to_onnx(),
        0,
        -5,
        4242,
    ] {
        let node = cast_node("cast_bad", "X", "Y", Some(code));
        let err = CastOpBuilder
            .add_to_model_builder(&mut mb, &node)
            .unwrap_err();

        match &err {
            BuildError::UnsupportedType {
                node, type_code, ..
            } => {
                assert_eq!(node, "cast_bad");
                assert_eq!(*type_code, code);
            }
            other => panic!("unexpected error: {other}"),
        }
        let msg = err.to_string();
        assert!(msg.contains("cast_bad"), "{msg}");
        assert!(msg.contains(&code.to_string()), "{msg}");
    }

    // Nothing was emitted or registered
    assert!(!mb.has_operand("Y"));
    assert_eq!(mb.operand_count(), 1);
    assert_eq!(mb.builder().operation_count(), 1);
}

#[test]
fn test_cast_missing_input_operand() {
    let mut graph = RecordingGraphBuilder::new();
    let mut mb = ModelBuilder::new(&mut graph, cpu());

    let node = cast_to("cast0", "X", "Y", TensorDataType::Float);
    let err = CastOpBuilder
        .add_to_model_builder(&mut mb, &node)
        .unwrap_err();

    assert!(matches!(err, BuildError::MissingOperand { ref name } if name == "X"));
    assert_eq!(mb.operand_count(), 0);
    assert_eq!(mb.builder().operation_count(), 0);
}

#[test]
fn test_cast_wrong_arity() {
    let mut graph = RecordingGraphBuilder::new();
    let mut mb = ModelBuilder::new(&mut graph, cpu());
    mb.add_input("A", OperandDataType::Float32, vec![1]).unwrap();
    mb.add_input("B", OperandDataType::Float32, vec![1]).unwrap();

    let two_inputs = cast_to("cast2", "A", "Y", TensorDataType::Int8).with_input("B");
    let err = CastOpBuilder
        .add_to_model_builder(&mut mb, &two_inputs)
        .unwrap_err();
    assert!(matches!(err, BuildError::InvalidNode { .. }));

    let two_outputs = cast_to("cast3", "A", "Y", TensorDataType::Int8).with_output("Z");
    assert!(CastOpBuilder
        .add_to_model_builder(&mut mb, &two_outputs)
        .is_err());

    assert_eq!(mb.builder().operation_count(), 2);
}

#[test]
fn test_cast_without_outputs_is_rejected() {
    let mut graph = RecordingGraphBuilder::new();
    let mut mb = ModelBuilder::new(&mut graph, cpu());
    mb.add_input("X", OperandDataType::Float32, vec![1]).unwrap();

    let mut node = cast_to("no_out", "X", "Y", TensorDataType::Int8);
    node.outputs.clear();
    let err = CastOpBuilder
        .add_to_model_builder(&mut mb, &node)
        .unwrap_err();
    assert!(matches!(err, BuildError::InvalidNode { ref node, .. } if node == "no_out"));
}

#[test]
fn test_cast_output_already_registered() {
    let mut graph = RecordingGraphBuilder::new();
    let mut mb = ModelBuilder::new(&mut graph, cpu());
    mb.add_input("X", OperandDataType::Float32, vec![1]).unwrap();

    let node = cast_to("self_cast", "X", "X", TensorDataType::Int32);
    let err = CastOpBuilder
        .add_to_model_builder(&mut mb, &node)
        .unwrap_err();
    assert!(matches!(err, BuildError::DuplicateOperand { .. }));
    assert_eq!(mb.builder().operation_count(), 1);
}

#[test]
fn test_cast_non_integer_to_attribute() {
    let mut graph = RecordingGraphBuilder::new();
    let mut mb = ModelBuilder::new(&mut graph, cpu());
    mb.add_input("X", OperandDataType::Float32, vec![1]).unwrap();

    let node = cast_node("cast_str", "X", "Y", None)
        .with_attribute("to", NodeAttribute::String("int8".to_string()));
    let err = CastOpBuilder
        .add_to_model_builder(&mut mb, &node)
        .unwrap_err();
    assert!(matches!(err, BuildError::InvalidAttribute { .. }));
}

// ============ Support checks ============

#[test]
fn test_is_op_supported() {
    let op = CastOpBuilder;

    assert!(op.is_op_supported(&cast_to("c", "X", "Y", TensorDataType::Float16), &gpu()));
    assert!(op.is_op_supported(&cast_node("c", "X", "Y", None), &gpu()));
    assert!(op.is_op_supported(&cast_to("c", "X", "Y", TensorDataType::Int64), &gpu()));
    assert!(!op.is_op_supported(&cast_to("c", "X", "Y", TensorDataType::Double), &cpu()));

    let two_inputs = cast_to("c", "X", "Y", TensorDataType::Float).with_input("Z");
    assert!(!op.is_op_supported(&two_inputs, &cpu()));

    let mut no_inputs = cast_to("c", "X", "Y", TensorDataType::Float);
    no_inputs.inputs.clear();
    assert!(!op.is_op_supported(&no_inputs, &cpu()));
}
