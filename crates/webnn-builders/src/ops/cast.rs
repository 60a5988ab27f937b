use super::{OpBuilder, OpBuilderRegistrations};
use crate::backend::OperatorOptions;
use crate::data_type::{operand_data_type_from_onnx, OperandDataType};
use crate::model_builder::ModelBuilder;
use tracing::warn;
use webnn_core::{BuildError, ContextOptions, GraphNode, NodeAttrHelper, Result, TensorDataType};

// Cast: convert the input to the element type named by the `to` attribute
pub struct CastOpBuilder;

impl CastOpBuilder {
    /// Resolve `to` for this node, defaulting to FLOAT. Returns the raw
    /// code alongside the operand type.
    fn target_type(node: &GraphNode, int64_supported: bool) -> Result<(i64, OperandDataType)> {
        let to_type = NodeAttrHelper::new(node).get_int("to", TensorDataType::Float.to_onnx())?;

        let operand_type = operand_data_type_from_onnx(to_type, int64_supported).ok_or_else(|| {
            BuildError::UnsupportedType {
                op_type: node.op_type.clone(),
                node: node.name().to_string(),
                type_code: to_type,
            }
        })?;
        Ok((to_type, operand_type))
    }
}

impl OpBuilder for CastOpBuilder {
    fn add_to_model_builder_impl(
        &self,
        model_builder: &mut ModelBuilder<'_>,
        node: &GraphNode,
    ) -> Result<()> {
        if node.inputs.len() != 1 || node.outputs.len() != 1 {
            return Err(BuildError::InvalidNode {
                node: node.name().to_string(),
                reason: format!(
                    "Cast expects 1 input and 1 output, got {} and {}",
                    node.inputs.len(),
                    node.outputs.len()
                ),
            });
        }

        let input = model_builder.get_operand(&node.inputs[0])?;
        let (to_type, operand_type) =
            Self::target_type(node, model_builder.is_int64_supported())?;

        let output_name = &node.outputs[0];
        if model_builder.has_operand(output_name) {
            return Err(BuildError::DuplicateOperand {
                name: output_name.clone(),
            });
        }

        if to_type == TensorDataType::Int64.to_onnx() && operand_type != OperandDataType::Int64 {
            warn!(
                "Cast [{}] targets int64 but the context lacks int64 support; using int32",
                node.name()
            );
        }

        let options = OperatorOptions::labeled(node.name());
        let output = model_builder
            .builder_mut()
            .cast(input, operand_type, &options)?;

        model_builder.add_operand(output_name, output)
    }

    fn is_op_supported_impl(&self, node: &GraphNode, options: &ContextOptions) -> bool {
        if node.outputs.len() != 1 {
            return false;
        }
        match Self::target_type(node, options.is_int64_supported()) {
            Ok(_) => true,
            Err(err) => {
                warn!("{}", err);
                false
            }
        }
    }

    fn max_inputs(&self) -> usize {
        1
    }
}

/// Register a [`CastOpBuilder`] for `op_type`
pub fn create_cast_op_builder(
    op_type: &str,
    op_registrations: &mut OpBuilderRegistrations,
) -> Result<()> {
    op_registrations.register(op_type, Box::new(CastOpBuilder))
}
