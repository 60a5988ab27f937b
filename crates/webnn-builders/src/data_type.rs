//! ONNX → WebNN data type mapping.

use serde::{Deserialize, Serialize};
use std::fmt;
use webnn_core::TensorDataType;

/// WebNN `MLOperandDataType`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum OperandDataType {
    /// float32
    Float32,
    /// float16
    Float16,
    /// int32
    Int32,
    /// uint32
    Uint32,
    /// int64
    Int64,
    /// uint64
    Uint64,
    /// int8
    Int8,
    /// uint8
    Uint8,
    /// int4
    Int4,
    /// uint4
    Uint4,
}

impl OperandDataType {
    /// The string the WebNN API uses for this type.
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Float32 => "float32",
            Self::Float16 => "float16",
            Self::Int32 => "int32",
            Self::Uint32 => "uint32",
            Self::Int64 => "int64",
            Self::Uint64 => "uint64",
            Self::Int8 => "int8",
            Self::Uint8 => "uint8",
            Self::Int4 => "int4",
            Self::Uint4 => "uint4",
        }
    }
}

impl fmt::Display for OperandDataType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Map an ONNX tensor type onto the WebNN operand type used to hold it.
///
/// Booleans are stored as `uint8`. When the context cannot create int64
/// operands, `INT64` falls back to `int32`; values outside the int32 range
/// are truncated by the backend. Returns `None` for types WebNN cannot
/// represent.
pub fn to_operand_data_type(
    data_type: TensorDataType,
    int64_supported: bool,
) -> Option<OperandDataType> {
    let mapped = match data_type {
        TensorDataType::Int4 => OperandDataType::Int4,
        TensorDataType::Uint4 => OperandDataType::Uint4,
        TensorDataType::Bool | TensorDataType::Uint8 => OperandDataType::Uint8,
        TensorDataType::Int8 => OperandDataType::Int8,
        TensorDataType::Float16 => OperandDataType::Float16,
        TensorDataType::Float => OperandDataType::Float32,
        TensorDataType::Int32 => OperandDataType::Int32,
        TensorDataType::Int64 if int64_supported => OperandDataType::Int64,
        TensorDataType::Int64 => OperandDataType::Int32,
        TensorDataType::Uint32 => OperandDataType::Uint32,
        TensorDataType::Uint64 => OperandDataType::Uint64,
        _ => return None,
    };
    Some(mapped)
}

/// [`to_operand_data_type`] over a raw ONNX code.
pub fn operand_data_type_from_onnx(code: i64, int64_supported: bool) -> Option<OperandDataType> {
    TensorDataType::from_onnx(code).and_then(|ty| to_operand_data_type(ty, int64_supported))
}
