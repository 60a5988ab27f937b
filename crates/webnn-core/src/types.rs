//! Core type definitions: ONNX tensor data types and node attributes.

use serde::{Deserialize, Serialize};
use std::fmt;

/// ONNX `TensorProto.DataType` enumerants.
///
/// The discriminants are the wire codes used by ONNX attributes such as
/// `Cast.to`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[repr(i32)]
pub enum TensorDataType {
    /// UNDEFINED
    Undefined = 0,
    /// FLOAT (32-bit)
    Float = 1,
    /// UINT8
    Uint8 = 2,
    /// INT8
    Int8 = 3,
    /// UINT16
    Uint16 = 4,
    /// INT16
    Int16 = 5,
    /// INT32
    Int32 = 6,
    /// INT64
    Int64 = 7,
    /// STRING
    String = 8,
    /// BOOL
    Bool = 9,
    /// FLOAT16
    Float16 = 10,
    /// DOUBLE
    Double = 11,
    /// UINT32
    Uint32 = 12,
    /// UINT64
    Uint64 = 13,
    /// COMPLEX64
    Complex64 = 14,
    /// COMPLEX128
    Complex128 = 15,
    /// BFLOAT16
    Bfloat16 = 16,
    /// FLOAT8E4M3FN
    Float8E4M3Fn = 17,
    /// FLOAT8E4M3FNUZ
    Float8E4M3Fnuz = 18,
    /// FLOAT8E5M2
    Float8E5M2 = 19,
    /// FLOAT8E5M2FNUZ
    Float8E5M2Fnuz = 20,
    /// UINT4
    Uint4 = 21,
    /// INT4
    Int4 = 22,
    /// FLOAT4E2M1
    Float4E2M1 = 23,
}

impl TensorDataType {
    /// All known enumerants, in code order.
    pub const ALL: [TensorDataType; 24] = [
        Self::Undefined,
        Self::Float,
        Self::Uint8,
        Self::Int8,
        Self::Uint16,
        Self::Int16,
        Self::Int32,
        Self::Int64,
        Self::String,
        Self::Bool,
        Self::Float16,
        Self::Double,
        Self::Uint32,
        Self::Uint64,
        Self::Complex64,
        Self::Complex128,
        Self::Bfloat16,
        Self::Float8E4M3Fn,
        Self::Float8E4M3Fnuz,
        Self::Float8E5M2,
        Self::Float8E5M2Fnuz,
        Self::Uint4,
        Self::Int4,
        Self::Float4E2M1,
    ];

    /// Look up an enumerant from its raw ONNX code.
    pub fn from_onnx(code: i64) -> Option<Self> {
        usize::try_from(code)
            .ok()
            .and_then(|idx| Self::ALL.get(idx).copied())
    }

    /// Raw ONNX code.
    pub fn to_onnx(self) -> i64 {
        self as i64
    }
}

impl fmt::Display for TensorDataType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:?}({})", self, self.to_onnx())
    }
}

/// A typed attribute value attached to a graph node.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum NodeAttribute {
    /// 64-bit integer.
    Int(i64),
    /// 64-bit float.
    Float(f64),
    /// UTF-8 string.
    String(String),
    /// Integer list.
    IntArray(Vec<i64>),
    /// Float list.
    FloatArray(Vec<f64>),
    /// Serialized tensor payload.
    Tensor(Vec<u8>),
}

impl NodeAttribute {
    /// Short kind name, used in diagnostics.
    pub fn kind(&self) -> &'static str {
        match self {
            Self::Int(_) => "int",
            Self::Float(_) => "float",
            Self::String(_) => "string",
            Self::IntArray(_) => "ints",
            Self::FloatArray(_) => "floats",
            Self::Tensor(_) => "tensor",
        }
    }
}
