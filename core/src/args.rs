//! args.rs
//! Dynamic argument marshaling for the record encoders.
//!
//! Both encoders share the signature `(u32, f64, f64)`. Callers that hold
//! loosely typed values (the Python bindings, for instance) convert them to
//! `ArgValue` and go through `encode_header_args` / `encode_vertex_args`,
//! which either return the full buffer or an `InvalidArguments` error.
//! Nothing is encoded unless all three arguments convert.

use thiserror::Error;
use tracing::debug;

use crate::constants::{HEADER_LEN, VERTEX_LEN};
use crate::records::{encode_header, encode_vertex, EncodeError};

/// Arguments taken by every record encoder.
pub const RECORD_ARITY: usize = 3;

/// A loosely typed argument value.
#[derive(Debug, Clone, PartialEq)]
pub enum ArgValue {
    Int(i128),
    /// Integer wider than `i128`, as decimal text.
    BigInt(String),
    Float(f64),
    /// Non-numeric value, carrying its type name.
    Other(String),
}

impl ArgValue {
    pub fn type_name(&self) -> &str {
        match self {
            ArgValue::Int(_) | ArgValue::BigInt(_) => "int",
            ArgValue::Float(_) => "float",
            ArgValue::Other(name) => name,
        }
    }
}

impl From<u32> for ArgValue {
    fn from(v: u32) -> Self {
        ArgValue::Int(v as i128)
    }
}

impl From<i64> for ArgValue {
    fn from(v: i64) -> Self {
        ArgValue::Int(v as i128)
    }
}

impl From<f64> for ArgValue {
    fn from(v: f64) -> Self {
        ArgValue::Float(v)
    }
}

/// Why an argument list was rejected. Positions are 1-based.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum ArgError {
    #[error("function takes exactly {expected} arguments ({got} given)")]
    WrongArity { expected: usize, got: usize },

    #[error("argument {position} must be int, not {found}")]
    NotAnInteger { position: usize, found: String },

    #[error("argument {position} must be a real number, not {found}")]
    NotANumber { position: usize, found: String },

    #[error("argument {position} out of range: {value}")]
    OutOfRange { position: usize, value: String },
}

impl ArgError {
    /// True when the value had the right kind but did not fit.
    pub fn is_overflow(&self) -> bool {
        matches!(self, ArgError::OutOfRange { .. })
    }
}

/// Parsed `(u32, f64, f64)` argument triple.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct RecordArgs {
    /// `size` for headers, `vertex_type` for vertices.
    pub tag: u32,
    pub x: f64,
    pub y: f64,
}

impl RecordArgs {
    pub fn parse(args: &[ArgValue]) -> Result<Self, ArgError> {
        Self::parse_inner(args).map_err(|e| {
            debug!(error = %e, argc = args.len(), "rejected record arguments");
            e
        })
    }

    fn parse_inner(args: &[ArgValue]) -> Result<Self, ArgError> {
        let [tag, x, y] = args else {
            return Err(ArgError::WrongArity { expected: RECORD_ARITY, got: args.len() });
        };

        Ok(Self {
            tag: to_u32(1, tag)?,
            x: to_f64(2, x)?,
            y: to_f64(3, y)?,
        })
    }
}

fn to_u32(position: usize, v: &ArgValue) -> Result<u32, ArgError> {
    match v {
        ArgValue::Int(i) => u32::try_from(*i)
            .map_err(|_| ArgError::OutOfRange { position, value: i.to_string() }),
        ArgValue::BigInt(text) => Err(ArgError::OutOfRange { position, value: text.clone() }),
        other => Err(ArgError::NotAnInteger { position, found: other.type_name().to_string() }),
    }
}

fn to_f64(position: usize, v: &ArgValue) -> Result<f64, ArgError> {
    match v {
        ArgValue::Float(f) => Ok(*f),
        // Integers widen like Python's float(int).
        ArgValue::Int(i) => Ok(*i as f64),
        ArgValue::BigInt(text) => match text.parse::<f64>() {
            Ok(f) if f.is_finite() => Ok(f),
            _ => Err(ArgError::OutOfRange { position, value: text.clone() }),
        },
        ArgValue::Other(name) => Err(ArgError::NotANumber { position, found: name.clone() }),
    }
}

/// Encode a header from `(size, prefix_x, prefix_y)`.
pub fn encode_header_args(args: &[ArgValue]) -> Result<[u8; HEADER_LEN], EncodeError> {
    let a = RecordArgs::parse(args)?;
    Ok(encode_header(a.tag, a.x, a.y))
}

/// Encode a vertex from `(vertex_type, x, y)`.
pub fn encode_vertex_args(args: &[ArgValue]) -> Result<[u8; VERTEX_LEN], EncodeError> {
    let a = RecordArgs::parse(args)?;
    Ok(encode_vertex(a.tag, a.x, a.y))
}
