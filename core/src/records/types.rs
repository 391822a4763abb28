//! records/types.rs
//! Record values and typed registries for the fdShape wire format.
//!
//! Notes:
//! - Records are plain `Copy` values; encoding never mutates them.
//! - The vertex type is carried as a raw `u32` so unknown tags survive
//!   encoding verbatim. `VertexType` is only a typed view over it.

use std::fmt;

use bytes::BufMut;
use num_enum::TryFromPrimitive;
use thiserror::Error;

use crate::args::ArgError;
use crate::constants::{vertex_ids, FDSHAPE, HEADER_LEN, VERTEX_LEN};
use crate::records::encode::{encode_header, encode_vertex, put_header, put_vertex};
use crate::utils::enum_name_or_hex;

/// File type registry (header offset 16).
#[repr(u32)]
#[derive(Copy, Clone, Debug, PartialEq, Eq, TryFromPrimitive)]
pub enum FileType {
    FdShape = FDSHAPE,
}

/// Vertex type registry.
#[repr(u32)]
#[derive(Copy, Clone, Debug, PartialEq, Eq, TryFromPrimitive)]
pub enum VertexType {
    /// First vertex of a path.
    Start = vertex_ids::STARTVERTEX,
    /// Line segment to this vertex.
    Line  = vertex_ids::LINEVERTEX,
    /// Polygon vertex.
    Poly  = vertex_ids::POLYVERTEX,
}

impl VertexType {
    #[inline(always)]
    pub const fn as_u32(self) -> u32 {
        self as u32
    }
}

impl From<VertexType> for u32 {
    fn from(v: VertexType) -> Self {
        v as u32
    }
}

/// Leading record of an fdShape file.
///
/// Only the caller-controlled fields are stored; the type tag and the
/// padding runs are constants of the format.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct FileHeader {
    /// Declared size, written verbatim (typically the vertex count).
    pub size: u32,
    pub prefix_x: f64,
    pub prefix_y: f64,
}

impl FileHeader {
    pub const LEN: usize = HEADER_LEN;

    pub fn new(size: u32, prefix_x: f64, prefix_y: f64) -> Self {
        Self { size, prefix_x, prefix_y }
    }

    pub fn encode(&self) -> [u8; HEADER_LEN] {
        encode_header(self.size, self.prefix_x, self.prefix_y)
    }

    pub fn put<B: BufMut + ?Sized>(&self, buf: &mut B) {
        put_header(buf, self.size, self.prefix_x, self.prefix_y)
    }
}

/// One point of a shape.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Vertex {
    pub vertex_type: u32,
    pub x: f64,
    pub y: f64,
}

impl Vertex {
    pub const LEN: usize = VERTEX_LEN;

    pub fn new(vertex_type: impl Into<u32>, x: f64, y: f64) -> Self {
        Self { vertex_type: vertex_type.into(), x, y }
    }

    /// Typed view of the tag; `None` for tags outside the registry.
    pub fn vertex_type_enum(&self) -> Option<VertexType> {
        VertexType::try_from(self.vertex_type).ok()
    }

    pub fn encode(&self) -> [u8; VERTEX_LEN] {
        encode_vertex(self.vertex_type, self.x, self.y)
    }

    pub fn put<B: BufMut + ?Sized>(&self, buf: &mut B) {
        put_vertex(buf, self.vertex_type, self.x, self.y)
    }
}

impl fmt::Display for Vertex {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}({}, {})", enum_name_or_hex::<VertexType>(self.vertex_type), self.x, self.y)
    }
}

/// Encoder error. The only failure mode is malformed dynamic arguments.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum EncodeError {
    #[error("invalid arguments: {0}")]
    InvalidArguments(#[from] ArgError),
}

impl EncodeError {
    /// The argument-level cause.
    pub fn arg_error(&self) -> &ArgError {
        match self {
            EncodeError::InvalidArguments(e) => e,
        }
    }
}
