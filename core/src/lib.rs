//! fdshape-core
//!
//! Pure Rust encoder for fdShape file records.
//! No Python, no PyO3, no FFI.

#![forbid(unsafe_code)]

// Shared and top level
pub mod constants;
pub mod utils;

pub mod records;
pub mod args;

pub use args::{encode_header_args, encode_vertex_args, ArgError, ArgValue, RecordArgs};
pub use records::{
    encode_header, encode_vertex, put_header, put_vertex,
    EncodeError, FileHeader, FileType, Vertex, VertexType,
};

// -----------------------------------------------------------------------------
// Prelude (Rust users)
// -----------------------------------------------------------------------------
pub mod prelude {
    pub use crate::constants::{vertex_ids, FDSHAPE, HEADER_LEN, VERTEX_LEN};
    pub use crate::records::{encode_header, encode_vertex, FileHeader, Vertex, VertexType};
}
