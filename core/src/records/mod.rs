//! records/mod.rs
//! fdShape record types and their wire encoding.
//!
//! Notes:
//! - Little-endian across all multi-byte fields, independent of host order.
//! - Header is a fixed 80 bytes, vertex a packed 20 bytes.
//! - Encoding is pure and infallible; argument errors only arise on the
//!   dynamic path in `crate::args`.

pub mod types;
pub mod encode;

pub use types::*;
pub use encode::*;
