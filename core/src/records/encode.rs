//! records/encode.rs
//!
//! Record encoding.
//!
//! Notes:
//! - Fields are written one at a time in little-endian order; the layout is
//!   never derived from native struct alignment.
//! - `put_*` append to any `BufMut`; `encode_*` are fixed-size wrappers over
//!   them, so both forms always agree byte for byte.

use bytes::BufMut;

use crate::constants::padding::{PADDING1, PADDING2, PADDING3};
use crate::constants::{HEADER_LEN, VERTEX_LEN};
use crate::records::types::FileType;

/// Append an 80-byte fdShape header.
///
/// Layout:
///
/// ```text
/// [ padding1  (16) ]  0..16   zero
/// [ type       (4) ] 16..20   0x0201
/// [ padding2  (36) ] 20..56   constant markers
/// [ size       (4) ] 56..60
/// [ padding3   (4) ] 60..64   zero
/// [ prefix_x   (8) ] 64..72
/// [ prefix_y   (8) ] 72..80
/// ```
///
/// # Panics
/// If `buf` cannot grow and has fewer than `HEADER_LEN` bytes left.
#[inline]
pub fn put_header<B: BufMut + ?Sized>(buf: &mut B, size: u32, prefix_x: f64, prefix_y: f64) {
    buf.put_slice(&PADDING1);
    buf.put_u32_le(FileType::FdShape as u32);
    buf.put_slice(&PADDING2);
    buf.put_u32_le(size);
    buf.put_slice(&PADDING3);
    buf.put_f64_le(prefix_x);
    buf.put_f64_le(prefix_y);
}

/// Append a packed 20-byte vertex: `[ type (4) ][ x (8) ][ y (8) ]`.
///
/// `vertex_type` is written verbatim, named or not.
///
/// # Panics
/// If `buf` cannot grow and has fewer than `VERTEX_LEN` bytes left.
#[inline]
pub fn put_vertex<B: BufMut + ?Sized>(buf: &mut B, vertex_type: u32, x: f64, y: f64) {
    buf.put_u32_le(vertex_type);
    buf.put_f64_le(x);
    buf.put_f64_le(y);
}

/// Encode an fdShape header into a fixed buffer.
#[inline]
pub fn encode_header(size: u32, prefix_x: f64, prefix_y: f64) -> [u8; HEADER_LEN] {
    let mut out = [0u8; HEADER_LEN];
    let mut cursor = &mut out[..];
    put_header(&mut cursor, size, prefix_x, prefix_y);

    debug_assert_eq!(cursor.len(), 0, "header encoding wrote incorrect length");
    out
}

/// Encode an fdShape vertex into a fixed buffer.
#[inline]
pub fn encode_vertex(vertex_type: u32, x: f64, y: f64) -> [u8; VERTEX_LEN] {
    let mut out = [0u8; VERTEX_LEN];
    let mut cursor = &mut out[..];
    put_vertex(&mut cursor, vertex_type, x, y);

    debug_assert_eq!(cursor.len(), 0, "vertex encoding wrote incorrect length");
    out
}
