//! constants.rs
//! Wire constants for the fdShape record format.
//!
//! Everything here is part of the on-disk contract: consumers of generated
//! files depend on these exact values. All multi-byte values are written
//! little-endian.

/// File type tag written at offset 16 of every header.
pub const FDSHAPE: u32 = 0x0201;

/// Encoded header length in bytes.
pub const HEADER_LEN: usize = 80;
/// Encoded vertex length in bytes (packed, no padding).
pub const VERTEX_LEN: usize = 20;

/// Vertex type identifiers (mirrored in `VertexType`).
pub mod vertex_ids {
    pub const STARTVERTEX: u32 = 0x4479_F99A;
    pub const LINEVERTEX: u32  = 0x3F80_0000;
    pub const POLYVERTEX: u32  = 0x0000_0000;
}

/// Header field offsets.
pub mod offsets {
    pub const PADDING1: usize = 0;
    pub const FILE_TYPE: usize = 16;
    pub const PADDING2: usize = 20;
    pub const SIZE: usize = 56;
    pub const PADDING3: usize = 60;
    pub const PREFIX_X: usize = 64;
    pub const PREFIX_Y: usize = 72;
}

/// Constant padding runs of the header.
///
/// Opaque format markers: copy verbatim, never interpret.
pub mod padding {
    pub const PADDING1: [u8; 16] = [0u8; 16];

    pub const PADDING2: [u8; 36] = [
        0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00,
        0x01, 0x00, 0x00, 0x00, // marker at +12
        0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00,
        0x01, 0x00, 0x00, 0x00, // marker at +28
        0x00, 0x00, 0x00, 0x00,
    ];

    pub const PADDING3: [u8; 4] = [0u8; 4];
}
