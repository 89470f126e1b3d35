//! OCTM binary container format
//!
//! Every file starts with the ASCII magic `OCTM` followed by a fixed header,
//! a length-prefixed comment and a body of tagged chunks.
//!
//! # Layout
//! ```text
//! 0x00: magic "OCTM"
//! 0x04: version i32 (5)
//! 0x08: compression method u32 (RAW / MG1 / MG2)
//! 0x0C: vertex_count i32
//! 0x10: triangle_count i32
//! 0x14: uv_map_count i32
//! 0x18: attribute_map_count i32
//! 0x1C: flags i32 (reserved, 0)
//! 0x20: comment_length i32
//! 0x24: comment bytes (UTF-8, no terminator)
//! var:  body chunks (INDX, VERT, [NORM], [TEXC...], [ATTR...])
//! ```
//!
//! All integers and floats are little-endian. Strings are UTF-8 prefixed by
//! their byte length as an i32.
//!
//! The header implements the [`BinarySerializable`] trait.

mod chunk;
mod compression;
mod header;
mod serialization;

pub use chunk::ChunkTag;
pub use compression::{CompressionMethod, ParseCompressionMethodError};
pub use header::OctmHeader;
pub use serialization::BinarySerializable;

/// File magic bytes
pub const OCTM_MAGIC: [u8; 4] = *b"OCTM";

/// File magic read back as a little-endian u32
pub const OCTM_MAGIC_U32: u32 = u32::from_le_bytes(OCTM_MAGIC);

/// Format version written by this crate
pub const OCTM_VERSION: i32 = 5;

/// File extension for OCTM mesh files
pub const OCTM_EXT: &str = "ctm";
