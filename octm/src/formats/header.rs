//! OCTM header structure and operations

use super::{CompressionMethod, OCTM_MAGIC, OCTM_VERSION};
use crate::error::EncodeError;
use crate::mesh::Mesh;

/// Fixed-size part of the OCTM header (32 bytes)
///
/// The length-prefixed comment string follows immediately after it.
/// Counts are signed 32-bit in the file.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct OctmHeader {
    pub version: i32,
    /// Raw method code; see [`CompressionMethod::from_code`]
    pub method: u32,
    pub vertex_count: i32,
    pub triangle_count: i32,
    pub uv_map_count: i32,
    pub attribute_map_count: i32,
    /// Reserved flags (must be 0)
    pub flags: i32,
}

impl OctmHeader {
    pub const SIZE: usize = 32;

    pub fn new(
        method: CompressionMethod,
        vertex_count: i32,
        triangle_count: i32,
        uv_map_count: i32,
        attribute_map_count: i32,
    ) -> Self {
        Self {
            version: OCTM_VERSION,
            method: method.code(),
            vertex_count,
            triangle_count,
            uv_map_count,
            attribute_map_count,
            flags: 0,
        }
    }

    /// Header describing `mesh`
    ///
    /// Fails with [`EncodeError::CountOverflow`] if a count does not fit in
    /// an i32.
    pub fn for_mesh(mesh: &Mesh, method: CompressionMethod) -> Result<Self, EncodeError> {
        let count = |field: &'static str, n: usize| {
            i32::try_from(n).map_err(|_| EncodeError::CountOverflow { field, count: n })
        };

        Ok(Self::new(
            method,
            count("vertex_count", mesh.vertex_count())?,
            count("triangle_count", mesh.triangle_count())?,
            count("uv_map_count", mesh.uv_maps().len())?,
            count("attribute_map_count", mesh.attribute_maps().len())?,
        ))
    }

    /// Decoded compression method, `None` for an unknown code
    pub fn compression_method(&self) -> Option<CompressionMethod> {
        CompressionMethod::from_code(self.method)
    }

    /// Offset of the comment length field
    pub const fn comment_offset() -> usize {
        Self::SIZE
    }

    /// Write header to bytes
    pub fn to_bytes(&self) -> [u8; Self::SIZE] {
        let mut bytes = [0u8; Self::SIZE];
        bytes[0..4].copy_from_slice(&OCTM_MAGIC);
        bytes[4..8].copy_from_slice(&self.version.to_le_bytes());
        bytes[8..12].copy_from_slice(&self.method.to_le_bytes());
        bytes[12..16].copy_from_slice(&self.vertex_count.to_le_bytes());
        bytes[16..20].copy_from_slice(&self.triangle_count.to_le_bytes());
        bytes[20..24].copy_from_slice(&self.uv_map_count.to_le_bytes());
        bytes[24..28].copy_from_slice(&self.attribute_map_count.to_le_bytes());
        bytes[28..32].copy_from_slice(&self.flags.to_le_bytes());
        bytes
    }

    /// Read header from bytes
    ///
    /// Returns `None` if the slice is too short or does not start with the
    /// magic.
    pub fn from_bytes(bytes: &[u8]) -> Option<Self> {
        if bytes.len() < Self::SIZE || bytes[0..4] != OCTM_MAGIC {
            return None;
        }
        let i32_at = |offset: usize| {
            i32::from_le_bytes([
                bytes[offset],
                bytes[offset + 1],
                bytes[offset + 2],
                bytes[offset + 3],
            ])
        };
        Some(Self {
            version: i32_at(4),
            method: u32::from_le_bytes([bytes[8], bytes[9], bytes[10], bytes[11]]),
            vertex_count: i32_at(12),
            triangle_count: i32_at(16),
            uv_map_count: i32_at(20),
            attribute_map_count: i32_at(24),
            flags: i32_at(28),
        })
    }

    /// Validate header
    pub fn validate(&self) -> bool {
        self.version == OCTM_VERSION
            && self.flags == 0
            && self.compression_method().is_some()
            && self.vertex_count >= 0
            && self.triangle_count >= 0
            && self.uv_map_count >= 0
            && self.attribute_map_count >= 0
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_header_layout() {
        let header = OctmHeader::new(CompressionMethod::Raw, 4, 2, 1, 3);
        let bytes = header.to_bytes();

        assert_eq!(&bytes[0..4], b"OCTM");
        assert_eq!(&bytes[4..8], &5i32.to_le_bytes());
        assert_eq!(&bytes[8..12], b"RAW\0");
        assert_eq!(&bytes[12..16], &4i32.to_le_bytes());
        assert_eq!(&bytes[16..20], &2i32.to_le_bytes());
        assert_eq!(&bytes[20..24], &1i32.to_le_bytes());
        assert_eq!(&bytes[24..28], &3i32.to_le_bytes());
        assert_eq!(&bytes[28..32], &[0; 4]);
    }

    #[test]
    fn test_header_from_bytes() {
        let header = OctmHeader::new(CompressionMethod::Mg2, 10, 7, 0, 2);
        let parsed = OctmHeader::from_bytes(&header.to_bytes()).unwrap();
        assert_eq!(parsed, header);
        assert_eq!(parsed.compression_method(), Some(CompressionMethod::Mg2));
        assert!(parsed.validate());
    }

    #[test]
    fn test_header_rejects_bad_input() {
        let bytes = OctmHeader::new(CompressionMethod::Raw, 1, 0, 0, 0).to_bytes();
        assert!(OctmHeader::from_bytes(&bytes[..31]).is_none());

        let mut wrong_magic = bytes;
        wrong_magic[0] = b'X';
        assert!(OctmHeader::from_bytes(&wrong_magic).is_none());

        let mut flagged = OctmHeader::from_bytes(&bytes).unwrap();
        flagged.flags = 1;
        assert!(!flagged.validate());

        let mut unknown = OctmHeader::from_bytes(&bytes).unwrap();
        unknown.method = 0xDEAD_BEEF;
        assert!(!unknown.validate());
    }

    #[test]
    fn test_for_mesh_counts_vertices_not_components() {
        let mesh = Mesh::new([[0.0; 3]; 5], [0, 1, 2, 2, 3, 4, 4]);
        let header = OctmHeader::for_mesh(&mesh, CompressionMethod::Raw).unwrap();
        assert_eq!(header.vertex_count, 5);
        assert_eq!(header.triangle_count, 2);
        assert_eq!(header.uv_map_count, 0);
        assert_eq!(header.attribute_map_count, 0);
        assert_eq!(header.flags, 0);
    }
}
