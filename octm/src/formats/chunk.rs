//! Body chunk tags

/// Four-byte ASCII tag that opens each body chunk
///
/// Chunks are written in declaration order; `Norm`, `Texc` and `Attr` are
/// omitted when the mesh has no data for them.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ChunkTag {
    /// Triangle indices, u32 each
    Indx,
    /// Vertex positions, 3 × f32 each
    Vert,
    /// Vertex normals, 3 × f32 each
    Norm,
    /// One UV map: name, texture file name, 2 × f32 per vertex
    Texc,
    /// One attribute map: name, N × f32 per vertex
    Attr,
}

impl ChunkTag {
    pub const SIZE: usize = 4;

    pub const fn bytes(self) -> [u8; Self::SIZE] {
        match self {
            ChunkTag::Indx => *b"INDX",
            ChunkTag::Vert => *b"VERT",
            ChunkTag::Norm => *b"NORM",
            ChunkTag::Texc => *b"TEXC",
            ChunkTag::Attr => *b"ATTR",
        }
    }

    /// Tag read back as a little-endian u32
    pub const fn as_u32(self) -> u32 {
        u32::from_le_bytes(self.bytes())
    }

    pub fn from_bytes(bytes: &[u8]) -> Option<Self> {
        match bytes.get(..Self::SIZE)? {
            b"INDX" => Some(ChunkTag::Indx),
            b"VERT" => Some(ChunkTag::Vert),
            b"NORM" => Some(ChunkTag::Norm),
            b"TEXC" => Some(ChunkTag::Texc),
            b"ATTR" => Some(ChunkTag::Attr),
            _ => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_tag_values() {
        assert_eq!(ChunkTag::Indx.as_u32(), 0x5844_4E49);
        assert_eq!(ChunkTag::Vert.as_u32(), 0x5452_4556);
        assert_eq!(ChunkTag::Norm.as_u32(), 0x4D52_4F4E);
        assert_eq!(ChunkTag::Texc.as_u32(), 0x4358_4554);
        assert_eq!(ChunkTag::Attr.as_u32(), 0x5254_5441);
    }

    #[test]
    fn test_from_bytes() {
        assert_eq!(ChunkTag::from_bytes(b"TEXCxxxx"), Some(ChunkTag::Texc));
        assert_eq!(ChunkTag::from_bytes(b"OCTM"), None);
        assert_eq!(ChunkTag::from_bytes(b"AT"), None);
    }
}
