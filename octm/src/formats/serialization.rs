//! Binary serialization trait for format headers.
//!
//! The trait returns `Vec<u8>` because associated consts cannot size an
//! array in a trait return type yet. Use the type-specific `to_bytes()` for
//! the fixed-size array.

/// Trait for binary-serializable format headers.
///
/// # Example
///
/// ```
/// use octm::formats::{BinarySerializable, CompressionMethod, OctmHeader};
///
/// let header = OctmHeader::new(CompressionMethod::Raw, 3, 1, 0, 0);
///
/// let bytes = header.serialize();
/// let parsed = OctmHeader::deserialize(&bytes).unwrap();
/// assert_eq!(parsed, header);
/// ```
pub trait BinarySerializable: Sized {
    /// Size of the serialized header in bytes.
    const SIZE: usize;

    /// Serialize to bytes.
    fn serialize(&self) -> Vec<u8>;

    /// Deserialize from bytes.
    ///
    /// Returns `None` if the byte slice is too short or contains invalid data.
    fn deserialize(bytes: &[u8]) -> Option<Self>;
}

impl BinarySerializable for super::OctmHeader {
    const SIZE: usize = Self::SIZE;

    fn serialize(&self) -> Vec<u8> {
        self.to_bytes().to_vec()
    }

    fn deserialize(bytes: &[u8]) -> Option<Self> {
        Self::from_bytes(bytes)
    }
}
