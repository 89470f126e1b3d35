//! OCTM mesh encoder
//!
//! Encodes in-memory triangle meshes into the versioned `OCTM` binary
//! container used for interchange between 3D tools.
//!
//! # Modules
//!
//! - [`mesh`] - Immutable mesh model (positions, indices, normals, UV and attribute maps)
//! - [`formats`] - Header, chunk tags and compression method codes
//! - [`writer`] - Single-pass RAW encoder
//!
//! # Usage
//!
//! ```
//! use octm::{CompressionMethod, Mesh, UvMap, encode_to_vec};
//!
//! let mesh = Mesh::new([[0.0, 0.0, 0.0], [1.0, 0.0, 0.0], [0.0, 1.0, 0.0]], [0, 1, 2])
//!     .with_uv_maps([UvMap::new("uv0", "grid.png", [[0.0, 0.0], [1.0, 0.0], [0.0, 1.0]])])
//!     .with_comments("one triangle");
//!
//! let bytes = encode_to_vec(&mesh, CompressionMethod::Raw).unwrap();
//! assert_eq!(&bytes[0..4], b"OCTM");
//!
//! // MG1 and MG2 are reserved but have no encoder
//! assert!(encode_to_vec(&mesh, CompressionMethod::Mg1).is_err());
//! ```
//!
//! The crate logs through `tracing` and never installs a subscriber.

pub mod error;
pub mod formats;
pub mod mesh;
pub mod writer;

pub use error::{EncodeError, Result};
pub use formats::{
    BinarySerializable, ChunkTag, CompressionMethod, OCTM_EXT, OCTM_MAGIC, OCTM_MAGIC_U32,
    OCTM_VERSION, OctmHeader, ParseCompressionMethodError,
};
pub use mesh::{AttributeMap, Mesh, MeshIssue, UvMap};
pub use writer::{MeshWriter, encode, encode_to_vec, encoded_size};
