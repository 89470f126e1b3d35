//! OCTM mesh writer
//!
//! Writes the header, the comment and then the body chunks in a single pass.
//! Nothing is buffered: wrap file or socket sinks in a `BufWriter`.

mod stream;


use std::io::Write;

use crate::error::{EncodeError, Result};
use crate::formats::{ChunkTag, CompressionMethod, OctmHeader};
use crate::mesh::{AttributeMap, Mesh, UvMap};

use stream::{check_string, string_size, write_f32s, write_string, write_tag, write_u32s};

/// Encodes meshes with a fixed compression method
///
/// The writer holds no per-mesh state and can be reused for any number of
/// meshes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct MeshWriter {
    method: CompressionMethod,
}

impl MeshWriter {
    pub fn new(method: CompressionMethod) -> Self {
        Self { method }
    }

    pub fn method(&self) -> CompressionMethod {
        self.method
    }

    /// Write a complete OCTM file for `mesh` to `out`.
    ///
    /// Unsupported methods and oversized counts are rejected before the first
    /// byte is written. I/O errors are returned as they occur, leaving the
    /// sink partially written.
    pub fn write<W: Write + ?Sized>(&self, mesh: &Mesh, out: &mut W) -> Result<()> {
        match self.method {
            CompressionMethod::Raw => {}
            CompressionMethod::Mg1 | CompressionMethod::Mg2 => {
                return Err(EncodeError::UnsupportedCompressionMethod(self.method));
            }
        }

        let header = OctmHeader::for_mesh(mesh, self.method)?;
        check_strings(mesh)?;

        if !mesh.layers_consistent() {
            tracing::warn!(
                "Encoding mesh with layer lengths that do not match its {} vertices",
                mesh.vertex_count()
            );
        }
        tracing::debug!(
            "Encoding OCTM mesh: method={}, {} vertices, {} triangles, normals={}, {} UV maps, {} attribute maps",
            self.method,
            mesh.vertex_count(),
            mesh.triangle_count(),
            mesh.has_normals(),
            mesh.uv_maps().len(),
            mesh.attribute_maps().len()
        );

        out.write_all(&header.to_bytes())?;
        write_string(out, "comments", mesh.comments())?;

        write_raw_body(mesh, out)
    }
}

/// Encode `mesh` into `sink` with the given compression method
pub fn encode<W: Write + ?Sized>(
    mesh: &Mesh,
    method: CompressionMethod,
    sink: &mut W,
) -> Result<()> {
    MeshWriter::new(method).write(mesh, sink)
}

/// Encode `mesh` into a new byte vector
pub fn encode_to_vec(mesh: &Mesh, method: CompressionMethod) -> Result<Vec<u8>> {
    let mut out = Vec::with_capacity(encoded_size(mesh));
    encode(mesh, method, &mut out)?;
    Ok(out)
}

/// Exact size in bytes of the RAW encoding of `mesh`
pub fn encoded_size(mesh: &Mesh) -> usize {
    let mut size = OctmHeader::SIZE + string_size(mesh.comments());

    size += ChunkTag::SIZE + mesh.indexes().len() * 4;
    size += ChunkTag::SIZE + mesh.vertices().len() * 12;
    if mesh.has_normals() {
        size += ChunkTag::SIZE + mesh.normals().len() * 12;
    }
    for uv in mesh.uv_maps() {
        size += ChunkTag::SIZE
            + string_size(uv.name())
            + string_size(uv.texture_file_name())
            + uv.coords().len() * 8;
    }
    for attr in mesh.attribute_maps() {
        size += ChunkTag::SIZE + string_size(attr.name()) + attr.values().len() * 4;
    }

    size
}

/// Every string field must fit its i32 length prefix
fn check_strings(mesh: &Mesh) -> Result<()> {
    check_string("comments", mesh.comments())?;
    for uv in mesh.uv_maps() {
        check_string("uv_map_name", uv.name())?;
        check_string("texture_file_name", uv.texture_file_name())?;
    }
    for attr in mesh.attribute_maps() {
        check_string("attribute_map_name", attr.name())?;
    }
    Ok(())
}

fn write_raw_body<W: Write + ?Sized>(mesh: &Mesh, out: &mut W) -> Result<()> {
    tracing::trace!("INDX: {} indices", mesh.indexes().len());
    write_tag(out, ChunkTag::Indx)?;
    write_u32s(out, mesh.indexes())?;

    tracing::trace!("VERT: {} vertices", mesh.vertex_count());
    write_tag(out, ChunkTag::Vert)?;
    write_f32s(out, mesh.vertices().as_flattened())?;

    if mesh.has_normals() {
        tracing::trace!("NORM: {} normals", mesh.normals().len());
        write_tag(out, ChunkTag::Norm)?;
        write_f32s(out, mesh.normals().as_flattened())?;
    }

    for uv in mesh.uv_maps() {
        write_uv_map(out, uv)?;
    }

    for attr in mesh.attribute_maps() {
        write_attribute_map(out, attr)?;
    }

    Ok(())
}

fn write_uv_map<W: Write + ?Sized>(out: &mut W, uv: &UvMap) -> Result<()> {
    tracing::trace!("TEXC '{}': {} coordinates", uv.name(), uv.coords().len());
    write_tag(out, ChunkTag::Texc)?;
    write_string(out, "uv_map_name", uv.name())?;
    write_string(out, "texture_file_name", uv.texture_file_name())?;
    write_f32s(out, uv.coords().as_flattened())
}

fn write_attribute_map<W: Write + ?Sized>(out: &mut W, attr: &AttributeMap) -> Result<()> {
    tracing::trace!(
        "ATTR '{}': {} values, {} per vertex",
        attr.name(),
        attr.values().len(),
        attr.components()
    );
    write_tag(out, ChunkTag::Attr)?;
    write_string(out, "attribute_map_name", attr.name())?;
    write_f32s(out, attr.values())
}
