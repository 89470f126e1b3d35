//! In-memory mesh model consumed by the OCTM writer
//!
//! A [`Mesh`] owns all of its buffers. Fields are private and only exposed as
//! slices, so once a mesh is built nothing can change it underneath a writer.
//!
//! No validation happens at construction. [`Mesh::validate`] reports problems
//! on request, but the writer encodes whatever it is given.

use serde::{Deserialize, Serialize};

/// Named set of per-vertex texture coordinates
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct UvMap {
    name: String,
    texture_file_name: String,
    coords: Vec<[f32; 2]>,
}

impl UvMap {
    pub fn new(
        name: impl Into<String>,
        texture_file_name: impl Into<String>,
        coords: impl IntoIterator<Item = [f32; 2]>,
    ) -> Self {
        Self {
            name: name.into(),
            texture_file_name: texture_file_name.into(),
            coords: coords.into_iter().collect(),
        }
    }

    /// UV map with no associated texture image (empty file name)
    pub fn without_texture(
        name: impl Into<String>,
        coords: impl IntoIterator<Item = [f32; 2]>,
    ) -> Self {
        Self::new(name, String::new(), coords)
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn texture_file_name(&self) -> &str {
        &self.texture_file_name
    }

    pub fn coords(&self) -> &[[f32; 2]] {
        &self.coords
    }
}

/// Named set of per-vertex float vectors (colors, weights, ...)
///
/// Values are stored flattened, `components` floats per vertex.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct AttributeMap {
    name: String,
    components: usize,
    values: Vec<f32>,
}

impl AttributeMap {
    /// Build from fixed-width vectors; the component count is `N`.
    pub fn new<const N: usize>(
        name: impl Into<String>,
        values: impl IntoIterator<Item = [f32; N]>,
    ) -> Self {
        Self {
            name: name.into(),
            components: N,
            values: values.into_iter().flatten().collect(),
        }
    }

    /// Build from already flattened values.
    pub fn from_flat(
        name: impl Into<String>,
        components: usize,
        values: impl IntoIterator<Item = f32>,
    ) -> Self {
        Self {
            name: name.into(),
            components,
            values: values.into_iter().collect(),
        }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    /// Floats per vertex
    pub fn components(&self) -> usize {
        self.components
    }

    /// Flattened values in vertex order
    pub fn values(&self) -> &[f32] {
        &self.values
    }

    /// Number of whole per-vertex vectors held
    pub fn vertex_count(&self) -> usize {
        if self.components == 0 {
            0
        } else {
            self.values.len() / self.components
        }
    }
}

/// Triangle mesh with optional normals, UV maps, attribute maps and a comment
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct Mesh {
    vertices: Vec<[f32; 3]>,
    indexes: Vec<u32>,
    #[serde(default)]
    normals: Vec<[f32; 3]>,
    #[serde(default)]
    uv_maps: Vec<UvMap>,
    #[serde(default)]
    attribute_maps: Vec<AttributeMap>,
    #[serde(default)]
    comments: String,
}

impl Mesh {
    /// Create a mesh from vertex positions and triangle indices.
    ///
    /// Structured vector types convert with e.g. `glam::Vec3::to_array`.
    pub fn new(
        vertices: impl IntoIterator<Item = [f32; 3]>,
        indexes: impl IntoIterator<Item = u32>,
    ) -> Self {
        Self {
            vertices: vertices.into_iter().collect(),
            indexes: indexes.into_iter().collect(),
            ..Default::default()
        }
    }

    /// Create a mesh from flat `x, y, z, x, y, z, ...` coordinates.
    ///
    /// A trailing partial triple is dropped.
    pub fn from_flat(coords: &[f32], indexes: impl IntoIterator<Item = u32>) -> Self {
        let vertices = coords
            .chunks_exact(3)
            .map(|c| [c[0], c[1], c[2]])
            .collect::<Vec<_>>();
        Self::new(vertices, indexes)
    }

    pub fn with_normals(mut self, normals: impl IntoIterator<Item = [f32; 3]>) -> Self {
        self.normals = normals.into_iter().collect();
        self
    }

    pub fn with_uv_maps(mut self, uv_maps: impl IntoIterator<Item = UvMap>) -> Self {
        self.uv_maps = uv_maps.into_iter().collect();
        self
    }

    pub fn with_attribute_maps(
        mut self,
        attribute_maps: impl IntoIterator<Item = AttributeMap>,
    ) -> Self {
        self.attribute_maps = attribute_maps.into_iter().collect();
        self
    }

    pub fn with_comments(mut self, comments: impl Into<String>) -> Self {
        self.comments = comments.into();
        self
    }

    pub fn vertices(&self) -> &[[f32; 3]] {
        &self.vertices
    }

    pub fn indexes(&self) -> &[u32] {
        &self.indexes
    }

    /// Per-vertex normals; empty when the mesh has none
    pub fn normals(&self) -> &[[f32; 3]] {
        &self.normals
    }

    pub fn uv_maps(&self) -> &[UvMap] {
        &self.uv_maps
    }

    pub fn attribute_maps(&self) -> &[AttributeMap] {
        &self.attribute_maps
    }

    pub fn comments(&self) -> &str {
        &self.comments
    }

    pub fn vertex_count(&self) -> usize {
        self.vertices.len()
    }

    /// `indexes.len() / 3`, any trailing partial triangle ignored
    pub fn triangle_count(&self) -> usize {
        self.indexes.len() / 3
    }

    pub fn has_normals(&self) -> bool {
        !self.normals.is_empty()
    }

    /// Check the structural invariants of the mesh.
    ///
    /// Returns every issue found; an empty list means the mesh is consistent.
    /// The writer does not call this.
    pub fn validate(&self) -> Vec<MeshIssue> {
        let vertex_count = self.vertex_count();
        let mut issues = Vec::new();

        if self.indexes.len() % 3 != 0 {
            issues.push(MeshIssue::PartialTriangle {
                index_count: self.indexes.len(),
            });
        }

        if let Some((position, &index)) = self
            .indexes
            .iter()
            .enumerate()
            .find(|&(_, &i)| i as usize >= vertex_count)
        {
            issues.push(MeshIssue::IndexOutOfRange {
                position,
                index,
                vertex_count,
            });
        }

        if self.has_normals() && self.normals.len() != vertex_count {
            issues.push(MeshIssue::NormalCountMismatch {
                normals: self.normals.len(),
                vertex_count,
            });
        }

        for uv in &self.uv_maps {
            if uv.coords.len() != vertex_count {
                issues.push(MeshIssue::UvCountMismatch {
                    name: uv.name.clone(),
                    coords: uv.coords.len(),
                    vertex_count,
                });
            }
        }

        for attr in &self.attribute_maps {
            let whole = attr.components != 0 && attr.values.len() % attr.components == 0;
            if !whole || attr.vertex_count() != vertex_count {
                issues.push(MeshIssue::AttributeCountMismatch {
                    name: attr.name.clone(),
                    values: attr.values.len(),
                    components: attr.components,
                    vertex_count,
                });
            }
        }

        issues
    }

    /// Cheap length-only consistency check used for logging
    pub(crate) fn layers_consistent(&self) -> bool {
        let n = self.vertex_count();
        (self.normals.is_empty() || self.normals.len() == n)
            && self.uv_maps.iter().all(|m| m.coords.len() == n)
            && self
                .attribute_maps
                .iter()
                .all(|m| m.components != 0 && m.values.len() == n * m.components)
    }
}

/// Invariant violation reported by [`Mesh::validate`]
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum MeshIssue {
    #[error("index count {index_count} is not a multiple of 3")]
    PartialTriangle { index_count: usize },

    #[error("index {index} at position {position} is out of range for {vertex_count} vertices")]
    IndexOutOfRange {
        position: usize,
        index: u32,
        vertex_count: usize,
    },

    #[error("{normals} normals for {vertex_count} vertices")]
    NormalCountMismatch { normals: usize, vertex_count: usize },

    #[error("UV map '{name}' has {coords} coordinates for {vertex_count} vertices")]
    UvCountMismatch {
        name: String,
        coords: usize,
        vertex_count: usize,
    },

    #[error("attribute map '{name}' has {values} values ({components} per vertex) for {vertex_count} vertices")]
    AttributeCountMismatch {
        name: String,
        values: usize,
        components: usize,
        vertex_count: usize,
    },
}

#[cfg(test)]
mod tests {
    use super::*;

    fn quad() -> Mesh {
        Mesh::new(
            [[0.0, 0.0, 0.0], [1.0, 0.0, 0.0], [1.0, 1.0, 0.0], [0.0, 1.0, 0.0]],
            [0, 1, 2, 0, 2, 3],
        )
    }

    #[test]
    fn test_optional_layers_default_empty() {
        let mesh = quad();
        assert_eq!(mesh.vertex_count(), 4);
        assert_eq!(mesh.triangle_count(), 2);
        assert!(!mesh.has_normals());
        assert!(mesh.uv_maps().is_empty());
        assert!(mesh.attribute_maps().is_empty());
        assert_eq!(mesh.comments(), "");
    }

    #[test]
    fn test_from_flat_groups_triples() {
        let mesh = Mesh::from_flat(&[0.0, 0.1, 0.2, 1.1, 1.2, 1.3, 9.0], [0, 1, 0]);
        assert_eq!(mesh.vertices(), &[[0.0, 0.1, 0.2], [1.1, 1.2, 1.3]]);
    }

    #[test]
    fn test_builder_keeps_copies() {
        let mut normals = vec![[0.0, 0.0, 1.0]; 4];
        let mesh = quad().with_normals(normals.clone()).with_comments("quad");
        normals[0] = [1.0, 0.0, 0.0];

        assert_eq!(mesh.normals()[0], [0.0, 0.0, 1.0]);
        assert_eq!(mesh.comments(), "quad");
    }

    #[test]
    fn test_attribute_map_components() {
        let map = AttributeMap::new("color", [[1.0, 0.0, 0.0, 1.0], [0.0, 1.0, 0.0, 1.0]]);
        assert_eq!(map.components(), 4);
        assert_eq!(map.vertex_count(), 2);
        assert_eq!(map.values().len(), 8);

        let empty = AttributeMap::from_flat("none", 0, Vec::new());
        assert_eq!(empty.vertex_count(), 0);
    }

    #[test]
    fn test_validate_consistent_mesh() {
        let mesh = quad()
            .with_normals(vec![[0.0, 0.0, 1.0]; 4])
            .with_uv_maps([UvMap::without_texture("uv0", vec![[0.0, 0.0]; 4])])
            .with_attribute_maps([AttributeMap::new("weight", vec![[1.0]; 4])]);
        assert!(mesh.validate().is_empty());
        assert!(mesh.layers_consistent());
    }

    #[test]
    fn test_validate_reports_every_issue() {
        let mesh = Mesh::new([[0.0; 3]; 2], [0, 1, 5, 1])
            .with_normals([[0.0, 1.0, 0.0]])
            .with_uv_maps([UvMap::new("uv0", "a.png", [[0.0, 0.0]])])
            .with_attribute_maps([AttributeMap::from_flat("w", 2, [1.0, 2.0, 3.0])]);

        let issues = mesh.validate();
        assert_eq!(issues.len(), 5);
        assert_eq!(issues[0], MeshIssue::PartialTriangle { index_count: 4 });
        assert_eq!(
            issues[1],
            MeshIssue::IndexOutOfRange {
                position: 2,
                index: 5,
                vertex_count: 2
            }
        );
        assert!(matches!(issues[2], MeshIssue::NormalCountMismatch { normals: 1, .. }));
        assert!(matches!(issues[3], MeshIssue::UvCountMismatch { coords: 1, .. }));
        assert!(matches!(issues[4], MeshIssue::AttributeCountMismatch { values: 3, .. }));
        assert!(!mesh.layers_consistent());
    }
}
