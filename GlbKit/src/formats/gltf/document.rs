//! glTF document structures
//!
//! The document is deserialized once into these views and validated in a
//! single up-front pass; aggregation afterwards only reads. Defaults the
//! schema implies (draw mode, alpha mode, double-sidedness) are applied
//! here, not at the use sites.

use indexmap::IndexMap;
use serde::Deserialize;
use serde_json::Value;

use super::types::{
    ATTR_POSITION, AlphaMode, DEFAULT_PRIMITIVE_MODE, PrimitiveMode, REQUIRED_SECTIONS,
    SUPPORTED_ASSET_VERSION,
};
use crate::error::{Error, Result};

/// A glTF 2.0 scene document.
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct GltfDocument {
    /// Asset metadata (version, generator).
    pub asset: Asset,
    /// Raw byte buffers.
    pub buffers: Vec<Buffer>,
    /// Byte-range windows into buffers.
    pub buffer_views: Vec<BufferView>,
    /// Typed element views into buffer views.
    pub accessors: Vec<Accessor>,
    /// Scene graph nodes. Counted, not interpreted.
    pub nodes: Vec<Value>,
    /// Cameras. Counted, not interpreted.
    pub cameras: Option<Vec<Value>>,
    /// Images referencing buffer views.
    pub images: Option<Vec<Image>>,
    /// Materials.
    pub materials: Option<Vec<Material>>,
    /// Meshes.
    pub meshes: Option<Vec<Mesh>>,
    /// Textures. Counted, not interpreted.
    pub textures: Option<Vec<Value>>,
}

/// Asset metadata block.
#[derive(Debug, Clone, Deserialize)]
pub struct Asset {
    /// The glTF version string, e.g. "2.0".
    pub version: String,
    /// The tool that produced the document.
    pub generator: Option<String>,
}

/// A raw byte buffer, referenced here only by its length.
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Buffer {
    /// Buffer size in bytes.
    pub byte_length: u64,
}

/// A byte-range window into a buffer.
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct BufferView {
    /// Window size in bytes.
    pub byte_length: u64,
}

/// A typed element view into a buffer view.
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Accessor {
    /// Index of the buffer view holding the element data.
    pub buffer_view: usize,
    /// Component encoding code (5120-5126, plus vendor extensions).
    pub component_type: u32,
    /// Element type tag (SCALAR, VEC2, VEC3, ...).
    #[serde(rename = "type")]
    pub element_type: String,
    /// Number of elements.
    pub count: u64,
}

/// A mesh: a named sequence of drawable primitives.
#[derive(Debug, Clone, Deserialize)]
pub struct Mesh {
    pub name: Option<String>,
    pub primitives: Vec<Primitive>,
}

/// One drawable geometry unit within a mesh.
#[derive(Debug, Clone, Deserialize)]
pub struct Primitive {
    /// Attribute name to accessor index, in document order.
    pub attributes: IndexMap<String, usize>,
    /// Accessor index of the index buffer.
    pub indices: usize,
    /// Draw mode code; TRIANGLES when omitted.
    pub mode: Option<u32>,
}

impl Primitive {
    /// Resolved draw mode with the TRIANGLES default applied
    ///
    /// # Errors
    /// Returns an error if the code is outside the defined 0-6 range.
    pub fn draw_mode(&self) -> Result<PrimitiveMode> {
        PrimitiveMode::from_code(self.mode.unwrap_or(DEFAULT_PRIMITIVE_MODE))
    }
}

/// A surface material.
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Material {
    pub name: Option<String>,
    /// Whether back faces are rendered; false when omitted.
    pub double_sided: Option<bool>,
    pub pbr_metallic_roughness: Option<PbrMetallicRoughness>,
    pub normal_texture: Option<Value>,
    pub emissive_texture: Option<Value>,
    pub occlusion_texture: Option<Value>,
    /// Alpha mode tag; OPAQUE when omitted.
    pub alpha_mode: Option<String>,
}

impl Material {
    /// Double-sidedness with the default applied
    #[must_use]
    pub fn is_double_sided(&self) -> bool {
        self.double_sided.unwrap_or(false)
    }

    /// Resolved alpha mode with the OPAQUE default applied
    ///
    /// # Errors
    /// Returns an error if the tag is outside the defined set.
    pub fn alpha(&self) -> Result<AlphaMode> {
        match &self.alpha_mode {
            Some(tag) => AlphaMode::from_tag(tag),
            None => Ok(AlphaMode::Opaque),
        }
    }
}

/// The metallic-roughness material parameter block.
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PbrMetallicRoughness {
    pub base_color_texture: Option<Value>,
    pub metallic_roughness_texture: Option<Value>,
}

/// An image embedded in the binary chunk via a buffer view.
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Image {
    /// Index of the buffer view holding the encoded image bytes.
    pub buffer_view: usize,
    /// Encoded image MIME type, e.g. "image/png".
    pub mime_type: String,
    pub name: Option<String>,
}

/// Resolve a zero-based cross-reference index into a sibling sequence.
///
/// Every cross-reference between document entities goes through this lookup
/// so the bounds-checking policy stays uniform.
///
/// # Errors
/// Returns an error naming the source field and the offending index.
pub fn resolve_index<'a, T>(items: &'a [T], field: &'static str, index: usize) -> Result<&'a T> {
    items.get(index).ok_or(Error::IndexOutOfRange {
        field,
        index,
        len: items.len(),
    })
}

/// Parse a glTF document from JSON text.
///
/// The required top-level sections are checked before the typed parse, and
/// construction-time constraints (draw modes, alpha modes, POSITION
/// attributes, cross-reference indices) are validated in one pass so later
/// reads cannot hit an unchecked field.
///
/// # Errors
/// Returns an error if the JSON is malformed, a required section is absent,
/// or validation fails.
pub fn parse_document(text: &str) -> Result<GltfDocument> {
    let value: Value = serde_json::from_str(text)?;

    for section in REQUIRED_SECTIONS {
        if value.get(section).is_none() {
            return Err(Error::MissingSection(section));
        }
    }

    let document: GltfDocument = serde_json::from_value(value)?;
    document.validate()?;
    Ok(document)
}

impl GltfDocument {
    /// Generator string with the empty default applied
    #[must_use]
    pub fn generator(&self) -> &str {
        self.asset.generator.as_deref().unwrap_or("")
    }

    /// Whether the asset declares the glTF version this library understands
    #[must_use]
    pub fn is_supported_version(&self) -> bool {
        self.asset.version == SUPPORTED_ASSET_VERSION
    }

    /// Validate construction-time constraints across the whole document
    fn validate(&self) -> Result<()> {
        for accessor in &self.accessors {
            resolve_index(&self.buffer_views, "bufferView", accessor.buffer_view)?;
        }

        for image in self.images.iter().flatten() {
            resolve_index(&self.buffer_views, "bufferView", image.buffer_view)?;
        }

        if let Some(meshes) = &self.meshes {
            for (mesh_idx, mesh) in meshes.iter().enumerate() {
                for (prim_idx, primitive) in mesh.primitives.iter().enumerate() {
                    primitive.draw_mode()?;

                    if !primitive.attributes.contains_key(ATTR_POSITION) {
                        return Err(Error::MissingPositionAttribute {
                            mesh: mesh_idx,
                            primitive: prim_idx,
                        });
                    }

                    for index in primitive.attributes.values() {
                        resolve_index(&self.accessors, "attributes", *index)?;
                    }
                    resolve_index(&self.accessors, "indices", primitive.indices)?;
                }
            }
        }

        for material in self.materials.iter().flatten() {
            material.alpha()?;
        }

        Ok(())
    }
}
