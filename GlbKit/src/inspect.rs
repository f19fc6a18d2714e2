//! GLB file inspection
//!
//! Walks a decoded glTF document and computes the structural statistics the
//! CLI reports: element counts, byte totals, and per-image, per-mesh,
//! per-material, per-buffer, and per-accessor summaries.
//!
//! Each pass is a pure function of the decoded document; presence of a
//! top-level category gates whether its pass runs at all, and iteration
//! follows the document's declared array order.

use std::fs::File;
use std::path::Path;

use indexmap::IndexMap;

use crate::error::{Error, Result};
use crate::formats::glb::{GlbHeader, GlbReader};
use crate::formats::gltf::{
    ATTR_COLOR_0, ATTR_NORMAL, ATTR_POSITION, ATTR_TEXCOORD_0, ATTR_TEXCOORD_1, AlphaMode,
    ComponentType, GltfDocument, Primitive, PrimitiveMode, parse_document, resolve_index,
};

/// Structural statistics for one GLB file.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GlbReport {
    /// OS-observed file size in bytes.
    pub file_size: u64,
    /// Total length declared in the container header, in bytes.
    pub declared_length: u32,
    /// Container version from the header.
    pub container_version: u32,
    /// JSON chunk payload length in bytes.
    pub json_chunk_length: u32,
    /// `asset.version` string from the document.
    pub asset_version: String,
    /// `asset.generator` string, empty when omitted.
    pub asset_generator: String,
    /// Top-level element counts.
    pub counts: ElementCounts,
    /// Sum of all buffer byte lengths.
    pub total_buffer_bytes: u64,
    /// Sum of the referenced view's byte length across all accessors.
    ///
    /// Views referenced by several accessors are counted once per
    /// reference, not de-duplicated.
    pub total_accessor_bytes: u64,
    /// Sum of the referenced view's byte length across all images.
    pub total_image_bytes: Option<u64>,
    /// Per-image rows; `None` when the document has no images section.
    pub images: Option<Vec<ImageSummary>>,
    /// Per-mesh rows; `None` when the document has no meshes section.
    pub meshes: Option<Vec<MeshSummary>>,
    /// Per-mesh element tallies; `None` when the document has no meshes
    /// section.
    pub mesh_elements: Option<Vec<MeshElementTally>>,
    /// Per-material rows; `None` when the document has no materials section.
    pub materials: Option<Vec<MaterialSummary>>,
    /// Per-buffer rows.
    pub buffers: Vec<BufferSummary>,
    /// Per-accessor rows.
    pub accessors: Vec<AccessorSummary>,
}

impl GlbReport {
    /// Whether the declared container length disagrees with the file size
    #[must_use]
    pub fn has_size_mismatch(&self) -> bool {
        u64::from(self.declared_length) != self.file_size
    }

    /// Whether the asset declares a glTF version other than "2.0"
    #[must_use]
    pub fn has_version_mismatch(&self) -> bool {
        self.asset_version != crate::formats::gltf::SUPPORTED_ASSET_VERSION
    }
}

/// Counts of top-level document categories.
///
/// Optional categories are `None` when their section is absent, so the
/// report can skip those sections entirely.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ElementCounts {
    pub nodes: usize,
    pub cameras: Option<usize>,
    pub images: Option<usize>,
    pub materials: Option<usize>,
    pub meshes: Option<usize>,
    pub textures: Option<usize>,
}

/// Per-image summary row.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ImageSummary {
    /// Byte length of the referenced buffer view.
    pub byte_length: u64,
    pub mime_type: String,
    pub name: Option<String>,
}

/// Per-mesh summary aggregated across primitives.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MeshSummary {
    pub name: Option<String>,
    pub primitive_count: usize,
    /// Distinct draw modes, in first-seen order.
    pub modes: Vec<PrimitiveMode>,
    /// Total POSITION element count.
    pub vertices: u64,
    /// Total index element count.
    pub indices: u64,
    pub normals: u64,
    pub color0: u64,
    pub texcoord0: u64,
    pub texcoord1: u64,
}

/// Per-mesh tally of index accessor counts grouped by element type.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MeshElementTally {
    pub name: Option<String>,
    pub primitive_count: usize,
    /// Total accessor count per element type tag, in first-seen order.
    pub counts: IndexMap<String, u64>,
}

/// Per-material summary row.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MaterialSummary {
    pub name: Option<String>,
    pub double_sided: bool,
    pub alpha_mode: AlphaMode,
    /// Texture slots present on the material, in listing order.
    pub texture_slots: Vec<TextureSlot>,
}

/// Texture slots a material can reference.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TextureSlot {
    BaseColor,
    MetallicRoughness,
    Normal,
    Emissive,
    Occlusion,
}

impl TextureSlot {
    /// Short label used in material listing rows
    #[must_use]
    pub fn short_label(&self) -> &'static str {
        match self {
            TextureSlot::BaseColor => "BC",
            TextureSlot::MetallicRoughness => "MR",
            TextureSlot::Normal => "N",
            TextureSlot::Emissive => "E",
            TextureSlot::Occlusion => "O",
        }
    }
}

/// Per-buffer summary row.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct BufferSummary {
    pub byte_length: u64,
}

/// Per-accessor summary row.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AccessorSummary {
    pub count: u64,
    /// Element type tag, verbatim from the document.
    pub element_type: String,
    pub component_type: ComponentType,
    /// Byte length of the referenced buffer view.
    pub byte_length: u64,
}

/// Inspect a GLB file and compute its structural statistics.
///
/// # Errors
/// Returns an error if the container envelope or the embedded document is
/// invalid.
pub fn inspect_glb<P: AsRef<Path>>(path: P) -> Result<GlbReport> {
    let path = path.as_ref();
    let file_size = std::fs::metadata(path)?.len();

    // The input stream is only needed up to the end of the JSON chunk;
    // scope the reader so it is released before aggregation starts.
    let (header, chunk, text) = {
        let mut reader = GlbReader::new(File::open(path)?);
        let header = reader.read_header()?.clone();
        let (chunk, text) = reader.read_json_chunk()?;
        (header, chunk, text)
    };

    if u64::from(header.declared_length) != file_size {
        tracing::warn!(
            "declared container length {} does not match file size {}",
            header.declared_length,
            file_size
        );
    }

    let document = parse_document(&text)?;
    if !document.is_supported_version() {
        tracing::warn!("asset version {} is not 2.0", document.asset.version);
    }

    build_report(&header, chunk.length, file_size, &document)
}

/// Aggregate a decoded document into a report record.
///
/// # Errors
/// Returns an error if a cross-reference cannot be resolved or a primitive
/// lacks its POSITION attribute.
pub fn build_report(
    header: &GlbHeader,
    json_chunk_length: u32,
    file_size: u64,
    document: &GltfDocument,
) -> Result<GlbReport> {
    let images = summarize_images(document)?;
    let total_image_bytes = images
        .as_ref()
        .map(|rows| rows.iter().map(|row| row.byte_length).sum());

    Ok(GlbReport {
        file_size,
        declared_length: header.declared_length,
        container_version: header.version,
        json_chunk_length,
        asset_version: document.asset.version.clone(),
        asset_generator: document.generator().to_string(),
        counts: element_counts(document),
        total_buffer_bytes: total_buffer_bytes(document),
        total_accessor_bytes: total_accessor_bytes(document)?,
        total_image_bytes,
        images,
        meshes: summarize_meshes(document)?,
        mesh_elements: mesh_element_tallies(document)?,
        materials: summarize_materials(document)?,
        buffers: document
            .buffers
            .iter()
            .map(|buffer| BufferSummary {
                byte_length: buffer.byte_length,
            })
            .collect(),
        accessors: summarize_accessors(document)?,
    })
}

fn element_counts(document: &GltfDocument) -> ElementCounts {
    ElementCounts {
        nodes: document.nodes.len(),
        cameras: document.cameras.as_ref().map(Vec::len),
        images: document.images.as_ref().map(Vec::len),
        materials: document.materials.as_ref().map(Vec::len),
        meshes: document.meshes.as_ref().map(Vec::len),
        textures: document.textures.as_ref().map(Vec::len),
    }
}

fn total_buffer_bytes(document: &GltfDocument) -> u64 {
    document.buffers.iter().map(|buffer| buffer.byte_length).sum()
}

fn total_accessor_bytes(document: &GltfDocument) -> Result<u64> {
    let mut total = 0u64;
    for accessor in &document.accessors {
        let view = resolve_index(&document.buffer_views, "bufferView", accessor.buffer_view)?;
        total += view.byte_length;
    }
    Ok(total)
}

fn summarize_images(document: &GltfDocument) -> Result<Option<Vec<ImageSummary>>> {
    let Some(images) = &document.images else {
        return Ok(None);
    };

    let mut rows = Vec::with_capacity(images.len());
    for image in images {
        let view = resolve_index(&document.buffer_views, "bufferView", image.buffer_view)?;
        rows.push(ImageSummary {
            byte_length: view.byte_length,
            mime_type: image.mime_type.clone(),
            name: image.name.clone(),
        });
    }
    Ok(Some(rows))
}

fn summarize_meshes(document: &GltfDocument) -> Result<Option<Vec<MeshSummary>>> {
    let Some(meshes) = &document.meshes else {
        return Ok(None);
    };

    let mut rows = Vec::with_capacity(meshes.len());
    for (mesh_idx, mesh) in meshes.iter().enumerate() {
        let mut summary = MeshSummary {
            name: mesh.name.clone(),
            primitive_count: mesh.primitives.len(),
            modes: Vec::new(),
            vertices: 0,
            indices: 0,
            normals: 0,
            color0: 0,
            texcoord0: 0,
            texcoord1: 0,
        };

        for (prim_idx, primitive) in mesh.primitives.iter().enumerate() {
            let position = primitive
                .attributes
                .get(ATTR_POSITION)
                .ok_or(Error::MissingPositionAttribute {
                    mesh: mesh_idx,
                    primitive: prim_idx,
                })?;
            summary.vertices +=
                resolve_index(&document.accessors, ATTR_POSITION, *position)?.count;

            summary.normals += attribute_count(document, primitive, ATTR_NORMAL)?;
            summary.color0 += attribute_count(document, primitive, ATTR_COLOR_0)?;
            summary.texcoord0 += attribute_count(document, primitive, ATTR_TEXCOORD_0)?;
            summary.texcoord1 += attribute_count(document, primitive, ATTR_TEXCOORD_1)?;

            summary.indices +=
                resolve_index(&document.accessors, "indices", primitive.indices)?.count;

            let mode = primitive.draw_mode()?;
            if !summary.modes.contains(&mode) {
                summary.modes.push(mode);
            }
        }

        rows.push(summary);
    }
    Ok(Some(rows))
}

/// Element count of one named attribute, zero when the primitive lacks it
fn attribute_count(
    document: &GltfDocument,
    primitive: &Primitive,
    attribute: &'static str,
) -> Result<u64> {
    match primitive.attributes.get(attribute) {
        Some(index) => Ok(resolve_index(&document.accessors, attribute, *index)?.count),
        None => Ok(0),
    }
}

/// Per-mesh tallies of index accessor counts grouped by element type.
///
/// # Errors
/// Returns an error if an index accessor reference cannot be resolved.
pub fn mesh_element_tallies(document: &GltfDocument) -> Result<Option<Vec<MeshElementTally>>> {
    let Some(meshes) = &document.meshes else {
        return Ok(None);
    };

    let mut rows = Vec::with_capacity(meshes.len());
    for mesh in meshes {
        let mut counts: IndexMap<String, u64> = IndexMap::new();
        for primitive in &mesh.primitives {
            let accessor = resolve_index(&document.accessors, "indices", primitive.indices)?;
            *counts.entry(accessor.element_type.clone()).or_insert(0) += accessor.count;
        }
        rows.push(MeshElementTally {
            name: mesh.name.clone(),
            primitive_count: mesh.primitives.len(),
            counts,
        });
    }
    Ok(Some(rows))
}

fn summarize_materials(document: &GltfDocument) -> Result<Option<Vec<MaterialSummary>>> {
    let Some(materials) = &document.materials else {
        return Ok(None);
    };

    let mut rows = Vec::with_capacity(materials.len());
    for material in materials {
        let mut slots = Vec::new();
        if let Some(pbr) = &material.pbr_metallic_roughness {
            if pbr.base_color_texture.is_some() {
                slots.push(TextureSlot::BaseColor);
            }
            if pbr.metallic_roughness_texture.is_some() {
                slots.push(TextureSlot::MetallicRoughness);
            }
        }
        if material.normal_texture.is_some() {
            slots.push(TextureSlot::Normal);
        }
        if material.emissive_texture.is_some() {
            slots.push(TextureSlot::Emissive);
        }
        if material.occlusion_texture.is_some() {
            slots.push(TextureSlot::Occlusion);
        }

        rows.push(MaterialSummary {
            name: material.name.clone(),
            double_sided: material.is_double_sided(),
            alpha_mode: material.alpha()?,
            texture_slots: slots,
        });
    }
    Ok(Some(rows))
}

fn summarize_accessors(document: &GltfDocument) -> Result<Vec<AccessorSummary>> {
    let mut rows = Vec::with_capacity(document.accessors.len());
    for accessor in &document.accessors {
        let view = resolve_index(&document.buffer_views, "bufferView", accessor.buffer_view)?;
        rows.push(AccessorSummary {
            count: accessor.count,
            element_type: accessor.element_type.clone(),
            component_type: ComponentType::from_code(accessor.component_type),
            byte_length: view.byte_length,
        });
    }
    Ok(rows)
}
