//! glTF 2.0 document model
//!
//! Typed read-only views over the JSON document embedded in a GLB container.
//! Only the fields the inspection passes read are modeled; unknown fields
//! are ignored. All cross-references between entities are plain integer
//! indices into sibling top-level arrays, resolved through
//! [`resolve_index`].

pub mod document;
pub mod types;

// Public API exports
pub use document::{
    Accessor, Asset, Buffer, BufferView, GltfDocument, Image, Material, Mesh,
    PbrMetallicRoughness, Primitive, parse_document, resolve_index,
};
pub use types::{
    ATTR_COLOR_0, ATTR_NORMAL, ATTR_POSITION, ATTR_TEXCOORD_0, ATTR_TEXCOORD_1, AlphaMode,
    ComponentType, DEFAULT_PRIMITIVE_MODE, PrimitiveMode, REQUIRED_SECTIONS,
    SUPPORTED_ASSET_VERSION,
};
