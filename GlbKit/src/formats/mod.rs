//! File format handlers
//!
//! The GLB container envelope and the glTF 2.0 document it embeds.

pub mod glb;
pub mod gltf;

// Re-export main types for convenience
pub use glb::{ChunkHeader, GlbHeader, GlbReader};
pub use gltf::{GltfDocument, parse_document};
