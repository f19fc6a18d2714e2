//! # GlbKit
//!
//! A pure-Rust library for inspecting Binary glTF (GLB) files.
//!
//! ## What it does
//!
//! - **GLB envelope** - Validate the container header and chunk framing
//! - **glTF document** - Typed read-only views over the embedded JSON scene
//! - **Inspection** - Structural statistics: element counts, buffer sizes,
//!   per-mesh vertex/index tallies, material texture usage, accessor metadata
//!
//! GlbKit never renders, validates geometry, or modifies files. It is
//! read-only introspection over static assets.
//!
//! ## Quick Start
//!
//! ```no_run
//! use glbkit::inspect::inspect_glb;
//!
//! let report = inspect_glb("model.glb")?;
//! println!("{} nodes, {} buffer bytes", report.counts.nodes, report.total_buffer_bytes);
//! for mesh in report.meshes.iter().flatten() {
//!     println!("{} vertices", mesh.vertices);
//! }
//! # Ok::<(), glbkit::Error>(())
//! ```
//!
//! ### Using the Prelude
//!
//! ```
//! use glbkit::prelude::*;
//! ```

pub mod error;
pub mod formats;
pub mod inspect;

// Re-exports for convenience
pub use error::{Error, Result};

/// Prelude module for common imports
pub mod prelude {
    pub use crate::error::{Error, Result};
    pub use crate::formats::glb::{ChunkHeader, GlbHeader, GlbReader};
    pub use crate::formats::gltf::{
        AlphaMode, ComponentType, GltfDocument, PrimitiveMode, parse_document,
    };
    pub use crate::inspect::{GlbReport, MeshSummary, inspect_glb};
}

pub const VERSION: &str = env!("CARGO_PKG_VERSION");
