//! Error types for `GlbKit`

use thiserror::Error;

/// The error type for `GlbKit` operations.
#[non_exhaustive]
#[derive(Error, Debug)]
pub enum Error {
    // ==================== IO Errors ====================
    /// IO error from file or stream operations.
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    // ==================== GLB Container Errors ====================
    /// The file is not a Binary glTF container (missing glTF magic).
    #[error("invalid GLB magic: expected glTF, found {0:?}")]
    InvalidGlbMagic([u8; 4]),

    /// The container version is not supported.
    #[error("unsupported GLB container version: {version} (supported: 2)")]
    UnsupportedGlbVersion {
        /// The version number found in the header.
        version: u32,
    },

    /// The first chunk in the container is not the JSON chunk.
    #[error("first chunk is not of type JSON, found {0:?}")]
    FirstChunkNotJson([u8; 4]),

    // ==================== glTF Document Errors ====================
    /// The JSON chunk payload is not valid UTF-8.
    #[error("UTF-8 conversion error: {0}")]
    Utf8Error(#[from] std::string::FromUtf8Error),

    /// JSON parsing error from the embedded document.
    #[error("JSON error: {0}")]
    JsonError(#[from] serde_json::Error),

    /// A top-level section required for statistics is absent.
    #[error("missing required section: {0}")]
    MissingSection(&'static str),

    /// A cross-reference index has no matching element.
    #[error("index out of range for {field}: {index} (have {len})")]
    IndexOutOfRange {
        /// The source field holding the reference.
        field: &'static str,
        /// The offending index.
        index: usize,
        /// Length of the referenced sequence.
        len: usize,
    },

    /// A mesh primitive has no POSITION attribute.
    #[error("mesh {mesh} primitive {primitive} has no POSITION attribute")]
    MissingPositionAttribute {
        /// Index of the mesh in the document.
        mesh: usize,
        /// Index of the primitive within the mesh.
        primitive: usize,
    },

    /// A primitive draw mode code is outside the defined range.
    #[error("invalid primitive mode: {mode} (defined: 0-6)")]
    InvalidPrimitiveMode {
        /// The mode code found on the primitive.
        mode: u32,
    },

    /// A material alpha mode is not one of the defined tags.
    #[error("invalid alpha mode: {0:?} (defined: OPAQUE, MASK, BLEND)")]
    InvalidAlphaMode(String),
}

/// A specialized Result type for `GlbKit` operations.
pub type Result<T> = std::result::Result<T, Error>;
