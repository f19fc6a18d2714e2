//! Types for GLB container handling

/// Magic bytes identifying a Binary glTF container
pub const MAGIC: [u8; 4] = *b"glTF";

/// The only container version this library reads
pub const SUPPORTED_CONTAINER_VERSION: u32 = 2;

/// Chunk type tag of the JSON document chunk
pub const CHUNK_TYPE_JSON: [u8; 4] = *b"JSON";

/// Chunk type tag of the binary buffer chunk
pub const CHUNK_TYPE_BIN: [u8; 4] = *b"BIN\0";

/// Size of the fixed container header in bytes
pub const HEADER_SIZE: u64 = 12;

/// Header of a GLB container
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GlbHeader {
    /// Magic bytes (should be "glTF")
    ///
    /// Validated during parsing but retained for format completeness.
    pub magic: [u8; 4],
    /// Container version number
    pub version: u32,
    /// Total container length declared in the header, in bytes
    ///
    /// Informational; a disagreement with the on-disk size is reported as
    /// a warning, never enforced.
    pub declared_length: u32,
}

/// Header of a single chunk inside the container
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ChunkHeader {
    /// Payload length in bytes
    pub length: u32,
    /// Four-byte chunk type tag
    pub chunk_type: [u8; 4],
}

impl ChunkHeader {
    /// Whether this chunk carries the JSON document
    #[must_use]
    pub fn is_json(&self) -> bool {
        self.chunk_type == CHUNK_TYPE_JSON
    }

    /// Whether this chunk carries binary buffer data
    #[must_use]
    pub fn is_binary(&self) -> bool {
        self.chunk_type == CHUNK_TYPE_BIN
    }
}
