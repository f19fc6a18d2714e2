//! GLB (Binary glTF) container envelope handling
//!
//! A GLB file wraps a glTF 2.0 JSON document and its binary buffers in a
//! length-prefixed, chunked envelope. All multi-byte fields are
//! little-endian:
//!
//! ```text
//! offset  0:  4 bytes   magic          "glTF"
//! offset  4:  u32       version        2
//! offset  8:  u32       total length   (informational)
//! offset 12:  u32       chunk0 length
//! offset 16:  4 bytes   chunk0 type    "JSON"
//! offset 20:  N bytes   chunk0 payload UTF-8 JSON text
//! ```
//!
//! Only the leading JSON chunk is consumed here; the binary buffer chunk
//! ("BIN\0") that usually follows is never read.

pub mod reader;
pub mod types;

// Public API exports
pub use reader::GlbReader;
pub use types::{
    CHUNK_TYPE_BIN, CHUNK_TYPE_JSON, ChunkHeader, GlbHeader, HEADER_SIZE, MAGIC,
    SUPPORTED_CONTAINER_VERSION,
};
