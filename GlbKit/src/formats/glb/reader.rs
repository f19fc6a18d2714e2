//! GLB envelope reader
//!
//! Validates the fixed container header and first-chunk framing, then yields
//! the raw JSON document text. Chunks past the first are never consumed, so
//! the source can be dropped as soon as the JSON payload is out.

use std::io::{BufReader, Read};

use byteorder::{LittleEndian, ReadBytesExt};

use super::types::{ChunkHeader, GlbHeader, MAGIC, SUPPORTED_CONTAINER_VERSION};
use crate::error::{Error, Result};

/// GLB container reader
pub struct GlbReader<R: Read> {
    reader: BufReader<R>,
    header: Option<GlbHeader>,
}

impl<R: Read> GlbReader<R> {
    /// Create a new reader from a byte source
    pub fn new(reader: R) -> Self {
        Self {
            reader: BufReader::new(reader),
            header: None,
        }
    }

    /// Read and validate the fixed container header
    ///
    /// # Errors
    /// Returns an error if reading fails, the magic bytes are wrong, or the
    /// container version is unsupported.
    ///
    /// # Panics
    /// This function does not panic under normal conditions.
    pub fn read_header(&mut self) -> Result<&GlbHeader> {
        let mut magic = [0u8; 4];
        self.reader.read_exact(&mut magic)?;

        if magic != MAGIC {
            return Err(Error::InvalidGlbMagic(magic));
        }

        let version = self.reader.read_u32::<LittleEndian>()?;
        if version != SUPPORTED_CONTAINER_VERSION {
            return Err(Error::UnsupportedGlbVersion { version });
        }

        let declared_length = self.reader.read_u32::<LittleEndian>()?;

        self.header = Some(GlbHeader {
            magic,
            version,
            declared_length,
        });

        Ok(self.header.as_ref().unwrap())
    }

    /// Read the next chunk header
    ///
    /// # Errors
    /// Returns an error if the stream ends before the eight header bytes.
    pub fn read_chunk_header(&mut self) -> Result<ChunkHeader> {
        let length = self.reader.read_u32::<LittleEndian>()?;

        let mut chunk_type = [0u8; 4];
        self.reader.read_exact(&mut chunk_type)?;

        Ok(ChunkHeader { length, chunk_type })
    }

    /// Read the leading JSON chunk and decode its payload as UTF-8 text
    ///
    /// Reads the container header first if it has not been read yet.
    ///
    /// # Errors
    /// Returns an error if the container header is invalid, the first chunk
    /// is not tagged JSON, the payload is truncated, or it is not valid
    /// UTF-8.
    pub fn read_json_chunk(&mut self) -> Result<(ChunkHeader, String)> {
        if self.header.is_none() {
            self.read_header()?;
        }

        let chunk = self.read_chunk_header()?;
        if !chunk.is_json() {
            return Err(Error::FirstChunkNotJson(chunk.chunk_type));
        }

        let mut payload = vec![0u8; chunk.length as usize];
        self.reader.read_exact(&mut payload)?;
        let text = String::from_utf8(payload)?;

        Ok((chunk, text))
    }

    /// Get the container header, if it has been read
    pub fn header(&self) -> Option<&GlbHeader> {
        self.header.as_ref()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::formats::glb::types::CHUNK_TYPE_BIN;

    fn envelope(magic: &[u8; 4], version: u32, chunk_type: &[u8; 4], payload: &[u8]) -> Vec<u8> {
        let total = 12 + 8 + payload.len() as u32;
        let mut bytes = Vec::new();
        bytes.extend_from_slice(magic);
        bytes.extend_from_slice(&version.to_le_bytes());
        bytes.extend_from_slice(&total.to_le_bytes());
        bytes.extend_from_slice(&(payload.len() as u32).to_le_bytes());
        bytes.extend_from_slice(chunk_type);
        bytes.extend_from_slice(payload);
        bytes
    }

    #[test]
    fn test_read_valid_container() {
        let bytes = envelope(b"glTF", 2, b"JSON", b"{}");
        let mut reader = GlbReader::new(bytes.as_slice());

        let (chunk, text) = reader.read_json_chunk().unwrap();
        assert_eq!(chunk.length, 2);
        assert!(chunk.is_json());
        assert_eq!(text, "{}");

        let header = reader.header().unwrap();
        assert_eq!(header.version, 2);
        assert_eq!(header.declared_length, 22);
    }

    #[test]
    fn test_bad_magic() {
        let bytes = envelope(b"GLTF", 2, b"JSON", b"{}");
        let mut reader = GlbReader::new(bytes.as_slice());

        let err = reader.read_header().unwrap_err();
        assert!(matches!(err, Error::InvalidGlbMagic(m) if &m == b"GLTF"));
    }

    #[test]
    fn test_unsupported_version() {
        let bytes = envelope(b"glTF", 1, b"JSON", b"{}");
        let mut reader = GlbReader::new(bytes.as_slice());

        let err = reader.read_header().unwrap_err();
        assert!(matches!(err, Error::UnsupportedGlbVersion { version: 1 }));
    }

    #[test]
    fn test_first_chunk_not_json() {
        let bytes = envelope(b"glTF", 2, &CHUNK_TYPE_BIN, &[0u8; 4]);
        let mut reader = GlbReader::new(bytes.as_slice());

        let err = reader.read_json_chunk().unwrap_err();
        assert!(matches!(err, Error::FirstChunkNotJson(t) if t == CHUNK_TYPE_BIN));
    }

    #[test]
    fn test_invalid_utf8_payload() {
        let bytes = envelope(b"glTF", 2, b"JSON", &[0xFF, 0xFE, 0x7B, 0x7D]);
        let mut reader = GlbReader::new(bytes.as_slice());

        let err = reader.read_json_chunk().unwrap_err();
        assert!(matches!(err, Error::Utf8Error(_)));
    }

    #[test]
    fn test_truncated_payload() {
        let mut bytes = envelope(b"glTF", 2, b"JSON", b"{\"asset\":{}}");
        bytes.truncate(bytes.len() - 4);
        let mut reader = GlbReader::new(bytes.as_slice());

        let err = reader.read_json_chunk().unwrap_err();
        assert!(matches!(err, Error::Io(_)));
    }
}
