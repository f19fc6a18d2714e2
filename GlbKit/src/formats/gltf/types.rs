//! Enumerated tags and schema constants for the glTF document model

use std::fmt;

use crate::error::{Error, Result};

/// The glTF version string this library understands
pub const SUPPORTED_ASSET_VERSION: &str = "2.0";

/// Draw mode applied when a primitive omits `mode` (4 = TRIANGLES)
pub const DEFAULT_PRIMITIVE_MODE: u32 = 4;

/// Top-level sections that must be present for statistics to be computable
pub const REQUIRED_SECTIONS: [&str; 4] = ["buffers", "bufferViews", "accessors", "nodes"];

/// Vertex attribute names read by the mesh summaries
pub const ATTR_POSITION: &str = "POSITION";
pub const ATTR_NORMAL: &str = "NORMAL";
pub const ATTR_COLOR_0: &str = "COLOR_0";
pub const ATTR_TEXCOORD_0: &str = "TEXCOORD_0";
pub const ATTR_TEXCOORD_1: &str = "TEXCOORD_1";

/// Primitive draw topology
///
/// A closed set; the format defines exactly the codes 0-6.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PrimitiveMode {
    Points,
    Lines,
    LineLoop,
    LineStrip,
    Triangles,
    TriangleStrip,
    TriangleFan,
}

impl PrimitiveMode {
    /// Parse a draw mode code
    ///
    /// # Errors
    /// Returns an error for codes outside the defined 0-6 range.
    pub fn from_code(code: u32) -> Result<Self> {
        match code {
            0 => Ok(PrimitiveMode::Points),
            1 => Ok(PrimitiveMode::Lines),
            2 => Ok(PrimitiveMode::LineLoop),
            3 => Ok(PrimitiveMode::LineStrip),
            4 => Ok(PrimitiveMode::Triangles),
            5 => Ok(PrimitiveMode::TriangleStrip),
            6 => Ok(PrimitiveMode::TriangleFan),
            _ => Err(Error::InvalidPrimitiveMode { mode: code }),
        }
    }

    #[must_use]
    pub fn as_str(&self) -> &'static str {
        match self {
            PrimitiveMode::Points => "POINTS",
            PrimitiveMode::Lines => "LINES",
            PrimitiveMode::LineLoop => "LINE_LOOP",
            PrimitiveMode::LineStrip => "LINE_STRIP",
            PrimitiveMode::Triangles => "TRIANGLES",
            PrimitiveMode::TriangleStrip => "TRIANGLE_STRIP",
            PrimitiveMode::TriangleFan => "TRIANGLE_FAN",
        }
    }

    /// Short label used in mesh listing rows
    #[must_use]
    pub fn short_label(&self) -> &'static str {
        match self {
            PrimitiveMode::Points => "P",
            PrimitiveMode::Lines => "L",
            PrimitiveMode::LineLoop => "LL",
            PrimitiveMode::LineStrip => "LS",
            PrimitiveMode::Triangles => "T",
            PrimitiveMode::TriangleStrip => "TS",
            PrimitiveMode::TriangleFan => "TF",
        }
    }
}

/// Material alpha blending mode
///
/// A closed set; the format defines exactly these three tags.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AlphaMode {
    Opaque,
    Mask,
    Blend,
}

impl AlphaMode {
    /// Parse an alpha mode tag
    ///
    /// # Errors
    /// Returns an error for tags outside the defined set.
    pub fn from_tag(tag: &str) -> Result<Self> {
        match tag {
            "OPAQUE" => Ok(AlphaMode::Opaque),
            "MASK" => Ok(AlphaMode::Mask),
            "BLEND" => Ok(AlphaMode::Blend),
            _ => Err(Error::InvalidAlphaMode(tag.to_string())),
        }
    }

    #[must_use]
    pub fn as_str(&self) -> &'static str {
        match self {
            AlphaMode::Opaque => "OPAQUE",
            AlphaMode::Mask => "MASK",
            AlphaMode::Blend => "BLEND",
        }
    }

    /// Label used in material listing rows
    #[must_use]
    pub fn label(&self) -> &'static str {
        match self {
            AlphaMode::Opaque => "opaque",
            AlphaMode::Mask => "alpha-mask",
            AlphaMode::Blend => "alpha-blend",
        }
    }
}

/// Accessor component encoding
///
/// An open set: the known codes come from the format's fixed table, but
/// vendor extensions may introduce new ones, so unknown codes stay
/// representable instead of failing.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ComponentType {
    Byte,
    UnsignedByte,
    Short,
    UnsignedShort,
    UnsignedInt,
    Float,
    /// A code outside the known table, carried verbatim.
    Unknown(u32),
}

impl ComponentType {
    /// Map a numeric component type code to its tag
    #[must_use]
    pub fn from_code(code: u32) -> Self {
        match code {
            5120 => ComponentType::Byte,
            5121 => ComponentType::UnsignedByte,
            5122 => ComponentType::Short,
            5123 => ComponentType::UnsignedShort,
            5125 => ComponentType::UnsignedInt,
            5126 => ComponentType::Float,
            other => ComponentType::Unknown(other),
        }
    }
}

impl fmt::Display for ComponentType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ComponentType::Byte => f.write_str("BYTE"),
            ComponentType::UnsignedByte => f.write_str("UNSIGNED_BYTE"),
            ComponentType::Short => f.write_str("SHORT"),
            ComponentType::UnsignedShort => f.write_str("UNSIGNED_SHORT"),
            ComponentType::UnsignedInt => f.write_str("UNSIGNED_INT"),
            ComponentType::Float => f.write_str("FLOAT"),
            ComponentType::Unknown(code) => write!(f, "unknown({code})"),
        }
    }
}
