//! Compression method selector

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Compression method recorded in the header
///
/// Only [`CompressionMethod::Raw`] has an encoder. The MG1 and MG2 codes are
/// reserved by the format; writing with them fails instead of falling back.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum CompressionMethod {
    /// Uncompressed geometry
    #[default]
    Raw,
    /// Lossless MG1 (not implemented)
    Mg1,
    /// Fixed-point MG2 (not implemented)
    Mg2,
}

impl CompressionMethod {
    pub const RAW_CODE: u32 = 0x0057_4152;
    pub const MG1_CODE: u32 = 0x0031_474D;
    pub const MG2_CODE: u32 = 0x0032_474D;

    /// Header code ("RAW\0", "MG1\0", "MG2\0" read as little-endian u32)
    pub const fn code(self) -> u32 {
        match self {
            CompressionMethod::Raw => Self::RAW_CODE,
            CompressionMethod::Mg1 => Self::MG1_CODE,
            CompressionMethod::Mg2 => Self::MG2_CODE,
        }
    }

    pub const fn from_code(code: u32) -> Option<Self> {
        match code {
            Self::RAW_CODE => Some(CompressionMethod::Raw),
            Self::MG1_CODE => Some(CompressionMethod::Mg1),
            Self::MG2_CODE => Some(CompressionMethod::Mg2),
            _ => None,
        }
    }

    /// Whether a body encoder exists for this method
    pub const fn is_implemented(self) -> bool {
        matches!(self, CompressionMethod::Raw)
    }

    pub const fn name(self) -> &'static str {
        match self {
            CompressionMethod::Raw => "RAW",
            CompressionMethod::Mg1 => "MG1",
            CompressionMethod::Mg2 => "MG2",
        }
    }
}

impl fmt::Display for CompressionMethod {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Error returned when parsing an unknown compression method name
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("unknown compression method '{0}' (expected raw, mg1 or mg2)")]
pub struct ParseCompressionMethodError(String);

impl FromStr for CompressionMethod {
    type Err = ParseCompressionMethodError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "raw" => Ok(CompressionMethod::Raw),
            "mg1" => Ok(CompressionMethod::Mg1),
            "mg2" => Ok(CompressionMethod::Mg2),
            _ => Err(ParseCompressionMethodError(s.to_string())),
        }
    }
}
