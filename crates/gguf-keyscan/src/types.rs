//! GGUF format types and constants.

use std::path::PathBuf;

use serde::Serialize;

/// Magic bytes every GGUF file starts with.
pub const GGUF_MAGIC: [u8; 4] = *b"GGUF";

/// Size of the fixed prologue: magic, version, tensor count, kv count.
pub const GGUF_PROLOGUE_LEN: usize = 24;

//  Value type tag

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[repr(u32)]
pub enum GGUFValueType {
    Uint8 = 0,
    Int8 = 1,
    Uint16 = 2,
    Int16 = 3,
    Uint32 = 4,
    Int32 = 5,
    Float32 = 6,
    Bool = 7,
    String = 8,
    Array = 9,
    Uint64 = 10,
    Int64 = 11,
    Float64 = 12,
}

impl GGUFValueType {
    /// Convert the raw tag stored in the file.
    pub const fn from_u32(v: u32) -> Option<Self> {
        match v {
            0 => Some(Self::Uint8),
            1 => Some(Self::Int8),
            2 => Some(Self::Uint16),
            3 => Some(Self::Int16),
            4 => Some(Self::Uint32),
            5 => Some(Self::Int32),
            6 => Some(Self::Float32),
            7 => Some(Self::Bool),
            8 => Some(Self::String),
            9 => Some(Self::Array),
            10 => Some(Self::Uint64),
            11 => Some(Self::Int64),
            12 => Some(Self::Float64),
            _ => None,
        }
    }

    /// Encoded width of a fixed-size scalar.
    ///
    /// `None` for [`String`](Self::String) and [`Array`](Self::Array), whose
    /// width is carried in the data itself.
    pub const fn fixed_size(self) -> Option<usize> {
        match self {
            Self::Uint8 | Self::Int8 | Self::Bool => Some(1),
            Self::Uint16 | Self::Int16 => Some(2),
            Self::Uint32 | Self::Int32 | Self::Float32 => Some(4),
            Self::Uint64 | Self::Int64 | Self::Float64 => Some(8),
            Self::String | Self::Array => None,
        }
    }
}

//  Error

#[derive(Debug, thiserror::Error)]
pub enum ScanError {
    #[error("cannot open {}: {source}", .path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("bad magic: expected \"GGUF\", found {found:02x?}")]
    BadMagic { found: [u8; 4] },

    #[error("truncated input: need {need} bytes at {pos}/{size}")]
    TruncatedInput { need: u64, pos: u64, size: u64 },

    #[error("unknown value type tag {tag} at offset {offset}")]
    UnknownValueType { tag: u32, offset: u64 },

    #[error("unsupported array element type tag {tag} at offset {offset}")]
    UnknownElementType { tag: u32, offset: u64 },
}

pub type Result<T> = std::result::Result<T, ScanError>;
