//! Synthetic GGUF image builder shared by the integration tests.

#![allow(dead_code)]

use std::io::Write;
use std::path::PathBuf;

pub const STRING: u32 = 8;
pub const ARRAY: u32 = 9;
pub const F32: u32 = 6;
pub const U32: u32 = 4;

/// Encoded value bytes, without the leading type tag.
#[derive(Debug, Clone)]
pub enum Value {
    Scalar(u32, Vec<u8>),
    Str(String),
    StrArray(Vec<String>),
    ScalarArray { elem: u32, width: usize, count: u64 },
}

impl Value {
    pub fn tag(&self) -> u32 {
        match self {
            Self::Scalar(tag, _) => *tag,
            Self::Str(_) => STRING,
            Self::StrArray(_) | Self::ScalarArray { .. } => ARRAY,
        }
    }

    pub fn encode(&self, out: &mut Vec<u8>) {
        match self {
            Self::Scalar(_, bytes) => out.extend_from_slice(bytes),
            Self::Str(s) => put_str(out, s.as_bytes()),
            Self::StrArray(items) => {
                out.extend_from_slice(&STRING.to_le_bytes());
                out.extend_from_slice(&(items.len() as u64).to_le_bytes());
                for item in items {
                    put_str(out, item.as_bytes());
                }
            }
            Self::ScalarArray { elem, width, count } => {
                out.extend_from_slice(&elem.to_le_bytes());
                out.extend_from_slice(&count.to_le_bytes());
                out.resize(out.len() + width * (*count as usize), 0x5A);
            }
        }
    }
}

fn put_str(out: &mut Vec<u8>, bytes: &[u8]) {
    out.extend_from_slice(&(bytes.len() as u64).to_le_bytes());
    out.extend_from_slice(bytes);
}

pub fn gguf(entries: &[(String, Value)]) -> Vec<u8> {
    gguf_claiming(entries, entries.len() as u64)
}

/// Like [`gguf`] but with an arbitrary kv count in the prologue.
pub fn gguf_claiming(entries: &[(String, Value)], kv_count: u64) -> Vec<u8> {
    let mut d = Vec::new();
    d.extend_from_slice(b"GGUF");
    d.extend_from_slice(&3u32.to_le_bytes());
    d.extend_from_slice(&0u64.to_le_bytes());
    d.extend_from_slice(&kv_count.to_le_bytes());
    for (key, value) in entries {
        put_str(&mut d, key.as_bytes());
        d.extend_from_slice(&value.tag().to_le_bytes());
        value.encode(&mut d);
    }
    d
}

/// The two-entry model used across the scenario tests.
pub fn reference_model() -> Vec<u8> {
    gguf(&[
        ("general.name".into(), Value::Str("m".into())),
        (
            "rope.freq_base".into(),
            Value::Scalar(F32, 10000.0f32.to_le_bytes().to_vec()),
        ),
    ])
}

/// Write `bytes` to `name` inside `dir` and return the path.
pub fn write_model(dir: &tempfile::TempDir, name: &str, bytes: &[u8]) -> PathBuf {
    let path = dir.path().join(name);
    let mut f = std::fs::File::create(&path).unwrap();
    f.write_all(bytes).unwrap();
    path
}
