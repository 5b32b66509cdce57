//! Forward-only walk over the GGUF key/value table.
//!
//! Values are never decoded: each one is skipped by the width its type tag
//! implies, so arbitrarily large tokenizer arrays cost a handful of bounds
//! checks rather than allocations.

use std::borrow::Cow;

use serde::Serialize;
use tracing::{debug, trace, warn};

use crate::filter::KeyFilter;
use crate::reader::ByteReader;
use crate::types::*;

//  Public result types

/// A metadata key that matched the filter.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct KeyMatch {
    pub key: String,
    pub value_type: GGUFValueType,
    /// Byte offset of the entry's key-length prefix.
    pub offset: u64,
}

/// Outcome of scanning one GGUF metadata table.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ScanResult {
    pub version: u32,
    pub kv_count: u64,
    /// Matches in file order. Repeated keys are reported each time.
    pub matches: Vec<KeyMatch>,
    /// Cursor position after the last entry.
    pub end_offset: u64,
}

impl ScanResult {
    pub fn keys(&self) -> impl Iterator<Item = &str> {
        self.matches.iter().map(|m| m.key.as_str())
    }
}

//  Scanner

pub struct MetadataScanner<'a> {
    reader: ByteReader<'a>,
}

impl<'a> MetadataScanner<'a> {
    pub fn new(data: &'a [u8]) -> Self {
        Self {
            reader: ByteReader::new(data),
        }
    }

    /// Validate the prologue and walk every key/value entry.
    pub fn scan(mut self, filter: &KeyFilter) -> Result<ScanResult> {
        //  Magic
        let magic = self.reader.read_magic()?;
        if magic != GGUF_MAGIC {
            return Err(ScanError::BadMagic { found: magic });
        }

        //  Prologue
        let version = self.reader.read_u32()?;
        let _tensor_count = self.reader.read_u64()?;
        let kv_count = self.reader.read_u64()?;
        debug!(version, kv_count, size = self.reader.size(), "gguf prologue");

        //  Key/value table
        let mut matches = Vec::new();
        for _ in 0..kv_count {
            let offset = self.reader.pos() as u64;
            let key = self.reader.read_string()?;
            if let Cow::Owned(_) = key {
                warn!(offset, key = %key, "metadata key is not valid UTF-8");
            }

            let tag = self.reader.read_u32()?;
            let value_type =
                GGUFValueType::from_u32(tag).ok_or(ScanError::UnknownValueType {
                    tag,
                    offset: self.reader.pos() as u64 - 4,
                })?;
            trace!(offset, key = %key, ?value_type, "metadata entry");

            if filter.matches(&key) {
                matches.push(KeyMatch {
                    key: key.into_owned(),
                    value_type,
                    offset,
                });
            }
            self.skip_value(value_type)?;
        }

        let end_offset = self.reader.pos() as u64;
        debug!(matched = matches.len(), end_offset, "metadata scan complete");

        Ok(ScanResult {
            version,
            kv_count,
            matches,
            end_offset,
        })
    }

    fn skip_value(&mut self, value_type: GGUFValueType) -> Result<()> {
        if let Some(width) = value_type.fixed_size() {
            return self.reader.skip(width as u64);
        }
        match value_type {
            GGUFValueType::Array => self.skip_array(),
            _ => self.reader.skip_string(),
        }
    }

    fn skip_array(&mut self) -> Result<()> {
        let tag_offset = self.reader.pos() as u64;
        let elem_tag = self.reader.read_u32()?;
        let count = self.reader.read_u64()?;

        let unsupported = ScanError::UnknownElementType {
            tag: elem_tag,
            offset: tag_offset,
        };
        match GGUFValueType::from_u32(elem_tag) {
            Some(GGUFValueType::String) => {
                for _ in 0..count {
                    self.reader.skip_string()?;
                }
                Ok(())
            }
            Some(elem) => {
                let width = elem.fixed_size().ok_or(unsupported)?;
                // An unrepresentable total can never fit in the source.
                let total = (width as u64).checked_mul(count).unwrap_or(u64::MAX);
                self.reader.skip(total)
            }
            None => Err(unsupported),
        }
    }
}

/// Scan an in-memory GGUF image.
pub fn scan_bytes(data: &[u8], filter: &KeyFilter) -> Result<ScanResult> {
    MetadataScanner::new(data).scan(filter)
}
