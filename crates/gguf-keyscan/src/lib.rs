//! Zero-copy scanner for GGUF metadata keys.
//!
//! Walks the key/value table of a `.gguf` file and reports the keys that
//! contain any of a set of substrings (by default `rope` and `bias`).
//! The file is memory-mapped and values are skipped by their encoded
//! width. Nothing but the matching keys is ever materialized, so
//! multi-gigabyte models scan in the time it takes to touch the metadata
//! pages.
//!
//! ```no_run
//! use std::path::Path;
//! use gguf_keyscan::{KeyFilter, scan_file};
//!
//! let result = scan_file(Path::new("model.gguf"), &KeyFilter::default())?;
//! for key in result.keys() {
//!     println!("{key}");
//! }
//! # Ok::<(), gguf_keyscan::ScanError>(())
//! ```

pub mod filter;
pub mod mapped;
pub mod reader;
pub mod scanner;
pub mod types;

pub use filter::{DEFAULT_FILTERS, KeyFilter};
pub use mapped::{MappedSource, scan_file};
pub use reader::ByteReader;
pub use scanner::{KeyMatch, MetadataScanner, ScanResult, scan_bytes};
pub use types::{GGUF_MAGIC, GGUF_PROLOGUE_LEN, GGUFValueType, Result, ScanError};
