//! Bounds-checked little-endian cursor over a borrowed byte slice.
//!
//! Every read checks the remaining length first, so a failed read leaves the
//! position where it was.

use std::borrow::Cow;

use crate::types::{Result, ScanError};

#[derive(Debug, Clone)]
pub struct ByteReader<'a> {
    data: &'a [u8],
    pos: usize,
}

impl<'a> ByteReader<'a> {
    pub fn new(data: &'a [u8]) -> Self {
        Self { data, pos: 0 }
    }

    pub fn pos(&self) -> usize {
        self.pos
    }

    pub fn size(&self) -> usize {
        self.data.len()
    }

    pub fn remaining(&self) -> usize {
        self.data.len() - self.pos
    }

    /// Fail unless `n` more bytes are available at the cursor.
    pub fn need(&self, n: u64) -> Result<()> {
        if n > self.remaining() as u64 {
            return Err(ScanError::TruncatedInput {
                need: n,
                pos: self.pos as u64,
                size: self.data.len() as u64,
            });
        }
        Ok(())
    }

    /// Borrow the next `n` bytes and advance past them.
    pub fn read_bytes(&mut self, n: u64) -> Result<&'a [u8]> {
        self.need(n)?;
        // `need` bounds n by the slice length, so the cast is lossless.
        let data = self.data;
        let start = self.pos;
        self.pos += n as usize;
        Ok(&data[start..self.pos])
    }

    fn read_array<const N: usize>(&mut self) -> Result<[u8; N]> {
        let bytes = self.read_bytes(N as u64)?;
        let mut out = [0u8; N];
        out.copy_from_slice(bytes);
        Ok(out)
    }

    pub fn read_magic(&mut self) -> Result<[u8; 4]> {
        self.read_array()
    }

    pub fn read_u32(&mut self) -> Result<u32> {
        self.read_array().map(u32::from_le_bytes)
    }

    pub fn read_u64(&mut self) -> Result<u64> {
        self.read_array().map(u64::from_le_bytes)
    }

    pub fn skip(&mut self, n: u64) -> Result<()> {
        self.read_bytes(n).map(|_| ())
    }

    /// Read a `u64`-length-prefixed string, replacing invalid UTF-8.
    ///
    /// Either the whole string is consumed or nothing is.
    pub fn read_string(&mut self) -> Result<Cow<'a, str>> {
        let start = self.pos;
        let len = self.read_u64()?;
        match self.read_bytes(len) {
            Ok(bytes) => Ok(String::from_utf8_lossy(bytes)),
            Err(e) => {
                self.pos = start;
                Err(e)
            }
        }
    }

    /// Advance past a `u64`-length-prefixed string without decoding it.
    pub fn skip_string(&mut self) -> Result<()> {
        let start = self.pos;
        let len = self.read_u64()?;
        self.skip(len).inspect_err(|_| self.pos = start)
    }
}
