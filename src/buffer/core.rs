use std::path::Path;

use crate::common::STDIO_PATH;
use crate::common::io::{read_file, read_stdin, write_file, write_stdout};
use crate::error::{Error, Result};

/// Capacity of a freshly created buffer.
pub const INITIAL_CAPACITY: usize = 5;

/// Growth factor applied when the buffer fills up.
const GROWTH_FACTOR: usize = 2;

/// A growable sequence of bytes that is loaded from and saved to whole files.
///
/// `capacity` is tracked explicitly so the growth policy is observable:
/// it doubles as soon as an append leaves the buffer full, so there is
/// always room for the next byte. `len() <= capacity()` holds at all times.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ByteBuffer {
    data: Vec<u8>,
    capacity: usize,
}

impl Default for ByteBuffer {
    fn default() -> Self {
        Self::new()
    }
}

impl ByteBuffer {
    pub fn new() -> Self {
        Self {
            data: Vec::with_capacity(INITIAL_CAPACITY),
            capacity: INITIAL_CAPACITY,
        }
    }

    /// Take ownership of existing bytes without copying them. Capacity is
    /// the smallest doubling of `INITIAL_CAPACITY` that keeps a free slot
    /// after the last byte; storage is only reserved on the next append.
    pub fn from_vec(data: Vec<u8>) -> Self {
        let mut capacity = INITIAL_CAPACITY;
        while capacity <= data.len() {
            capacity *= GROWTH_FACTOR;
        }
        Self { data, capacity }
    }

    /// Append one byte. Amortized O(1).
    #[inline]
    pub fn append(&mut self, byte: u8) {
        self.data.push(byte);
        if self.data.len() == self.capacity {
            self.capacity *= GROWTH_FACTOR;
            self.sync_capacity();
        }
    }

    /// Append a run of bytes, growing at most once per doubling.
    pub fn extend_from_slice(&mut self, bytes: &[u8]) {
        let needed = self.data.len() + bytes.len();
        if needed >= self.capacity {
            while self.capacity <= needed {
                self.capacity *= GROWTH_FACTOR;
            }
            self.sync_capacity();
        }
        self.data.extend_from_slice(bytes);
    }

    /// Read the whole of `path` (or stdin for "-") in binary mode.
    pub fn load_from_file(path: &Path) -> Result<Self> {
        let loaded = if path.as_os_str() == STDIO_PATH {
            read_stdin()
        } else {
            read_file(path)
        };
        let data = loaded.map_err(|e| Error::io(path, e))?;
        Ok(Self::from_vec(data))
    }

    /// Write the bytes verbatim to `path` (or stdout for "-"),
    /// creating or truncating the file.
    pub fn save_to_file(&self, path: &Path) -> Result<()> {
        let saved = if path.as_os_str() == STDIO_PATH {
            write_stdout(&self.data)
        } else {
            write_file(path, &self.data)
        };
        saved.map_err(|e| Error::io(path, e))
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.data.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.data.is_empty()
    }

    #[inline]
    pub fn capacity(&self) -> usize {
        self.capacity
    }

    #[inline]
    pub fn as_slice(&self) -> &[u8] {
        &self.data
    }

    pub fn into_vec(self) -> Vec<u8> {
        self.data
    }

    fn sync_capacity(&mut self) {
        let len = self.data.len();
        if self.data.capacity() < self.capacity {
            self.data.reserve_exact(self.capacity - len);
        }
    }
}

impl AsRef<[u8]> for ByteBuffer {
    fn as_ref(&self) -> &[u8] {
        &self.data
    }
}
