//! Output buffer for capability operations
//!
//! A [`Buffer`] is a caller-owned sink with a capacity fixed at allocation.
//! Operations append into the unused tail and the caller reads the final
//! length afterwards. Writing past the capacity is a contract violation and
//! panics; [`Buffer::try_write`] is the checked alternative.

use crate::{Result, error::ValidationError};
use zeroize::Zeroize;

/// Fixed-capacity, caller-owned byte sink
#[derive(Clone, PartialEq, Eq)]
pub struct Buffer {
    bytes: Vec<u8>,
    len: usize,
    secure: bool,
}

impl std::fmt::Debug for Buffer {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let mut debug = f.debug_struct("Buffer");
        debug
            .field("capacity", &self.capacity())
            .field("len", &self.len);
        if !self.secure {
            debug.field("data", &self.to_hex());
        }
        debug.finish()
    }
}

impl Buffer {
    /// Allocate an empty buffer able to hold `capacity` bytes
    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            bytes: vec![0u8; capacity],
            len: 0,
            secure: false,
        }
    }

    /// Total number of bytes this buffer can hold
    pub fn capacity(&self) -> usize {
        self.bytes.len()
    }

    /// Number of bytes written so far
    pub fn len(&self) -> usize {
        self.len
    }

    /// Whether nothing has been written yet
    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    /// Number of bytes that can still be written
    pub fn unused_len(&self) -> usize {
        self.capacity() - self.len
    }

    /// Whether the buffer has no room left
    pub fn is_full(&self) -> bool {
        self.unused_len() == 0
    }

    /// The written bytes
    pub fn as_slice(&self) -> &[u8] {
        &self.bytes[..self.len]
    }

    /// Append `data` to the written bytes
    ///
    /// # Panics
    ///
    /// Panics if `data` does not fit in the unused tail.
    pub fn write(&mut self, data: &[u8]) {
        assert!(
            data.len() <= self.unused_len(),
            "buffer overflow: writing {} bytes with {} bytes unused",
            data.len(),
            self.unused_len()
        );
        self.bytes[self.len..self.len + data.len()].copy_from_slice(data);
        self.len += data.len();
    }

    /// Append `data`, failing instead of panicking when it does not fit
    pub fn try_write(&mut self, data: &[u8]) -> Result<()> {
        if data.len() > self.unused_len() {
            return Err(ValidationError::insufficient_capacity(data.len(), self.unused_len()).into());
        }
        self.write(data);
        Ok(())
    }

    /// Forget the written bytes, keeping the capacity
    ///
    /// Secure buffers are wiped first.
    pub fn reset(&mut self) {
        if self.secure {
            self.bytes.as_mut_slice().zeroize();
        }
        self.len = 0;
    }

    /// Mark the contents as sensitive: wiped on reset and on drop
    pub fn make_secure(&mut self) {
        self.secure = true;
    }

    /// Whether the contents are wiped on reset and on drop
    pub fn is_secure(&self) -> bool {
        self.secure
    }

    /// Lower-case hex rendering of the written bytes
    pub fn to_hex(&self) -> String {
        let mut result = String::with_capacity(self.len * 2);
        for byte in self.as_slice() {
            result.push_str(&format!("{byte:02x}"));
        }
        result
    }

    /// Take the written bytes
    pub fn into_vec(mut self) -> Vec<u8> {
        let mut bytes = std::mem::take(&mut self.bytes);
        bytes.truncate(self.len);
        bytes
    }
}

impl AsRef<[u8]> for Buffer {
    fn as_ref(&self) -> &[u8] {
        self.as_slice()
    }
}

impl Drop for Buffer {
    fn drop(&mut self) {
        if self.secure {
            self.bytes.zeroize();
        }
    }
}
