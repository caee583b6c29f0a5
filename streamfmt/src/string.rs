//
// Copyright 2026 Hans W. Uhlig. All Rights Reserved.
//
// Licensed under the Apache License, Version 2.0 (the "License");
// you may not use this file except in compliance with the License.
// You may obtain a copy of the License at
//
//      http://www.apache.org/licenses/LICENSE-2.0
//
// Unless required by applicable law or agreed to in writing, software
// distributed under the License is distributed on an "AS IS" BASIS,
// WITHOUT WARRANTIES OR CONDITIONS OF ANY KIND, either express or implied.
// See the License for the specific language governing permissions and
// limitations under the License.
//

//! Fixed-capacity byte strings.
//!
//! [`BoundedString`] is the destination of string reads and the text format's
//! scratch buffer. Its capacity counts one slot reserved for a terminating NUL,
//! so a buffer of capacity `N` holds at most `N - 1` content bytes. Every
//! mutation that would exceed the capacity truncates silently.
//!
//! Content always ends at the first NUL byte, which mirrors how fixed-size
//! string fields are laid out on the wire: a 10-byte field holding `hello`
//! reads back as the 5-byte string `hello`.

use std::borrow::Cow;
use std::fmt;

/// A string buffer with a fixed capacity that truncates instead of growing.
///
/// # Examples
///
/// ```rust
/// use streamfmt::BoundedString;
///
/// let mut s = BoundedString::with_capacity(4);
/// s.copy_from(b"hello");
/// assert_eq!(s.as_bytes(), b"hel");
/// assert_eq!(s.len(), 3);
/// ```
#[derive(Clone)]
pub struct BoundedString {
    buffer: Box<[u8]>,
    len: usize,
}

impl BoundedString {
    /// Creates an empty string with room for `capacity - 1` content bytes.
    ///
    /// A capacity of zero is raised to one so the terminator slot always
    /// exists.
    #[must_use]
    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            buffer: vec![0; capacity.max(1)].into_boxed_slice(),
            len: 0,
        }
    }

    /// Returns the total buffer size, including the terminator slot.
    #[must_use]
    pub fn capacity(&self) -> usize {
        self.buffer.len()
    }

    /// Returns the largest content length this buffer can hold.
    #[must_use]
    pub fn max_len(&self) -> usize {
        self.buffer.len() - 1
    }

    /// Returns the content length in bytes.
    #[must_use]
    pub fn len(&self) -> usize {
        self.len
    }

    /// Returns `true` if the string holds no content.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    /// Returns `true` if no further byte can be appended.
    #[must_use]
    pub fn is_full(&self) -> bool {
        self.len == self.max_len()
    }

    /// Returns the content bytes.
    #[must_use]
    pub fn as_bytes(&self) -> &[u8] {
        &self.buffer[..self.len]
    }

    /// Returns the content as text, replacing invalid UTF-8 sequences.
    #[must_use]
    pub fn to_string_lossy(&self) -> Cow<'_, str> {
        String::from_utf8_lossy(self.as_bytes())
    }

    /// Returns `true` if the content starts with `prefix`.
    #[must_use]
    pub fn starts_with(&self, prefix: &[u8]) -> bool {
        self.as_bytes().starts_with(prefix)
    }

    /// Removes all content.
    pub fn clear(&mut self) {
        self.len = 0;
        self.buffer[0] = 0;
    }

    /// Appends one byte. Returns `false` if the buffer is full or `byte` is
    /// NUL, in which case nothing changes.
    pub fn push(&mut self, byte: u8) -> bool {
        if byte == 0 || self.is_full() {
            return false;
        }
        self.buffer[self.len] = byte;
        self.len += 1;
        self.buffer[self.len] = 0;
        true
    }

    /// Removes and returns the last byte.
    pub fn pop(&mut self) -> Option<u8> {
        if self.len == 0 {
            return None;
        }
        self.len -= 1;
        let byte = self.buffer[self.len];
        self.buffer[self.len] = 0;
        Some(byte)
    }

    /// Replaces the content with `bytes`, truncated to the capacity and to the
    /// first NUL.
    pub fn copy_from(&mut self, bytes: &[u8]) {
        let len = bytes.len().min(self.max_len());
        self.buffer[..len].copy_from_slice(&bytes[..len]);
        self.trim(len);
    }

    /// Shortens the content to at most `len` bytes of the raw buffer.
    ///
    /// After bytes were written straight into [`buffer_mut`](Self::buffer_mut),
    /// this is how the new length is established: the content becomes the raw
    /// buffer up to `len`, the last usable byte, or the first NUL, whichever
    /// comes first.
    pub fn trim(&mut self, len: usize) {
        let len = len.min(self.max_len());
        self.len = self.buffer[..len]
            .iter()
            .position(|&byte| byte == 0)
            .unwrap_or(len);
        self.buffer[self.len] = 0;
    }

    /// Returns the whole raw buffer, terminator slot included.
    ///
    /// Callers that fill the buffer directly must call [`trim`](Self::trim)
    /// afterwards to establish the content length.
    pub fn buffer_mut(&mut self) -> &mut [u8] {
        &mut self.buffer
    }
}

impl From<&str> for BoundedString {
    /// Creates a string just large enough to hold `value`.
    fn from(value: &str) -> Self {
        let mut string = Self::with_capacity(value.len() + 1);
        string.copy_from(value.as_bytes());
        string
    }
}

impl fmt::Debug for BoundedString {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("BoundedString")
            .field("capacity", &self.capacity())
            .field("content", &self.to_string_lossy())
            .finish()
    }
}

impl fmt::Display for BoundedString {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.to_string_lossy())
    }
}

impl fmt::Write for BoundedString {
    /// Appends `s`, dropping whatever does not fit. Never fails.
    fn write_str(&mut self, s: &str) -> fmt::Result {
        for &byte in s.as_bytes() {
            if !self.push(byte) && self.is_full() {
                break;
            }
        }
        Ok(())
    }
}

impl PartialEq for BoundedString {
    /// Two strings are equal when their content is, whatever their capacity.
    fn eq(&self, other: &Self) -> bool {
        self.as_bytes() == other.as_bytes()
    }
}

impl Eq for BoundedString {}

impl AsRef<[u8]> for BoundedString {
    fn as_ref(&self) -> &[u8] {
        self.as_bytes()
    }
}

/// Returns `bytes` up to, not including, the first NUL.
pub(crate) fn until_nul(bytes: &[u8]) -> &[u8] {
    bytes
        .iter()
        .position(|&byte| byte == 0)
        .map_or(bytes, |end| &bytes[..end])
}
