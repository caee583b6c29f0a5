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

//! In-memory byte channel.
//!
//! [`MemoryStream`] keeps its bytes in a `Vec<u8>` and is the channel used by
//! the tests and benchmarks. It has no I/O overhead and behaves
//! deterministically, which makes the byte-exact guarantees of the formats
//! easy to check.

use crate::source::StreamSrc;

#[cfg(feature = "observability")]
use tracing::trace;

/// A growable in-memory byte channel with a cursor.
///
/// Writes overwrite bytes under the cursor and extend the buffer past its end.
/// Reads stop at the end of the buffer. Skips are clamped to the buffer bounds.
///
/// # Examples
///
/// ## Writing then reading back
///
/// ```rust
/// use streamfmt::source::{MemoryStream, StreamSrc};
///
/// let mut src = MemoryStream::new();
/// src.write(&[1, 2, 3, 4]);
/// assert_eq!(src.position(), 4);
///
/// src.rewind();
/// src.skip(2);
/// let mut buffer = [0u8; 8];
/// assert_eq!(src.read(&mut buffer), 2);
/// assert_eq!(&buffer[..2], &[3, 4]);
/// ```
///
/// ## Reading prepared input
///
/// ```rust
/// use streamfmt::source::{MemoryStream, StreamSrc};
///
/// let mut src = MemoryStream::from(b"abc".to_vec());
/// let mut buffer = [0u8; 1];
/// src.read(&mut buffer);
/// assert_eq!(buffer[0], b'a');
/// assert_eq!(src.remaining(), 2);
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct MemoryStream {
    data: Vec<u8>,
    position: usize,
}

impl MemoryStream {
    /// Creates an empty stream.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates an empty stream that can hold `capacity` bytes before
    /// reallocating.
    #[must_use]
    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            data: Vec::with_capacity(capacity),
            position: 0,
        }
    }

    /// Returns every byte in the stream, regardless of the cursor.
    #[must_use]
    pub fn as_bytes(&self) -> &[u8] {
        &self.data
    }

    /// Consumes the stream and returns its bytes.
    #[must_use]
    pub fn into_inner(self) -> Vec<u8> {
        self.data
    }

    /// Returns the cursor position.
    #[must_use]
    pub fn position(&self) -> usize {
        self.position
    }

    /// Returns the number of bytes between the cursor and the end.
    #[must_use]
    pub fn remaining(&self) -> usize {
        self.data.len() - self.position
    }

    /// Returns the total number of bytes in the stream.
    #[must_use]
    pub fn len(&self) -> usize {
        self.data.len()
    }

    /// Returns `true` if the stream holds no bytes.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.data.is_empty()
    }
}

impl From<Vec<u8>> for MemoryStream {
    fn from(data: Vec<u8>) -> Self {
        Self { data, position: 0 }
    }
}

impl From<&[u8]> for MemoryStream {
    fn from(data: &[u8]) -> Self {
        Self::from(data.to_vec())
    }
}

impl From<&str> for MemoryStream {
    fn from(text: &str) -> Self {
        Self::from(text.as_bytes())
    }
}

impl StreamSrc for MemoryStream {
    fn read(&mut self, buf: &mut [u8]) -> usize {
        let count = buf.len().min(self.remaining());
        let end = self.position + count;
        buf[..count].copy_from_slice(&self.data[self.position..end]);
        self.position = end;
        count
    }

    fn write(&mut self, buf: &[u8]) -> usize {
        let end = self.position + buf.len();
        if end > self.data.len() {
            self.data.resize(end, 0);
        }
        self.data[self.position..end].copy_from_slice(buf);
        self.position = end;
        buf.len()
    }

    fn skip(&mut self, offset: i64) {
        let distance = usize::try_from(offset.unsigned_abs()).unwrap_or(usize::MAX);
        self.position = if offset < 0 {
            self.position.saturating_sub(distance)
        } else {
            self.position.saturating_add(distance).min(self.data.len())
        };
    }

    fn rewind(&mut self) {
        #[cfg(feature = "observability")]
        trace!(len = self.data.len(), "Rewinding memory stream");

        self.position = 0;
    }
}
