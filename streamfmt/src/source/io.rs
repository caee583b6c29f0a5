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

//! Channel adapter over standard I/O objects.

use std::io::{self, Read, Seek, SeekFrom, Write};

use crate::source::StreamSrc;

#[cfg(feature = "observability")]
use tracing::warn;

/// Adapts any `Read + Write + Seek` object into a [`StreamSrc`].
///
/// The channel contract has no failure path, so I/O errors end the current
/// transfer early: the operation returns the bytes moved so far and the error
/// is logged. `Interrupted` errors are retried.
///
/// # Examples
///
/// ```rust
/// use std::io::Cursor;
/// use streamfmt::source::{IoStream, StreamSrc};
///
/// let mut src = IoStream::new(Cursor::new(Vec::new()));
/// src.write(b"data");
/// src.rewind();
///
/// let mut buffer = [0u8; 4];
/// assert_eq!(src.read(&mut buffer), 4);
/// assert_eq!(&buffer, b"data");
/// ```
#[derive(Debug)]
pub struct IoStream<T> {
    inner: T,
}

impl<T> IoStream<T> {
    /// Wraps an I/O object.
    pub fn new(inner: T) -> Self {
        Self { inner }
    }

    /// Returns a reference to the wrapped object.
    pub fn get_ref(&self) -> &T {
        &self.inner
    }

    /// Returns a mutable reference to the wrapped object.
    pub fn get_mut(&mut self) -> &mut T {
        &mut self.inner
    }

    /// Consumes the adapter and returns the wrapped object.
    pub fn into_inner(self) -> T {
        self.inner
    }
}

impl<T: Write> IoStream<T> {
    /// Flushes buffered writes of the wrapped object.
    ///
    /// # Errors
    ///
    /// Returns the error reported by the wrapped object's `flush`.
    pub fn flush(&mut self) -> io::Result<()> {
        self.inner.flush()
    }
}

impl<T: Read + Write + Seek> StreamSrc for IoStream<T> {
    fn read(&mut self, buf: &mut [u8]) -> usize {
        let mut filled = 0;
        while filled < buf.len() {
            match self.inner.read(&mut buf[filled..]) {
                Ok(0) => break,
                Ok(n) => filled += n,
                Err(e) if e.kind() == io::ErrorKind::Interrupted => {}
                Err(_e) => {
                    #[cfg(feature = "observability")]
                    warn!(error = %_e, filled, "Read from I/O stream failed");
                    break;
                }
            }
        }
        filled
    }

    fn write(&mut self, buf: &[u8]) -> usize {
        let mut written = 0;
        while written < buf.len() {
            match self.inner.write(&buf[written..]) {
                Ok(0) => break,
                Ok(n) => written += n,
                Err(e) if e.kind() == io::ErrorKind::Interrupted => {}
                Err(_e) => {
                    #[cfg(feature = "observability")]
                    warn!(error = %_e, written, "Write to I/O stream failed");
                    break;
                }
            }
        }
        written
    }

    fn skip(&mut self, offset: i64) {
        if let Err(_e) = self.inner.seek(SeekFrom::Current(offset)) {
            #[cfg(feature = "observability")]
            warn!(error = %_e, offset, "Skip on I/O stream failed");
        }
    }

    fn rewind(&mut self) {
        if let Err(_e) = self.inner.seek(SeekFrom::Start(0)) {
            #[cfg(feature = "observability")]
            warn!(error = %_e, "Rewind of I/O stream failed");
        }
    }
}
