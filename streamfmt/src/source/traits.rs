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

/// An ordered byte channel.
///
/// Implementations move bytes sequentially and keep a cursor. None of the
/// operations report failure: a channel that cannot deliver returns a short
/// count, and a zero-length read means the end of the input has been reached.
///
/// # Implementing a custom channel
///
/// ```rust
/// use streamfmt::source::StreamSrc;
///
/// /// Discards every write and reads as an endless run of zeros.
/// struct Zeros;
///
/// impl StreamSrc for Zeros {
///     fn read(&mut self, buf: &mut [u8]) -> usize {
///         buf.fill(0);
///         buf.len()
///     }
///
///     fn write(&mut self, buf: &[u8]) -> usize {
///         buf.len()
///     }
///
///     fn skip(&mut self, _offset: i64) {}
///
///     fn rewind(&mut self) {}
/// }
/// ```
pub trait StreamSrc {
    /// Reads up to `buf.len()` bytes into `buf` and returns how many were read.
    fn read(&mut self, buf: &mut [u8]) -> usize;

    /// Writes `buf` and returns how many bytes were accepted.
    fn write(&mut self, buf: &[u8]) -> usize;

    /// Moves the cursor by `offset` bytes, backwards when negative.
    fn skip(&mut self, offset: i64);

    /// Moves the cursor back to the start of the channel.
    fn rewind(&mut self);
}

impl<S: StreamSrc + ?Sized> StreamSrc for &mut S {
    fn read(&mut self, buf: &mut [u8]) -> usize {
        (**self).read(buf)
    }

    fn write(&mut self, buf: &[u8]) -> usize {
        (**self).write(buf)
    }

    fn skip(&mut self, offset: i64) {
        (**self).skip(offset);
    }

    fn rewind(&mut self) {
        (**self).rewind();
    }
}

impl<S: StreamSrc + ?Sized> StreamSrc for Box<S> {
    fn read(&mut self, buf: &mut [u8]) -> usize {
        (**self).read(buf)
    }

    fn write(&mut self, buf: &[u8]) -> usize {
        (**self).write(buf)
    }

    fn skip(&mut self, offset: i64) {
        (**self).skip(offset);
    }

    fn rewind(&mut self) {
        (**self).rewind();
    }
}
