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

//! Stream format trait definition.
//!
//! This module defines the [`StreamFormat`] trait shared by the binary and
//! text encodings.

use crate::config::{StreamMode, TextFormatConfig};
use crate::endian::Endian;
use crate::source::StreamSrc;
use crate::string::BoundedString;

/// The operation set shared by every wire representation.
///
/// A format turns typed values into bytes on a [`StreamSrc`] and back. Both
/// implementations expose exactly the same operations, so a caller can switch
/// between compact binary and human-readable text without changing a call
/// site.
///
/// Every operation is infallible. Each write leaves the channel positioned
/// right after the record it produced, so consecutive writes compose a flat
/// record stream. Degenerate input is handled by policy rather than errors;
/// see the documentation of each implementation for the exact rules.
///
/// The channel is passed as a trait object so formats can be boxed and
/// selected at runtime (see [`StreamMode::into_format`]).
///
/// # Examples
///
/// ```rust
/// use streamfmt::{BinaryStreamFormat, Endian, StreamFormat, TextStreamFormat};
/// use streamfmt::source::{MemoryStream, StreamSrc};
///
/// fn write_header(format: &mut dyn StreamFormat, src: &mut dyn StreamSrc) {
///     format.write_u32(src, Endian::Big, 0xCAFE);
///     format.write_string(src, b"header", 8);
/// }
///
/// let mut binary = MemoryStream::new();
/// write_header(&mut BinaryStreamFormat::new(), &mut binary);
/// assert_eq!(binary.len(), 12);
///
/// let mut text = MemoryStream::new();
/// write_header(&mut TextStreamFormat::new(), &mut text);
/// assert_eq!(text.as_bytes(), b"51966 \"header\"");
/// ```
pub trait StreamFormat: Send {
    /// Returns the wire representation this format produces.
    fn mode(&self) -> StreamMode;

    /// Returns the text settings of a text format, or `None` for formats
    /// that have none.
    fn text_config(&self) -> Option<&TextFormatConfig> {
        None
    }

    /// Reads an unsigned 8-bit integer.
    fn read_u8(&mut self, src: &mut dyn StreamSrc, endian: Endian) -> u8;
    /// Reads an unsigned 16-bit integer.
    fn read_u16(&mut self, src: &mut dyn StreamSrc, endian: Endian) -> u16;
    /// Reads an unsigned 32-bit integer.
    fn read_u32(&mut self, src: &mut dyn StreamSrc, endian: Endian) -> u32;
    /// Reads an unsigned 64-bit integer.
    fn read_u64(&mut self, src: &mut dyn StreamSrc, endian: Endian) -> u64;
    /// Reads a signed 8-bit integer.
    fn read_i8(&mut self, src: &mut dyn StreamSrc, endian: Endian) -> i8;
    /// Reads a signed 16-bit integer.
    fn read_i16(&mut self, src: &mut dyn StreamSrc, endian: Endian) -> i16;
    /// Reads a signed 32-bit integer.
    fn read_i32(&mut self, src: &mut dyn StreamSrc, endian: Endian) -> i32;
    /// Reads a signed 64-bit integer.
    fn read_i64(&mut self, src: &mut dyn StreamSrc, endian: Endian) -> i64;
    /// Reads a 32-bit float.
    fn read_f32(&mut self, src: &mut dyn StreamSrc, endian: Endian) -> f32;

    /// Reads a `bits`-long bit field into `data`, MSB-first.
    ///
    /// Whole bytes are overwritten. When `bits` is not a multiple of eight, the
    /// low `bits % 8` bits of the trailing byte are replaced and its remaining
    /// high bits are preserved.
    ///
    /// # Panics
    ///
    /// Panics if `data` is shorter than `bits.div_ceil(8)` bytes.
    fn read_bit(&mut self, src: &mut dyn StreamSrc, data: &mut [u8], bits: usize);

    /// Reads a string record of declared `size` into `dst`.
    fn read_string(&mut self, src: &mut dyn StreamSrc, dst: &mut BoundedString, size: usize);

    /// Reads a raw block into `buf` and returns the number of bytes stored.
    fn read_mem_block(&mut self, src: &mut dyn StreamSrc, buf: &mut [u8]) -> usize;

    /// Writes an unsigned 8-bit integer.
    fn write_u8(&mut self, src: &mut dyn StreamSrc, endian: Endian, value: u8);
    /// Writes an unsigned 16-bit integer.
    fn write_u16(&mut self, src: &mut dyn StreamSrc, endian: Endian, value: u16);
    /// Writes an unsigned 32-bit integer.
    fn write_u32(&mut self, src: &mut dyn StreamSrc, endian: Endian, value: u32);
    /// Writes an unsigned 64-bit integer.
    fn write_u64(&mut self, src: &mut dyn StreamSrc, endian: Endian, value: u64);
    /// Writes a signed 8-bit integer.
    fn write_i8(&mut self, src: &mut dyn StreamSrc, endian: Endian, value: i8);
    /// Writes a signed 16-bit integer.
    fn write_i16(&mut self, src: &mut dyn StreamSrc, endian: Endian, value: i16);
    /// Writes a signed 32-bit integer.
    fn write_i32(&mut self, src: &mut dyn StreamSrc, endian: Endian, value: i32);
    /// Writes a signed 64-bit integer.
    fn write_i64(&mut self, src: &mut dyn StreamSrc, endian: Endian, value: i64);
    /// Writes a 32-bit float.
    fn write_f32(&mut self, src: &mut dyn StreamSrc, endian: Endian, value: f32);

    /// Writes the first `bits` bits of `data`.
    ///
    /// # Panics
    ///
    /// Panics if `data` is shorter than `bits.div_ceil(8)` bytes.
    fn write_bit(&mut self, src: &mut dyn StreamSrc, data: &[u8], bits: usize);

    /// Writes at most `size` bytes of `value` as a string record.
    fn write_string(&mut self, src: &mut dyn StreamSrc, value: &[u8], size: usize);

    /// Writes `buf` as a raw block.
    fn write_mem_block(&mut self, src: &mut dyn StreamSrc, buf: &[u8]);

    /// Writes a human-readable annotation, such as a generator comment.
    fn write_decoration_text(&mut self, src: &mut dyn StreamSrc, text: &str);

    /// Writes a marker that ends a section independently of any value record.
    fn write_null_char(&mut self, src: &mut dyn StreamSrc);

    /// Skips forward over `offset` units of input.
    fn skip(&mut self, src: &mut dyn StreamSrc, offset: u32);

    /// Completes any pending output.
    fn flush(&mut self, src: &mut dyn StreamSrc);

    /// Returns to the start of the channel.
    fn rewind(&mut self, src: &mut dyn StreamSrc);
}

/// Asserts that a bit-field buffer can hold `bits` bits.
pub(crate) fn check_bit_buffer(len: usize, bits: usize) {
    let needed = bits.div_ceil(8);
    assert!(
        len >= needed,
        "bit field of {bits} bits needs {needed} bytes, buffer has {len}"
    );
}

/// Stores the low `remainder` bits of `value` into `dst`, keeping the high
/// bits `dst` already holds.
pub(crate) fn merge_trailing_bits(dst: &mut u8, value: u8, remainder: usize) {
    debug_assert!((1..8).contains(&remainder));
    let mask = 0xFFu8 << remainder;
    *dst = (*dst & mask) | (value & !mask);
}
