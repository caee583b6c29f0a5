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

//! Binary stream format implementation.
//!
//! This module provides a format that moves values as compact fixed-width
//! bytes, reordered to the caller-chosen byte order.

use crate::config::StreamMode;
use crate::endian::{Endian, EndianScalar};
use crate::format::traits::{check_bit_buffer, merge_trailing_bits};
use crate::format::StreamFormat;
use crate::source::StreamSrc;
use crate::string::{until_nul, BoundedString};

/// Size of the stack buffer used to drain string bytes that do not fit the
/// destination.
const DRAIN_CHUNK_SIZE: usize = 256;

/// Binary stream format.
///
/// `BinaryStreamFormat` writes each value as exactly the bytes its declared
/// size implies and reads back the same count, so the channel cursor always
/// lands on the next record.
///
/// # Wire format
///
/// - **Scalars**: `size_of::<T>()` bytes in the requested byte order
/// - **Strings**: a field of exactly the declared size, NUL padded
/// - **Memory blocks**: raw bytes
/// - **Bit fields**: `bits.div_ceil(8)` bytes, MSB-first
///
/// Decoration text, null markers and flushes produce no bytes.
///
/// # Examples
///
/// ```rust
/// use streamfmt::{BinaryStreamFormat, BoundedString, Endian, StreamFormat};
/// use streamfmt::source::{MemoryStream, StreamSrc};
///
/// let mut format = BinaryStreamFormat::new();
/// let mut src = MemoryStream::new();
///
/// format.write_u16(&mut src, Endian::Big, 0x0102);
/// format.write_string(&mut src, b"hello", 10);
/// assert_eq!(&src.as_bytes()[..2], &[0x01, 0x02]);
/// assert_eq!(src.len(), 12);
///
/// src.rewind();
/// assert_eq!(format.read_u16(&mut src, Endian::Big), 0x0102);
///
/// let mut name = BoundedString::with_capacity(16);
/// format.read_string(&mut src, &mut name, 10);
/// assert_eq!(name.as_bytes(), b"hello");
/// ```
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct BinaryStreamFormat;

impl BinaryStreamFormat {
    /// Creates a binary format.
    #[must_use]
    pub fn new() -> Self {
        Self
    }

    fn read_scalar<T: EndianScalar>(src: &mut dyn StreamSrc, endian: Endian) -> T {
        let mut raw = T::Bytes::default();
        src.read(raw.as_mut());
        endian.to_host(T::from_ne_bytes(raw))
    }

    fn write_scalar<T: EndianScalar>(src: &mut dyn StreamSrc, endian: Endian, value: T) {
        src.write(endian.from_host(value).to_ne_bytes().as_ref());
    }

    /// Consumes `count` bytes from the channel without storing them.
    fn drain(src: &mut dyn StreamSrc, mut count: usize) {
        let mut chunk = [0u8; DRAIN_CHUNK_SIZE];
        while count > 0 {
            let want = count.min(DRAIN_CHUNK_SIZE);
            let got = src.read(&mut chunk[..want]);
            if got == 0 {
                break;
            }
            count -= got;
        }
    }
}

macro_rules! binary_scalar_ops {
    ($($ty:ty => $read:ident, $write:ident;)*) => {
        $(
            fn $read(&mut self, src: &mut dyn StreamSrc, endian: Endian) -> $ty {
                Self::read_scalar::<$ty>(src, endian)
            }

            fn $write(&mut self, src: &mut dyn StreamSrc, endian: Endian, value: $ty) {
                Self::write_scalar::<$ty>(src, endian, value);
            }
        )*
    };
}

impl StreamFormat for BinaryStreamFormat {
    fn mode(&self) -> StreamMode {
        StreamMode::Binary
    }

    binary_scalar_ops! {
        u8 => read_u8, write_u8;
        u16 => read_u16, write_u16;
        u32 => read_u32, write_u32;
        u64 => read_u64, write_u64;
        i8 => read_i8, write_i8;
        i16 => read_i16, write_i16;
        i32 => read_i32, write_i32;
        i64 => read_i64, write_i64;
    }

    fn read_f32(&mut self, src: &mut dyn StreamSrc, endian: Endian) -> f32 {
        let raw = Self::read_scalar::<u32>(src, Endian::native());
        endian.to_host_f32(raw)
    }

    fn write_f32(&mut self, src: &mut dyn StreamSrc, endian: Endian, value: f32) {
        Self::write_scalar::<u32>(src, Endian::native(), endian.from_host_f32(value));
    }

    fn read_bit(&mut self, src: &mut dyn StreamSrc, data: &mut [u8], bits: usize) {
        check_bit_buffer(data.len(), bits);

        let full = bits / 8;
        src.read(&mut data[..full]);

        let remainder = bits % 8;
        if remainder == 0 {
            return;
        }

        let mut last = [0u8; 1];
        src.read(&mut last);
        merge_trailing_bits(&mut data[full], last[0], remainder);
    }

    fn write_bit(&mut self, src: &mut dyn StreamSrc, data: &[u8], bits: usize) {
        check_bit_buffer(data.len(), bits);

        let full = bits / 8;
        src.write(&data[..full]);

        // The trailing byte goes out whole, unused high bits included.
        if bits % 8 != 0 {
            src.write(&data[full..=full]);
        }
    }

    fn read_string(&mut self, src: &mut dyn StreamSrc, dst: &mut BoundedString, size: usize) {
        let capacity = dst.capacity();
        let (size, overflow) = if size > capacity {
            (capacity, size - capacity)
        } else {
            (size, 0)
        };

        // Content ends at the bytes actually read, the last usable slot, or
        // the first NUL.
        let got = src.read(&mut dst.buffer_mut()[..size]);
        dst.trim(got);

        if overflow != 0 {
            Self::drain(src, overflow);
        }
    }

    fn read_mem_block(&mut self, src: &mut dyn StreamSrc, buf: &mut [u8]) -> usize {
        src.read(buf)
    }

    fn write_string(&mut self, src: &mut dyn StreamSrc, value: &[u8], size: usize) {
        let value = until_nul(value);
        let len = value.len().min(size);
        src.write(&value[..len]);

        let padding = [0u8; DRAIN_CHUNK_SIZE];
        let mut remaining = size - len;
        while remaining > 0 {
            let count = remaining.min(DRAIN_CHUNK_SIZE);
            src.write(&padding[..count]);
            remaining -= count;
        }
    }

    fn write_mem_block(&mut self, src: &mut dyn StreamSrc, buf: &[u8]) {
        src.write(buf);
    }

    fn write_decoration_text(&mut self, _src: &mut dyn StreamSrc, _text: &str) {}

    fn write_null_char(&mut self, _src: &mut dyn StreamSrc) {}

    fn skip(&mut self, src: &mut dyn StreamSrc, offset: u32) {
        src.skip(i64::from(offset));
    }

    fn flush(&mut self, _src: &mut dyn StreamSrc) {}

    fn rewind(&mut self, src: &mut dyn StreamSrc) {
        src.rewind();
    }
}
