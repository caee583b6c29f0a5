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

//! Text stream format.

use std::fmt::{self, Write as _};

use base64::engine::general_purpose::STANDARD;
use base64::Engine as _;

use crate::config::{StreamMode, TextFormatConfig};
use crate::endian::Endian;
use crate::error::ConfigError;
use crate::format::number::{parse_f32, parse_integer};
use crate::format::tokenizer::Tokenizer;
use crate::format::traits::{check_bit_buffer, merge_trailing_bits};
use crate::format::StreamFormat;
use crate::source::StreamSrc;
use crate::string::{until_nul, BoundedString};

#[cfg(feature = "observability")]
use tracing::debug;

/// Human-readable stream format.
///
/// Every value is one token. Scalars are written as decimal text followed by
/// the first configured terminator; reads take the next token and parse it,
/// yielding zero when it is not a number. The endian argument of the scalar
/// operations is ignored.
///
/// # Wire format
///
/// - **Integers**: decimal; reads also accept `0x` hex and leading-`0` octal
/// - **Floats**: fixed-point with eight decimals
/// - **Strings**: double-quoted, `"` escaped as `\"`, no terminator
/// - **Memory blocks**: double-quoted standard base64
/// - **Bit fields**: `0b` followed by one digit per bit
///
/// Input may contain `//`, `/* */` and leading-`#` comments.
///
/// Each instance owns a scratch buffer that holds the token being read. Its
/// capacity bounds the longest token that can be read back and the largest
/// memory block that can be written; longer tokens are truncated and larger
/// blocks are skipped.
///
/// # Examples
///
/// ```rust
/// use streamfmt::{Endian, StreamFormat, TextStreamFormat};
/// use streamfmt::source::{MemoryStream, StreamSrc};
///
/// let mut format = TextStreamFormat::new();
/// let mut src = MemoryStream::new();
///
/// format.write_i32(&mut src, Endian::Little, -7);
/// format.write_f32(&mut src, Endian::Little, 0.5);
/// assert_eq!(src.as_bytes(), b"-7 0.50000000 ");
///
/// src.rewind();
/// assert_eq!(format.read_i32(&mut src, Endian::Little), -7);
/// assert_eq!(format.read_f32(&mut src, Endian::Little), 0.5);
/// ```
#[derive(Debug, Clone)]
pub struct TextStreamFormat {
    config: TextFormatConfig,
    scratch: BoundedString,
}

impl TextStreamFormat {
    /// Creates a text format with the default terminators and scratch size.
    #[must_use]
    pub fn new() -> Self {
        Self::from_validated(TextFormatConfig::default())
    }

    /// Creates a text format from explicit settings.
    ///
    /// # Errors
    ///
    /// Returns an error if `config` does not validate.
    pub fn from_config(config: TextFormatConfig) -> Result<Self, ConfigError> {
        config.validate()?;
        Ok(Self::from_validated(config))
    }

    /// Creates a text format from settings that already passed validation.
    pub(crate) fn from_validated(config: TextFormatConfig) -> Self {
        let scratch = BoundedString::with_capacity(config.scratch_capacity());
        Self { config, scratch }
    }

    /// Returns the settings this format was built with.
    pub fn config(&self) -> &TextFormatConfig {
        &self.config
    }

    /// Reads the next token into the scratch buffer.
    fn next_token(&mut self, src: &mut dyn StreamSrc) {
        Tokenizer::new(self.config.terminators().as_bytes())
            .next_token(src, &mut self.scratch);
    }

    fn write_terminator(&self, src: &mut dyn StreamSrc) {
        src.write(&[self.config.primary_terminator()]);
    }

    /// Renders `args` into the scratch buffer and writes it as one token.
    fn write_formatted(&mut self, src: &mut dyn StreamSrc, args: fmt::Arguments<'_>) {
        self.scratch.clear();
        // BoundedString truncates instead of failing.
        let _ = self.scratch.write_fmt(args);
        src.write(self.scratch.as_bytes());
        self.write_terminator(src);
    }

    fn read_integer<T>(&mut self, src: &mut dyn StreamSrc) -> T
    where
        T: TryFrom<i128> + Default,
    {
        self.next_token(src);
        parse_integer(self.scratch.as_bytes())
            .and_then(|value| T::try_from(value).ok())
            .unwrap_or_default()
    }
}

impl Default for TextStreamFormat {
    fn default() -> Self {
        Self::new()
    }
}

macro_rules! text_scalar_ops {
    ($($ty:ty => $read:ident, $write:ident;)*) => {
        $(
            fn $read(&mut self, src: &mut dyn StreamSrc, _endian: Endian) -> $ty {
                self.read_integer::<$ty>(src)
            }

            fn $write(&mut self, src: &mut dyn StreamSrc, _endian: Endian, value: $ty) {
                self.write_formatted(src, format_args!("{value}"));
            }
        )*
    };
}

impl StreamFormat for TextStreamFormat {
    fn mode(&self) -> StreamMode {
        StreamMode::Text
    }

    fn text_config(&self) -> Option<&TextFormatConfig> {
        Some(&self.config)
    }

    text_scalar_ops! {
        u8 => read_u8, write_u8;
        u16 => read_u16, write_u16;
        u32 => read_u32, write_u32;
        u64 => read_u64, write_u64;
        i8 => read_i8, write_i8;
        i16 => read_i16, write_i16;
        i32 => read_i32, write_i32;
        i64 => read_i64, write_i64;
    }

    fn read_f32(&mut self, src: &mut dyn StreamSrc, _endian: Endian) -> f32 {
        self.next_token(src);
        parse_f32(self.scratch.as_bytes()).unwrap_or_default()
    }

    fn write_f32(&mut self, src: &mut dyn StreamSrc, _endian: Endian, value: f32) {
        self.write_formatted(src, format_args!("{value:.8}"));
    }

    /// Reads a `0b` digit token. Digits missing from the token read as zero.
    /// A token without the prefix leaves `data` untouched.
    fn read_bit(&mut self, src: &mut dyn StreamSrc, data: &mut [u8], bits: usize) {
        check_bit_buffer(data.len(), bits);
        self.next_token(src);

        let Some(digits) = self.scratch.as_bytes().strip_prefix(b"0b") else {
            #[cfg(feature = "observability")]
            debug!(token = %self.scratch, "Bit field token lacks the 0b prefix");
            return;
        };

        let mut current = 0u8;
        for index in 0..bits {
            let bit = u8::from(digits.get(index) == Some(&b'1'));
            current = (current << 1) | bit;
            if (index + 1) % 8 == 0 {
                data[index / 8] = current;
                current = 0;
            }
        }

        let remainder = bits % 8;
        if remainder != 0 {
            merge_trailing_bits(&mut data[bits / 8], current, remainder);
        }
    }

    /// Copies the next token into `dst`. The declared size is not used; the
    /// capacity of `dst` bounds the result.
    fn read_string(&mut self, src: &mut dyn StreamSrc, dst: &mut BoundedString, _size: usize) {
        self.next_token(src);
        dst.copy_from(self.scratch.as_bytes());
    }

    fn read_mem_block(&mut self, src: &mut dyn StreamSrc, buf: &mut [u8]) -> usize {
        self.next_token(src);
        match STANDARD.decode(self.scratch.as_bytes()) {
            Ok(decoded) => {
                let len = decoded.len().min(buf.len());
                buf[..len].copy_from_slice(&decoded[..len]);
                len
            }
            Err(_err) => {
                #[cfg(feature = "observability")]
                debug!(error = %_err, "Memory block token is not valid base64");
                0
            }
        }
    }

    /// Writes `0b` and one digit per bit. Whole bytes are written MSB-first;
    /// a trailing partial byte contributes its low `bits % 8` bits.
    fn write_bit(&mut self, src: &mut dyn StreamSrc, data: &[u8], bits: usize) {
        check_bit_buffer(data.len(), bits);

        let mut text = Vec::with_capacity(bits + 3);
        text.extend_from_slice(b"0b");
        for (index, &byte) in data.iter().take(bits.div_ceil(8)).enumerate() {
            let width = (bits - index * 8).min(8);
            text.extend((0..width).rev().map(|bit| {
                if byte & (1 << bit) != 0 {
                    b'1'
                } else {
                    b'0'
                }
            }));
        }
        text.push(self.config.primary_terminator());
        src.write(&text);
    }

    fn write_string(&mut self, src: &mut dyn StreamSrc, value: &[u8], size: usize) {
        let value = until_nul(value);
        let value = &value[..value.len().min(size)];

        let mut quoted = Vec::with_capacity(value.len() + 2);
        quoted.push(b'"');
        for &byte in value {
            if byte == b'"' {
                quoted.push(b'\\');
            }
            quoted.push(byte);
        }
        quoted.push(b'"');
        src.write(&quoted);
    }

    /// Writes `buf` as a quoted base64 token, or nothing at all if the
    /// encoding would not fit the scratch buffer.
    fn write_mem_block(&mut self, src: &mut dyn StreamSrc, buf: &[u8]) {
        let capacity = self.scratch.capacity();
        let fits = base64::encoded_len(buf.len(), true).is_some_and(|len| len + 1 < capacity);
        if !fits {
            #[cfg(feature = "observability")]
            debug!(
                size = buf.len(),
                capacity, "Memory block too large for scratch buffer, skipped"
            );
            return;
        }

        self.scratch.clear();
        match STANDARD.encode_slice(buf, self.scratch.buffer_mut()) {
            Ok(len) => self.scratch.trim(len),
            Err(_err) => {
                #[cfg(feature = "observability")]
                debug!(error = %_err, "Memory block encoding failed, skipped");
                return;
            }
        }

        src.write(b"\"");
        src.write(self.scratch.as_bytes());
        src.write(b"\"");
        self.write_terminator(src);
    }

    fn write_decoration_text(&mut self, src: &mut dyn StreamSrc, text: &str) {
        src.write(text.as_bytes());
    }

    fn write_null_char(&mut self, src: &mut dyn StreamSrc) {
        src.write(&[0]);
    }

    /// Consumes exactly one token; `offset` is ignored.
    fn skip(&mut self, src: &mut dyn StreamSrc, _offset: u32) {
        self.next_token(src);
    }

    fn flush(&mut self, _src: &mut dyn StreamSrc) {}

    fn rewind(&mut self, src: &mut dyn StreamSrc) {
        src.rewind();
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::format::BinaryStreamFormat;
    use crate::source::MemoryStream;

    const E: Endian = Endian::Big;

    fn reader(input: &str) -> (TextStreamFormat, MemoryStream) {
        (TextStreamFormat::new(), MemoryStream::from(input))
    }

    #[test]
    fn test_text_reports_its_settings() {
        let config = TextFormatConfig::new().with_terminators("\t");
        let format = TextStreamFormat::from_config(config.clone()).unwrap();
        assert_eq!(format.text_config(), Some(&config));
        assert_eq!(BinaryStreamFormat::new().text_config(), None);
    }

    #[test]
    fn test_text_u32_wire_format() {
        let mut format = TextStreamFormat::new();
        let mut src = MemoryStream::new();
        format.write_u32(&mut src, E, 0xCAFE);
        format.write_i8(&mut src, E, -128);
        assert_eq!(src.as_bytes(), b"51966 -128 ");
    }

    #[test]
    fn test_text_u32_roundtrip() {
        let mut format = TextStreamFormat::new();
        let mut src = MemoryStream::new();
        let values = [0u32, 1, 1 << 31, u32::MAX];
        for value in values {
            format.write_u32(&mut src, E, value);
        }
        src.rewind();
        for value in values {
            assert_eq!(format.read_u32(&mut src, E), value);
        }
    }

    #[test]
    fn test_text_signed_extremes_roundtrip() {
        let mut format = TextStreamFormat::new();
        let mut src = MemoryStream::new();
        format.write_i8(&mut src, E, i8::MIN);
        format.write_i16(&mut src, E, i16::MAX);
        format.write_i32(&mut src, E, -1);
        format.write_i64(&mut src, E, i64::MIN);
        format.write_u64(&mut src, E, u64::MAX);
        src.rewind();
        assert_eq!(format.read_i8(&mut src, E), i8::MIN);
        assert_eq!(format.read_i16(&mut src, E), i16::MAX);
        assert_eq!(format.read_i32(&mut src, E), -1);
        assert_eq!(format.read_i64(&mut src, E), i64::MIN);
        assert_eq!(format.read_u64(&mut src, E), u64::MAX);
    }

    #[test]
    fn test_text_integer_bases() {
        let (mut format, mut src) = reader("0x10 010 -5 0");
        assert_eq!(format.read_u32(&mut src, E), 16);
        assert_eq!(format.read_u16(&mut src, E), 8);
        assert_eq!(format.read_i64(&mut src, E), -5);
        assert_eq!(format.read_u8(&mut src, E), 0);
    }

    #[test]
    fn test_text_integer_parse_failure_yields_zero() {
        let (mut format, mut src) = reader("junk 300 -1 12ab");
        assert_eq!(format.read_u32(&mut src, E), 0);
        assert_eq!(format.read_u8(&mut src, E), 0);
        assert_eq!(format.read_u32(&mut src, E), 0);
        assert_eq!(format.read_i32(&mut src, E), 0);
        assert_eq!(format.read_i32(&mut src, E), 0);
    }

    #[test]
    fn test_text_f32() {
        let mut format = TextStreamFormat::new();
        let mut src = MemoryStream::new();
        format.write_f32(&mut src, E, 1.5);
        assert_eq!(src.as_bytes(), b"1.50000000 ");

        for value in [0.1f32, -3.25, 1.0e-3] {
            format.write_f32(&mut src, E, value);
        }
        src.rewind();
        assert_eq!(format.read_f32(&mut src, E), 1.5);
        assert_eq!(format.read_f32(&mut src, E), 0.1);
        assert_eq!(format.read_f32(&mut src, E), -3.25);
        assert_eq!(format.read_f32(&mut src, E), 1.0e-3);
    }

    #[test]
    fn test_text_f32_max_fits_scratch() {
        let mut format = TextStreamFormat::new();
        let mut src = MemoryStream::new();
        format.write_f32(&mut src, E, f32::MAX);
        src.rewind();
        assert_eq!(format.read_f32(&mut src, E), f32::MAX);
    }

    #[test]
    fn test_text_f32_lenient_parse() {
        let (mut format, mut src) = reader("2.5xyz abc");
        assert_eq!(format.read_f32(&mut src, E), 2.5);
        assert_eq!(format.read_f32(&mut src, E), 0.0);
        assert_eq!(format.read_f32(&mut src, E), 0.0);
    }

    #[test]
    fn test_text_bit_wire_format_and_roundtrip() {
        let mut format = TextStreamFormat::new();
        let mut src = MemoryStream::new();
        format.write_bit(&mut src, &[0b1011_0110, 0b0000_0010], 10);
        assert_eq!(src.as_bytes(), b"0b1011011010 ");

        src.rewind();
        let mut data = [0u8; 2];
        format.read_bit(&mut src, &mut data, 10);
        assert_eq!(data, [0b1011_0110, 0b0000_0010]);
    }

    #[test]
    fn test_text_read_bit_merges_trailing_byte() {
        let (mut format, mut src) = reader("0b1111111110");
        let mut data = [0x00, 0xFF];
        format.read_bit(&mut src, &mut data, 10);
        assert_eq!(data, [0xFF, 0b1111_1110]);
    }

    #[test]
    fn test_text_read_bit_missing_digits_are_zero() {
        let (mut format, mut src) = reader("0b1");
        let mut data = [0xFF];
        format.read_bit(&mut src, &mut data, 8);
        assert_eq!(data, [0b1000_0000]);
    }

    #[test]
    fn test_text_read_bit_without_prefix_is_noop() {
        let (mut format, mut src) = reader("1010 next");
        let mut data = [0xAA];
        format.read_bit(&mut src, &mut data, 4);
        assert_eq!(data, [0xAA]);
        assert_eq!(format.read_u8(&mut src, E), 0);
    }

    #[test]
    #[should_panic(expected = "needs 2 bytes")]
    fn test_text_write_bit_short_buffer_panics() {
        let mut format = TextStreamFormat::new();
        let mut src = MemoryStream::new();
        format.write_bit(&mut src, &[0], 9);
    }

    #[test]
    fn test_text_write_string_escapes_quotes() {
        let mut format = TextStreamFormat::new();
        let mut src = MemoryStream::new();
        format.write_string(&mut src, br#"say "hi""#, 64);
        assert_eq!(src.as_bytes(), br#""say \"hi\"""#);

        src.rewind();
        let mut dst = BoundedString::with_capacity(32);
        format.read_string(&mut src, &mut dst, 64);
        assert_eq!(dst.as_bytes(), br#"say "hi""#);
    }

    #[test]
    fn test_text_write_string_truncates_to_size() {
        let mut format = TextStreamFormat::new();
        let mut src = MemoryStream::new();
        format.write_string(&mut src, b"hello", 3);
        format.write_string(&mut src, b"ab\0cd", 10);
        assert_eq!(src.as_bytes(), b"\"hel\"\"ab\"");
    }

    #[test]
    fn test_text_strings_and_numbers_interleave() {
        let mut format = TextStreamFormat::new();
        let mut src = MemoryStream::new();
        format.write_string(&mut src, b"a b", 16);
        format.write_u16(&mut src, E, 42);
        format.write_string(&mut src, b"", 16);
        format.write_string(&mut src, b"z", 16);
        src.rewind();

        let mut dst = BoundedString::with_capacity(16);
        format.read_string(&mut src, &mut dst, 16);
        assert_eq!(dst.as_bytes(), b"a b");
        assert_eq!(format.read_u16(&mut src, E), 42);
        format.read_string(&mut src, &mut dst, 16);
        assert!(dst.is_empty());
        format.read_string(&mut src, &mut dst, 16);
        assert_eq!(dst.as_bytes(), b"z");
    }

    #[test]
    fn test_text_read_string_truncates_to_destination() {
        let (mut format, mut src) = reader("abcdefgh 7");
        let mut dst = BoundedString::with_capacity(4);
        format.read_string(&mut src, &mut dst, 100);
        assert_eq!(dst.as_bytes(), b"abc");
        assert_eq!(format.read_u8(&mut src, E), 7);
    }

    #[test]
    fn test_text_long_token_truncated_by_scratch() {
        let long = "x".repeat(300);
        let (mut format, mut src) = reader(&format!("{long} 5"));
        let mut dst = BoundedString::with_capacity(512);
        format.read_string(&mut src, &mut dst, 512);
        assert_eq!(dst.len(), 127);
        assert_eq!(format.read_u8(&mut src, E), 5);
    }

    #[test]
    fn test_text_mem_block_roundtrip() {
        let mut format = TextStreamFormat::new();
        let mut src = MemoryStream::new();
        format.write_mem_block(&mut src, b"\x00\x01\x02hello");
        assert_eq!(src.as_bytes(), b"\"AAECaGVsbG8=\" ");

        src.rewind();
        let mut buf = [0u8; 16];
        assert_eq!(format.read_mem_block(&mut src, &mut buf), 8);
        assert_eq!(&buf[..8], b"\x00\x01\x02hello");
    }

    #[test]
    fn test_text_mem_block_zero_length_roundtrip() {
        let mut format = TextStreamFormat::new();
        let mut src = MemoryStream::new();
        format.write_mem_block(&mut src, &[]);
        format.write_u8(&mut src, E, 9);
        assert_eq!(src.as_bytes(), b"\"\" 9 ");

        src.rewind();
        let mut buf = [0xEEu8; 4];
        assert_eq!(format.read_mem_block(&mut src, &mut buf), 0);
        assert_eq!(buf, [0xEE; 4]);
        assert_eq!(format.read_u8(&mut src, E), 9);
    }

    #[test]
    fn test_text_mem_block_limit() {
        let mut format = TextStreamFormat::new();
        let mut src = MemoryStream::new();
        format.write_mem_block(&mut src, &[7u8; 93]);
        assert_eq!(src.len(), 124 + 3);

        let mut src = MemoryStream::new();
        format.write_mem_block(&mut src, &[7u8; 94]);
        assert!(src.is_empty());
    }

    #[test]
    fn test_text_read_mem_block_truncates_and_rejects_garbage() {
        let (mut format, mut src) = reader("\"aGVsbG8=\" \"!!!\"");
        let mut buf = [0u8; 3];
        assert_eq!(format.read_mem_block(&mut src, &mut buf), 3);
        assert_eq!(&buf, b"hel");
        assert_eq!(format.read_mem_block(&mut src, &mut buf), 0);
    }

    #[test]
    fn test_text_skip_consumes_one_token() {
        for offset in [0, 1, 4, u32::MAX] {
            let (mut format, mut src) = reader("10 20 30");
            format.skip(&mut src, offset);
            assert_eq!(format.read_u32(&mut src, E), 20);
        }
    }

    #[test]
    fn test_text_comments_are_ignored() {
        let (mut format, mut src) = reader("# generated\n1 // one\n2 /* two */ 3");
        assert_eq!(format.read_u32(&mut src, E), 1);
        assert_eq!(format.read_u32(&mut src, E), 2);
        assert_eq!(format.read_u32(&mut src, E), 3);
    }

    #[test]
    fn test_text_decoration_and_null_char() {
        let mut format = TextStreamFormat::new();
        let mut src = MemoryStream::new();
        format.write_decoration_text(&mut src, "// header\n");
        format.write_u8(&mut src, E, 3);
        format.write_null_char(&mut src);
        format.flush(&mut src);
        assert_eq!(src.as_bytes(), b"// header\n3 \0");

        format.rewind(&mut src);
        assert_eq!(format.read_u8(&mut src, E), 3);
    }

    #[test]
    fn test_text_custom_terminators() {
        let config = TextFormatConfig::new().with_terminators("\n");
        let mut format = TextStreamFormat::from_config(config).unwrap();
        let mut src = MemoryStream::new();
        format.write_u8(&mut src, E, 1);
        format.write_u8(&mut src, E, 2);
        assert_eq!(src.as_bytes(), b"1\n2\n");
        assert_eq!(format.config().terminators(), "\n");
    }

    #[test]
    fn test_text_from_config_rejects_invalid() {
        let config = TextFormatConfig::new().with_scratch_capacity(8);
        assert!(matches!(
            TextStreamFormat::from_config(config),
            Err(ConfigError::ScratchCapacityTooSmall { .. })
        ));
    }

    #[test]
    fn test_text_larger_scratch_allows_larger_blocks() {
        let config = TextFormatConfig::new().with_scratch_capacity(1024);
        let mut format = TextStreamFormat::from_config(config).unwrap();
        let mut src = MemoryStream::new();
        let block = [0x5Au8; 600];
        format.write_mem_block(&mut src, &block);
        src.rewind();
        let mut buf = [0u8; 600];
        assert_eq!(format.read_mem_block(&mut src, &mut buf), 600);
        assert_eq!(buf, block);
    }

    #[test]
    fn test_text_mode() {
        assert_eq!(TextStreamFormat::new().mode(), StreamMode::Text);
    }
}
