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

//! Stream front end.
//!
//! A [`Stream`] ties a byte channel to a format and a byte order so that callers
//! can read and write typed values without threading those through every
//! call.

use std::fmt;

use crate::config::{StreamConfig, StreamMode, TextFormatConfig};
use crate::endian::Endian;
use crate::error::ConfigError;
use crate::format::{BinaryStreamFormat, StreamFormat, TextStreamFormat};
use crate::source::StreamSrc;
use crate::string::BoundedString;

#[cfg(feature = "observability")]
use tracing::{debug, instrument};

/// A byte channel paired with a stream format.
///
/// The stream owns its channel. The format can be switched at any point with
/// [`set_mode`](Self::set_mode); the byte order set with
/// [`set_binary_endian`](Self::set_binary_endian) applies to binary scalars
/// and is ignored in text mode.
///
/// # Examples
///
/// ```rust
/// use streamfmt::{BoundedString, Endian, Stream, StreamMode};
/// use streamfmt::source::MemoryStream;
///
/// let mut stream = Stream::new(MemoryStream::new(), StreamMode::Text);
/// stream.write_decoration_text("# inventory\n");
/// stream.write_string("sword", 32);
/// stream.write_u32(3);
/// assert_eq!(stream.src().as_bytes(), b"# inventory\n\"sword\"3 ");
///
/// stream.rewind();
/// let mut name = BoundedString::with_capacity(32);
/// stream.read_string(&mut name, 32);
/// assert_eq!(name.as_bytes(), b"sword");
/// assert_eq!(stream.read_u32(), 3);
///
/// stream.set_mode(StreamMode::Binary);
/// stream.set_binary_endian(Endian::Big);
/// stream.write_u16(0x0102);
/// assert!(stream.src().as_bytes().ends_with(&[0x01, 0x02]));
/// ```
pub struct Stream<S: StreamSrc> {
    src: S,
    format: Box<dyn StreamFormat>,
    endian: Endian,
    text_config: TextFormatConfig,
}

macro_rules! stream_scalar_ops {
    ($($ty:ty => $read:ident, $write:ident;)*) => {
        $(
            #[doc = concat!("Reads a `", stringify!($ty), "`.")]
            pub fn $read(&mut self) -> $ty {
                self.format.$read(&mut self.src, self.endian)
            }

            #[doc = concat!("Writes a `", stringify!($ty), "`.")]
            pub fn $write(&mut self, value: $ty) {
                self.format.$write(&mut self.src, self.endian, value);
            }
        )*
    };
}

impl<S: StreamSrc> Stream<S> {
    /// Creates a stream over `src` in `mode`, with native byte order and
    /// default text settings.
    pub fn new(src: S, mode: StreamMode) -> Self {
        #[cfg(feature = "observability")]
        debug!(mode = %mode, "Stream created");

        Self {
            src,
            format: mode.into_format(),
            endian: Endian::native(),
            text_config: TextFormatConfig::default(),
        }
    }

    /// Creates a stream over `src` from configuration.
    ///
    /// # Errors
    ///
    /// Returns an error if `config` does not validate.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use streamfmt::{Endian, Stream, StreamConfig, StreamMode};
    /// use streamfmt::source::MemoryStream;
    ///
    /// let config = StreamConfig::new(StreamMode::Binary).with_endian(Endian::Little);
    /// let mut stream = Stream::from_config(MemoryStream::new(), &config).unwrap();
    /// stream.write_u16(0x0102);
    /// assert_eq!(stream.src().as_bytes(), &[0x02, 0x01]);
    /// ```
    pub fn from_config(src: S, config: &StreamConfig) -> Result<Self, ConfigError> {
        let format = config.build_format()?;

        #[cfg(feature = "observability")]
        debug!(
            mode = %config.mode(),
            endian = %config.endian(),
            "Stream created from configuration"
        );

        Ok(Self {
            src,
            format,
            endian: config.endian(),
            text_config: config.text().clone(),
        })
    }

    /// Creates a stream over `src` driven by a caller-supplied format.
    ///
    /// A text format's settings are kept for later switches back to text
    /// mode; otherwise the defaults are used.
    pub fn with_format(src: S, format: Box<dyn StreamFormat>) -> Self {
        let text_config = format.text_config().cloned().unwrap_or_default();

        #[cfg(feature = "observability")]
        debug!(mode = %format.mode(), "Stream created with custom format");

        Self {
            src,
            format,
            endian: Endian::native(),
            text_config,
        }
    }

    /// Returns the current wire representation.
    pub fn mode(&self) -> StreamMode {
        self.format.mode()
    }

    /// Switches the wire representation.
    ///
    /// The channel position is kept, so a stream may mix a binary header with
    /// a text body. A new text format uses the text settings the stream was
    /// configured with.
    #[cfg_attr(feature = "observability", instrument(level = "debug", skip(self)))]
    pub fn set_mode(&mut self, mode: StreamMode) {
        #[cfg(feature = "observability")]
        debug!(from = %self.mode(), to = %mode, "Stream mode changed");

        self.format = match mode {
            StreamMode::Binary => Box::new(BinaryStreamFormat::new()),
            StreamMode::Text => {
                Box::new(TextStreamFormat::from_validated(self.text_config.clone()))
            }
        };
    }

    /// Returns the byte order of binary scalars.
    pub fn binary_endian(&self) -> Endian {
        self.endian
    }

    /// Sets the byte order of binary scalars.
    pub fn set_binary_endian(&mut self, endian: Endian) {
        #[cfg(feature = "observability")]
        debug!(endian = %endian, "Stream byte order changed");

        self.endian = endian;
    }

    /// Returns the text settings used when switching to text mode.
    pub fn text_config(&self) -> &TextFormatConfig {
        &self.text_config
    }

    /// Returns the underlying channel.
    pub fn src(&self) -> &S {
        &self.src
    }

    /// Returns the underlying channel mutably.
    pub fn src_mut(&mut self) -> &mut S {
        &mut self.src
    }

    /// Consumes the stream and returns the channel.
    pub fn into_inner(self) -> S {
        self.src
    }

    stream_scalar_ops! {
        u8 => read_u8, write_u8;
        u16 => read_u16, write_u16;
        u32 => read_u32, write_u32;
        u64 => read_u64, write_u64;
        i8 => read_i8, write_i8;
        i16 => read_i16, write_i16;
        i32 => read_i32, write_i32;
        i64 => read_i64, write_i64;
        f32 => read_f32, write_f32;
    }

    /// Reads a `bits`-long bit field into `data`.
    ///
    /// # Panics
    ///
    /// Panics if `data` is shorter than `bits.div_ceil(8)` bytes.
    pub fn read_bit(&mut self, data: &mut [u8], bits: usize) {
        self.format.read_bit(&mut self.src, data, bits);
    }

    /// Writes the first `bits` bits of `data`.
    ///
    /// # Panics
    ///
    /// Panics if `data` is shorter than `bits.div_ceil(8)` bytes.
    pub fn write_bit(&mut self, data: &[u8], bits: usize) {
        self.format.write_bit(&mut self.src, data, bits);
    }

    /// Reads a string record of declared `size` into `dst`.
    pub fn read_string(&mut self, dst: &mut BoundedString, size: usize) {
        self.format.read_string(&mut self.src, dst, size);
    }

    /// Writes at most `size` bytes of `value` as a string record.
    pub fn write_string(&mut self, value: impl AsRef<[u8]>, size: usize) {
        self.format.write_string(&mut self.src, value.as_ref(), size);
    }

    /// Reads a raw block into `buf`, returning the number of bytes stored.
    pub fn read_mem_block(&mut self, buf: &mut [u8]) -> usize {
        self.format.read_mem_block(&mut self.src, buf)
    }

    /// Writes `buf` as a raw block.
    pub fn write_mem_block(&mut self, buf: &[u8]) {
        self.format.write_mem_block(&mut self.src, buf);
    }

    /// Writes an annotation. Binary streams drop it.
    pub fn write_decoration_text(&mut self, text: &str) {
        self.format.write_decoration_text(&mut self.src, text);
    }

    /// Writes a section-end marker. Binary streams drop it.
    pub fn write_null_char(&mut self) {
        self.format.write_null_char(&mut self.src);
    }

    /// Skips `offset` bytes in binary mode, or one token in text mode.
    pub fn skip(&mut self, offset: u32) {
        self.format.skip(&mut self.src, offset);
    }

    /// Completes any pending output.
    pub fn flush(&mut self) {
        self.format.flush(&mut self.src);
    }

    /// Returns to the start of the channel.
    pub fn rewind(&mut self) {
        self.format.rewind(&mut self.src);
    }
}

impl<S: StreamSrc> fmt::Debug for Stream<S> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Stream")
            .field("mode", &self.mode())
            .field("endian", &self.endian)
            .field("text_config", &self.text_config)
            .finish()
    }
}
