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

#![doc = include_str!("../../README.md")]
#![warn(missing_docs)]
#![warn(clippy::all)]
#![deny(unsafe_code)]

//! # streamfmt - Dual-Mode Stream Serialization
//!
//! streamfmt reads and writes typed values over a byte channel in one of two
//! wire representations behind a single API:
//!
//! - **Binary**: fixed-width scalars in a caller-chosen byte order, fixed-size
//!   NUL-padded strings, raw memory blocks and MSB-first bit fields
//! - **Text**: whitespace-delimited tokens with quoted strings, base64 memory
//!   blocks, `0b` bit fields and `//`, `/* */` and `#` comments
//!
//! ## Architecture
//!
//! - **[`source`]**: the [`StreamSrc`](source::StreamSrc) byte channel and its
//!   in-memory and `std::io` implementations
//! - **[`format`]**: the [`StreamFormat`] trait, both formats and the text
//!   tokenizer
//! - **[`endian`]**: byte-order conversion
//! - **[`string`]**: the fixed-capacity [`BoundedString`]
//! - **[`config`]**: mode, byte order and text settings
//! - **[`stream`]**: the [`Stream`] front end
//!
//! ## Quick Start
//!
//! ```rust
//! use streamfmt::{Endian, Stream, StreamMode};
//! use streamfmt::source::MemoryStream;
//!
//! let mut stream = Stream::new(MemoryStream::new(), StreamMode::Binary);
//! stream.set_binary_endian(Endian::Big);
//! stream.write_u32(7);
//! stream.write_f32(1.25);
//!
//! stream.rewind();
//! assert_eq!(stream.read_u32(), 7);
//! assert_eq!(stream.read_f32(), 1.25);
//! ```
//!
//! ## Error Handling
//!
//! Stream operations never fail. Oversized strings are truncated, unparsable
//! text yields zero, and memory blocks too large for the text scratch buffer
//! are skipped. Only configuration can be rejected, with a [`ConfigError`].
//!
//! ## Feature Flags
//!
//! - `serde` (default): `Serialize`/`Deserialize` for the configuration types
//! - `observability` (default): `tracing` events for mode changes, skipped
//!   writes, tokens and I/O errors
//!
//! ## Safety
//!
//! streamfmt is written in 100% safe Rust with `#![deny(unsafe_code)]`.

pub mod config;
pub mod endian;
pub mod error;
pub mod format;
pub mod source;
pub mod stream;
pub mod string;

pub use config::{StreamConfig, StreamMode, TextFormatConfig};
pub use endian::Endian;
pub use error::ConfigError;
pub use format::{BinaryStreamFormat, StreamFormat, TextStreamFormat};
pub use stream::Stream;
pub use string::BoundedString;
