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

//! Stream formats for streamfmt.
//!
//! This module provides the two wire representations a stream can use, behind
//! one operation set.
//!
//! # Overview
//!
//! - **[`StreamFormat`] trait**: typed reads and writes against a
//!   [`StreamSrc`](crate::source::StreamSrc)
//! - **[`BinaryStreamFormat`]**: fixed-width records in a chosen byte order
//! - **[`TextStreamFormat`]**: whitespace-delimited tokens with quoting and
//!   comments
//! - **[`tokenizer`] module**: the state machine that splits text input into
//!   tokens
//!
//! # Binary and text side by side
//!
//! The same calls produce these two encodings:
//!
//! ```text
//! write_u16(0x0102)          binary: 01 02            text: 258␠
//! write_string("hi", 4)      binary: 68 69 00 00      text: "hi"
//! write_bit([0b101], 3)      binary: 05               text: 0b101␠
//! write_mem_block([1, 2])    binary: 01 02            text: "AQI="␠
//! ```
//!
//! Neither format carries type information: a stream can only be read back
//! with the same sequence of calls that wrote it.
//!
//! # Examples
//!
//! ```rust
//! use streamfmt::{Endian, StreamFormat, StreamMode};
//! use streamfmt::source::{MemoryStream, StreamSrc};
//!
//! for mode in [StreamMode::Binary, StreamMode::Text] {
//!     let mut format = mode.into_format();
//!     let mut src = MemoryStream::new();
//!     format.write_u16(&mut src, Endian::Big, 0x0102);
//!     src.rewind();
//!     assert_eq!(format.read_u16(&mut src, Endian::Big), 0x0102);
//! }
//! ```

mod binary;
mod number;
mod text;
pub mod tokenizer;
mod traits;

pub use self::binary::BinaryStreamFormat;
pub use self::text::TextStreamFormat;
pub use self::traits::StreamFormat;
