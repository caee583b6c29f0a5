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

//! Byte channels the stream formats read from and write to.
//!
//! Every format operation is expressed against the [`StreamSrc`] trait, an
//! ordered byte channel with four operations: read, write, skip and rewind.
//! The formats never assume anything about the medium behind it.
//!
//! Two implementations ship with the crate:
//!
//! - [`MemoryStream`]: a growable in-memory buffer with a cursor
//! - [`IoStream`]: an adapter over any `Read + Write + Seek` object, such as a
//!   [`std::fs::File`]
//!
//! # Examples
//!
//! ```rust
//! use streamfmt::source::{MemoryStream, StreamSrc};
//!
//! let mut src = MemoryStream::new();
//! src.write(b"Hello");
//! src.rewind();
//!
//! let mut buffer = [0u8; 5];
//! assert_eq!(src.read(&mut buffer), 5);
//! assert_eq!(&buffer, b"Hello");
//! ```

mod io;
mod memory;
mod traits;

pub use self::io::IoStream;
pub use self::memory::MemoryStream;
pub use self::traits::StreamSrc;
