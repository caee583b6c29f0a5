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

//! Integration tests for round trips through the `Stream` front end.
//!
//! Each test writes a record sequence, rewinds, and reads the same sequence
//! back, in both wire representations where the behavior is shared.

use streamfmt::source::MemoryStream;
use streamfmt::{BoundedString, Endian, Stream, StreamMode};

const MODES: [StreamMode; 2] = [StreamMode::Binary, StreamMode::Text];

fn stream(mode: StreamMode) -> Stream<MemoryStream> {
    Stream::new(MemoryStream::new(), mode)
}

/// A mixed record written and read in every mode and byte order.
#[test]
fn test_mixed_record_roundtrip() {
    for mode in MODES {
        for endian in [Endian::Big, Endian::Little] {
            let mut s = stream(mode);
            s.set_binary_endian(endian);

            s.write_u8(u8::MAX);
            s.write_i16(i16::MIN);
            s.write_u32(0xDEAD_BEEF);
            s.write_i64(-1);
            s.write_f32(-2.5);
            s.write_string("player one", 16);
            s.write_bit(&[0b1100_1010, 0b0000_0101], 12);
            s.write_mem_block(&[0, 1, 2, 3, 254, 255]);
            s.write_u16(0);

            s.rewind();
            assert_eq!(s.read_u8(), u8::MAX, "{mode} {endian}");
            assert_eq!(s.read_i16(), i16::MIN, "{mode} {endian}");
            assert_eq!(s.read_u32(), 0xDEAD_BEEF, "{mode} {endian}");
            assert_eq!(s.read_i64(), -1, "{mode} {endian}");
            assert_eq!(s.read_f32(), -2.5, "{mode} {endian}");

            let mut name = BoundedString::with_capacity(32);
            s.read_string(&mut name, 16);
            assert_eq!(name.as_bytes(), b"player one", "{mode} {endian}");

            let mut bits = [0u8; 2];
            s.read_bit(&mut bits, 12);
            assert_eq!(bits, [0b1100_1010, 0b0000_0101], "{mode} {endian}");

            let mut block = [0u8; 6];
            assert_eq!(s.read_mem_block(&mut block), 6, "{mode} {endian}");
            assert_eq!(block, [0, 1, 2, 3, 254, 255], "{mode} {endian}");

            assert_eq!(s.read_u16(), 0, "{mode} {endian}");
        }
    }
}

/// Scalar extremes survive both representations.
#[test]
fn test_scalar_extremes() {
    for mode in MODES {
        let mut s = stream(mode);
        s.write_u64(u64::MAX);
        s.write_i64(i64::MIN);
        s.write_i64(i64::MAX);
        s.write_i32(i32::MIN);
        s.write_i8(-1);
        s.write_u16(u16::MAX);

        s.rewind();
        assert_eq!(s.read_u64(), u64::MAX, "{mode}");
        assert_eq!(s.read_i64(), i64::MIN, "{mode}");
        assert_eq!(s.read_i64(), i64::MAX, "{mode}");
        assert_eq!(s.read_i32(), i32::MIN, "{mode}");
        assert_eq!(s.read_i8(), -1, "{mode}");
        assert_eq!(s.read_u16(), u16::MAX, "{mode}");
    }
}

/// Binary strings occupy exactly their declared size.
#[test]
fn test_binary_string_field_layout() {
    let mut s = stream(StreamMode::Binary);
    s.write_string("hello", 10);
    s.write_u8(0x7F);
    assert_eq!(s.src().as_bytes(), b"hello\0\0\0\0\0\x7F");

    s.rewind();
    let mut small = BoundedString::with_capacity(3);
    s.read_string(&mut small, 10);
    assert_eq!(small.as_bytes(), b"he");
    assert_eq!(s.read_u8(), 0x7F);
}

/// Text skip consumes a token no matter the offset; binary skip consumes
/// bytes.
#[test]
fn test_skip_semantics() {
    let mut text = stream(StreamMode::Text);
    text.write_u32(100_000);
    text.write_u32(7);
    text.rewind();
    text.skip(2);
    assert_eq!(text.read_u32(), 7);

    let mut binary = stream(StreamMode::Binary);
    binary.write_u32(100_000);
    binary.write_u32(7);
    binary.rewind();
    binary.skip(4);
    assert_eq!(binary.read_u32(), 7);
}

/// Reads past the end yield zero rather than failing.
#[test]
fn test_reads_past_end() {
    for mode in MODES {
        let mut s = stream(mode);
        assert_eq!(s.read_u32(), 0, "{mode}");
        assert_eq!(s.read_f32(), 0.0, "{mode}");

        let mut dst = BoundedString::with_capacity(8);
        s.read_string(&mut dst, 4);
        assert!(dst.is_empty(), "{mode}");

        let mut buf = [9u8; 4];
        assert_eq!(s.read_mem_block(&mut buf), 0, "{mode}");
    }
}

/// Text memory blocks larger than the scratch buffer are silently dropped,
/// leaving the following records intact.
#[test]
fn test_text_oversized_mem_block_is_skipped() {
    let mut s = stream(StreamMode::Text);
    s.write_mem_block(&[0xAB; 200]);
    s.write_u8(5);
    assert_eq!(s.src().as_bytes(), b"5 ");

    s.rewind();
    assert_eq!(s.read_u8(), 5);
}
