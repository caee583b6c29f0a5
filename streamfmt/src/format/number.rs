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

//! Number parsing for text tokens.
//!
//! Integers follow the usual auto-base convention: an optional sign, then a
//! `0x`/`0X` prefix for hexadecimal, a leading `0` for octal, or decimal
//! otherwise. Floats accept the longest prefix of the token that parses.

/// Parses an integer token, returning `None` if it is not a number.
pub(crate) fn parse_integer(token: &[u8]) -> Option<i128> {
    let text = std::str::from_utf8(token).ok()?.trim();
    let (negative, magnitude) = match text.as_bytes().first()? {
        b'-' => (true, &text[1..]),
        b'+' => (false, &text[1..]),
        _ => (false, text),
    };

    let (digits, radix) = if let Some(hex) = magnitude
        .strip_prefix("0x")
        .or_else(|| magnitude.strip_prefix("0X"))
    {
        (hex, 16)
    } else if magnitude.len() > 1 && magnitude.starts_with('0') {
        (&magnitude[1..], 8)
    } else {
        (magnitude, 10)
    };

    // from_str_radix accepts its own sign, which would allow "--1".
    if digits.is_empty() || !digits.chars().all(|c| c.is_digit(radix)) {
        return None;
    }
    let value = i128::from(u64::from_str_radix(digits, radix).ok()?);
    Some(if negative { -value } else { value })
}

/// Parses a float token, returning `None` if no prefix of it is a number.
pub(crate) fn parse_f32(token: &[u8]) -> Option<f32> {
    let text = std::str::from_utf8(token).ok()?.trim();
    (1..=text.len())
        .rev()
        .filter(|&end| text.is_char_boundary(end))
        .find_map(|end| text[..end].parse::<f32>().ok())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_integer_decimal() {
        assert_eq!(parse_integer(b"0"), Some(0));
        assert_eq!(parse_integer(b"42"), Some(42));
        assert_eq!(parse_integer(b"-17"), Some(-17));
        assert_eq!(parse_integer(b"+5"), Some(5));
        assert_eq!(
            parse_integer(b"18446744073709551615"),
            Some(i128::from(u64::MAX))
        );
    }

    #[test]
    fn test_parse_integer_hex_and_octal() {
        assert_eq!(parse_integer(b"0x1F"), Some(31));
        assert_eq!(parse_integer(b"0XfF"), Some(255));
        assert_eq!(parse_integer(b"-0x10"), Some(-16));
        assert_eq!(parse_integer(b"017"), Some(15));
    }

    #[test]
    fn test_parse_integer_rejects_garbage() {
        assert_eq!(parse_integer(b""), None);
        assert_eq!(parse_integer(b"-"), None);
        assert_eq!(parse_integer(b"abc"), None);
        assert_eq!(parse_integer(b"12ab"), None);
        assert_eq!(parse_integer(b"--1"), None);
        assert_eq!(parse_integer(b"0x"), None);
        assert_eq!(parse_integer(b"09"), None);
        assert_eq!(parse_integer(b"18446744073709551616"), None);
    }

    #[test]
    fn test_parse_f32() {
        assert_eq!(parse_f32(b"1.5"), Some(1.5));
        assert_eq!(parse_f32(b"-0.25000000"), Some(-0.25));
        assert_eq!(parse_f32(b"3.0abc"), Some(3.0));
        assert_eq!(parse_f32(b"1e3"), Some(1000.0));
        assert_eq!(parse_f32(b"x1"), None);
        assert_eq!(parse_f32(b""), None);
    }
}
