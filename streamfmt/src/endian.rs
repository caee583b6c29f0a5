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

//! Byte-order conversion between wire and host representation.
//!
//! Multi-byte scalars travel in a caller-chosen byte order. [`Endian`] names
//! that order and converts values read as raw host-order integers into host
//! values, and back. Floats are converted through their raw bit pattern, so
//! NaN payloads and infinities survive a round trip unchanged.
//!
//! # Examples
//!
//! ```rust
//! use streamfmt::Endian;
//!
//! let wire = Endian::Big.from_host(0x1234u16);
//! assert_eq!(wire.to_ne_bytes(), [0x12, 0x34]);
//! assert_eq!(Endian::Big.to_host(wire), 0x1234);
//! ```

use std::fmt;
use std::str::FromStr;

use crate::error::ConfigError;

/// Byte order of multi-byte scalars on the wire.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "lowercase"))]
pub enum Endian {
    /// Most-significant byte first.
    Big,
    /// Least-significant byte first.
    Little,
}

impl Endian {
    /// Returns the byte order of the host.
    #[must_use]
    pub const fn native() -> Self {
        if cfg!(target_endian = "big") {
            Self::Big
        } else {
            Self::Little
        }
    }

    /// Returns `true` if this byte order matches the host.
    #[must_use]
    pub const fn is_native(self) -> bool {
        matches!(
            (self, Self::native()),
            (Self::Big, Self::Big) | (Self::Little, Self::Little)
        )
    }

    /// Returns the string name of this byte order.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use streamfmt::Endian;
    ///
    /// assert_eq!(Endian::Big.as_str(), "big");
    /// assert_eq!(Endian::Little.as_str(), "little");
    /// ```
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Big => "big",
            Self::Little => "little",
        }
    }

    /// Converts a value read from the wire as raw host-order bytes into a
    /// host value.
    #[must_use]
    pub fn to_host<T: EndianScalar>(self, raw: T) -> T {
        if self.is_native() {
            raw
        } else {
            raw.swap_bytes()
        }
    }

    /// Converts a host value into the raw value whose host-order bytes are the
    /// wire representation.
    #[must_use]
    pub fn from_host<T: EndianScalar>(self, value: T) -> T {
        // Byte swapping is an involution, so both directions are the same.
        self.to_host(value)
    }

    /// Converts a raw 4-byte wire pattern into a host float.
    ///
    /// The conversion never goes through a numeric cast, so every bit of the
    /// pattern is kept.
    #[must_use]
    pub fn to_host_f32(self, raw: u32) -> f32 {
        f32::from_bits(self.to_host(raw))
    }

    /// Converts a host float into its raw 4-byte wire pattern.
    #[must_use]
    pub fn from_host_f32(self, value: f32) -> u32 {
        self.from_host(value.to_bits())
    }
}

impl Default for Endian {
    fn default() -> Self {
        Self::native()
    }
}

impl fmt::Display for Endian {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Endian {
    type Err = ConfigError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "big" | "be" => Ok(Self::Big),
            "little" | "le" => Ok(Self::Little),
            "native" => Ok(Self::native()),
            _ => Err(ConfigError::UnknownEndian(s.to_string())),
        }
    }
}

/// An integer scalar that can be moved across the wire.
///
/// Implemented for every fixed-width integer the stream formats handle. The
/// associated [`Bytes`](EndianScalar::Bytes) array is the raw storage a value
/// is read into before byte-order conversion.
pub trait EndianScalar: Copy {
    /// Raw storage of exactly `size_of::<Self>()` bytes.
    type Bytes: AsRef<[u8]> + AsMut<[u8]> + Default;

    /// Reverses the byte order of the value.
    #[must_use]
    fn swap_bytes(self) -> Self;

    /// Reinterprets host-order bytes as a value.
    fn from_ne_bytes(bytes: Self::Bytes) -> Self;

    /// Returns the host-order bytes of the value.
    fn to_ne_bytes(self) -> Self::Bytes;
}

macro_rules! impl_endian_scalar {
    ($($ty:ty),* $(,)?) => {
        $(
            impl EndianScalar for $ty {
                type Bytes = [u8; std::mem::size_of::<$ty>()];

                fn swap_bytes(self) -> Self {
                    <$ty>::swap_bytes(self)
                }

                fn from_ne_bytes(bytes: Self::Bytes) -> Self {
                    <$ty>::from_ne_bytes(bytes)
                }

                fn to_ne_bytes(self) -> Self::Bytes {
                    <$ty>::to_ne_bytes(self)
                }
            }
        )*
    };
}

impl_endian_scalar!(u8, u16, u32, u64, i8, i16, i32, i64);

#[cfg(test)]
mod tests {
    use super::*;

    fn foreign() -> Endian {
        match Endian::native() {
            Endian::Big => Endian::Little,
            Endian::Little => Endian::Big,
        }
    }

    #[test]
    fn test_native_is_identity() {
        let native = Endian::native();
        assert!(native.is_native());
        assert_eq!(native.to_host(0x0102_0304u32), 0x0102_0304);
        assert_eq!(native.from_host(-2i64), -2);
    }

    #[test]
    fn test_foreign_swaps_bytes() {
        let endian = foreign();
        assert!(!endian.is_native());
        assert_eq!(endian.to_host(0x0102u16), 0x0201);
        assert_eq!(endian.to_host(0x0102_0304u32), 0x0403_0201);
        assert_eq!(
            endian.from_host(0x0102_0304_0506_0708u64),
            0x0807_0605_0403_0201
        );
        assert_eq!(endian.to_host(0xABu8), 0xAB);
    }

    #[test]
    fn test_wire_bytes() {
        assert_eq!(Endian::Big.from_host(0x1234u16).to_ne_bytes(), [0x12, 0x34]);
        assert_eq!(
            Endian::Little.from_host(0x1234u16).to_ne_bytes(),
            [0x34, 0x12]
        );
        assert_eq!(
            Endian::Big.from_host(-2i32).to_ne_bytes(),
            [0xFF, 0xFF, 0xFF, 0xFE]
        );
    }

    #[test]
    fn test_f32_preserves_bit_pattern() {
        let quiet_nan_with_payload = f32::from_bits(0x7FC0_1234);
        for endian in [Endian::Big, Endian::Little] {
            let raw = endian.from_host_f32(quiet_nan_with_payload);
            assert_eq!(endian.to_host_f32(raw).to_bits(), 0x7FC0_1234);

            let raw = endian.from_host_f32(f32::NEG_INFINITY);
            assert_eq!(endian.to_host_f32(raw), f32::NEG_INFINITY);
        }
        assert_eq!(
            Endian::Big.from_host_f32(1.0).to_ne_bytes(),
            [0x3F, 0x80, 0, 0]
        );
    }

    #[test]
    fn test_endian_from_str() {
        assert_eq!("big".parse::<Endian>().unwrap(), Endian::Big);
        assert_eq!("LE".parse::<Endian>().unwrap(), Endian::Little);
        assert_eq!("native".parse::<Endian>().unwrap(), Endian::native());
        assert!(matches!(
            "middle".parse::<Endian>(),
            Err(ConfigError::UnknownEndian(s)) if s == "middle"
        ));
    }

    #[test]
    fn test_endian_display() {
        assert_eq!(Endian::Big.to_string(), "big");
        assert_eq!(Endian::default(), Endian::native());
    }
}
