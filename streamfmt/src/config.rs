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

//! Stream configuration types.
//!
//! This module provides the configuration needed to build a stream format:
//! the wire representation ([`StreamMode`]), the byte order of binary scalars,
//! and the tokenizer and scratch settings of the text format.
//!
//! With the `serde` feature enabled every type here can be loaded from JSON or
//! any other serde format. Missing fields take their defaults.

use std::fmt;
use std::str::FromStr;

use crate::endian::Endian;
use crate::error::ConfigError;
use crate::format::{BinaryStreamFormat, StreamFormat, TextStreamFormat};

/// Wire representation of a stream.
///
/// # Examples
///
/// ```rust
/// use streamfmt::StreamMode;
///
/// let mode: StreamMode = "text".parse().unwrap();
/// assert_eq!(mode, StreamMode::Text);
/// assert_ne!(mode, StreamMode::Binary);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "lowercase"))]
pub enum StreamMode {
    /// Fixed-width, byte-exact records
    #[default]
    Binary,

    /// Whitespace-delimited, human-readable tokens
    Text,
}

impl StreamMode {
    /// Returns the string name of this mode.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use streamfmt::StreamMode;
    ///
    /// assert_eq!(StreamMode::Binary.as_str(), "binary");
    /// assert_eq!(StreamMode::Text.as_str(), "text");
    /// ```
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Binary => "binary",
            Self::Text => "text",
        }
    }

    /// Creates a format for this mode with default settings.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use streamfmt::StreamMode;
    ///
    /// let format = StreamMode::Text.into_format();
    /// assert_eq!(format.mode(), StreamMode::Text);
    /// ```
    #[must_use]
    pub fn into_format(self) -> Box<dyn StreamFormat> {
        match self {
            Self::Binary => Box::new(BinaryStreamFormat::new()),
            Self::Text => Box::new(TextStreamFormat::new()),
        }
    }
}

impl fmt::Display for StreamMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl FromStr for StreamMode {
    type Err = ConfigError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "binary" | "bin" => Ok(Self::Binary),
            "text" | "txt" => Ok(Self::Text),
            _ => Err(ConfigError::UnknownMode(s.to_string())),
        }
    }
}

/// Settings of the text format.
///
/// # Examples
///
/// ```rust
/// use streamfmt::TextFormatConfig;
///
/// let config = TextFormatConfig::new()
///     .with_terminators("\n")
///     .with_scratch_capacity(256);
/// assert!(config.validate().is_ok());
/// assert_eq!(config.primary_terminator(), b'\n');
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct TextFormatConfig {
    /// Characters that separate tokens; the first one follows every scalar
    terminators: String,

    /// Size of the scratch buffer, terminator slot included
    scratch_capacity: usize,
}

impl TextFormatConfig {
    /// Terminators used when none are configured.
    pub const DEFAULT_TERMINATORS: &'static str = " \t\r\n";

    /// Scratch capacity used when none is configured.
    pub const DEFAULT_SCRATCH_CAPACITY: usize = 128;

    /// Smallest accepted scratch capacity.
    ///
    /// The fixed-point rendering of the largest `f32` needs 48 bytes.
    pub const MIN_SCRATCH_CAPACITY: usize = 64;

    /// Creates a configuration with the default terminators and capacity.
    #[must_use]
    pub fn new() -> Self {
        Self {
            terminators: Self::DEFAULT_TERMINATORS.to_string(),
            scratch_capacity: Self::DEFAULT_SCRATCH_CAPACITY,
        }
    }

    /// Sets the token separators. The first character is the one written
    /// after each scalar.
    #[must_use]
    pub fn with_terminators(mut self, terminators: impl Into<String>) -> Self {
        self.terminators = terminators.into();
        self
    }

    /// Sets the scratch buffer size.
    ///
    /// This bounds the longest token that can be read and the largest memory
    /// block that can be written.
    #[must_use]
    pub fn with_scratch_capacity(mut self, capacity: usize) -> Self {
        self.scratch_capacity = capacity;
        self
    }

    /// Returns the token separators.
    pub fn terminators(&self) -> &str {
        &self.terminators
    }

    /// Returns the separator written after each scalar.
    ///
    /// Falls back to a space for an unvalidated, empty set.
    pub fn primary_terminator(&self) -> u8 {
        self.terminators.bytes().next().unwrap_or(b' ')
    }

    /// Returns the scratch buffer size.
    pub fn scratch_capacity(&self) -> usize {
        self.scratch_capacity
    }

    /// Checks that the configuration can drive the text format.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::EmptyTerminatorSet`] if there are no
    /// terminators, [`ConfigError::InvalidTerminator`] if a terminator is not
    /// ASCII or is one of the characters the tokenizer gives a meaning to, and
    /// [`ConfigError::ScratchCapacityTooSmall`] if the scratch buffer is
    /// smaller than [`MIN_SCRATCH_CAPACITY`](Self::MIN_SCRATCH_CAPACITY).
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.terminators.is_empty() {
            return Err(ConfigError::EmptyTerminatorSet);
        }
        if let Some(c) = self
            .terminators
            .chars()
            .find(|&c| !c.is_ascii() || matches!(c, '"' | '#' | '/' | '\\' | '*'))
        {
            return Err(ConfigError::InvalidTerminator(c));
        }
        if self.scratch_capacity < Self::MIN_SCRATCH_CAPACITY {
            return Err(ConfigError::ScratchCapacityTooSmall {
                capacity: self.scratch_capacity,
                minimum: Self::MIN_SCRATCH_CAPACITY,
            });
        }
        Ok(())
    }
}

impl Default for TextFormatConfig {
    fn default() -> Self {
        Self::new()
    }
}

/// Complete configuration of a stream.
///
/// # Examples
///
/// ```rust
/// use streamfmt::{Endian, StreamConfig, StreamMode};
///
/// let config = StreamConfig::new(StreamMode::Binary).with_endian(Endian::Big);
/// let format = config.build_format().unwrap();
/// assert_eq!(format.mode(), StreamMode::Binary);
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct StreamConfig {
    /// Wire representation
    mode: StreamMode,

    /// Byte order of binary scalars
    endian: Endian,

    /// Settings used whenever the stream is in text mode
    text: TextFormatConfig,
}

impl StreamConfig {
    /// Creates a configuration for `mode` with native byte order and default
    /// text settings.
    #[must_use]
    pub fn new(mode: StreamMode) -> Self {
        Self {
            mode,
            ..Self::default()
        }
    }

    /// Sets the byte order of binary scalars.
    #[must_use]
    pub fn with_endian(mut self, endian: Endian) -> Self {
        self.endian = endian;
        self
    }

    /// Sets the text format settings.
    #[must_use]
    pub fn with_text(mut self, text: TextFormatConfig) -> Self {
        self.text = text;
        self
    }

    /// Returns the wire representation.
    pub fn mode(&self) -> StreamMode {
        self.mode
    }

    /// Returns the byte order of binary scalars.
    pub fn endian(&self) -> Endian {
        self.endian
    }

    /// Returns the text format settings.
    pub fn text(&self) -> &TextFormatConfig {
        &self.text
    }

    /// Checks the configuration.
    ///
    /// The text settings are checked even in binary mode, since a stream can
    /// switch modes later.
    ///
    /// # Errors
    ///
    /// Returns the first problem [`TextFormatConfig::validate`] finds.
    pub fn validate(&self) -> Result<(), ConfigError> {
        self.text.validate()
    }

    /// Builds the format this configuration selects.
    ///
    /// # Errors
    ///
    /// Returns an error if the configuration is invalid.
    pub fn build_format(&self) -> Result<Box<dyn StreamFormat>, ConfigError> {
        self.validate()?;
        Ok(match self.mode {
            StreamMode::Binary => Box::new(BinaryStreamFormat::new()),
            StreamMode::Text => Box::new(TextStreamFormat::from_validated(self.text.clone())),
        })
    }
}
