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

//! Configuration error types.
//!
//! Stream operations never fail: degenerate input is handled by policy
//! (truncation, default values, skipped writes). The only fallible surface is
//! building a stream or format from configuration, which reports a
//! [`ConfigError`].
//!
//! # Examples
//!
//! ```rust
//! use streamfmt::{ConfigError, TextFormatConfig};
//!
//! let config = TextFormatConfig::new().with_terminators("");
//! assert!(matches!(config.validate(), Err(ConfigError::EmptyTerminatorSet)));
//! ```

use thiserror::Error;

/// Errors that can occur while validating stream configuration.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ConfigError {
    /// The text format needs at least one terminator character.
    ///
    /// The first terminator is appended after every scalar written in text
    /// mode, so an empty set leaves the writer nothing to emit.
    #[error("terminator set must contain at least one character")]
    EmptyTerminatorSet,

    /// The terminator set contains a character that cannot delimit tokens.
    ///
    /// Quotes and comment introducers are consumed by the tokenizer before the
    /// terminator set is consulted.
    #[error("character {0:?} cannot be used as a terminator")]
    InvalidTerminator(char),

    /// The scratch buffer is too small to hold any meaningful token.
    #[error("scratch capacity {capacity} is below the minimum of {minimum}")]
    ScratchCapacityTooSmall {
        /// The requested capacity
        capacity: usize,
        /// The smallest accepted capacity
        minimum: usize,
    },

    /// A stream mode name was not recognized.
    #[error("unknown stream mode: {0}")]
    UnknownMode(String),

    /// A byte order name was not recognized.
    #[error("unknown endianness: {0}")]
    UnknownEndian(String),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_config_error_display() {
        assert_eq!(
            ConfigError::EmptyTerminatorSet.to_string(),
            "terminator set must contain at least one character"
        );
        assert_eq!(
            ConfigError::ScratchCapacityTooSmall {
                capacity: 4,
                minimum: 32,
            }
            .to_string(),
            "scratch capacity 4 is below the minimum of 32"
        );
        assert_eq!(
            ConfigError::UnknownMode("xml".to_string()).to_string(),
            "unknown stream mode: xml"
        );
        assert_eq!(
            ConfigError::InvalidTerminator('"').to_string(),
            "character '\"' cannot be used as a terminator"
        );
    }

    #[test]
    fn test_config_error_is_std_error() {
        let error: Box<dyn std::error::Error + Send + Sync> =
            Box::new(ConfigError::UnknownEndian("middle".to_string()));
        assert!(error.source().is_none());
        assert!(error.to_string().contains("middle"));
    }
}
