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

//! Tokenizer for the text stream format.
//!
//! The tokenizer reads a channel one byte at a time and splits it into
//! tokens. It is an explicit state machine: [`TokenizerState`] names every
//! state and each state has its own transition function, so quoting,
//! escaping and comment handling can be exercised one byte at a time through
//! [`Tokenizer::feed`].
//!
//! # Grammar
//!
//! - Tokens are separated by any byte of the terminator set, or NUL. Leading
//!   separators are skipped.
//! - A token that starts with `"` is quoted: it runs to the next unescaped
//!   `"`, may contain separators, and `\"` stands for a literal quote.
//! - `//` starts a comment that runs to the end of the line.
//! - `/*` starts a comment that runs to the next `*/`.
//! - `#` at the start of a token starts a comment that runs to the end of the
//!   line.
//! - A comment ends the token in progress, like a separator.
//! - Bytes beyond the capacity of the token buffer are dropped; the rest of
//!   the token is still consumed.

use crate::source::StreamSrc;
use crate::string::BoundedString;

#[cfg(feature = "observability")]
use tracing::{instrument, trace};

/// State of the tokenizer between two input bytes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum TokenizerState {
    /// Accumulating an unquoted token, or skipping separators before one.
    Bare,
    /// Saw a `/` in an unquoted token that may start a comment.
    Slash,
    /// Inside a quoted token.
    Quoted,
    /// Saw a `\` inside a quoted token.
    QuotedEscape,
    /// Inside a comment that ends at a newline.
    LineComment,
    /// Inside a comment that ends at `*/`.
    BlockComment,
    /// Saw a `*` inside a block comment.
    BlockCommentStar,
}

/// Whether the token in progress is complete.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Flow {
    /// More input is needed.
    Continue,
    /// The token is complete; the byte just fed belongs to no later token.
    Finished,
}

/// Splits a byte channel into tokens.
///
/// # Examples
///
/// ```rust
/// use streamfmt::format::tokenizer::Tokenizer;
/// use streamfmt::source::MemoryStream;
/// use streamfmt::BoundedString;
///
/// let mut src = MemoryStream::from("foo // comment\nbar");
/// let mut token = BoundedString::with_capacity(128);
/// let mut tokenizer = Tokenizer::new(b" \t\r\n");
///
/// tokenizer.next_token(&mut src, &mut token);
/// assert_eq!(token.as_bytes(), b"foo");
/// tokenizer.next_token(&mut src, &mut token);
/// assert_eq!(token.as_bytes(), b"bar");
/// ```
#[derive(Debug, Clone)]
pub struct Tokenizer<'t> {
    terminators: &'t [u8],
    state: TokenizerState,
}

impl<'t> Tokenizer<'t> {
    /// Creates a tokenizer that separates tokens on any byte of
    /// `terminators`.
    #[must_use]
    pub fn new(terminators: &'t [u8]) -> Self {
        Self {
            terminators,
            state: TokenizerState::Bare,
        }
    }

    /// Returns the current state.
    #[must_use]
    pub fn state(&self) -> TokenizerState {
        self.state
    }

    /// Reads the next token from `src` into `token`.
    ///
    /// `token` is cleared first. At the end of the input, whatever has been
    /// accumulated is left in `token`, which may be empty.
    #[cfg_attr(feature = "observability", instrument(level = "trace", skip_all))]
    pub fn next_token(&mut self, src: &mut dyn StreamSrc, token: &mut BoundedString) {
        token.clear();
        self.state = TokenizerState::Bare;

        let mut byte = [0u8; 1];
        while src.read(&mut byte) != 0 {
            if self.feed(byte[0], token) == Flow::Finished {
                break;
            }
        }
        self.finish(token);

        #[cfg(feature = "observability")]
        trace!(token = %token, "Read token");
    }

    /// Advances the state machine by one input byte.
    pub fn feed(&mut self, byte: u8, token: &mut BoundedString) -> Flow {
        match self.state {
            TokenizerState::Bare => self.on_bare(byte, token),
            TokenizerState::Slash => self.on_slash(byte, token),
            TokenizerState::Quoted => self.on_quoted(byte, token),
            TokenizerState::QuotedEscape => self.on_quoted_escape(byte, token),
            TokenizerState::LineComment => self.on_line_comment(byte, token),
            TokenizerState::BlockComment => self.on_block_comment(byte, token),
            TokenizerState::BlockCommentStar => self.on_block_comment_star(byte, token),
        }
    }

    /// Completes a token cut short by the end of the input.
    pub fn finish(&mut self, token: &mut BoundedString) {
        match self.state {
            TokenizerState::Slash => {
                token.push(b'/');
            }
            TokenizerState::QuotedEscape => {
                token.push(b'\\');
            }
            _ => {}
        }
        self.state = TokenizerState::Bare;
    }

    fn is_delimiter(&self, byte: u8) -> bool {
        byte == 0 || self.terminators.contains(&byte)
    }

    /// Ends a non-empty token; keeps skipping while nothing has accumulated.
    fn delimit(&mut self, token: &BoundedString) -> Flow {
        self.state = TokenizerState::Bare;
        if token.is_empty() {
            Flow::Continue
        } else {
            Flow::Finished
        }
    }

    fn on_bare(&mut self, byte: u8, token: &mut BoundedString) -> Flow {
        if self.is_delimiter(byte) {
            return self.delimit(token);
        }
        match byte {
            b'"' if token.is_empty() => self.state = TokenizerState::Quoted,
            b'#' if token.is_empty() => self.state = TokenizerState::LineComment,
            b'/' => self.state = TokenizerState::Slash,
            _ => {
                token.push(byte);
            }
        }
        Flow::Continue
    }

    fn on_slash(&mut self, byte: u8, token: &mut BoundedString) -> Flow {
        match byte {
            b'/' => {
                self.state = TokenizerState::LineComment;
                Flow::Continue
            }
            b'*' => {
                self.state = TokenizerState::BlockComment;
                Flow::Continue
            }
            _ => {
                token.push(b'/');
                self.state = TokenizerState::Bare;
                self.on_bare(byte, token)
            }
        }
    }

    fn on_quoted(&mut self, byte: u8, token: &mut BoundedString) -> Flow {
        match byte {
            b'"' => {
                self.state = TokenizerState::Bare;
                return Flow::Finished;
            }
            b'\\' => self.state = TokenizerState::QuotedEscape,
            _ => {
                token.push(byte);
            }
        }
        Flow::Continue
    }

    fn on_quoted_escape(&mut self, byte: u8, token: &mut BoundedString) -> Flow {
        self.state = TokenizerState::Quoted;
        if byte == b'"' {
            token.push(b'"');
            Flow::Continue
        } else {
            token.push(b'\\');
            self.on_quoted(byte, token)
        }
    }

    fn on_line_comment(&mut self, byte: u8, token: &mut BoundedString) -> Flow {
        if byte == b'\n' {
            self.delimit(token)
        } else {
            Flow::Continue
        }
    }

    fn on_block_comment(&mut self, byte: u8, _token: &mut BoundedString) -> Flow {
        if byte == b'*' {
            self.state = TokenizerState::BlockCommentStar;
        }
        Flow::Continue
    }

    fn on_block_comment_star(&mut self, byte: u8, token: &mut BoundedString) -> Flow {
        match byte {
            b'/' => self.delimit(token),
            b'*' => Flow::Continue,
            _ => {
                self.state = TokenizerState::BlockComment;
                Flow::Continue
            }
        }
    }
}
