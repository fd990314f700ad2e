use serde::{Deserialize, Serialize};

use crate::pos::Pos;

/// A single labeled morpheme (or chunk) in a tokenization result.
///
/// `offset` and `length` are in source-character units (not bytes), so that
/// `token.offset + token.length` always lands on a character boundary of the
/// original input regardless of UTF-8 width.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Token {
    pub text: String,
    pub pos: Pos,
    pub offset: usize,
    pub length: usize,
    pub unknown: bool,
}

impl Token {
    pub fn new(text: impl Into<String>, pos: Pos, offset: usize, length: usize) -> Self {
        Token {
            text: text.into(),
            pos,
            offset,
            length,
            unknown: false,
        }
    }

    pub fn unknown(text: impl Into<String>, pos: Pos, offset: usize, length: usize) -> Self {
        Token {
            text: text.into(),
            pos,
            offset,
            length,
            unknown: true,
        }
    }

    /// Renders as `"{text}/{pos}"`, or `"{text}*/{pos}"` when `unknown`, and
    /// as the empty string for `Space` tokens (the caller joins with a
    /// single space, so two adjacent empty renders become one blank run).
    pub fn render(&self) -> String {
        if self.pos == Pos::Space {
            return String::new();
        }
        if self.unknown {
            format!("{}*/{}", self.text, self.pos)
        } else {
            format!("{}/{}", self.text, self.pos)
        }
    }
}
