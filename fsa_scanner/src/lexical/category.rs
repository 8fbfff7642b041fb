//! Character categories: the columns of the transition table

use crate::config::compile_time::alphabet::*;
use std::fmt;

/// A character delivered by the input filter
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Input {
    Byte(u8),
    EndOfInput,
}

impl Input {
    pub fn byte(self) -> Option<u8> {
        match self {
            Input::Byte(byte) => Some(byte),
            Input::EndOfInput => None,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Category {
    Whitespace = 0,
    QuoteOrHash = 1,
    Letter = 2,
    Digit = 3,
    Symbol = 4,
    EndOfInput = 5,
}

impl Category {
    /// All categories in column order
    pub const ALL: [Category; 6] = [
        Category::Whitespace,
        Category::QuoteOrHash,
        Category::Letter,
        Category::Digit,
        Category::Symbol,
        Category::EndOfInput,
    ];

    /// Column index in the transition table
    pub fn index(self) -> usize {
        self as usize
    }

    /// Category of a raw byte, or `None` when the byte cannot appear in a token.
    /// The comment marker has no category; the input filter consumes it.
    pub fn of_byte(byte: u8) -> Option<Category> {
        match byte {
            _ if WHITESPACE.contains(&byte) => Some(Category::Whitespace),
            QUOTE_MARKER | HASH_MARKER => Some(Category::QuoteOrHash),
            b'a'..=b'z' | b'A'..=b'Z' => Some(Category::Letter),
            b'0'..=b'9' => Some(Category::Digit),
            SYMBOL_RANGE_START..=SYMBOL_RANGE_END => Some(Category::Symbol),
            _ => None,
        }
    }

    pub fn of(input: Input) -> Option<Category> {
        match input {
            Input::Byte(byte) => Self::of_byte(byte),
            Input::EndOfInput => Some(Category::EndOfInput),
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Category::Whitespace => "whitespace",
            Category::QuoteOrHash => "quote-or-hash",
            Category::Letter => "letter",
            Category::Digit => "digit",
            Category::Symbol => "symbol",
            Category::EndOfInput => "end-of-input",
        }
    }
}

impl fmt::Display for Category {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
