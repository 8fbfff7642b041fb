use crate::config::compile_time::tokens::EOF_TEXT;
use serde::{Deserialize, Serialize};
use std::fmt;

/// Lexical category of a recognized token
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum TokenKind {
    T1,
    T2,
    T3,
    Eof,
}

impl TokenKind {
    /// Name printed by the token driver
    pub fn name(&self) -> &'static str {
        match self {
            TokenKind::T1 => "t1 token",
            TokenKind::T2 => "t2 token",
            TokenKind::T3 => "t3 token",
            TokenKind::Eof => "EOFTk",
        }
    }

    pub fn is_eof(&self) -> bool {
        matches!(self, TokenKind::Eof)
    }
}

impl fmt::Display for TokenKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// One scanned token, owned by the caller once returned
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Token {
    pub kind: TokenKind,
    /// Characters consumed while building the token; `"EOF"` for the end token
    pub text: String,
    /// Line on which the token began (1-based)
    pub line: u32,
}

impl Token {
    pub fn new(kind: TokenKind, text: impl Into<String>, line: u32) -> Self {
        Self {
            kind,
            text: text.into(),
            line,
        }
    }

    /// End-of-input token on the given line
    pub fn eof(line: u32) -> Self {
        Self::new(TokenKind::Eof, EOF_TEXT, line)
    }

    pub fn is_eof(&self) -> bool {
        self.kind.is_eof()
    }
}

/// Driver line format: `<kind> <text> <line>`, or just the kind name at end of input
impl fmt::Display for Token {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.is_eof() {
            write!(f, "{}", self.kind)
        } else {
            write!(f, "{} {} {}", self.kind, self.text, self.line)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_display_matches_driver_format() {
        assert_eq!(Token::new(TokenKind::T1, "#12", 3).to_string(), "t1 token #12 3");
        assert_eq!(Token::new(TokenKind::T2, "ab1", 1).to_string(), "t2 token ab1 1");
        assert_eq!(Token::new(TokenKind::T3, "$", 9).to_string(), "t3 token $ 9");
        assert_eq!(Token::eof(4).to_string(), "EOFTk");
    }

    #[test]
    fn test_eof_token_text() {
        let token = Token::eof(2);
        assert!(token.is_eof());
        assert_eq!(token.text, "EOF");
        assert_eq!(token.line, 2);
    }

    #[test]
    fn test_token_serializes() {
        let token = Token::new(TokenKind::T2, "x9", 5);
        let json = serde_json::to_string(&token).unwrap();
        assert_eq!(json, r#"{"kind":"T2","text":"x9","line":5}"#);

        let back: Token = serde_json::from_str(&json).unwrap();
        assert_eq!(back, token);
    }
}
