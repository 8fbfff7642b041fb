//! Token model for the FSA scanner
//!
//! A scan produces one [`Token`] per call. Each token carries its
//! [`TokenKind`], the exact characters that built it, and the 1-based line on
//! which it began.
//!
//! ## Token Kinds
//!
//! - **T1** - a `"` or `#` opener followed by one or more digits (`#42`)
//! - **T2** - one or more letters followed by one or more digits (`abc12`)
//! - **T3** - a single symbol from `$ % & ' ( ) * + , - . /`
//! - **Eof** - end of input; always the last token of a clean scan
//!
//! Tokens serialize with `serde` so downstream tools can persist a scan.

pub mod token;

pub use token::{Token, TokenKind};
