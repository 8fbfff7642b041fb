//! Character-level lexical scanning
//!
//! Input passes through three layers: a [`source::ByteSource`] with one byte
//! of pushback, an [`filter::InputFilter`] that removes `!...!` comments and
//! rejects bytes outside the alphabet, and the table-driven
//! [`scanner::Scanner`] that turns filtered characters into tokens.

pub mod automaton;
pub mod category;
pub mod error;
pub mod filter;
pub mod scanner;
pub mod source;

use crate::config::compile_time::automaton::{CATEGORY_COUNT, STATE_COUNT};
use crate::config::compile_time::tokens::INITIAL_LINE;
use crate::config::runtime::ScannerPreferences;
use crate::logging::codes;
use crate::tokens::Token;
use std::fs::File;
use std::io::Read;
use std::path::Path;

pub use automaton::{Action, State};
pub use category::{Category, Input};
pub use error::ScanError;
pub use scanner::{ScanMetrics, Scanner};

// ============================================================================
// MODULE API
// ============================================================================

/// Create a scanner session with default preferences
pub fn create_scanner<R: Read>(reader: R) -> Scanner<R> {
    Scanner::new(reader)
}

/// Create a scanner session with custom runtime preferences
pub fn create_scanner_with_preferences<R: Read>(
    reader: R,
    preferences: ScannerPreferences,
) -> Scanner<R> {
    Scanner::with_preferences(reader, preferences)
}

/// Scan a whole string; the last token is always `Eof`
pub fn tokenize_str(text: &str) -> Result<Vec<Token>, ScanError> {
    tokenize_reader(text.as_bytes())
}

pub fn tokenize_reader<R: Read>(reader: R) -> Result<Vec<Token>, ScanError> {
    Scanner::new(reader).collect()
}

/// Scan a file from its start. An open failure is reported as `Io` on line 1.
pub fn tokenize_file(path: impl AsRef<Path>) -> Result<Vec<Token>, ScanError> {
    let path = path.as_ref();
    let file = File::open(path).map_err(|error| {
        crate::log_error!(codes::input::FILE_NOT_FOUND, "Cannot open input file",
            "path" => path.display()
        );
        ScanError::io(&error, INITIAL_LINE)
    })?;

    tokenize_reader(file)
}

// ============================================================================
// MODULE VALIDATION
// ============================================================================

/// Check that every scan error code is registered and the transition table
/// is well formed
pub fn validate_scanner_configuration() -> Result<(), String> {
    let scan_codes = [
        codes::lexical::INVALID_CHARACTER,
        codes::lexical::UNTERMINATED_COMMENT,
        codes::lexical::TRUNCATED_TOKEN,
        codes::lexical::INVALID_TOKEN,
        codes::input::IO_ERROR,
    ];

    for code in &scan_codes {
        if codes::get_error_metadata(code.as_str()).is_none() {
            return Err(format!(
                "Scan error code {} not found in metadata registry",
                code.as_str()
            ));
        }
    }

    automaton::validate_table()?;

    crate::log_debug!("Scanner configuration validated",
        "states" => STATE_COUNT,
        "categories" => CATEGORY_COUNT
    );

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::tokens::TokenKind;
    use assert_matches::assert_matches;
    use std::io::Write;

    #[test]
    fn test_tokenize_str() {
        let tokens = tokenize_str("ab1 #22\n$").unwrap();
        assert_eq!(
            tokens,
            vec![
                Token::new(TokenKind::T2, "ab1", 1),
                Token::new(TokenKind::T1, "#22", 1),
                Token::new(TokenKind::T3, "$", 2),
                Token::eof(2),
            ]
        );
    }

    #[test]
    fn test_tokenize_str_propagates_first_error() {
        assert_matches!(
            tokenize_str("$ @ $"),
            Err(ScanError::InvalidCharacter { character: '@', .. })
        );
    }

    #[test]
    fn test_tokenize_file() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        write!(file, "!header!\nq7 \"0\n").unwrap();

        let tokens = tokenize_file(file.path()).unwrap();
        let kinds: Vec<TokenKind> = tokens.iter().map(|token| token.kind).collect();
        assert_eq!(kinds, vec![TokenKind::T2, TokenKind::T1, TokenKind::Eof]);
        assert_eq!(tokens[0].line, 2);
        assert_eq!(tokens[2].line, 3);
    }

    #[test]
    fn test_tokenize_missing_file() {
        let dir = tempfile::tempdir().unwrap();
        let result = tokenize_file(dir.path().join("absent.txt"));
        assert_matches!(result, Err(ScanError::Io { line: 1, .. }));
    }

    #[test]
    fn test_configuration_is_valid() {
        assert!(validate_scanner_configuration().is_ok());
    }

    #[test]
    fn test_scanner_with_preferences() {
        let preferences = ScannerPreferences {
            collect_metrics: false,
            trace_transitions: false,
            log_token_events: false,
        };
        let mut scanner = create_scanner_with_preferences("#5 $".as_bytes(), preferences);
        assert_eq!(scanner.next_token().unwrap().text, "#5");
        assert!(!scanner.preferences().collect_metrics);
        assert_eq!(scanner.metrics().total_tokens, 0);
    }

    #[test]
    fn test_independent_sessions() {
        let mut first = create_scanner("ab1 $".as_bytes());
        let mut second = create_scanner("#9".as_bytes());

        assert_eq!(first.next_token().unwrap().text, "ab1");
        assert_eq!(second.next_token().unwrap().text, "#9");
        assert_eq!(first.next_token().unwrap().text, "$");
        assert!(second.next_token().unwrap().is_eof());
    }
}
