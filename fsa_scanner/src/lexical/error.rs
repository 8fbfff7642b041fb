use crate::logging::codes;

/// Scan failures. Every variant is fatal to the session that produced it.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ScanError {
    #[error("Invalid character {character:?} at line {line}")]
    InvalidCharacter { character: char, line: u32 },

    #[error("Unterminated comment starting at line {line}")]
    UnterminatedComment { line: u32 },

    #[error("Truncated token '{text}' at line {line}")]
    TruncatedToken { text: String, line: u32 },

    #[error("Invalid token at line {line}")]
    InvalidToken { line: u32 },

    #[error("Read failure: {message} at line {line}")]
    Io { message: String, line: u32 },
}

impl ScanError {
    pub(crate) fn io(error: &std::io::Error, line: u32) -> Self {
        ScanError::Io {
            message: error.to_string(),
            line,
        }
    }

    pub fn error_code(&self) -> crate::logging::Code {
        match self {
            ScanError::InvalidCharacter { .. } => codes::lexical::INVALID_CHARACTER,
            ScanError::UnterminatedComment { .. } => codes::lexical::UNTERMINATED_COMMENT,
            ScanError::TruncatedToken { .. } => codes::lexical::TRUNCATED_TOKEN,
            ScanError::InvalidToken { .. } => codes::lexical::INVALID_TOKEN,
            ScanError::Io { .. } => codes::input::IO_ERROR,
        }
    }

    /// The message without its line suffix, for events that carry the line separately
    pub fn detail(&self) -> String {
        match self {
            ScanError::InvalidCharacter { character, .. } => {
                format!("Invalid character {:?}", character)
            }
            ScanError::UnterminatedComment { .. } => "Unterminated comment".to_string(),
            ScanError::TruncatedToken { text, .. } => format!("Truncated token '{}'", text),
            ScanError::InvalidToken { .. } => "Invalid token".to_string(),
            ScanError::Io { message, .. } => format!("Read failure: {}", message),
        }
    }

    /// Line reported with the failure
    pub fn line(&self) -> u32 {
        match self {
            ScanError::InvalidCharacter { line, .. }
            | ScanError::UnterminatedComment { line }
            | ScanError::TruncatedToken { line, .. }
            | ScanError::InvalidToken { line }
            | ScanError::Io { line, .. } => *line,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_messages() {
        let error = ScanError::InvalidCharacter {
            character: '@',
            line: 2,
        };
        assert_eq!(error.to_string(), "Invalid character '@' at line 2");

        let error = ScanError::TruncatedToken {
            text: "ab".to_string(),
            line: 5,
        };
        assert_eq!(error.to_string(), "Truncated token 'ab' at line 5");
        assert_eq!(error.line(), 5);
        assert_eq!(error.detail(), "Truncated token 'ab'");
    }

    #[test]
    fn test_detail_omits_line() {
        let errors = [
            ScanError::InvalidCharacter {
                character: '@',
                line: 7,
            },
            ScanError::UnterminatedComment { line: 7 },
            ScanError::InvalidToken { line: 7 },
            ScanError::Io {
                message: "device unplugged".to_string(),
                line: 7,
            },
        ];

        for error in errors {
            assert!(!error.detail().contains("line"), "{}", error.detail());
            assert!(error.to_string().starts_with(error.detail().as_str()));
        }
    }

    #[test]
    fn test_codes_have_metadata() {
        let errors = [
            ScanError::InvalidCharacter {
                character: '~',
                line: 1,
            },
            ScanError::UnterminatedComment { line: 1 },
            ScanError::TruncatedToken {
                text: "#".to_string(),
                line: 1,
            },
            ScanError::InvalidToken { line: 1 },
            ScanError::Io {
                message: "broken pipe".to_string(),
                line: 1,
            },
        ];

        for error in errors {
            let code = error.error_code();
            assert!(codes::get_error_metadata(code.as_str()).is_some());
            assert!(codes::requires_halt(code.as_str()));
        }
    }
}
