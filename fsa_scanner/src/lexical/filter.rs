//! Input filter: strips comments, validates the alphabet, counts lines
//!
//! The automaton never sees a comment marker or a byte outside the accepted
//! alphabet, so every column of its table is reachable only by legal input.

use super::category::{Category, Input};
use super::error::ScanError;
use super::source::ByteSource;
use crate::config::compile_time::alphabet::{COMMENT_MARKER, NEWLINE};
use crate::config::compile_time::tokens::INITIAL_LINE;
use std::io::Read;

pub struct InputFilter<R: Read> {
    source: ByteSource<R>,
    /// Line of the next byte to be read
    line: u32,
    comments_skipped: usize,
}

impl<R: Read> InputFilter<R> {
    pub fn new(reader: R) -> Self {
        Self {
            source: ByteSource::new(reader),
            line: INITIAL_LINE,
            comments_skipped: 0,
        }
    }

    pub fn line(&self) -> u32 {
        self.line
    }

    pub fn comments_skipped(&self) -> usize {
        self.comments_skipped
    }

    /// Next character outside any comment
    pub fn next_char(&mut self) -> Result<Input, ScanError> {
        loop {
            let byte = match self.read_counted()? {
                Some(byte) => byte,
                None => return Ok(Input::EndOfInput),
            };

            if byte == COMMENT_MARKER {
                self.skip_comment()?;
                continue;
            }

            if Category::of_byte(byte).is_none() {
                return Err(ScanError::InvalidCharacter {
                    character: char::from(byte),
                    line: self.line,
                });
            }

            return Ok(Input::Byte(byte));
        }
    }

    /// Push back the byte just returned by `next_char`
    pub fn unread(&mut self, byte: u8) {
        if byte == NEWLINE {
            self.line = self.line.saturating_sub(1);
        }
        self.source.unread(byte);
    }

    fn read_counted(&mut self) -> Result<Option<u8>, ScanError> {
        let byte = self
            .source
            .read_byte()
            .map_err(|error| ScanError::io(&error, self.line))?;

        if byte == Some(NEWLINE) {
            self.line += 1;
        }

        Ok(byte)
    }

    // Opening marker already consumed; body bytes are not validated.
    fn skip_comment(&mut self) -> Result<(), ScanError> {
        let opened_on = self.line;

        loop {
            match self.read_counted()? {
                Some(COMMENT_MARKER) => {
                    self.comments_skipped += 1;
                    return Ok(());
                }
                Some(_) => {}
                None => return Err(ScanError::UnterminatedComment { line: opened_on }),
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use assert_matches::assert_matches;

    fn drain(text: &str) -> Result<(Vec<u8>, u32), ScanError> {
        let mut filter = InputFilter::new(text.as_bytes());
        let mut bytes = Vec::new();
        while let Input::Byte(byte) = filter.next_char()? {
            bytes.push(byte);
        }
        Ok((bytes, filter.line()))
    }

    #[test]
    fn test_comment_is_removed() {
        let (bytes, line) = drain("a!skip me!b").unwrap();
        assert_eq!(bytes, b"ab");
        assert_eq!(line, 1);
    }

    #[test]
    fn test_adjacent_comments() {
        let (bytes, _) = drain("!one!!two!x").unwrap();
        assert_eq!(bytes, b"x");
    }

    #[test]
    fn test_newlines_inside_comment_are_counted() {
        let mut filter = InputFilter::new("!a\nb\n!c".as_bytes());
        assert_eq!(filter.next_char().unwrap(), Input::Byte(b'c'));
        assert_eq!(filter.line(), 3);
        assert_eq!(filter.comments_skipped(), 1);
    }

    #[test]
    fn test_comment_body_is_not_validated() {
        let (bytes, _) = drain("!@~[]!$").unwrap();
        assert_eq!(bytes, b"$");
    }

    #[test]
    fn test_unterminated_comment_reports_opening_line() {
        let result = drain("a\n\n!never\nclosed");
        assert_matches!(result, Err(ScanError::UnterminatedComment { line: 3 }));
    }

    #[test]
    fn test_invalid_character_with_line() {
        let result = drain("ab\n\n c@");
        assert_matches!(
            result,
            Err(ScanError::InvalidCharacter {
                character: '@',
                line: 3
            })
        );
    }

    #[test]
    fn test_end_of_input_repeats() {
        let mut filter = InputFilter::new("".as_bytes());
        assert_eq!(filter.next_char().unwrap(), Input::EndOfInput);
        assert_eq!(filter.next_char().unwrap(), Input::EndOfInput);
        assert_eq!(filter.line(), 1);
    }

    #[test]
    fn test_newline_pushback_restores_line() {
        let mut filter = InputFilter::new("\nx".as_bytes());
        assert_eq!(filter.next_char().unwrap(), Input::Byte(b'\n'));
        assert_eq!(filter.line(), 2);

        filter.unread(b'\n');
        assert_eq!(filter.line(), 1);

        assert_eq!(filter.next_char().unwrap(), Input::Byte(b'\n'));
        assert_eq!(filter.line(), 2);
        assert_eq!(filter.next_char().unwrap(), Input::Byte(b'x'));
    }
}
