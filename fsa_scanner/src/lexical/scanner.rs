//! Table-driven scanner session
//!
//! A session owns one input stream, its line counter, and a single byte of
//! pushback. Each `next_token` call walks the transition table from `Start`
//! until a cell accepts or rejects.

use super::automaton::{Action, State};
use super::category::{Category, Input};
use super::error::ScanError;
use super::filter::InputFilter;
use crate::config::runtime::ScannerPreferences;
use crate::logging::codes;
use crate::tokens::{Token, TokenKind};
use crate::{log_debug, log_success};
use std::io::Read;

/// Per-session scan statistics
#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct ScanMetrics {
    pub total_tokens: usize,
    pub t1_tokens: usize,
    pub t2_tokens: usize,
    pub t3_tokens: usize,
    pub comments_skipped: usize,
    /// Bytes handed to the automaton, net of pushback; comment bytes excluded
    pub bytes_consumed: usize,
    pub pushbacks: usize,
    /// Line counter after the most recent token
    pub lines: u32,
}

impl ScanMetrics {
    fn record_token(&mut self, token: &Token) {
        match token.kind {
            TokenKind::T1 => self.t1_tokens += 1,
            TokenKind::T2 => self.t2_tokens += 1,
            TokenKind::T3 => self.t3_tokens += 1,
            TokenKind::Eof => return,
        }
        self.total_tokens += 1;
    }
}

pub struct Scanner<R: Read> {
    filter: InputFilter<R>,
    preferences: ScannerPreferences,
    metrics: ScanMetrics,
    /// First failure; replayed on every later call
    failure: Option<ScanError>,
    /// Set once the iterator has yielded `Eof` or an error
    finished: bool,
}

impl<R: Read> Scanner<R> {
    pub fn new(reader: R) -> Self {
        Self::with_preferences(reader, ScannerPreferences::default())
    }

    pub fn with_preferences(reader: R, preferences: ScannerPreferences) -> Self {
        Self {
            filter: InputFilter::new(reader),
            preferences,
            metrics: ScanMetrics::default(),
            failure: None,
            finished: false,
        }
    }

    /// Scan the next token. After end of input every call returns another
    /// `Eof`; after a failure every call returns the same error.
    pub fn next_token(&mut self) -> Result<Token, ScanError> {
        if let Some(error) = &self.failure {
            return Err(error.clone());
        }

        match self.scan() {
            Ok(token) => {
                if self.preferences.collect_metrics {
                    self.metrics.record_token(&token);
                    self.metrics.comments_skipped = self.filter.comments_skipped();
                    self.metrics.lines = self.filter.line();
                }

                if token.is_eof() {
                    log_success!(codes::success::TOKENIZATION_COMPLETE, "Reached end of input",
                        "line" => token.line,
                        "tokens" => self.metrics.total_tokens
                    );
                } else if self.preferences.log_token_events {
                    log_debug!("Token accepted",
                        line = token.line,
                        "code" => codes::success::TOKEN_ACCEPTED,
                        "kind" => token.kind,
                        "text" => token.text.as_str()
                    );
                }

                Ok(token)
            }
            Err(error) => {
                log_debug!(&error.detail(),
                    line = error.line(),
                    "code" => error.error_code(),
                    "kind" => "scan_failure"
                );
                self.failure = Some(error.clone());
                Err(error)
            }
        }
    }

    /// Line counter of the underlying filter
    pub fn line(&self) -> u32 {
        self.filter.line()
    }

    pub fn metrics(&self) -> &ScanMetrics {
        &self.metrics
    }

    pub fn preferences(&self) -> &ScannerPreferences {
        &self.preferences
    }

    fn scan(&mut self) -> Result<Token, ScanError> {
        let mut state = State::Start;
        let mut text = String::new();
        let mut token_line = None;

        loop {
            let input = self.filter.next_char()?;
            let Some(category) = Category::of(input) else {
                return Err(self.rejection(input, &text));
            };

            if input.byte().is_some() && self.preferences.collect_metrics {
                self.metrics.bytes_consumed += 1;
            }

            let action = state.on(category);
            if self.preferences.trace_transitions {
                log_debug!("Transition",
                    line = self.filter.line(),
                    "state" => state,
                    "category" => category,
                    "action" => action
                );
            }

            match action {
                Action::Advance(next) => {
                    if let Input::Byte(byte) = input {
                        if !(state == State::Start && category == Category::Whitespace) {
                            token_line.get_or_insert(self.filter.line());
                            text.push(char::from(byte));
                        }
                    }
                    state = next;
                }
                Action::Accept(TokenKind::Eof) => {
                    return Ok(Token::eof(self.filter.line()));
                }
                Action::Accept(kind) => {
                    if let Input::Byte(byte) = input {
                        self.push_back(byte);
                    }
                    let line = token_line.unwrap_or_else(|| self.filter.line());
                    return Ok(Token::new(kind, text, line));
                }
                Action::Reject => return Err(self.rejection(input, &text)),
            }
        }
    }

    fn push_back(&mut self, byte: u8) {
        self.filter.unread(byte);
        if self.preferences.collect_metrics {
            self.metrics.bytes_consumed -= 1;
            self.metrics.pushbacks += 1;
        }
    }

    fn rejection(&self, input: Input, text: &str) -> ScanError {
        let line = self.filter.line();
        match input {
            Input::Byte(byte) if text.is_empty() => ScanError::InvalidCharacter {
                character: char::from(byte),
                line,
            },
            _ if !text.is_empty() => ScanError::TruncatedToken {
                text: text.to_string(),
                line,
            },
            _ => ScanError::InvalidToken { line },
        }
    }
}

impl<'a> Scanner<&'a [u8]> {
    /// Session over an in-memory string
    pub fn from_text(text: &'a str) -> Self {
        Self::new(text.as_bytes())
    }
}

/// Yields every token through `Eof`, or through the first error, then stops.
impl<R: Read> Iterator for Scanner<R> {
    type Item = Result<Token, ScanError>;

    fn next(&mut self) -> Option<Self::Item> {
        if self.finished {
            return None;
        }

        let result = self.next_token();
        self.finished = match &result {
            Ok(token) => token.is_eof(),
            Err(_) => true,
        };
        Some(result)
    }
}
