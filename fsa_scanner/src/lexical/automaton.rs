//! Fixed state-transition table driving token recognition
//!
//! Rows are [`State`]s, columns are [`Category`]s. Every cell is defined: it
//! either advances to another state, accepts a token kind, or rejects.

use super::category::Category;
use crate::config::compile_time::automaton::{CATEGORY_COUNT, STATE_COUNT};
use crate::tokens::TokenKind;
use std::fmt;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum State {
    Start = 0,
    /// Saw `"` or `#`; only a digit may follow
    HashOpened = 1,
    /// Digits after the opener; any non-digit ends a T1
    HashDigits = 2,
    LetterRun = 3,
    /// Digits after a letter run; any non-digit ends a T2
    LetterDigits = 4,
    /// A single symbol; the next character of any category ends a T3
    SymbolSeen = 5,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Action {
    Advance(State),
    Accept(TokenKind),
    Reject,
}

use Action::{Accept, Advance, Reject};

// Columns: whitespace, quote/hash, letter, digit, symbol, end of input
const TABLE: [[Action; CATEGORY_COUNT]; STATE_COUNT] = [
    [
        Advance(State::Start),
        Advance(State::HashOpened),
        Advance(State::LetterRun),
        Reject,
        Advance(State::SymbolSeen),
        Accept(TokenKind::Eof),
    ],
    [
        Reject,
        Reject,
        Reject,
        Advance(State::HashDigits),
        Reject,
        Reject,
    ],
    [
        Accept(TokenKind::T1),
        Accept(TokenKind::T1),
        Accept(TokenKind::T1),
        Advance(State::HashDigits),
        Accept(TokenKind::T1),
        Accept(TokenKind::T1),
    ],
    [
        Reject,
        Reject,
        Advance(State::LetterRun),
        Advance(State::LetterDigits),
        Reject,
        Reject,
    ],
    [
        Accept(TokenKind::T2),
        Accept(TokenKind::T2),
        Accept(TokenKind::T2),
        Advance(State::LetterDigits),
        Accept(TokenKind::T2),
        Accept(TokenKind::T2),
    ],
    [Accept(TokenKind::T3); CATEGORY_COUNT],
];

impl State {
    pub const ALL: [State; STATE_COUNT] = [
        State::Start,
        State::HashOpened,
        State::HashDigits,
        State::LetterRun,
        State::LetterDigits,
        State::SymbolSeen,
    ];

    /// Row index in the transition table
    pub fn index(self) -> usize {
        self as usize
    }

    /// Table lookup for the character just classified
    pub fn on(self, category: Category) -> Action {
        TABLE[self.index()][category.index()]
    }

    /// Whether some input completes a token from this state
    pub fn is_accepting(self) -> bool {
        Category::ALL
            .iter()
            .any(|category| matches!(self.on(*category), Accept(_)))
    }
}

/// Structural checks on the table: only `Start` turns end of input into `Eof`,
/// every other row is entered by some cell, and every row can reach a row
/// that accepts.
pub fn validate_table() -> Result<(), String> {
    for state in State::ALL {
        let accepts_eof = state.on(Category::EndOfInput) == Accept(TokenKind::Eof);
        if accepts_eof != (state == State::Start) {
            return Err(format!("State {} has the wrong end-of-input cell", state));
        }

        if state != State::Start && !is_entered(state) {
            return Err(format!("State {} is never entered", state));
        }

        if !reaches_accepting(state) {
            return Err(format!("State {} cannot reach an accepting state", state));
        }
    }

    Ok(())
}

fn is_entered(target: State) -> bool {
    State::ALL.iter().any(|state| {
        Category::ALL
            .iter()
            .any(|category| state.on(*category) == Advance(target))
    })
}

fn reaches_accepting(from: State) -> bool {
    let mut seen = [false; STATE_COUNT];
    let mut pending = vec![from];

    while let Some(state) = pending.pop() {
        if std::mem::replace(&mut seen[state.index()], true) {
            continue;
        }
        if state.is_accepting() {
            return true;
        }
        for category in Category::ALL {
            if let Advance(next) = state.on(category) {
                pending.push(next);
            }
        }
    }

    false
}

impl fmt::Display for State {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Debug::fmt(self, f)
    }
}

impl fmt::Display for Action {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Advance(state) => write!(f, "advance to {}", state),
            Accept(kind) => write!(f, "accept {}", kind),
            Reject => f.write_str("reject"),
        }
    }
}
