use super::instruction::Instruction;
use super::lex::*;
use super::parse::*;
use super::token::*;
use super::Error;
use crate::error;
use tracing::debug;

/// One line of program text, normalized to uppercase and trimmed.
/// Lines are numbered from 1 in file order.

#[derive(Debug, PartialEq)]
pub struct Line {
    number: usize,
    text: String,
    tokens: Vec<Token>,
}

impl Line {
    pub fn new(number: usize, s: &str) -> Line {
        let text = s.trim().to_ascii_uppercase();
        let tokens = if text.starts_with('#') {
            vec![]
        } else {
            lex(&text)
        };
        Line {
            number,
            text,
            tokens,
        }
    }

    pub fn number(&self) -> usize {
        self.number
    }

    pub fn text(&self) -> &str {
        &self.text
    }

    pub fn is_empty(&self) -> bool {
        self.text.is_empty()
    }

    pub fn is_comment(&self) -> bool {
        self.text.starts_with('#')
    }

    /// Blank lines and comments produce no instruction.
    pub fn is_skipped(&self) -> bool {
        self.is_empty() || self.is_comment()
    }

    pub fn instruction(&self) -> Result<Instruction, Error> {
        parse(Some(self.number), &self.tokens).map_err(|e| {
            debug!(line = self.number, reason = %e, "rejected line");
            error!(InvalidInstruction, Some(self.number); self.text.clone())
        })
    }
}

impl std::fmt::Display for Line {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        write!(f, "{}", self.text)
    }
}
