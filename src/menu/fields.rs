// Prompted fields and answer parsing

use crate::errors::InputError;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FieldKey {
    Name,
    StudentId,
    Course,
    Amount,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FieldKind {
    /// Taken verbatim, empty allowed
    Text,
    /// Must parse to a finite number
    Number,
}

/// One question asked after a menu selection
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Field {
    pub key: FieldKey,
    pub message: &'static str,
    pub kind: FieldKind,
}

/// A parsed answer to a [`Field`]
#[derive(Debug, Clone, PartialEq)]
pub enum Answer {
    Text(String),
    Number(f64),
}

impl Field {
    /// Turn raw operator input into an answer.
    ///
    /// Text is kept as typed (only the line terminator is removed), so an
    /// identifier with stray spaces will not match anything.
    pub fn parse(&self, raw: &str) -> Result<Answer, InputError> {
        let line = raw.trim_end_matches(['\r', '\n']);
        match self.kind {
            FieldKind::Text => Ok(Answer::Text(line.to_string())),
            FieldKind::Number => parse_amount(line).map(Answer::Number),
        }
    }
}

/// Parse a fee amount. Negative values pass; NaN and infinities do not.
pub fn parse_amount(input: &str) -> Result<f64, InputError> {
    let trimmed = input.trim();
    match trimmed.parse::<f64>() {
        Ok(value) if value.is_finite() => Ok(value),
        _ => Err(InputError::InvalidAmount {
            input: trimmed.to_string(),
        }),
    }
}
