use super::combinators::Failure;
use adtc_syntax::ModelError;
use thiserror::Error;

/// The single error kind of the front end.
///
/// `remaining` is the exact unconsumed suffix of the input at the point of
/// failure; `expected` names the outermost construct being parsed.
#[derive(Error, Clone, Debug, PartialEq, Eq)]
#[error("Expected {expected}, cannot parse {remaining:?}{}", fmt_reason(.reason))]
pub struct ParseFailure {
    pub expected: String,
    pub remaining: String,
    pub reason: Option<ModelError>,
}

fn fmt_reason(reason: &Option<ModelError>) -> String {
    match reason {
        | Some(reason) => format!(" ({reason})"),
        | None => String::new(),
    }
}

impl ParseFailure {
    /// Byte offset of the failure within `input`, which must be the text that
    /// was handed to the parser.
    pub fn offset(&self, input: &str) -> usize {
        input.len().saturating_sub(self.remaining.len())
    }
    /// One-based line and column of the failure within `input`.
    pub fn location(&self, input: &str) -> (usize, usize) {
        let consumed = input.get(..self.offset(input)).unwrap_or(input);
        let line = consumed.matches('\n').count() + 1;
        let column = match consumed.rfind('\n') {
            | Some(newline) => consumed[newline + 1..].chars().count() + 1,
            | None => consumed.chars().count() + 1,
        };
        (line, column)
    }
}

impl From<Failure<'_>> for ParseFailure {
    fn from(Failure { expected, remaining, reason }: Failure<'_>) -> Self {
        ParseFailure { expected: expected.into_owned(), remaining: remaining.to_owned(), reason }
    }
}
