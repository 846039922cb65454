//! Character-level primitives. Every token skips the whitespace in front of
//! it, so failures point at the first significant character.

use super::combinators::{Failure, PResult};

const PUNCTUATION: &str = "|=():,{};[]->";

/// Characters that end an identifier.
pub fn is_punctuation(c: char) -> bool {
    c.is_whitespace() || PUNCTUATION.contains(c)
}

pub fn is_identifier_start(c: char) -> bool {
    !c.is_ascii_digit() && !is_punctuation(c)
}

pub fn is_identifier_body(c: char) -> bool {
    !is_punctuation(c)
}

/// Skip whitespace, newlines included. Never fails.
pub fn spaces(input: &str) -> &str {
    input.trim_start()
}

/// An identifier: a non-digit, non-punctuation character followed by any
/// number of non-punctuation characters.
pub fn identifier(input: &str) -> PResult<'_, &str> {
    let input = spaces(input);
    match input.chars().next() {
        | Some(c) if is_identifier_start(c) => {
            let end = input.find(|c: char| !is_identifier_body(c)).unwrap_or(input.len());
            Ok((&input[..end], &input[end..]))
        }
        | _ => Err(Failure::new("an identifier", input)),
    }
}

/// A fixed piece of punctuation such as `::` or `->`.
pub fn symbol<'i>(sym: &'static str) -> impl Fn(&'i str) -> PResult<'i, &'i str> {
    move |input: &'i str| {
        let input = spaces(input);
        match input.strip_prefix(sym) {
            | Some(rest) => Ok((&input[..sym.len()], rest)),
            | None => Err(Failure::new(format!("`{sym}`"), input)),
        }
    }
}

/// A reserved word; it must not run on into an identifier.
pub fn keyword<'i>(word: &'static str) -> impl Fn(&'i str) -> PResult<'i, &'i str> {
    move |input: &'i str| {
        let input = spaces(input);
        match input.strip_prefix(word) {
            | Some(rest) if !rest.starts_with(is_identifier_body) => Ok((&input[..word.len()], rest)),
            | _ => Err(Failure::new(format!("`{word}`"), input)),
        }
    }
}

/// Only whitespace is left.
pub fn end_of_input(input: &str) -> PResult<'_, ()> {
    let input = spaces(input);
    if input.is_empty() { Ok(((), input)) } else { Err(Failure::new("end of input", input)) }
}
