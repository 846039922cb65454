//! The surface grammar of algebraic data declarations.
//!
//! ```text
//! data Option A = None | Some A
//! data Constrained (A :: string) = Fetching | GotData A
//! data User = User { name :: string, surname :: string }
//! ```

pub mod textual {
    /// Identifier recognition, punctuation and whitespace.
    pub mod lexer;
    /// Parser trait and the generic combinators.
    pub mod combinators;
    pub use combinators::*;
    /// Grammar rules from types up to whole declarations.
    pub mod grammar;
    /// Parse failure reporting.
    pub mod err;
    pub use err::*;

    #[cfg(test)]
    mod tests;
}

pub use textual::err::ParseFailure;

use adtc_syntax::Declaration;
use textual::Parser;

/// Parse exactly one declaration; trailing input other than whitespace fails.
pub fn parse(input: &str) -> Result<Declaration, ParseFailure> {
    log::trace!("parsing {} bytes of source", input.len());
    match textual::grammar::data.parse(input) {
        | Ok((data, _)) => Ok(data),
        | Err(failure) => {
            log::debug!("parse failed: expected {} at offset {}", failure.expected, input.len() - failure.remaining.len());
            Err(failure.into())
        }
    }
}
