use adtc_syntax::ModelError;
use std::borrow::Cow;

/// A failed parse: what was expected and where.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Failure<'i> {
    pub expected: Cow<'static, str>,
    /// Unconsumed suffix of the input at the failure point.
    pub remaining: &'i str,
    /// Set when the text is well-formed but violates a model invariant.
    pub reason: Option<ModelError>,
}

impl<'i> Failure<'i> {
    pub fn new(expected: impl Into<Cow<'static, str>>, remaining: &'i str) -> Self {
        Failure { expected: expected.into(), remaining, reason: None }
    }
    pub fn invalid(error: ModelError, remaining: &'i str) -> Self {
        Failure { expected: Cow::Owned(error.to_string()), remaining, reason: Some(error) }
    }
    pub fn relabel(self, label: &'static str) -> Self {
        Failure { expected: Cow::Borrowed(label), ..self }
    }
    /// The failure that consumed more input; ties go to `other`.
    pub fn furthest(self, other: Self) -> Self {
        if self.remaining.len() < other.remaining.len() { self } else { other }
    }
}

/// Success carries the value and the rest of the input.
pub type PResult<'i, T> = Result<(T, &'i str), Failure<'i>>;

/// A grammar rule as a plain function pointer, the element type of
/// [`choice`].
pub type Rule<'i, T> = fn(&'i str) -> PResult<'i, T>;

pub trait Parser<'i, T> {
    fn parse(&self, input: &'i str) -> PResult<'i, T>;
}

impl<'i, T, F> Parser<'i, T> for F
where
    F: Fn(&'i str) -> PResult<'i, T>,
{
    fn parse(&self, input: &'i str) -> PResult<'i, T> {
        self(input)
    }
}

/* ------------------------------- Combinators ------------------------------ */

/// Replace the label of any failure of `parser`; the position is kept.
///
/// Wrapping happens outside-in, so the outermost label is the one reported.
pub fn expected<'i, T>(
    label: &'static str, parser: impl Parser<'i, T>,
) -> impl Fn(&'i str) -> PResult<'i, T> {
    move |input| parser.parse(input).map_err(|failure| failure.relabel(label))
}

/// Try each alternative on the same input; the first success wins.
///
/// When every alternative fails, the failure that reached furthest is reported.
pub fn choice<'i, T>(
    alternatives: &[Rule<'i, T>], input: &'i str,
) -> PResult<'i, T> {
    let mut failure: Option<Failure<'i>> = None;
    for alternative in alternatives {
        match alternative(input) {
            | Ok(success) => return Ok(success),
            | Err(next) => {
                failure = Some(match failure {
                    | Some(prev) => prev.furthest(next),
                    | None => next,
                })
            }
        }
    }
    Err(failure.unwrap_or_else(|| Failure::new("an alternative", input)))
}

/// `Some` on success, `None` (consuming nothing) on failure.
pub fn optional<'i, T>(parser: impl Parser<'i, T>) -> impl Fn(&'i str) -> PResult<'i, Option<T>> {
    move |input| match parser.parse(input) {
        | Ok((value, rest)) => Ok((Some(value), rest)),
        | Err(_) => Ok((None, input)),
    }
}

/// Zero or more; a failed attempt backtracks to the end of the last success.
pub fn many<'i, T>(parser: impl Parser<'i, T>) -> impl Fn(&'i str) -> PResult<'i, Vec<T>> {
    move |mut input| {
        let mut items = Vec::new();
        while let Ok((item, rest)) = parser.parse(input) {
            items.push(item);
            if rest.len() == input.len() {
                break;
            }
            input = rest;
        }
        Ok((items, input))
    }
}

pub fn many1<'i, T>(parser: impl Parser<'i, T>) -> impl Fn(&'i str) -> PResult<'i, Vec<T>> {
    move |input| {
        let (first, mut input) = parser.parse(input)?;
        let mut items = vec![first];
        while let Ok((item, rest)) = parser.parse(input) {
            items.push(item);
            if rest.len() == input.len() {
                break;
            }
            input = rest;
        }
        Ok((items, input))
    }
}

/// `p (sep p)*`
pub fn sep_by1<'i, S, T>(
    sep: impl Parser<'i, S>, parser: impl Parser<'i, T>,
) -> impl Fn(&'i str) -> PResult<'i, Vec<T>> {
    move |input| {
        let (first, mut input) = parser.parse(input)?;
        let mut items = vec![first];
        loop {
            let Ok((_, after_sep)) = sep.parse(input) else { break };
            let Ok((item, rest)) = parser.parse(after_sep) else { break };
            items.push(item);
            input = rest;
        }
        Ok((items, input))
    }
}

/// `(p (sep p)*)?`
pub fn sep_by<'i, S, T>(
    sep: impl Parser<'i, S>, parser: impl Parser<'i, T>,
) -> impl Fn(&'i str) -> PResult<'i, Vec<T>> {
    let items = sep_by1(sep, parser);
    move |input| match items(input) {
        | Ok(success) => Ok(success),
        | Err(_) => Ok((Vec::new(), input)),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::textual::lexer::symbol;
    use pretty_assertions::assert_eq;

    fn a<'i>(input: &'i str) -> PResult<'i, char> {
        let (_, rest) = symbol("a")(input)?;
        Ok(('a', rest))
    }
    fn ab<'i>(input: &'i str) -> PResult<'i, char> {
        let (_, rest) = symbol("a")(input)?;
        let (_, rest) = symbol("b")(rest)?;
        Ok(('b', rest))
    }

    #[test]
    fn choice_reports_furthest_failure() {
        let rules: [Rule<'_, char>; 2] = [ab as Rule<'_, char>, a as Rule<'_, char>];
        let failure = choice(&rules, "x").unwrap_err();
        assert_eq!(failure.remaining, "x");
        let same: [Rule<'_, char>; 2] = [ab as Rule<'_, char>, ab as Rule<'_, char>];
        let failure = choice(&same, "ac").unwrap_err();
        assert_eq!(failure.remaining, "c");
        assert_eq!(choice(&rules, "ac"), Ok(('a', "c")));
    }

    #[test]
    fn repetition_backtracks() {
        assert_eq!(many(a)("a a b"), Ok((vec!['a', 'a'], " b")));
        assert_eq!(many(a)("b"), Ok((vec![], "b")));
        assert!(many1(a)("b").is_err());
        let comma_separated = sep_by(symbol(","), a);
        assert_eq!(comma_separated("a, a,"), Ok((vec!['a', 'a'], ",")));
        assert_eq!(comma_separated(""), Ok((vec![], "")));
    }

    #[test]
    fn outermost_label_wins() {
        let inner = expected("an inner thing", ab);
        let outer = expected("an outer thing", inner);
        let failure = outer("ax").unwrap_err();
        assert_eq!(failure.expected, "an outer thing");
        assert_eq!(failure.remaining, "x");
    }

    #[test]
    fn optional_consumes_nothing_on_failure() {
        assert_eq!(optional(ab)("ax"), Ok((None, "ax")));
        assert_eq!(optional(ab)("ab!"), Ok((Some('b'), "!")));
    }
}
