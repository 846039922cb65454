//! Grammar rules, from atoms up to whole declarations.
//!
//! ```text
//! declaration   := "data" identifier parameter* "=" constructor ("|" constructor)* EOF
//! parameter     := identifier | "(" identifier "::" type ")"
//! constructor   := identifier ("{" field ("," field)* "}" | member*)
//! member        := atom "->" type | atom
//! field         := identifier "::" type
//! type          := (typeRef | atom) "->" type | typeRef | atom
//! typeRef       := identifier atom*
//! atom          := identifier | "(" ")" | "(" type ")" | "(" type ("," type)+ ")"
//! ```
//!
//! Structural checks (duplicate names) run only once the whole text has been
//! recognized, and point at the second occurrence of the offending name.

use super::{
    combinators::*,
    lexer::{self, end_of_input, keyword, spaces, symbol},
};
use adtc_syntax::{Constructor, Declaration, Member, ModelError, Type, TypeParameter};

/// A parsed item together with the input it started at.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Located<'i, T> {
    pub at: &'i str,
    pub item: T,
}

fn located<'i, T>(parser: impl Parser<'i, T>) -> impl Fn(&'i str) -> PResult<'i, Located<'i, T>> {
    move |input: &'i str| {
        let at = spaces(input);
        let (item, rest) = parser.parse(at)?;
        Ok((Located { at, item }, rest))
    }
}

/* ---------------------------------- Types --------------------------------- */

pub fn identifier<'i>(input: &'i str) -> PResult<'i, String> {
    let (name, rest) = lexer::identifier(input)?;
    Ok((name.to_owned(), rest))
}

fn variable<'i>(input: &'i str) -> PResult<'i, Type> {
    let (name, rest) = lexer::identifier(input)?;
    Ok((Type::var(name), rest))
}

/// `()`, `(T)` or `(A, B, ...)`.
pub fn parenthesized<'i>(input: &'i str) -> PResult<'i, Type> {
    expected("a tuple", parenthesized_types)(input)
}

fn parenthesized_types<'i>(input: &'i str) -> PResult<'i, Type> {
    let (_, rest) = symbol("(")(input)?;
    let (mut types, rest) = sep_by(symbol(","), type_)(rest)?;
    let (_, rest) = symbol(")")(rest)?;
    let ty = match types.len() {
        | 0 => Type::unit(),
        | 1 => types.remove(0),
        | _ => Type::tuple(types),
    };
    Ok((ty, rest))
}

pub fn atom<'i>(input: &'i str) -> PResult<'i, Type> {
    let rules: [Rule<'i, Type>; 2] = [variable as Rule<'i, Type>, parenthesized as Rule<'i, Type>];
    choice(&rules, input)
}

/// `T A B`: a name applied to zero or more atoms.
pub fn type_ref<'i>(input: &'i str) -> PResult<'i, Type> {
    let (name, rest) = lexer::identifier(input)?;
    let (args, rest) = many(atom)(rest)?;
    Ok((Type::reference(name, args), rest))
}

pub fn type_<'i>(input: &'i str) -> PResult<'i, Type> {
    let rules: [Rule<'i, Type>; 2] = [type_ref as Rule<'i, Type>, atom as Rule<'i, Type>];
    let (domain, rest) = choice(&rules, input)?;
    arrow_tail(domain, rest)
}

/// `-> T` after `domain` makes a function type; once the arrow is seen a
/// codomain is required.
fn arrow_tail<'i>(domain: Type, input: &'i str) -> PResult<'i, Type> {
    match symbol("->")(input) {
        | Ok((_, rest)) => {
            let (codomain, rest) = expected("a function type", type_)(rest)?;
            Ok((Type::arrow(domain, codomain), rest))
        }
        | Err(_) => Ok((domain, input)),
    }
}

/* ------------------------------- Constructors ----------------------------- */

/// A positional member; type arguments inside it must be parenthesized.
pub fn member<'i>(input: &'i str) -> PResult<'i, Member> {
    let (domain, rest) = atom(input)?;
    let (ty, rest) = arrow_tail(domain, rest)?;
    Ok((Member::positional(ty), rest))
}

/// `name :: T`
pub fn field<'i>(input: &'i str) -> PResult<'i, Member> {
    let (name, rest) = lexer::identifier(input)?;
    let (_, rest) = symbol("::")(rest)?;
    let (ty, rest) = type_(rest)?;
    Ok((Member::named(name, ty), rest))
}

/// A constructor whose members have not been checked yet.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct RawConstructor<'i> {
    pub name: String,
    pub members: Vec<Located<'i, Member>>,
}

impl<'i> RawConstructor<'i> {
    /// Check the members; a violation is reported at the offending field, or
    /// at `at` when no single field is to blame.
    pub fn build(self, at: &'i str) -> Result<Constructor, Failure<'i>> {
        let RawConstructor { name, members } = self;
        let fields: Vec<_> = (members.iter())
            .filter_map(|m| Some((m.at, m.item.name.clone()?)))
            .collect();
        let members = members.into_iter().map(|m| m.item).collect();
        Constructor::new(name, members).map_err(|error| {
            let spot = match &error {
                | ModelError::DuplicateField { field, .. } => second_occurrence(field, &fields),
                | _ => None,
            };
            Failure::invalid(error, spot.unwrap_or(at))
        })
    }
}

fn record_constructor<'i>(input: &'i str) -> PResult<'i, RawConstructor<'i>> {
    let (name, rest) = identifier(input)?;
    let (_, rest) = symbol("{")(rest)?;
    let (members, rest) = sep_by1(symbol(","), located(field))(rest)?;
    let (_, rest) = symbol("}")(rest)?;
    Ok((RawConstructor { name, members }, rest))
}

fn positional_constructor<'i>(input: &'i str) -> PResult<'i, RawConstructor<'i>> {
    let (name, rest) = identifier(input)?;
    let (members, rest) = many(located(member))(rest)?;
    Ok((RawConstructor { name, members }, rest))
}

/// The record form is tried first.
pub fn constructor<'i>(input: &'i str) -> PResult<'i, RawConstructor<'i>> {
    let rules: [Rule<'i, RawConstructor<'i>>; 2] = [record_constructor as Rule<'i, RawConstructor<'i>>, positional_constructor as Rule<'i, RawConstructor<'i>>];
    choice(&rules, input)
}

/* ------------------------------- Declaration ------------------------------ */

fn unconstrained_parameter<'i>(input: &'i str) -> PResult<'i, TypeParameter> {
    let (name, rest) = lexer::identifier(input)?;
    Ok((TypeParameter::new(name), rest))
}

fn constrained_parameter<'i>(input: &'i str) -> PResult<'i, TypeParameter> {
    let (_, rest) = symbol("(")(input)?;
    let (name, rest) = lexer::identifier(rest)?;
    let (_, rest) = symbol("::")(rest)?;
    let (constraint, rest) = type_(rest)?;
    let (_, rest) = symbol(")")(rest)?;
    Ok((TypeParameter::constrained(name, constraint), rest))
}

fn parameter_alternatives<'i>(input: &'i str) -> PResult<'i, TypeParameter> {
    let rules: [Rule<'i, TypeParameter>; 2] = [unconstrained_parameter as Rule<'i, TypeParameter>, constrained_parameter as Rule<'i, TypeParameter>];
    choice(&rules, input)
}

/// `A` or `(A :: T)`
pub fn parameter<'i>(input: &'i str) -> PResult<'i, TypeParameter> {
    expected("a parameter", parameter_alternatives)(input)
}

/// A whole declaration, followed by nothing but whitespace.
pub fn data<'i>(input: &'i str) -> PResult<'i, Declaration> {
    expected("a data declaration", declaration)(input)
}

fn declaration<'i>(input: &'i str) -> PResult<'i, Declaration> {
    let (_, rest) = keyword("data")(input)?;
    let (name, rest) = identifier(rest)?;
    let (params, rest) = many(located(parameter))(rest)?;
    let (_, rest) = symbol("=")(rest)?;
    let (ctors, rest) = sep_by1(symbol("|"), located(constructor))(rest)?;
    let (_, rest) = end_of_input(rest)?;

    let param_spots: Vec<_> = params.iter().map(|p| (p.at, p.item.name.clone())).collect();
    let ctor_spots: Vec<_> = ctors.iter().map(|c| (c.at, c.item.name.clone())).collect();
    let params = params.into_iter().map(|p| p.item).collect();
    let ctors = (ctors.into_iter())
        .map(|Located { at, item }| item.build(at))
        .collect::<Result<Vec<_>, _>>()?;
    match Declaration::new(name, params, ctors) {
        | Ok(data) => Ok((data, rest)),
        | Err(error) => {
            let spot = match &error {
                | ModelError::DuplicateParameter { param, .. } => {
                    second_occurrence(param, &param_spots)
                }
                | ModelError::DuplicateConstructor { ctor, .. } => {
                    second_occurrence(ctor, &ctor_spots)
                }
                | _ => None,
            };
            Err(Failure::invalid(error, spot.unwrap_or_else(|| spaces(input))))
        }
    }
}

fn second_occurrence<'i>(name: &str, spots: &[(&'i str, String)]) -> Option<&'i str> {
    spots.iter().filter(|(_, n)| n == name).nth(1).map(|(at, _)| *at)
}
