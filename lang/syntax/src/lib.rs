//! The declaration model: the immutable tree the parser builds and the
//! generator reads.

pub mod fmt;
pub use fmt::*;

pub mod err;
pub use err::*;

mod impls;
mod ugly;
pub use ugly::Formatter;

#[cfg(test)]
mod tests;

use derive_more::From;

/* ---------------------------------- Types --------------------------------- */

/// `T A B`, a named type applied to its arguments
#[derive(Clone, Debug, Hash, PartialEq, Eq)]
pub struct TypeRef {
    pub name: String,
    pub args: Vec<Type>,
}

/// `(A, B, ...)` with at least two components
#[derive(Clone, Debug, Hash, PartialEq, Eq)]
pub struct Tuple(pub Vec<Type>);

/// `A -> B`
#[derive(Clone, Debug, Hash, PartialEq, Eq)]
pub struct Arrow {
    pub domain: Box<Type>,
    pub codomain: Box<Type>,
}

/// `()` as unit type
#[derive(Clone, Debug, Hash, PartialEq, Eq)]
pub struct Triv;

#[derive(From, Clone, Debug, Hash, PartialEq, Eq)]
pub enum Type {
    Ref(TypeRef),
    Tuple(Tuple),
    Arrow(Arrow),
    Unit(Triv),
}

/* ------------------------------- Declaration ------------------------------ */

/// One field of a constructor; positional when `name` is absent.
#[derive(Clone, Debug, Hash, PartialEq, Eq)]
pub struct Member {
    pub name: Option<String>,
    pub ty: Type,
}

/// `A` or `(A :: string)`
#[derive(Clone, Debug, Hash, PartialEq, Eq)]
pub struct TypeParameter {
    pub name: String,
    pub constraint: Option<Type>,
}

/// A named alternative. Either every member is named or none is.
#[derive(Clone, Debug, Hash, PartialEq, Eq)]
pub struct Constructor {
    name: String,
    members: Vec<Member>,
}

/// `data Name params = C1 ... | C2 ...`
///
/// Constructor names are unique and the constructor list is never empty; both
/// are checked by [`Declaration::new`], so every value of this type is safe to
/// hand to the generator.
#[derive(Clone, Debug, Hash, PartialEq, Eq)]
pub struct Declaration {
    name: String,
    params: Vec<TypeParameter>,
    ctors: Vec<Constructor>,
}
