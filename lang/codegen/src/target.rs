use derive_more::From;

/* -------------------------------- Fragment -------------------------------- */

/// What a fragment stands for in the bundle.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum FragmentKind {
    Data,
    Constructor,
    Fold,
    Import,
    Accessor,
    Equality,
}

/// One top-level declaration of the output.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Fragment {
    pub kind: FragmentKind,
    pub item: Item,
}

/* ---------------------------------- Types --------------------------------- */

/// `name<A extends C>`
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct TypeParam {
    pub name: String,
    pub constraint: Option<TypeNode>,
}

/// `name: T`, or just `name` where the type is inferred.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Param {
    pub name: String,
    pub ty: Option<TypeNode>,
}

/// `readonly name: T;` inside an object type.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct PropertySig {
    pub readonly: bool,
    pub name: String,
    pub ty: TypeNode,
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub enum TypeNode {
    /// `Name` or `Name<A, B>`; also used for `never` and `undefined`.
    Ref { name: String, args: Vec<TypeNode> },
    /// `[A, B]`
    Tuple(Vec<TypeNode>),
    /// `(a: A) => B`
    Function { params: Vec<Param>, ret: Box<TypeNode> },
    /// `"Some"`
    Literal(String),
    /// `{ readonly a: A; }`
    Object(Vec<PropertySig>),
    /// `A | B`
    Union(Vec<TypeNode>),
}

/* ------------------------------- Expressions ------------------------------ */

/// `name: value`, or the shorthand `name` when `value` is absent.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct PropertyAssign {
    pub name: String,
    pub value: Option<Expr>,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum BinOp {
    /// `&&`
    And,
    /// `===`
    StrictEq,
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub enum ArrowBody {
    Expr(Box<Expr>),
    Block(Vec<Stmt>),
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Expr {
    Ident(String),
    Str(String),
    Bool(bool),
    /// `object.property`, or `object["property"]` when the property is not an
    /// identifier.
    Member { object: Box<Expr>, property: String },
    Call { callee: Box<Expr>, args: Vec<Expr> },
    Object(Vec<PropertyAssign>),
    Arrow { params: Vec<String>, body: ArrowBody },
    Binary { op: BinOp, lhs: Box<Expr>, rhs: Box<Expr> },
}

/* ------------------------------- Statements ------------------------------- */

/// `case label: body`
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Case {
    pub label: Expr,
    pub body: Stmt,
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Stmt {
    Return(Expr),
    If { cond: Expr, then: Vec<Stmt> },
    Switch { scrutinee: Expr, cases: Vec<Case> },
    /// A local `const`.
    Const { name: String, ty: Option<TypeNode>, init: Expr },
}

/* ---------------------------------- Items --------------------------------- */

/// `export type Name<params> = ty;`
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct TypeAlias {
    pub name: String,
    pub params: Vec<TypeParam>,
    pub ty: TypeNode,
}

/// `export const name: ty = init;`
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Const {
    pub name: String,
    pub ty: TypeNode,
    pub init: Expr,
}

/// `export function name<type_params>(params): ret { body }`
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Function {
    pub name: String,
    pub type_params: Vec<TypeParam>,
    pub params: Vec<Param>,
    pub ret: TypeNode,
    pub body: Vec<Stmt>,
}

/// `import { names } from "from";`
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Import {
    pub names: Vec<String>,
    pub from: String,
}

#[derive(From, Clone, Debug, PartialEq, Eq)]
pub enum Item {
    TypeAlias(TypeAlias),
    Const(Const),
    Function(Function),
    Import(Import),
}

/* ------------------------------ Constructors ------------------------------ */

impl TypeNode {
    pub fn named(name: impl Into<String>) -> Self {
        TypeNode::Ref { name: name.into(), args: Vec::new() }
    }
    pub fn applied(name: impl Into<String>, args: Vec<TypeNode>) -> Self {
        TypeNode::Ref { name: name.into(), args }
    }
    pub fn function(params: Vec<Param>, ret: TypeNode) -> Self {
        TypeNode::Function { params, ret: Box::new(ret) }
    }
}

impl Param {
    pub fn typed(name: impl Into<String>, ty: TypeNode) -> Self {
        Param { name: name.into(), ty: Some(ty) }
    }
}

impl Expr {
    pub fn ident(name: impl Into<String>) -> Self {
        Expr::Ident(name.into())
    }
    pub fn member(self, property: impl Into<String>) -> Self {
        Expr::Member { object: Box::new(self), property: property.into() }
    }
    pub fn call(self, args: Vec<Expr>) -> Self {
        Expr::Call { callee: Box::new(self), args }
    }
    pub fn strict_eq(self, rhs: Expr) -> Self {
        Expr::Binary { op: BinOp::StrictEq, lhs: Box::new(self), rhs: Box::new(rhs) }
    }
    pub fn and(self, rhs: Expr) -> Self {
        Expr::Binary { op: BinOp::And, lhs: Box::new(self), rhs: Box::new(rhs) }
    }
    /// `e1 && e2 && ...`, or `true` for no operands.
    pub fn conjunction(operands: impl IntoIterator<Item = Expr>) -> Self {
        operands.into_iter().reduce(Expr::and).unwrap_or(Expr::Bool(true))
    }
    pub fn arrow(params: Vec<String>, body: ArrowBody) -> Self {
        Expr::Arrow { params, body }
    }
}
