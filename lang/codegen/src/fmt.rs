//! Prints the target tree.
//!
//! Only hard line breaks are used, so the layout never depends on the width
//! the document is rendered at.

use crate::target::*;
use adtc_utils::prelude::is_identifier;
use pretty::RcDoc;

/* -------------------------------- Formatter ------------------------------- */

pub use adtc_syntax::Pretty;

pub struct Formatter {
    pub indent: isize,
}

impl Default for Formatter {
    fn default() -> Self {
        Self::new()
    }
}

impl Formatter {
    pub fn new() -> Self {
        Formatter { indent: 4 }
    }

    /// `{ stmt... }` with one statement per line.
    fn block<'a>(&self, docs: Vec<RcDoc<'a>>) -> RcDoc<'a> {
        if docs.is_empty() {
            return RcDoc::text("{}");
        }
        RcDoc::text("{")
            .append(RcDoc::hardline().append(RcDoc::intersperse(docs, RcDoc::hardline())).nest(self.indent))
            .append(RcDoc::hardline())
            .append(RcDoc::text("}"))
    }
}

const WIDTH: usize = 100;

/// Render one fragment as a complete top-level declaration.
pub fn render(fragment: &Fragment) -> String {
    let f = Formatter::new();
    let doc = fragment.pretty(&f);
    let mut buf = String::new();
    // writing into a `String` never fails
    let _ = doc.render_fmt(WIDTH, &mut buf);
    buf
}

fn comma_separated<'a>(docs: impl IntoIterator<Item = RcDoc<'a>>) -> RcDoc<'a> {
    RcDoc::intersperse(docs, RcDoc::text(", "))
}

fn quoted(s: &str) -> String {
    let mut out = String::with_capacity(s.len() + 2);
    out.push('"');
    for c in s.chars() {
        match c {
            | '"' => out.push_str("\\\""),
            | '\\' => out.push_str("\\\\"),
            | '\n' => out.push_str("\\n"),
            | c => out.push(c),
        }
    }
    out.push('"');
    out
}

/// A property key: bare when it is an identifier, quoted otherwise.
fn property_key(name: &str) -> String {
    if is_identifier(name) { name.to_owned() } else { quoted(name) }
}

/* ---------------------------------- Types --------------------------------- */

impl<'a> Pretty<'a, Formatter> for TypeParam {
    fn pretty(&self, f: &'a Formatter) -> RcDoc<'a> {
        let TypeParam { name, constraint } = self;
        let doc = RcDoc::text(name.clone());
        match constraint {
            | Some(constraint) => doc.append(RcDoc::text(" extends ")).append(constraint.pretty(f)),
            | None => doc,
        }
    }
}

fn type_params<'a>(f: &'a Formatter, params: &[TypeParam]) -> RcDoc<'a> {
    if params.is_empty() {
        return RcDoc::nil();
    }
    RcDoc::text("<")
        .append(comma_separated(params.iter().map(|p| p.pretty(f))))
        .append(RcDoc::text(">"))
}

impl<'a> Pretty<'a, Formatter> for Param {
    fn pretty(&self, f: &'a Formatter) -> RcDoc<'a> {
        let Param { name, ty } = self;
        let doc = RcDoc::text(name.clone());
        match ty {
            | Some(ty) => doc.append(RcDoc::text(": ")).append(ty.pretty(f)),
            | None => doc,
        }
    }
}

fn params<'a>(f: &'a Formatter, params: &[Param]) -> RcDoc<'a> {
    RcDoc::text("(")
        .append(comma_separated(params.iter().map(|p| p.pretty(f))))
        .append(RcDoc::text(")"))
}

impl<'a> Pretty<'a, Formatter> for PropertySig {
    fn pretty(&self, f: &'a Formatter) -> RcDoc<'a> {
        let PropertySig { readonly, name, ty } = self;
        let doc = if *readonly { RcDoc::text("readonly ") } else { RcDoc::nil() };
        doc.append(RcDoc::text(property_key(name)))
            .append(RcDoc::text(": "))
            .append(ty.pretty(f))
            .append(RcDoc::text(";"))
    }
}

impl<'a> Pretty<'a, Formatter> for TypeNode {
    fn pretty(&self, f: &'a Formatter) -> RcDoc<'a> {
        match self {
            | TypeNode::Ref { name, args } => {
                let doc = RcDoc::text(name.clone());
                if args.is_empty() {
                    doc
                } else {
                    doc.append(RcDoc::text("<"))
                        .append(comma_separated(args.iter().map(|a| a.pretty(f))))
                        .append(RcDoc::text(">"))
                }
            }
            | TypeNode::Tuple(types) => RcDoc::text("[")
                .append(comma_separated(types.iter().map(|t| t.pretty(f))))
                .append(RcDoc::text("]")),
            | TypeNode::Function { params: ps, ret } => {
                params(f, ps).append(RcDoc::text(" => ")).append(ret.pretty(f))
            }
            | TypeNode::Literal(s) => RcDoc::text(quoted(s)),
            | TypeNode::Object(props) => f.block(props.iter().map(|p| p.pretty(f)).collect()),
            | TypeNode::Union(types) => {
                RcDoc::intersperse(types.iter().map(|t| t.pretty(f)), RcDoc::text(" | "))
            }
        }
    }
}

/* ------------------------------- Expressions ------------------------------ */

impl BinOp {
    fn symbol(self) -> &'static str {
        match self {
            | BinOp::And => "&&",
            | BinOp::StrictEq => "===",
        }
    }
    fn precedence(self) -> u8 {
        match self {
            | BinOp::And => 1,
            | BinOp::StrictEq => 2,
        }
    }
}

impl Expr {
    /// Operand of `op`; parenthesized when it binds looser.
    fn operand<'a>(&self, op: BinOp, f: &'a Formatter) -> RcDoc<'a> {
        match self {
            | Expr::Binary { op: inner, .. } if inner.precedence() < op.precedence() => {
                RcDoc::text("(").append(self.pretty(f)).append(RcDoc::text(")"))
            }
            | Expr::Arrow { .. } => RcDoc::text("(").append(self.pretty(f)).append(RcDoc::text(")")),
            | _ => self.pretty(f),
        }
    }
}

impl<'a> Pretty<'a, Formatter> for PropertyAssign {
    fn pretty(&self, f: &'a Formatter) -> RcDoc<'a> {
        let PropertyAssign { name, value } = self;
        match value {
            | Some(value) => RcDoc::text(property_key(name))
                .append(RcDoc::text(": "))
                .append(value.pretty(f)),
            | None => RcDoc::text(name.clone()),
        }
    }
}

impl<'a> Pretty<'a, Formatter> for Expr {
    fn pretty(&self, f: &'a Formatter) -> RcDoc<'a> {
        match self {
            | Expr::Ident(name) => RcDoc::text(name.clone()),
            | Expr::Str(s) => RcDoc::text(quoted(s)),
            | Expr::Bool(b) => RcDoc::text(if *b { "true" } else { "false" }),
            | Expr::Member { object, property } => {
                let doc = object.pretty(f);
                if is_identifier(property) {
                    doc.append(RcDoc::text(".")).append(RcDoc::text(property.clone()))
                } else {
                    doc.append(RcDoc::text("[")).append(RcDoc::text(quoted(property))).append(RcDoc::text("]"))
                }
            }
            | Expr::Call { callee, args } => callee
                .pretty(f)
                .append(RcDoc::text("("))
                .append(comma_separated(args.iter().map(|a| a.pretty(f))))
                .append(RcDoc::text(")")),
            | Expr::Object(props) if props.is_empty() => RcDoc::text("{}"),
            | Expr::Object(props) => RcDoc::text("{ ")
                .append(comma_separated(props.iter().map(|p| p.pretty(f))))
                .append(RcDoc::text(" }")),
            | Expr::Arrow { params, body } => {
                let head = match params.as_slice() {
                    | [param] => RcDoc::text(param.clone()),
                    | params => RcDoc::text(format!("({})", params.join(", "))),
                };
                let body = match body {
                    | ArrowBody::Expr(expr) => match expr.as_ref() {
                        | Expr::Object(_) => RcDoc::text("(").append(expr.pretty(f)).append(RcDoc::text(")")),
                        | expr => expr.pretty(f),
                    },
                    | ArrowBody::Block(stmts) => f.block(stmts.iter().map(|s| s.pretty(f)).collect()),
                };
                head.append(RcDoc::text(" => ")).append(body)
            }
            | Expr::Binary { op, lhs, rhs } => lhs
                .operand(*op, f)
                .append(RcDoc::text(format!(" {} ", op.symbol())))
                .append(rhs.operand(*op, f)),
        }
    }
}

/* ------------------------------- Statements ------------------------------- */

impl<'a> Pretty<'a, Formatter> for Case {
    fn pretty(&self, f: &'a Formatter) -> RcDoc<'a> {
        let Case { label, body } = self;
        RcDoc::text("case ").append(label.pretty(f)).append(RcDoc::text(": ")).append(body.pretty(f))
    }
}

impl<'a> Pretty<'a, Formatter> for Stmt {
    fn pretty(&self, f: &'a Formatter) -> RcDoc<'a> {
        match self {
            | Stmt::Return(expr) => {
                RcDoc::text("return ").append(expr.pretty(f)).append(RcDoc::text(";"))
            }
            | Stmt::If { cond, then } => RcDoc::text("if (")
                .append(cond.pretty(f))
                .append(RcDoc::text(") "))
                .append(f.block(then.iter().map(|s| s.pretty(f)).collect())),
            | Stmt::Switch { scrutinee, cases } => RcDoc::text("switch (")
                .append(scrutinee.pretty(f))
                .append(RcDoc::text(") "))
                .append(f.block(cases.iter().map(|c| c.pretty(f)).collect())),
            | Stmt::Const { name, ty, init } => {
                let mut doc = RcDoc::text("const ").append(RcDoc::text(name.clone()));
                if let Some(ty) = ty {
                    doc = doc.append(RcDoc::text(": ")).append(ty.pretty(f));
                }
                doc.append(RcDoc::text(" = ")).append(init.pretty(f)).append(RcDoc::text(";"))
            }
        }
    }
}

/* ---------------------------------- Items --------------------------------- */

impl<'a> Pretty<'a, Formatter> for TypeAlias {
    fn pretty(&self, f: &'a Formatter) -> RcDoc<'a> {
        let TypeAlias { name, params, ty } = self;
        RcDoc::text("export type ")
            .append(RcDoc::text(name.clone()))
            .append(type_params(f, params))
            .append(RcDoc::text(" = "))
            .append(ty.pretty(f))
            .append(RcDoc::text(";"))
    }
}

impl<'a> Pretty<'a, Formatter> for Const {
    fn pretty(&self, f: &'a Formatter) -> RcDoc<'a> {
        let Const { name, ty, init } = self;
        RcDoc::text("export const ")
            .append(RcDoc::text(name.clone()))
            .append(RcDoc::text(": "))
            .append(ty.pretty(f))
            .append(RcDoc::text(" = "))
            .append(init.pretty(f))
            .append(RcDoc::text(";"))
    }
}

impl<'a> Pretty<'a, Formatter> for Function {
    fn pretty(&self, f: &'a Formatter) -> RcDoc<'a> {
        let Function { name, type_params: tps, params: ps, ret, body } = self;
        RcDoc::text("export function ")
            .append(RcDoc::text(name.clone()))
            .append(type_params(f, tps))
            .append(params(f, ps))
            .append(RcDoc::text(": "))
            .append(ret.pretty(f))
            .append(RcDoc::text(" "))
            .append(f.block(body.iter().map(|s| s.pretty(f)).collect()))
    }
}

impl<'a> Pretty<'a, Formatter> for Import {
    fn pretty(&self, _f: &'a Formatter) -> RcDoc<'a> {
        let Import { names, from } = self;
        RcDoc::text(format!("import {{ {} }} from {};", names.join(", "), quoted(from)))
    }
}

impl<'a> Pretty<'a, Formatter> for Item {
    fn pretty(&self, f: &'a Formatter) -> RcDoc<'a> {
        match self {
            | Item::TypeAlias(item) => item.pretty(f),
            | Item::Const(item) => item.pretty(f),
            | Item::Function(item) => item.pretty(f),
            | Item::Import(item) => item.pretty(f),
        }
    }
}

impl<'a> Pretty<'a, Formatter> for Fragment {
    fn pretty(&self, f: &'a Formatter) -> RcDoc<'a> {
        self.item.pretty(f)
    }
}
