//! Rewrites a declaration into the fragments of its bundle.
//!
//! Fragments come out in a fixed order: the data type, one constructor per
//! alternative, the fold(s), the accessors and finally the equality. Every
//! fragment is a syntax tree; nothing here produces text.

use crate::{options::*, target::*};
use adtc_syntax::{Arrow, Constructor, Declaration, Member, Triv, Tuple, Type, TypeRef};
use adtc_utils::prelude::*;

/// Generate the whole bundle. Total over every [`Declaration`].
pub fn generate(data: &Declaration, options: &Options) -> Vec<Fragment> {
    let names = Names::new(data, options);
    let emitter = Emitter { data, options, names };
    let mut fragments = vec![emitter.data_type()];
    fragments.extend((0..data.ctors().len()).map(|index| emitter.constructor(index)));
    if data.is_sum() {
        fragments.extend(emitter.folds());
        if options.emit_accessors {
            fragments.extend(emitter.accessors());
        }
    }
    if options.emit_equality {
        fragments.extend(emitter.equality());
    }
    log::debug!("generated {} fragments for `{}`", fragments.len(), data.name());
    fragments
}

struct Emitter<'a> {
    data: &'a Declaration,
    options: &'a Options,
    names: Names,
}

/* ---------------------------------- Names --------------------------------- */

/// Property name of a member: the field name, or `value{position}`.
fn member_property(member: &Member, position: usize) -> String {
    match &member.name {
        | Some(name) => name.clone(),
        | None => format!("value{position}"),
    }
}

/// Member name usable in identifier position; falls back to the positional
/// name for fields that are not identifiers.
fn member_label(member: &Member, position: usize) -> String {
    let property = member_property(member, position);
    if is_identifier(&property) { property } else { format!("value{position}") }
}

fn member_binding(member: &Member, position: usize) -> String {
    binding_name(&member_label(member, position))
}

/// The names a bundle binds, fixed up front so that no two collide. Indexed
/// like the constructors of the declaration.
struct Names {
    folds: Vec<String>,
    bindings: Vec<String>,
    handlers: Vec<String>,
    accessors: Vec<String>,
    /// Return type parameter of the folds.
    ret: String,
}

impl Names {
    fn new(data: &Declaration, options: &Options) -> Self {
        let prefix = &options.fold_prefix;
        let folds = match (data.is_sum(), data.has_nullary()) {
            | (false, _) => Vec::new(),
            | (true, true) => vec![prefix.clone(), format!("{prefix}L")],
            | (true, false) => vec![prefix.clone()],
        };
        let accessors_emitted = data.is_sum() && options.emit_accessors;

        // module scope: folds, imports and `getEq` keep their names
        let mut exports = Fresh::new(folds.iter().cloned());
        if accessors_emitted {
            exports.take("Prism");
        }
        if options.emit_equality {
            for name in ["Eq", "fromEquals", "getEq"] {
                exports.take(name);
            }
        }
        let bindings = (data.ctors().iter())
            .map(|ctor| exports.take(&binding_name(&lower_first(&identifier_name(ctor.name())))))
            .collect();
        let accessors = if accessors_emitted {
            (data.ctors().iter())
                .map(|ctor| exports.take(&format!("_{}", lower_first(&identifier_name(ctor.name())))))
                .collect()
        } else {
            Vec::new()
        };

        // fold parameters
        let mut locals = Fresh::new([options.matchee_name.clone()]);
        if let HandlerStyle::Record { handlers_name } = &options.handler_style {
            locals.take(handlers_name);
        }
        let handlers = (data.ctors().iter())
            .map(|ctor| locals.take(&format!("on{}", identifier_name(ctor.name()))))
            .collect();

        let ret = Fresh::new(data.param_names().chain([data.name()])).name("R");
        Names { folds, bindings, handlers, accessors, ret }
    }
}

/* ---------------------------------- Types --------------------------------- */

/// How a source type is spelled in the output.
pub fn type_node(ty: &Type) -> TypeNode {
    match ty {
        | Type::Ref(TypeRef { name, args }) => {
            TypeNode::applied(name.clone(), args.iter().map(type_node).collect())
        }
        | Type::Tuple(Tuple(types)) => TypeNode::Tuple(types.iter().map(type_node).collect()),
        | Type::Arrow(Arrow { domain, codomain }) => {
            let params = domain_param_name(domain)
                .map(|name| Param::typed(name, type_node(domain)))
                .into_iter()
                .collect();
            TypeNode::function(params, type_node(codomain))
        }
        | Type::Unit(Triv) => TypeNode::named("undefined"),
    }
}

/// The parameter name of a function type's domain; unit domains take none.
pub fn domain_param_name(domain: &Type) -> Option<String> {
    match domain {
        | Type::Ref(TypeRef { name, .. }) => Some(binding_name(&lower_first(name))),
        | Type::Tuple(_) => Some("tuple".to_string()),
        | Type::Arrow(_) => Some("f".to_string()),
        | Type::Unit(_) => None,
    }
}

impl Emitter<'_> {
    fn type_params(&self) -> Vec<TypeParam> {
        (self.data.params().iter())
            .map(|param| TypeParam {
                name: param.name.clone(),
                constraint: param.constraint.as_ref().map(type_node),
            })
            .collect()
    }

    /// `N<A, B>`
    fn self_type(&self) -> TypeNode {
        TypeNode::applied(
            self.data.name(),
            self.data.param_names().map(TypeNode::named).collect(),
        )
    }

    /// `N<never, C>`: each parameter at its constraint, or `never`.
    fn bottom_type(&self) -> TypeNode {
        let args = (self.data.params().iter())
            .map(|param| match &param.constraint {
                | Some(constraint) => type_node(constraint),
                | None => TypeNode::named("never"),
            })
            .collect();
        TypeNode::applied(self.data.name(), args)
    }

    fn members_as_params(&self, ctor: &Constructor) -> Vec<Param> {
        (ctor.members().iter().enumerate())
            .map(|(position, member)| {
                Param::typed(member_binding(member, position), type_node(&member.ty))
            })
            .collect()
    }

    fn tag_of(&self, expr: Expr) -> Expr {
        expr.member(self.options.tag_name.clone())
    }
}

/* ---------------------------------- Data ---------------------------------- */

impl Emitter<'_> {
    fn data_type(&self) -> Fragment {
        let mut variants: Vec<_> = (self.data.ctors().iter())
            .map(|ctor| {
                let mut props = Vec::new();
                if self.data.is_sum() {
                    props.push(PropertySig {
                        readonly: true,
                        name: self.options.tag_name.clone(),
                        ty: TypeNode::Literal(ctor.name().to_owned()),
                    });
                }
                for (position, member) in ctor.members().iter().enumerate() {
                    props.push(PropertySig {
                        readonly: true,
                        name: member_property(member, position),
                        ty: type_node(&member.ty),
                    });
                }
                TypeNode::Object(props)
            })
            .collect();
        let ty = if variants.len() == 1 { variants.remove(0) } else { TypeNode::Union(variants) };
        let item = TypeAlias { name: self.data.name().to_owned(), params: self.type_params(), ty };
        Fragment { kind: FragmentKind::Data, item: item.into() }
    }
}

/* ------------------------------ Constructors ------------------------------ */

impl Emitter<'_> {
    fn constructor(&self, index: usize) -> Fragment {
        let ctor = &self.data.ctors()[index];
        let name = self.names.bindings[index].clone();
        let mut props = Vec::new();
        if self.data.is_sum() {
            props.push(PropertyAssign {
                name: self.options.tag_name.clone(),
                value: Some(Expr::Str(ctor.name().to_owned())),
            });
        }
        for (position, member) in ctor.members().iter().enumerate() {
            let property = member_property(member, position);
            let binding = member_binding(member, position);
            let value = (binding != property).then(|| Expr::Ident(binding));
            props.push(PropertyAssign { name: property, value });
        }
        let item: Item = if ctor.is_nullary() {
            Const { name, ty: self.bottom_type(), init: Expr::Object(props) }.into()
        } else {
            Function {
                name,
                type_params: self.type_params(),
                params: self.members_as_params(ctor),
                ret: self.self_type(),
                body: vec![Stmt::Return(Expr::Object(props))],
            }
            .into()
        };
        Fragment { kind: FragmentKind::Constructor, item }
    }
}

/* ---------------------------------- Fold ---------------------------------- */

impl Emitter<'_> {
    /// Eager and lazy folds when some constructor is nullary, else the lazy one
    /// alone under the plain prefix.
    fn folds(&self) -> Vec<Fragment> {
        let eager = self.data.has_nullary();
        (self.names.folds.iter().enumerate())
            .map(|(index, name)| {
                let item = self.fold(name.clone(), eager && index == 0);
                Fragment { kind: FragmentKind::Fold, item }
            })
            .collect()
    }

    /// Eager folds take nullary handlers as plain values.
    fn fold(&self, name: String, eager: bool) -> Item {
        let Options { matchee_name, handler_style, .. } = self.options;
        let ret = self.names.ret.as_str();
        let ctors = || self.data.ctors().iter().zip(&self.names.handlers);
        let handler_type = |ctor: &Constructor| {
            if eager && ctor.is_nullary() {
                TypeNode::named(ret)
            } else {
                TypeNode::function(self.members_as_params(ctor), TypeNode::named(ret))
            }
        };
        let handlers: Vec<Param> = match handler_style {
            | HandlerStyle::Positional => ctors()
                .map(|(ctor, handler)| Param::typed(handler.clone(), handler_type(ctor)))
                .collect(),
            | HandlerStyle::Record { handlers_name } => {
                let props = ctors()
                    .map(|(ctor, handler)| PropertySig {
                        readonly: false,
                        name: handler.clone(),
                        ty: handler_type(ctor),
                    })
                    .collect();
                vec![Param::typed(handlers_name.clone(), TypeNode::Object(props))]
            }
        };
        let handler_expr = |handler: &String| match handler_style {
            | HandlerStyle::Positional => Expr::ident(handler.clone()),
            | HandlerStyle::Record { handlers_name } => {
                Expr::ident(handlers_name.clone()).member(handler.clone())
            }
        };

        let cases = ctors()
            .map(|(ctor, handler)| {
                let handler = handler_expr(handler);
                let result = if eager && ctor.is_nullary() {
                    handler
                } else {
                    let args = (ctor.members().iter().enumerate())
                        .map(|(position, member)| {
                            Expr::ident(matchee_name.clone()).member(member_property(member, position))
                        })
                        .collect();
                    handler.call(args)
                };
                Case { label: Expr::Str(ctor.name().to_owned()), body: Stmt::Return(result) }
            })
            .collect();
        let switch = Stmt::Switch { scrutinee: self.tag_of(Expr::ident(matchee_name.clone())), cases };

        let mut type_params = self.type_params();
        type_params.push(TypeParam { name: ret.to_owned(), constraint: None });
        let mut params = vec![Param::typed(matchee_name.clone(), self.self_type())];
        params.extend(handlers);
        Function { name, type_params, params, ret: TypeNode::named(ret), body: vec![switch] }.into()
    }
}

/* -------------------------------- Accessors ------------------------------- */

impl Emitter<'_> {
    fn accessors(&self) -> Vec<Fragment> {
        let import = Import { names: vec!["Prism".to_string()], from: "monocle-ts".to_string() };
        let mut fragments = vec![Fragment { kind: FragmentKind::Import, item: import.into() }];
        let prism = TypeNode::applied("Prism", vec![self.self_type(), self.self_type()]);
        let matchee = &self.options.matchee_name;
        for (ctor, name) in self.data.ctors().iter().zip(&self.names.accessors) {
            let name = name.clone();
            let test = self.tag_of(Expr::ident(matchee.clone())).strict_eq(Expr::Str(ctor.name().to_owned()));
            let predicate = Expr::arrow(vec![matchee.clone()], ArrowBody::Expr(Box::new(test)));
            let init = Expr::ident("Prism").member("fromPredicate").call(vec![predicate]);
            let item: Item = if self.data.is_polymorphic() {
                Function {
                    name,
                    type_params: self.type_params(),
                    params: Vec::new(),
                    ret: prism.clone(),
                    body: vec![Stmt::Return(init)],
                }
                .into()
            } else {
                Const { name, ty: prism.clone(), init }.into()
            };
            fragments.push(Fragment { kind: FragmentKind::Accessor, item });
        }
        fragments
    }
}

/* -------------------------------- Equality -------------------------------- */

/// Name of the self-binding used by recursive members.
const SELF_EQ: &str = "S";

impl Emitter<'_> {
    fn comparator_name(&self, ctor: &Constructor, member: &Member, position: usize) -> String {
        let ctor_name = if self.data.is_sum() { identifier_name(ctor.name()) } else { String::new() };
        format!("eq{}{}", ctor_name, upper_first(&member_label(member, position)))
    }

    /// One comparator parameter per member, `None` for recursive members.
    /// Names are unique across the whole equality function.
    fn comparators(&self) -> Vec<Vec<Option<String>>> {
        let mut fresh = Fresh::default();
        (self.data.ctors().iter())
            .map(|ctor| {
                (ctor.members().iter().enumerate())
                    .map(|(position, member)| {
                        (!self.data.is_recursive_member(member))
                            .then(|| fresh.take(&self.comparator_name(ctor, member, position)))
                    })
                    .collect()
            })
            .collect()
    }

    /// `eqA.equals(x.a, y.a) && ...` over the members of `ctor`.
    fn compare_members(&self, ctor: &Constructor, comparators: &[Option<String>]) -> Expr {
        let members = ctor.members().iter().zip(comparators).enumerate();
        Expr::conjunction(members.map(|(position, (member, comparator))| {
            let comparator = comparator.clone().unwrap_or_else(|| SELF_EQ.to_string());
            let property = member_property(member, position);
            Expr::ident(comparator).member("equals").call(vec![
                Expr::ident("x").member(property.clone()),
                Expr::ident("y").member(property),
            ])
        }))
    }

    fn equality(&self) -> Vec<Fragment> {
        let import = Import {
            names: vec!["Eq".to_string(), "fromEquals".to_string()],
            from: "fp-ts/lib/Eq".to_string(),
        };
        let eq_of = |ty| TypeNode::applied("Eq", vec![ty]);
        let ret = eq_of(self.self_type());

        let comparators = self.comparators();
        let mut params = Vec::new();
        for (ctor, names) in self.data.ctors().iter().zip(&comparators) {
            for (member, name) in ctor.members().iter().zip(names) {
                if let Some(name) = name {
                    params.push(Param::typed(name.clone(), eq_of(type_node(&member.ty))));
                }
            }
        }

        let from_equals = |params: Vec<&str>, body| {
            let params = params.into_iter().map(str::to_owned).collect();
            Expr::ident("fromEquals").call(vec![Expr::arrow(params, body)])
        };
        let eq = if self.data.is_enum() {
            if self.data.is_sum() {
                let same_tag = self.tag_of(Expr::ident("x")).strict_eq(self.tag_of(Expr::ident("y")));
                from_equals(vec!["x", "y"], ArrowBody::Expr(Box::new(same_tag)))
            } else {
                from_equals(vec![], ArrowBody::Expr(Box::new(Expr::Bool(true))))
            }
        } else if self.data.is_sum() {
            let mut stmts: Vec<_> = (self.data.ctors().iter().zip(&comparators))
                .map(|(ctor, comparators)| {
                    let tag = Expr::Str(ctor.name().to_owned());
                    let cond = (self.tag_of(Expr::ident("x")).strict_eq(tag.clone()))
                        .and(self.tag_of(Expr::ident("y")).strict_eq(tag));
                    Stmt::If { cond, then: vec![Stmt::Return(self.compare_members(ctor, comparators))] }
                })
                .collect();
            stmts.push(Stmt::Return(Expr::Bool(false)));
            from_equals(vec!["x", "y"], ArrowBody::Block(stmts))
        } else {
            let returns = (self.data.ctors().iter().zip(&comparators))
                .map(|(ctor, comparators)| Stmt::Return(self.compare_members(ctor, comparators)))
                .collect();
            from_equals(vec!["x", "y"], ArrowBody::Block(returns))
        };

        let body = if self.data.is_recursive() {
            vec![
                Stmt::Const { name: SELF_EQ.to_string(), ty: Some(ret.clone()), init: eq },
                Stmt::Return(Expr::ident(SELF_EQ)),
            ]
        } else {
            vec![Stmt::Return(eq)]
        };
        let function =
            Function { name: "getEq".to_string(), type_params: self.type_params(), params, ret, body };
        vec![
            Fragment { kind: FragmentKind::Import, item: import.into() },
            Fragment { kind: FragmentKind::Equality, item: function.into() },
        ]
    }
}
