//! Prints the model back in the source grammar.
//!
//! The output re-parses to a structurally equal declaration.

use crate::*;

/// Formatter for the source grammar.
#[derive(Clone, Copy, Debug, Default)]
pub struct Formatter;

impl Formatter {
    pub fn new() -> Self {
        Formatter
    }
    /// A type in argument position: anything but a bare name is parenthesized.
    fn atom(&self, ty: &Type) -> String {
        match ty {
            | Type::Ref(TypeRef { name, args }) if args.is_empty() => name.clone(),
            | Type::Ref(_) | Type::Arrow(_) => format!("({})", ty.ugly(self)),
            | Type::Tuple(_) | Type::Unit(_) => ty.ugly(self),
        }
    }
}

impl<'a> Ugly<'a, Formatter> for Type {
    fn ugly(&self, f: &'a Formatter) -> String {
        match self {
            | Type::Ref(TypeRef { name, args }) => {
                let mut s = name.clone();
                for arg in args {
                    s += " ";
                    s += &f.atom(arg);
                }
                s
            }
            | Type::Tuple(Tuple(types)) => {
                let types: Vec<_> = types.iter().map(|ty| ty.ugly(f)).collect();
                format!("({})", types.join(", "))
            }
            | Type::Arrow(Arrow { domain, codomain }) => {
                let domain = match domain.as_ref() {
                    | Type::Arrow(_) => f.atom(domain),
                    | _ => domain.ugly(f),
                };
                format!("{} -> {}", domain, codomain.ugly(f))
            }
            | Type::Unit(Triv) => "()".to_string(),
        }
    }
}

impl<'a> Ugly<'a, Formatter> for TypeParameter {
    fn ugly(&self, f: &'a Formatter) -> String {
        let TypeParameter { name, constraint } = self;
        match constraint {
            | Some(ty) => format!("({} :: {})", name, ty.ugly(f)),
            | None => name.clone(),
        }
    }
}

impl<'a> Ugly<'a, Formatter> for Constructor {
    fn ugly(&self, f: &'a Formatter) -> String {
        let mut s = self.name().to_owned();
        if self.is_record() {
            let fields: Vec<_> = (self.members().iter())
                .map(|m| format!("{} :: {}", m.name.as_deref().unwrap_or_default(), m.ty.ugly(f)))
                .collect();
            s += &format!(" {{ {} }}", fields.join(", "));
        } else {
            for member in self.members() {
                s += " ";
                s += &f.atom(&member.ty);
            }
        }
        s
    }
}

impl<'a> Ugly<'a, Formatter> for Declaration {
    fn ugly(&self, f: &'a Formatter) -> String {
        let mut s = format!("data {}", self.name());
        for param in self.params() {
            s += " ";
            s += &param.ugly(f);
        }
        let ctors: Vec<_> = self.ctors().iter().map(|c| c.ugly(f)).collect();
        s += " = ";
        s += &ctors.join(" | ");
        s
    }
}
