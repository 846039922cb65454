use crate::*;
use std::collections::HashSet;

/* ---------------------------------- Types --------------------------------- */

impl Type {
    /// `name args...`
    pub fn reference(name: impl Into<String>, args: Vec<Type>) -> Self {
        TypeRef { name: name.into(), args }.into()
    }
    /// A reference with no arguments.
    pub fn var(name: impl Into<String>) -> Self {
        Self::reference(name, Vec::new())
    }
    pub fn tuple(types: Vec<Type>) -> Self {
        Tuple(types).into()
    }
    pub fn arrow(domain: Type, codomain: Type) -> Self {
        Arrow { domain: Box::new(domain), codomain: Box::new(codomain) }.into()
    }
    pub fn unit() -> Self {
        Triv.into()
    }
    /// The head name when `self` is a reference.
    pub fn ref_name(&self) -> Option<&str> {
        match self {
            | Type::Ref(TypeRef { name, .. }) => Some(name),
            | Type::Tuple(_) | Type::Arrow(_) | Type::Unit(_) => None,
        }
    }
}

/* ------------------------------- Declaration ------------------------------ */

impl Member {
    pub fn positional(ty: Type) -> Self {
        Member { name: None, ty }
    }
    pub fn named(name: impl Into<String>, ty: Type) -> Self {
        Member { name: Some(name.into()), ty }
    }
}

impl TypeParameter {
    pub fn new(name: impl Into<String>) -> Self {
        TypeParameter { name: name.into(), constraint: None }
    }
    pub fn constrained(name: impl Into<String>, constraint: Type) -> Self {
        TypeParameter { name: name.into(), constraint: Some(constraint) }
    }
}

impl Constructor {
    pub fn new(name: impl Into<String>, members: Vec<Member>) -> Result<Self> {
        let name = name.into();
        let named = members.iter().filter(|m| m.name.is_some()).count();
        if named != 0 && named != members.len() {
            Err(ModelError::MixedMembers { ctor: name.clone() })?
        }
        let mut seen = HashSet::new();
        for field in members.iter().filter_map(|m| m.name.as_deref()) {
            if !seen.insert(field) {
                Err(ModelError::DuplicateField { ctor: name.clone(), field: field.to_owned() })?
            }
        }
        Ok(Constructor { name, members })
    }
    pub fn nullary(name: impl Into<String>) -> Self {
        Constructor { name: name.into(), members: Vec::new() }
    }
    pub fn name(&self) -> &str {
        &self.name
    }
    pub fn members(&self) -> &[Member] {
        &self.members
    }
    pub fn is_nullary(&self) -> bool {
        self.members.is_empty()
    }
    /// Record style: every member carries a field name.
    pub fn is_record(&self) -> bool {
        !self.members.is_empty() && self.members.iter().all(|m| m.name.is_some())
    }
}

impl Declaration {
    pub fn new(
        name: impl Into<String>, params: Vec<TypeParameter>, ctors: Vec<Constructor>,
    ) -> Result<Self> {
        let name = name.into();
        if ctors.is_empty() {
            Err(ModelError::NoConstructors { data: name.clone() })?
        }
        let mut seen = HashSet::new();
        for param in &params {
            if !seen.insert(param.name.as_str()) {
                Err(ModelError::DuplicateParameter { data: name.clone(), param: param.name.clone() })?
            }
        }
        let mut seen = HashSet::new();
        for ctor in &ctors {
            if !seen.insert(ctor.name()) {
                Err(ModelError::DuplicateConstructor {
                    data: name.clone(),
                    ctor: ctor.name().to_owned(),
                })?
            }
        }
        Ok(Declaration { name, params, ctors })
    }
    pub fn name(&self) -> &str {
        &self.name
    }
    pub fn params(&self) -> &[TypeParameter] {
        &self.params
    }
    pub fn ctors(&self) -> &[Constructor] {
        &self.ctors
    }
    pub fn param_names(&self) -> impl Iterator<Item = &str> {
        self.params.iter().map(|p| p.name.as_str())
    }
    /// More than one constructor.
    pub fn is_sum(&self) -> bool {
        self.ctors.len() > 1
    }
    /// Exactly one constructor, i.e. a record.
    pub fn is_product(&self) -> bool {
        self.ctors.len() == 1
    }
    pub fn is_polymorphic(&self) -> bool {
        !self.params.is_empty()
    }
    /// Every constructor is nullary.
    pub fn is_enum(&self) -> bool {
        self.ctors.iter().all(Constructor::is_nullary)
    }
    pub fn has_nullary(&self) -> bool {
        self.ctors.iter().any(Constructor::is_nullary)
    }
    /// Direct self-reference only; no mutual recursion is tracked.
    pub fn is_recursive_member(&self, member: &Member) -> bool {
        member.ty.ref_name() == Some(self.name.as_str())
    }
    pub fn is_recursive(&self) -> bool {
        self.ctors.iter().flat_map(Constructor::members).any(|m| self.is_recursive_member(m))
    }
}
