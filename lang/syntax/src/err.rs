use thiserror::Error;

/// Structural violations rejected by the model's smart constructors.
#[derive(Error, Clone, Debug, PartialEq, Eq)]
pub enum ModelError {
    #[error("data `{data}` has no constructors")]
    NoConstructors { data: String },
    #[error("constructor `{ctor}` is declared more than once in `{data}`")]
    DuplicateConstructor { data: String, ctor: String },
    #[error("type parameter `{param}` is declared more than once in `{data}`")]
    DuplicateParameter { data: String, param: String },
    #[error("constructor `{ctor}` mixes named and positional members")]
    MixedMembers { ctor: String },
    #[error("field `{field}` is declared more than once in `{ctor}`")]
    DuplicateField { ctor: String, field: String },
}

pub type Result<T> = std::result::Result<T, ModelError>;
