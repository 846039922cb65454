//! Knobs of the generator.

/// How fold handlers are passed.
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub enum HandlerStyle {
    /// One parameter per constructor.
    Positional,
    /// A single object parameter with one property per constructor.
    Record { handlers_name: String },
}

#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub struct Options {
    /// Discriminant property of sum-type variants.
    pub tag_name: String,
    /// Name of the eager fold; the lazy one appends `L` when both are emitted.
    pub fold_prefix: String,
    /// Parameter bound to the value being matched.
    pub matchee_name: String,
    pub handler_style: HandlerStyle,
    pub emit_accessors: bool,
    pub emit_equality: bool,
}

impl Default for Options {
    fn default() -> Self {
        Options {
            tag_name: "type".to_string(),
            fold_prefix: "fold".to_string(),
            matchee_name: "fa".to_string(),
            handler_style: HandlerStyle::Positional,
            emit_accessors: true,
            emit_equality: true,
        }
    }
}

impl Options {
    pub fn with_tag_name(self, tag_name: impl Into<String>) -> Self {
        Options { tag_name: tag_name.into(), ..self }
    }
    pub fn with_fold_prefix(self, fold_prefix: impl Into<String>) -> Self {
        Options { fold_prefix: fold_prefix.into(), ..self }
    }
    pub fn with_matchee_name(self, matchee_name: impl Into<String>) -> Self {
        Options { matchee_name: matchee_name.into(), ..self }
    }
    pub fn with_handler_style(self, handler_style: HandlerStyle) -> Self {
        Options { handler_style, ..self }
    }
    /// Shorthand for [`HandlerStyle::Record`].
    pub fn with_record_handlers(self, handlers_name: impl Into<String>) -> Self {
        self.with_handler_style(HandlerStyle::Record { handlers_name: handlers_name.into() })
    }
    pub fn with_accessors(self, emit_accessors: bool) -> Self {
        Options { emit_accessors, ..self }
    }
    pub fn with_equality(self, emit_equality: bool) -> Self {
        Options { emit_equality, ..self }
    }
}
