use crate::err::Result;
use adtc_codegen::{HandlerStyle, Options};
use serde::Deserialize;
use std::path::Path;

/// Generator settings as read from a TOML file. Every key is optional; a
/// missing key keeps the default.
///
/// ```toml
/// tag_name = "tag"
/// handlers_name = "clauses"   # switches to record-style fold handlers
/// emit_accessors = false
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct Conf {
    pub tag_name: Option<String>,
    pub fold_prefix: Option<String>,
    pub matchee_name: Option<String>,
    pub handlers_name: Option<String>,
    pub emit_accessors: Option<bool>,
    pub emit_equality: Option<bool>,
}

impl Conf {
    pub fn from_toml(text: &str) -> Result<Self> {
        Ok(toml::from_str(text)?)
    }

    pub fn load(path: &Path) -> Result<Self> {
        log::debug!("loading configuration from `{}`", path.display());
        let text = std::fs::read_to_string(path)?;
        Self::from_toml(&text)
    }

    /// Keys set in `other` win.
    pub fn merge(self, other: Conf) -> Conf {
        Conf {
            tag_name: other.tag_name.or(self.tag_name),
            fold_prefix: other.fold_prefix.or(self.fold_prefix),
            matchee_name: other.matchee_name.or(self.matchee_name),
            handlers_name: other.handlers_name.or(self.handlers_name),
            emit_accessors: other.emit_accessors.or(self.emit_accessors),
            emit_equality: other.emit_equality.or(self.emit_equality),
        }
    }

    pub fn into_options(self) -> Options {
        let Conf { tag_name, fold_prefix, matchee_name, handlers_name, emit_accessors, emit_equality } =
            self;
        let mut options = Options::default();
        if let Some(tag_name) = tag_name {
            options = options.with_tag_name(tag_name);
        }
        if let Some(fold_prefix) = fold_prefix {
            options = options.with_fold_prefix(fold_prefix);
        }
        if let Some(matchee_name) = matchee_name {
            options = options.with_matchee_name(matchee_name);
        }
        if let Some(handlers_name) = handlers_name {
            options = options.with_handler_style(HandlerStyle::Record { handlers_name });
        }
        if let Some(emit_accessors) = emit_accessors {
            options = options.with_accessors(emit_accessors);
        }
        if let Some(emit_equality) = emit_equality {
            options = options.with_equality(emit_equality);
        }
        options
    }
}
