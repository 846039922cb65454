#![allow(clippy::style)]
#![allow(clippy::useless_format)]

pub mod case;
pub mod fresh;
pub mod reserved;

pub mod prelude {
    /// Identifier casing.
    pub use crate::case::{lower_first, upper_first};
    /// Name freshening and escaping.
    pub use crate::{
        fresh::Fresh,
        reserved::{binding_name, identifier_name, is_identifier, is_reserved},
    };
}
