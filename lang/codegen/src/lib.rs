//! Generates a TypeScript-flavoured declaration bundle from a
//! [`Declaration`](adtc_syntax::Declaration) and prints it.

pub mod options;
pub use options::{HandlerStyle, Options};

/// The syntax tree of the generated code.
pub mod target;
pub use target::{Fragment, FragmentKind, Item};

pub mod emit;
pub use emit::generate;

pub mod fmt;
pub use fmt::render;
