//! Formatting traits shared by the model and the generated code.

use pretty::RcDoc;

/// Flat text in the declaration grammar; what `parse` reads back.
#[impl_tools::autoimpl(for<T: trait + ?Sized> &T, &mut T, Box<T>)]
pub trait Ugly<'a, Fmter> {
    fn ugly(&self, f: &'a Fmter) -> String;
}

/// A layout document for the generated TypeScript, rendered by the caller at
/// a fixed width.
#[impl_tools::autoimpl(for<T: trait + ?Sized> &T, &mut T, Box<T>)]
pub trait Pretty<'a, Fmter> {
    fn pretty(&self, f: &'a Fmter) -> RcDoc<'a>;
}
