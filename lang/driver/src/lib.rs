//! Wires the parser, the generator and the printer together, and compiles
//! batches of sources.

pub mod conf;
pub mod err;

pub use adtc_codegen::{HandlerStyle, Options};
pub use adtc_surface::ParseFailure;
pub use conf::Conf;
pub use err::*;

use rayon::prelude::*;
use std::path::Path;


/// Source text together with the name diagnostics refer to it by.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Source {
    pub name: String,
    pub text: String,
}

impl Source {
    pub fn new(name: impl Into<String>, text: impl Into<String>) -> Self {
        Source { name: name.into(), text: text.into() }
    }
    pub fn read(path: &Path) -> Result<Self> {
        let text = std::fs::read_to_string(path)?;
        Ok(Source { name: path.display().to_string(), text })
    }
}

/// Parse one declaration and print its whole bundle, fragments separated by
/// a blank line.
pub fn compile(text: &str, options: &Options) -> std::result::Result<String, ParseFailure> {
    let data = adtc_surface::parse(text)?;
    let fragments = adtc_codegen::generate(&data, options);
    let rendered: Vec<_> = fragments.iter().map(adtc_codegen::render).collect();
    Ok(rendered.join("\n\n"))
}

/// [`compile`], with failures located in the named source.
pub fn compile_source(source: &Source, options: &Options) -> Result<String> {
    log::debug!("compiling `{}`", source.name);
    compile(&source.text, options).map_err(|failure| {
        let (line, column) = failure.location(&source.text);
        DriverError::Parse { source_name: source.name.clone(), line, column, failure }
    })
}

/// Compile independent sources in parallel. Results keep the order of
/// `sources`.
pub fn compile_many(sources: &[Source], options: &Options) -> Vec<Result<String>> {
    log::info!("compiling {} source(s)", sources.len());
    sources.par_iter().map(|source| compile_source(source, options)).collect()
}
