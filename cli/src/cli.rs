use clap::Parser;
use std::path::PathBuf;

/// Generate TypeScript constructors, folds, prisms and equalities from
/// algebraic data declarations.
#[derive(Parser)]
#[command(name = "adtc", version, about, long_about = None)]
pub struct Cli {
    /// Files holding one declaration each; stdin when absent
    #[arg(value_name = "FILE")]
    pub files: Vec<PathBuf>,
    /// TOML configuration file; flags override its keys
    #[arg(short, long, value_name = "PATH")]
    pub config: Option<PathBuf>,
    /// Discriminant property of sum-type variants
    #[arg(long)]
    pub tag_name: Option<String>,
    /// Name of the eager fold
    #[arg(long)]
    pub fold_prefix: Option<String>,
    /// Parameter bound to the value being matched
    #[arg(long)]
    pub matchee_name: Option<String>,
    /// Pass fold handlers as one object parameter with this name
    #[arg(long)]
    pub handlers_name: Option<String>,
    /// Skip the prism accessors
    #[arg(long, default_value_t = false)]
    pub no_accessors: bool,
    /// Skip the equality function
    #[arg(long, default_value_t = false)]
    pub no_equality: bool,
    /// Write the output here instead of stdout
    #[arg(short, long, value_name = "OUT")]
    pub output: Option<PathBuf>,
    /// Level of verbosity
    #[arg(short, long, default_value_t = false)]
    pub verbose: bool,
}
