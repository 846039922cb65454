use adtc_surface::ParseFailure;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum DriverError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
    #[error("{source_name}:{line}:{column}: {failure}")]
    Parse {
        source_name: String,
        line: usize,
        column: usize,
        #[source]
        failure: ParseFailure,
    },
    #[error("invalid configuration: {0}")]
    Conf(#[from] toml::de::Error),
}

pub type Result<T> = std::result::Result<T, DriverError>;
