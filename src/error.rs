use thiserror::Error as ThisError;

pub const USAGE: &str = "\
Usage is `amorph N=<N> density=<density>`
e.g. `amorph N=200 density=1.5`";

/// Error types
#[derive(Debug, ThisError)]
pub enum Error {
    #[error(
        "Unable to parse script kwargs. \
         Ensure that all options are passed in the form 'key=value'. Found '{0}'"
    )]
    ArgumentParse(String),
    #[error("Missing required key '{0}'\n{usage}", usage = USAGE)]
    MissingKey(&'static str),
    #[error("Invalid value '{value}' for key '{key}'")]
    InvalidValue { key: String, value: String },
    #[error("Invalid parameter: {0}")]
    InvalidParameter(String),
    #[error("Failed to place atom {index} after {attempts} attempts")]
    PlacementFailed { index: usize, attempts: u64 },
    #[error("Malformed data file: {0}")]
    Format(String),
    #[error(transparent)]
    Io(#[from] std::io::Error),
}

impl Error {
    /// Process exit status for this error, 1 for malformed `key=value` tokens
    pub fn exit_code(&self) -> i32 {
        match self {
            Error::ArgumentParse(_) => 1,
            _ => 2,
        }
    }
}
