/// Errors shared by every credset crate.
///
/// Display strings are user-facing; the CLI prints them as a single line.
#[derive(Debug, thiserror::Error)]
pub enum Error {
    #[error("invalid credential set name {0:?}: use only letters, digits, '-' and '_'")]
    NameInvalid(String),
    #[error("{0}")]
    NotFound(String),
    #[error("invalid format: {0}")]
    FormatInvalid(String),
    #[error("storage error: {0}")]
    Storage(String),
    #[error("configuration error: {0}")]
    Config(String),
    #[error("bundle error: {0}")]
    Bundle(String),
    #[error("prompt error: {0}")]
    Prompt(String),
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

impl Error {
    pub fn is_not_found(&self) -> bool {
        matches!(self, Self::NotFound(_))
    }
}

pub type Result<T> = std::result::Result<T, Error>;
