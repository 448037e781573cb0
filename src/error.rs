use std::path::PathBuf;
use thiserror::Error;

pub type Result<T> = std::result::Result<T, BootstrapError>;

#[derive(Error, Debug)]
pub enum BootstrapError {
    #[error("I/O error on '{}': {source}", path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Malformed index row at {}:{line}: {message}", path.display())]
    Parse {
        path: PathBuf,
        line: usize, // 1-based
        message: String,
    },

    #[error("No unit listed in '{}' has a data file, nothing to resample", path.display())]
    EmptyIndex { path: PathBuf },
}

impl BootstrapError {
    pub fn io(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        BootstrapError::Io { path: path.into(), source }
    }
}
