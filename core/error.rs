use std::path::PathBuf;
use thiserror::Error;

pub type Result<T, E = ReaderError> = std::result::Result<T, E>;

#[derive(Error, Debug)]
#[non_exhaustive]
pub enum ReaderError {
    #[error("Configuration Error: {0}")]
    Config(String),

    #[error("TOML Parsing Error: {0}")]
    TomlParse(#[from] toml::de::Error),

    #[error("Filesystem Error: {0}")]
    Io(#[from] std::io::Error),

    #[error("File Read Error: Path '{path}', Error: {source}")]
    FileRead {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("File Write Error: Path '{path}', Error: {source}")]
    FileWrite {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Directory Read Error: Path '{path}', Error: {source}")]
    DirRead {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("WalkDir Error: {0}")]
    WalkDir(String),

    #[error("Ignore Error: {0}")]
    Ignore(#[from] ignore::Error),

    #[error("Failed to fetch ignore patterns for '{language}': {reason}")]
    PatternFetch { language: String, reason: String },

    #[error("Invalid Argument: {0}")]
    InvalidArgument(String),

    #[error("TikToken Error: {0}")]
    TikToken(String),

    #[error("Duration Parsing Error: {0}")]
    DurationParse(String),
}

impl ReaderError {
    pub(crate) fn file_read(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        ReaderError::FileRead {
            path: path.into(),
            source,
        }
    }

    pub(crate) fn file_write(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        ReaderError::FileWrite {
            path: path.into(),
            source,
        }
    }
}

impl From<walkdir::Error> for ReaderError {
    fn from(err: walkdir::Error) -> Self {
        match (err.path().map(PathBuf::from), err.io_error().map(|e| e.kind())) {
            (Some(path), Some(kind)) => ReaderError::DirRead {
                path,
                source: std::io::Error::new(kind, err.to_string()),
            },
            _ => ReaderError::WalkDir(err.to_string()),
        }
    }
}

impl From<parse_duration::parse::Error> for ReaderError {
    fn from(err: parse_duration::parse::Error) -> Self {
        ReaderError::DurationParse(err.to_string())
    }
}
