use thiserror::Error;

#[derive(Error, Debug)]
pub enum Error {
    #[error("{key}: unable to open {path}: {source}")]
    FileOpen {
        key: String,
        path: String,
        source: std::io::Error,
    },

    #[error("{key}: unable to read {path}: {source}")]
    FileRead {
        key: String,
        path: String,
        source: std::io::Error,
    },

    #[error("{key}: unable to set environment variable: {reason}")]
    EnvSet { key: String, reason: String },

    #[error("\"{program}\" not found: {source}")]
    Lookup {
        program: String,
        source: which::Error,
    },

    #[error("program terminated with error: {0}")]
    Spawn(std::io::Error),
}

pub type Result<T> = std::result::Result<T, Error>;
