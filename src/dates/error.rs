use std::path::PathBuf;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum DateTableError {
    #[error("Failed to read date table file '{0}'")]
    Read(PathBuf, #[source] std::io::Error),

    #[error("Failed to write date table file '{0}'")]
    Write(PathBuf, #[source] std::io::Error),

    #[error("Failed to decode date table from '{0}'")]
    Decode(PathBuf, #[source] Box<bincode::error::DecodeError>),

    #[error("Failed to encode date table")]
    Encode(#[source] Box<bincode::error::EncodeError>),
}
