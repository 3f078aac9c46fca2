use std::io;
use thiserror::Error as ThisError;

#[derive(Debug, ThisError)]
pub enum Error {
    #[error("ERR - io: {0}")]
    Io(#[from] io::Error),

    #[error("ERR - header length: expected {expected} bytes, got {actual}")]
    InvalidLength { expected: usize, actual: usize },

    #[error("ERR - unknown page kind: {0:#04x}")]
    UnknownPageKind(u8),

    #[error("ERR - bad magic banner: {0:?}")]
    BadMagic([u8; 16]),

    #[error("ERR - invalid page size: {0}")]
    InvalidPageSize(u16),

    #[error("ERR - other: {0}")]
    Other(#[from] anyhow::Error),
}
