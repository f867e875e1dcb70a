use std::io;
use std::num::ParseIntError;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum Error {
    #[error("invalid count {input:?}: {source}")]
    InvalidCount {
        input: String,
        #[source]
        source: ParseIntError,
    },

    #[error("output error: {0}")]
    Io(#[from] io::Error),
}

pub type Result<T> = std::result::Result<T, Error>;
