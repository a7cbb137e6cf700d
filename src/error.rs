//! Error type for fqcount.

use std::io;
use std::path::PathBuf;

use thiserror::Error;

pub type Result<T> = std::result::Result<T, Error>;

#[derive(Debug, Error)]
pub enum Error {
    /// The input file could not be opened.
    #[error("could not open {path:?}")]
    Open {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    /// The compression format could not be detected or is not supported.
    #[error("could not set up decompression")]
    Compression(#[from] niffler::Error),

    /// Read failure, including corrupt compressed data.
    #[error("read error")]
    Io(#[from] io::Error),

    /// The stream ended inside a record.
    #[error("input ended inside record {record}: found {lines} of 4 lines")]
    Truncated {
        /// 1-based index of the incomplete record
        record: u64,
        /// number of lines of that record that were present
        lines: usize,
    },
}
