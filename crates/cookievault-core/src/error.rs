//! Error types for CookieVault.

use thiserror::Error;

#[derive(Error, Debug)]
pub enum Error {
    /// The essential grant was missing or denied on `save`.
    #[error("Invalid input: {0}")]
    InvalidInput(String),

    /// The persistence medium rejected the write. The previously
    /// persisted record is left intact.
    #[error("Write failure: {0}")]
    WriteFailure(String),

    /// The persisted record is malformed. Internal to the store;
    /// `load` reports absence instead of surfacing this.
    #[error("Corrupt record: {0}")]
    CorruptRecord(String),
}

pub type Result<T> = std::result::Result<T, Error>;
