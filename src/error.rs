//! Error types for the HanDBase bridge.

use std::io;
use thiserror::Error;

use crate::format::field_type::FieldType;

/// Result type alias for bridge operations.
pub type Result<T> = std::result::Result<T, Error>;

/// Error type for HanDBase bridge operations.
#[derive(Error, Debug)]
pub enum Error {
    /// I/O error while reading or writing a collaborator stream.
    #[error("I/O error: {0}")]
    Io(#[from] io::Error),

    /// The column-descriptor marker is absent from the file.
    #[error("descriptor marker not found in file")]
    MarkerNotFound,

    /// A read ran past the end of the buffer.
    #[error("truncated record: need {needed} bytes at offset {offset}, have {available}")]
    Truncated {
        offset: usize,
        needed: usize,
        available: usize,
    },

    /// Embedded name bytes are not valid in the legacy encoding.
    #[error("{field} is not valid Windows-1252 text")]
    Decode { field: &'static str },

    /// A descriptor slot carries a type code outside the taxonomy.
    #[error("unknown field type code: {code:#04x}")]
    UnknownType { code: u8 },

    /// A field type has no SQL rendering.
    #[error("no SQL type mapping for {field_type} fields")]
    UnmappedSqlType { field_type: FieldType },

    /// SQLite error.
    #[error("SQL error: {0}")]
    Sql(#[from] rusqlite::Error),

    /// CSV read or write error.
    #[error("CSV error: {0}")]
    Csv(#[from] csv::Error),

    /// HTTP transport error.
    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    /// The web export server answered with a non-success status.
    #[error("server returned status {status} for {url}")]
    HttpStatus { status: u16, url: String },

    /// CSV input with no header row.
    #[error("CSV input has no header row")]
    MissingHeader,

    /// A column holds binary data the CSV bridge cannot carry.
    #[error("column {column} holds binary data that cannot be written as CSV")]
    BlobColumn { column: String },

    /// A listing timestamp the locale parser does not recognize.
    #[error("unparseable listing timestamp: {value:?}")]
    InvalidTimestamp { value: String },

    /// A listing row that does not match the shape the server emits.
    #[error("malformed listing row: {detail}")]
    MalformedListing { detail: String },
}

impl Error {
    /// Create a truncated-record error.
    pub fn truncated(offset: usize, needed: usize, available: usize) -> Self {
        Self::Truncated {
            offset,
            needed,
            available,
        }
    }

    /// Create a malformed-listing error.
    pub fn malformed_listing(detail: impl Into<String>) -> Self {
        Self::MalformedListing {
            detail: detail.into(),
        }
    }
}
