use ristikko_core::{CellId, LetterError};

/// Errors raised while encoding or decoding persisted letters.
#[derive(Debug, derive_more::Display, derive_more::Error, derive_more::From)]
pub enum PersistenceError {
    /// The snapshot is not a JSON object of strings.
    #[display("malformed letter snapshot: {_0}")]
    #[from]
    Json(#[error(source)] serde_json::Error),
    /// A key is not a positive decimal cell id.
    #[display("invalid cell id key: {key:?}")]
    InvalidCellId {
        /// The offending key.
        key: String,
    },
    /// A value is neither empty nor a single accepted letter.
    #[display("invalid letter for cell {id}: {source}")]
    InvalidLetter {
        /// The cell the value belongs to.
        id: CellId,
        /// Why the letter was rejected.
        source: LetterError,
    },
}
