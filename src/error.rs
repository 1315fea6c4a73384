//! Error surface for the translation layer.
//!
//! Store failures pass through untouched, with no classification and no
//! retry. The errors this layer raises itself are identifier tokens that do
//! not decode and malformed inline file payloads.

use thiserror::Error;

#[derive(Debug, Error)]
pub enum Error {
    /// A global identifier token did not decode into a class name and an
    /// object id.
    #[error("invalid ID")]
    InvalidId,

    /// A `File`-typed input field did not carry a
    /// `{name, base64, contentType}` payload.
    #[error("invalid file upload payload for field `{field}`")]
    InvalidFileUpload { field: String },

    /// Failure reported by the object store, propagated unchanged.
    #[error(transparent)]
    Store(#[from] anyhow::Error),
}
