//! Error taxonomy for the API layer.
//!
//! Expected failures are values, never panics: the client and session hand
//! every failure to the caller as an [`ApiError`] whose `Display` output is
//! suitable for showing to a user.

use store::StorageError;
use thiserror::Error;

/// Failure while decoding the bearer credential's payload.
///
/// Structural problems (wrong segment count, bad encoding, payload not a
/// JSON object) are [`Malformed`](ClaimsError::Malformed); a well-formed
/// payload lacking a required claim is [`MissingClaim`](ClaimsError::MissingClaim).
#[derive(Debug, Error, PartialEq, Eq)]
pub enum ClaimsError {
    #[error("malformed token: {0}")]
    Malformed(&'static str),
    #[error("token is missing required claim `{0}`")]
    MissingClaim(&'static str),
}

/// Any failure a caller of the API layer can observe.
#[derive(Debug, Error)]
pub enum ApiError {
    /// The request never reached or never returned from the server.
    #[error("request failed: {0}")]
    Transport(#[from] reqwest::Error),

    /// The server answered with a non-2xx status.
    #[error("API error: {status} - {body}")]
    Server { status: u16, body: String },

    /// A 2xx response body was not valid for the expected shape.
    #[error("failed to parse response: {detail}")]
    Parse { detail: String },

    /// An authenticated request was attempted with no stored credential.
    #[error("No auth token available")]
    MissingToken,

    /// The credential persistence medium failed.
    #[error(transparent)]
    Storage(#[from] StorageError),

    /// The stored credential could not be decoded.
    #[error(transparent)]
    Claims(#[from] ClaimsError),
}
