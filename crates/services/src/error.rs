//! Shared error types for the services crate.

use thiserror::Error;

use algebruh_core::model::{CodeError, SourceError};

/// Transport-level failures from the scripted browser client.
#[derive(Debug, Error)]
#[non_exhaustive]
pub enum WebError {
    #[error("connection error: {0}")]
    Connection(String),
}

impl From<reqwest::Error> for WebError {
    fn from(err: reqwest::Error) -> Self {
        Self::Connection(err.to_string())
    }
}

/// Errors emitted by `Session::login`.
#[derive(Debug, Error)]
#[non_exhaustive]
pub enum LoginError {
    /// The submit did not come back with the redirect the site uses to
    /// signal a successful login.
    #[error("login rejected with status {0}")]
    Rejected(u16),
    /// Authenticated, but the course access page did not answer 200.
    #[error("course access denied with status {0}")]
    AccessDenied(u16),
    #[error(transparent)]
    Web(#[from] WebError),
}

/// Errors emitted by the session fetch operations.
#[derive(Debug, Error)]
#[non_exhaustive]
pub enum FetchError {
    /// The operation requires `is_logged_in()`; no request was issued.
    #[error("not logged into the site")]
    NotLoggedIn,
    #[error(transparent)]
    Code(#[from] CodeError),
    #[error(transparent)]
    Source(#[from] SourceError),
    #[error(transparent)]
    Web(#[from] WebError),
}

/// Errors emitted by `AnswerResolver`.
#[derive(Debug, Error)]
#[non_exhaustive]
pub enum ResolveError {
    #[error("image could not be decoded: {0}")]
    Decode(#[from] image::ImageError),
}
