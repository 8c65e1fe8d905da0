use thiserror::Error;

use crate::model::{CodeError, CredentialsError, SourceError};

#[derive(Debug, Error)]
pub enum Error {
    #[error(transparent)]
    Credentials(#[from] CredentialsError),
    #[error(transparent)]
    Code(#[from] CodeError),
    #[error(transparent)]
    Source(#[from] SourceError),
}
