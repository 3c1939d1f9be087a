use thiserror::Error;

use fleet_core::{CoreError, PackageId};

#[derive(Debug, Error)]
pub enum StoreError {
    #[error("package {0} not found")]
    PackageNotFound(PackageId),

    #[error("package parse error: {0}")]
    Parse(String),

    #[error(transparent)]
    Core(#[from] CoreError),

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

pub type StoreResult<T> = Result<T, StoreError>;
