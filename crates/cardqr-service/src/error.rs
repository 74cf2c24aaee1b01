use std::path::PathBuf;

use thiserror::Error;

/// Service-level errors
#[derive(Error, Debug)]
pub enum ServiceError {
    #[error(transparent)]
    RfcError(#[from] cardqr_rfc::error::RfcError),

    #[error("Rendering unavailable: {0}")]
    RenderingUnavailable(&'static str),

    #[error("QR encoding failed: {0}")]
    EncodeError(#[from] qrcode::types::QrError),

    #[error("Failed to write {}: {source}", path.display())]
    IoError {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}

pub type ServiceResult<T> = std::result::Result<T, ServiceError>;
