use thiserror::Error;

/// vCard construction and validation errors
#[derive(Error, Debug)]
pub enum RfcError {
    #[error("{field} must be an absolute http(s) URL, got {value:?}")]
    InvalidUri { field: &'static str, value: String },

    #[error("Invalid key fingerprint: {0}")]
    InvalidFingerprint(String),

    #[error(
        "vCard payload is {size} bytes, above the {limit}-byte QR limit; shorten or remove optional fields"
    )]
    PayloadTooLarge { size: usize, limit: usize },

    #[error("A name is required: supply a full name or a given name/surname")]
    MissingName,
}

pub type RfcResult<T> = std::result::Result<T, RfcError>;
