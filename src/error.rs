//! Errors produced while decoding or rendering a single certificate line.
//!
//! Every error is a deterministic consequence of the input line (or of the
//! reference data), so none of them is worth retrying: callers report it and
//! move on to the next line.

use thiserror::Error;

/// Result alias used across the crate.
pub type Result<T, E = Error> = std::result::Result<T, E>;

#[derive(Error, Debug)]
pub enum Error {
    /// The line does not start with the `HC1:` prefix.
    #[error("unsupported certificate format: data must start with {prefix} prefix")]
    UnsupportedFormat { prefix: &'static str },

    /// The text after the prefix is not valid base45.
    #[error("base45 decoding failed: {0}")]
    Decode(#[from] base45::DecodeError),

    /// The zlib stream is corrupt or truncated.
    #[error("zlib decompression failed: {0}")]
    Decompress(#[source] std::io::Error),

    /// The COSE_Sign1 envelope is malformed.
    #[error("malformed signed envelope: {0}")]
    Envelope(String),

    /// The CBOR payload is malformed.
    #[error("malformed payload: {0}")]
    Payload(String),

    /// A required claim or certificate field is absent or has the wrong type.
    #[error("missing or invalid field `{field}`")]
    MissingField { field: String },

    /// A certificate entry carries none of the known variant keys.
    #[error("certificate entry {entry} has no recovery, test or vaccination record")]
    UnknownVariant { entry: String },

    /// A sub-record field code is not part of its variant's schema.
    #[error("unknown field `{code}` in {variant} record")]
    UnknownField { variant: String, code: String },

    /// A coded value has no entry in the field's lookup table.
    #[error("unknown code `{code}` for field `{field}` in {variant} record")]
    UnknownCode {
        variant: String,
        field: String,
        code: String,
    },

    /// Reference data or formatter settings are invalid or could not be loaded.
    #[error("invalid configuration: {0}")]
    Config(String),
}

/// Fieldless discriminant of [`Error`].
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ErrorKind {
    UnsupportedFormat,
    Decode,
    Decompress,
    Envelope,
    Payload,
    MissingField,
    UnknownVariant,
    UnknownField,
    UnknownCode,
    Config,
}

impl Error {
    pub fn kind(&self) -> ErrorKind {
        match self {
            Error::UnsupportedFormat { .. } => ErrorKind::UnsupportedFormat,
            Error::Decode(_) => ErrorKind::Decode,
            Error::Decompress(_) => ErrorKind::Decompress,
            Error::Envelope(_) => ErrorKind::Envelope,
            Error::Payload(_) => ErrorKind::Payload,
            Error::MissingField { .. } => ErrorKind::MissingField,
            Error::UnknownVariant { .. } => ErrorKind::UnknownVariant,
            Error::UnknownField { .. } => ErrorKind::UnknownField,
            Error::UnknownCode { .. } => ErrorKind::UnknownCode,
            Error::Config(_) => ErrorKind::Config,
        }
    }

    pub(crate) fn missing(field: impl Into<String>) -> Self {
        Error::MissingField {
            field: field.into(),
        }
    }
}
