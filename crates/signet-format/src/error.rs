//! Error types for envelope reading and record decoding.

/// Errors produced while reading an envelope or decoding a record.
#[derive(Debug, thiserror::Error)]
pub enum FormatError {
    /// The underlying stream failed while reading a line.
    #[error("read error: {0}")]
    Io(#[from] std::io::Error),

    /// The stream ended before both envelope lines were read.
    #[error("truncated envelope: missing {missing} line")]
    Truncated { missing: &'static str },

    /// The first line lacks the `untrusted comment: ` prefix.
    #[error("missing header: first line must start with {prefix:?}")]
    MissingHeader { prefix: &'static str },

    /// The payload line is not valid standard base64.
    #[error("bad encoding: {0}")]
    BadEncoding(#[source] base64::DecodeError),

    /// The decoded payload does not have the exact size of the target record.
    #[error("size mismatch for {record}: expected {expected} bytes, got {actual}")]
    SizeMismatch {
        record: &'static str,
        expected: usize,
        actual: usize,
    },

    /// Strict decoding found an algorithm tag other than the supported one.
    #[error("unsupported {field}: expected {expected:?}, got {actual:?}")]
    UnsupportedAlgorithm {
        field: &'static str,
        expected: String,
        actual: String,
    },

    /// Public key material is not a valid Ed25519 point.
    #[error("invalid public key material: {0}")]
    InvalidPublicKey(#[source] ed25519_dalek::SignatureError),

    /// The private key material is still encrypted, so it cannot be checked.
    #[error("private key is encrypted ({rounds} kdf rounds); checksum needs the plaintext key")]
    KeyEncrypted { rounds: u32 },

    /// Checksum over the plaintext private key does not match the stored one.
    #[error("checksum mismatch: stored {expected}, computed {actual}")]
    ChecksumMismatch { expected: String, actual: String },
}

impl FormatError {
    /// Exit code for CLI.
    pub fn exit_code(&self) -> i32 {
        match self {
            Self::Io(_) => 1,

            // Envelope framing
            Self::Truncated { .. } => 2,
            Self::MissingHeader { .. } => 2,
            Self::BadEncoding(_) => 2,

            // Record shape
            Self::SizeMismatch { .. } => 3,
            Self::UnsupportedAlgorithm { .. } => 3,
            Self::InvalidPublicKey(_) => 3,

            // Integrity
            Self::KeyEncrypted { .. } => 4,
            Self::ChecksumMismatch { .. } => 4,
        }
    }

    /// Whether the failure happened while framing the text envelope.
    pub fn is_envelope_error(&self) -> bool {
        matches!(
            self,
            Self::Io(_) | Self::Truncated { .. } | Self::MissingHeader { .. } | Self::BadEncoding(_)
        )
    }
}

/// Result type for format operations.
pub type FormatResult<T> = Result<T, FormatError>;
