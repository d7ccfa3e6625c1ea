//! Record decoding: fixed-layout binary payload to typed record.
//!
//! Each entry point checks the exact size for its shape, then reads fields at
//! their fixed offsets. Callers pick the decoder from context (file extension
//! or intent), never from the tag bytes; a payload built for one shape fails
//! another shape's size check.

pub mod layout;
mod types;

use std::fmt;
use std::path::Path;
use std::str::FromStr;

use serde::Serialize;
use tracing::debug;

pub use layout::{all_layouts, FieldKind, FieldSpec, Layout};
pub use types::{
    AlgorithmTag, EncryptedKeyRecord, Fingerprint, PublicKeyRecord, SignatureRecord,
};

use crate::error::{FormatError, FormatResult};
use crate::options::DecodeOptions;
use layout::{encrypted_key, public_key, signature};

/// Decode a secret key payload with pass-through tag handling.
pub fn decode_encrypted_key(raw: &[u8]) -> FormatResult<EncryptedKeyRecord> {
    decode_encrypted_key_with(raw, &DecodeOptions::default())
}

pub fn decode_encrypted_key_with(
    raw: &[u8],
    options: &DecodeOptions,
) -> FormatResult<EncryptedKeyRecord> {
    let view = encrypted_key::LAYOUT.view(raw)?;
    let record = EncryptedKeyRecord {
        pk_algo: AlgorithmTag(view.array(&encrypted_key::PK_ALGO)),
        kdf_algo: AlgorithmTag(view.array(&encrypted_key::KDF_ALGO)),
        kdf_rounds: view.u32_be(&encrypted_key::KDF_ROUNDS),
        salt: view.array(&encrypted_key::SALT),
        checksum: view.array(&encrypted_key::CHECKSUM),
        fingerprint: Fingerprint(view.array(&encrypted_key::FINGERPRINT)),
        private_key: view.array(&encrypted_key::PRIVATE_KEY),
    };

    if options.strict {
        expect_tag("pk_algo", record.pk_algo, AlgorithmTag::ED25519)?;
        expect_tag("kdf_algo", record.kdf_algo, AlgorithmTag::BCRYPT_PBKDF)?;
    }

    debug!(
        record = encrypted_key::LAYOUT.record,
        kdf_rounds = record.kdf_rounds,
        strict = options.strict,
        "decoded record"
    );
    Ok(record)
}

/// Decode a public key payload with pass-through tag handling.
pub fn decode_public_key(raw: &[u8]) -> FormatResult<PublicKeyRecord> {
    decode_public_key_with(raw, &DecodeOptions::default())
}

pub fn decode_public_key_with(
    raw: &[u8],
    options: &DecodeOptions,
) -> FormatResult<PublicKeyRecord> {
    let view = public_key::LAYOUT.view(raw)?;
    let record = PublicKeyRecord {
        pk_algo: AlgorithmTag(view.array(&public_key::PK_ALGO)),
        fingerprint: Fingerprint(view.array(&public_key::FINGERPRINT)),
        public_key: view.array(&public_key::PUBLIC_KEY),
    };

    if options.strict {
        expect_tag("pk_algo", record.pk_algo, AlgorithmTag::ED25519)?;
    }

    debug!(
        record = public_key::LAYOUT.record,
        strict = options.strict,
        "decoded record"
    );
    Ok(record)
}

/// Decode a signature payload with pass-through tag handling.
pub fn decode_signature(raw: &[u8]) -> FormatResult<SignatureRecord> {
    decode_signature_with(raw, &DecodeOptions::default())
}

pub fn decode_signature_with(
    raw: &[u8],
    options: &DecodeOptions,
) -> FormatResult<SignatureRecord> {
    let view = signature::LAYOUT.view(raw)?;
    let record = SignatureRecord {
        pk_algo: AlgorithmTag(view.array(&signature::PK_ALGO)),
        fingerprint: Fingerprint(view.array(&signature::FINGERPRINT)),
        signature: view.array(&signature::SIGNATURE),
    };

    if options.strict {
        expect_tag("pk_algo", record.pk_algo, AlgorithmTag::ED25519)?;
    }

    debug!(
        record = signature::LAYOUT.record,
        strict = options.strict,
        "decoded record"
    );
    Ok(record)
}

fn expect_tag(
    field: &'static str,
    actual: AlgorithmTag,
    expected: AlgorithmTag,
) -> FormatResult<()> {
    if actual != expected {
        return Err(FormatError::UnsupportedAlgorithm {
            field,
            expected: expected.to_string(),
            actual: actual.to_string(),
        });
    }
    Ok(())
}

/// Which record shape an artifact holds.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "kebab-case")]
pub enum ArtifactKind {
    SecretKey,
    PublicKey,
    Signature,
}

impl ArtifactKind {
    /// Route by file extension: `.sec`/`.key`, `.pub`, `.sig`.
    pub fn from_path(path: &Path) -> Option<Self> {
        match path.extension()?.to_str()? {
            "sec" | "key" => Some(Self::SecretKey),
            "pub" => Some(Self::PublicKey),
            "sig" => Some(Self::Signature),
            _ => None,
        }
    }

    pub fn layout(&self) -> &'static Layout {
        match self {
            Self::SecretKey => &encrypted_key::LAYOUT,
            Self::PublicKey => &public_key::LAYOUT,
            Self::Signature => &signature::LAYOUT,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Self::SecretKey => "secret-key",
            Self::PublicKey => "public-key",
            Self::Signature => "signature",
        }
    }
}

impl fmt::Display for ArtifactKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for ArtifactKind {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "secret-key" | "sec" | "key" => Ok(Self::SecretKey),
            "public-key" | "pub" => Ok(Self::PublicKey),
            "signature" | "sig" => Ok(Self::Signature),
            other => Err(format!(
                "unknown artifact kind '{other}' (expected secret-key, public-key or signature)"
            )),
        }
    }
}

/// Any decoded record.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "kind", rename_all = "kebab-case")]
pub enum Artifact {
    SecretKey(EncryptedKeyRecord),
    PublicKey(PublicKeyRecord),
    Signature(SignatureRecord),
}

impl Artifact {
    pub fn kind(&self) -> ArtifactKind {
        match self {
            Self::SecretKey(_) => ArtifactKind::SecretKey,
            Self::PublicKey(_) => ArtifactKind::PublicKey,
            Self::Signature(_) => ArtifactKind::Signature,
        }
    }

    pub fn fingerprint(&self) -> Fingerprint {
        match self {
            Self::SecretKey(r) => r.fingerprint,
            Self::PublicKey(r) => r.fingerprint,
            Self::Signature(r) => r.fingerprint,
        }
    }

    pub fn pk_algo(&self) -> AlgorithmTag {
        match self {
            Self::SecretKey(r) => r.pk_algo,
            Self::PublicKey(r) => r.pk_algo,
            Self::Signature(r) => r.pk_algo,
        }
    }
}

/// Decode `raw` as the given shape.
pub fn decode_artifact(
    kind: ArtifactKind,
    raw: &[u8],
    options: &DecodeOptions,
) -> FormatResult<Artifact> {
    Ok(match kind {
        ArtifactKind::SecretKey => Artifact::SecretKey(decode_encrypted_key_with(raw, options)?),
        ArtifactKind::PublicKey => Artifact::PublicKey(decode_public_key_with(raw, options)?),
        ArtifactKind::Signature => Artifact::Signature(decode_signature_with(raw, options)?),
    })
}
