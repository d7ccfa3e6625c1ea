//! Decoder for signify-style key and signature artifacts.
//!
//! Every artifact is a two-line text envelope wrapping a fixed-layout binary
//! record:
//!
//! ```text
//! untrusted comment: signify secret key
//! RWRCSwAAACq7Bxd5tYRW5fZh3OBEe5jX...
//! ```
//!
//! Reading is split in two stages:
//!
//! - [`read_envelope`]: strip the comment line and base64-decode the payload
//! - [`decode_encrypted_key`], [`decode_public_key`], [`decode_signature`]:
//!   size-check the payload and read its big-endian fields
//!
//! Only the read path exists. No signature is verified and no passphrase is
//! applied: a secret key's `private_key` is returned exactly as stored, which
//! is ciphertext whenever `kdf_rounds > 0`.
//!
//! # Quick Start
//!
//! ```no_run
//! use signet_format::{decode_public_key, read_envelope};
//! use std::{fs::File, io::BufReader};
//!
//! # fn example() -> Result<(), signet_format::FormatError> {
//! let envelope = read_envelope(BufReader::new(File::open("release.pub")?))?;
//! let key = decode_public_key(&envelope.payload)?;
//! println!("{}: fingerprint {}", envelope.comment, key.fingerprint);
//! # Ok(())
//! # }
//! ```
//!
//! # Configuration
//!
//! | Environment Variable | Description |
//! |---------------------|-------------|
//! | `SIGNET_STRICT` | Reject algorithm tags other than `Ed`/`BK` (see [`DecodeOptions::from_env`]) |

pub mod envelope;
pub mod error;
pub mod options;
pub mod record;

pub use envelope::{read_envelope, Envelope, COMMENT_HEADER};
pub use error::{FormatError, FormatResult};
pub use options::DecodeOptions;
pub use record::{
    decode_artifact, decode_encrypted_key, decode_encrypted_key_with, decode_public_key,
    decode_public_key_with, decode_signature, decode_signature_with, AlgorithmTag, Artifact,
    ArtifactKind, EncryptedKeyRecord, Fingerprint, PublicKeyRecord, SignatureRecord,
};
