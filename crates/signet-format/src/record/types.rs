//! Decoded record values.
//!
//! Records are plain immutable values built fresh by each decode call. Byte
//! fields serialize as lowercase hex; private key material is never
//! serialized.

use std::fmt;

use ed25519_dalek::{Signature, VerifyingKey};
use serde::{Serialize, Serializer};
use sha2::{Digest, Sha512};

use super::layout::{
    CHECKSUM_LEN, FINGERPRINT_LEN, PRIVATE_KEY_LEN, PUBLIC_KEY_LEN, SALT_LEN, SIGNATURE_LEN,
    TAG_LEN,
};
use crate::error::{FormatError, FormatResult};

/// Two-byte algorithm identifier at the start of every record.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct AlgorithmTag(pub [u8; TAG_LEN]);

impl AlgorithmTag {
    /// `pk_algo` for Ed25519, the only supported signature primitive.
    pub const ED25519: Self = Self(*b"Ed");
    /// `kdf_algo` for bcrypt-pbkdf.
    pub const BCRYPT_PBKDF: Self = Self(*b"BK");

    pub fn as_bytes(&self) -> &[u8; TAG_LEN] {
        &self.0
    }
}

impl fmt::Display for AlgorithmTag {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.0.iter().all(u8::is_ascii_graphic) {
            // ascii graphic bytes are valid single-byte chars
            for b in self.0 {
                write!(f, "{}", b as char)?;
            }
            Ok(())
        } else {
            write!(f, "0x{}", hex::encode(self.0))
        }
    }
}

impl Serialize for AlgorithmTag {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_str(self)
    }
}

/// Key number shared by a private key, its public key and its signatures.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Fingerprint(pub [u8; FINGERPRINT_LEN]);

impl Fingerprint {
    pub fn as_bytes(&self) -> &[u8; FINGERPRINT_LEN] {
        &self.0
    }
}

impl fmt::Display for Fingerprint {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&hex::encode(self.0))
    }
}

impl Serialize for Fingerprint {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_str(self)
    }
}

fn hex_bytes<S: Serializer, T: AsRef<[u8]>>(bytes: &T, serializer: S) -> Result<S::Ok, S::Error> {
    serializer.serialize_str(&hex::encode(bytes))
}

/// Secret key record.
///
/// `private_key` is exactly what the file holds: ciphertext when
/// `kdf_rounds > 0`, the plaintext Ed25519 keypair when `kdf_rounds == 0`.
/// Nothing here derives a key from a passphrase or decrypts.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct EncryptedKeyRecord {
    pub pk_algo: AlgorithmTag,
    pub kdf_algo: AlgorithmTag,
    pub kdf_rounds: u32,
    #[serde(serialize_with = "hex_bytes")]
    pub salt: [u8; SALT_LEN],
    #[serde(serialize_with = "hex_bytes")]
    pub checksum: [u8; CHECKSUM_LEN],
    pub fingerprint: Fingerprint,
    #[serde(skip_serializing)]
    pub private_key: [u8; PRIVATE_KEY_LEN],
}

impl EncryptedKeyRecord {
    /// `false` when `kdf_rounds == 0`, meaning the key is stored in the clear.
    pub fn is_encrypted(&self) -> bool {
        self.kdf_rounds > 0
    }

    /// Check `checksum` against the first bytes of SHA-512 over the plaintext
    /// private key.
    ///
    /// Only possible for unencrypted keys; encrypted ones fail with
    /// [`FormatError::KeyEncrypted`].
    pub fn verify_checksum(&self) -> FormatResult<()> {
        if self.is_encrypted() {
            return Err(FormatError::KeyEncrypted {
                rounds: self.kdf_rounds,
            });
        }

        let digest = Sha512::digest(self.private_key);
        let computed = &digest.as_slice()[..CHECKSUM_LEN];
        if computed != self.checksum.as_slice() {
            return Err(FormatError::ChecksumMismatch {
                expected: hex::encode(self.checksum),
                actual: hex::encode(computed),
            });
        }
        Ok(())
    }
}

/// Public key record.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct PublicKeyRecord {
    pub pk_algo: AlgorithmTag,
    pub fingerprint: Fingerprint,
    #[serde(serialize_with = "hex_bytes")]
    pub public_key: [u8; PUBLIC_KEY_LEN],
}

impl PublicKeyRecord {
    /// Parse the material as an Ed25519 point. Does not verify anything.
    pub fn verifying_key(&self) -> FormatResult<VerifyingKey> {
        VerifyingKey::from_bytes(&self.public_key).map_err(FormatError::InvalidPublicKey)
    }
}

/// Detached signature record.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct SignatureRecord {
    pub pk_algo: AlgorithmTag,
    pub fingerprint: Fingerprint,
    #[serde(serialize_with = "hex_bytes")]
    pub signature: [u8; SIGNATURE_LEN],
}

impl SignatureRecord {
    pub fn signature(&self) -> Signature {
        Signature::from_bytes(&self.signature)
    }
}
