//! Fixed binary layouts, one declarative offset table per record shape.
//!
//! Every record is a packed big-endian struct with no variable-length parts,
//! so a table of `(name, offset, len, kind)` fully describes it. A single
//! routine, [`Layout::view`], enforces the exact size and hands out typed
//! field reads; the record constructors only name the fields they want.

use ed25519_dalek::{KEYPAIR_LENGTH, PUBLIC_KEY_LENGTH, SIGNATURE_LENGTH};
use serde::Serialize;

use crate::error::{FormatError, FormatResult};

/// Length of the algorithm tags (`pk_algo`, `kdf_algo`).
pub const TAG_LEN: usize = 2;
/// Length of a key fingerprint.
pub const FINGERPRINT_LEN: usize = 8;
/// Length of the KDF salt.
pub const SALT_LEN: usize = 16;
/// Length of the private key checksum.
pub const CHECKSUM_LEN: usize = 8;
/// Private key material size for Ed25519 (seed followed by public key).
pub const PRIVATE_KEY_LEN: usize = KEYPAIR_LENGTH;
/// Public key material size for Ed25519.
pub const PUBLIC_KEY_LEN: usize = PUBLIC_KEY_LENGTH;
/// Signature material size for Ed25519.
pub const SIGNATURE_LEN: usize = SIGNATURE_LENGTH;

/// How a field's bytes are interpreted.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum FieldKind {
    /// Two ASCII bytes naming an algorithm.
    Tag,
    /// Big-endian unsigned 32-bit integer.
    U32Be,
    /// Opaque fixed-length bytes.
    Bytes,
}

/// One row of a layout table.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct FieldSpec {
    pub name: &'static str,
    pub offset: usize,
    pub len: usize,
    pub kind: FieldKind,
}

impl FieldSpec {
    const fn new(name: &'static str, offset: usize, len: usize, kind: FieldKind) -> Self {
        Self {
            name,
            offset,
            len,
            kind,
        }
    }

    /// First byte past this field.
    pub const fn end(&self) -> usize {
        self.offset + self.len
    }
}

/// Ordered field table for one record shape.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct Layout {
    pub record: &'static str,
    pub fields: &'static [FieldSpec],
}

impl Layout {
    /// Exact encoded size: end of the last field.
    pub const fn size(&self) -> usize {
        match self.fields.last() {
            Some(field) => field.end(),
            None => 0,
        }
    }

    /// Check `raw` is exactly [`Layout::size`] bytes and expose its fields.
    pub(crate) fn view<'a>(&self, raw: &'a [u8]) -> FormatResult<FieldView<'a>> {
        let expected = self.size();
        if raw.len() != expected {
            return Err(FormatError::SizeMismatch {
                record: self.record,
                expected,
                actual: raw.len(),
            });
        }
        Ok(FieldView { raw })
    }
}

/// Size-checked record bytes.
pub(crate) struct FieldView<'a> {
    raw: &'a [u8],
}

impl FieldView<'_> {
    /// Copy a fixed-length field out. `N` must equal `field.len`.
    pub(crate) fn array<const N: usize>(&self, field: &FieldSpec) -> [u8; N] {
        debug_assert_eq!(N, field.len, "array width differs for {}", field.name);
        let mut out = [0u8; N];
        out.copy_from_slice(&self.raw[field.offset..field.end()]);
        out
    }

    pub(crate) fn u32_be(&self, field: &FieldSpec) -> u32 {
        debug_assert_eq!(field.kind, FieldKind::U32Be);
        u32::from_be_bytes(self.array(field))
    }
}

/// Encrypted (or plaintext, when `kdf_rounds == 0`) private key.
pub mod encrypted_key {
    use super::*;

    pub const PK_ALGO: FieldSpec = FieldSpec::new("pk_algo", 0, TAG_LEN, FieldKind::Tag);
    pub const KDF_ALGO: FieldSpec = FieldSpec::new("kdf_algo", 2, TAG_LEN, FieldKind::Tag);
    pub const KDF_ROUNDS: FieldSpec = FieldSpec::new("kdf_rounds", 4, 4, FieldKind::U32Be);
    pub const SALT: FieldSpec = FieldSpec::new("salt", 8, SALT_LEN, FieldKind::Bytes);
    pub const CHECKSUM: FieldSpec = FieldSpec::new("checksum", 24, CHECKSUM_LEN, FieldKind::Bytes);
    pub const FINGERPRINT: FieldSpec =
        FieldSpec::new("fingerprint", 32, FINGERPRINT_LEN, FieldKind::Bytes);
    pub const PRIVATE_KEY: FieldSpec =
        FieldSpec::new("private_key", 40, PRIVATE_KEY_LEN, FieldKind::Bytes);

    pub static LAYOUT: Layout = Layout {
        record: "encrypted key",
        fields: &[
            PK_ALGO,
            KDF_ALGO,
            KDF_ROUNDS,
            SALT,
            CHECKSUM,
            FINGERPRINT,
            PRIVATE_KEY,
        ],
    };
}

pub mod public_key {
    use super::*;

    pub const PK_ALGO: FieldSpec = FieldSpec::new("pk_algo", 0, TAG_LEN, FieldKind::Tag);
    pub const FINGERPRINT: FieldSpec =
        FieldSpec::new("fingerprint", 2, FINGERPRINT_LEN, FieldKind::Bytes);
    pub const PUBLIC_KEY: FieldSpec =
        FieldSpec::new("public_key", 10, PUBLIC_KEY_LEN, FieldKind::Bytes);

    pub static LAYOUT: Layout = Layout {
        record: "public key",
        fields: &[PK_ALGO, FINGERPRINT, PUBLIC_KEY],
    };
}

pub mod signature {
    use super::*;

    pub const PK_ALGO: FieldSpec = FieldSpec::new("pk_algo", 0, TAG_LEN, FieldKind::Tag);
    pub const FINGERPRINT: FieldSpec =
        FieldSpec::new("fingerprint", 2, FINGERPRINT_LEN, FieldKind::Bytes);
    pub const SIGNATURE: FieldSpec =
        FieldSpec::new("signature", 10, SIGNATURE_LEN, FieldKind::Bytes);

    pub static LAYOUT: Layout = Layout {
        record: "signature",
        fields: &[PK_ALGO, FINGERPRINT, SIGNATURE],
    };
}

/// All record layouts, in artifact order (secret key, public key, signature).
pub fn all_layouts() -> [&'static Layout; 3] {
    [
        &encrypted_key::LAYOUT,
        &public_key::LAYOUT,
        &signature::LAYOUT,
    ]
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_layouts_are_contiguous_from_zero() {
        for layout in all_layouts() {
            let mut next = 0;
            for field in layout.fields {
                assert_eq!(
                    field.offset, next,
                    "{}.{} leaves a gap or overlaps",
                    layout.record, field.name
                );
                next = field.end();
            }
            assert_eq!(next, layout.size());
        }
    }

    #[test]
    fn test_ed25519_record_sizes() {
        assert_eq!(encrypted_key::LAYOUT.size(), 2 + 2 + 4 + 16 + 8 + 8 + 64);
        assert_eq!(encrypted_key::LAYOUT.size(), 104);
        assert_eq!(public_key::LAYOUT.size(), 42);
        assert_eq!(signature::LAYOUT.size(), 74);
    }

    #[test]
    fn test_view_rejects_wrong_length() {
        let short = [0u8; 41];
        let err = public_key::LAYOUT.view(&short).err().unwrap();
        assert!(matches!(
            err,
            FormatError::SizeMismatch {
                record: "public key",
                expected: 42,
                actual: 41
            }
        ));
    }

    #[test]
    fn test_u32_is_big_endian() {
        let mut raw = [0u8; 104];
        raw[4..8].copy_from_slice(&[0x00, 0x00, 0x00, 0x2a]);
        let view = encrypted_key::LAYOUT.view(&raw).unwrap();
        assert_eq!(view.u32_be(&encrypted_key::KDF_ROUNDS), 42);

        raw[4..8].copy_from_slice(&[0x01, 0x02, 0x03, 0x04]);
        let view = encrypted_key::LAYOUT.view(&raw).unwrap();
        assert_eq!(view.u32_be(&encrypted_key::KDF_ROUNDS), 0x0102_0304);
    }
}
