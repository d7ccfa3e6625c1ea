//! Exit codes for `signet`.
//! Decode failures reuse `FormatError::exit_code`, so 2-4 are shared with the library.

pub const SUCCESS: i32 = 0;
pub const ERROR: i32 = 1; // I/O, usage, or anything not classified below
pub const ENVELOPE: i32 = 2; // Truncated, missing header, bad base64
pub const RECORD: i32 = 3; // Size mismatch, unsupported algorithm
pub const INTEGRITY: i32 = 4; // Checksum mismatch or key still encrypted
pub const FINGERPRINT_MISMATCH: i32 = 5; // `signet match` found artifacts from different keys
