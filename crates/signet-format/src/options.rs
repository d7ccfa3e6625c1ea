//! Decoder configuration.

/// Environment variable enabling strict algorithm checks.
pub const STRICT_ENV: &str = "SIGNET_STRICT";

/// Options shared by all record decoders.
///
/// The default is pass-through: algorithm tags are copied into the record
/// without being checked. With `strict`, `pk_algo` must be `"Ed"` and a key's
/// `kdf_algo` must be `"BK"`.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct DecodeOptions {
    pub strict: bool,
}

impl DecodeOptions {
    /// Strict tag validation enabled.
    pub fn strict() -> Self {
        Self { strict: true }
    }

    /// Create options from environment variables.
    ///
    /// | Variable | Description |
    /// |----------|-------------|
    /// | `SIGNET_STRICT` | `1` or `true` rejects unsupported algorithm tags |
    pub fn from_env() -> Self {
        Self {
            strict: std::env::var(STRICT_ENV)
                .map(|v| v == "1" || v.eq_ignore_ascii_case("true"))
                .unwrap_or(false),
        }
    }

    pub fn with_strict(mut self, strict: bool) -> Self {
        self.strict = strict;
        self
    }
}
