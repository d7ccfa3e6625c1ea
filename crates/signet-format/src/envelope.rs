//! Two-line text envelope around every artifact.
//!
//! ```text
//! untrusted comment: <arbitrary text>
//! <base64 of binary record>
//! ```
//!
//! The reader knows nothing about record semantics: it hands back the comment
//! and the raw decoded payload. Exactly two lines are consumed; anything after
//! the payload line is left in the stream unread.

use std::io::BufRead;

use base64::{engine::general_purpose::STANDARD as BASE64, Engine};
use tracing::debug;

use crate::error::{FormatError, FormatResult};

/// Literal prefix of the first envelope line.
pub const COMMENT_HEADER: &str = "untrusted comment: ";

/// A decoded envelope: comment text plus the raw record bytes.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Envelope {
    /// Everything after [`COMMENT_HEADER`] on the first line.
    pub comment: String,
    /// Base64-decoded second line.
    pub payload: Vec<u8>,
}

impl Envelope {
    /// Parse an envelope held in memory.
    pub fn parse(bytes: &[u8]) -> FormatResult<Self> {
        read_envelope(bytes)
    }
}

/// Read an envelope from a buffered stream.
///
/// Fails with [`FormatError::Truncated`] when the stream ends before the
/// comment or payload line, [`FormatError::MissingHeader`] when the first line
/// lacks the prefix, and [`FormatError::BadEncoding`] when the payload line is
/// not padded standard base64. Payload length is not checked here.
pub fn read_envelope<R: BufRead>(mut reader: R) -> FormatResult<Envelope> {
    let header = read_line(&mut reader)?.ok_or(FormatError::Truncated { missing: "comment" })?;

    let comment = header
        .strip_prefix(COMMENT_HEADER.as_bytes())
        .ok_or(FormatError::MissingHeader {
            prefix: COMMENT_HEADER,
        })?;
    let comment = String::from_utf8_lossy(comment).into_owned();

    let encoded = read_line(&mut reader)?.ok_or(FormatError::Truncated { missing: "payload" })?;
    let payload = BASE64.decode(&encoded).map_err(FormatError::BadEncoding)?;

    debug!(
        comment_len = comment.len(),
        payload_len = payload.len(),
        "read envelope"
    );

    Ok(Envelope { comment, payload })
}

/// Next line without its terminator, or `None` at end of stream.
///
/// Strips a trailing `\n` and then a trailing `\r`, so CRLF input and a final
/// unterminated line read the same as LF input.
fn read_line<R: BufRead>(reader: &mut R) -> FormatResult<Option<Vec<u8>>> {
    let mut line = Vec::new();
    if reader.read_until(b'\n', &mut line)? == 0 {
        return Ok(None);
    }
    if line.last() == Some(&b'\n') {
        line.pop();
    }
    if line.last() == Some(&b'\r') {
        line.pop();
    }
    Ok(Some(line))
}
