use anyhow::{anyhow, Context, Result};
use std::fs::File;
use std::io::BufReader;
use std::path::{Path, PathBuf};
use tracing::debug;

use signet_format::{
    decode_artifact, read_envelope, Artifact, ArtifactKind, DecodeOptions, Envelope, FormatError,
};

use super::args::DecodeFlags;
use crate::exit_codes;

/// `--strict` wins; otherwise `SIGNET_STRICT` decides.
pub fn decode_options(flags: &DecodeFlags) -> DecodeOptions {
    if flags.strict {
        DecodeOptions::strict()
    } else {
        DecodeOptions::from_env()
    }
}

pub fn resolve_kind(path: &Path, explicit: Option<ArtifactKind>) -> Result<ArtifactKind> {
    explicit
        .or_else(|| ArtifactKind::from_path(path))
        .ok_or_else(|| {
            anyhow!(
                "cannot tell record type of {} from its extension (use --kind)",
                path.display()
            )
        })
}

pub struct LoadedArtifact {
    pub path: PathBuf,
    pub envelope: Envelope,
    pub artifact: Artifact,
}

pub fn load_artifact(
    path: &Path,
    kind: ArtifactKind,
    options: &DecodeOptions,
) -> Result<LoadedArtifact> {
    let file =
        File::open(path).with_context(|| format!("failed to open: {}", path.display()))?;

    let envelope = read_envelope(BufReader::new(file))
        .with_context(|| format!("failed to read envelope: {}", path.display()))?;

    let artifact = decode_artifact(kind, &envelope.payload, options)
        .with_context(|| format!("failed to decode {} as {kind}", path.display()))?;

    debug!(path = %path.display(), %kind, "loaded artifact");

    Ok(LoadedArtifact {
        path: path.to_path_buf(),
        envelope,
        artifact,
    })
}

/// Exit code for a command error, classified by the decode stage when known.
pub fn exit_code_for(err: &anyhow::Error) -> i32 {
    err.downcast_ref::<FormatError>()
        .map(FormatError::exit_code)
        .unwrap_or(exit_codes::ERROR)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_resolve_kind_prefers_explicit() {
        let kind = resolve_kind(Path::new("a.pub"), Some(ArtifactKind::Signature)).unwrap();
        assert_eq!(kind, ArtifactKind::Signature);
        assert_eq!(
            resolve_kind(Path::new("a.pub"), None).unwrap(),
            ArtifactKind::PublicKey
        );
        assert!(resolve_kind(Path::new("a.txt"), None).is_err());
    }

    #[test]
    fn test_exit_code_survives_context() {
        let err = anyhow::Error::new(FormatError::MissingHeader {
            prefix: signet_format::COMMENT_HEADER,
        })
        .context("failed to read envelope: x.pub");
        assert_eq!(exit_code_for(&err), exit_codes::ENVELOPE);
        assert_eq!(exit_code_for(&anyhow!("plain")), exit_codes::ERROR);
    }
}
