//! `signet inspect` - Decode one artifact and print its fields.

use anyhow::Result;
use serde::Serialize;
use std::fmt;

use signet_format::{Artifact, EncryptedKeyRecord, FormatError};

use super::super::args::{InspectArgs, OutputFormat};
use super::super::helpers::{decode_options, exit_code_for, load_artifact, resolve_kind};
use crate::exit_codes;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "kebab-case")]
enum ChecksumStatus {
    Verified,
    Mismatch,
    Encrypted,
}

impl ChecksumStatus {
    fn of(key: &EncryptedKeyRecord) -> Self {
        match key.verify_checksum() {
            Ok(()) => Self::Verified,
            Err(FormatError::KeyEncrypted { .. }) => Self::Encrypted,
            Err(_) => Self::Mismatch,
        }
    }
}

impl fmt::Display for ChecksumStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Self::Verified => "checksum verified",
            Self::Mismatch => "CHECKSUM MISMATCH",
            Self::Encrypted => "not checked (key is encrypted)",
        })
    }
}

#[derive(Serialize)]
struct InspectReport<'a> {
    file: String,
    comment: &'a str,
    record: &'a Artifact,
    #[serde(skip_serializing_if = "Option::is_none")]
    checksum: Option<ChecksumStatus>,
    #[serde(skip_serializing_if = "Option::is_none")]
    private_key: Option<String>,
}

pub fn cmd_inspect(args: InspectArgs) -> i32 {
    match run_inspect(&args) {
        Ok(code) => code,
        Err(e) => {
            eprintln!("error: {e:#}");
            exit_code_for(&e)
        }
    }
}

fn run_inspect(args: &InspectArgs) -> Result<i32> {
    let kind = resolve_kind(&args.file, args.kind)?;
    let options = decode_options(&args.decode);
    let loaded = load_artifact(&args.file, kind, &options)?;

    let (checksum, private_key) = match &loaded.artifact {
        Artifact::SecretKey(key) => (
            Some(ChecksumStatus::of(key)),
            args.reveal.then(|| hex::encode(key.private_key)),
        ),
        _ => (None, None),
    };

    let report = InspectReport {
        file: loaded.path.display().to_string(),
        comment: &loaded.envelope.comment,
        record: &loaded.artifact,
        checksum,
        private_key,
    };

    match args.format {
        OutputFormat::Text => print_text(&report),
        OutputFormat::Json => println!("{}", serde_json::to_string_pretty(&report)?),
    }

    if checksum == Some(ChecksumStatus::Mismatch) {
        return Ok(exit_codes::INTEGRITY);
    }
    Ok(exit_codes::SUCCESS)
}

fn print_text(report: &InspectReport<'_>) {
    let record = report.record;
    println!("file:        {}", report.file);
    println!("kind:        {}", record.kind());
    println!("comment:     {}", report.comment);
    println!("pk_algo:     {}", record.pk_algo());

    match record {
        Artifact::SecretKey(key) => {
            let state = if key.is_encrypted() {
                "encrypted"
            } else {
                "unencrypted"
            };
            println!("kdf_algo:    {}", key.kdf_algo);
            println!("kdf_rounds:  {} ({state})", key.kdf_rounds);
            println!("salt:        {}", hex::encode(key.salt));
            println!("checksum:    {}", hex::encode(key.checksum));
        }
        Artifact::PublicKey(public) => {
            println!("public_key:  {}", hex::encode(public.public_key));
        }
        Artifact::Signature(sig) => {
            println!("signature:   {}", hex::encode(sig.signature));
        }
    }

    println!("fingerprint: {}", record.fingerprint());
    if let Some(status) = report.checksum {
        println!("integrity:   {status}");
    }
    if let Some(private_key) = &report.private_key {
        println!("private_key: {private_key}");
    }
}
