//! Integration tests for `signet inspect` and `signet layout`.

use base64::{engine::general_purpose::STANDARD as BASE64, Engine};
use std::path::PathBuf;
use std::process::Command;
use tempfile::TempDir;

fn signet_cmd() -> Command {
    let mut cmd = Command::new(env!("CARGO_BIN_EXE_signet"));
    cmd.env_remove("SIGNET_STRICT");
    cmd
}

fn fixture(name: &str) -> PathBuf {
    PathBuf::from(env!("CARGO_MANIFEST_DIR"))
        .join("../signet-format/tests/fixtures")
        .join(name)
}

#[test]
fn test_inspect_encrypted_secret_key() {
    let output = signet_cmd()
        .arg("inspect")
        .arg(fixture("test.key"))
        .output()
        .expect("failed to run signet inspect");

    assert!(output.status.success(), "inspect should succeed");
    let stdout = String::from_utf8_lossy(&output.stdout);
    assert!(stdout.contains("comment:     signify secret key"));
    assert!(stdout.contains("kdf_rounds:  42 (encrypted)"));
    assert!(stdout.contains("fingerprint: d3ffb073e8920930"));
    assert!(stdout.contains("not checked (key is encrypted)"));
    assert!(
        !stdout.contains("private_key"),
        "private key material hidden without --reveal"
    );
}

#[test]
fn test_inspect_nopass_key_json() {
    let output = signet_cmd()
        .arg("inspect")
        .arg(fixture("test.nopass.key"))
        .args(["--format", "json", "--reveal"])
        .output()
        .expect("failed to run signet inspect");
    assert!(output.status.success());

    let report: serde_json::Value = serde_json::from_slice(&output.stdout).unwrap();
    assert_eq!(report["comment"], "nopass secret key");
    assert_eq!(report["record"]["kind"], "secret-key");
    assert_eq!(report["record"]["kdf_rounds"], 0);
    assert_eq!(report["record"]["checksum"], "b5c861c5af95b38d");
    assert_eq!(report["record"]["fingerprint"], "1f185aca537ed145");
    assert_eq!(report["checksum"], "verified");
    let private_key = report["private_key"].as_str().unwrap();
    assert_eq!(private_key.len(), 128);
    assert!(private_key.ends_with("4d52b649"));
}

#[test]
fn test_inspect_signature_and_public_key() {
    let output = signet_cmd()
        .arg("inspect")
        .arg(fixture("test.msg.sig"))
        .output()
        .unwrap();
    assert!(output.status.success());
    let stdout = String::from_utf8_lossy(&output.stdout);
    assert!(stdout.contains("kind:        signature"));
    assert!(stdout.contains("signature:   9e9f9169085d"));

    let output = signet_cmd()
        .arg("inspect")
        .arg(fixture("test.pub"))
        .output()
        .unwrap();
    assert!(output.status.success());
    let stdout = String::from_utf8_lossy(&output.stdout);
    assert!(stdout.contains("public_key:  c802e8f64c35"));
}

#[test]
fn test_inspect_wrong_kind_is_record_error() {
    let output = signet_cmd()
        .arg("inspect")
        .arg(fixture("test.key"))
        .args(["--kind", "public-key"])
        .output()
        .unwrap();

    assert_eq!(output.status.code(), Some(3));
    let stderr = String::from_utf8_lossy(&output.stderr);
    assert!(stderr.contains("expected 42 bytes, got 104"), "{stderr}");
}

#[test]
fn test_inspect_envelope_errors() {
    let tmp = TempDir::new().unwrap();

    let no_header = tmp.path().join("bad.pub");
    std::fs::write(&no_header, "comment: nope\nRWQ=\n").unwrap();
    let output = signet_cmd().arg("inspect").arg(&no_header).output().unwrap();
    assert_eq!(output.status.code(), Some(2));
    assert!(String::from_utf8_lossy(&output.stderr).contains("missing header"));

    let truncated = tmp.path().join("short.sig");
    std::fs::write(&truncated, "untrusted comment: only a comment\n").unwrap();
    let output = signet_cmd().arg("inspect").arg(&truncated).output().unwrap();
    assert_eq!(output.status.code(), Some(2));

    let bad_base64 = tmp.path().join("noise.sig");
    std::fs::write(&bad_base64, "untrusted comment: x\n!!!!\n").unwrap();
    let output = signet_cmd().arg("inspect").arg(&bad_base64).output().unwrap();
    assert_eq!(output.status.code(), Some(2));
    assert!(String::from_utf8_lossy(&output.stderr).contains("bad encoding"));
}

#[test]
fn test_inspect_unknown_extension_needs_kind() {
    let tmp = TempDir::new().unwrap();
    let path = tmp.path().join("artifact.txt");
    std::fs::copy(fixture("test.pub"), &path).unwrap();

    let output = signet_cmd().arg("inspect").arg(&path).output().unwrap();
    assert_eq!(output.status.code(), Some(1));
    assert!(String::from_utf8_lossy(&output.stderr).contains("--kind"));

    let output = signet_cmd()
        .arg("inspect")
        .arg(&path)
        .args(["--kind", "pub"])
        .output()
        .unwrap();
    assert!(output.status.success());
}

#[test]
fn test_strict_flag_and_env() {
    let tmp = TempDir::new().unwrap();
    let path = tmp.path().join("odd.pub");
    // pk_algo "Xy", fingerprint of zeros, 32 zero bytes of key material
    let mut raw = b"Xy".to_vec();
    raw.extend_from_slice(&[0u8; 40]);
    std::fs::write(
        &path,
        format!("untrusted comment: odd\n{}\n", BASE64.encode(&raw)),
    )
    .unwrap();

    let output = signet_cmd().arg("inspect").arg(&path).output().unwrap();
    assert!(output.status.success(), "pass-through by default");
    assert!(String::from_utf8_lossy(&output.stdout).contains("pk_algo:     Xy"));

    let output = signet_cmd()
        .arg("inspect")
        .arg(&path)
        .arg("--strict")
        .output()
        .unwrap();
    assert_eq!(output.status.code(), Some(3));

    let output = signet_cmd()
        .env("SIGNET_STRICT", "1")
        .arg("inspect")
        .arg(&path)
        .output()
        .unwrap();
    assert_eq!(output.status.code(), Some(3));
}

#[test]
fn test_layout_json() {
    let output = signet_cmd()
        .args(["layout", "--format", "json"])
        .output()
        .unwrap();
    assert!(output.status.success());

    let layouts: serde_json::Value = serde_json::from_slice(&output.stdout).unwrap();
    let sizes: Vec<u64> = layouts
        .as_array()
        .unwrap()
        .iter()
        .map(|l| l["size"].as_u64().unwrap())
        .collect();
    assert_eq!(sizes, vec![104, 42, 74]);
    assert_eq!(layouts[0]["fields"][2]["name"], "kdf_rounds");
    assert_eq!(layouts[0]["fields"][2]["kind"], "u32_be");
}
