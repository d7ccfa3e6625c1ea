//! `signet match` - Check that keys and signatures share one fingerprint.

use anyhow::{anyhow, Result};

use super::super::args::MatchArgs;
use super::super::helpers::{decode_options, exit_code_for, load_artifact, resolve_kind};
use crate::exit_codes;

pub fn cmd_match(args: MatchArgs) -> i32 {
    match run_match(&args) {
        Ok(code) => code,
        Err(e) => {
            if !args.quiet {
                eprintln!("error: {e:#}");
            }
            exit_code_for(&e)
        }
    }
}

fn run_match(args: &MatchArgs) -> Result<i32> {
    let options = decode_options(&args.decode);

    let mut loaded = Vec::with_capacity(args.files.len());
    for path in &args.files {
        let kind = resolve_kind(path, None)?;
        loaded.push(load_artifact(path, kind, &options)?);
    }

    let first = loaded
        .first()
        .map(|l| l.artifact.fingerprint())
        .ok_or_else(|| anyhow!("no artifacts given"))?;
    let all_match = loaded.iter().all(|l| l.artifact.fingerprint() == first);

    if !args.quiet {
        for l in &loaded {
            println!(
                "{}  {:<10}  {}",
                l.artifact.fingerprint(),
                l.artifact.kind().as_str(),
                l.path.display()
            );
        }
        println!();
        if all_match {
            println!("fingerprints match");
        } else {
            println!("fingerprints differ");
        }
    }

    Ok(if all_match {
        exit_codes::SUCCESS
    } else {
        exit_codes::FINGERPRINT_MISMATCH
    })
}
