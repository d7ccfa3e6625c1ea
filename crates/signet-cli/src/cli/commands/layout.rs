//! `signet layout` - Print the fixed binary layout of each record type.

use anyhow::Result;
use serde::Serialize;

use signet_format::record::{all_layouts, FieldKind, FieldSpec, Layout};

use super::super::args::{LayoutArgs, OutputFormat};
use super::super::helpers::exit_code_for;
use crate::exit_codes;

#[derive(Serialize)]
struct LayoutReport {
    record: &'static str,
    size: usize,
    fields: &'static [FieldSpec],
}

impl From<&'static Layout> for LayoutReport {
    fn from(layout: &'static Layout) -> Self {
        Self {
            record: layout.record,
            size: layout.size(),
            fields: layout.fields,
        }
    }
}

pub fn cmd_layout(args: LayoutArgs) -> i32 {
    match run_layout(&args) {
        Ok(()) => exit_codes::SUCCESS,
        Err(e) => {
            eprintln!("error: {e:#}");
            exit_code_for(&e)
        }
    }
}

fn run_layout(args: &LayoutArgs) -> Result<()> {
    let layouts: Vec<&'static Layout> = match args.kind {
        Some(kind) => vec![kind.layout()],
        None => all_layouts().to_vec(),
    };

    match args.format {
        OutputFormat::Json => {
            let reports: Vec<LayoutReport> = layouts.into_iter().map(LayoutReport::from).collect();
            println!("{}", serde_json::to_string_pretty(&reports)?);
        }
        OutputFormat::Text => {
            for (i, layout) in layouts.iter().enumerate() {
                if i > 0 {
                    println!();
                }
                print_table(layout);
            }
        }
    }
    Ok(())
}

fn print_table(layout: &Layout) {
    println!("{} ({} bytes, big-endian)", layout.record, layout.size());
    println!("  {:>6}  {:>4}  {:<6}  field", "offset", "len", "kind");
    for field in layout.fields {
        let kind = match field.kind {
            FieldKind::Tag => "tag",
            FieldKind::U32Be => "u32be",
            FieldKind::Bytes => "bytes",
        };
        println!(
            "  {:>6}  {:>4}  {:<6}  {}",
            field.offset, field.len, kind, field.name
        );
    }
}
