//! Parse and report diagnostics, cargo-check style: silent on success,
//! nonzero exit when any diagnostic is an error.

use std::path::PathBuf;

use canopy_syntax::{DiagnosticKind, Severity, parse_file, parse_pattern};
use serde::Serialize;

use super::source_loader::load_source;
use crate::cli::OutputFormat;

pub struct CheckArgs {
    pub path: Option<PathBuf>,
    pub text: Option<String>,
    pub pattern: bool,
    pub format: OutputFormat,
    pub color: bool,
}

#[derive(Serialize)]
struct JsonDiagnostic<'a> {
    severity: Severity,
    kind: DiagnosticKind,
    start: u32,
    end: u32,
    message: &'a str,
}

pub fn run(args: CheckArgs) {
    let source = match load_source(args.path.as_deref(), args.text.as_deref()) {
        Ok(source) => source,
        Err(e) => {
            eprintln!("error: {}", e);
            std::process::exit(1);
        }
    };

    let parse = if args.pattern {
        parse_pattern(&source)
    } else {
        parse_file(&source)
    };
    let diagnostics = parse.diagnostics();

    match args.format {
        OutputFormat::Text => {
            if !diagnostics.is_empty() {
                eprint!("{}", diagnostics.render_colored(&source, args.color));
            }
        }
        OutputFormat::Json => {
            let list: Vec<JsonDiagnostic<'_>> = diagnostics
                .iter()
                .map(|d| JsonDiagnostic {
                    severity: d.severity(),
                    kind: d.kind(),
                    start: d.range().start().into(),
                    end: d.range().end().into(),
                    message: d.message(),
                })
                .collect();
            match serde_json::to_string_pretty(&list) {
                Ok(json) => println!("{}", json),
                Err(e) => {
                    eprintln!("error: failed to serialize diagnostics: {}", e);
                    std::process::exit(1);
                }
            }
        }
    }

    if diagnostics.has_errors() {
        std::process::exit(1);
    }
}
