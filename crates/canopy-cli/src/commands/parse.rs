//! Print the CST of a file or standalone pattern.

use std::path::PathBuf;

use canopy_syntax::{parse_file, parse_pattern};

use super::source_loader::load_source;

pub struct ParseArgs {
    pub path: Option<PathBuf>,
    pub text: Option<String>,
    pub pattern: bool,
    pub raw: bool,
    pub color: bool,
}

pub fn run(args: ParseArgs) {
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

    if args.raw {
        print!("{}", parse.dump_full());
    } else {
        print!("{}", parse.dump());
    }

    if parse.diagnostics().has_errors() {
        eprint!(
            "{}",
            parse.diagnostics().render_colored(&source, args.color)
        );
        std::process::exit(1);
    }
}
