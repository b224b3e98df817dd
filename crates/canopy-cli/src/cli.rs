use std::path::PathBuf;

use clap::{Args, Parser, Subcommand, ValueEnum};

#[derive(Clone, Copy, Debug, Default, ValueEnum)]
pub enum ColorChoice {
    #[default]
    Auto,
    Always,
    Never,
}

impl ColorChoice {
    pub fn should_colorize(self) -> bool {
        match self {
            ColorChoice::Always => true,
            ColorChoice::Never => false,
            ColorChoice::Auto => std::io::IsTerminal::is_terminal(&std::io::stderr()),
        }
    }
}

#[derive(Clone, Copy, Debug, Default, ValueEnum)]
pub enum OutputFormat {
    #[default]
    Text,
    Json,
}

#[derive(Parser)]
#[command(name = "canopy", bin_name = "canopy")]
#[command(about = "Lossless, resilient parser for Java-flavored sources")]
pub struct Cli {
    #[command(subcommand)]
    pub command: Command,
}

#[derive(Subcommand)]
pub enum Command {
    /// Print the concrete syntax tree of a file or pattern
    #[command(after_help = r#"EXAMPLES:
  canopy parse Shapes.java
  canopy parse -e 'class A {}' --raw
  canopy parse --pattern -e 'Point(int x, int y)'
  cat Shapes.java | canopy parse -"#)]
    Parse {
        #[command(flatten)]
        input: InputArgs,

        /// Parse a standalone pattern instead of a whole file
        #[arg(long)]
        pattern: bool,

        /// Include trivia tokens (whitespace, comments)
        #[arg(long)]
        raw: bool,

        /// Colorize diagnostics output
        #[arg(long, default_value = "auto", value_name = "WHEN")]
        color: ColorChoice,
    },

    /// Parse and report diagnostics; exit nonzero if any are errors
    #[command(after_help = r#"EXAMPLES:
  canopy check Shapes.java
  canopy check -e 'class A {' --format json
  cat Shapes.java | canopy check -"#)]
    Check {
        #[command(flatten)]
        input: InputArgs,

        /// Check a standalone pattern instead of a whole file
        #[arg(long)]
        pattern: bool,

        /// Output format for diagnostics
        #[arg(long, default_value = "text", value_name = "FORMAT")]
        format: OutputFormat,

        /// Colorize diagnostics output
        #[arg(long, default_value = "auto", value_name = "WHEN")]
        color: ColorChoice,
    },
}

#[derive(Args)]
pub struct InputArgs {
    /// Source file to read (use "-" for stdin)
    #[arg(value_name = "FILE")]
    pub file: Option<PathBuf>,

    /// Source as inline text
    #[arg(short = 'e', long = "source", value_name = "SOURCE", conflicts_with = "file")]
    pub source_text: Option<String>,
}
