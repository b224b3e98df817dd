mod cli;
mod commands;

use clap::Parser;

use cli::{Cli, Command};

fn main() {
    let cli = Cli::parse();

    match cli.command {
        Command::Parse {
            input,
            pattern,
            raw,
            color,
        } => commands::parse::run(commands::parse::ParseArgs {
            path: input.file,
            text: input.source_text,
            pattern,
            raw,
            color: color.should_colorize(),
        }),
        Command::Check {
            input,
            pattern,
            format,
            color,
        } => commands::check::run(commands::check::CheckArgs {
            path: input.file,
            text: input.source_text,
            pattern,
            format,
            color: color.should_colorize(),
        }),
    }
}
