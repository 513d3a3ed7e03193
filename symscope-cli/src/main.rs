mod app;
mod commands;
mod output;

use clap::Parser;

use crate::app::{Cli, Command};

fn main() -> anyhow::Result<()> {
    ctrlc::set_handler(|| {
        eprintln!("\nCancelled.");
        std::process::exit(130);
    })?;

    let cli = Cli::parse();

    // Show symscope info+ on stderr unless --json; --verbose enables debug; RUST_LOG overrides
    if !cli.global.json {
        let level = if cli.global.verbose {
            log::LevelFilter::Debug
        } else {
            log::LevelFilter::Info
        };
        env_logger::Builder::new()
            .filter_module("symscope", level)
            .parse_default_env()
            .target(env_logger::Target::Stderr)
            .format_timestamp(None)
            .format_module_path(false)
            .format_target(false)
            .init();
    }

    match &cli.command {
        Command::Demangle { symbols } => commands::demangle::run(symbols, &cli.global),
        Command::Validate { path } => commands::validate::run(path, &cli.global),
        Command::Search { path, pattern } => commands::search::run(path, pattern, &cli.global),
        Command::Map { path } => commands::map::run(path, &cli.global),
        Command::Selftest => commands::selftest::run(&cli.global),
    }
}
