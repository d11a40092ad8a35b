pub mod commands;

use std::io;
use std::path::PathBuf;
use std::process::ExitCode;

use anyhow::Context;
use clap::{ArgAction, Parser};
use log::debug;
use wlinfo::{Config, Registry};

#[derive(Parser, Debug)]
#[command(name = "wlinfo")]
#[command(version, about = "Show wireless interface information")]
#[command(after_help = commands::USAGE)]
struct Args {
    /// `<device> <command>...` or `<backend> phyname|path <name>`.
    /// With no arguments, every wireless device is summarized.
    #[arg(allow_hyphen_values = true)]
    words: Vec<String>,

    /// Configuration file to use instead of the user's default.
    #[arg(short, long, value_name = "PATH")]
    config: Option<PathBuf>,

    /// Log more; repeat for more detail.
    #[arg(short, long, action = ArgAction::Count)]
    verbose: u8,
}

fn init_logging(verbose: u8) {
    let level = match verbose {
        0 => "warn",
        1 => "info",
        2 => "debug",
        _ => "trace",
    };
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or(level))
        .format_timestamp(None)
        .init();
}

pub fn run() -> anyhow::Result<ExitCode> {
    let args = Args::parse();
    init_logging(args.verbose);

    let config = match &args.config {
        Some(path) => Config::load(path)
            .with_context(|| format!("failed to load configuration {}", path.display()))?,
        None => Config::discover().context("failed to load configuration")?,
    };
    debug!("using {config:?}");

    let registry = Registry::new(config);
    let status = commands::execute(
        &registry,
        &args.words,
        &mut io::stdout().lock(),
        &mut io::stderr().lock(),
    )?;
    Ok(ExitCode::from(status))
}
