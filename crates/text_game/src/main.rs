//! Two players, one terminal
//!
//! Play a game by typing start and end squares.

use std::env;
use std::io;
use std::path::PathBuf;

use anyhow::bail;
use text_game::{GameConfig, Session};
use tracing::info;
use tracing_subscriber::EnvFilter;

fn print_usage() {
    println!("Text chess");
    println!();
    println!("Usage:");
    println!("  text_game [--config <file.toml>]");
    println!("  text_game --print-config");
    println!();
    println!("Squares are typed as a letter a-h and a digit 1-8.");
    println!("Digit 8 is the first printed row (White's back rank), digit 1 the last.");
    println!("Type 'quit' to stop.");
}

fn init_logging(default_filter: &str) {
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_filter));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(io::stderr)
        .init();
}

fn main() -> anyhow::Result<()> {
    let args: Vec<String> = env::args().skip(1).collect();

    let mut config_path: Option<PathBuf> = None;
    let mut i = 0;
    while i < args.len() {
        match args[i].as_str() {
            "--config" | "-c" => {
                let Some(path) = args.get(i + 1) else {
                    bail!("--config requires a file path");
                };
                config_path = Some(PathBuf::from(path));
                i += 1;
            }
            "--print-config" => {
                print!("{}", GameConfig::default().to_toml_string()?);
                return Ok(());
            }
            "--help" | "-h" => {
                print_usage();
                return Ok(());
            }
            other => {
                print_usage();
                bail!("Unknown argument: {other}");
            }
        }
        i += 1;
    }

    let config = match &config_path {
        Some(path) => GameConfig::load(path)?,
        None => GameConfig::default(),
    };
    init_logging(&config.log_filter);
    info!(?config_path, ?config, "starting");

    let stdin = io::stdin();
    let stdout = io::stdout();
    let mut session = Session::new(config, stdin.lock(), stdout.lock());
    let summary = session.run()?;

    info!(
        accepted = summary.accepted,
        rejected = summary.rejected,
        "session finished"
    );
    Ok(())
}
