//! Standalone binary for the astedit interactive viewer.
//! Usage:
//!   asteditv <path>              - View a JSON syntax tree
//!   asteditv --follow <path>     - Replay newline-delimited snapshots from a file
//!   parser --watch | asteditv -  - Follow snapshots arriving on standard input

mod viewer;

use astedit_config::{AsteditConfig, Loader};
use clap::{Arg, ArgAction, Command, ValueHint};
use std::fs::OpenOptions;
use std::path::PathBuf;
use std::sync::Mutex;
use tracing_subscriber::EnvFilter;
use viewer::viewer::Input;

fn main() {
    let matches = Command::new("asteditv")
        .version(env!("CARGO_PKG_VERSION"))
        .about("Interactive terminal viewer for parsed JavaScript syntax trees")
        .arg(
            Arg::new("path")
                .help("Path to a JSON syntax tree, or - for a snapshot stream on standard input")
                .required(true)
                .index(1)
                .value_hint(ValueHint::FilePath),
        )
        .arg(
            Arg::new("follow")
                .long("follow")
                .help("Read the file as newline-delimited snapshots, each replacing the last")
                .action(ArgAction::SetTrue),
        )
        .arg(
            Arg::new("config")
                .long("config")
                .short('c')
                .help("Configuration file layered over the defaults")
                .value_hint(ValueHint::FilePath),
        )
        .arg(
            Arg::new("log-file")
                .long("log-file")
                .help("Append diagnostics to this file (the terminal is reserved for the UI)")
                .value_hint(ValueHint::FilePath),
        )
        .get_matches();

    let config = load_config(matches.get_one::<String>("config")).unwrap_or_else(|err| {
        eprintln!("Error: {err}");
        std::process::exit(1);
    });
    if let Some(log_file) = matches.get_one::<String>("log-file") {
        if let Err(err) = init_tracing(&config, log_file) {
            eprintln!("Error: cannot open log file {log_file}: {err}");
            std::process::exit(1);
        }
    }

    let Some(path) = matches.get_one::<String>("path") else {
        return;
    };
    let input = if path == "-" {
        Ok(Input::stdin())
    } else if matches.get_flag("follow") {
        Input::follow(PathBuf::from(path))
    } else {
        Ok(Input::File(PathBuf::from(path)))
    };

    let input = input.unwrap_or_else(|err| {
        eprintln!("Error: {err}");
        std::process::exit(1);
    });
    if let Err(err) = viewer::viewer::run_viewer(input, &config) {
        eprintln!("Error: {err}");
        std::process::exit(1);
    }
}

fn load_config(path: Option<&String>) -> Result<AsteditConfig, astedit_config::ConfigError> {
    let loader = Loader::new().with_user_file();
    match path {
        Some(path) => loader.with_file(path).build(),
        None => loader.build(),
    }
}

/// Logs only ever go to a file: the terminal belongs to the UI. `RUST_LOG` wins over the
/// configured level.
fn init_tracing(config: &AsteditConfig, log_file: &str) -> std::io::Result<()> {
    let file = OpenOptions::new().create(true).append(true).open(log_file)?;
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(&config.logging.level));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(Mutex::new(file))
        .with_ansi(false)
        .init();
    Ok(())
}
