//! Command-line interface for astedit
//! This binary loads a parsed JavaScript syntax tree, optionally moves the focus through it,
//! and prints the result in one of the registered formats.
//!
//! Usage:
//!   astedit `<path>` [--format `<format>`] [--focus `<path>`] [--move `<moves>`]
//!   astedit - < tree.json                         - Read the tree from standard input
//!   astedit --list-formats                        - List all available formats

use astedit_config::{AsteditConfig, Loader};
use astedit_core::formats::{FormatError, FormatRegistry};
use astedit_core::navigation::ParsePathError;
use astedit_core::{Direction, FocusPath, FocusState, LoaderError, SyntaxTree, TreeLoader};
use clap::{Arg, ArgAction, ArgMatches, Command, ValueHint};
use std::io::Read;
use thiserror::Error;
use tracing_subscriber::EnvFilter;

#[derive(Debug, Error)]
enum CliError {
    #[error("configuration: {0}")]
    Config(#[from] astedit_config::ConfigError),
    #[error("{0}")]
    Load(#[from] LoaderError),
    #[error("failed to read standard input: {0}")]
    Stdin(#[from] std::io::Error),
    #[error("{0}")]
    Format(#[from] FormatError),
    #[error("invalid focus path: {0}")]
    Path(#[from] ParsePathError),
    #[error("{0}")]
    Move(String),
}

fn build_cli() -> Command {
    Command::new("astedit")
        .version(env!("CARGO_PKG_VERSION"))
        .about("Inspect parsed JavaScript syntax trees")
        .arg_required_else_help(true)
        .arg(
            Arg::new("path")
                .help("Path to a JSON syntax tree, or - for standard input")
                .required_unless_present("list-formats")
                .value_hint(ValueHint::FilePath)
                .index(1),
        )
        .arg(
            Arg::new("format")
                .long("format")
                .short('f')
                .help("Output format (default: render.default_format from the configuration)"),
        )
        .arg(
            Arg::new("focus")
                .long("focus")
                .help("Initial focus path, e.g. 'program.body[0].expression'")
                .default_value("<root>"),
        )
        .arg(
            Arg::new("move")
                .long("move")
                .short('m')
                .help("Comma-separated moves applied after --focus (up, down, next, prev)")
                .value_delimiter(',')
                .action(ArgAction::Append),
        )
        .arg(
            Arg::new("config")
                .long("config")
                .short('c')
                .help("Configuration file layered over the defaults")
                .value_hint(ValueHint::FilePath),
        )
        .arg(
            Arg::new("list-formats")
                .long("list-formats")
                .help("List available output formats")
                .action(ArgAction::SetTrue),
        )
        .arg(
            Arg::new("print-path")
                .long("print-path")
                .help("Print only the focus path reached after the moves")
                .action(ArgAction::SetTrue),
        )
}

fn main() {
    let matches = build_cli().get_matches();

    let config = load_config(matches.get_one::<String>("config")).unwrap_or_else(|e| {
        eprintln!("Error: {}", e);
        std::process::exit(1);
    });
    init_tracing(&config);

    if let Err(e) = run(&matches, &config) {
        eprintln!("Error: {}", e);
        std::process::exit(1);
    }
}

fn load_config(path: Option<&String>) -> Result<AsteditConfig, CliError> {
    let loader = Loader::new().with_user_file();
    let loader = match path {
        Some(path) => loader.with_file(path),
        None => loader,
    };
    Ok(loader.build()?)
}

/// Logs go to stderr so they never mix with formatted output. `RUST_LOG` wins over the
/// configured level.
fn init_tracing(config: &AsteditConfig) {
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(&config.logging.level));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();
}

fn run(matches: &ArgMatches, config: &AsteditConfig) -> Result<(), CliError> {
    let registry = FormatRegistry::with_options(&config.formats.options());

    if matches.get_flag("list-formats") {
        handle_list_formats_command(&registry);
        return Ok(());
    }

    let Some(path) = matches.get_one::<String>("path") else {
        return Ok(());
    };
    let format = matches
        .get_one::<String>("format")
        .unwrap_or(&config.render.default_format);
    if !registry.has(format) {
        return Err(FormatError::FormatNotFound(format.clone()).into());
    }

    let tree = load_tree(path)?;
    let focus = match matches.get_one::<String>("focus") {
        Some(raw) => raw.parse::<FocusPath>()?,
        None => FocusPath::root(),
    };
    let moves = matches
        .get_many::<String>("move")
        .into_iter()
        .flatten()
        .filter(|raw| !raw.trim().is_empty())
        .map(|raw| raw.parse::<Direction>().map_err(CliError::Move))
        .collect::<Result<Vec<_>, _>>()?;

    let state = navigate(tree, focus, &moves);

    if matches.get_flag("print-path") {
        println!("{}", state.path());
        return Ok(());
    }

    let formatted = registry.serialize(state.tree(), state.path(), format)?;
    if formatted.ends_with('\n') {
        print!("{}", formatted);
    } else {
        println!("{}", formatted);
    }
    Ok(())
}

fn load_tree(path: &str) -> Result<SyntaxTree, CliError> {
    let loader = if path == "-" {
        let mut text = String::new();
        std::io::stdin().read_to_string(&mut text)?;
        TreeLoader::from_string(text)
    } else {
        TreeLoader::from_path(path)?
    };
    let tree = loader.load()?;
    tracing::debug!(nodes = tree.len(), source = path, "tree loaded");
    Ok(tree)
}

/// Set the starting focus and replay the moves. A focus that does not resolve is reported
/// and the moves start from the root instead.
fn navigate(tree: SyntaxTree, focus: FocusPath, moves: &[Direction]) -> FocusState {
    let mut state = FocusState::new(tree);
    if !state.set_path(focus.clone()) {
        tracing::warn!(path = %focus, "focus path does not resolve in this tree");
    }
    for &direction in moves {
        if !state.apply(direction) {
            tracing::debug!(%direction, path = %state.path(), "move had no target");
        }
    }
    state
}

/// Handle the list-formats command
fn handle_list_formats_command(registry: &FormatRegistry) {
    println!("Available output formats:\n");

    for (name, description) in registry.describe_formats() {
        println!("  {}", name);
        if !description.is_empty() {
            println!("    {}", description);
        }
        println!();
    }
}
