use clap::{Arg, ArgAction, Command, ValueHint};
use clap_complete::{generate_to, shells::*};
use std::env;
use std::io::Error;

fn main() -> Result<(), Error> {
    let outdir = match env::var_os("OUT_DIR") {
        None => return Ok(()),
        Some(outdir) => outdir,
    };

    let mut cmd = Command::new("astedit")
        .version(env!("CARGO_PKG_VERSION"))
        .about("Inspect parsed JavaScript syntax trees")
        .arg(
            Arg::new("path")
                .help("Path to a JSON syntax tree, or - for standard input")
                .index(1)
                .value_hint(ValueHint::FilePath),
        )
        .arg(
            Arg::new("format")
                .long("format")
                .short('f')
                .value_parser(["text", "tag", "treeviz", "json", "yaml"]),
        )
        .arg(Arg::new("focus").long("focus"))
        .arg(Arg::new("move").long("move").short('m').action(ArgAction::Append))
        .arg(
            Arg::new("config")
                .long("config")
                .short('c')
                .value_hint(ValueHint::FilePath),
        )
        .arg(Arg::new("list-formats").long("list-formats").action(ArgAction::SetTrue))
        .arg(Arg::new("print-path").long("print-path").action(ArgAction::SetTrue));

    generate_to(Bash, &mut cmd, "astedit", &outdir)?;
    generate_to(Zsh, &mut cmd, "astedit", &outdir)?;
    generate_to(Fish, &mut cmd, "astedit", &outdir)?;

    println!("cargo:warning=Shell completions generated in {outdir:?}");

    Ok(())
}
