use clap::{Arg, ArgAction, Command, ValueHint};
use clap_complete::{generate_to, shells::*};
use std::env;
use std::io::Error;

fn main() -> Result<(), Error> {
    let outdir = match env::var_os("OUT_DIR") {
        None => return Ok(()),
        Some(outdir) => outdir,
    };

    let mut cmd = Command::new("asteditv")
        .version(env!("CARGO_PKG_VERSION"))
        .about("Interactive terminal viewer for parsed JavaScript syntax trees")
        .arg(
            Arg::new("path")
                .help("Path to a JSON syntax tree, or - for a snapshot stream on standard input")
                .required(true)
                .index(1)
                .value_hint(ValueHint::FilePath),
        )
        .arg(Arg::new("follow").long("follow").action(ArgAction::SetTrue))
        .arg(
            Arg::new("config")
                .long("config")
                .short('c')
                .value_hint(ValueHint::FilePath),
        )
        .arg(
            Arg::new("log-file")
                .long("log-file")
                .value_hint(ValueHint::FilePath),
        );

    generate_to(Bash, &mut cmd, "asteditv", &outdir)?;
    generate_to(Zsh, &mut cmd, "asteditv", &outdir)?;
    generate_to(Fish, &mut cmd, "asteditv", &outdir)?;

    println!("cargo:warning=Shell completions generated in {outdir:?}");

    Ok(())
}
