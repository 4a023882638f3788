//! Build script rendering the `errwrap(1)` man page from the CLI definition.
//!
//! The page lands in `target/generated-man` unless `ERRWRAP_MAN_DIR` names
//! another directory.

use std::{
    env,
    fs::File,
    io::{BufWriter, Write},
    path::PathBuf,
};

use clap::CommandFactory;

#[path = "src/cli.rs"]
#[allow(dead_code, reason = "the build script only needs the command definition")]
mod cli;

const MAN_DIR_VAR: &str = "ERRWRAP_MAN_DIR";

fn main() -> Result<(), Box<dyn std::error::Error>> {
    println!("cargo:rerun-if-changed=src/cli.rs");
    println!("cargo:rerun-if-env-changed={MAN_DIR_VAR}");

    let man_dir = env::var_os(MAN_DIR_VAR)
        .map_or_else(|| PathBuf::from("target/generated-man"), PathBuf::from);
    std::fs::create_dir_all(&man_dir)?;

    let mut page = BufWriter::new(File::create(man_dir.join("errwrap.1"))?);
    clap_mangen::Man::new(cli::Cli::command()).render(&mut page)?;
    page.flush()?;
    Ok(())
}
