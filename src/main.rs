//! Demo binary for `errwrap`.
//!
//! Wraps the given text through each `--layer` and prints the result.

mod cli;

use std::process::ExitCode;

use clap::Parser;
use errwrap::{Chain, ConfigError, Factory, FactoryConfig, WrapErrors, WrappedError};
use tracing::{error, info};

fn render(cli: &cli::Cli) -> Result<Option<WrappedError>, ConfigError> {
    let joiner = FactoryConfig::parse_joiner(&cli.joiner)?;
    let mut layers = cli.layers.iter().map(|layer| cli::split_layer(layer));

    let (prefix, message) = layers.next().unwrap_or(("", None));
    let Some(mut err) = Factory::with_prefix(joiner, prefix).wrap_string(&cli.text, message) else {
        return Ok(None);
    };
    for (prefix, message) in layers {
        err = Factory::with_prefix(joiner, prefix).wrap(err, message);
    }
    Ok(Some(err))
}

fn main() -> ExitCode {
    // Enable structured logging for the demo binary.
    // Applications embedding the library should install their own subscriber.
    tracing_subscriber::fmt::init();

    let cli = cli::Cli::parse();
    match render(&cli) {
        Ok(Some(err)) => {
            if cli.chain {
                for link in Chain::new(&err) {
                    println!("{link}");
                }
            } else {
                println!("{err}");
            }
            ExitCode::SUCCESS
        }
        Ok(None) => {
            info!("empty error text; nothing to render");
            ExitCode::SUCCESS
        }
        Err(e) => {
            error!(error = %e, "invalid arguments");
            ExitCode::FAILURE
        }
    }
}
