//! Command line interface for the `errwrap` demo binary.
//!
//! Wraps an error text through one factory per `--layer` and prints the
//! rendered result.

use clap::Parser;

/// Command line arguments for the `errwrap` binary.
#[derive(Debug, Parser)]
#[command(name = "errwrap", version, about = "Render a prefixed error chain")]
pub struct Cli {
    /// Character joining nested prefixes.
    #[arg(short, long, default_value = ".")]
    pub joiner: String,

    /// Wrapping layer as `PREFIX[:MESSAGE]`, innermost first.
    #[arg(short, long = "layer", value_name = "PREFIX[:MESSAGE]")]
    pub layers: Vec<String>,

    /// Print every link of the resulting chain on its own line.
    #[arg(long)]
    pub chain: bool,

    /// Error text to wrap.
    pub text: String,
}

/// Split a `PREFIX[:MESSAGE]` layer specification.
#[must_use]
pub fn split_layer(layer: &str) -> (&str, Option<&str>) {
    match layer.split_once(':') {
        Some((prefix, message)) => (prefix, Some(message)),
        None => (layer, None),
    }
}

#[cfg(test)]
mod tests {
    use clap::Parser;

    use super::{Cli, split_layer};

    #[test]
    fn parses_layers_in_order() {
        let cli = Cli::parse_from(["errwrap", "-l", "svc:io", "--layer", "api", "disk full"]);
        assert_eq!(cli.layers, ["svc:io", "api"]);
        assert_eq!(cli.joiner, ".");
        assert_eq!(cli.text, "disk full");
        assert!(!cli.chain);
    }

    #[test]
    fn splits_layer_message() {
        assert_eq!(split_layer("svc:io"), ("svc", Some("io")));
        assert_eq!(split_layer("svc"), ("svc", None));
        assert_eq!(split_layer(":io"), ("", Some("io")));
    }
}
