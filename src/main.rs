//! Keymap Readme - render ZMK keymap layers into a README
//!
//! Reads a `.keymap` file, renders every labeled layer as a split keyboard
//! table and replaces the layout section of the README with the result.

use clap::Parser;
use keymap_readme::cli::UpdateArgs;
use keymap_readme::constants::APP_BINARY_NAME;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

/// Update README layout tables from ZMK keymap
#[derive(Parser, Debug)]
#[command(name = APP_BINARY_NAME, author, version, about, long_about = None)]
struct Cli {
    #[command(flatten)]
    update: UpdateArgs,
}

fn main() {
    let cli = Cli::parse();

    // Initialize tracing; RUST_LOG overrides the default level
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env().unwrap_or_else(|_| "warn".into()),
        )
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();

    if let Err(err) = cli.update.execute() {
        eprintln!("Error: {err}");
        std::process::exit(err.exit_code());
    }
}
