// SPDX-License-Identifier: MIT OR Apache-2.0
//! oisin CLI binary - structural comparison of JSON documents

use std::io;
use std::process;

use clap::Parser;
use tracing::error;
use tracing_subscriber::EnvFilter;

use oisin_cli::app::{self, Args};

fn main() {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(io::stderr)
        .init();

    let args = Args::parse();
    let outcome = app::run(&args);
    if let Err(e) = &outcome {
        error!("{e:#}");
    }
    process::exit(app::exit_code(&outcome));
}
