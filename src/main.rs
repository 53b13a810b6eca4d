//! Solidafy Paginator CLI
//!
//! Command-line interface for paging through record collections

use anyhow::Context;
use clap::Parser;
use solidafy_paginator::cli::{Cli, Runner};

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    // Initialize logging
    let level = if cli.verbose {
        tracing::Level::DEBUG
    } else {
        tracing::Level::INFO
    };
    tracing_subscriber::fmt()
        .with_writer(std::io::stderr)
        .with_env_filter(
            tracing_subscriber::EnvFilter::from_default_env().add_directive(level.into()),
        )
        .init();

    let command = cli.command.name();
    Runner::new(cli)
        .run()
        .with_context(|| format!("{command} command failed"))
}
