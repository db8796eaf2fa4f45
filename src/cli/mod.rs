//! Command-line interface for vendor-kubernetes
//!
//! A single flat command: resolve the release, then print the go.mod
//! require/replace snippet to stdout.

use anyhow::Result;
use clap::Parser;
use std::path::PathBuf;
use tracing::Level;
use tracing_subscriber::{fmt, prelude::*, EnvFilter};

use crate::generate::{self, GenerateOptions};

/// Generate go.mod require/replace pins for a Kubernetes release tag
#[derive(Parser)]
#[command(name = "vendor-kubernetes")]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    /// Path pointing to checked-out k8s.io repositories (e.g.
    /// "~/projects/go/src/k8s.io"); subprojects missing there are cloned
    /// into a transient checkout instead
    #[arg(long, value_name = "DIR")]
    kubernetes_path: Option<PathBuf>,

    /// Kubernetes tag to build go.mod pins for (e.g. "1.15.3")
    #[arg(long, value_name = "TAG")]
    kubernetes_tag: String,

    /// Enable verbose logging (sets log level to DEBUG)
    #[arg(short, long)]
    verbose: bool,
}

pub fn run() -> Result<()> {
    let cli = Cli::parse();

    // Wire verbose flag to the tracing log level.
    // RUST_LOG in the environment always takes precedence; --verbose falls
    // back to DEBUG, everything else to INFO so clone notices stay visible.
    let filter = if cli.verbose {
        EnvFilter::from_default_env().add_directive(Level::DEBUG.into())
    } else {
        EnvFilter::from_default_env().add_directive(Level::INFO.into())
    };
    let _ = tracing_subscriber::registry()
        .with(fmt::layer().with_writer(std::io::stderr))
        .with(filter)
        .try_init();

    let opts = GenerateOptions {
        kubernetes_path: cli.kubernetes_path,
        kubernetes_tag: cli.kubernetes_tag,
    };
    let mut stdout = std::io::stdout().lock();
    generate::run(&opts, &mut stdout)?;
    Ok(())
}
