//! An AWS Lambda function that returns its event unchanged.
//!
//! The binary either serves invocations from the Lambda Runtime API or,
//! when started with a payload file name, runs a single local invocation
//! and prints the response to stdout.

use config::InvocationSource;
use std::str::FromStr;
use tracing_subscriber::filter::{Directive, LevelFilter};
use tracing_subscriber::fmt::writer::BoxMakeWriter;
use tracing_subscriber::EnvFilter;

pub mod config;
pub mod handler;
pub mod local;

/// Initializes the tracing from RUST_LOG env var if present or sets minimal logging:
/// - INFO for this crate
/// - nothing from other crates
///
/// Timestamps and color codes are omitted because CloudWatch adds its own timestamps
/// and does not render ANSI codes.
/// Logs go to stdout for CloudWatch when served by the Runtime API and to stderr for local
/// invocations, where stdout is reserved for the response.
pub fn init_tracing(source: &InvocationSource) {
    // this crate's target name uses underscores, e.g. `lambda_echo`
    let default_directive =
        Directive::from_str(&[env!("CARGO_CRATE_NAME"), "=info"].concat()).unwrap_or_else(|_| LevelFilter::INFO.into());

    let writer = match source {
        InvocationSource::Runtime(_) => BoxMakeWriter::new(std::io::stdout),
        InvocationSource::Local(_) => BoxMakeWriter::new(std::io::stderr),
    };

    // `try_init` fails only if a global subscriber is already set
    let _ = tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::builder().with_default_directive(default_directive).from_env_lossy())
        .with_writer(writer)
        .with_ansi(false)
        .with_target(false)
        .without_time()
        .compact()
        .try_init();
}
