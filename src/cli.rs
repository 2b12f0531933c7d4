use clap::Parser;

/// Liveness probe answering `/healthz` on port 8080.
///
/// The listener address is fixed; logging is controlled through `RUST_LOG`.
#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
pub struct Args {}
