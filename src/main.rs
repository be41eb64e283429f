//! spec2scenario - API E2E test scenario generator
//!
//! Reads an OpenAPI spec and writes a YAML scenario document, optionally
//! probing a running API for expected response bodies.

use clap::Parser;
use spec2scenario::{cli, common};

#[tokio::main]
async fn main() {
    common::logging::init_cli();

    let args = cli::Cli::parse();

    println!("API E2E Test Generator");

    if let Err(e) = cli::run(args).await {
        eprintln!("Error: {e}");
        std::process::exit(1);
    }

    println!("done");
}
