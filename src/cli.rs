//! CLI surface and pipeline orchestration
//!
//! Wires the stages together: extract the model, apply the host override,
//! load override parameters, then either print the model (dry run) or
//! synthesize and write the scenario document.

use std::path::PathBuf;

use clap::Parser;
use colored::Colorize;

use crate::common::Result;
use crate::overrides::OverrideStore;
use crate::probe::HttpProbe;
use crate::scenario::{self, writer};
use crate::spec::{self, ApiSpec};

/// Environment variable supplying the probe credential
const API_KEY_ENV: &str = "API_KEY";

#[derive(Parser, Debug)]
#[command(name = "spec2scenario", about = "API E2E test scenario generator")]
#[command(version, long_about = None)]
pub struct Cli {
    /// Path to the OpenAPI specification (YAML or JSON)
    pub input: PathBuf,

    /// Output file name
    #[arg(long = "output-file", short = 'o', default_value = "scenario.yml")]
    pub output: PathBuf,

    /// API endpoint, overriding the server URL declared in the spec
    #[arg(long, short = 's')]
    pub host: Option<String>,

    /// Print the extracted model instead of generating a scenario file
    #[arg(long, short = 'd')]
    pub dry_run: bool,

    /// CSV file with per-path parameter overrides (enables live probing)
    #[arg(long = "csv-file", short = 'c')]
    pub csv_file: Option<PathBuf>,

    /// Comma-separated response labels to include (default: all)
    #[arg(long = "test-case", short = 't')]
    pub test_case: Option<String>,
}

/// Run the full generation pipeline for the parsed CLI arguments.
pub async fn run(cli: Cli) -> Result<()> {
    let cases: Vec<String> = cli
        .test_case
        .as_deref()
        .map(|s| s.split(',').filter(|c| !c.is_empty()).map(str::to_string).collect())
        .unwrap_or_default();

    let mut api_spec = spec::extract(&cli.input, &cases)?;

    if let Some(host) = cli.host {
        api_spec.base_url = host;
    }

    let overrides = match &cli.csv_file {
        Some(path) => Some(OverrideStore::from_csv(path)?),
        None => None,
    };

    if cli.dry_run {
        print_model(&api_spec);
        return Ok(());
    }

    tracing::debug!(
        paths = api_spec.paths.len(),
        probing = overrides.is_some(),
        "synthesizing scenario"
    );

    let probe = HttpProbe::new(std::env::var(API_KEY_ENV).ok());
    let result = scenario::synthesize(&api_spec, overrides.as_ref(), &probe).await?;
    writer::write(&result, &cli.output)?;

    println!(
        "  {} Wrote {} steps to {}",
        "✓".green(),
        result.steps.len(),
        cli.output.display()
    );

    Ok(())
}

/// Dump the extracted model without touching the network or the disk.
fn print_model(api_spec: &ApiSpec) {
    println!("{} {}", "Title :".cyan(), api_spec.title);
    println!("{} {}", "Description :".cyan(), api_spec.description);
    println!("{} {}", "Version :".cyan(), api_spec.version);
    println!("{} {}", "BaseURL :".cyan(), api_spec.base_url);
    println!("==========================");

    for path in &api_spec.paths {
        println!("{}", path.path.white().bold());
        for method in &path.methods {
            println!("  Method : {}", method.method);
            println!("  Summary : {}", method.summary);
            for param in &method.params {
                println!("    Param : {} ({})", param.name, param.type_name);
            }
            for field in &method.body {
                println!("    Body : {} ({})", field.name, field.type_name);
            }
            for response in &method.responses {
                println!("    Response : {} {}", response.name, response.description.dimmed());
            }
            println!("==========================");
        }
    }
}
