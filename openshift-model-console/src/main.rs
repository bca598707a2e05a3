//! Prints the JSON schema of the OpenShift console model to stdout.
use anyhow::{Context, Result};
use tracing::*;
use tracing_subscriber::EnvFilter;

/// Generate the fabric8 JSON schema for the OpenShift console API group
#[derive(clap::Parser)]
#[command(version, about)]
struct App {
    /// Pass `validation` to keep the resource list in the output
    mode: Option<String>,
}

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")))
        .with_writer(std::io::stderr)
        .init();
    let app: App = clap::Parser::parse();

    let validation = app.mode.as_deref() == Some("validation");
    debug!(?app.mode, validation, "generating console schema");
    let schema = openshift_model_console::generate(validation).context("failed to generate schema")?;
    println!("{schema}");
    Ok(())
}
