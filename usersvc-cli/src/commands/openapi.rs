//! Print the OpenAPI document

use std::io::Write;

use anyhow::{Context, Result};
use clap::Parser;

/// Arguments for the openapi command
#[derive(Parser, Debug)]
pub struct OpenapiArgs {}

/// Write the OpenAPI document to stdout as pretty JSON
pub fn run_openapi(_args: OpenapiArgs) -> Result<()> {
    let json = usersvc_server::http::openapi_json().context("Failed to render OpenAPI document")?;

    let mut stdout = std::io::stdout().lock();
    writeln!(stdout, "{}", json).context("Failed to write to stdout")?;
    Ok(())
}
