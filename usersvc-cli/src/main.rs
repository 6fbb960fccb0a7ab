//! usersvc CLI - demo users API server
//!
//! Subcommands:
//! - `serve`: run the HTTP API over a seeded in-memory store
//! - `openapi`: print the OpenAPI document

use anyhow::Result;
use clap::{Parser, Subcommand};

mod commands;
mod tracing_setup;

#[derive(Parser, Debug)]
#[command(
    name = "usersvc",
    author,
    version,
    about = "Demo HTTP API for CRUD over an in-memory users collection"
)]
struct Cli {
    /// Enable debug logging
    #[arg(long, global = true)]
    debug: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand, Debug)]
enum Commands {
    /// Run the HTTP API server
    Serve(commands::serve::ServeArgs),
    /// Print the OpenAPI document as JSON
    Openapi(commands::openapi::OpenapiArgs),
}

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();

    tracing_setup::init(&tracing_setup::TracingConfig { debug: cli.debug })?;

    match cli.command {
        Commands::Serve(args) => commands::serve::run_serve(args).await,
        Commands::Openapi(args) => commands::openapi::run_openapi(args),
    }
}
