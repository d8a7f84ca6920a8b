//! CLI module for Canvas Gateway

pub mod serve;

use clap::{Parser, Subcommand};

/// Canvas Gateway - passthrough proxy for the Canvas LMS API
#[derive(Parser)]
#[command(name = "canvas-gateway")]
#[command(version, about, long_about = None)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Command,
}

#[derive(Subcommand)]
pub enum Command {
    /// Run the gateway HTTP server
    Serve(serve::ServeArgs),
}
