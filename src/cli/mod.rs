//! CLI module for the diabetes diagnosis service
//!
//! Subcommands:
//! - `serve`: HTML form + JSON API server
//! - `predict`: one diagnosis from command-line values

pub mod predict;
pub mod serve;

use clap::{Parser, Subcommand};

/// Diabetes risk diagnosis from twelve routine measurements
#[derive(Parser)]
#[command(name = "diabetes-diagnosis")]
#[command(version, about, long_about = None)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Command,
}

#[derive(Subcommand)]
pub enum Command {
    /// Run the HTTP server
    Serve(serve::ServeArgs),

    /// Diagnose one record and print the result
    Predict(predict::PredictArgs),
}
