//! sdkstage - .NET SDK staging for PaaS builds
//!
//! Resolves, caches, installs, and activates the .NET SDK for an app being
//! staged into a build container, then restores the app's package
//! dependencies and fixes up staging-time paths in their lock documents.

use clap::Parser;

mod app;
mod cache;
mod cli;
mod commands;
mod common;
mod error;
mod installer;
mod manifest;
mod progress;
mod resolver;
mod restore;
mod shell;

use cli::{Cli, Commands};

fn main() {
    let cli = Cli::parse();

    let result = match cli.command {
        Commands::Stage(args) => commands::stage::run(args),
        Commands::Resolve(args) => commands::resolve::run(args),
        Commands::Version => commands::version::run(),
    };

    if let Err(e) = result {
        eprintln!("Error: {}", e);
        std::process::exit(1);
    }
}
