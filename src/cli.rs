//! CLI definitions using clap derive API

use clap::builder::{Styles, styling::AnsiColor};
use clap::{Args, Parser, Subcommand};
use std::path::PathBuf;

/// sdkstage - .NET SDK staging for PaaS builds
#[derive(Parser, Debug)]
#[command(
    name = "sdkstage",
    author,
    version,
    color = clap::ColorChoice::Always,
    styles = Styles::styled()
        .header(AnsiColor::Green.on_default().bold())
        .usage(AnsiColor::Green.on_default().bold())
        .literal(AnsiColor::Cyan.on_default().bold())
        .placeholder(AnsiColor::Cyan.on_default()),
    about = "Stages the .NET SDK and restores app dependencies",
    long_about = "sdkstage resolves the .NET SDK version an application needs, reuses a \
                  previously cached SDK payload when possible, installs the SDK into the \
                  build directory, and restores the app's package dependencies.",
    after_help = "\x1b[1m\x1b[32mExamples:\x1b[0m\n    \
                  sdkstage stage --build-dir /tmp/app --manifest manifest.yml\n    \
                  sdkstage resolve --build-dir /tmp/app --manifest manifest.yml\n    \
                  sdkstage version"
)]
pub struct Cli {
    /// Enable verbose output
    #[arg(long, short = 'v', global = true)]
    pub verbose: bool,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Install the SDK and restore dependencies for an app
    Stage(StageArgs),

    /// Print the SDK version that would be installed
    Resolve(ResolveArgs),

    /// Show version information
    Version,
}

#[derive(Args, Debug)]
pub struct StageArgs {
    /// Build directory the app is being staged into
    #[arg(long, short = 'b')]
    pub build_dir: PathBuf,

    /// Buildpack cache directory carried between builds
    /// (defaults to the user cache dir, or SDKSTAGE_CACHE_DIR)
    #[arg(long, short = 'c', env = "SDKSTAGE_CACHE_DIR")]
    pub cache_dir: Option<PathBuf>,

    /// Buildpack manifest.yml declaring available SDK versions
    #[arg(long, short = 'm')]
    pub manifest: PathBuf,
}

#[derive(Args, Debug)]
pub struct ResolveArgs {
    /// Build directory the app is being staged into
    #[arg(long, short = 'b')]
    pub build_dir: PathBuf,

    /// Buildpack manifest.yml declaring available SDK versions
    #[arg(long, short = 'm')]
    pub manifest: PathBuf,
}
