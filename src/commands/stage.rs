//! Stage command implementation
//!
//! Runs the full pipeline once: resolve version, check the cache, install
//! the SDK, restore dependencies. Strictly sequential; each step only runs
//! when its decision predicate says it is needed.

use console::Style;

use crate::app::AppDescriptor;
use crate::cache;
use crate::cli::StageArgs;
use crate::error::Result;
use crate::installer::SdkInstaller;
use crate::manifest::SdkManifest;
use crate::progress::ConsoleSink;
use crate::restore::RestoreOrchestrator;
use crate::shell::ProcessShell;

/// Run stage command
pub fn run(args: StageArgs) -> Result<()> {
    let manifest = SdkManifest::load(&args.manifest)?;
    let cache_dir = match args.cache_dir {
        Some(dir) => dir,
        None => cache::paths::cache_dir()?,
    };

    let app = AppDescriptor::discover(&args.build_dir);
    let shell = ProcessShell;
    let mut sink = ConsoleSink;

    let installer = SdkInstaller::new(&args.build_dir, &cache_dir, &manifest, &shell);
    if installer.should_install(&app) {
        installer.install(&mut sink)?;
    } else {
        println!(
            "{}",
            Style::new()
                .dim()
                .apply_to("App is self-contained, skipping SDK install")
        );
    }

    let orchestrator = RestoreOrchestrator::new(&args.build_dir, &shell);
    if orchestrator.should_restore(&app) {
        orchestrator.restore(&app, &mut sink)?;
    } else {
        println!(
            "{}",
            Style::new()
                .dim()
                .apply_to("App is self-contained, skipping package restore")
        );
    }

    Ok(())
}
