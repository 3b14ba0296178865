//! Resolve command implementation

use crate::cli::ResolveArgs;
use crate::error::Result;
use crate::manifest::SdkManifest;
use crate::resolver::VersionResolver;

/// Run resolve command: print the SDK version this build would install
pub fn run(args: ResolveArgs) -> Result<()> {
    let manifest = SdkManifest::load(&args.manifest)?;
    let version = VersionResolver::new(&args.build_dir, &manifest).resolve()?;

    println!("{version}");

    Ok(())
}
