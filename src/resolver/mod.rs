//! SDK version resolution
//!
//! Picks the exact SDK version for this build: an app-pinned version from
//! `global.json` when present, otherwise the manifest default. Resolution
//! either produces a non-empty version string or fails loudly; there is no
//! "undefined" fallback.

use std::path::Path;

use serde::Deserialize;

use crate::error::{Result, manifest as manifest_err};
use crate::manifest::VersionLookup;

/// App-side SDK pin file at the build-dir root
const GLOBAL_JSON: &str = "global.json";

#[derive(Debug, Deserialize)]
struct GlobalJson {
    sdk: Option<GlobalJsonSdk>,
}

#[derive(Debug, Deserialize)]
struct GlobalJsonSdk {
    version: Option<String>,
}

/// Resolves the SDK version for one build
pub struct VersionResolver<'a> {
    build_dir: &'a Path,
    manifest: &'a dyn VersionLookup,
}

impl<'a> VersionResolver<'a> {
    pub fn new(build_dir: &'a Path, manifest: &'a dyn VersionLookup) -> Self {
        Self {
            build_dir,
            manifest,
        }
    }

    /// Resolve the exact SDK version for this build.
    ///
    /// A pinned version must be present in the manifest's dependency list;
    /// with no pin, the manifest default is used. Always returns a
    /// non-empty version or a configuration error.
    pub fn resolve(&self) -> Result<String> {
        if let Some(pinned) = self.pinned_version()? {
            if !self.manifest.has_version(&pinned) {
                return Err(manifest_err::version_not_in_manifest(pinned));
            }
            return Ok(pinned);
        }

        self.manifest
            .default_version()
            .ok_or_else(|| {
                manifest_err::version_not_resolved(
                    "manifest declares no default version for dotnet",
                )
            })
    }

    /// The SDK version pinned by the app's global.json, if any
    fn pinned_version(&self) -> Result<Option<String>> {
        let path = self.build_dir.join(GLOBAL_JSON);
        if !path.is_file() {
            return Ok(None);
        }

        let content = std::fs::read_to_string(&path).map_err(|e| {
            crate::error::fs::read_failed(path.display().to_string(), e.to_string())
        })?;

        let global: GlobalJson = serde_json::from_str(&content)
            .map_err(|e| manifest_err::parse_failed(path.display().to_string(), e.to_string()))?;

        Ok(global
            .sdk
            .and_then(|sdk| sdk.version)
            .filter(|v| !v.is_empty()))
    }
}
