//! Buildpack manifest loading and version lookup
//!
//! The manifest is a YAML document shipped with the buildpack that maps
//! dependency names to installable versions. Only the `dotnet` dependency
//! is consulted here.

use std::path::Path;

use serde::Deserialize;

use crate::error::{Result, manifest};

/// Dependency name of the .NET SDK in the buildpack manifest
pub const SDK_DEPENDENCY: &str = "dotnet";

/// Version lookup over the buildpack manifest.
///
/// Kept as a trait so version resolution can be unit tested without a
/// manifest file on disk.
pub trait VersionLookup {
    /// The manifest-declared default version for the SDK, if any
    fn default_version(&self) -> Option<String>;

    /// Whether the manifest can supply the given exact version
    fn has_version(&self, version: &str) -> bool;
}

#[derive(Debug, Clone, Deserialize)]
struct NamedVersion {
    name: String,
    version: String,
}

/// Parsed buildpack manifest
#[derive(Debug, Clone, Deserialize)]
pub struct SdkManifest {
    #[serde(default)]
    default_versions: Vec<NamedVersion>,
    #[serde(default)]
    dependencies: Vec<NamedVersion>,
}

impl SdkManifest {
    /// Load and parse a manifest.yml from disk
    pub fn load(path: &Path) -> Result<Self> {
        if !path.is_file() {
            return Err(manifest::not_found(path.display().to_string()));
        }

        let content = std::fs::read_to_string(path).map_err(|e| {
            crate::error::fs::read_failed(path.display().to_string(), e.to_string())
        })?;

        serde_yaml::from_str(&content)
            .map_err(|e| manifest::parse_failed(path.display().to_string(), e.to_string()))
    }

    /// Parse a manifest from a YAML string
    pub fn parse(content: &str) -> Result<Self> {
        Ok(serde_yaml::from_str(content)?)
    }
}

impl VersionLookup for SdkManifest {
    fn default_version(&self) -> Option<String> {
        self.default_versions
            .iter()
            .find(|d| d.name == SDK_DEPENDENCY)
            .map(|d| d.version.clone())
            .filter(|v| !v.is_empty())
    }

    fn has_version(&self, version: &str) -> bool {
        self.dependencies
            .iter()
            .any(|d| d.name == SDK_DEPENDENCY && d.version == version)
    }
}

/// Fixed-version lookup for unit tests elsewhere in the crate
#[cfg(test)]
pub struct StubLookup(pub &'static str);

#[cfg(test)]
impl VersionLookup for StubLookup {
    fn default_version(&self) -> Option<String> {
        Some(self.0.to_string())
    }

    fn has_version(&self, version: &str) -> bool {
        version == self.0
    }
}
