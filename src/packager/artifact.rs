//! Versioned artifact naming.
//!
//! Pure derivation of the source build directory and the installer output
//! name from the resolved version. Deterministic by construction: downstream
//! tooling (the launcher, release upload scripts) depends on predictable
//! names.

use crate::packager::config::PackagerConfig;
use semver::Version;
use std::path::PathBuf;

/// Artifact names derived from the application version.
///
/// Both names come from the single template
/// `<product>-<version>-<platform>[-setup]` and are recomputed together;
/// neither is ever mutated independently.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ArtifactNames {
    /// Base name of the built application directory, e.g.
    /// `MouseTracks-2.0.0-windows-x64`.
    pub source_base: String,

    /// Base name of the installer output, e.g.
    /// `MouseTracks-2.0.0-windows-x64-setup`.
    pub dest_base: String,

    /// `source_base` under the dist directory.
    pub source_dir: PathBuf,

    /// `dest_base` under the dist directory.
    pub dest_path: PathBuf,
}

impl ArtifactNames {
    /// Derive artifact names for a version. No I/O, cannot fail.
    pub fn derive(config: &PackagerConfig, version: &Version) -> Self {
        let source_base = format!(
            "{}-{}-{}",
            config.product_name, version, config.platform_tag
        );
        let dest_base = format!("{source_base}-setup");
        let source_dir = config.dist_dir.join(&source_base);
        let dest_path = config.dist_dir.join(&dest_base);

        Self {
            source_base,
            dest_base,
            source_dir,
            dest_path,
        }
    }
}
