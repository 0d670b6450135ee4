//! Release packaging orchestrator for MouseTracks.
//!
//! Given an already-built application tree under `dist/`, this crate resolves
//! the application version, derives the versioned artifact names, locates the
//! Inno Setup compiler on the host, and invokes it to produce the installer.
//! It can be used as a CLI tool or as a library dependency.

pub mod cli;
pub mod error;
pub mod packager;

// Re-export commonly used types
pub use error::{PackagerError, Result};
pub use packager::{ArtifactNames, BuildOutcome, PackagerConfig, ToolLocation};
