//! Error types for the release packaging pipeline.
//!
//! Only version resolution is fatal: without a version no artifact name can be
//! derived, so the pipeline aborts. Installer-step problems (compiler missing,
//! compiler exiting non-zero) are not errors at all — they are reported as
//! [`BuildOutcome`](crate::packager::BuildOutcome) variants and downgraded to
//! warnings, because the primary build artifact already exists.

use thiserror::Error;

/// Result type alias for packager operations
pub type Result<T> = std::result::Result<T, PackagerError>;

/// Main error type for the packaging pipeline
#[derive(Error, Debug)]
pub enum PackagerError {
    /// The version query interpreter could not be spawned
    #[error("failed to run version query `{command}`: {source}")]
    VersionQuerySpawn {
        /// Command that failed to start
        command: String,
        /// Underlying spawn error
        source: std::io::Error,
    },

    /// The version query ran but printed nothing usable
    #[error("version query `{command}` produced no output")]
    VersionQueryEmpty {
        /// Command that was run
        command: String,
    },

    /// The version query exited with a non-zero status
    #[error("version query `{command}` exited with status {status}: {stderr}")]
    VersionQueryFailed {
        /// Command that was run
        command: String,
        /// Exit status reported by the interpreter
        status: String,
        /// Captured standard error, trimmed
        stderr: String,
    },

    /// The version query printed something that is not a semantic version
    #[error("version query printed `{output}`, which is not a valid version: {source}")]
    VersionNotSemver {
        /// First line of the query output
        output: String,
        /// Parse error from semver
        source: semver::Error,
    },
}
