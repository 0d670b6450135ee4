//! Command line argument parsing.
//!
//! The packager takes no configuration flags: install roots, the compiler
//! name, and the artifact naming template are release conventions fixed in
//! [`PackagerConfig`](crate::packager::PackagerConfig). Parsing still goes
//! through clap for `--help` and `--version`.

use clap::Parser;

/// Installer packager for MouseTracks release builds
#[derive(Parser, Debug)]
#[command(
    name = "mousetracks_packager",
    version,
    about = "Builds the versioned MouseTracks Windows installer with Inno Setup",
    long_about = "Queries the built MouseTracks package for its version, locates the \
Inno Setup compiler (search path, then 64-bit and 32-bit Program Files), and compiles \
the installer for dist/MouseTracks-<version>-windows-x64.

Exit code is non-zero only when the version cannot be resolved. A missing or \
failing installer compiler is reported as a warning; the application build \
itself already exists, so the run still succeeds."
)]
pub struct Args {}

impl Args {
    /// Parse command line arguments
    pub fn parse_args() -> Self {
        Self::parse()
    }
}
