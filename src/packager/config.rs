//! Fixed configuration for the packaging pipeline.
//!
//! There are no command-line knobs: every value here is a release convention.
//! The struct exists (rather than inline constants) so the tool-locator search
//! strategy can be exercised against injected fake install roots in tests.

use std::path::PathBuf;

/// Name of the Inno Setup command-line compiler executable.
pub const COMPILER_EXE: &str = "ISCC.exe";

/// Python one-liner that prints the application version on a single line.
pub const VERSION_QUERY: &str =
    "from mousetracks2.version import __version__; print(__version__)";

/// Configuration for a packaging run.
///
/// Constructed via [`Default`] for real runs; tests override individual fields
/// to point at fake interpreters and fake install roots.
#[derive(Clone, Debug)]
pub struct PackagerConfig {
    /// Interpreter used to query the application version.
    pub interpreter: String,

    /// Script passed to the interpreter via `-c`.
    pub version_query: String,

    /// Product name embedded in artifact names.
    pub product_name: String,

    /// Platform tag embedded in artifact names.
    pub platform_tag: String,

    /// Directory holding the built application tree and the installer output.
    pub dist_dir: PathBuf,

    /// Installer compiler executable name, both for the search-path probe and
    /// for lookups inside install-root subdirectories.
    pub compiler_exe: String,

    /// Case-insensitive directory-name prefix identifying Inno Setup install
    /// trees under the program-install roots.
    pub compiler_dir_prefix: String,

    /// Program-install roots probed in order: 64-bit first, then 32-bit.
    pub install_roots: Vec<PathBuf>,

    /// Installer-definition script handed to the compiler.
    pub installer_script: PathBuf,
}

impl Default for PackagerConfig {
    fn default() -> Self {
        Self {
            interpreter: "python".into(),
            version_query: VERSION_QUERY.into(),
            product_name: "MouseTracks".into(),
            platform_tag: "windows-x64".into(),
            dist_dir: PathBuf::from("dist"),
            compiler_exe: COMPILER_EXE.into(),
            compiler_dir_prefix: "Inno Setup".into(),
            install_roots: vec![
                PathBuf::from(r"C:\Program Files"),
                PathBuf::from(r"C:\Program Files (x86)"),
            ],
            installer_script: PathBuf::from("resources/build/installer.iss"),
        }
    }
}
