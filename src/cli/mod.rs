//! Command line entry point for the packager.

mod args;

pub use args::Args;

use crate::error::Result;
use crate::packager::{self, PackagerConfig};

/// Run the packaging pipeline and map its result to an exit code.
///
/// Always zero once a version is resolved: installer failure or absence is
/// warned about, never fatal. Version resolution errors propagate to `main`,
/// which exits non-zero.
pub fn run() -> Result<i32> {
    let _args = Args::parse_args();
    let config = PackagerConfig::default();

    packager::run(&config)?;
    Ok(0)
}
