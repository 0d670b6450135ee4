//! Release packaging pipeline.
//!
//! Four strictly sequential stages, each feeding the next:
//!
//! 1. `version` - resolve the application version from the built package
//! 2. `artifact` - derive versioned artifact names from the version
//! 3. `locator` - discover the Inno Setup compiler
//! 4. `invoker` - run the compiler and classify the outcome
//!
//! A failed version resolution aborts the run; a missing or failing compiler
//! only degrades it to a warning.

pub mod artifact;
pub mod config;
pub mod invoker;
pub mod locator;
pub mod version;

pub use artifact::ArtifactNames;
pub use config::PackagerConfig;
pub use invoker::BuildOutcome;
pub use locator::ToolLocation;

use crate::error::Result;

/// Run the packaging pipeline to completion.
///
/// Returns the installer-step outcome; the caller decides how to surface it.
/// Errors only when the version cannot be resolved, in which case no tool
/// location or compiler invocation is ever attempted.
pub fn run(config: &PackagerConfig) -> Result<BuildOutcome> {
    let version = version::resolve_version(config)?;
    let names = ArtifactNames::derive(config, &version);
    log::info!("Packaging {}", names.source_base);

    let location = locator::locate_compiler(config);
    let outcome = invoker::build_installer(config, location.as_ref(), &version, &names);
    invoker::report_outcome(config, &outcome, &names);

    Ok(outcome)
}
