//! Installer compiler invocation.
//!
//! Runs the discovered compiler synchronously with the resolved version and
//! artifact names as `/D` substitution parameters, and classifies the result.
//! Nothing here is fatal: the primary build artifact already exists, so a
//! missing or failing compiler is downgraded to a warning and the run still
//! succeeds overall.

use crate::packager::artifact::ArtifactNames;
use crate::packager::config::PackagerConfig;
use crate::packager::locator::ToolLocation;
use semver::Version;
use std::process::Command;

/// Reference pointed to by the remediation warning.
const INNO_SETUP_URL: &str = "https://jrsoftware.org/isinfo.php";

/// Final result of the installer step, used only for reporting.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum BuildOutcome {
    /// Compiler ran and exited zero.
    Success,

    /// Compiler was found but did not produce the installer. Covers both a
    /// non-zero exit and a failure to start the process; the detail string is
    /// the only distinction.
    CompilerFailed {
        /// What went wrong, for the warning message.
        detail: String,
    },

    /// No compiler was discovered anywhere; the installer step was skipped.
    CompilerNotFound,
}

/// Run the installer compiler if one was located.
///
/// Blocks until the compiler exits; there is no timeout. The compiler's own
/// output goes straight to the operator's terminal.
pub fn build_installer(
    config: &PackagerConfig,
    location: Option<&ToolLocation>,
    version: &Version,
    names: &ArtifactNames,
) -> BuildOutcome {
    let Some(location) = location else {
        return BuildOutcome::CompilerNotFound;
    };

    log::info!("Compiling installer with {}", location.display());

    let status = Command::new(location.command())
        .arg(format!("/DAppVersion={version}"))
        .arg(format!("/DSourceName={}", names.source_base))
        .arg(format!("/DOutputName={}", names.dest_base))
        .arg(&config.installer_script)
        .status();

    match status {
        Ok(status) if status.success() => BuildOutcome::Success,
        Ok(status) => BuildOutcome::CompilerFailed {
            detail: format!("compiler exited with {status}"),
        },
        Err(e) => BuildOutcome::CompilerFailed {
            detail: format!("failed to run {}: {e}", location.display()),
        },
    }
}

/// Report the outcome to the operator.
///
/// Success gets a confirmation; both failure classes get warnings, never a
/// hard error, because the versioned application tree was already built
/// before this step ran.
pub fn report_outcome(config: &PackagerConfig, outcome: &BuildOutcome, names: &ArtifactNames) {
    match outcome {
        BuildOutcome::Success => {
            log::info!("✓ Created installer: {}", names.dest_path.display());
        }
        BuildOutcome::CompilerFailed { detail } => {
            log::warn!(
                "Installer compilation failed ({detail}). \
                 The application build at {} is unaffected.",
                names.source_dir.display()
            );
        }
        BuildOutcome::CompilerNotFound => {
            log::warn!(
                "{} was not found, so no installer was built.\n\
                 The application build at {} completed successfully; only the \
                 installer step was skipped.\n\
                 To build installers, install Inno Setup or add {} to the \
                 search path.\n\
                 See {INNO_SETUP_URL}",
                config.compiler_exe,
                names.source_dir.display(),
                config.compiler_exe,
            );
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::path::PathBuf;

    fn names(config: &PackagerConfig) -> ArtifactNames {
        ArtifactNames::derive(config, &Version::new(2, 0, 0))
    }

    #[test]
    fn absent_location_skips_the_compiler() {
        let config = PackagerConfig::default();
        let outcome =
            build_installer(&config, None, &Version::new(2, 0, 0), &names(&config));
        assert_eq!(outcome, BuildOutcome::CompilerNotFound);
    }

    #[test]
    fn zero_exit_is_success() {
        let config = PackagerConfig::default();
        let tool = ToolLocation::OnSearchPath("true".into());
        let outcome =
            build_installer(&config, Some(&tool), &Version::new(2, 0, 0), &names(&config));
        assert_eq!(outcome, BuildOutcome::Success);
    }

    #[test]
    fn non_zero_exit_is_compiler_failed() {
        let config = PackagerConfig::default();
        let tool = ToolLocation::OnSearchPath("false".into());
        let outcome =
            build_installer(&config, Some(&tool), &Version::new(2, 0, 0), &names(&config));
        assert!(matches!(outcome, BuildOutcome::CompilerFailed { .. }));
    }

    #[test]
    fn unspawnable_compiler_is_compiler_failed() {
        let config = PackagerConfig::default();
        let tool = ToolLocation::Installed(PathBuf::from("/no/such/ISCC.exe"));
        let outcome =
            build_installer(&config, Some(&tool), &Version::new(2, 0, 0), &names(&config));
        match outcome {
            BuildOutcome::CompilerFailed { detail } => {
                assert!(detail.contains("failed to run"));
            }
            other => panic!("unexpected outcome: {other:?}"),
        }
    }
}
