//! Application version resolution.
//!
//! Queries the built application package for its version by running an
//! embedded interpreter one-liner and capturing the first line of stdout.
//! Every failure here is fatal: no artifact name can be derived without a
//! version, so the pipeline never proceeds past a failed resolution.

use crate::error::{PackagerError, Result};
use crate::packager::config::PackagerConfig;
use semver::Version;
use std::process::Command;

/// Resolve the application version.
///
/// Spawns `<interpreter> -c <query>` and waits for it to exit; there is no
/// timeout. The first line of stdout, trimmed, must parse as a semantic
/// version.
pub fn resolve_version(config: &PackagerConfig) -> Result<Version> {
    let command = format!("{} -c <version query>", config.interpreter);
    log::debug!("Resolving application version via {}", config.interpreter);

    let output = Command::new(&config.interpreter)
        .args(["-c", &config.version_query])
        .output()
        .map_err(|source| PackagerError::VersionQuerySpawn {
            command: command.clone(),
            source,
        })?;

    if !output.status.success() {
        return Err(PackagerError::VersionQueryFailed {
            command,
            status: output.status.to_string(),
            stderr: String::from_utf8_lossy(&output.stderr).trim().to_string(),
        });
    }

    let stdout = String::from_utf8_lossy(&output.stdout);
    let first_line = stdout.lines().next().unwrap_or("").trim();
    if first_line.is_empty() {
        return Err(PackagerError::VersionQueryEmpty { command });
    }

    let version =
        Version::parse(first_line).map_err(|source| PackagerError::VersionNotSemver {
            output: first_line.to_string(),
            source,
        })?;

    log::info!("Application version: {version}");
    Ok(version)
}

#[cfg(test)]
mod tests {
    use super::*;

    /// Config whose "interpreter" is a shell, so tests can script the output.
    fn shell_config(query: &str) -> PackagerConfig {
        PackagerConfig {
            interpreter: "sh".into(),
            version_query: query.into(),
            ..PackagerConfig::default()
        }
    }

    #[test]
    fn resolves_first_line_of_output() {
        let config = shell_config("printf '3.1.4\\nnoise on later lines\\n'");
        let version = resolve_version(&config).unwrap();
        assert_eq!(version, Version::new(3, 1, 4));
    }

    #[test]
    fn trims_surrounding_whitespace() {
        let config = shell_config("printf '  2.0.24 \\n'");
        let version = resolve_version(&config).unwrap();
        assert_eq!(version, Version::new(2, 0, 24));
    }

    #[test]
    fn empty_output_is_fatal() {
        let config = shell_config("true");
        let err = resolve_version(&config).unwrap_err();
        assert!(matches!(err, PackagerError::VersionQueryEmpty { .. }));
    }

    #[test]
    fn whitespace_only_output_is_fatal() {
        let config = shell_config("printf '   \\n'");
        let err = resolve_version(&config).unwrap_err();
        assert!(matches!(err, PackagerError::VersionQueryEmpty { .. }));
    }

    #[test]
    fn missing_interpreter_is_fatal() {
        let config = PackagerConfig {
            interpreter: "no-such-interpreter-on-this-host".into(),
            ..PackagerConfig::default()
        };
        let err = resolve_version(&config).unwrap_err();
        assert!(matches!(err, PackagerError::VersionQuerySpawn { .. }));
    }

    #[test]
    fn non_zero_query_exit_is_fatal() {
        let config = shell_config("echo broken >&2; exit 3");
        let err = resolve_version(&config).unwrap_err();
        match err {
            PackagerError::VersionQueryFailed { stderr, .. } => {
                assert_eq!(stderr, "broken");
            }
            other => panic!("unexpected error: {other}"),
        }
    }

    #[test]
    fn non_semver_output_is_fatal() {
        let config = shell_config("printf 'not-a-version\\n'");
        let err = resolve_version(&config).unwrap_err();
        assert!(matches!(err, PackagerError::VersionNotSemver { .. }));
    }
}
