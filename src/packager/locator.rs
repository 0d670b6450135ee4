//! Installer compiler discovery.
//!
//! Resolves a usable Inno Setup compiler with an ordered, short-circuiting
//! probe sequence: the command search path first, then `Inno Setup*`
//! subdirectories of the 64-bit program-install root, then the 32-bit root.
//! The probes are read-only; nothing on disk is created or modified. Absence
//! is a valid terminal state, not an error — the invoker turns it into a
//! `CompilerNotFound` outcome.

use crate::packager::config::PackagerConfig;
use std::ffi::OsString;
use std::fs;
use std::path::{Path, PathBuf};

/// Location of the installer compiler.
///
/// Authoritative once discovered; never re-validated for the rest of the run.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum ToolLocation {
    /// Bare executable name found on the command search path. The name alone
    /// is sufficient for invocation, so no full path is resolved.
    OnSearchPath(String),

    /// Full executable path discovered under a program-install root.
    Installed(PathBuf),
}

impl ToolLocation {
    /// The program to hand to `Command::new`.
    pub fn command(&self) -> OsString {
        match self {
            Self::OnSearchPath(name) => name.into(),
            Self::Installed(path) => path.into(),
        }
    }

    /// Human-readable form for log messages.
    pub fn display(&self) -> String {
        match self {
            Self::OnSearchPath(name) => format!("{name} (on search path)"),
            Self::Installed(path) => path.display().to_string(),
        }
    }
}

/// Locate the installer compiler, or report that none exists.
pub fn locate_compiler(config: &PackagerConfig) -> Option<ToolLocation> {
    let mut probes: Vec<Box<dyn FnOnce() -> Option<ToolLocation> + '_>> =
        vec![Box::new(|| probe_search_path(&config.compiler_exe))];
    for root in &config.install_roots {
        probes.push(Box::new(move || {
            probe_install_root(root, &config.compiler_dir_prefix, &config.compiler_exe)
                .map(ToolLocation::Installed)
        }));
    }

    let location = first_hit(probes);
    match &location {
        Some(found) => log::info!("Found {} at {}", config.compiler_exe, found.display()),
        None => log::debug!(
            "{} not found on the search path or under any install root",
            config.compiler_exe
        ),
    }
    location
}

/// Run probes in order; the first non-absent result wins and later probes are
/// never evaluated.
fn first_hit<'a>(
    probes: impl IntoIterator<Item = Box<dyn FnOnce() -> Option<ToolLocation> + 'a>>,
) -> Option<ToolLocation> {
    probes.into_iter().find_map(|probe| probe())
}

/// Check the command search path for the compiler by name.
///
/// On a hit the bare name is adopted verbatim rather than the resolved path:
/// if the search path can resolve it now, invocation will resolve it the same
/// way.
fn probe_search_path(exe_name: &str) -> Option<ToolLocation> {
    match which::which(exe_name) {
        Ok(path) => {
            log::debug!("{} resolves on the search path to {}", exe_name, path.display());
            Some(ToolLocation::OnSearchPath(exe_name.to_string()))
        }
        Err(_) => None,
    }
}

/// Scan one program-install root for an `Inno Setup*` directory containing
/// the compiler executable.
///
/// Directory names are matched case-insensitively against the prefix. When
/// several install trees qualify, whichever the filesystem enumerates first
/// wins; no particular order is guaranteed.
fn probe_install_root(root: &Path, dir_prefix: &str, exe_name: &str) -> Option<PathBuf> {
    let entries = fs::read_dir(root).ok()?;
    let prefix = dir_prefix.to_lowercase();

    for entry in entries.flatten() {
        if !entry.file_type().map(|t| t.is_dir()).unwrap_or(false) {
            continue;
        }
        let name = entry.file_name();
        if !name.to_string_lossy().to_lowercase().starts_with(&prefix) {
            continue;
        }
        let candidate = entry.path().join(exe_name);
        if candidate.is_file() {
            return Some(candidate);
        }
        log::debug!(
            "{} matches the install prefix but has no {}",
            entry.path().display(),
            exe_name
        );
    }
    None
}
