//! MouseTracks Packager - builds the versioned Windows installer.
//!
//! This binary queries the built application for its version, finds the Inno
//! Setup compiler, and compiles the installer, warning instead of failing
//! when the compiler is unavailable.

mod cli;
mod error;
mod packager;

use std::process;

fn main() {
    // Initialize logging
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    // Run CLI and get exit code
    let exit_code = match cli::run() {
        Ok(code) => code,
        Err(e) => {
            eprintln!("Error: {}", e);
            1
        }
    };

    process::exit(exit_code);
}
