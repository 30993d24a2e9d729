//! On-disk configuration for the CLI.
//!
//! The generator itself never touches storage; this module only supplies a
//! [`PrivacyGapConfig`](crate::PrivacyGapConfig) and a default subject to
//! the command-line front end.

mod config;

pub use config::Config;

use std::path::PathBuf;

/// Returns the configuration directory.
///
/// `PRIVACYGAP_CONFIG_DIR` overrides the location entirely. Otherwise this is
/// `~/.config/privacygap[-dev]/`, with the `-dev` suffix when
/// `PRIVACYGAP_ENV=dev`.
///
/// # Errors
/// Returns an error if creating the directory fails.
pub fn data_dir() -> std::io::Result<PathBuf> {
    let dir = match std::env::var_os("PRIVACYGAP_CONFIG_DIR") {
        Some(dir) => PathBuf::from(dir),
        None => {
            let base_dir = dirs::home_dir()
                .unwrap_or_else(|| PathBuf::from("."))
                .join(".config");

            let env = std::env::var("PRIVACYGAP_ENV").unwrap_or_else(|_| "production".to_string());
            if env == "dev" {
                base_dir.join("privacygap-dev")
            } else {
                base_dir.join("privacygap")
            }
        }
    };

    std::fs::create_dir_all(&dir)?;
    Ok(dir)
}
