//! Root config directory resolution

use anyhow::Result;
use std::path::PathBuf;

/// Environment variable overriding the root config directory
pub const HOME_ENV: &str = "GAP_CREATE_HOME";

/// Directory name used under the platform config directory
const APP_DIR: &str = "gap-create";

/// Resolve the directory where persistent settings live
///
/// Priority:
/// 1. `GAP_CREATE_HOME` environment variable
/// 2. `<platform config dir>/gap-create`
/// 3. `~/.gap-create` (fallback when no config dir is known)
pub fn root_dir() -> Result<PathBuf> {
    resolve(std::env::var(HOME_ENV).ok())
}

fn resolve(home_override: Option<String>) -> Result<PathBuf> {
    if let Some(dir) = home_override.filter(|d| !d.trim().is_empty()) {
        tracing::debug!(dir = %dir, "using {} override", HOME_ENV);
        return Ok(PathBuf::from(dir));
    }

    if let Some(config_dir) = dirs::config_dir() {
        return Ok(config_dir.join(APP_DIR));
    }

    if let Some(home_dir) = dirs::home_dir() {
        return Ok(home_dir.join(format!(".{}", APP_DIR)));
    }

    anyhow::bail!(
        "Could not determine a config directory; set {} explicitly",
        HOME_ENV
    )
}
