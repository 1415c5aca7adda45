//! Platform-appropriate locations for the config file and logs.
//!
//! Development builds keep everything next to the working directory. Installed
//! builds use the `dirs` locations:
//! - Windows: `%APPDATA%\shellpick\`
//! - macOS: `~/Library/Application Support/shellpick/`
//! - Linux: `~/.config/shellpick/` (config), `~/.local/share/shellpick/` (logs)

use std::path::PathBuf;

/// Directory name used under the platform config/data roots
const APP_DIR_NAME: &str = "shellpick";

/// Environment variable that overrides the config file location
pub const CONFIG_PATH_ENV: &str = "SHELLPICK_CONFIG";

/// Returns true for `cargo run` and debug builds.
pub fn is_dev_mode() -> bool {
    std::env::var("CARGO").is_ok() || cfg!(debug_assertions)
}

/// Directory holding the config file.
///
/// - Dev mode: current directory
/// - Linux: `~/.config/shellpick/`
/// - Windows/macOS: same as [`data_dir`]
pub fn config_dir() -> Option<PathBuf> {
    if is_dev_mode() {
        return Some(PathBuf::from("."));
    }

    #[cfg(target_os = "linux")]
    {
        dirs::config_dir().map(|p| p.join(APP_DIR_NAME))
    }

    #[cfg(not(target_os = "linux"))]
    {
        data_dir()
    }
}

/// Directory holding logs and other generated data.
pub fn data_dir() -> Option<PathBuf> {
    if is_dev_mode() {
        return Some(PathBuf::from("."));
    }

    dirs::data_dir().map(|p| p.join(APP_DIR_NAME))
}

/// Path to the JSON config file.
///
/// `SHELLPICK_CONFIG` wins when set; otherwise `{config_dir}/shellpick.json`.
pub fn config_file() -> PathBuf {
    if let Some(path) = std::env::var_os(CONFIG_PATH_ENV).filter(|p| !p.is_empty()) {
        return PathBuf::from(path);
    }

    config_dir()
        .map(|p| p.join("shellpick.json"))
        .unwrap_or_else(|| PathBuf::from("shellpick.json"))
}

/// Path to the logs directory (`{data_dir}/logs/`).
pub fn logs_dir() -> PathBuf {
    data_dir()
        .map(|p| p.join("logs"))
        .unwrap_or_else(|| PathBuf::from("logs"))
}

/// Creates the config and log directories if they are missing.
pub fn ensure_directories() -> std::io::Result<()> {
    if let Some(parent) = config_file().parent().filter(|p| !p.as_os_str().is_empty()) {
        std::fs::create_dir_all(parent)?;
    }
    std::fs::create_dir_all(logs_dir())
}
