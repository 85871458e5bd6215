//! Runtime configuration
//!
//! Theme preferences come from the page (`ThemeSettings`); what lives here is
//! the native store location and the launcher hotkey.

use std::path::PathBuf;

pub const STORE_PATH_ENV: &str = "NOVA_STORE_PATH";
pub const LAUNCHER_HOTKEY_ENV: &str = "NOVA_LAUNCHER_HOTKEY";

const APP_DATA_DIR: &str = "nova_theme";
const STORE_FILE: &str = "storage.json";
const FALLBACK_STORE_FILE: &str = "nova_storage.json";
const DEFAULT_LAUNCHER_HOTKEY: &str = "h";

/// Where the native build keeps its key-value store
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StoreConfig {
    pub path: PathBuf,
}

impl StoreConfig {
    /// Explicit path, then `NOVA_STORE_PATH`, then the user data dir,
    /// then the working directory.
    pub fn resolve(explicit: Option<PathBuf>) -> Self {
        let env = std::env::var_os(STORE_PATH_ENV)
            .filter(|v| !v.is_empty())
            .map(PathBuf::from);
        Self::resolve_with(explicit, env, Self::data_dir())
    }

    fn resolve_with(explicit: Option<PathBuf>, env: Option<PathBuf>, data_dir: Option<PathBuf>) -> Self {
        let path = explicit
            .or(env)
            .or_else(|| data_dir.map(|dir| dir.join(APP_DATA_DIR).join(STORE_FILE)))
            .unwrap_or_else(|| PathBuf::from(FALLBACK_STORE_FILE));
        Self { path }
    }

    #[cfg(not(target_arch = "wasm32"))]
    fn data_dir() -> Option<PathBuf> {
        dirs::data_dir()
    }

    #[cfg(target_arch = "wasm32")]
    fn data_dir() -> Option<PathBuf> {
        None
    }
}

/// App launcher options
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LauncherConfig {
    pub hotkey: String,
}

impl Default for LauncherConfig {
    fn default() -> Self {
        Self {
            hotkey: DEFAULT_LAUNCHER_HOTKEY.to_string(),
        }
    }
}

impl LauncherConfig {
    pub fn from_env() -> Self {
        match std::env::var(LAUNCHER_HOTKEY_ENV) {
            Ok(key) if !key.trim().is_empty() => Self {
                hotkey: key.trim().to_lowercase(),
            },
            _ => Self::default(),
        }
    }
}
