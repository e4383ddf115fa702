// Taqyeem platform paths for Linux
// Config: ~/.config/taqyeem
// Data:   ~/.local/share/taqyeem

use std::env;
use std::path::PathBuf;

/// Returns the configuration directory for Taqyeem on Linux.
/// Uses `$XDG_CONFIG_HOME/taqyeem` if set, otherwise `~/.config/taqyeem`.
pub fn get_config_dir() -> PathBuf {
    if let Ok(xdg) = env::var("XDG_CONFIG_HOME") {
        PathBuf::from(xdg).join("taqyeem")
    } else {
        let home = env::var("HOME").unwrap_or_else(|_| String::from("/tmp"));
        PathBuf::from(home).join(".config").join("taqyeem")
    }
}

/// Returns the data directory for Taqyeem on Linux.
/// Uses `$XDG_DATA_HOME/taqyeem` if set, otherwise `~/.local/share/taqyeem`.
pub fn get_data_dir() -> PathBuf {
    if let Ok(xdg) = env::var("XDG_DATA_HOME") {
        PathBuf::from(xdg).join("taqyeem")
    } else {
        let home = env::var("HOME").unwrap_or_else(|_| String::from("/tmp"));
        PathBuf::from(home)
            .join(".local")
            .join("share")
            .join("taqyeem")
    }
}
