// Taqyeem platform paths for Windows
// Config: %APPDATA%/Taqyeem
// Data:   %APPDATA%/Taqyeem

use std::env;
use std::path::PathBuf;

/// Returns the configuration directory for Taqyeem on Windows.
/// `%APPDATA%/Taqyeem`
pub fn get_config_dir() -> PathBuf {
    let appdata =
        env::var("APPDATA").unwrap_or_else(|_| String::from("C:\\Users\\Default\\AppData\\Roaming"));
    PathBuf::from(appdata).join("Taqyeem")
}

/// Returns the data directory for Taqyeem on Windows.
/// `%APPDATA%/Taqyeem`
pub fn get_data_dir() -> PathBuf {
    let appdata =
        env::var("APPDATA").unwrap_or_else(|_| String::from("C:\\Users\\Default\\AppData\\Roaming"));
    PathBuf::from(appdata).join("Taqyeem")
}
