use std::fmt;

// === RegistryError ===

/// Errors related to the recently-visited companies registry.
#[derive(Debug)]
pub enum RegistryError {
    /// The supplied company descriptor is invalid (empty id, bad rating).
    InvalidDescriptor(String),
}

impl fmt::Display for RegistryError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            RegistryError::InvalidDescriptor(msg) => {
                write!(f, "Invalid company descriptor: {}", msg)
            }
        }
    }
}

impl std::error::Error for RegistryError {}

// === StoreError ===

/// Errors related to the durable recent-list store.
#[derive(Debug)]
pub enum StoreError {
    /// Writing the recent list to the storage medium failed.
    /// Non-fatal: the in-memory registry state remains authoritative.
    PersistenceFailed(String),
}

impl fmt::Display for StoreError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            StoreError::PersistenceFailed(msg) => {
                write!(f, "Persistence failed: {}", msg)
            }
        }
    }
}

impl std::error::Error for StoreError {}

// === SettingsError ===

/// Errors related to settings management.
#[derive(Debug)]
pub enum SettingsError {
    /// An I/O error occurred while reading or writing settings.
    IoError(String),
    /// Failed to serialize or deserialize settings.
    SerializationError(String),
    /// The provided settings key is invalid.
    InvalidKey(String),
    /// The provided settings value is invalid.
    InvalidValue(String),
}

impl fmt::Display for SettingsError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SettingsError::IoError(msg) => write!(f, "Settings I/O error: {}", msg),
            SettingsError::SerializationError(msg) => {
                write!(f, "Settings serialization error: {}", msg)
            }
            SettingsError::InvalidKey(key) => write!(f, "Invalid settings key: {}", key),
            SettingsError::InvalidValue(msg) => {
                write!(f, "Invalid settings value: {}", msg)
            }
        }
    }
}

impl std::error::Error for SettingsError {}

// === LocaleError ===

/// Errors related to localization engine operations.
#[derive(Debug)]
pub enum LocaleError {
    /// The requested locale is not supported.
    UnsupportedLocale(String),
    /// A translation key is missing from the locale file.
    MissingKey(String),
    /// The locale file was not found.
    FileNotFound(String),
}

impl fmt::Display for LocaleError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            LocaleError::UnsupportedLocale(locale) => {
                write!(f, "Unsupported locale: {}", locale)
            }
            LocaleError::MissingKey(key) => write!(f, "Missing locale key: {}", key),
            LocaleError::FileNotFound(path) => write!(f, "Locale file not found: {}", path),
        }
    }
}

impl std::error::Error for LocaleError {}
