use serde::{Deserialize, Serialize};

/// Top-level application settings container.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct AppSettings {
    pub general: GeneralSettings,
    pub history: HistorySettings,
}

impl Default for AppSettings {
    fn default() -> Self {
        Self {
            general: GeneralSettings::default(),
            history: HistorySettings::default(),
        }
    }
}

/// General application settings.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct GeneralSettings {
    /// Active UI language ("ar" or "en").
    pub language: String,
    /// Language used when a translation is missing from the active locale.
    pub fallback_language: String,
}

impl Default for GeneralSettings {
    fn default() -> Self {
        Self {
            language: "ar".to_string(),
            fallback_language: "en".to_string(),
        }
    }
}

/// Settings for the recently-visited companies list.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct HistorySettings {
    /// Maximum number of entries kept in the recently-visited list.
    #[serde(default = "default_recent_limit")]
    pub recent_companies_limit: usize,
}

fn default_recent_limit() -> usize {
    10
}

impl Default for HistorySettings {
    fn default() -> Self {
        Self {
            recent_companies_limit: default_recent_limit(),
        }
    }
}
