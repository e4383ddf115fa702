use std::collections::HashMap;
use std::fs;
use std::path::PathBuf;

use serde_json::Value;

use crate::types::errors::LocaleError;

/// Supported locales.
const SUPPORTED_LOCALES: &[&str] = &["ar", "en"];

/// Default locale when system locale is not supported.
const DEFAULT_LOCALE: &str = "en";

/// Locales rendered right-to-left.
const RTL_LOCALES: &[&str] = &["ar"];

/// Trait defining the localization engine interface.
pub trait LocalizationEngineTrait {
    fn initialize(&mut self) -> Result<(), LocaleError>;
    fn set_locale(&mut self, lang: &str) -> Result<(), LocaleError>;
    fn get_locale(&self) -> &str;
    fn is_rtl(&self) -> bool;
    fn t(&self, key: &str, params: Option<&HashMap<String, String>>) -> String;
    fn plural(&self, key: &str, count: u64, params: Option<&HashMap<String, String>>) -> String;
    fn detect_system_locale(&self) -> String;
    fn get_available_locales(&self) -> Vec<String>;
}

/// Localization engine managing translations for Arabic and English.
pub struct LocalizationEngine {
    /// Current active locale (e.g., "ar" or "en").
    current_locale: String,
    /// Loaded locale data: maps locale name to its parsed JSON value.
    locales: HashMap<String, Value>,
    /// Path to the directory containing locale JSON files.
    locales_dir: PathBuf,
}

impl LocalizationEngine {
    /// Creates a new LocalizationEngine with the given locales directory path.
    pub fn new(locales_dir: impl Into<PathBuf>) -> Self {
        Self {
            current_locale: DEFAULT_LOCALE.to_string(),
            locales: HashMap::new(),
            locales_dir: locales_dir.into(),
        }
    }

    /// Creates a new LocalizationEngine using the default `locales/` directory.
    pub fn with_default_path() -> Self {
        Self::new("locales")
    }

    /// Looks up a nested key in a JSON value using dot notation.
    /// For example, "nav.companies" looks up `value["nav"]["companies"]`.
    fn lookup_key<'a>(data: &'a Value, key: &str) -> Option<&'a Value> {
        let parts: Vec<&str> = key.split('.').collect();
        let mut current = data;
        for part in parts {
            match current.get(part) {
                Some(val) => current = val,
                None => return None,
            }
        }
        Some(current)
    }

    /// Replaces `{param_name}` placeholders in a string with values from the params map.
    fn interpolate(template: &str, params: &HashMap<String, String>) -> String {
        let mut result = template.to_string();
        for (key, value) in params {
            let placeholder = format!("{{{}}}", key);
            result = result.replace(&placeholder, value);
        }
        result
    }

    /// Determines the Arabic plural form for a given count (CLDR rules).
    /// Returns one of: "zero", "one", "two", "few", "many", "other".
    fn arabic_plural_form(count: u64) -> &'static str {
        let mod100 = count % 100;

        if count == 0 {
            "zero"
        } else if count == 1 {
            "one"
        } else if count == 2 {
            "two"
        } else if (3..=10).contains(&mod100) {
            "few"
        } else if (11..=99).contains(&mod100) {
            "many"
        } else {
            "other"
        }
    }

    /// Determines the English plural form for a given count.
    /// Returns one of: "one", "other".
    fn english_plural_form(count: u64) -> &'static str {
        if count == 1 {
            "one"
        } else {
            "other"
        }
    }

    /// Returns the plural form suffix for the current locale.
    fn get_plural_form(&self, count: u64) -> &'static str {
        match self.current_locale.as_str() {
            "ar" => Self::arabic_plural_form(count),
            _ => Self::english_plural_form(count),
        }
    }
}

impl LocalizationEngineTrait for LocalizationEngine {
    /// Loads all locale JSON files from the locales directory.
    fn initialize(&mut self) -> Result<(), LocaleError> {
        let dir = &self.locales_dir;

        if !dir.exists() {
            return Err(LocaleError::FileNotFound(
                dir.to_string_lossy().to_string(),
            ));
        }

        for locale in SUPPORTED_LOCALES {
            let file_path = dir.join(format!("{}.json", locale));
            if file_path.exists() {
                let content = fs::read_to_string(&file_path).map_err(|e| {
                    LocaleError::FileNotFound(format!(
                        "{}: {}",
                        file_path.to_string_lossy(),
                        e
                    ))
                })?;
                let data: Value = serde_json::from_str(&content).map_err(|e| {
                    LocaleError::FileNotFound(format!(
                        "Failed to parse {}: {}",
                        file_path.to_string_lossy(),
                        e
                    ))
                })?;
                self.locales.insert(locale.to_string(), data);
            }
        }

        // At least one locale must be loaded
        if self.locales.is_empty() {
            return Err(LocaleError::FileNotFound(
                "No locale files found".to_string(),
            ));
        }

        Ok(())
    }

    /// Switches the active locale. Returns an error if the locale is not supported
    /// or not loaded.
    fn set_locale(&mut self, lang: &str) -> Result<(), LocaleError> {
        if !SUPPORTED_LOCALES.contains(&lang) {
            return Err(LocaleError::UnsupportedLocale(lang.to_string()));
        }
        if !self.locales.contains_key(lang) {
            return Err(LocaleError::FileNotFound(format!(
                "Locale '{}' not loaded",
                lang
            )));
        }
        self.current_locale = lang.to_string();
        Ok(())
    }

    /// Returns the current active locale.
    fn get_locale(&self) -> &str {
        &self.current_locale
    }

    /// Returns true when the active locale renders right-to-left.
    fn is_rtl(&self) -> bool {
        RTL_LOCALES.contains(&self.current_locale.as_str())
    }

    /// Looks up a translation key using dot notation and optionally interpolates parameters.
    /// Returns the key itself if the translation is not found.
    fn t(&self, key: &str, params: Option<&HashMap<String, String>>) -> String {
        let data = match self.locales.get(&self.current_locale) {
            Some(d) => d,
            None => return key.to_string(),
        };

        let value = match Self::lookup_key(data, key) {
            Some(v) => v,
            None => return key.to_string(),
        };

        let text = match value.as_str() {
            Some(s) => s.to_string(),
            None => return key.to_string(),
        };

        match params {
            Some(p) => Self::interpolate(&text, p),
            None => text,
        }
    }

    /// Looks up a pluralized translation key. The base key is appended with the
    /// appropriate plural suffix (e.g., "_zero", "_one", "_two", "_few",
    /// "_many", "_other") based on the count and current locale's plural rules.
    /// A `{count}` parameter is automatically added to the params.
    fn plural(&self, key: &str, count: u64, params: Option<&HashMap<String, String>>) -> String {
        let form = self.get_plural_form(count);
        let plural_key = format!("{}_{}", key, form);

        // Build params with count included
        let mut merged_params = match params {
            Some(p) => p.clone(),
            None => HashMap::new(),
        };
        merged_params
            .entry("count".to_string())
            .or_insert_with(|| count.to_string());

        // Try the specific plural form first
        let result = self.t(&plural_key, Some(&merged_params));

        // If the specific form wasn't found, try "_other" as fallback
        if result == plural_key {
            let other_key = format!("{}_other", key);
            let other_result = self.t(&other_key, Some(&merged_params));
            if other_result == other_key {
                // If even "_other" is not found, return the base key
                return key.to_string();
            }
            return other_result;
        }

        result
    }

    /// Detects the system locale by reading the `LANG` environment variable.
    /// Returns the language code (e.g., "ar" or "en"). Falls back to "en"
    /// if the system locale is not supported.
    fn detect_system_locale(&self) -> String {
        let lang = std::env::var("LANG").unwrap_or_default();

        // LANG is typically like "ar_SA.UTF-8" or "en_US.UTF-8"
        let lang_code = lang
            .split('_')
            .next()
            .unwrap_or("")
            .split('.')
            .next()
            .unwrap_or("");

        if SUPPORTED_LOCALES.contains(&lang_code) {
            lang_code.to_string()
        } else {
            DEFAULT_LOCALE.to_string()
        }
    }

    /// Returns a list of all available (loaded) locales.
    fn get_available_locales(&self) -> Vec<String> {
        let mut locales: Vec<String> = self.locales.keys().cloned().collect();
        locales.sort();
        locales
    }
}
