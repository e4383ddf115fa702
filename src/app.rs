//! App Core for Taqyeem.
//!
//! Central struct holding all managers and services, managing application lifecycle.

use std::path::PathBuf;
use std::sync::Arc;

use crate::database::connection::Database;
use crate::managers::company_provider::CompanyProvider;
use crate::managers::recent_companies::RecentCompanies;
use crate::managers::recent_store::SqliteRecentStore;
use crate::platform;
use crate::services::localization_engine::LocalizationEngine;
use crate::services::settings_engine::SettingsEngine;

/// Central application struct holding all managers and services.
pub struct App {
    pub db: Arc<Database>,
    pub settings_engine: SettingsEngine,
    pub localization_engine: LocalizationEngine,
    pub recent_companies: RecentCompanies,
    /// Lifecycle binding for the currently shown company detail view.
    pub company_provider: CompanyProvider,
}

impl App {
    /// Creates a new App, initializing all managers and services.
    ///
    /// The recent-companies registry is bounded by the configured
    /// `history.recent_companies_limit` and restored from the database.
    pub fn new(db_path: &str) -> Result<Self, Box<dyn std::error::Error>> {
        let db = Arc::new(Database::open(db_path)?);

        let mut settings_engine = SettingsEngine::new(None);
        {
            use crate::services::settings_engine::SettingsEngineTrait;
            let _ = settings_engine.load();
        }

        let mut localization_engine = LocalizationEngine::new("locales");
        {
            use crate::services::localization_engine::LocalizationEngineTrait;
            let _ = localization_engine.initialize();
        }

        let limit = {
            use crate::services::settings_engine::SettingsEngineTrait;
            settings_engine.get_settings().history.recent_companies_limit
        };
        let store = SqliteRecentStore::new(db.clone());
        let recent_companies = RecentCompanies::with_limit(Box::new(store), limit);

        Ok(Self {
            db,
            settings_engine,
            localization_engine,
            recent_companies,
            company_provider: CompanyProvider::new(),
        })
    }

    /// Default location of the application database in the platform data directory.
    pub fn default_db_path() -> PathBuf {
        platform::get_data_dir().join("taqyeem.db")
    }

    /// Startup sequence: load settings, apply the preferred locale.
    ///
    /// Falls back to the detected system locale when the preferred language
    /// has no loaded locale file.
    pub fn startup(&mut self) {
        use crate::services::localization_engine::LocalizationEngineTrait;
        use crate::services::settings_engine::SettingsEngineTrait;

        let _ = self.settings_engine.load();

        let preferred = self.settings_engine.get_settings().general.language.clone();
        if self.localization_engine.set_locale(&preferred).is_err() {
            let detected = self.localization_engine.detect_system_locale();
            let _ = self.localization_engine.set_locale(&detected);
        }
    }

    /// Shutdown sequence: final best-effort flush of the recent list.
    pub fn shutdown(&mut self) {
        self.recent_companies.flush();
    }
}
