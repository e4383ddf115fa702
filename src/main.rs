//! Taqyeem — client core for a bilingual Arabic/English company-review app.
//!
//! Entry point: runs an interactive console demo walking through every
//! component on an in-memory database.

use std::cell::RefCell;
use std::rc::Rc;

fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("info")),
        )
        .init();

    println!();
    println!("╔══════════════════════════════════════════════════════════════╗");
    println!("║                 Taqyeem v{} — Demo Mode                   ║", env!("CARGO_PKG_VERSION"));
    println!("║      Bilingual AR/EN company-review client core            ║");
    println!("╚══════════════════════════════════════════════════════════════╝");
    println!();

    demo_database();
    demo_settings();
    demo_localization();
    demo_recent_store();
    demo_recent_companies();
    demo_company_provider();
    demo_app_core();

    println!();
    println!("═══════════════════════════════════════════════════════════════");
    println!("  ✅ All 7 components demonstrated successfully!");
    println!("═══════════════════════════════════════════════════════════════");
}

fn section(name: &str) {
    println!("───────────────────────────────────────────────────────────────");
    println!("  📦 {}", name);
    println!("───────────────────────────────────────────────────────────────");
}

/// A small fixed roster of companies used throughout the demo.
fn sample_company(id: &str, name: &str, rating: f64, domain: &str) -> taqyeem::types::company::CompanyDescriptor {
    taqyeem::types::company::CompanyDescriptor {
        id: id.to_string(),
        name: name.to_string(),
        logo: format!("https://cdn.example.com/logos/{}.png", id),
        rating,
        domain: domain.to_string(),
    }
}

fn demo_database() {
    use taqyeem::database::connection::Database;
    section("Database Layer");

    let db = Database::open_in_memory().expect("Failed to open database");
    let tables: Vec<String> = {
        let conn = db.connection();
        let mut stmt = conn
            .prepare("SELECT name FROM sqlite_master WHERE type='table' ORDER BY name")
            .unwrap();
        stmt.query_map([], |row| row.get(0))
            .unwrap()
            .filter_map(|r| r.ok())
            .collect()
    };
    println!("  Created {} tables: {}", tables.len(), tables.join(", "));
    println!("  ✓ Database + migrations OK");
    println!();
}

fn demo_settings() {
    use taqyeem::services::settings_engine::{SettingsEngine, SettingsEngineTrait};
    section("Settings Engine");

    let mut engine = SettingsEngine::new(Some("demo_settings.json".to_string()));
    let settings = engine.load().unwrap();
    println!("  Language: {}", settings.general.language);
    println!("  Fallback: {}", settings.general.fallback_language);
    println!("  Recent companies limit: {}", settings.history.recent_companies_limit);

    engine.set_value("history.recent_companies_limit", serde_json::json!(5)).unwrap();
    println!("  Changed limit to: {}", engine.get_settings().history.recent_companies_limit);

    engine.reset().unwrap();
    println!("  Reset to defaults: limit = {}", engine.get_settings().history.recent_companies_limit);
    let _ = std::fs::remove_file("demo_settings.json");
    println!("  ✓ SettingsEngine OK");
    println!();
}

fn demo_localization() {
    use std::collections::HashMap;
    use taqyeem::services::localization_engine::{LocalizationEngine, LocalizationEngineTrait};
    section("Localization Engine (AR/EN)");

    let mut engine = LocalizationEngine::new("locales");
    engine.initialize().unwrap();

    // Arabic
    engine.set_locale("ar").unwrap();
    println!("  [AR] {} (rtl={})", engine.t("nav.companies", None), engine.is_rtl());
    println!("  [AR] 0: {}", engine.plural("common.companies", 0, None));
    println!("  [AR] 1: {}", engine.plural("common.companies", 1, None));
    println!("  [AR] 2: {}", engine.plural("common.companies", 2, None));
    println!("  [AR] 7: {}", engine.plural("common.companies", 7, None));
    println!("  [AR] 15: {}", engine.plural("common.companies", 15, None));

    // English
    engine.set_locale("en").unwrap();
    println!("  [EN] {} (rtl={})", engine.t("nav.companies", None), engine.is_rtl());
    println!("  [EN] 1: {}", engine.plural("common.companies", 1, None));
    println!("  [EN] 7: {}", engine.plural("common.companies", 7, None));

    let mut params = HashMap::new();
    params.insert("rating".to_string(), "4.5".to_string());
    println!("  [EN] {}", engine.t("company.rating", Some(&params)));
    println!("  Available locales: {:?}", engine.get_available_locales());
    println!("  ✓ LocalizationEngine OK");
    println!();
}

fn demo_recent_store() {
    use std::sync::Arc;
    use taqyeem::database::connection::Database;
    use taqyeem::managers::recent_store::{RecentStore, SqliteRecentStore};
    section("Recent Store (SQLite)");

    let db = Arc::new(Database::open_in_memory().unwrap());
    let store = SqliteRecentStore::new(db.clone());

    println!("  Fresh store: {} entries (key = {})", store.load().len(), store.key());

    let list = vec![
        sample_company("acme", "Acme Telecom", 4.2, "telecom"),
        sample_company("nile-bank", "Nile Bank", 3.8, "banking"),
    ];
    store.save(&list).unwrap();
    println!("  Saved {} entries", list.len());

    let restored = store.load();
    println!("  Restored {} entries, first = {}", restored.len(), restored[0].name);

    let scoped = SqliteRecentStore::for_profile(db, "user-42");
    println!("  Profile store key = {}, entries = {}", scoped.key(), scoped.load().len());
    println!("  ✓ RecentStore OK");
    println!();
}

fn demo_recent_companies() {
    use std::sync::Arc;
    use taqyeem::database::connection::Database;
    use taqyeem::managers::recent_companies::{RecentCompanies, RecentCompaniesTrait};
    use taqyeem::managers::recent_store::SqliteRecentStore;
    section("Recently-Visited Registry");

    let db = Arc::new(Database::open_in_memory().unwrap());
    let store = SqliteRecentStore::new(db);
    let mut registry = RecentCompanies::with_limit(Box::new(store), 3);

    let notifications = Rc::new(RefCell::new(0u32));
    let n = notifications.clone();
    let token = registry.subscribe(Box::new(move |_| *n.borrow_mut() += 1));

    registry.add_company(sample_company("acme", "Acme Telecom", 4.2, "telecom")).unwrap();
    registry.add_company(sample_company("nile-bank", "Nile Bank", 3.8, "banking")).unwrap();
    registry.add_company(sample_company("sahara-air", "Sahara Air", 4.7, "airlines")).unwrap();
    registry.add_company(sample_company("qahwa", "Qahwa Chain", 4.0, "food")).unwrap();
    let ids: Vec<String> = registry.get_list().iter().map(|c| c.id.clone()).collect();
    println!("  Added 4 companies with limit 3 -> {:?}", ids);

    registry.add_company(sample_company("nile-bank", "Nile Bank", 3.9, "banking")).unwrap();
    let ids: Vec<String> = registry.get_list().iter().map(|c| c.id.clone()).collect();
    println!("  Revisited nile-bank -> {:?} (rating now {})", ids, registry.get_list()[0].rating);

    let bad = registry.add_company(sample_company("", "Ghost Inc", 1.0, "unknown"));
    println!("  Empty-id descriptor: {}", if bad.is_err() { "correctly rejected" } else { "ERROR" });

    println!("  Subscriber notified {} time(s)", notifications.borrow());
    registry.unsubscribe(token);

    registry.clear();
    println!("  Cleared: {} entries, persist failures = {}", registry.len(), registry.persist_failures());
    println!("  ✓ RecentCompanies OK");
    println!();
}

fn demo_company_provider() {
    use std::sync::Arc;
    use taqyeem::database::connection::Database;
    use taqyeem::managers::company_provider::CompanyProvider;
    use taqyeem::managers::recent_companies::{RecentCompanies, RecentCompaniesTrait};
    use taqyeem::managers::recent_store::SqliteRecentStore;
    section("Company Provider (view lifecycle)");

    let db = Arc::new(Database::open_in_memory().unwrap());
    let mut registry = RecentCompanies::new(Box::new(SqliteRecentStore::new(db)));
    let mut provider = CompanyProvider::new();

    let acme = sample_company("acme", "Acme Telecom", 4.2, "telecom");
    let registered = provider.company_shown(&mut registry, &acme).unwrap();
    println!("  Mount with acme: registered = {}", registered);

    let registered = provider.company_shown(&mut registry, &acme).unwrap();
    println!("  Re-render with acme: registered = {} (no recency bump)", registered);

    let bank = sample_company("nile-bank", "Nile Bank", 3.8, "banking");
    let registered = provider.company_shown(&mut registry, &bank).unwrap();
    println!("  Navigate to nile-bank: registered = {}", registered);

    println!("  Registry now has {} entries", registry.len());
    provider.reset();
    println!("  Provider reset (unmount), last id = {:?}", provider.last_registered_id());
    println!("  ✓ CompanyProvider OK");
    println!();
}

fn demo_app_core() {
    use taqyeem::app::App;
    section("App Core (full lifecycle)");

    let mut app = App::new(":memory:").unwrap();
    println!("  Initialized App (default db would be {:?})", App::default_db_path());

    app.startup();
    println!("  Startup sequence: settings → locale");

    app.shutdown();
    println!("  Shutdown sequence: flush recent list");
    println!("  ✓ App Core OK");
}
