use taqyeem::types::errors::*;

// === RegistryError Tests ===

#[test]
fn registry_error_invalid_descriptor_display() {
    let err = RegistryError::InvalidDescriptor("company id must be non-empty".to_string());
    assert_eq!(
        err.to_string(),
        "Invalid company descriptor: company id must be non-empty"
    );
}

#[test]
fn registry_error_implements_error_trait() {
    let err: Box<dyn std::error::Error> =
        Box::new(RegistryError::InvalidDescriptor("bad".to_string()));
    assert!(err.source().is_none());
}

// === StoreError Tests ===

#[test]
fn store_error_persistence_failed_display() {
    let err = StoreError::PersistenceFailed("disk full".to_string());
    assert_eq!(err.to_string(), "Persistence failed: disk full");
}

#[test]
fn store_error_implements_error_trait() {
    let err: Box<dyn std::error::Error> =
        Box::new(StoreError::PersistenceFailed("quota exceeded".to_string()));
    assert!(err.source().is_none());
}

// === SettingsError Tests ===

#[test]
fn settings_error_display_variants() {
    assert_eq!(
        SettingsError::IoError("permission denied".to_string()).to_string(),
        "Settings I/O error: permission denied"
    );
    assert_eq!(
        SettingsError::SerializationError("unexpected token".to_string()).to_string(),
        "Settings serialization error: unexpected token"
    );
    assert_eq!(
        SettingsError::InvalidKey("general.bogus".to_string()).to_string(),
        "Invalid settings key: general.bogus"
    );
    assert_eq!(
        SettingsError::InvalidValue("expected number".to_string()).to_string(),
        "Invalid settings value: expected number"
    );
}

// === LocaleError Tests ===

#[test]
fn locale_error_display_variants() {
    assert_eq!(
        LocaleError::UnsupportedLocale("fr".to_string()).to_string(),
        "Unsupported locale: fr"
    );
    assert_eq!(
        LocaleError::MissingKey("nav.missing".to_string()).to_string(),
        "Missing locale key: nav.missing"
    );
    assert_eq!(
        LocaleError::FileNotFound("locales/de.json".to_string()).to_string(),
        "Locale file not found: locales/de.json"
    );
}
