// Taqyeem application services
// Services provide cross-cutting functionality: settings and translations.

pub mod localization_engine;
pub mod settings_engine;
