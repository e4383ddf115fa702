// Taqyeem state managers
// Managers handle stateful operations: the recently-visited companies
// registry, its durable store, and the view-lifecycle provider feeding it.

pub mod company_provider;
pub mod recent_companies;
pub mod recent_store;
