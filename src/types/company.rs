use serde::{Deserialize, Serialize};

/// Snapshot of a company's display data taken at the moment of a visit.
///
/// Later changes to the company elsewhere do not retroactively mutate
/// stored history entries; a revisit stores a fresh snapshot.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CompanyDescriptor {
    /// Unique, non-empty company identifier supplied by the host application.
    pub id: String,
    /// Display name at visit time.
    pub name: String,
    /// Logo URI at visit time.
    pub logo: String,
    /// Aggregate rating in [0, 5] at visit time.
    pub rating: f64,
    /// Business domain/sector label (e.g. "telecom", "banking").
    pub domain: String,
}
