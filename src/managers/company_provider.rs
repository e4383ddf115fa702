//! View-lifecycle binding between a company detail view and the registry.
//!
//! Registers the shown company exactly once per distinct company id:
//! re-renders with the same company do not bump recency again, while an
//! identity change (navigating between company pages without unmounting)
//! triggers a fresh registration.

use crate::managers::recent_companies::RecentCompaniesTrait;
use crate::types::company::CompanyDescriptor;
use crate::types::errors::RegistryError;

/// State machine keyed by the last registered company id.
pub struct CompanyProvider {
    last_registered_id: Option<String>,
}

impl CompanyProvider {
    /// Creates a provider for a freshly mounted view.
    pub fn new() -> Self {
        Self {
            last_registered_id: None,
        }
    }

    /// Called by the host view on every mount/re-render with the company
    /// currently shown.
    ///
    /// Invokes `add_company` only when the incoming id differs from the last
    /// registered one. Returns `Ok(true)` when a registration happened,
    /// `Ok(false)` when the call was a same-identity re-render.
    ///
    /// A rejected descriptor leaves the provider state unchanged, so a
    /// corrected descriptor for the same view still registers.
    pub fn company_shown(
        &mut self,
        registry: &mut dyn RecentCompaniesTrait,
        company: &CompanyDescriptor,
    ) -> Result<bool, RegistryError> {
        if self.last_registered_id.as_deref() == Some(company.id.as_str()) {
            return Ok(false);
        }
        registry.add_company(company.clone())?;
        self.last_registered_id = Some(company.id.clone());
        Ok(true)
    }

    /// Id of the last company registered through this provider, if any.
    pub fn last_registered_id(&self) -> Option<&str> {
        self.last_registered_id.as_deref()
    }

    /// Resets the provider, modelling an unmount/remount of the view.
    /// No registry action is taken on unmount itself.
    pub fn reset(&mut self) {
        self.last_registered_id = None;
    }
}

impl Default for CompanyProvider {
    fn default() -> Self {
        Self::new()
    }
}
