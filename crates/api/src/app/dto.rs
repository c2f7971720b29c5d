use serde::{Deserialize, Serialize};

use agrisite_catalog::{
    BusinessProfile, CatalogView, CategoryFilter, FilterCriteria, PricingTier, Product,
    ServiceOffering,
};
use agrisite_core::DomainResult;
use agrisite_forms::{Notification, WorkflowState};

// -------------------------
// Request DTOs
// -------------------------

/// `GET /products` query string. Both parts are optional.
#[derive(Debug, Default, Deserialize)]
pub struct ProductsQuery {
    pub category: Option<String>,
    pub search: Option<String>,
}

impl ProductsQuery {
    pub fn criteria(&self) -> DomainResult<FilterCriteria> {
        let category = match self.category.as_deref() {
            None | Some("") => CategoryFilter::All,
            Some(raw) => raw.parse()?,
        };
        Ok(FilterCriteria::new(
            category,
            self.search.clone().unwrap_or_default(),
        ))
    }
}

// -------------------------
// Response DTOs
// -------------------------

#[derive(Debug, Serialize)]
pub struct CatalogResponse<'a> {
    pub criteria: &'a FilterCriteria,
    /// Any filter active; drives the "Clear Filters" affordance.
    pub filtered: bool,
    pub heading: &'static str,
    pub summary: String,
    pub count: usize,
    pub empty: bool,
    pub items: &'a [&'a Product],
}

impl<'a> CatalogResponse<'a> {
    pub fn from_view(view: &'a CatalogView<'a>) -> Self {
        Self {
            criteria: view.criteria(),
            filtered: !view.criteria().is_default(),
            heading: view.heading(),
            summary: view.summary(),
            count: view.visible().len(),
            empty: view.is_empty(),
            items: view.visible(),
        }
    }
}

#[derive(Debug, Serialize)]
pub struct BusinessResponse {
    pub profile: &'static BusinessProfile,
    pub call_to_action: String,
    pub whatsapp_link: String,
    pub services: &'static [ServiceOffering],
    pub pricing_tiers: &'static [PricingTier],
}

/// Outcome of one submission attempt, plus the form as the visitor should
/// now see it (blank after success, untouched otherwise).
#[derive(Debug, Serialize)]
pub struct SubmissionResponse<'a, F> {
    pub status: WorkflowState,
    pub notification: Option<&'a Notification>,
    pub error: Option<String>,
    pub form: &'a F,
}
