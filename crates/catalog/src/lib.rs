//! Product catalog for the storefront.
//!
//! This crate holds the static product table and the filtering rules applied
//! to it, implemented purely as deterministic logic (no IO, no HTTP).

pub mod business;
pub mod filter;
pub mod product;

pub use business::{BusinessProfile, PricingTier, ServiceOffering, PRICING_TIERS, SERVICES};
pub use filter::{
    filter_categories, filter_products, CatalogView, CategoryButton, CategoryFilter,
    FilterCriteria,
};
pub use product::{products, Category, Product};
