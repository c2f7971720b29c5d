//! Catalog filtering.
//!
//! Filtering is a stable linear pass over the table: a product is visible when
//! its category matches the selected one (or "all" is selected) and the search
//! text occurs, case-insensitively, in its name or description.
//!
//! There is no implicit reactivity here. [`CatalogView`] re-derives its
//! visible list inside every setter, so whoever renders the view only ever
//! reads a list that is consistent with the current criteria.

use serde::{Deserialize, Serialize};

use agrisite_core::{DomainError, ValueObject};

use crate::product::{products, Category, Product};

/// Category half of the filter criteria.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub enum CategoryFilter {
    #[default]
    All,
    Only(Category),
}

impl CategoryFilter {
    pub const ALL_ID: &'static str = "all";

    pub fn as_str(&self) -> &'static str {
        match self {
            CategoryFilter::All => Self::ALL_ID,
            CategoryFilter::Only(c) => c.as_str(),
        }
    }

    pub fn matches(&self, category: Category) -> bool {
        match self {
            CategoryFilter::All => true,
            CategoryFilter::Only(c) => *c == category,
        }
    }
}

impl core::fmt::Display for CategoryFilter {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.write_str(self.as_str())
    }
}

impl core::str::FromStr for CategoryFilter {
    type Err = DomainError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        if s == Self::ALL_ID {
            return Ok(CategoryFilter::All);
        }
        s.parse().map(CategoryFilter::Only)
    }
}

impl TryFrom<String> for CategoryFilter {
    type Error = DomainError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        value.parse()
    }
}

impl From<CategoryFilter> for String {
    fn from(value: CategoryFilter) -> Self {
        value.as_str().to_string()
    }
}

/// Active category + search text.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize)]
pub struct FilterCriteria {
    pub category: CategoryFilter,
    pub search_text: String,
}

impl FilterCriteria {
    pub fn new(category: CategoryFilter, search_text: impl Into<String>) -> Self {
        Self {
            category,
            search_text: search_text.into(),
        }
    }

    /// Whether both halves are at their defaults ("all", "").
    pub fn is_default(&self) -> bool {
        *self == Self::default()
    }

    pub fn matches(&self, product: &Product) -> bool {
        if !self.category.matches(product.category()) {
            return false;
        }
        if self.search_text.is_empty() {
            return true;
        }
        let needle = self.search_text.to_lowercase();
        product.name().to_lowercase().contains(&needle)
            || product.description().to_lowercase().contains(&needle)
    }
}

impl ValueObject for FilterCriteria {}

/// Ordered subsequence of `products` visible under `criteria`.
///
/// Total and pure: never fails, never reorders.
pub fn filter_products<'a>(products: &'a [Product], criteria: &FilterCriteria) -> Vec<&'a Product> {
    products.iter().filter(|p| criteria.matches(p)).collect()
}

/// A category button offered to shoppers.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct CategoryButton {
    pub id: CategoryFilter,
    pub name: &'static str,
}

/// Category buttons, in display order.
///
/// Fertilizers has no button of its own; those products show under "All
/// Products" and through search.
pub fn filter_categories() -> Vec<CategoryButton> {
    let mut buttons = vec![CategoryButton {
        id: CategoryFilter::All,
        name: "All Products",
    }];
    buttons.extend(
        [
            Category::Chemicals,
            Category::Seeds,
            Category::Equipment,
            Category::Organic,
        ]
        .into_iter()
        .map(|c| CategoryButton {
            id: CategoryFilter::Only(c),
            name: c.display_name(),
        }),
    );
    buttons
}

/// Catalog page state: criteria plus the list derived from them.
#[derive(Debug, Clone)]
pub struct CatalogView<'a> {
    table: &'a [Product],
    criteria: FilterCriteria,
    visible: Vec<&'a Product>,
}

impl CatalogView<'static> {
    /// View over the built-in catalog with default criteria.
    pub fn new() -> Self {
        Self::over(products())
    }
}

impl Default for CatalogView<'static> {
    fn default() -> Self {
        Self::new()
    }
}

impl<'a> CatalogView<'a> {
    pub fn over(table: &'a [Product]) -> Self {
        Self::with_criteria(table, FilterCriteria::default())
    }

    pub fn with_criteria(table: &'a [Product], criteria: FilterCriteria) -> Self {
        let visible = filter_products(table, &criteria);
        Self {
            table,
            criteria,
            visible,
        }
    }

    pub fn criteria(&self) -> &FilterCriteria {
        &self.criteria
    }

    pub fn visible(&self) -> &[&'a Product] {
        &self.visible
    }

    /// "No results" state: the page shows a clear-filters action instead of
    /// the grid.
    pub fn is_empty(&self) -> bool {
        self.visible.is_empty()
    }

    pub fn set_category(&mut self, category: CategoryFilter) {
        self.criteria.category = category;
        self.recompute();
    }

    pub fn set_search_text(&mut self, text: impl Into<String>) {
        self.criteria.search_text = text.into();
        self.recompute();
    }

    /// Reset both criteria to their defaults.
    pub fn clear_filters(&mut self) {
        self.criteria = FilterCriteria::default();
        self.recompute();
    }

    pub fn heading(&self) -> &'static str {
        match self.criteria.category {
            CategoryFilter::All => "All Products",
            CategoryFilter::Only(c) => c.display_name(),
        }
    }

    pub fn summary(&self) -> String {
        format!("Showing {} products", self.visible.len())
    }

    fn recompute(&mut self) {
        self.visible = filter_products(self.table, &self.criteria);
    }
}
