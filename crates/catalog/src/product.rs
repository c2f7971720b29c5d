use std::collections::BTreeSet;
use std::sync::LazyLock;

use serde::{Deserialize, Serialize};

use agrisite_core::{DomainError, ValueObject};

/// Product category.
///
/// The set is closed: every catalog entry belongs to exactly one of these.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Category {
    Fertilizers,
    Chemicals,
    Seeds,
    Equipment,
    Organic,
}

impl Category {
    pub const ALL: [Category; 5] = [
        Category::Fertilizers,
        Category::Chemicals,
        Category::Seeds,
        Category::Equipment,
        Category::Organic,
    ];

    /// Stable lowercase id used in URLs and JSON.
    pub fn as_str(&self) -> &'static str {
        match self {
            Category::Fertilizers => "fertilizers",
            Category::Chemicals => "chemicals",
            Category::Seeds => "seeds",
            Category::Equipment => "equipment",
            Category::Organic => "organic",
        }
    }

    /// Human-facing label.
    pub fn display_name(&self) -> &'static str {
        match self {
            Category::Fertilizers => "Fertilizers",
            Category::Chemicals => "Chemicals",
            Category::Seeds => "Seeds",
            Category::Equipment => "Equipment",
            Category::Organic => "Organic",
        }
    }
}

impl core::fmt::Display for Category {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.write_str(self.as_str())
    }
}

impl core::str::FromStr for Category {
    type Err = DomainError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Category::ALL
            .into_iter()
            .find(|c| c.as_str() == s)
            .ok_or_else(|| DomainError::validation(format!("unknown category '{s}'")))
    }
}

/// Catalog entry.
///
/// Immutable once built; the catalog table is assembled once and only ever
/// read afterwards.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Product {
    name: String,
    description: String,
    category: Category,
    price: Option<String>,
    image: String,
    tags: BTreeSet<String>,
}

impl Product {
    pub fn new(
        name: impl Into<String>,
        description: impl Into<String>,
        category: Category,
        image: impl Into<String>,
    ) -> Self {
        Self {
            name: name.into(),
            description: description.into(),
            category,
            price: None,
            image: image.into(),
            tags: BTreeSet::new(),
        }
    }

    pub fn with_price(mut self, price: impl Into<String>) -> Self {
        self.price = Some(price.into());
        self
    }

    pub fn with_tags<I, S>(mut self, tags: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.tags.extend(tags.into_iter().map(Into::into));
        self
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn description(&self) -> &str {
        &self.description
    }

    pub fn category(&self) -> Category {
        self.category
    }

    /// Display price (e.g. `"$15"`), if the product has one.
    pub fn price(&self) -> Option<&str> {
        self.price.as_deref()
    }

    /// Path of the product image on the static asset host.
    pub fn image(&self) -> &str {
        &self.image
    }

    pub fn tags(&self) -> &BTreeSet<String> {
        &self.tags
    }
}

impl ValueObject for Product {}

static PRODUCTS: LazyLock<Vec<Product>> = LazyLock::new(build_table);

/// The full catalog, in display order.
pub fn products() -> &'static [Product] {
    &PRODUCTS
}

fn neem_cake(name: &str, image: &str, description: &str) -> Product {
    Product::new(name, description, Category::Organic, image)
        .with_price("$18")
        .with_tags(["neem", "organic", "cake"])
}

fn build_table() -> Vec<Product> {
    vec![
        Product::new(
            "American Wonder",
            "Premium NPK complex fertilizer for enhanced crop growth and yield.",
            Category::Fertilizers,
            "/products/American.png",
        )
        .with_tags(["fertilizer", "npk", "complex"]),
        Product::new(
            "Cal-Star",
            "Nutrient-rich organic vermicompost to improve soil fertility and structure.",
            Category::Organic,
            "/products/Calstar2.png",
        )
        .with_price("$15")
        .with_tags(["organic", "vermicompost"]),
        Product::new(
            "Ferric Gold",
            "Highly effective chlorpyrifos-based pesticide for pest control.",
            Category::Chemicals,
            "/products/Ferric.png",
        )
        .with_price("$30")
        .with_tags(["pesticide", "chlorpyrifos"]),
        Product::new(
            "Ferrous Sulphate",
            "High-yield hybrid tomato seeds enriched with ferrous nutrients.",
            Category::Seeds,
            "/products/Ferrous.png",
        )
        .with_price("$10")
        .with_tags(["seeds", "tomato", "hybrid"]),
        Product::new(
            "Humic Fast",
            "Fast-acting humic acid fertilizer that boosts nutrient absorption.",
            Category::Fertilizers,
            "/products/Humic.png",
        )
        .with_price("$25")
        .with_tags(["urea", "nitrogen", "fertilizer"]),
        Product::new(
            "Mahabalwan",
            "Durable and efficient agricultural sprayer ideal for field operations.",
            Category::Equipment,
            "/products/Maha.png",
        )
        .with_price("$120")
        .with_tags(["equipment", "sprayer"]),
        Product::new(
            "Mahabalwan Aloo Special",
            "Glyphosate-based herbicide specially formulated for potato crops.",
            Category::Chemicals,
            "/products/MahaBalwan.png",
        )
        .with_price("$35")
        .with_tags(["glyphosate", "herbicide"]),
        Product::new(
            "Soil Power",
            "Balanced DAP fertilizer that strengthens soil productivity.",
            Category::Fertilizers,
            "/products/Soil.png",
        )
        .with_price("$22")
        .with_tags(["dap", "fertilizer"]),
        neem_cake(
            "Start Up",
            "/products/Start.png",
            "Organic neem cake fertilizer ideal for boosting soil microbes.",
        ),
        neem_cake(
            "Sumo Gold",
            "/products/Sumo.png",
            "Powerful neem-based organic fertilizer to improve plant immunity.",
        ),
        neem_cake(
            "Super King",
            "/products/Super.png",
            "Neem-rich organic solution to support healthy plant development.",
        ),
        neem_cake(
            "Tejas Power",
            "/products/Tejas.png",
            "Organic nutrient booster designed to energize soil and roots.",
        ),
        neem_cake(
            "Vardan",
            "/products/Vardan.png",
            "Natural neem fertilizer that promotes strong plant growth organically.",
        ),
        neem_cake(
            "Zoom",
            "/products/Zoom.png",
            "Fast-acting neem-based organic cake to enhance soil nutrition.",
        ),
        neem_cake(
            "Ajooba",
            "/products/Ajooba.png",
            "Trusted organic neem fertilizer for eco-friendly agriculture.",
        ),
        neem_cake(
            "Re-Life",
            "/products/ReLife.png",
            "Rejuvenating neem organic product to enrich soil health and vitality.",
        ),
    ]
}
