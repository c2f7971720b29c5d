//! Static business content shown alongside the catalog.
//!
//! The storefront once listed one phone number under contact details and a
//! different one on its call-to-action buttons. Everything here reads from a
//! single [`BusinessProfile`] so the two cannot drift apart again.

use serde::Serialize;

/// Contact details and opening hours.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct BusinessProfile {
    pub name: &'static str,
    pub address: [&'static str; 2],
    pub phone: &'static str,
    pub whatsapp: &'static str,
    pub email: &'static str,
    pub hours: [&'static str; 2],
}

impl BusinessProfile {
    pub fn get() -> &'static BusinessProfile {
        &PROFILE
    }

    /// Label for "call us" buttons.
    pub fn call_to_action(&self) -> String {
        format!("Call Now: {}", self.phone)
    }

    /// `wa.me` link for the WhatsApp button.
    pub fn whatsapp_link(&self) -> String {
        let digits: String = self.whatsapp.chars().filter(char::is_ascii_digit).collect();
        format!("https://wa.me/{digits}")
    }
}

static PROFILE: BusinessProfile = BusinessProfile {
    name: "Jagat Fertilizer and Chemical",
    address: [
        "Gata No-122, Mohamad Karimpur, Urf Dhakar",
        "Uttar Pradesh, 203131 India",
    ],
    phone: "+91 7900400900",
    whatsapp: "+91 7900400900",
    email: "info.jagatfertilizer@gmail.com",
    hours: ["Mon - Sat: 8:00 AM - 7:00 PM", "Sunday: 9:00 AM - 5:00 PM"],
};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct ServiceOffering {
    pub title: &'static str,
    pub description: &'static str,
}

pub const SERVICES: [ServiceOffering; 6] = [
    ServiceOffering {
        title: "Soil Testing & Analysis",
        description: "Professional soil testing services to determine nutrient levels, pH balance, and soil health. Get detailed reports with customized fertilizer recommendations.",
    },
    ServiceOffering {
        title: "Agro Consultancy",
        description: "Expert agricultural consultation services including crop planning, pest management strategies, and sustainable farming practices tailored to your specific needs.",
    },
    ServiceOffering {
        title: "Fast Delivery Service",
        description: "Reliable and timely delivery of all agricultural products directly to your farm. We ensure your products reach you in perfect condition when you need them.",
    },
    ServiceOffering {
        title: "Custom Fertilizer Blending",
        description: "Specialized fertilizer blending services to create custom nutrient mixes based on your soil test results and crop requirements.",
    },
    ServiceOffering {
        title: "24/7 Technical Support",
        description: "Round-the-clock technical support for all your agricultural queries. Our experts are always available to help you make informed decisions.",
    },
    ServiceOffering {
        title: "Farmer Training Programs",
        description: "Educational workshops and training programs to help farmers learn modern agricultural techniques and best practices for sustainable farming.",
    },
];

/// Wholesale discount tier by monthly purchase volume.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct PricingTier {
    pub tier: &'static str,
    pub range: &'static str,
    pub discount_percent: u8,
}

pub const PRICING_TIERS: [PricingTier; 4] = [
    PricingTier {
        tier: "Bronze",
        range: "₹50,000 - ₹1,50,000/month",
        discount_percent: 8,
    },
    PricingTier {
        tier: "Silver",
        range: "₹1,50,000 - ₹3,00,000/month",
        discount_percent: 12,
    },
    PricingTier {
        tier: "Gold",
        range: "₹3,00,000 - ₹7,50,000/month",
        discount_percent: 18,
    },
    PricingTier {
        tier: "Platinum",
        range: "Above ₹7,50,000/month",
        discount_percent: 25,
    },
];
