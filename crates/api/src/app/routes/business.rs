use axum::Json;

use agrisite_catalog::{BusinessProfile, PRICING_TIERS, SERVICES};

use crate::app::dto;

pub async fn get_business() -> Json<dto::BusinessResponse> {
    let profile = BusinessProfile::get();
    Json(dto::BusinessResponse {
        profile,
        call_to_action: profile.call_to_action(),
        whatsapp_link: profile.whatsapp_link(),
        services: &SERVICES,
        pricing_tiers: &PRICING_TIERS,
    })
}
