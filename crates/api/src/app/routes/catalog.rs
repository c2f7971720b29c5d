use axum::{extract::Query, http::StatusCode, response::IntoResponse, Json};

use agrisite_catalog::{filter_categories, products, CatalogView};

use crate::app::{dto, errors};

pub async fn list_categories() -> impl IntoResponse {
    Json(serde_json::json!({ "items": filter_categories() }))
}

pub async fn list_products(Query(query): Query<dto::ProductsQuery>) -> axum::response::Response {
    let criteria = match query.criteria() {
        Ok(c) => c,
        Err(e) => return errors::json_error(StatusCode::BAD_REQUEST, "invalid_category", e.to_string()),
    };

    let view = CatalogView::with_criteria(products(), criteria);
    (StatusCode::OK, Json(dto::CatalogResponse::from_view(&view))).into_response()
}
