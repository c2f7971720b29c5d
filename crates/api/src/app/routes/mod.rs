use axum::{
    routing::{get, post},
    Router,
};

pub mod business;
pub mod catalog;
pub mod forms;
pub mod system;

/// Router for the public storefront endpoints.
pub fn router() -> Router {
    Router::new()
        .route("/categories", get(catalog::list_categories))
        .route("/products", get(catalog::list_products))
        .route("/business", get(business::get_business))
        .route("/contact", post(forms::submit_contact))
        .route("/wholesaler", post(forms::submit_wholesaler))
}
