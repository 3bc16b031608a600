// src/routes.rs

use axum::{
    Router,
    routing::{get, post},
};
use utoipa::OpenApi;
use utoipa_swagger_ui::SwaggerUi;

use crate::{config::AppState, docs::ApiDoc, handlers};

pub fn router(app_state: AppState) -> Router {
    let catalog_routes = Router::new()
        .route("/products"
               ,post(handlers::catalog::create_product)
               .get(handlers::catalog::list_products)
        )
        .route("/products/{id}"
               ,get(handlers::catalog::get_product)
               .put(handlers::catalog::update_product)
               .delete(handlers::catalog::delete_product)
        )
        .route("/locations"
               ,post(handlers::locations::create_location)
               .get(handlers::locations::list_locations)
        )
        .route("/locations/{id}"
               ,get(handlers::locations::get_location)
               .put(handlers::locations::update_location)
               .delete(handlers::locations::delete_location)
        );

    let inventory_routes = Router::new()
        .route("/inbound", post(handlers::inventory::inbound))
        .route("/outbound", post(handlers::inventory::outbound))
        .route("/stocktaking", post(handlers::inventory::stock_count))
        .route("/inventory", get(handlers::inventory::search_inventory))
        .route("/stock/{product_id}/{location_id}", get(handlers::inventory::get_stock_level))
        .route("/transactions", get(handlers::inventory::list_transactions));

    let dashboard_routes = Router::new()
        .route("/health", get(handlers::dashboard::health))
        .route("/dashboard", get(handlers::dashboard::get_summary));

    Router::new()
        .merge(SwaggerUi::new("/swagger-ui").url("/api-docs/openapi.json", ApiDoc::openapi()))
        .nest(
            "/api",
            dashboard_routes.merge(catalog_routes).merge(inventory_routes),
        )
        .with_state(app_state)
}
