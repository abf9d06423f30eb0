//! Route definitions for the WardrobeScan backend

use axum::{
    routing::{get, post, put},
    Router,
};

use crate::{handlers, AppState};

/// Create API routes
pub fn api_routes() -> Router<AppState> {
    Router::new()
        // Health check
        .route("/health", get(handlers::health_check))
        // Per-user wardrobe
        .nest("/users/:user_id/wardrobe", wardrobe_routes())
        // Per-user outfits and suggestions
        .nest("/users/:user_id/outfits", outfit_routes())
        // Weather
        .nest("/weather", weather_routes())
        // Photo analysis pipeline
        .nest("/analysis", analysis_routes())
}

/// Wardrobe item management routes
fn wardrobe_routes() -> Router<AppState> {
    Router::new()
        .route(
            "/",
            get(handlers::list_items).post(handlers::create_item),
        )
        .route(
            "/:item_id",
            get(handlers::get_item)
                .put(handlers::update_item)
                .delete(handlers::delete_item),
        )
}

/// Outfit suggestion and persistence routes
fn outfit_routes() -> Router<AppState> {
    Router::new()
        .route(
            "/",
            get(handlers::list_outfits).post(handlers::save_outfit),
        )
        .route("/suggestions", get(handlers::get_outfit_suggestions))
        .route(
            "/:outfit_id",
            put(handlers::update_outfit).delete(handlers::delete_outfit),
        )
}

/// Weather routes
fn weather_routes() -> Router<AppState> {
    Router::new().route("/current", get(handlers::get_current_weather))
}

/// Analysis pipeline routes
fn analysis_routes() -> Router<AppState> {
    Router::new()
        .route("/", post(handlers::analyze_image))
        .route("/batch", post(handlers::analyze_batch))
}
