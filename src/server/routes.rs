//! Router configuration for the web server.

use axum::{
    routing::{get, post},
    Router,
};
use tower_http::cors::CorsLayer;
use tower_http::trace::TraceLayer;

use super::handlers;
use super::AppState;

/// Create the main router with all routes.
pub fn create_router(state: AppState) -> Router {
    Router::new()
        .route("/", get(handlers::index))
        // Next travel ideas
        .route("/NextTravelIdeas", get(handlers::next_travels_page))
        .route("/TravelIdeasCards", get(handlers::next_travel_cards))
        .route("/NextTravelForm", get(handlers::next_travel_form))
        .route("/SubmitNewTravelIdea", post(handlers::submit_next_travel))
        // Past travels
        .route("/PastTravels", get(handlers::past_travels_page))
        .route("/PastTravelsCards", get(handlers::past_travel_cards))
        .route("/PastTravelForm", get(handlers::past_travel_form))
        .route("/SubmitPastTravel", post(handlers::submit_past_travel))
        // Card "View" links
        .route("/travels/:kind/:id", get(handlers::travel_detail))
        // Static assets
        .route("/static/style.css", get(handlers::serve_css))
        .route("/assets/*path", get(handlers::serve_asset))
        .layer(TraceLayer::new_for_http())
        .layer(CorsLayer::permissive())
        .with_state(state)
}
