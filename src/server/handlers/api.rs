//! JSON card endpoints.

use axum::{extract::State, Json};

use super::super::AppState;
use crate::models::{TravelEntry, TravelKind};

/// Next travel ideas as a JSON array.
pub async fn next_travel_cards(State(state): State<AppState>) -> Json<Vec<TravelEntry>> {
    Json(state.store.list(TravelKind::Next).await)
}

/// Past travels as a JSON array.
pub async fn past_travel_cards(State(state): State<AppState>) -> Json<Vec<TravelEntry>> {
    Json(state.store.list(TravelKind::Past).await)
}
