//! Add-entry form submission handlers.

use axum::{
    extract::State,
    http::{header, StatusCode},
    response::{IntoResponse, Response},
    Form,
};

use super::super::error::AppError;
use super::super::AppState;
use crate::models::{NewTravel, TravelKind};

pub async fn submit_next_travel(
    State(state): State<AppState>,
    Form(new): Form<NewTravel>,
) -> Result<Response, AppError> {
    submit(&state, TravelKind::Next, new).await
}

pub async fn submit_past_travel(
    State(state): State<AppState>,
    Form(new): Form<NewTravel>,
) -> Result<Response, AppError> {
    submit(&state, TravelKind::Past, new).await
}

/// Store the entry and send the browser back to the collection page (302 Found).
async fn submit(state: &AppState, kind: TravelKind, new: NewTravel) -> Result<Response, AppError> {
    state.store.add(kind, new).await?;
    Ok((StatusCode::FOUND, [(header::LOCATION, kind.page_path())]).into_response())
}
