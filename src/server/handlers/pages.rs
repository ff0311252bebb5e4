//! HTML page handlers.

use askama::Template;
use axum::{
    extract::{Path, State},
    response::Html,
};
use uuid::Uuid;

use super::super::error::AppError;
use super::super::template_structs::{
    CollectionLink, IndexTemplate, TravelDetailTemplate, TravelFormTemplate, TravelsTemplate,
};
use super::super::AppState;
use crate::cards::CardsView;
use crate::models::TravelKind;

/// Landing page linking both collections.
pub async fn index(State(state): State<AppState>) -> Result<Html<String>, AppError> {
    let mut collections = Vec::with_capacity(TravelKind::ALL.len());
    for kind in TravelKind::ALL {
        collections.push(CollectionLink {
            title: kind.title(),
            href: kind.page_path(),
            count: state.store.count(kind).await,
        });
    }

    let template = IndexTemplate {
        title: "Travel Journal",
        collections,
    };
    Ok(Html(template.render()?))
}

pub async fn next_travels_page(State(state): State<AppState>) -> Result<Html<String>, AppError> {
    travels_page(&state, TravelKind::Next).await
}

pub async fn past_travels_page(State(state): State<AppState>) -> Result<Html<String>, AppError> {
    travels_page(&state, TravelKind::Past).await
}

async fn travels_page(state: &AppState, kind: TravelKind) -> Result<Html<String>, AppError> {
    let entries = state.store.list(kind).await;
    let view = CardsView::from_entries(kind, &entries);
    Ok(Html(TravelsTemplate::new(kind, view).render()?))
}

pub async fn next_travel_form() -> Result<Html<String>, AppError> {
    Ok(Html(TravelFormTemplate::new(TravelKind::Next).render()?))
}

pub async fn past_travel_form() -> Result<Html<String>, AppError> {
    Ok(Html(TravelFormTemplate::new(TravelKind::Past).render()?))
}

/// Detail page for a single entry, the target of a card's "View" link.
pub async fn travel_detail(
    State(state): State<AppState>,
    Path((kind, id)): Path<(String, String)>,
) -> Result<Html<String>, AppError> {
    let kind = TravelKind::from_slug(&kind)
        .ok_or_else(|| AppError::NotFound(format!("No travel collection named '{}'", kind)))?;
    let id = Uuid::parse_str(&id)
        .map_err(|_| AppError::NotFound(format!("Travel entry '{}' not found", id)))?;

    let entry = state
        .store
        .get(kind, &id)
        .await
        .ok_or_else(|| AppError::NotFound(format!("Travel entry '{}' not found", id)))?;

    Ok(Html(TravelDetailTemplate::new(kind, entry).render()?))
}
