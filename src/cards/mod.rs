//! Card grid rendering for travel collections.
//!
//! A collection is shown either as a grid of cards, [`CARDS_PER_ROW`] to a
//! row, or as an empty-state call-to-action when there is nothing to show
//! (an empty list or a response body that isn't a travel list).

mod grid;
mod payload;

pub use grid::{build_grid, Card, CardGrid, CardRow};
pub use payload::{parse_payload, PayloadError};

use crate::models::{TravelEntry, TravelKind};

/// Cards per grid row.
pub const CARDS_PER_ROW: usize = 3;

/// Label of the empty-state call-to-action.
pub const GET_STARTED_LABEL: &str = "Get Started";

/// Call-to-action shown in place of the grid.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EmptyState {
    pub message: String,
    pub action_label: String,
    pub action_href: String,
}

impl EmptyState {
    pub fn for_kind(kind: TravelKind) -> Self {
        Self {
            message: kind.empty_message().to_string(),
            action_label: GET_STARTED_LABEL.to_string(),
            action_href: kind.form_path().to_string(),
        }
    }
}

/// What a collection page displays.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CardsView {
    Grid(CardGrid),
    Empty(EmptyState),
}

impl CardsView {
    /// Build the view for a list of entries.
    pub fn from_entries(kind: TravelKind, entries: &[TravelEntry]) -> Self {
        if entries.is_empty() {
            return CardsView::Empty(EmptyState::for_kind(kind));
        }
        CardsView::Grid(build_grid(kind, entries, CARDS_PER_ROW))
    }

    /// Build the view from a raw response body.
    ///
    /// A body that doesn't parse as a travel list falls back to the empty
    /// state rather than failing.
    pub fn from_body(kind: TravelKind, body: &str) -> Self {
        match parse_payload(body) {
            Ok(entries) => Self::from_entries(kind, &entries),
            Err(e) => {
                tracing::debug!("Showing empty state for {} travels: {}", kind, e);
                CardsView::Empty(EmptyState::for_kind(kind))
            }
        }
    }

    /// The header "add" button is only shown alongside a grid.
    pub fn show_add_button(&self) -> bool {
        matches!(self, CardsView::Grid(_))
    }

    pub fn card_count(&self) -> usize {
        match self {
            CardsView::Grid(grid) => grid.card_count(),
            CardsView::Empty(_) => 0,
        }
    }
}
