//! Askama template structs for the web interface.
//!
//! Each struct corresponds to an HTML template in the templates/ directory.
//! Askama provides compile-time verification that templates are valid.

use askama::Template;

use crate::cards::{CardRow, CardsView, EmptyState};
use crate::models::{TravelEntry, TravelKind};

/// Helper struct for collection links on the index page.
pub struct CollectionLink {
    pub title: &'static str,
    pub href: &'static str,
    pub count: usize,
}

fn split_view(view: CardsView) -> (Vec<CardRow>, Option<EmptyState>) {
    match view {
        CardsView::Grid(grid) => (grid.rows, None),
        CardsView::Empty(empty) => (Vec::new(), Some(empty)),
    }
}

/// Card grid (or empty state) on its own, without the page layout.
#[derive(Template)]
#[template(path = "card_grid.html")]
pub struct CardGridTemplate {
    pub rows: Vec<CardRow>,
    pub empty: Option<EmptyState>,
}

impl CardGridTemplate {
    pub fn from_view(view: CardsView) -> Self {
        let (rows, empty) = split_view(view);
        Self { rows, empty }
    }
}

/// Collection page: header with add button plus the card grid.
#[derive(Template)]
#[template(path = "travels.html")]
pub struct TravelsTemplate {
    pub title: &'static str,
    pub add_label: &'static str,
    pub form_path: &'static str,
    pub show_add_button: bool,
    pub rows: Vec<CardRow>,
    pub empty: Option<EmptyState>,
}

impl TravelsTemplate {
    pub fn new(kind: TravelKind, view: CardsView) -> Self {
        let show_add_button = view.show_add_button();
        let (rows, empty) = split_view(view);
        Self {
            title: kind.title(),
            add_label: kind.add_label(),
            form_path: kind.form_path(),
            show_add_button,
            rows,
            empty,
        }
    }
}

/// Landing page.
#[derive(Template)]
#[template(path = "index.html")]
pub struct IndexTemplate<'a> {
    pub title: &'a str,
    pub collections: Vec<CollectionLink>,
}

/// Add-entry form page.
#[derive(Template)]
#[template(path = "travel_form.html")]
pub struct TravelFormTemplate {
    pub title: &'static str,
    pub submit_path: &'static str,
    pub back_path: &'static str,
}

impl TravelFormTemplate {
    pub fn new(kind: TravelKind) -> Self {
        Self {
            title: kind.add_label(),
            submit_path: kind.submit_path(),
            back_path: kind.page_path(),
        }
    }
}

/// Single entry page.
#[derive(Template)]
#[template(path = "travel_detail.html")]
pub struct TravelDetailTemplate {
    pub title: String,
    pub description: String,
    pub created_str: String,
    pub back_path: &'static str,
    pub back_label: &'static str,
}

impl TravelDetailTemplate {
    pub fn new(kind: TravelKind, entry: TravelEntry) -> Self {
        Self {
            created_str: entry.created_at.format("%Y-%m-%d %H:%M").to_string(),
            title: entry.place,
            description: entry.description,
            back_path: kind.page_path(),
            back_label: kind.title(),
        }
    }
}

/// Error page.
#[derive(Template)]
#[template(path = "error.html")]
pub struct ErrorTemplate<'a> {
    pub title: &'a str,
    pub message: &'a str,
}
