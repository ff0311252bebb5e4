//! HTTP request handlers for the web server.

mod api;
mod forms;
mod pages;
mod static_files;

// Re-export handlers for use by the router
pub use api::{next_travel_cards, past_travel_cards};
pub use forms::{submit_next_travel, submit_past_travel};
pub use pages::{
    index, next_travel_form, next_travels_page, past_travel_form, past_travels_page,
    travel_detail,
};
pub use static_files::{serve_asset, serve_css};
