//! Travel Journal - keep track of where you want to go and where you've been.
//!
//! Serves two collections of travel entries (next travel ideas and past
//! travels) as card grids, JSON endpoints, and add-entry forms.

pub mod cards;
pub mod cli;
pub mod client;
pub mod config;
pub mod models;
pub mod server;
pub mod store;
