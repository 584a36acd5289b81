//! # Hostmap Backend
//!
//! Olympic host location dashboard engine.
//!
//! This crate serves two near-duplicate single-page dashboards that show the
//! recent Olympic Games host locations as a scrollable card list next to an
//! interactive map. Clicking a card or a marker highlights the row in both
//! views and recenters the map; all of that state lives server-side and is
//! exposed over a small REST API via Axum.
//!
//! ## Features
//!
//! - **Data Loading**: Built-in location table, or a CSV file with fallback
//! - **Selection**: One explicit selection slot per dashboard, click-driven
//! - **View Rendering**: Pure derivation of the full list/map render state
//! - **HTTP API**: RESTful endpoints plus the embedded dashboard pages
//!
//! ## Architecture
//!
//! The crate is organized into several logical modules:
//!
//! - [`api`]: Core record types and DTO re-exports
//! - [`catalog`]: The immutable location table and its loaders
//! - [`services`]: Selection state and view-model computation
//! - [`routes`]: Route-specific data types
//! - [`http`]: Axum-based HTTP server and request handlers
//! - [`html`]: Embedded dashboard pages
//! - [`config`]: Environment and TOML file configuration

pub mod api;

pub mod catalog;
pub mod config;

pub mod routes;

pub mod services;

pub mod html;
pub mod http;
