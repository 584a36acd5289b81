//! HTTP server module for the dashboard backend.
//!
//! This module provides an axum-based HTTP server that serves the two
//! embedded dashboard pages and exposes the catalog, selection and view
//! state as a REST API. It reuses the catalog and service layers from the
//! core library.
//!
//! # Architecture
//!
//! ```text
//! ┌──────────────────────────────────────────────────────────┐
//! │  HTTP Layer (axum handlers)                               │
//! │  - Page delivery, request parsing                         │
//! │  - JSON serialization/deserialization                     │
//! │  - CORS, compression, error handling                      │
//! └───────────────────┬──────────────────────────────────────┘
//!                     │
//! ┌───────────────────▼──────────────────────────────────────┐
//! │  Service Layer (services/)                                │
//! │  - Selection slots (click handling)                       │
//! │  - View-model derivation                                  │
//! └───────────────────┬──────────────────────────────────────┘
//!                     │
//! ┌───────────────────▼──────────────────────────────────────┐
//! │  Catalog Layer (catalog/)                                 │
//! │  - Immutable location tables                              │
//! │  - Built-in defaults / CSV loading                        │
//! └──────────────────────────────────────────────────────────┘
//! ```

pub mod handlers;

pub mod router;

pub mod state;

pub mod error;

pub mod dto;

pub use router::create_router;

pub use state::AppState;
