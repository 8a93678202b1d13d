//! HTTP server application for cotacao.
//!
//! Exposes `GET /quote` (the bid of the latest USD-BRL rate, fetched under
//! the request deadline and persisted best-effort after the response) and
//! `GET /health`.

pub mod api;
pub mod config;
pub mod error;
pub mod main_lib;

pub use main_lib::{build_state, AppState};
