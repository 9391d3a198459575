//! Core, DOM-free primitives and helpers for the Web UI.
pub mod auth;
pub mod breakpoints;
pub mod config;
pub mod error;
pub mod nav;
pub mod search;
pub mod session;
pub mod store;
