//! Portfolio Frontend
//!
//! Data sources, portfolio state and the Leptos components that render it.

pub mod api;
pub mod app;
pub mod components;
pub mod config;
pub mod context;
pub mod data;
pub mod error;
pub mod interaction;
pub mod markdown;
pub mod models;
pub mod route;
pub mod state;
pub mod store;
pub mod views;
