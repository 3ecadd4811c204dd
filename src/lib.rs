//! Recipes API - a recipe store fronted by a cache-aside layer
//!
//! Serves and mutates recipe records backed by a document store, with a
//! read-through/write-invalidate side-cache and session-based
//! authentication gating the mutating routes.

pub mod api;
pub mod cache;
pub mod config;
pub mod error;
pub mod models;
pub mod service;
pub mod session;
pub mod store;
pub mod tasks;

pub use api::AppState;
pub use config::Config;
pub use tasks::spawn_cleanup_task;
