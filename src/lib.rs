//! sluglink - a small URL shortener service
//!
//! Clients register a slug of their choosing against a URL, a free-text
//! address (stored as a map-search link) or a JSON profile document.
//! `GET /<slug>` redirects to the URL or returns the profile.
//!
//! # Architecture
//! - `storage`: `LinkStore` over SeaORM (SQLite, MySQL/MariaDB, PostgreSQL)
//! - `services`: validation and target derivation
//! - `api`: HTTP handlers and middleware
//! - `config`: Configuration management
//! - `runtime`: Application lifecycle and execution modes
//! - `system`: Logging setup

pub mod api;
pub mod cli;
pub mod config;
pub mod errors;
pub mod runtime;
pub mod services;
pub mod storage;
pub mod system;
pub mod utils;
