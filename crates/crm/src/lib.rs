//! Clementine CRM application library.
//!
//! This crate provides the stateful core of the CRM client as a library,
//! allowing any front end (or a test harness) to drive it:
//!
//! - [`session`] - Session lifecycle: initialize, authenticate, logout
//! - [`storage`] - Pluggable key-value persistence (memory or files)
//! - [`guard`] - Route guarding decisions for protected and login routes
//! - [`views`] - Per-screen state engines (search, filters, paging, grouping)
//! - [`sample`] - The built-in demo data set
//!
//! There is no network surface here: authentication is the demo shared
//! password against a fixed user catalog, and every collection is an owned
//! in-memory vector.

#![cfg_attr(not(test), forbid(unsafe_code))]

pub mod config;
pub mod directory;
pub mod format;
pub mod guard;
pub mod models;
pub mod sample;
pub mod services;
pub mod session;
pub mod state;
pub mod storage;
pub mod views;

pub use config::{ConfigError, CrmConfig};
pub use guard::{GuardDecision, RouteClass, route_decision};
pub use session::{SessionPhase, SessionState, SessionStore};
pub use state::AppState;
