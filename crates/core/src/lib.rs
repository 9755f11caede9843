//! Clementine Core - Shared types library.
//!
//! This crate provides the common vocabulary used across all Clementine
//! components:
//! - `crm` - The application library (session, storage, view engines)
//!
//! # Architecture
//!
//! The core crate contains only types - no I/O, no storage access, no async.
//! This keeps it lightweight and allows it to be used anywhere.
//!
//! # Modules
//!
//! - [`types`] - Newtype wrappers for type-safe IDs, money, emails, and statuses

#![cfg_attr(not(test), forbid(unsafe_code))]

pub mod types;

pub use types::*;
