//! Mangal Chai Core - Shared domain types.
//!
//! This crate provides the types shared by every Mangal Chai component:
//! - `api` - The catalog and ordering HTTP service
//! - `cli` - Command-line tools for migrations and seeding
//!
//! # Architecture
//!
//! The core crate contains only types and validation - no I/O, no database
//! access, no HTTP. Records here are exactly what the document store persists
//! and what the API serializes.
//!
//! # Modules
//!
//! - [`types`] - Identifiers, prices, statuses, products and orders

#![cfg_attr(not(test), forbid(unsafe_code))]

pub mod types;

pub use types::*;
