//! Mangal Chai API library.
//!
//! The HTTP service behind the tea storefront: a product catalog and order
//! placement over a document store. Exposed as a library so the CLI can reuse
//! the store and seed logic and so the router can be tested in-process.

#![cfg_attr(not(test), forbid(unsafe_code))]

pub mod config;
pub mod db;
pub mod error;
pub mod middleware;
pub mod routes;
pub mod seed;
pub mod services;
pub mod state;
