//! ComXStore Core - Domain types and derived-view logic.
//!
//! This crate provides the types and pure functions shared by every ComXStore
//! component:
//! - `server` - Storefront and admin JSON API backed by the mock store
//! - `cli` - Command-line inspection of the seeded catalog
//!
//! # Architecture
//!
//! The core crate contains only types and pure functions - no I/O, no clocks
//! beyond timestamps passed in, no shared state. Every view the storefront or
//! admin console renders is derived here from plain slices.
//!
//! # Modules
//!
//! - [`types`] - Newtype IDs, prices, currencies, statuses and roles
//! - [`models`] - Products, categories, orders, customers, store profile
//! - [`catalog`] - Category/search filtering and the sortable product table
//! - [`cart`] - Cart lines, totals and checkout drafting
//! - [`order`] - Order status changes and the status filter
//! - [`dashboard`] - Admin dashboard summary
//! - [`format`] - Currency and date display

#![cfg_attr(not(test), forbid(unsafe_code))]

pub mod cart;
pub mod catalog;
pub mod dashboard;
pub mod format;
pub mod models;
pub mod order;
pub mod types;

pub use models::*;
pub use types::*;
