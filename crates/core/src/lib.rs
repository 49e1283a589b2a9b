//! Domain logic for the Teamboard project listing.
//!
//! This crate performs no I/O. It holds the project record type, the
//! date-range resolver, the filter inputs and predicate shared by both listing
//! backends, paging and sorting helpers, the in-memory backend and listing
//! engine, and the per-session selection store.

pub mod activity;
pub mod backend;
pub mod date_range;
pub mod error;
pub mod filter;
pub mod listing;
pub mod paging;
pub mod project;
pub mod selection;
pub mod sort;
pub mod types;
