//! Holocron Catalog Crate
//!
//! This crate provides read-only access to a public REST catalog of six
//! resource categories (films, people, planets, species, vehicles,
//! starships): paginated listings, detail loads, relational resolution, and
//! a debounced cross-category search.
//!
//! # Overview
//!
//! The catalog crate supports:
//! - Paginated category listings with clamped page navigation
//! - Detail loads by id or by canonical resource URL
//! - Bounded concurrent resolution of relation fields into loaded items
//! - Concurrent cross-category search with a films-first ranking
//! - Display-ready field and card transforms with sentinel handling
//!
//! # Architecture
//!
//! ```text
//! +------------------+     +------------------+
//! |  Presentation    | --> |  CatalogClient   |  (list/detail/search HTTP)
//! +------------------+     +------------------+
//!         |                        |
//!         v                        v
//! +------------------+     +------------------+
//! |  search_all /    |     |     Fetch        |  (transport seam)
//! |  SearchDebouncer |     +------------------+
//! +------------------+              |
//!         |                         v
//!         v                 +------------------+
//! +------------------+      |  external API    |
//! | resolve_related  | ---> +------------------+
//! +------------------+
//!         |
//!         v
//! +------------------+
//! |  display (cards, |
//! |  detail fields)  |
//! +------------------+
//! ```
//!
//! Everything is fetched per view and held only in memory; the crate has no
//! write path, no cache, and no retry machinery. Failures on primary loads
//! surface to the caller with a user-facing message; failures inside
//! relation resolution or one search category degrade to "less data".
//!
//! # Core Types
//!
//! - [`Category`] - The closed six-category set
//! - [`Resource`] - Category-tagged resource record
//! - [`Page`] - Paginated list envelope
//! - [`CatalogClient`] - The HTTP client over a [`Fetch`] transport
//! - [`ItemDetail`] / [`RelatedSection`] - Aggregated detail view
//! - [`SearchHit`] - Ranked cross-category search match
//! - [`CatalogError`] / [`FailureScope`] - Errors and surfacing policy

pub mod aggregate;
pub mod client;
pub mod display;
pub mod errors;
pub mod models;
pub mod search;
pub mod urls;

#[cfg(test)]
mod testutil;

// Re-export the model types
pub use models::{
    Category, Film, Page, Person, Planet, RelationList, Resource, Species, Starship, Vehicle,
    PAGE_SIZE,
};

// Re-export client types
pub use client::{clamp_page, page_window, CatalogClient, Fetch, HttpFetcher, DEFAULT_BASE_URL};

// Re-export aggregation types
pub use aggregate::{
    load_detail, resolve_homeworld, resolve_related, HomeworldRef, ItemDetail, RelatedSection,
    RELATED_FETCH_CAP,
};

// Re-export search types
pub use search::{search_all, SearchDebouncer, SearchHit, DEBOUNCE_DELAY, MIN_QUERY_LEN};

// Re-export display types
pub use display::{card_for, item_details, Card, DetailField};

// Re-export error types
pub use errors::{CatalogError, FailureScope};
