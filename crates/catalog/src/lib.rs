//! Catalog-and-review domain for a sporting-goods shop.
//!
//! Four coupled sub-models, built bottom-up and owned by a single
//! [`Catalog`] aggregate:
//!
//! - [`taxonomy`]: activities and categories (each category linked to a
//!   non-empty set of activities),
//! - [`product`]: products, each bound to one activity and one category
//!   consistent with the taxonomy,
//! - [`rating`]: append-only user reviews (0–5 stars plus a comment),
//! - [`stats`]: statistics derived on demand from catalog + ratings.
//!
//! This crate is pure deterministic domain logic (no IO, no HTTP, no
//! storage). Every mutation validates all invariants up front and applies a
//! single state change, so a failed call never leaves partial state behind.

pub mod catalog;
pub mod product;
pub mod rating;
pub mod stats;
pub mod taxonomy;

pub use catalog::Catalog;
pub use product::{Product, ProductCatalog};
pub use rating::{MAX_STARS, Rating, RatingStore};
pub use stats::StarBucket;
pub use taxonomy::Taxonomy;
