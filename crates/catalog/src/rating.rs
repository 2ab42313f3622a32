//! Rating store: append-only user reviews per product.

use std::collections::HashMap;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use peakgear_core::{DomainError, DomainResult, Entity, RatingId};

/// Maximum star value (inclusive); ratings run 0..=`MAX_STARS`.
pub const MAX_STARS: u8 = 5;

/// A user-submitted review of one product.
///
/// Users are not deduplicated — the same user may rate the same product any
/// number of times. `id` and `submitted_at` are audit metadata; neither
/// participates in ordering or equality rules of the views.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Rating {
    id: RatingId,
    user: String,
    stars: u8,
    comment: String,
    submitted_at: DateTime<Utc>,
}

impl Rating {
    /// Build a rating, rejecting star values above [`MAX_STARS`].
    pub fn new(user: impl Into<String>, stars: u8, comment: impl Into<String>) -> DomainResult<Self> {
        if stars > MAX_STARS {
            return Err(DomainError::validation(format!(
                "star rating must be between 0 and {MAX_STARS}, got {stars}"
            )));
        }
        Ok(Self {
            id: RatingId::new(),
            user: user.into(),
            stars,
            comment: comment.into(),
            submitted_at: Utc::now(),
        })
    }

    pub fn user(&self) -> &str {
        &self.user
    }

    pub fn stars(&self) -> u8 {
        self.stars
    }

    pub fn comment(&self) -> &str {
        &self.comment
    }

    pub fn submitted_at(&self) -> DateTime<Utc> {
        self.submitted_at
    }
}

impl Entity for Rating {
    type Id = RatingId;

    fn id(&self) -> &RatingId {
        &self.id
    }
}

// The wire format of a rating in list views.
impl core::fmt::Display for Rating {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        write!(f, "{} : {}", self.stars, self.comment)
    }
}

/// Ratings bucketed per product, in insertion order.
///
/// Product names are validated by the owning [`Catalog`](crate::Catalog)
/// before anything is appended here; this store itself accepts any bucket
/// key it is handed.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct RatingStore {
    by_product: HashMap<String, Vec<Rating>>,
}

impl RatingStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Ensure an (empty) bucket exists for a newly registered product.
    pub fn register(&mut self, product: &str) {
        self.by_product.entry(product.to_owned()).or_default();
    }

    /// Append a rating to a product's bucket.
    pub fn append(&mut self, product: &str, rating: Rating) {
        self.by_product.entry(product.to_owned()).or_default().push(rating);
    }

    /// Ratings for a product in insertion order; empty for unknown or
    /// unrated products.
    pub fn ratings_for(&self, product: &str) -> &[Rating] {
        self.by_product.get(product).map(Vec::as_slice).unwrap_or_default()
    }

    /// Ratings for a product formatted as `"<stars> : <comment>"`, ordered
    /// by descending star count; ties keep insertion order (stable sort).
    pub fn ranked(&self, product: &str) -> Vec<String> {
        let mut ratings: Vec<&Rating> = self.ratings_for(product).iter().collect();
        ratings.sort_by(|a, b| b.stars.cmp(&a.stars));
        ratings.iter().map(|r| r.to_string()).collect()
    }

    pub fn has_ratings(&self, product: &str) -> bool {
        !self.ratings_for(product).is_empty()
    }

    /// Total number of ratings across all products.
    pub fn count(&self) -> usize {
        self.by_product.values().map(Vec::len).sum()
    }

    /// All ratings across all products, in no particular order.
    pub fn all(&self) -> impl Iterator<Item = &Rating> {
        self.by_product.values().flatten()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn rating(user: &str, stars: u8, comment: &str) -> Rating {
        Rating::new(user, stars, comment).unwrap()
    }

    #[test]
    fn new_accepts_full_star_range() {
        for stars in 0..=MAX_STARS {
            assert!(Rating::new("ann", stars, "ok").is_ok());
        }
    }

    #[test]
    fn new_rejects_stars_above_max() {
        let err = Rating::new("ann", MAX_STARS + 1, "too much").unwrap_err();
        assert!(matches!(err, DomainError::Validation(_)));
    }

    #[test]
    fn display_matches_list_view_format() {
        assert_eq!(rating("bob", 4, "good").to_string(), "4 : good");
    }

    #[test]
    fn ranked_sorts_by_descending_stars() {
        let mut store = RatingStore::new();
        store.append("ShoeX", rating("bob", 2, "meh"));
        store.append("ShoeX", rating("ann", 5, "great"));
        store.append("ShoeX", rating("cid", 4, "good"));

        assert_eq!(store.ranked("ShoeX"), vec!["5 : great", "4 : good", "2 : meh"]);
    }

    #[test]
    fn ranked_breaks_star_ties_by_insertion_order() {
        let mut store = RatingStore::new();
        store.append("ShoeX", rating("bob", 3, "first"));
        store.append("ShoeX", rating("ann", 5, "best"));
        store.append("ShoeX", rating("cid", 3, "second"));

        assert_eq!(
            store.ranked("ShoeX"),
            vec!["5 : best", "3 : first", "3 : second"]
        );
    }

    #[test]
    fn same_user_may_rate_a_product_twice() {
        let mut store = RatingStore::new();
        store.append("ShoeX", rating("bob", 1, "bad"));
        store.append("ShoeX", rating("bob", 5, "changed my mind"));

        assert_eq!(store.ratings_for("ShoeX").len(), 2);
        assert_eq!(store.count(), 2);
    }

    #[test]
    fn unknown_product_yields_empty_views() {
        let store = RatingStore::new();

        assert!(store.ratings_for("Ghost").is_empty());
        assert!(store.ranked("Ghost").is_empty());
        assert!(!store.has_ratings("Ghost"));
    }

    #[test]
    fn registered_but_unrated_product_has_no_ratings() {
        let mut store = RatingStore::new();
        store.register("ShoeX");

        assert!(store.ratings_for("ShoeX").is_empty());
        assert!(!store.has_ratings("ShoeX"));
        assert_eq!(store.count(), 0);
    }
}
