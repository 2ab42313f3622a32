//! The owning aggregate: one [`Catalog`] per logical session.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

use peakgear_core::{DomainError, DomainResult};

use crate::product::{Product, ProductCatalog};
use crate::rating::{Rating, RatingStore};
use crate::stats::{self, StarBucket};
use crate::taxonomy::Taxonomy;

/// In-memory catalog-and-review engine.
///
/// Owns the taxonomy, product catalog, and rating store exclusively and
/// enforces the invariants that span them: a product's category must be
/// linked to its activity, and ratings may only attach to existing
/// products. Every mutation validates all invariants up front and then
/// applies a single state change, so a failed call leaves the catalog
/// untouched.
///
/// Queries return fresh snapshots; returned containers never alias
/// internal state and do not update live.
///
/// The engine is single-threaded and synchronous. Callers that need
/// shared access wrap the whole value in one `Mutex`/`RwLock` — the
/// aggregate queries read across sub-models, so one coarse lock is the
/// only consistent granularity.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Catalog {
    taxonomy: Taxonomy,
    products: ProductCatalog,
    ratings: RatingStore,
}

impl Catalog {
    pub fn new() -> Self {
        Self::default()
    }

    // --- taxonomy ---

    /// Define activities, idempotently per name. Rejects an empty slice.
    pub fn define_activities<S: AsRef<str>>(&mut self, names: &[S]) -> DomainResult<()> {
        self.taxonomy.define_activities(names)
    }

    /// All known activities, lexicographic.
    pub fn activities(&self) -> Vec<String> {
        self.taxonomy.activities()
    }

    /// Bind a category to exactly the given activities (last write wins).
    /// Every activity must already be defined.
    pub fn add_category<S: AsRef<str>>(
        &mut self,
        name: &str,
        linked_activities: &[S],
    ) -> DomainResult<()> {
        self.taxonomy.add_category(name, linked_activities)
    }

    /// Categories linked to an activity, lexicographic; unknown activity
    /// yields an empty list.
    pub fn categories_for_activity(&self, activity: &str) -> Vec<String> {
        self.taxonomy.categories_for_activity(activity)
    }

    /// Activities a category is linked to, lexicographic.
    pub fn activities_for_category(&self, category: &str) -> Vec<String> {
        self.taxonomy.activities_for_category(category)
    }

    /// Number of distinct category names ever defined.
    pub fn category_count(&self) -> usize {
        self.taxonomy.category_count()
    }

    // --- products ---

    /// Register a product bound to one activity and one category.
    ///
    /// Strict validation: the name must be free, the activity defined, and
    /// the category linked to that activity.
    pub fn add_product(&mut self, name: &str, activity: &str, category: &str) -> DomainResult<()> {
        if self.products.contains(name) {
            return Err(DomainError::duplicate(format!("product {name} already exists")));
        }
        if !self.taxonomy.is_defined(activity) {
            return Err(DomainError::validation(format!("activity {activity} does not exist")));
        }
        if !self.taxonomy.is_linked(category, activity) {
            return Err(DomainError::validation(format!(
                "category {category} is not linked to activity {activity}"
            )));
        }

        self.products.add(Product::new(name, activity, category))?;
        self.ratings.register(name);
        Ok(())
    }

    pub fn product_exists(&self, name: &str) -> bool {
        self.products.contains(name)
    }

    /// Product names in a category, lexicographic.
    pub fn products_for_category(&self, category: &str) -> Vec<String> {
        self.products.names_for_category(category)
    }

    /// Product names bound to an activity, lexicographic.
    pub fn products_for_activity(&self, activity: &str) -> Vec<String> {
        self.products.names_for_activity(activity)
    }

    /// Product names whose activity matches and whose category is in the
    /// given set (duplicate arguments collapse), lexicographic.
    pub fn products<S: AsRef<str>>(&self, activity: &str, categories: &[S]) -> Vec<String> {
        self.products.names_matching(activity, categories)
    }

    // --- ratings ---

    /// Append a rating to an existing product.
    ///
    /// The star range is validated first (`Validation`), then the product's
    /// existence (`NotFound`) — rating an unknown product is rejected
    /// rather than silently creating a bucket for it.
    pub fn add_rating(
        &mut self,
        product: &str,
        user: &str,
        stars: u8,
        comment: &str,
    ) -> DomainResult<()> {
        let rating = Rating::new(user, stars, comment)?;
        if !self.products.contains(product) {
            return Err(DomainError::not_found(format!("product {product} does not exist")));
        }
        self.ratings.append(product, rating);
        Ok(())
    }

    /// Ratings of a product as `"<stars> : <comment>"`, descending by star
    /// count, ties in insertion order. Unknown or unrated product yields an
    /// empty list.
    pub fn ratings_for_product(&self, product: &str) -> Vec<String> {
        self.ratings.ranked(product)
    }

    /// Whether a product has at least one rating. This is the explicit
    /// disambiguator for the 0.0-mean sentinel: a product rated only with
    /// zero stars has ratings but a mean of 0.0.
    pub fn has_ratings(&self, product: &str) -> bool {
        self.ratings.has_ratings(product)
    }

    /// Total number of ratings across all products.
    pub fn rating_count(&self) -> usize {
        self.ratings.count()
    }

    // --- statistics ---

    /// Mean star value of a product; 0.0 when it has no ratings.
    pub fn stars_of_product(&self, product: &str) -> f64 {
        stats::stars_of_product(&self.ratings, product)
    }

    /// Mean over every star value across every product; 0.0 when empty.
    pub fn average_stars(&self) -> f64 {
        stats::average_stars(&self.ratings)
    }

    /// Mean star value per activity, ascending by activity name;
    /// activities without any rated product are omitted.
    pub fn stars_per_activity(&self) -> BTreeMap<String, f64> {
        stats::stars_per_activity(&self.products, &self.ratings)
    }

    /// Products bucketed by exact mean, descending; zero means excluded.
    pub fn products_per_stars(&self) -> Vec<StarBucket> {
        stats::products_per_stars(&self.products, &self.ratings)
    }
}
