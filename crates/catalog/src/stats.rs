//! Statistics over the product catalog and rating store.
//!
//! Every view here is computed on demand from current state; nothing is
//! cached or incrementally maintained. A mean of 0.0 doubles as the
//! empty-set sentinel, so callers that need to tell "unrated" apart from
//! "all zero-star" use [`RatingStore::has_ratings`] alongside these.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

use peakgear_core::ValueObject;

use crate::product::ProductCatalog;
use crate::rating::RatingStore;

/// One bucket of the ranking view: every product whose ratings average out
/// to the same mean, names sorted ascending.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct StarBucket {
    pub mean: f64,
    pub products: Vec<String>,
}

impl ValueObject for StarBucket {}

fn mean_of(stars: impl Iterator<Item = u8>) -> f64 {
    let (mut sum, mut count) = (0u64, 0u64);
    for s in stars {
        sum += u64::from(s);
        count += 1;
    }
    if count == 0 { 0.0 } else { sum as f64 / count as f64 }
}

/// Mean star value of one product's ratings; 0.0 when it has none (or does
/// not exist — existence is the caller's question, not this view's).
pub fn stars_of_product(ratings: &RatingStore, product: &str) -> f64 {
    mean_of(ratings.ratings_for(product).iter().map(|r| r.stars()))
}

/// Mean over every star value across every product; 0.0 on an empty store.
pub fn average_stars(ratings: &RatingStore) -> f64 {
    mean_of(ratings.all().map(|r| r.stars()))
}

/// Mean star value per activity, ascending by activity name.
///
/// Each activity's mean is taken over the flattened ratings of all its
/// products. Activities with no products, or whose products have no
/// ratings, contribute no key.
pub fn stars_per_activity(products: &ProductCatalog, ratings: &RatingStore) -> BTreeMap<String, f64> {
    let mut totals: BTreeMap<&str, (u64, u64)> = BTreeMap::new();
    for product in products.iter() {
        let (sum, count) = totals.entry(product.activity()).or_insert((0, 0));
        for rating in ratings.ratings_for(product.name()) {
            *sum += u64::from(rating.stars());
            *count += 1;
        }
    }

    totals
        .into_iter()
        .filter(|&(_, (_, count))| count > 0)
        .map(|(activity, (sum, count))| (activity.to_owned(), sum as f64 / count as f64))
        .collect()
}

/// Products bucketed by their exact floating-point mean, ordered by
/// descending mean; names within a bucket are lexicographic.
///
/// Means of exactly 0.0 are excluded: a product with no ratings and a
/// product with only zero-star ratings both fall out of this view.
pub fn products_per_stars(products: &ProductCatalog, ratings: &RatingStore) -> Vec<StarBucket> {
    let mut scored: Vec<(f64, &str)> = products
        .iter()
        .map(|p| (stars_of_product(ratings, p.name()), p.name()))
        .filter(|&(mean, _)| mean > 0.0)
        .collect();
    // Descending mean, then name. Means are finite (counts are nonzero
    // here), so total_cmp agrees with the numeric order.
    scored.sort_by(|a, b| b.0.total_cmp(&a.0).then_with(|| a.1.cmp(b.1)));

    let mut buckets: Vec<StarBucket> = Vec::new();
    for (mean, name) in scored {
        match buckets.last_mut() {
            Some(bucket) if bucket.mean == mean => bucket.products.push(name.to_owned()),
            _ => buckets.push(StarBucket {
                mean,
                products: vec![name.to_owned()],
            }),
        }
    }
    buckets
}
