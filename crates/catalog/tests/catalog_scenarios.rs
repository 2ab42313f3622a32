//! Black-box scenario tests over the public `Catalog` API.

use peakgear_catalog::Catalog;
use peakgear_core::DomainError;

fn init_logging() {
    peakgear_observability::init();
}

#[test]
fn shoe_shop_end_to_end() {
    init_logging();

    let mut catalog = Catalog::new();
    catalog.define_activities(&["Running", "Swimming"]).unwrap();
    catalog.add_category("Outdoor", &["Running"]).unwrap();

    catalog.add_product("ShoeX", "Running", "Outdoor").unwrap();
    let err = catalog.add_product("ShoeX", "Running", "Outdoor").unwrap_err();
    assert!(matches!(err, DomainError::Duplicate(_)));

    catalog.add_rating("ShoeX", "bob", 4, "good").unwrap();
    catalog.add_rating("ShoeX", "ann", 2, "meh").unwrap();
    tracing::info!(product = "ShoeX", "scenario catalog seeded");

    assert_eq!(catalog.stars_of_product("ShoeX"), 3.0);
    assert_eq!(catalog.ratings_for_product("ShoeX"), vec!["4 : good", "2 : meh"]);
}

#[test]
fn activities_without_rated_products_are_absent_from_per_activity_means() {
    let mut catalog = Catalog::new();
    catalog.define_activities(&["Running", "Swimming"]).unwrap();
    catalog.add_category("Outdoor", &["Running"]).unwrap();
    catalog.add_product("ShoeX", "Running", "Outdoor").unwrap();
    catalog.add_rating("ShoeX", "bob", 4, "good").unwrap();

    let per_activity = catalog.stars_per_activity();
    assert!(per_activity.contains_key("Running"));
    assert!(!per_activity.contains_key("Swimming"));
}

#[test]
fn taxonomy_views_stay_sorted_and_deduplicated() {
    let mut catalog = Catalog::new();
    catalog.define_activities(&["Swimming", "Running"]).unwrap();
    catalog.define_activities(&["Running", "Climbing"]).unwrap();

    assert_eq!(catalog.activities(), vec!["Climbing", "Running", "Swimming"]);

    catalog.add_category("Shoes", &["Running", "Climbing"]).unwrap();
    catalog.add_category("Apparel", &["Running"]).unwrap();
    assert_eq!(catalog.category_count(), 2);
    assert_eq!(
        catalog.categories_for_activity("Running"),
        vec!["Apparel", "Shoes"]
    );
    assert_eq!(catalog.categories_for_activity("Swimming"), Vec::<String>::new());
}

#[test]
fn filtered_product_queries_collapse_duplicate_categories() {
    let mut catalog = Catalog::new();
    catalog.define_activities(&["Running"]).unwrap();
    catalog.add_category("Shoes", &["Running"]).unwrap();
    catalog.add_category("Apparel", &["Running"]).unwrap();
    catalog.add_product("ShoeX", "Running", "Shoes").unwrap();
    catalog.add_product("ShoeA", "Running", "Shoes").unwrap();
    catalog.add_product("CapY", "Running", "Apparel").unwrap();

    assert_eq!(
        catalog.products("Running", &["Shoes", "Shoes", "Apparel"]),
        vec!["CapY", "ShoeA", "ShoeX"]
    );
    assert_eq!(catalog.products("Running", &["Shoes"]), vec!["ShoeA", "ShoeX"]);
    assert_eq!(catalog.products_for_category("Shoes"), vec!["ShoeA", "ShoeX"]);
    assert_eq!(
        catalog.products_for_activity("Running"),
        vec!["CapY", "ShoeA", "ShoeX"]
    );
}

#[test]
fn ranking_view_orders_buckets_and_names() {
    let mut catalog = Catalog::new();
    catalog.define_activities(&["Running", "Swimming"]).unwrap();
    catalog.add_category("Gear", &["Running", "Swimming"]).unwrap();
    catalog.add_product("ShoeX", "Running", "Gear").unwrap();
    catalog.add_product("FinZ", "Swimming", "Gear").unwrap();
    catalog.add_product("CapY", "Running", "Gear").unwrap();
    catalog.add_product("BootB", "Running", "Gear").unwrap();

    catalog.add_rating("ShoeX", "ann", 4, "solid").unwrap();
    catalog.add_rating("ShoeX", "bob", 2, "eh").unwrap();
    catalog.add_rating("FinZ", "cid", 3, "fine").unwrap();
    catalog.add_rating("CapY", "dee", 5, "love it").unwrap();
    // BootB stays unrated and must not appear anywhere below.

    let buckets = catalog.products_per_stars();
    let means: Vec<f64> = buckets.iter().map(|b| b.mean).collect();
    assert_eq!(means, [5.0, 3.0]);
    assert_eq!(buckets[0].products, vec!["CapY"]);
    assert_eq!(buckets[1].products, vec!["FinZ", "ShoeX"]);

    assert_eq!(catalog.average_stars(), 3.5);
    assert_eq!(catalog.rating_count(), 4);
}

#[test]
fn rebinding_a_category_moves_existing_links_but_keeps_products() {
    let mut catalog = Catalog::new();
    catalog.define_activities(&["Running", "Swimming"]).unwrap();
    catalog.add_category("Gear", &["Running"]).unwrap();
    catalog.add_product("ShoeX", "Running", "Gear").unwrap();

    catalog.add_category("Gear", &["Swimming"]).unwrap();

    // The taxonomy reflects the rebind without stale reverse entries.
    assert_eq!(catalog.categories_for_activity("Running"), Vec::<String>::new());
    assert_eq!(catalog.categories_for_activity("Swimming"), vec!["Gear"]);
    assert_eq!(catalog.category_count(), 1);

    // Products are immutable once created; the existing one keeps its
    // original binding, but new products must satisfy the current links.
    assert_eq!(catalog.products_for_category("Gear"), vec!["ShoeX"]);
    let err = catalog.add_product("ShoeA", "Running", "Gear").unwrap_err();
    assert!(matches!(err, DomainError::Validation(_)));
}
