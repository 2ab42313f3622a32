//! Product catalog: items anchored to the taxonomy.

use std::collections::{BTreeMap, BTreeSet};

use serde::{Deserialize, Serialize};

use peakgear_core::{DomainError, DomainResult, Entity};

/// A catalog item bound to exactly one activity and one category.
///
/// Immutable once registered; only its rating list (held separately by the
/// rating store) grows afterwards.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Product {
    name: String,
    activity: String,
    category: String,
}

impl Product {
    pub fn new(
        name: impl Into<String>,
        activity: impl Into<String>,
        category: impl Into<String>,
    ) -> Self {
        Self {
            name: name.into(),
            activity: activity.into(),
            category: category.into(),
        }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn activity(&self) -> &str {
        &self.activity
    }

    pub fn category(&self) -> &str {
        &self.category
    }
}

impl Entity for Product {
    type Id = String;

    fn id(&self) -> &String {
        &self.name
    }
}

/// Product store keyed by globally-unique product name.
///
/// The cross-model invariant (the product's category must be linked to its
/// activity) is enforced by the owning [`Catalog`](crate::Catalog), which
/// holds the taxonomy; this store only guarantees name uniqueness.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ProductCatalog {
    products: BTreeMap<String, Product>,
}

impl ProductCatalog {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn contains(&self, name: &str) -> bool {
        self.products.contains_key(name)
    }

    pub fn get(&self, name: &str) -> Option<&Product> {
        self.products.get(name)
    }

    /// Register a product. Fails if the name is already taken.
    pub fn add(&mut self, product: Product) -> DomainResult<()> {
        if self.products.contains_key(product.name()) {
            return Err(DomainError::duplicate(format!(
                "product {} already exists",
                product.name()
            )));
        }
        self.products.insert(product.name().to_owned(), product);
        Ok(())
    }

    /// Product names in the given category, lexicographic.
    pub fn names_for_category(&self, category: &str) -> Vec<String> {
        self.products
            .values()
            .filter(|p| p.category == category)
            .map(|p| p.name.clone())
            .collect()
    }

    /// Product names bound to the given activity, lexicographic.
    pub fn names_for_activity(&self, activity: &str) -> Vec<String> {
        self.products
            .values()
            .filter(|p| p.activity == activity)
            .map(|p| p.name.clone())
            .collect()
    }

    /// Product names whose activity matches AND whose category is in the
    /// given set (duplicate arguments collapse), lexicographic.
    pub fn names_matching<S: AsRef<str>>(&self, activity: &str, categories: &[S]) -> Vec<String> {
        let wanted: BTreeSet<&str> = categories.iter().map(AsRef::as_ref).collect();
        self.products
            .values()
            .filter(|p| p.activity == activity && wanted.contains(p.category.as_str()))
            .map(|p| p.name.clone())
            .collect()
    }

    pub fn iter(&self) -> impl Iterator<Item = &Product> {
        self.products.values()
    }

    pub fn len(&self) -> usize {
        self.products.len()
    }

    pub fn is_empty(&self) -> bool {
        self.products.is_empty()
    }
}
