//! Activity/category taxonomy.
//!
//! Activities are opaque names (case-sensitive, never normalized).
//! Categories link to a non-empty set of activities. The forward index
//! (category → activities) and the reverse index (activity → categories)
//! are updated together in every mutation so they cannot diverge.

use std::collections::{BTreeMap, BTreeSet};

use serde::{Deserialize, Serialize};

use peakgear_core::{DomainError, DomainResult};

/// Activity and category taxonomy.
///
/// Append-only: activities are never removed; a category can be rebound to
/// a different activity set (last write wins) but never deleted.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Taxonomy {
    activities: BTreeSet<String>,
    category_to_activities: BTreeMap<String, BTreeSet<String>>,
    activity_to_categories: BTreeMap<String, BTreeSet<String>>,
}

impl Taxonomy {
    pub fn new() -> Self {
        Self::default()
    }

    /// Define activities, idempotently per name.
    ///
    /// Re-defining a known activity is a no-op; an empty slice is rejected.
    pub fn define_activities<S: AsRef<str>>(&mut self, names: &[S]) -> DomainResult<()> {
        if names.is_empty() {
            return Err(DomainError::validation("no activities provided"));
        }

        for name in names {
            let name = name.as_ref();
            self.activities.insert(name.to_owned());
            self.activity_to_categories.entry(name.to_owned()).or_default();
        }
        Ok(())
    }

    /// Bind `name` to exactly the given activity set (last write wins).
    ///
    /// Every referenced activity must already be defined and the set must be
    /// non-empty; on failure nothing changes. A rebind removes the category
    /// from the reverse index of activities it is no longer linked to.
    pub fn add_category<S: AsRef<str>>(
        &mut self,
        name: &str,
        linked_activities: &[S],
    ) -> DomainResult<()> {
        if linked_activities.is_empty() {
            return Err(DomainError::validation(format!(
                "category {name} links no activities"
            )));
        }
        for activity in linked_activities {
            let activity = activity.as_ref();
            if !self.activities.contains(activity) {
                return Err(DomainError::validation(format!(
                    "activity {activity} does not exist"
                )));
            }
        }

        // All checks passed; the rebind below is the single state change.
        if let Some(previous) = self.category_to_activities.remove(name) {
            for activity in &previous {
                if let Some(categories) = self.activity_to_categories.get_mut(activity) {
                    categories.remove(name);
                }
            }
        }

        let linked: BTreeSet<String> = linked_activities
            .iter()
            .map(|a| a.as_ref().to_owned())
            .collect();
        for activity in &linked {
            self.activity_to_categories
                .entry(activity.clone())
                .or_default()
                .insert(name.to_owned());
        }
        self.category_to_activities.insert(name.to_owned(), linked);
        Ok(())
    }

    /// All known activities, lexicographic.
    pub fn activities(&self) -> Vec<String> {
        self.activities.iter().cloned().collect()
    }

    pub fn is_defined(&self, activity: &str) -> bool {
        self.activities.contains(activity)
    }

    /// Categories linked to `activity`, lexicographic. Unknown activity
    /// yields an empty list, not an error.
    pub fn categories_for_activity(&self, activity: &str) -> Vec<String> {
        self.activity_to_categories
            .get(activity)
            .map(|categories| categories.iter().cloned().collect())
            .unwrap_or_default()
    }

    /// Activities a category is linked to, lexicographic. Unknown category
    /// yields an empty list.
    pub fn activities_for_category(&self, category: &str) -> Vec<String> {
        self.category_to_activities
            .get(category)
            .map(|activities| activities.iter().cloned().collect())
            .unwrap_or_default()
    }

    /// Number of distinct category names ever defined. Rebinding an
    /// existing category does not change this.
    pub fn category_count(&self) -> usize {
        self.category_to_activities.len()
    }

    pub fn is_linked(&self, category: &str, activity: &str) -> bool {
        self.category_to_activities
            .get(category)
            .is_some_and(|activities| activities.contains(activity))
    }
}
