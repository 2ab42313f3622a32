//! Strongly-typed identifiers used across the domain.
//!
//! Activities, categories, and products are identified by caller-supplied
//! case-sensitive strings, so the only generated identifier is the one for
//! rating records.

use core::str::FromStr;

use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::error::DomainError;

/// Identifier of a single rating record.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct RatingId(Uuid);

impl RatingId {
    /// Create a new identifier.
    ///
    /// Uses UUIDv7 (time-ordered). Prefer passing ids explicitly in tests
    /// for determinism.
    pub fn new() -> Self {
        Self(Uuid::now_v7())
    }

    pub fn from_uuid(uuid: Uuid) -> Self {
        Self(uuid)
    }

    pub fn as_uuid(&self) -> &Uuid {
        &self.0
    }
}

impl Default for RatingId {
    fn default() -> Self {
        Self::new()
    }
}

impl core::fmt::Display for RatingId {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        core::fmt::Display::fmt(&self.0, f)
    }
}

impl From<Uuid> for RatingId {
    fn from(value: Uuid) -> Self {
        Self(value)
    }
}

impl From<RatingId> for Uuid {
    fn from(value: RatingId) -> Self {
        value.0
    }
}

impl FromStr for RatingId {
    type Err = DomainError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let uuid = Uuid::from_str(s)
            .map_err(|e| DomainError::validation(format!("RatingId: {e}")))?;
        Ok(Self(uuid))
    }
}
