use serde::{Deserialize, Serialize};

/// A classification slug reviews belong to.
/// Read-only: categories are seeded externally and never mutated here.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Category {
    /// Unique identity
    pub slug: String,

    /// Human-readable description
    pub description: String,
}
