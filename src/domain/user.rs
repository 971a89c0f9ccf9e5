use serde::{Deserialize, Serialize};

/// A review author or commenter.
/// Read-only: users are provisioned externally.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct User {
    /// Unique identity
    pub username: String,

    /// Display name
    pub name: String,

    /// Avatar image URL
    pub avatar_url: String,
}
