/// Base identity record embedded in profile transfer records
use super::UserId;
use serde::{Deserialize, Serialize};

/// Identity fields shared by every record the identity subsystem hands out.
///
/// Only the identifier is modeled here. Callers that carry a richer identity
/// type embed it in [`UserProfileRecord`](super::UserProfileRecord) through
/// its type parameter instead.
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub struct IdentityRecord {
    /// User identifier
    #[serde(default)]
    pub id: Option<UserId>,
}

impl IdentityRecord {
    /// Create an identity record for a known user
    pub fn new(id: UserId) -> Self {
        Self { id: Some(id) }
    }
}

impl From<UserId> for IdentityRecord {
    fn from(id: UserId) -> Self {
        Self::new(id)
    }
}
