mod identity;
mod ids;
mod profile;

pub use identity::IdentityRecord;
pub use ids::UserId;
pub use profile::{ProfileField, UserProfileRecord};
