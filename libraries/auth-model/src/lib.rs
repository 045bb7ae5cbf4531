//! Auth Model
//!
//! Transfer records for user profiles leaving the auth service.
//!
//! # Architecture
//!
//! The crate defines:
//! - **Domain Types**: `UserProfileRecord`, `IdentityRecord`, `UserId`
//! - **Naming**: the snake_case convention applied to every serialized key
//! - **Codec**: JSON encoding with an explicit null-handling policy
//! - **Error Handling**: Unified `ModelError` and `Result` types
//!
//! # Example
//!
//! ```rust
//! use auth_model::{IdentityRecord, UserId, UserProfileRecord};
//!
//! let profile = UserProfileRecord::new(IdentityRecord::new(UserId::new("user-1")))
//!     .with_first_name("Ada")
//!     .with_last_name("Lovelace")
//!     .with_phone_number(5551234567)
//!     .with_email("ada@example.com");
//!
//! let json = serde_json::to_value(&profile).unwrap();
//! assert_eq!(json["first_name"], "Ada");
//! assert_eq!(json["phone_number"], 5551234567_i64);
//! ```

#![forbid(unsafe_code)]
#![warn(missing_docs)]

/// JSON encoding and decoding of profile records
pub mod codec;
/// Codec settings loaded from file and environment
pub mod config;
/// Error and result types
pub mod error;
/// Field naming conventions
pub mod naming;
/// Identity and profile record types
pub mod types;

pub use codec::ProfileCodec;
pub use config::{CodecConfig, NullPolicy};
pub use error::{ModelError, Result};
pub use naming::{to_snake_case, NamingConvention};
pub use types::{IdentityRecord, ProfileField, UserId, UserProfileRecord};
