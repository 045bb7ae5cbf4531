/// User profile transfer record
use super::IdentityRecord;
use crate::error::{ModelError, Result};
use crate::naming::to_snake_case;
use serde::{Deserialize, Serialize};
use std::fmt;

/// Snapshot of user-identifying fields handed from the identity subsystem
/// to whatever renders the response.
///
/// The base identity record is embedded by value and flattened into the same
/// serialized object. Every key is written in snake_case and absent values
/// are written as explicit `null`; see [`crate::NullPolicy`] for the
/// alternative.
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub struct UserProfileRecord<B = IdentityRecord> {
    /// Embedded base identity record
    #[serde(flatten)]
    pub base: B,

    /// Given name
    #[serde(default)]
    pub first_name: Option<String>,

    /// Family name
    #[serde(default)]
    pub last_name: Option<String>,

    /// Numeric phone identifier, not checked for format
    #[serde(default)]
    pub phone_number: Option<i64>,

    /// Email address, not checked for format
    #[serde(default)]
    pub email: Option<String>,
}

impl<B> UserProfileRecord<B> {
    /// Create a record around a base identity with every profile field absent
    pub fn new(base: B) -> Self {
        Self {
            base,
            first_name: None,
            last_name: None,
            phone_number: None,
            email: None,
        }
    }

    /// Set the given name
    #[must_use]
    pub fn with_first_name(mut self, first_name: impl Into<String>) -> Self {
        self.first_name = Some(first_name.into());
        self
    }

    /// Set the family name
    #[must_use]
    pub fn with_last_name(mut self, last_name: impl Into<String>) -> Self {
        self.last_name = Some(last_name.into());
        self
    }

    /// Set the phone number
    #[must_use]
    pub fn with_phone_number(mut self, phone_number: i64) -> Self {
        self.phone_number = Some(phone_number);
        self
    }

    /// Set the email address
    #[must_use]
    pub fn with_email(mut self, email: impl Into<String>) -> Self {
        self.email = Some(email.into());
        self
    }

    /// Borrow the embedded base record
    pub fn base(&self) -> &B {
        &self.base
    }

    /// Split the record back into its base
    pub fn into_base(self) -> B {
        self.base
    }

    /// Render a profile field's value as text, `None` when absent
    pub fn text_value(&self, field: ProfileField) -> Option<String> {
        match field {
            ProfileField::FirstName => self.first_name.clone(),
            ProfileField::LastName => self.last_name.clone(),
            ProfileField::PhoneNumber => self.phone_number.map(|n| n.to_string()),
            ProfileField::Email => self.email.clone(),
        }
    }

    /// Whether every profile field (not counting the base) is absent
    pub fn is_blank(&self) -> bool {
        self.first_name.is_none()
            && self.last_name.is_none()
            && self.phone_number.is_none()
            && self.email.is_none()
    }
}

/// Profile fields carried on top of the base identity record
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ProfileField {
    /// `first_name`
    FirstName,
    /// `last_name`
    LastName,
    /// `phone_number`
    PhoneNumber,
    /// `email`
    Email,
}

impl ProfileField {
    /// All profile fields in serialization order
    pub const ALL: [ProfileField; 4] = [
        Self::FirstName,
        Self::LastName,
        Self::PhoneNumber,
        Self::Email,
    ];

    /// Serialized key
    #[must_use]
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::FirstName => "first_name",
            Self::LastName => "last_name",
            Self::PhoneNumber => "phone_number",
            Self::Email => "email",
        }
    }

    /// Human-readable name the key is derived from
    #[must_use]
    pub fn logical_name(&self) -> &'static str {
        match self {
            Self::FirstName => "first name",
            Self::LastName => "last name",
            Self::PhoneNumber => "phone number",
            Self::Email => "email",
        }
    }

    /// Parse any spelling whose snake_case form is a known key
    /// (`firstName`, `First Name`, `first_name`)
    pub fn parse(name: &str) -> Result<Self> {
        let key = to_snake_case(name);
        Self::ALL
            .into_iter()
            .find(|field| field.as_str() == key)
            .ok_or_else(|| ModelError::invalid_input(format!("unknown profile field: {name}")))
    }
}

impl fmt::Display for ProfileField {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}
