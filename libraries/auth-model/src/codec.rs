//! JSON codec for transfer records.
//!
//! Wraps `serde_json` with the two decisions the derive alone leaves open:
//! the naming convention checked on top-level keys, and whether absent
//! values are written as `null` or dropped.
//!
//! Keys are never rewritten, so anything `encode` writes is read back by
//! `decode` with the same serde names.

use crate::config::{CodecConfig, NullPolicy};
use crate::error::{ModelError, Result};
use crate::naming::NamingConvention;
use crate::types::UserProfileRecord;
use serde::de::DeserializeOwned;
use serde::Serialize;
use serde_json::{Map, Value};

/// Encoder/decoder for profile records
#[derive(Debug, Clone, Default)]
pub struct ProfileCodec {
    config: CodecConfig,
}

impl ProfileCodec {
    /// Create a codec with the given settings
    pub fn new(config: CodecConfig) -> Self {
        Self { config }
    }

    /// Settings this codec encodes with
    pub fn config(&self) -> &CodecConfig {
        &self.config
    }

    /// Encode a record into a JSON value
    ///
    /// Under `NamingConvention::SnakeCase` every top-level key, including
    /// those contributed by the base record, must already be snake_case.
    pub fn encode_value<T: Serialize>(&self, record: &T) -> Result<Value> {
        let value = serde_json::to_value(record)?;

        let map = match value {
            Value::Object(map) => map,
            other => return Ok(other),
        };

        let mut out = Map::with_capacity(map.len());
        for (key, field) in map {
            if self.config.naming == NamingConvention::SnakeCase {
                let expected = self.config.naming.apply(&key);
                if expected != key {
                    return Err(ModelError::invalid_input(format!(
                        "field `{key}` is not snake_case (expected `{expected}`)"
                    )));
                }
            }

            if field.is_null() && self.config.null_policy == NullPolicy::Omit {
                tracing::trace!("Omitting null field {}", key);
                continue;
            }
            out.insert(key, field);
        }

        tracing::debug!(
            fields = out.len(),
            policy = ?self.config.null_policy,
            "Encoded record"
        );
        Ok(Value::Object(out))
    }

    /// Encode a record into a JSON string
    pub fn encode<T: Serialize>(&self, record: &T) -> Result<String> {
        let value = self.encode_value(record)?;
        let json = if self.config.pretty {
            serde_json::to_string_pretty(&value)?
        } else {
            serde_json::to_string(&value)?
        };
        Ok(json)
    }

    /// Decode a profile record; missing keys and `null` both become `None`
    pub fn decode<B: DeserializeOwned>(&self, input: &str) -> Result<UserProfileRecord<B>> {
        let record: UserProfileRecord<B> = serde_json::from_str(input)?;
        tracing::debug!("Decoded profile record ({} bytes)", input.len());
        Ok(record)
    }
}
