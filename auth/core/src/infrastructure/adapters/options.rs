// Copyright (c) 2026 100monkeys.ai
// SPDX-License-Identifier: AGPL-3.0

// Option and result helpers shared by the adapters

use serde::de::DeserializeOwned;
use serde::Serialize;
use serde_json::{Map, Value};

use crate::domain::errors::{AuthClientError, ProviderError};
use crate::domain::native_client::SupportedAuthClient;
use crate::domain::provider::ProviderType;

/// Shape check failure for an adapter handed the wrong native client
pub(crate) fn mismatch(expected: ProviderType, client: &SupportedAuthClient) -> AuthClientError {
    AuthClientError::ClientMismatch {
        expected,
        actual: client.provider_type(),
    }
}

/// Deserialize caller options, treating `null` as the default
pub(crate) fn parse_or_default<T>(options: Value) -> Result<T, ProviderError>
where
    T: DeserializeOwned + Default,
{
    if options.is_null() {
        return Ok(T::default());
    }
    serde_json::from_value(options).map_err(|e| ProviderError::InvalidInput(e.to_string()))
}

/// Deserialize caller options that have no sensible default
pub(crate) fn parse_required<T>(options: Value) -> Result<T, ProviderError>
where
    T: DeserializeOwned,
{
    serde_json::from_value(options).map_err(|e| ProviderError::InvalidInput(e.to_string()))
}

/// Copy `extra` on top of the caller's option object
///
/// `null` is treated as an empty object. Any other non-object is rejected.
pub(crate) fn merge(options: Value, extra: &[(&str, Value)]) -> Result<Value, ProviderError> {
    let mut object = match options {
        Value::Null => Map::new(),
        Value::Object(object) => object,
        other => {
            return Err(ProviderError::InvalidInput(format!(
                "expected an options object, got {}",
                other
            )))
        }
    };
    for (key, value) in extra {
        object.insert((*key).to_string(), value.clone());
    }
    Ok(Value::Object(object))
}

pub(crate) fn to_value<T: Serialize>(value: &T) -> Result<Value, ProviderError> {
    serde_json::to_value(value).map_err(|e| ProviderError::Provider(e.to_string()))
}
