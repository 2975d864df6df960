use std::fmt;
use std::str::FromStr;

use rust_decimal::Decimal;
use serde::{Deserialize, Deserializer, Serialize};

use crate::errors::DomainError;

#[derive(
    Clone, Copy, Debug, Default, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize,
)]
#[serde(transparent)]
pub struct ProductId(pub i32);

impl fmt::Display for ProductId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Parses a path-supplied identifier: base-10 digits only, 32-bit, at least 1.
impl FromStr for ProductId {
    type Err = DomainError;

    fn from_str(raw: &str) -> Result<Self, Self::Err> {
        let invalid = || DomainError::InvalidProductId { raw: raw.to_string() };

        if raw.is_empty() || !raw.bytes().all(|byte| byte.is_ascii_digit()) {
            return Err(invalid());
        }

        match raw.parse::<i32>() {
            Ok(value) if value >= 1 => Ok(Self(value)),
            _ => Err(invalid()),
        }
    }
}

/// A catalog item.
///
/// Decoding is strict: a payload carrying any field outside this set is
/// rejected. Every field may be omitted or `null` on input, which leaves its
/// zero value, and an `id` supplied by a client is never trusted; the store
/// overwrites it.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", deny_unknown_fields)]
pub struct Product {
    #[serde(default, deserialize_with = "null_as_default")]
    pub id: ProductId,
    #[serde(default, deserialize_with = "null_as_default")]
    pub name: String,
    #[serde(default, deserialize_with = "null_as_default")]
    pub description: String,
    #[serde(default, deserialize_with = "null_as_default")]
    pub price: Decimal,
    #[serde(default, deserialize_with = "null_as_default")]
    pub stock: i32,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub category: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub image_url: Option<String>,
}

impl Product {
    pub fn validate(&self) -> Result<(), DomainError> {
        if self.name.is_empty() {
            return Err(DomainError::InvalidProductData { field: "name", reason: "is required" });
        }
        if self.price < Decimal::ZERO {
            return Err(DomainError::InvalidProductData {
                field: "price",
                reason: "must be non-negative",
            });
        }
        if self.stock < 0 {
            return Err(DomainError::InvalidProductData {
                field: "stock",
                reason: "must be non-negative",
            });
        }
        Ok(())
    }

    pub fn with_id(mut self, id: ProductId) -> Self {
        self.id = id;
        self
    }
}

fn null_as_default<'de, D, T>(deserializer: D) -> Result<T, D::Error>
where
    D: Deserializer<'de>,
    T: Deserialize<'de> + Default,
{
    Option::<T>::deserialize(deserializer).map(Option::unwrap_or_default)
}

/// Error payload returned by every failed request; `code` mirrors the HTTP status.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct ErrorResponse {
    pub code: u16,
    pub message: String,
}
