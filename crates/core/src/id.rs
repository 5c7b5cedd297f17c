//! Strongly-typed identifiers used across the domain.

use core::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::DomainError;

/// Identifier of a product.
///
/// Assigned by the store on creation (a positive sequence value), immutable
/// thereafter. User-supplied identifiers enter through [`FromStr`], which
/// enforces the positive-integer rule before anything touches storage.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ProductId(i64);

impl ProductId {
    /// Wrap a store-assigned id. Sequence columns never emit values <= 0;
    /// anything user-supplied goes through `FromStr` instead.
    pub fn new(raw: i64) -> Self {
        Self(raw)
    }

    pub fn as_i64(&self) -> i64 {
        self.0
    }
}

impl core::fmt::Display for ProductId {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        core::fmt::Display::fmt(&self.0, f)
    }
}

impl FromStr for ProductId {
    type Err = DomainError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let raw: i64 = s
            .trim()
            .parse()
            .map_err(|_| DomainError::invalid_id(format!("id must be a positive integer, got {s:?}")))?;
        if raw <= 0 {
            return Err(DomainError::invalid_id(format!(
                "id must be a positive integer, got {raw}"
            )));
        }
        Ok(Self(raw))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_positive_integers() {
        let id: ProductId = "42".parse().unwrap();
        assert_eq!(id.as_i64(), 42);

        let id: ProductId = " 7 ".parse().unwrap();
        assert_eq!(id.as_i64(), 7);
    }

    #[test]
    fn rejects_zero_and_negative() {
        for raw in ["0", "-1", "-999"] {
            let err = raw.parse::<ProductId>().unwrap_err();
            match err {
                DomainError::InvalidId(_) => {}
                other => panic!("expected InvalidId, got {other:?}"),
            }
        }
    }

    #[test]
    fn rejects_non_integers() {
        for raw in ["abc", "1.5", "", "1e3", "one"] {
            let err = raw.parse::<ProductId>().unwrap_err();
            match err {
                DomainError::InvalidId(_) => {}
                other => panic!("expected InvalidId, got {other:?}"),
            }
        }
    }
}
