//! Positive serving count

use serde::{Deserialize, Serialize};
use std::fmt;

use crate::error::DomainError;

/// Number of servings; always greater than zero
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(try_from = "i64", into = "u32")]
pub struct Quantity(u32);

impl Quantity {
    /// Create a quantity, rejecting zero, negative and oversized values
    pub fn new(value: i64) -> Result<Self, DomainError> {
        match u32::try_from(value) {
            Ok(v) if v > 0 => Ok(Self(v)),
            _ => Err(DomainError::InvalidQuantity(value)),
        }
    }

    /// Parse user-entered text such as `"12"`
    pub fn parse(input: &str) -> Result<Self, DomainError> {
        let trimmed = input.trim();
        if trimmed.is_empty() {
            return Err(DomainError::MissingField("quantity"));
        }
        let value = trimmed.parse::<i64>().map_err(|_| {
            DomainError::ValidationError(format!("Quantity must be a whole number, got {trimmed:?}"))
        })?;
        Self::new(value)
    }

    #[inline]
    pub fn get(self) -> u32 {
        self.0
    }
}

impl TryFrom<i64> for Quantity {
    type Error = DomainError;

    fn try_from(value: i64) -> Result<Self, Self::Error> {
        Self::new(value)
    }
}

impl From<Quantity> for u32 {
    fn from(quantity: Quantity) -> Self {
        quantity.0
    }
}

impl fmt::Display for Quantity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}
