//! Product name type.

use core::fmt;

use serde::{Deserialize, Serialize};

/// Errors that can occur when parsing a [`ProductName`].
#[derive(thiserror::Error, Debug, Clone)]
pub enum ProductNameError {
    /// The input string is empty.
    #[error("product name cannot be empty")]
    Empty,
}

/// A product display name.
///
/// Every catalog product carries a non-empty display name. The name is what
/// the cart engine snapshots onto a line item, so it must be present even
/// when a product has no other descriptive data.
///
/// ## Examples
///
/// ```
/// use counterpoint_core::ProductName;
///
/// assert!(ProductName::parse("Produto Teste 1").is_ok());
/// assert!(ProductName::parse("").is_err());
/// ```
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq, Hash)]
#[serde(transparent)]
pub struct ProductName(String);

impl ProductName {
    /// Parse a `ProductName` from a string.
    ///
    /// # Errors
    ///
    /// Returns [`ProductNameError::Empty`] if the input is empty.
    pub fn parse(s: &str) -> Result<Self, ProductNameError> {
        if s.is_empty() {
            return Err(ProductNameError::Empty);
        }

        Ok(Self(s.to_owned()))
    }

    /// Returns the name as a string slice.
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Consumes the `ProductName` and returns its inner string.
    #[must_use]
    pub fn into_inner(self) -> String {
        self.0
    }
}

impl fmt::Display for ProductName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl std::str::FromStr for ProductName {
    type Err = ProductNameError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s)
    }
}

impl AsRef<str> for ProductName {
    fn as_ref(&self) -> &str {
        &self.0
    }
}
