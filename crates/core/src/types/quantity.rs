//! Quantity type parsed from raw user input.

use core::fmt;

use serde::{Deserialize, Serialize};

/// Errors that can occur when parsing a [`Quantity`].
#[derive(thiserror::Error, Debug, Clone, PartialEq, Eq)]
pub enum QuantityError {
    /// The input text is not parseable as a whole number.
    #[error("quantity {input:?} is not a whole number")]
    InvalidFormat {
        /// The rejected input text.
        input: String,
    },
}

/// An item quantity captured from a text field.
///
/// The quantity widget hands the engine raw text; this type owns turning
/// that text into a whole number. Parsing follows `i32` semantics exactly:
/// an optional leading sign followed by digits. Anything else - empty text,
/// letters, decimals like `"1.5"`, values past the `i32` range - is an
/// [`QuantityError::InvalidFormat`].
///
/// Zero and negative quantities parse successfully. Whether they are
/// *accepted* is a policy decision that belongs to the cart engine, not to
/// the parser.
///
/// ## Examples
///
/// ```
/// use counterpoint_core::Quantity;
///
/// assert_eq!(Quantity::parse("2").unwrap().get(), 2);
/// assert_eq!(Quantity::parse("-1").unwrap().get(), -1);
/// assert!(Quantity::parse("abc").is_err());
/// assert!(Quantity::parse("1.5").is_err());
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Quantity(i32);

impl Quantity {
    /// Parse a `Quantity` from raw text-field input.
    ///
    /// # Errors
    ///
    /// Returns [`QuantityError::InvalidFormat`] if the text is not a whole
    /// number in the `i32` range.
    pub fn parse(text: &str) -> Result<Self, QuantityError> {
        text.parse::<i32>()
            .map(Self)
            .map_err(|_| QuantityError::InvalidFormat {
                input: text.to_owned(),
            })
    }

    /// Create a quantity from an already-validated count.
    #[must_use]
    pub const fn new(count: i32) -> Self {
        Self(count)
    }

    /// Get the underlying count.
    #[must_use]
    pub const fn get(&self) -> i32 {
        self.0
    }

    /// Whether the count is greater than zero.
    #[must_use]
    pub const fn is_positive(&self) -> bool {
        self.0 > 0
    }
}

impl fmt::Display for Quantity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}
