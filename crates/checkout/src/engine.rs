//! The cart engine: add-line validation and total upkeep.

use tracing::{debug, warn};

use counterpoint_core::{Product, Quantity, QuantityError};

use crate::cart::{Cart, LineItem};

/// Errors reported by [`CartEngine::add_line`].
///
/// Every rejection is a strict no-op on the cart: no row is appended and
/// the grand total is untouched. The caller decides how to surface the
/// error to the operator.
#[derive(thiserror::Error, Debug, Clone, PartialEq, Eq)]
pub enum AddLineError {
    /// No product is selected in the products table.
    #[error("no product is selected")]
    NoSelection,

    /// The quantity text could not be parsed as a whole number.
    #[error("invalid quantity: {0}")]
    InvalidQuantityFormat(#[from] QuantityError),

    /// The parsed quantity is zero or negative and the engine policy
    /// rejects it. Only reachable under [`QuantityPolicy::RejectNonPositive`].
    #[error("quantity must be positive, got {quantity}")]
    QuantityNotPositive {
        /// The rejected count.
        quantity: i32,
    },
}

/// How the engine treats zero and negative quantities.
///
/// The legacy screen neither rejected them nor promised to accept them, so
/// the choice is explicit configuration here rather than a hard-coded rule.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum QuantityPolicy {
    /// Append zero and negative quantities as-is (legacy behavior).
    #[default]
    Lenient,
    /// Reject zero and negative quantities with
    /// [`AddLineError::QuantityNotPositive`].
    RejectNonPositive,
}

/// Outcome of a successful add.
#[derive(Debug, Clone, PartialEq)]
pub struct LineAdded {
    /// A copy of the appended line, ready for the shell to render.
    pub line: LineItem,
    /// The caller must clear the product selection widget. Always `true`
    /// for a successful add.
    pub clear_selection: bool,
}

/// The cart engine.
///
/// Stateless apart from its [`QuantityPolicy`]; all cart state lives in
/// the [`Cart`] the caller owns. One engine can serve any number of
/// sequential screen sessions.
#[derive(Debug, Clone, Copy, Default)]
pub struct CartEngine {
    policy: QuantityPolicy,
}

impl CartEngine {
    /// Create an engine with the default lenient quantity policy.
    #[must_use]
    pub const fn new() -> Self {
        Self {
            policy: QuantityPolicy::Lenient,
        }
    }

    /// Create an engine with an explicit quantity policy.
    #[must_use]
    pub const fn with_policy(policy: QuantityPolicy) -> Self {
        Self { policy }
    }

    /// The configured quantity policy.
    #[must_use]
    pub const fn policy(&self) -> QuantityPolicy {
        self.policy
    }

    /// Validate the selection and quantity text, then append a line item
    /// and refresh the grand total.
    ///
    /// Validation order matches the screen's observable behavior: the
    /// selection check runs before the quantity text is ever parsed.
    ///
    /// On success the returned [`LineAdded`] tells the caller to clear the
    /// product selection; the engine itself touches nothing but the cart.
    ///
    /// # Errors
    ///
    /// - [`AddLineError::NoSelection`] when `selection` is `None`.
    /// - [`AddLineError::InvalidQuantityFormat`] when `quantity_text` is
    ///   not a whole number.
    /// - [`AddLineError::QuantityNotPositive`] when the parsed quantity is
    ///   zero or negative under [`QuantityPolicy::RejectNonPositive`].
    pub fn add_line(
        &self,
        selection: Option<&Product>,
        quantity_text: &str,
        cart: &mut Cart,
    ) -> Result<LineAdded, AddLineError> {
        let Some(product) = selection else {
            debug!("add rejected: no product selected");
            return Err(AddLineError::NoSelection);
        };

        let quantity = Quantity::parse(quantity_text).inspect_err(|_| {
            // The raw text is operator input; log its length, not its bytes.
            warn!(input_len = quantity_text.len(), "add rejected: quantity is not a whole number");
        })?;

        if self.policy == QuantityPolicy::RejectNonPositive && !quantity.is_positive() {
            warn!(quantity = quantity.get(), "add rejected: non-positive quantity");
            return Err(AddLineError::QuantityNotPositive {
                quantity: quantity.get(),
            });
        }

        let line = LineItem::snapshot(product, quantity);
        cart.push(line.clone());
        debug!(
            product = %product.name,
            %quantity,
            lines = cart.len(),
            grand_total = %cart.grand_total(),
            "line appended"
        );

        Ok(LineAdded {
            line,
            clear_selection: true,
        })
    }

    /// A fresh empty cart for a new screen session.
    #[must_use]
    pub const fn reset_cart(&self) -> Cart {
        Cart::new()
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used, clippy::indexing_slicing)]
mod tests {
    use counterpoint_core::{Price, ProductId, ProductName};
    use rust_decimal::Decimal;

    use super::*;

    fn product(id: i32, name: &str, cents: i64) -> Product {
        Product::new(
            ProductId::new(id),
            ProductName::parse(name).unwrap(),
            Price::new(Decimal::new(cents, 2)).unwrap(),
            100,
        )
    }

    #[test]
    fn test_add_valid_line() {
        let engine = CartEngine::new();
        let mut cart = engine.reset_cart();
        let selected = product(1, "Produto Teste 1", 1050);

        let added = engine.add_line(Some(&selected), "2", &mut cart).unwrap();

        assert_eq!(cart.len(), 1);
        assert!(added.clear_selection);
        assert_eq!(added.line.product_name().as_str(), "Produto Teste 1");
        assert_eq!(added.line.line_total(), Decimal::new(2100, 2));
        assert_eq!(cart.grand_total(), Decimal::new(2100, 2));
    }

    #[test]
    fn test_add_without_selection_is_noop() {
        let engine = CartEngine::new();
        let mut cart = engine.reset_cart();

        let err = engine.add_line(None, "1", &mut cart).unwrap_err();

        assert_eq!(err, AddLineError::NoSelection);
        assert!(cart.is_empty());
        assert_eq!(cart.grand_total(), Decimal::ZERO);
    }

    #[test]
    fn test_selection_check_runs_before_quantity_parse() {
        let engine = CartEngine::new();
        let mut cart = engine.reset_cart();

        // Both inputs are bad; the selection error wins.
        let err = engine.add_line(None, "abc", &mut cart).unwrap_err();
        assert_eq!(err, AddLineError::NoSelection);
    }

    #[test]
    fn test_add_with_non_numeric_quantity_is_noop() {
        let engine = CartEngine::new();
        let mut cart = engine.reset_cart();
        let selected = product(1, "Produto Teste 1", 1050);

        for text in ["abc", "", "1.5", "abc123", "null", "undefined"] {
            let err = engine.add_line(Some(&selected), text, &mut cart).unwrap_err();
            assert!(
                matches!(err, AddLineError::InvalidQuantityFormat(_)),
                "quantity {text:?} should be a format error"
            );
        }

        assert!(cart.is_empty());
        assert_eq!(cart.grand_total(), Decimal::ZERO);
    }

    #[test]
    fn test_lenient_policy_accepts_zero_and_negative() {
        let engine = CartEngine::new();
        let mut cart = engine.reset_cart();
        let selected = product(1, "Produto Teste 1", 1050);

        engine.add_line(Some(&selected), "0", &mut cart).unwrap();
        engine.add_line(Some(&selected), "-1", &mut cart).unwrap();

        assert_eq!(cart.len(), 2);
        // 0 * 10.50 + -1 * 10.50
        assert_eq!(cart.grand_total(), Decimal::new(-1050, 2));
    }

    #[test]
    fn test_strict_policy_rejects_zero_and_negative() {
        let engine = CartEngine::with_policy(QuantityPolicy::RejectNonPositive);
        let mut cart = engine.reset_cart();
        let selected = product(1, "Produto Teste 1", 1050);

        for text in ["0", "-1", "-999999"] {
            let err = engine.add_line(Some(&selected), text, &mut cart).unwrap_err();
            assert!(matches!(err, AddLineError::QuantityNotPositive { .. }));
        }

        assert!(cart.is_empty());

        // Positive quantities still pass.
        engine.add_line(Some(&selected), "1", &mut cart).unwrap();
        assert_eq!(cart.len(), 1);
    }

    #[test]
    fn test_grand_total_accumulates_across_adds() {
        let engine = CartEngine::new();
        let mut cart = engine.reset_cart();

        let first = product(1, "Produto Teste 1", 1050);
        let second = product(2, "Produto Teste 2", 2575);

        engine.add_line(Some(&first), "1", &mut cart).unwrap();
        let total_after_first = cart.grand_total();

        let added = engine.add_line(Some(&second), "1", &mut cart).unwrap();
        assert_eq!(
            cart.grand_total(),
            total_after_first + added.line.line_total()
        );
        assert_eq!(cart.grand_total(), Decimal::new(3625, 2));
    }

    #[test]
    fn test_repeat_add_appends_new_line() {
        // Same product twice is two rows, never a merged one.
        let engine = CartEngine::new();
        let mut cart = engine.reset_cart();
        let selected = product(1, "Produto Teste 1", 1050);

        engine.add_line(Some(&selected), "1", &mut cart).unwrap();
        engine.add_line(Some(&selected), "3", &mut cart).unwrap();

        assert_eq!(cart.len(), 2);
        assert_eq!(cart.lines()[0].quantity().get(), 1);
        assert_eq!(cart.lines()[1].quantity().get(), 3);
    }

    #[test]
    fn test_failed_add_leaves_earlier_lines_intact() {
        let engine = CartEngine::new();
        let mut cart = engine.reset_cart();
        let selected = product(1, "Produto Teste 1", 1050);

        engine.add_line(Some(&selected), "2", &mut cart).unwrap();
        let snapshot = cart.clone();

        let _ = engine.add_line(Some(&selected), "abc", &mut cart).unwrap_err();
        let _ = engine.add_line(None, "1", &mut cart).unwrap_err();

        assert_eq!(cart, snapshot);
    }

    #[test]
    fn test_reset_cart_is_empty() {
        let engine = CartEngine::new();
        let mut cart = engine.reset_cart();
        let selected = product(1, "Produto Teste 1", 1050);
        engine.add_line(Some(&selected), "2", &mut cart).unwrap();

        let fresh = engine.reset_cart();
        assert!(fresh.is_empty());
        assert_eq!(fresh.grand_total(), Decimal::ZERO);
    }
}
