//! Cart state: line items and the derived grand total.

use rust_decimal::Decimal;
use serde::Serialize;

use counterpoint_core::{Price, Product, ProductName, Quantity};

/// One product-quantity row in the cart.
///
/// A line item is a snapshot: the name and unit price are copied from the
/// product at add time, not held as live references, so a later catalog
/// refresh cannot rewrite rows already in the cart. Line items are created
/// only by a successful add and never mutated afterward.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct LineItem {
    product_name: ProductName,
    unit_price: Price,
    quantity: Quantity,
    line_total: Decimal,
}

impl LineItem {
    /// Snapshot a product into a line item at the given quantity.
    pub(crate) fn snapshot(product: &Product, quantity: Quantity) -> Self {
        let line_total = product.price.amount() * Decimal::from(quantity.get());

        Self {
            product_name: product.name.clone(),
            unit_price: product.price,
            quantity,
            line_total,
        }
    }

    /// The product name copied at add time.
    #[must_use]
    pub fn product_name(&self) -> &ProductName {
        &self.product_name
    }

    /// The unit price copied at add time.
    #[must_use]
    pub const fn unit_price(&self) -> Price {
        self.unit_price
    }

    /// The quantity this line was added with.
    #[must_use]
    pub const fn quantity(&self) -> Quantity {
        self.quantity
    }

    /// Unit price times quantity, exact decimal arithmetic.
    #[must_use]
    pub const fn line_total(&self) -> Decimal {
        self.line_total
    }
}

/// The cart for one screen session.
///
/// An ordered sequence of [`LineItem`] rows (insertion order is display
/// order) plus the derived grand total. The fields are private and exposed
/// through read-only accessors; the only way to grow a cart is through
/// [`CartEngine::add_line`](crate::engine::CartEngine::add_line), which
/// keeps the total in step with the rows.
///
/// A cart has no identity beyond its session and is simply dropped when
/// the screen closes.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct Cart {
    lines: Vec<LineItem>,
    grand_total: Decimal,
}

impl Cart {
    /// Create a new empty cart with a zero total.
    #[must_use]
    pub const fn new() -> Self {
        Self {
            lines: Vec::new(),
            grand_total: Decimal::ZERO,
        }
    }

    /// The line items in display order.
    #[must_use]
    pub fn lines(&self) -> &[LineItem] {
        &self.lines
    }

    /// The running grand total.
    ///
    /// Always equal to [`compute_total`](Self::compute_total); it is
    /// recomputed on every append so callers never observe a stale value.
    #[must_use]
    pub const fn grand_total(&self) -> Decimal {
        self.grand_total
    }

    /// Number of line items.
    #[must_use]
    pub fn len(&self) -> usize {
        self.lines.len()
    }

    /// Whether the cart has no line items.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.lines.is_empty()
    }

    /// Sum the current line totals.
    ///
    /// Pure and idempotent; zero for an empty cart.
    #[must_use]
    pub fn compute_total(&self) -> Decimal {
        self.lines.iter().map(LineItem::line_total).sum()
    }

    /// Append a line and refresh the grand total in the same step.
    pub(crate) fn push(&mut self, line: LineItem) {
        self.lines.push(line);
        self.grand_total = self.compute_total();
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use counterpoint_core::ProductId;

    use super::*;

    fn product(name: &str, cents: i64) -> Product {
        Product::new(
            ProductId::new(1),
            ProductName::parse(name).unwrap(),
            Price::new(Decimal::new(cents, 2)).unwrap(),
            100,
        )
    }

    #[test]
    fn test_empty_cart_total_is_zero() {
        let cart = Cart::new();
        assert!(cart.is_empty());
        assert_eq!(cart.len(), 0);
        assert_eq!(cart.grand_total(), Decimal::ZERO);
        assert_eq!(cart.compute_total(), Decimal::ZERO);
    }

    #[test]
    fn test_compute_total_is_idempotent() {
        let mut cart = Cart::new();
        cart.push(LineItem::snapshot(&product("A", 1050), Quantity::new(2)));

        let first = cart.compute_total();
        let second = cart.compute_total();
        assert_eq!(first, second);
        assert_eq!(first, Decimal::new(2100, 2));
    }

    #[test]
    fn test_push_keeps_total_in_step_with_lines() {
        let mut cart = Cart::new();

        cart.push(LineItem::snapshot(&product("A", 1050), Quantity::new(1)));
        assert_eq!(cart.grand_total(), cart.compute_total());

        cart.push(LineItem::snapshot(&product("B", 2575), Quantity::new(1)));
        assert_eq!(cart.grand_total(), cart.compute_total());
        assert_eq!(cart.grand_total(), Decimal::new(3625, 2));
    }

    #[test]
    fn test_line_item_snapshot_copies_display_fields() {
        let source = product("Produto Teste 1", 1050);
        let line = LineItem::snapshot(&source, Quantity::new(2));

        assert_eq!(line.product_name().as_str(), "Produto Teste 1");
        assert_eq!(line.unit_price(), source.price);
        assert_eq!(line.quantity().get(), 2);
        assert_eq!(line.line_total(), Decimal::new(2100, 2));
    }

    #[test]
    fn test_line_total_with_zero_quantity() {
        let line = LineItem::snapshot(&product("A", 1050), Quantity::new(0));
        assert_eq!(line.line_total(), Decimal::ZERO);
    }

    #[test]
    fn test_insertion_order_is_display_order() {
        let mut cart = Cart::new();
        cart.push(LineItem::snapshot(&product("First", 100), Quantity::new(1)));
        cart.push(LineItem::snapshot(&product("Second", 200), Quantity::new(1)));

        let names: Vec<&str> = cart
            .lines()
            .iter()
            .map(|line| line.product_name().as_str())
            .collect();
        assert_eq!(names, ["First", "Second"]);
    }

    #[test]
    fn test_cart_serializes_for_rendering() {
        let mut cart = Cart::new();
        cart.push(LineItem::snapshot(&product("A", 1000), Quantity::new(2)));

        let json = serde_json::to_value(&cart).unwrap();
        assert_eq!(json["lines"][0]["product_name"], "A");
        assert_eq!(json["lines"][0]["quantity"], 2);
    }
}
