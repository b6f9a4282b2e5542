//! Integration tests for Counterpoint.
//!
//! The library part of this crate holds shared fixtures; the actual
//! scenarios live under `tests/`:
//!
//! - `checkout_flow` - end-to-end add-to-cart scenarios over a fixture
//!   catalog
//! - `search_hardening` - hostile-input sweeps over search and quantity
//!   entry
//! - `cart_timing` - soft wall-clock guardrails for interactive use

#![cfg_attr(not(test), forbid(unsafe_code))]

use counterpoint_checkout::InMemoryCatalog;
use counterpoint_core::{Price, Product, ProductId, ProductName};
use rust_decimal::Decimal;

/// Build a product fixture from a price in cents.
///
/// # Panics
///
/// Panics if `name` is empty or `cents` is negative; fixtures are
/// hard-coded, so either is a bug in the test itself.
#[must_use]
pub fn product(id: i32, name: &str, cents: i64, stock: i32) -> Product {
    Product::new(
        ProductId::new(id),
        ProductName::parse(name).expect("fixture name must be non-empty"),
        Price::new(Decimal::new(cents, 2)).expect("fixture price must be non-negative"),
        stock,
    )
}

/// The catalog the original screen's test suites revolve around.
#[must_use]
pub fn fixture_catalog() -> InMemoryCatalog {
    InMemoryCatalog::new(vec![
        product(1, "Produto Teste 1", 1050, 100),
        product(2, "Produto Teste 2", 2575, 50),
    ])
}
