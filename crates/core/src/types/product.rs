//! Catalog product record.

use serde::{Deserialize, Serialize};

use crate::types::id::ProductId;
use crate::types::name::ProductName;
use crate::types::price::Price;

/// A purchasable product as fetched from the catalog provider.
///
/// Products are immutable once fetched: the checkout core treats them as
/// already-validated values and never writes back to the catalog.
///
/// `stock_quantity` is informational only. The add-to-cart screen displays
/// it next to each product but the cart engine does not enforce it.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Product {
    /// Unique catalog identifier.
    pub id: ProductId,
    /// Display name, non-empty.
    pub name: ProductName,
    /// Unit price, non-negative.
    pub price: Price,
    /// Units on hand according to the catalog. Not enforced here.
    pub stock_quantity: i32,
}

impl Product {
    /// Create a new product from validated parts.
    #[must_use]
    pub const fn new(id: ProductId, name: ProductName, price: Price, stock_quantity: i32) -> Self {
        Self {
            id,
            name,
            price,
            stock_quantity,
        }
    }
}
