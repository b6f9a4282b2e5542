//! Counterpoint Checkout - cart engine and catalog search.
//!
//! This crate is the logical core of the add-to-cart screen. It is pure:
//! no I/O, no database access, no widgets. The hosting UI shell feeds it
//! the current selection, the raw quantity text, and the cart for this
//! screen session; it hands back the updated cart state, the grand total,
//! and a typed error when an add is rejected.
//!
//! # Modules
//!
//! - [`cart`] - The [`Cart`] and its immutable [`LineItem`] rows
//! - [`engine`] - The [`CartEngine`]: add-line validation and totals
//! - [`search`] - Substring product-name search over a fetched catalog
//! - [`catalog`] - The [`CatalogProvider`] seam to the external catalog
//!
//! # Example
//!
//! ```
//! use counterpoint_checkout::{Cart, CartEngine};
//! use counterpoint_core::{Price, Product, ProductId, ProductName};
//! use rust_decimal::Decimal;
//!
//! let engine = CartEngine::new();
//! let mut cart = engine.reset_cart();
//!
//! let product = Product::new(
//!     ProductId::new(1),
//!     ProductName::parse("Produto Teste 1").unwrap(),
//!     Price::new(Decimal::new(1050, 2)).unwrap(),
//!     100,
//! );
//!
//! let added = engine.add_line(Some(&product), "2", &mut cart).unwrap();
//! assert!(added.clear_selection);
//! assert_eq!(cart.grand_total(), Decimal::new(2100, 2));
//! ```

#![cfg_attr(not(test), forbid(unsafe_code))]

pub mod cart;
pub mod catalog;
pub mod engine;
pub mod search;

pub use cart::{Cart, LineItem};
pub use catalog::{CatalogProvider, InMemoryCatalog};
pub use engine::{AddLineError, CartEngine, LineAdded, QuantityPolicy};
pub use search::search_by_name;
