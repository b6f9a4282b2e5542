//! Core types for Counterpoint.
//!
//! This module provides type-safe wrappers for common domain concepts.

pub mod id;
pub mod name;
pub mod price;
pub mod product;
pub mod quantity;

pub use id::*;
pub use name::{ProductName, ProductNameError};
pub use price::{Price, PriceError};
pub use product::Product;
pub use quantity::{Quantity, QuantityError};
