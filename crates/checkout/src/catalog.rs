//! The seam to the external catalog collaborator.
//!
//! The checkout core never talks to storage. Whatever backs the catalog -
//! a database, a remote API, a fixture - sits behind [`CatalogProvider`]
//! and hands the core already-fetched, already-validated [`Product`]
//! values. Provider-side failures degrade to an empty list; they are not
//! the core's errors to report.

use counterpoint_core::Product;

use crate::search::search_by_name;

/// Supplies the product list for the add-to-cart screen.
pub trait CatalogProvider {
    /// All products available to the screen.
    ///
    /// An unavailable backing store yields an empty list, never an error.
    fn products(&self) -> Vec<Product>;

    /// Products whose name matches `term`.
    ///
    /// Implementations own any escaping their storage needs; the term
    /// arrives exactly as typed. A failed or non-matching search yields an
    /// empty list, never an error.
    fn search_products_by_name(&self, term: &str) -> Vec<Product>;
}

/// A provider over a plain in-memory product list.
///
/// The reference implementation: backs the test suites and any embedding
/// that already holds its catalog in memory. Search delegates to
/// [`search_by_name`], so it needs no escaping at all.
#[derive(Debug, Clone, Default)]
pub struct InMemoryCatalog {
    products: Vec<Product>,
}

impl InMemoryCatalog {
    /// Create a catalog over the given products.
    #[must_use]
    pub const fn new(products: Vec<Product>) -> Self {
        Self { products }
    }
}

impl CatalogProvider for InMemoryCatalog {
    fn products(&self) -> Vec<Product> {
        self.products.clone()
    }

    fn search_products_by_name(&self, term: &str) -> Vec<Product> {
        search_by_name(term, &self.products)
    }
}
