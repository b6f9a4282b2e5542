//! Product name search over an already-fetched catalog.

use tracing::debug;

use counterpoint_core::Product;

/// Find products whose name contains `term`.
///
/// Plain case-sensitive substring matching, in memory only. The term is
/// never handed to a query layer, so there is nothing to escape: quote
/// characters, SQL metacharacters, script tags, control characters, and
/// multi-kilobyte payloads are all just bytes that fail (or happen) to
/// match a name.
///
/// An empty term, an empty catalog, or no match yields an empty `Vec`;
/// this function has no failure mode.
///
/// # Example
///
/// ```
/// use counterpoint_checkout::search_by_name;
/// use counterpoint_core::{Price, Product, ProductId, ProductName};
/// use rust_decimal::Decimal;
///
/// let catalog = vec![Product::new(
///     ProductId::new(1),
///     ProductName::parse("Produto Teste 1").unwrap(),
///     Price::new(Decimal::new(1050, 2)).unwrap(),
///     100,
/// )];
///
/// assert_eq!(search_by_name("Pro", &catalog).len(), 1);
/// assert!(search_by_name("zzz-no-match", &catalog).is_empty());
/// ```
#[must_use]
pub fn search_by_name(term: &str, catalog: &[Product]) -> Vec<Product> {
    if term.is_empty() {
        return Vec::new();
    }

    let hits: Vec<Product> = catalog
        .iter()
        .filter(|product| product.name.as_str().contains(term))
        .cloned()
        .collect();

    // Terms are operator input; log the length, not the content.
    debug!(term_len = term.len(), hits = hits.len(), "name search");

    hits
}
