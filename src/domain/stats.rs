use serde::{Deserialize, Serialize};

/// Catalog-wide aggregate metrics derived from the current record set.
///
/// Every field recomputes from a single snapshot of the store; nothing here
/// is persisted.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct CatalogStats {
    /// Number of product records.
    pub total_products: usize,
    /// Money tied up in stock: Σ(quantity × purchase price).
    pub total_investment: f64,
    /// Value of stock at sale prices: Σ(quantity × sale price).
    pub total_value: f64,
    /// `total_value - total_investment`; negative results are meaningful.
    pub potential_profit: f64,
    /// Products at or below their reorder threshold.
    pub low_stock_count: usize,
    /// Distinct non-empty category values.
    pub category_count: usize,
    /// Σ(quantity) across all products.
    pub total_units: i64,
}
