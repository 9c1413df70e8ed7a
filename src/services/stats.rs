use std::collections::BTreeSet;

use crate::domain::stats::CatalogStats;
use crate::repository::{ProductListQuery, ProductReader};

use super::ServiceResult;

/// Compute catalog-wide aggregates from a single snapshot of the record set.
///
/// Reading the whole catalog once keeps every metric consistent with the
/// others; nothing here issues independently-timed partial reads.
pub fn collect_stats<R>(repo: &R) -> ServiceResult<CatalogStats>
where
    R: ProductReader,
{
    let products = match repo.list_products(ProductListQuery::default()) {
        Ok((_total, products)) => products,
        Err(e) => {
            log::error!("Failed to load products for stats: {e}");
            return Err(e.into());
        }
    };

    let mut stats = CatalogStats {
        total_products: products.len(),
        ..CatalogStats::default()
    };

    let mut categories = BTreeSet::new();
    for product in &products {
        let quantity = f64::from(product.quantity.get());
        stats.total_investment += quantity * product.purchase_price.get();
        stats.total_value += quantity * product.sale_price.get();
        stats.total_units += i64::from(product.quantity.get());
        if product.is_low_stock() {
            stats.low_stock_count += 1;
        }
        categories.insert(product.category.as_str().to_string());
    }

    stats.category_count = categories.len();
    stats.potential_profit = stats.total_value - stats.total_investment;

    Ok(stats)
}
