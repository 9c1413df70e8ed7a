use chrono::NaiveDateTime;
use serde::{Deserialize, Serialize};

use crate::domain::types::{
    CategoryName, NonEmptyString, ProductCode, ProductId, ProductName, ProductPrice,
    ProductQuantity, ReorderThreshold, SearchMode, UnitName,
};

/// Category assigned when the input leaves the field blank.
pub const DEFAULT_CATEGORY: &str = "General";
/// Unit of measure assigned when the input leaves the field blank.
pub const DEFAULT_UNIT: &str = "unit";
/// Reorder threshold assigned when the input leaves the field blank.
pub const DEFAULT_REORDER_THRESHOLD: i32 = 5;

/// A stocked product in the catalog.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Product {
    pub id: ProductId,
    pub code: Option<ProductCode>,
    pub name: ProductName,
    pub description: Option<NonEmptyString>,
    pub brand: Option<NonEmptyString>,
    pub category: CategoryName,
    pub subcategory: Option<NonEmptyString>,
    pub location: Option<NonEmptyString>,
    pub supplier: Option<NonEmptyString>,
    pub quantity: ProductQuantity,
    pub purchase_price: ProductPrice,
    pub sale_price: ProductPrice,
    pub reorder_threshold: ReorderThreshold,
    pub unit: UnitName,
    pub created_at: NaiveDateTime,
    pub updated_at: NaiveDateTime,
}

impl Product {
    /// A product is low-stock when its quantity is at or below its reorder
    /// threshold.
    pub fn is_low_stock(&self) -> bool {
        self.quantity.get() <= self.reorder_threshold.get()
    }

    /// Case-insensitive substring match against the fields selected by
    /// `mode`. An empty term never matches; search is opt-in, not "list all".
    pub fn matches(&self, term: &str, mode: SearchMode) -> bool {
        let needle = term.trim().to_lowercase();
        if needle.is_empty() {
            return false;
        }
        let contains = |value: &str| value.to_lowercase().contains(needle.as_str());
        match mode {
            SearchMode::ByName => {
                contains(self.name.as_str())
                    || self.description.as_deref().is_some_and(|v| contains(v))
                    || self.code.as_deref().is_some_and(|v| contains(v))
                    || self.brand.as_deref().is_some_and(|v| contains(v))
            }
            SearchMode::ByCategory => {
                contains(self.category.as_str())
                    || self.subcategory.as_deref().is_some_and(|v| contains(v))
            }
            SearchMode::ByCode => self.code.as_deref().is_some_and(|v| contains(v)),
        }
    }
}

/// Information required to create a new [`Product`].
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct NewProduct {
    pub code: Option<ProductCode>,
    pub name: ProductName,
    pub description: Option<NonEmptyString>,
    pub brand: Option<NonEmptyString>,
    pub category: CategoryName,
    pub subcategory: Option<NonEmptyString>,
    pub location: Option<NonEmptyString>,
    pub supplier: Option<NonEmptyString>,
    pub quantity: ProductQuantity,
    pub purchase_price: ProductPrice,
    pub sale_price: ProductPrice,
    pub reorder_threshold: ReorderThreshold,
    pub unit: UnitName,
    pub created_at: NaiveDateTime,
    pub updated_at: NaiveDateTime,
}

/// Full replacement of a [`Product`]'s mutable fields.
///
/// `created_at` is deliberately absent: it is set once at creation and never
/// rewritten.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct ProductUpdate {
    pub code: Option<ProductCode>,
    pub name: ProductName,
    pub description: Option<NonEmptyString>,
    pub brand: Option<NonEmptyString>,
    pub category: CategoryName,
    pub subcategory: Option<NonEmptyString>,
    pub location: Option<NonEmptyString>,
    pub supplier: Option<NonEmptyString>,
    pub quantity: ProductQuantity,
    pub purchase_price: ProductPrice,
    pub sale_price: ProductPrice,
    pub reorder_threshold: ReorderThreshold,
    pub unit: UnitName,
    pub updated_at: NaiveDateTime,
}
