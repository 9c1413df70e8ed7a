use chrono::NaiveDateTime;
use diesel::prelude::*;

use crate::domain::product::{
    NewProduct as DomainNewProduct, Product as DomainProduct, ProductUpdate as DomainProductUpdate,
};
use crate::domain::types::{
    CategoryName, NonEmptyString, ProductCode, ProductName, ProductPrice, ProductQuantity,
    ReorderThreshold, TypeConstraintError, UnitName,
};

/// Diesel model representing the `products` table.
#[derive(Debug, Clone, Identifiable, Queryable)]
#[diesel(table_name = crate::schema::products)]
pub struct Product {
    pub id: i32,
    pub code: Option<String>,
    pub name: String,
    pub description: Option<String>,
    pub brand: Option<String>,
    pub category: String,
    pub subcategory: Option<String>,
    pub location: Option<String>,
    pub supplier: Option<String>,
    pub quantity: i32,
    pub purchase_price: f64,
    pub sale_price: f64,
    pub reorder_threshold: i32,
    pub unit: String,
    pub created_at: NaiveDateTime,
    pub updated_at: NaiveDateTime,
}

/// Insertable form of [`Product`].
#[derive(Debug, Insertable)]
#[diesel(table_name = crate::schema::products)]
pub struct NewProduct {
    pub code: Option<String>,
    pub name: String,
    pub description: Option<String>,
    pub brand: Option<String>,
    pub category: String,
    pub subcategory: Option<String>,
    pub location: Option<String>,
    pub supplier: Option<String>,
    pub quantity: i32,
    pub purchase_price: f64,
    pub sale_price: f64,
    pub reorder_threshold: i32,
    pub unit: String,
    pub created_at: NaiveDateTime,
    pub updated_at: NaiveDateTime,
}

/// Full-replacement changeset for [`Product`].
///
/// `treat_none_as_null` makes cleared optional fields write NULL instead of
/// leaving the stored value untouched. `created_at` is not part of the
/// changeset.
#[derive(Debug, AsChangeset)]
#[diesel(table_name = crate::schema::products)]
#[diesel(treat_none_as_null = true)]
pub struct ProductChangeset {
    pub code: Option<String>,
    pub name: String,
    pub description: Option<String>,
    pub brand: Option<String>,
    pub category: String,
    pub subcategory: Option<String>,
    pub location: Option<String>,
    pub supplier: Option<String>,
    pub quantity: i32,
    pub purchase_price: f64,
    pub sale_price: f64,
    pub reorder_threshold: i32,
    pub unit: String,
    pub updated_at: NaiveDateTime,
}

fn optional_text(
    value: Option<String>,
    field: &'static str,
) -> Result<Option<NonEmptyString>, TypeConstraintError> {
    value
        .map(|v| NonEmptyString::new_for_field(v, field))
        .transpose()
}

impl TryFrom<Product> for DomainProduct {
    type Error = TypeConstraintError;

    fn try_from(product: Product) -> Result<Self, Self::Error> {
        Ok(Self {
            id: product.id.try_into()?,
            code: product.code.map(ProductCode::new).transpose()?,
            name: ProductName::new(product.name)?,
            description: optional_text(product.description, "description")?,
            brand: optional_text(product.brand, "brand")?,
            category: CategoryName::new(product.category)?,
            subcategory: optional_text(product.subcategory, "subcategory")?,
            location: optional_text(product.location, "location")?,
            supplier: optional_text(product.supplier, "supplier")?,
            quantity: ProductQuantity::new(product.quantity)?,
            purchase_price: ProductPrice::new(product.purchase_price)?,
            sale_price: ProductPrice::new(product.sale_price)?,
            reorder_threshold: ReorderThreshold::new(product.reorder_threshold)?,
            unit: UnitName::new(product.unit)?,
            created_at: product.created_at,
            updated_at: product.updated_at,
        })
    }
}

impl From<DomainNewProduct> for NewProduct {
    fn from(product: DomainNewProduct) -> Self {
        Self {
            code: product.code.map(ProductCode::into_inner),
            name: product.name.into_inner(),
            description: product.description.map(NonEmptyString::into_inner),
            brand: product.brand.map(NonEmptyString::into_inner),
            category: product.category.into_inner(),
            subcategory: product.subcategory.map(NonEmptyString::into_inner),
            location: product.location.map(NonEmptyString::into_inner),
            supplier: product.supplier.map(NonEmptyString::into_inner),
            quantity: product.quantity.get(),
            purchase_price: product.purchase_price.get(),
            sale_price: product.sale_price.get(),
            reorder_threshold: product.reorder_threshold.get(),
            unit: product.unit.into_inner(),
            created_at: product.created_at,
            updated_at: product.updated_at,
        }
    }
}

impl From<DomainProductUpdate> for ProductChangeset {
    fn from(update: DomainProductUpdate) -> Self {
        Self {
            code: update.code.map(ProductCode::into_inner),
            name: update.name.into_inner(),
            description: update.description.map(NonEmptyString::into_inner),
            brand: update.brand.map(NonEmptyString::into_inner),
            category: update.category.into_inner(),
            subcategory: update.subcategory.map(NonEmptyString::into_inner),
            location: update.location.map(NonEmptyString::into_inner),
            supplier: update.supplier.map(NonEmptyString::into_inner),
            quantity: update.quantity.get(),
            purchase_price: update.purchase_price.get(),
            sale_price: update.sale_price.get(),
            reorder_threshold: update.reorder_threshold.get(),
            unit: update.unit.into_inner(),
            updated_at: update.updated_at,
        }
    }
}
