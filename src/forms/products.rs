use chrono::Utc;
use serde::Deserialize;
use thiserror::Error;
use validator::{Validate, ValidationErrors};

use crate::domain::product::{
    DEFAULT_CATEGORY, DEFAULT_REORDER_THRESHOLD, DEFAULT_UNIT, NewProduct, ProductUpdate,
};
use crate::domain::types::{
    CategoryName, NonEmptyString, ProductCode, ProductName, ProductPrice, ProductQuantity,
    ReorderThreshold, UnitName,
};

/// Raw field values for a product create or update, exactly as a form or
/// CLI delivers them. Numeric fields travel as strings; absent fields take
/// their documented defaults.
#[derive(Debug, Clone, Deserialize, Validate)]
pub struct ProductForm {
    #[validate(length(min = 1))]
    pub name: String,
    #[serde(default)]
    pub code: String,
    #[serde(default)]
    pub description: String,
    #[serde(default)]
    pub brand: String,
    #[serde(default)]
    pub category: String,
    #[serde(default)]
    pub subcategory: String,
    #[serde(default)]
    pub location: String,
    #[serde(default)]
    pub supplier: String,
    #[serde(default)]
    pub unit: String,
    #[serde(default)]
    pub quantity: Option<String>,
    #[serde(default)]
    pub purchase_price: Option<String>,
    #[serde(default)]
    pub sale_price: Option<String>,
    #[serde(default)]
    pub reorder_threshold: Option<String>,
}

/// Normalized, fully typed payload ready for persistence.
#[derive(Debug, Clone, PartialEq)]
pub struct ProductFormPayload {
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
}

impl ProductFormPayload {
    /// Advisory check: selling at or below cost does not block the write,
    /// but the caller should surface it.
    pub fn margin_warning(&self) -> bool {
        self.sale_price.get() <= self.purchase_price.get()
    }

    pub fn into_new_product(self) -> NewProduct {
        let now = Utc::now().naive_utc();
        NewProduct {
            code: self.code,
            name: self.name,
            description: self.description,
            brand: self.brand,
            category: self.category,
            subcategory: self.subcategory,
            location: self.location,
            supplier: self.supplier,
            quantity: self.quantity,
            purchase_price: self.purchase_price,
            sale_price: self.sale_price,
            reorder_threshold: self.reorder_threshold,
            unit: self.unit,
            created_at: now,
            updated_at: now,
        }
    }

    pub fn into_product_update(self) -> ProductUpdate {
        ProductUpdate {
            code: self.code,
            name: self.name,
            description: self.description,
            brand: self.brand,
            category: self.category,
            subcategory: self.subcategory,
            location: self.location,
            supplier: self.supplier,
            quantity: self.quantity,
            purchase_price: self.purchase_price,
            sale_price: self.sale_price,
            reorder_threshold: self.reorder_threshold,
            unit: self.unit,
            updated_at: Utc::now().naive_utc(),
        }
    }
}

#[derive(Debug, Error, PartialEq, Eq)]
pub enum ProductFormError {
    /// A required field was absent or empty after trimming.
    #[error("missing required field: {0}")]
    MissingRequiredField(&'static str),
    /// A numeric field failed to parse or was negative.
    #[error("invalid numeric value for field: {0}")]
    InvalidNumericValue(&'static str),
}

impl From<ValidationErrors> for ProductFormError {
    fn from(_: ValidationErrors) -> Self {
        // `name` is the only field with a declared validator rule.
        Self::MissingRequiredField("name")
    }
}

fn parse_i32(raw: Option<&String>, field: &'static str, default: i32) -> Result<i32, ProductFormError> {
    match raw {
        None => Ok(default),
        Some(value) => value
            .trim()
            .parse()
            .map_err(|_| ProductFormError::InvalidNumericValue(field)),
    }
}

fn parse_f64(raw: Option<&String>, field: &'static str) -> Result<f64, ProductFormError> {
    match raw {
        None => Ok(0.0),
        Some(value) => value
            .trim()
            .parse()
            .map_err(|_| ProductFormError::InvalidNumericValue(field)),
    }
}

fn optional_text(
    value: String,
    field: &'static str,
) -> Result<Option<NonEmptyString>, ProductFormError> {
    let trimmed = value.trim();
    if trimmed.is_empty() {
        Ok(None)
    } else {
        NonEmptyString::new_for_field(trimmed, field)
            .map(Some)
            .map_err(|_| ProductFormError::MissingRequiredField(field))
    }
}

fn text_or_default(
    value: String,
    default: &str,
    field: &'static str,
) -> Result<String, ProductFormError> {
    let trimmed = value.trim();
    if trimmed.is_empty() {
        Ok(default.to_string())
    } else {
        NonEmptyString::new_for_field(trimmed, field)
            .map(NonEmptyString::into_inner)
            .map_err(|_| ProductFormError::MissingRequiredField(field))
    }
}

impl TryFrom<ProductForm> for ProductFormPayload {
    type Error = ProductFormError;

    fn try_from(form: ProductForm) -> Result<Self, Self::Error> {
        form.validate()?;

        let name = ProductName::new(form.name)
            .map_err(|_| ProductFormError::MissingRequiredField("name"))?;

        let quantity = ProductQuantity::new(parse_i32(form.quantity.as_ref(), "quantity", 0)?)
            .map_err(|_| ProductFormError::InvalidNumericValue("quantity"))?;
        let purchase_price =
            ProductPrice::new(parse_f64(form.purchase_price.as_ref(), "purchase_price")?)
                .map_err(|_| ProductFormError::InvalidNumericValue("purchase_price"))?;
        let sale_price = ProductPrice::new(parse_f64(form.sale_price.as_ref(), "sale_price")?)
            .map_err(|_| ProductFormError::InvalidNumericValue("sale_price"))?;
        let reorder_threshold = ReorderThreshold::new(parse_i32(
            form.reorder_threshold.as_ref(),
            "reorder_threshold",
            DEFAULT_REORDER_THRESHOLD,
        )?)
        .map_err(|_| ProductFormError::InvalidNumericValue("reorder_threshold"))?;

        let category =
            CategoryName::new(text_or_default(form.category, DEFAULT_CATEGORY, "category")?)
                .map_err(|_| ProductFormError::MissingRequiredField("category"))?;
        let unit = UnitName::new(text_or_default(form.unit, DEFAULT_UNIT, "unit")?)
            .map_err(|_| ProductFormError::MissingRequiredField("unit"))?;

        let code = {
            let trimmed = form.code.trim();
            if trimmed.is_empty() {
                // Empty code means "no code": it takes no part in uniqueness.
                None
            } else {
                Some(
                    ProductCode::new(trimmed)
                        .map_err(|_| ProductFormError::MissingRequiredField("code"))?,
                )
            }
        };

        Ok(Self {
            code,
            name,
            description: optional_text(form.description, "description")?,
            brand: optional_text(form.brand, "brand")?,
            category,
            subcategory: optional_text(form.subcategory, "subcategory")?,
            location: optional_text(form.location, "location")?,
            supplier: optional_text(form.supplier, "supplier")?,
            quantity,
            purchase_price,
            sale_price,
            reorder_threshold,
            unit,
        })
    }
}
