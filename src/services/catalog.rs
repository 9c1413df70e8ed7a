use std::collections::BTreeSet;

use crate::domain::product::Product;
use crate::domain::types::{NonEmptyString, ProductCode, ProductId, ProductName, SearchMode};
use crate::forms::products::ProductFormPayload;
use crate::pagination::{DEFAULT_ITEMS_PER_PAGE, Paginated};
use crate::repository::{ProductListQuery, ProductReader, ProductWriter};

use super::{ServiceError, ServiceResult};

/// Result of a successful create or update.
///
/// `margin_warning` is advisory: the write went through, but the product
/// sells at or below cost and the caller should surface that.
#[derive(Debug, Clone)]
pub struct SavedProduct {
    pub product: Product,
    pub margin_warning: bool,
}

/// Resolve name/code conflicts against the store's current contents.
///
/// Name comparison is case-insensitive exact match; code comparison is exact
/// and only enforced for present codes. On update the record's own id is
/// excluded from the conflict scan.
fn ensure_unique<R>(
    name: &ProductName,
    code: Option<&ProductCode>,
    exclude: Option<ProductId>,
    repo: &R,
) -> ServiceResult<()>
where
    R: ProductReader,
{
    let existing = match repo.get_product_by_name_ci(name.as_str()) {
        Ok(existing) => existing,
        Err(e) => {
            log::error!("Failed to check name uniqueness: {e}");
            return Err(e.into());
        }
    };
    if let Some(existing) = existing {
        if exclude != Some(existing.id) {
            return Err(ServiceError::NameConflict);
        }
    }

    if let Some(code) = code {
        let existing = match repo.get_product_by_code(code.as_str()) {
            Ok(existing) => existing,
            Err(e) => {
                log::error!("Failed to check code uniqueness: {e}");
                return Err(e.into());
            }
        };
        if let Some(existing) = existing {
            if exclude != Some(existing.id) {
                return Err(ServiceError::CodeConflict);
            }
        }
    }

    Ok(())
}

/// Persist a new product after the uniqueness scan.
///
/// Store-level `UNIQUE` violations surface as the same conflicts, so a
/// concurrent duplicate writer loses cleanly instead of persisting.
pub fn create_product<R>(payload: ProductFormPayload, repo: &R) -> ServiceResult<SavedProduct>
where
    R: ProductReader + ProductWriter,
{
    ensure_unique(&payload.name, payload.code.as_ref(), None, repo)?;

    let margin_warning = payload.margin_warning();
    let product = match repo.create_product(&payload.into_new_product()) {
        Ok(product) => product,
        Err(e) => {
            log::error!("Failed to create product: {e}");
            return Err(e.into());
        }
    };

    Ok(SavedProduct {
        product,
        margin_warning,
    })
}

/// Replace a product's fields after revalidation and the uniqueness scan,
/// refreshing `updated_at`.
pub fn update_product<R>(
    id: i32,
    payload: ProductFormPayload,
    repo: &R,
) -> ServiceResult<SavedProduct>
where
    R: ProductReader + ProductWriter,
{
    let id = match ProductId::new(id) {
        Ok(id) => id,
        Err(_) => return Err(ServiceError::NotFound),
    };

    match repo.get_product_by_id(id) {
        Ok(Some(_)) => {}
        Ok(None) => return Err(ServiceError::NotFound),
        Err(e) => {
            log::error!("Failed to get product: {e}");
            return Err(e.into());
        }
    }

    ensure_unique(&payload.name, payload.code.as_ref(), Some(id), repo)?;

    let margin_warning = payload.margin_warning();
    let product = match repo.update_product(id, &payload.into_product_update()) {
        Ok(product) => product,
        Err(e) => {
            log::error!("Failed to update product: {e}");
            return Err(e.into());
        }
    };

    Ok(SavedProduct {
        product,
        margin_warning,
    })
}

/// Hard-remove a product. Deleting an absent id reports `NotFound`.
pub fn delete_product<R>(id: i32, repo: &R) -> ServiceResult<()>
where
    R: ProductWriter,
{
    let id = match ProductId::new(id) {
        Ok(id) => id,
        Err(_) => return Err(ServiceError::NotFound),
    };

    match repo.delete_product(id) {
        Ok(0) => Err(ServiceError::NotFound),
        Ok(_) => Ok(()),
        Err(e) => {
            log::error!("Failed to delete product: {e}");
            Err(e.into())
        }
    }
}

/// Fetch a single product by id.
pub fn get_product<R>(id: i32, repo: &R) -> ServiceResult<Product>
where
    R: ProductReader,
{
    let id = match ProductId::new(id) {
        Ok(id) => id,
        Err(_) => return Err(ServiceError::NotFound),
    };

    match repo.get_product_by_id(id) {
        Ok(Some(product)) => Ok(product),
        Ok(None) => Err(ServiceError::NotFound),
        Err(e) => {
            log::error!("Failed to get product: {e}");
            Err(e.into())
        }
    }
}

/// Full catalog listing, ordered by category then name.
pub fn list_products<R>(repo: &R) -> ServiceResult<Vec<Product>>
where
    R: ProductReader,
{
    match repo.list_products(ProductListQuery::default()) {
        Ok((_total, products)) => Ok(products),
        Err(e) => {
            log::error!("Failed to list products: {e}");
            Err(e.into())
        }
    }
}

/// One page of the catalog listing.
pub fn list_products_paged<R>(page: usize, repo: &R) -> ServiceResult<Paginated<Product>>
where
    R: ProductReader,
{
    match repo.list_products(ProductListQuery::default().paginate(page, DEFAULT_ITEMS_PER_PAGE)) {
        Ok((total, products)) => Ok(Paginated::new(
            products,
            page,
            total.div_ceil(DEFAULT_ITEMS_PER_PAGE),
        )),
        Err(e) => {
            log::error!("Failed to list products: {e}");
            Err(e.into())
        }
    }
}

/// Search the catalog. An empty term yields an empty result set; results
/// order ascending by name.
pub fn search_products<R>(term: &str, mode: SearchMode, repo: &R) -> ServiceResult<Vec<Product>>
where
    R: ProductReader,
{
    let term = term.trim();
    if term.is_empty() {
        return Ok(Vec::new());
    }

    let products = list_products(repo)?;
    let mut matches: Vec<Product> = products
        .into_iter()
        .filter(|p| p.matches(term, mode))
        .collect();
    matches.sort_by(|a, b| a.name.as_str().cmp(b.name.as_str()));

    Ok(matches)
}

/// Products at or below their reorder threshold, lowest quantity first.
pub fn list_low_stock<R>(repo: &R) -> ServiceResult<Vec<Product>>
where
    R: ProductReader,
{
    let products = list_products(repo)?;
    let mut low: Vec<Product> = products.into_iter().filter(Product::is_low_stock).collect();
    low.sort_by_key(|p| p.quantity);

    Ok(low)
}

/// Distinct category values, ascending.
pub fn list_categories<R>(repo: &R) -> ServiceResult<Vec<String>>
where
    R: ProductReader,
{
    let products = list_products(repo)?;
    let categories: BTreeSet<String> = products
        .into_iter()
        .map(|p| p.category.into_inner())
        .collect();

    Ok(categories.into_iter().collect())
}

/// Distinct non-empty brand values, ascending.
pub fn list_brands<R>(repo: &R) -> ServiceResult<Vec<String>>
where
    R: ProductReader,
{
    let products = list_products(repo)?;
    let brands: BTreeSet<String> = products
        .into_iter()
        .filter_map(|p| p.brand.map(NonEmptyString::into_inner))
        .collect();

    Ok(brands.into_iter().collect())
}
