use crate::db::{DbConnection, DbPool};
use crate::domain::product::{NewProduct, Product, ProductUpdate};
use crate::domain::types::ProductId;
use crate::pagination::Pagination;
use crate::repository::errors::RepositoryResult;

pub mod errors;
pub mod product;

/// Repository implementation backed by Diesel and SQLite.
///
/// The underlying `r2d2::Pool` is cheap to clone, allowing the repository to
/// be passed around freely between handlers.
#[derive(Clone)]
pub struct DieselRepository {
    pool: DbPool,
}

impl DieselRepository {
    /// Create a new repository from an established database pool.
    pub fn new(pool: DbPool) -> Self {
        Self { pool }
    }

    /// Get a pooled database connection.
    fn conn(&self) -> RepositoryResult<DbConnection> {
        Ok(self.pool.get()?)
    }
}

/// Query parameters used when listing products.
#[derive(Debug, Clone, Default)]
pub struct ProductListQuery {
    /// Pagination parameters; `None` returns the full listing.
    pub pagination: Option<Pagination>,
}

impl ProductListQuery {
    pub fn paginate(mut self, page: usize, per_page: usize) -> Self {
        self.pagination = Some(Pagination { page, per_page });
        self
    }
}

/// Read-only operations for product records.
pub trait ProductReader {
    /// List products ordered by category then name, optionally windowed.
    /// Returns the total record count alongside the selected page.
    fn list_products(&self, query: ProductListQuery) -> RepositoryResult<(usize, Vec<Product>)>;
    /// Retrieve a product by its identifier.
    fn get_product_by_id(&self, id: ProductId) -> RepositoryResult<Option<Product>>;
    /// Retrieve a product whose name matches case-insensitively.
    fn get_product_by_name_ci(&self, name: &str) -> RepositoryResult<Option<Product>>;
    /// Retrieve a product by exact code.
    fn get_product_by_code(&self, code: &str) -> RepositoryResult<Option<Product>>;
}

/// Write operations for product records.
pub trait ProductWriter {
    /// Persist a new product and return the stored record.
    fn create_product(&self, product: &NewProduct) -> RepositoryResult<Product>;
    /// Replace a product's mutable fields and return the stored record.
    fn update_product(&self, id: ProductId, update: &ProductUpdate) -> RepositoryResult<Product>;
    /// Delete a product, returning the number of affected rows.
    fn delete_product(&self, id: ProductId) -> RepositoryResult<usize>;
}
