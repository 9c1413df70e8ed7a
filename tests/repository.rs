use chrono::Utc;
use stockroom::domain::product::{NewProduct, ProductUpdate};
use stockroom::domain::types::{
    CategoryName, ProductCode, ProductId, ProductName, ProductPrice, ProductQuantity,
    ReorderThreshold, UnitName,
};
use stockroom::repository::errors::RepositoryError;
use stockroom::repository::{DieselRepository, ProductListQuery, ProductReader, ProductWriter};

mod common;

fn new_product(name: &str, code: Option<&str>, category: &str) -> NewProduct {
    let now = Utc::now().naive_utc();
    NewProduct {
        code: code.map(|c| ProductCode::new(c).expect("valid code")),
        name: ProductName::new(name).expect("valid name"),
        description: None,
        brand: None,
        category: CategoryName::new(category).expect("valid category"),
        subcategory: None,
        location: None,
        supplier: None,
        quantity: ProductQuantity::new(10).expect("valid quantity"),
        purchase_price: ProductPrice::new(2.5).expect("valid price"),
        sale_price: ProductPrice::new(4.0).expect("valid price"),
        reorder_threshold: ReorderThreshold::new(5).expect("valid threshold"),
        unit: UnitName::new("unit").expect("valid unit"),
        created_at: now,
        updated_at: now,
    }
}

#[test]
fn create_returns_the_stored_record() {
    let test_db = common::TestDb::new();
    let repo = DieselRepository::new(test_db.pool());

    let created = repo
        .create_product(&new_product("Claw Hammer", Some("HER-001"), "Hand Tools"))
        .expect("should create product");

    assert_eq!(created.id, 1);
    assert_eq!(created.name.as_str(), "Claw Hammer");
    assert_eq!(created.code.as_deref(), Some("HER-001"));
    assert_eq!(created.quantity, 10);
    assert_eq!(created.purchase_price, 2.5);
}

#[test]
fn lookups_by_id_name_and_code() {
    let test_db = common::TestDb::new();
    let repo = DieselRepository::new(test_db.pool());

    let created = repo
        .create_product(&new_product("Claw Hammer", Some("HER-001"), "Hand Tools"))
        .expect("should create product");

    let by_id = repo
        .get_product_by_id(created.id)
        .expect("lookup should succeed")
        .expect("product should exist");
    assert_eq!(by_id.name.as_str(), "Claw Hammer");

    let by_name = repo
        .get_product_by_name_ci("  CLAW hammer ")
        .expect("lookup should succeed")
        .expect("case-insensitive name lookup should match");
    assert_eq!(by_name.id, created.id);

    let by_code = repo
        .get_product_by_code("HER-001")
        .expect("lookup should succeed")
        .expect("code lookup should match");
    assert_eq!(by_code.id, created.id);

    assert!(
        repo.get_product_by_id(ProductId::new(999).unwrap())
            .expect("lookup should succeed")
            .is_none()
    );
}

#[test]
fn duplicate_names_are_rejected_by_the_store() {
    let test_db = common::TestDb::new();
    let repo = DieselRepository::new(test_db.pool());

    repo.create_product(&new_product("Claw Hammer", None, "Hand Tools"))
        .expect("should create product");

    let err = repo
        .create_product(&new_product("claw hammer", None, "Hand Tools"))
        .expect_err("NOCASE unique constraint should reject the duplicate");

    assert!(matches!(err, RepositoryError::UniqueViolation(_)));
}

#[test]
fn duplicate_codes_are_rejected_by_the_store() {
    let test_db = common::TestDb::new();
    let repo = DieselRepository::new(test_db.pool());

    repo.create_product(&new_product("Claw Hammer", Some("HER-001"), "Hand Tools"))
        .expect("should create product");

    let err = repo
        .create_product(&new_product("Hand Saw", Some("HER-001"), "Hand Tools"))
        .expect_err("unique constraint should reject the duplicate code");

    match err {
        RepositoryError::UniqueViolation(message) => {
            assert!(message.contains("code"), "unexpected message: {message}");
        }
        other => panic!("expected a unique violation, got: {other}"),
    }
}

#[test]
fn absent_codes_do_not_collide() {
    let test_db = common::TestDb::new();
    let repo = DieselRepository::new(test_db.pool());

    repo.create_product(&new_product("Claw Hammer", None, "Hand Tools"))
        .expect("should create product");
    repo.create_product(&new_product("Hand Saw", None, "Hand Tools"))
        .expect("a second codeless product should be accepted");
}

#[test]
fn update_replaces_fields_and_preserves_created_at() {
    let test_db = common::TestDb::new();
    let repo = DieselRepository::new(test_db.pool());

    let created = repo
        .create_product(&new_product("Claw Hammer", Some("HER-001"), "Hand Tools"))
        .expect("should create product");

    let stamp = Utc::now().naive_utc();
    let update = ProductUpdate {
        code: None,
        name: ProductName::new("Framing Hammer").unwrap(),
        description: None,
        brand: None,
        category: CategoryName::new("Hand Tools").unwrap(),
        subcategory: None,
        location: None,
        supplier: None,
        quantity: ProductQuantity::new(7).unwrap(),
        purchase_price: ProductPrice::new(3.0).unwrap(),
        sale_price: ProductPrice::new(5.5).unwrap(),
        reorder_threshold: ReorderThreshold::new(2).unwrap(),
        unit: UnitName::new("unit").unwrap(),
        updated_at: stamp,
    };

    let updated = repo
        .update_product(created.id, &update)
        .expect("should update product");

    assert_eq!(updated.name.as_str(), "Framing Hammer");
    assert_eq!(updated.code, None);
    assert_eq!(updated.quantity, 7);
    assert_eq!(updated.created_at, created.created_at);
    assert_eq!(updated.updated_at, stamp);
}

#[test]
fn updating_a_missing_product_reports_not_found() {
    let test_db = common::TestDb::new();
    let repo = DieselRepository::new(test_db.pool());

    let update = ProductUpdate {
        code: None,
        name: ProductName::new("Ghost").unwrap(),
        description: None,
        brand: None,
        category: CategoryName::new("General").unwrap(),
        subcategory: None,
        location: None,
        supplier: None,
        quantity: ProductQuantity::new(0).unwrap(),
        purchase_price: ProductPrice::new(0.0).unwrap(),
        sale_price: ProductPrice::new(0.0).unwrap(),
        reorder_threshold: ReorderThreshold::new(5).unwrap(),
        unit: UnitName::new("unit").unwrap(),
        updated_at: Utc::now().naive_utc(),
    };

    let err = repo
        .update_product(ProductId::new(42).unwrap(), &update)
        .expect_err("missing row should not update");

    assert!(matches!(err, RepositoryError::NotFound));
}

#[test]
fn delete_reports_affected_rows() {
    let test_db = common::TestDb::new();
    let repo = DieselRepository::new(test_db.pool());

    let created = repo
        .create_product(&new_product("Claw Hammer", None, "Hand Tools"))
        .expect("should create product");

    assert_eq!(repo.delete_product(created.id).unwrap(), 1);
    assert_eq!(repo.delete_product(created.id).unwrap(), 0);
}

#[test]
fn listing_orders_by_category_then_name_and_paginates() {
    let test_db = common::TestDb::new();
    let repo = DieselRepository::new(test_db.pool());

    repo.create_product(&new_product("PVC Elbow", None, "Plumbing"))
        .expect("should create product");
    repo.create_product(&new_product("Wrench", None, "Hand Tools"))
        .expect("should create product");
    repo.create_product(&new_product("Hammer", None, "Hand Tools"))
        .expect("should create product");

    let (total, products) = repo
        .list_products(ProductListQuery::default())
        .expect("should list products");
    let names: Vec<&str> = products.iter().map(|p| p.name.as_str()).collect();

    assert_eq!(total, 3);
    assert_eq!(names, vec!["Hammer", "Wrench", "PVC Elbow"]);

    let (total, page) = repo
        .list_products(ProductListQuery::default().paginate(2, 2))
        .expect("should list second page");

    assert_eq!(total, 3);
    assert_eq!(page.len(), 1);
    assert_eq!(page[0].name.as_str(), "PVC Elbow");
}
