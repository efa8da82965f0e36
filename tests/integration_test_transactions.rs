mod common;

use common::TestApp;
use farm_to_table_backend::domain::models::{product::Product, product_variant::ProductVariant};

fn product(name: &str) -> Product {
    Product::new(
        name.to_string(),
        name.to_string(),
        "desc".to_string(),
        "veg".to_string(),
        "img.png".to_string(),
    )
}

/// Forcing a primary-key collision on the variant insert makes the
/// variant-side step fail after the product-side step succeeded, which is
/// exactly the all-or-nothing case the write path must cover.
#[tokio::test]
async fn test_failed_variant_insert_rolls_back_product_create() {
    let app = TestApp::new().await;
    let repo = &app.state.product_repo;

    let existing = product("Carrot");
    let existing_variant = ProductVariant::new(existing.id.clone(), "1kg".to_string(), 35.0, 60);
    repo.create_with_variants(&existing, &[existing_variant.clone()])
        .await
        .unwrap();

    let doomed = product("Beetroot");
    let mut colliding = ProductVariant::new(doomed.id.clone(), "1kg".to_string(), 40.0, 10);
    colliding.id = existing_variant.id.clone();

    let result = repo.create_with_variants(&doomed, &[colliding]).await;
    assert!(result.is_err());

    // The product insert from the failed call must not be visible.
    assert!(repo.find_by_id(&doomed.id).await.unwrap().is_none());
}

#[tokio::test]
async fn test_failed_variant_insert_rolls_back_product_update() {
    let app = TestApp::new().await;
    let repo = &app.state.product_repo;

    let other = product("Carrot");
    let other_variant = ProductVariant::new(other.id.clone(), "1kg".to_string(), 35.0, 60);
    repo.create_with_variants(&other, &[other_variant.clone()])
        .await
        .unwrap();

    let target = product("Beetroot");
    let target_variant = ProductVariant::new(target.id.clone(), "500g".to_string(), 20.0, 30);
    repo.create_with_variants(&target, &[target_variant.clone()])
        .await
        .unwrap();

    let mut changed = target.clone();
    changed.name = "Golden Beetroot".to_string();
    let mut colliding = ProductVariant::new(target.id.clone(), "1kg".to_string(), 38.0, 15);
    colliding.id = other_variant.id.clone();

    let result = repo
        .update_with_variants(&changed, Some(&[colliding]))
        .await;
    assert!(result.is_err());

    // Field change and variant replacement both rolled back.
    let reloaded = repo.find_by_id(&target.id).await.unwrap().unwrap();
    assert_eq!(reloaded.name, "Beetroot");

    let listing = repo.list_with_variants().await.unwrap();
    let entry = listing
        .iter()
        .find(|p| p.product.id == target.id)
        .expect("target product missing from listing");
    assert_eq!(entry.variants.len(), 1);
    assert_eq!(entry.variants[0].id, target_variant.id);
}

#[tokio::test]
async fn test_delete_missing_product_leaves_no_trace() {
    let app = TestApp::new().await;
    let repo = &app.state.product_repo;

    let never_stored = product("Phantom");
    let result = repo.delete_with_variants(&never_stored.id).await;
    assert!(result.is_err());
}
