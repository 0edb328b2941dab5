use popcorn_culture::catalog::CatalogStore;
use popcorn_culture::config::{ConfigError, StorefrontConfig};
use popcorn_culture::lifecycle::{StartupError, StorefrontSystem};
use popcorn_culture::model::{Category, Product, ProductId};
use popcorn_culture::notice::NOTICE_TTL;
use popcorn_culture::storefront_actor::{CartChange, StorefrontError};
use state_actor::StateHandle;
use std::time::Duration;
use tokio::time::{timeout, Instant};

fn entries(view: &popcorn_culture::model::StorefrontView) -> Vec<(&str, u32)> {
    view.cart
        .iter()
        .map(|e| (e.product.id.as_str(), e.quantity))
        .collect()
}

#[tokio::test]
async fn test_cart_walkthrough_through_full_system() {
    let system = StorefrontSystem::new(&StorefrontConfig::default()).unwrap();
    let client = &system.storefront_client;
    let stand = ProductId::from("BU-01");

    // A: empty cart, add Phone Stand
    assert_eq!(client.add_to_cart(stand.clone()).await.unwrap(), 1);
    let view = client.snapshot().await.unwrap();
    assert_eq!(view.cart_count, 1);
    assert_eq!(entries(&view), [("BU-01", 1)]);
    assert_eq!(view.cart[0].product.price, "₹99");
    assert_eq!(view.notice.as_deref(), Some("Phone Stand added to cart"));

    // B: add again
    assert_eq!(client.add_to_cart(stand.clone()).await.unwrap(), 2);
    let view = client.snapshot().await.unwrap();
    assert_eq!(entries(&view), [("BU-01", 2)]);

    // C: remove one
    let change = client.remove_from_cart(stand.clone()).await.unwrap();
    assert_eq!(
        change,
        Some(CartChange {
            quantity: 1,
            cart_count: 1
        })
    );
    let view = client.snapshot().await.unwrap();
    assert_eq!(entries(&view), [("BU-01", 1)]);
    assert_eq!(view.notice.as_deref(), Some("Phone Stand removed from cart"));

    // D: remove the last unit
    client.remove_from_cart(stand).await.unwrap();
    let view = client.snapshot().await.unwrap();
    assert_eq!(view.cart_count, 0);
    assert!(view.cart.is_empty());
    assert_eq!(view.notice.as_deref(), Some("Phone Stand removed from cart"));

    system.shutdown().await.unwrap();
}

#[tokio::test]
async fn test_remove_nonexistent_on_empty_cart_changes_nothing() {
    let system = StorefrontSystem::new(&StorefrontConfig::default()).unwrap();
    let client = &system.storefront_client;
    let before = client.snapshot().await.unwrap();

    // E
    let change = client
        .remove_from_cart(ProductId::from("NONEXISTENT"))
        .await
        .unwrap();
    assert_eq!(change, None);
    assert_eq!(client.snapshot().await.unwrap(), before);
    assert_eq!(before.notice, None);

    system.shutdown().await.unwrap();
}

#[tokio::test]
async fn test_category_filter_through_full_system() {
    let system = StorefrontSystem::new(&StorefrontConfig::default()).unwrap();
    let client = &system.storefront_client;

    // F: select CLOTHES, then none
    client.select_category(Some(Category::Clothes)).await.unwrap();
    let view = client.snapshot().await.unwrap();
    let ids: Vec<&str> = view.filtered.iter().map(|p| p.id.as_str()).collect();
    assert_eq!(ids, ["CL-01", "CL-02", "CL-03"]);

    assert_eq!(client.select_category(None).await.unwrap(), None);
    assert!(client.snapshot().await.unwrap().filtered.is_empty());

    // Re-selecting keeps the filter, only clear resets it
    client.select_category(Some(Category::CoolGadgets)).await.unwrap();
    let selected = client
        .select_category(Some(Category::CoolGadgets))
        .await
        .unwrap();
    assert_eq!(selected, Some(Category::CoolGadgets));
    client.clear_category().await.unwrap();
    assert_eq!(client.snapshot().await.unwrap().selected_category, None);

    system.shutdown().await.unwrap();
}

#[tokio::test]
async fn test_unknown_product_is_reported_to_caller() {
    let system = StorefrontSystem::new(&StorefrontConfig::default()).unwrap();
    let client = &system.storefront_client;

    let result = client.add_to_cart(ProductId::from("NONEXISTENT")).await;
    assert_eq!(
        result,
        Err(StorefrontError::UnknownProduct(ProductId::from("NONEXISTENT")))
    );
    assert_eq!(client.snapshot().await.unwrap().cart_count, 0);

    system.shutdown().await.unwrap();
}

#[tokio::test]
async fn test_ui_flags_are_published() {
    let system = StorefrontSystem::new(&StorefrontConfig::default()).unwrap();
    let client = &system.storefront_client;
    let mut updates = client.subscribe();

    client.set_menu_open(true).await.unwrap();
    client.set_login_open(true).await.unwrap();
    client.set_login_open(false).await.unwrap();

    updates.changed().await.unwrap();
    let ui = updates.borrow_and_update().ui;
    assert!(ui.menu_open);
    assert!(!ui.login_open);
    assert!(!ui.cart_open);

    drop(updates);
    system.shutdown().await.unwrap();
}

#[tokio::test]
async fn test_custom_catalog() {
    let catalog = CatalogStore::new(vec![
        Product::new("X-1", "Mug", "₹149").in_category(Category::DecorativeItems),
        Product::new("X-2", "Poster", "₹199"),
    ])
    .unwrap();
    let system = StorefrontSystem::with_catalog(catalog, &StorefrontConfig::default()).unwrap();
    let client = &system.storefront_client;

    client.add_to_cart(ProductId::from("X-2")).await.unwrap();
    client
        .select_category(Some(Category::DecorativeItems))
        .await
        .unwrap();

    let view = client.snapshot().await.unwrap();
    assert_eq!(view.featured.len(), 1);
    assert_eq!(view.filtered.len(), 1);
    assert_eq!(view.notice.as_deref(), Some("Poster added to cart"));

    system.shutdown().await.unwrap();
}

#[tokio::test(start_paused = true)]
async fn test_shutdown_does_not_wait_for_pending_notice() {
    let system = StorefrontSystem::new(&StorefrontConfig::default()).unwrap();
    let extra = system.storefront_client.clone();
    extra.add_to_cart(ProductId::from("BU-01")).await.unwrap();
    drop(extra);

    // The notice clear is still 1800ms away; the actor must not sleep it out
    let started = Instant::now();
    system.shutdown().await.unwrap();
    assert!(started.elapsed() < NOTICE_TTL);
}

#[tokio::test(start_paused = true)]
async fn test_outstanding_clone_keeps_storefront_running() {
    let system = StorefrontSystem::new(&StorefrontConfig::default()).unwrap();
    let extra = system.storefront_client.clone();

    let pending = timeout(Duration::from_millis(100), system.shutdown()).await;
    assert!(pending.is_err(), "shutdown finished while a clone was alive");

    // The clone still reaches the actor
    assert_eq!(extra.add_to_cart(ProductId::from("BU-01")).await.unwrap(), 1);
    assert_eq!(extra.snapshot().await.unwrap().cart_count, 1);
}

#[tokio::test]
async fn test_zero_channel_capacity_fails_startup() {
    let config = StorefrontConfig {
        channel_capacity: 0,
        ..StorefrontConfig::default()
    };

    let result = StorefrontSystem::new(&config);
    assert!(matches!(
        result,
        Err(StartupError::Config(ConfigError::Invalid(_)))
    ));

    let catalog = CatalogStore::seeded().unwrap();
    assert!(StorefrontSystem::with_catalog(catalog, &config).is_err());
}

#[tokio::test]
async fn test_system_keeps_its_config() {
    let config = StorefrontConfig::from_json_str(r#"{ "notice_ttl_ms": 900 }"#).unwrap();
    let system = StorefrontSystem::new(&config).unwrap();
    assert_eq!(system.config(), &config);
    system.shutdown().await.unwrap();
}
