//! # Popcorn Culture demo
//!
//! Starts the storefront, scripts a short shopping session against it and
//! renders a few frames of the hero vessel, logging every published snapshot.
//!
//! ```bash
//! RUST_LOG=info cargo run -p popcorn-culture
//! POPCORN_CONFIG=storefront.json RUST_LOG=debug cargo run -p popcorn-culture
//! ```

use popcorn_culture::config::StorefrontConfig;
use popcorn_culture::lifecycle::{setup_tracing, StorefrontSystem};
use popcorn_culture::model::{Category, ProductId, StorefrontView, SOCIAL_LINKS};
use popcorn_culture::vessel::{
    hero_opacity, scroll_progress, Pointer, ScrollVessel, ViewportClass,
};
use state_actor::StateHandle;
use std::time::Duration;
use tracing::{info, warn, Instrument};

#[tokio::main]
async fn main() -> Result<(), String> {
    setup_tracing();

    let system = StorefrontSystem::from_env().map_err(|e| e.to_string())?;
    let config = system.config().clone();
    info!(?config, "Configuration loaded");
    let client = &system.storefront_client;

    // Render loop stand-in: log every snapshot the actor publishes
    let mut updates = client.subscribe();
    let renderer = tokio::spawn(async move {
        while updates.changed().await.is_ok() {
            let view = updates.borrow_and_update().clone();
            log_view("Snapshot published", &view);
        }
    });

    let span = tracing::info_span!("shopping_session");
    async {
        client
            .select_category(Some(Category::BudgetItems))
            .await
            .map_err(|e| e.to_string())?;

        let stand = ProductId::from("BU-01");
        client.add_to_cart(stand.clone()).await.map_err(|e| e.to_string())?;
        let count = client.add_to_cart(stand.clone()).await.map_err(|e| e.to_string())?;
        info!(count, "Added twice");

        client.remove_from_cart(stand).await.map_err(|e| e.to_string())?;

        if let Err(e) = client.add_to_cart(ProductId::from("NONEXISTENT")).await {
            warn!(error = %e, "Rejected as expected");
        }

        client.set_cart_open(true).await.map_err(|e| e.to_string())?;
        Ok::<(), String>(())
    }
    .instrument(span)
    .await?;

    render_vessel_frames(&config);

    // Wait out the notice so the cleared snapshot shows up
    tokio::time::sleep(config.notice_ttl() + Duration::from_millis(50)).await;
    let view = client.snapshot().await.map_err(|e| e.to_string())?;
    info!(notice = ?view.notice, cart_count = view.cart_count, "After notice delay");

    for link in SOCIAL_LINKS {
        info!(label = link.label, link = link.link, "Footer link");
    }

    system.shutdown().await?;
    let _ = renderer.await;

    info!("Demo completed");
    Ok(())
}

fn log_view(message: &str, view: &StorefrontView) {
    match serde_json::to_string(view) {
        Ok(json) => info!(cart_count = view.cart_count, notice = ?view.notice, %json, "{message}"),
        Err(e) => warn!(error = %e, "Snapshot not serializable"),
    }
}

/// Scrolls a 1080px-tall, 1440px-wide page of 4320px from top to bottom at
/// 60 fps, moving the pointer across the viewport.
fn render_vessel_frames(config: &StorefrontConfig) {
    const FRAMES: u32 = 120;
    let (width, height, page) = (1440.0, 1080.0, 4320.0);
    let frame = Duration::from_secs_f32(1.0 / 60.0);

    let viewport = ViewportClass::from_width(width, &config.vessel);
    let mut vessel = ScrollVessel::new(config.vessel.clone());

    for i in 0..=FRAMES {
        let t = i as f32 / FRAMES as f32;
        let progress = scroll_progress(t * (page - height), page, height);
        let pointer = Pointer::from_client(t * width, height / 2.0, width, height);
        let transform = vessel.frame(progress, pointer, viewport, frame);

        if i % 30 == 0 {
            info!(
                progress,
                hero_opacity = hero_opacity(progress, &config.vessel),
                rotation_x = transform.rotation_x,
                rotation_y = transform.rotation_y,
                scale = transform.scale,
                "Vessel frame"
            );
        }
    }
}
