//! Scripted demo session against the live catalog.
//!
//! Set `STOREFRONT_API_URL` to point at another catalog, and `RUST_LOG=debug` to see
//! every action the actors handle.

use session_actor::logging::setup_tracing;
use storefront::config::StorefrontConfig;
use storefront::lifecycle::StorefrontSystem;
use std::time::Duration;
use tracing::{error, info, warn, Instrument};

const CATEGORIES_WAIT: Duration = Duration::from_secs(5);

#[tokio::main]
async fn main() -> Result<(), String> {
    setup_tracing();

    let config = StorefrontConfig::from_env().map_err(|e| e.to_string())?;
    info!(base_url = %config.api_base_url, "Starting storefront session");

    let system = StorefrontSystem::new(&config).map_err(|e| e.to_string())?;

    let page = system
        .page_client
        .wait_until_settled()
        .await
        .map_err(|e| e.to_string())?;
    info!(
        products = page.grid().products().len(),
        status = ?page.grid().status(),
        "Landing page loaded"
    );

    // Categories load separately from the products; the category step is skipped if
    // they do not arrive in time.
    let categories = match tokio::time::timeout(
        CATEGORIES_WAIT,
        system
            .page_client
            .wait_for(|page| !page.header().categories().is_empty()),
    )
    .await
    {
        Ok(Ok(page)) => page.header().categories().to_vec(),
        Ok(Err(e)) => return Err(e.to_string()),
        Err(_) => {
            warn!(after = ?CATEGORIES_WAIT, "No categories, skipping category step");
            Vec::new()
        }
    };

    let span = tracing::info_span!("browse");
    async {
        system.page_client.search("jacket").await?;
        if let Some(category) = categories.first() {
            system
                .page_client
                .select_category(Some(category.as_str()))
                .await?;
            system.page_client.wait_until_settled().await?;
        }
        Ok::<_, storefront::page_actor::PageError>(())
    }
    .instrument(span)
    .await
    .map_err(|e| e.to_string())?;

    let page = system
        .page_client
        .wait_until_settled()
        .await
        .map_err(|e| e.to_string())?;
    match page.grid().visible().first() {
        Some(product) => {
            let span = tracing::info_span!("add_to_cart", product_id = %product.id);
            let result = async {
                system.page_client.open_product(product.id).await?;
                system.page_client.increment_pending().await?;
                system.page_client.close_modal().await
            }
            .instrument(span)
            .await;
            match result {
                Ok(commit) => info!(
                    added = commit.added,
                    cart_quantity = commit.cart_quantity,
                    "Added to cart"
                ),
                Err(e) => error!(error = %e, "Add to cart failed"),
            }
        }
        None => warn!("Nothing to add to cart"),
    }

    let view = system.render().await.map_err(|e| e.to_string())?;
    println!("{view}");

    system.shutdown().await?;

    info!("Session completed successfully");
    Ok(())
}
