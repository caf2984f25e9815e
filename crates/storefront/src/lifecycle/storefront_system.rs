use crate::cart_actor;
use crate::catalog::{CatalogApi, CatalogError, HttpCatalog};
use crate::clients::{CartClient, PageClient};
use crate::config::StorefrontConfig;
use crate::page_actor::{self, PageContext, PageError};
use crate::view::PageView;
use session_actor::ActorClient;
use std::sync::Arc;
use tracing::{error, info};

/// One storefront session: a cart actor and a page actor, wired together.
///
/// The cart is owned here and injected into the page, never reached as a global. A
/// test (or a second session) gets its own cart simply by building another system.
///
/// # Example
///
/// ```ignore
/// let system = StorefrontSystem::new(&StorefrontConfig::from_env()?)?;
/// system.page_client.wait_until_settled().await?;
/// system.page_client.search("backpack").await?;
/// println!("{}", system.render().await?);
/// system.shutdown().await?;
/// ```
pub struct StorefrontSystem {
    pub page_client: PageClient,
    pub cart_client: CartClient,
    /// Page first: it holds a cart client and must stop before the cart can.
    handles: Vec<tokio::task::JoinHandle<()>>,
}

impl StorefrontSystem {
    /// Starts a session against the HTTP catalog described by `config`.
    pub fn new(config: &StorefrontConfig) -> Result<Self, CatalogError> {
        let catalog = HttpCatalog::new(config)?;
        Ok(Self::with_catalog(
            Arc::new(catalog),
            config.initial_cart_quantity,
        ))
    }

    /// Starts a session against any catalog, with the cart at `initial_cart`.
    ///
    /// The page begins fetching as soon as this returns.
    pub fn with_catalog(catalog: Arc<dyn CatalogApi>, initial_cart: u32) -> Self {
        // 1. Create actors (no dependencies)
        let (cart_actor, cart_client) = cart_actor::new(initial_cart);
        let (page_actor, page_client) = page_actor::new();
        let cart_client = CartClient::new(cart_client);

        // 2. Start actors with injected context
        let cart_handle = tokio::spawn(cart_actor.run(()));
        let page_handle = tokio::spawn(page_actor.run(PageContext {
            catalog,
            cart: cart_client.clone(),
            page: page_client.downgrade(),
        }));

        info!(initial_cart, "Storefront session started");
        Self {
            page_client: PageClient::new(page_client),
            cart_client,
            handles: vec![page_handle, cart_handle],
        }
    }

    /// The page as it would be drawn right now.
    pub async fn render(&self) -> Result<PageView, PageError> {
        let page = self.page_client.snapshot().await?;
        let cart_quantity = self.cart_client.quantity().await?;
        Ok(PageView::build(&page, cart_quantity))
    }

    /// Drops every client and waits for both actors to stop.
    ///
    /// Fetches still in flight are abandoned: they hold only a weak page client.
    pub async fn shutdown(self) -> Result<(), String> {
        info!("Shutting down session...");
        drop(self.page_client);
        drop(self.cart_client);

        for handle in self.handles {
            if let Err(e) = handle.await {
                error!("Actor task failed: {:?}", e);
                return Err(format!("Actor task failed: {:?}", e));
            }
        }

        info!("Session shutdown complete.");
        Ok(())
    }
}
