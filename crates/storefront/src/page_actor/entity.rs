//! The page state and its [`ActorState`] implementation.
//!
//! This is where the leaf components meet. The header turns UI events into
//! [`HeaderEvent`]s, the page folds them into [`FilterCriteria`], and a category change
//! issues a generation-tagged fetch whose completion comes back as
//! [`PageAction::CatalogLoaded`]. Only the completion of the latest generation is
//! applied.

use super::actions::{PageAction, PageActionResult};
use super::error::PageError;
use crate::catalog::{CatalogApi, CatalogError};
use crate::clients::CartClient;
use crate::filter::FilterCriteria;
use crate::grid::ProductGrid;
use crate::header::{HeaderController, HeaderEvent};
use crate::model::Product;
use async_trait::async_trait;
use session_actor::{ActorState, WeakStateClient};
use std::sync::Arc;
use tracing::{debug, info, warn};

/// Everything rendered on the storefront page except the cart quantity.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Page {
    header: HeaderController,
    grid: ProductGrid,
    criteria: FilterCriteria,
    /// The generation of the most recently issued catalog fetch.
    generation: u64,
}

/// Collaborators injected when the page actor starts.
pub struct PageContext {
    pub catalog: Arc<dyn CatalogApi>,
    pub cart: CartClient,
    /// Lets background fetches report back without keeping the page alive.
    pub page: WeakStateClient<Page>,
}

impl Page {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn header(&self) -> &HeaderController {
        &self.header
    }

    pub fn grid(&self) -> &ProductGrid {
        &self.grid
    }

    pub fn criteria(&self) -> &FilterCriteria {
        &self.criteria
    }

    pub fn generation(&self) -> u64 {
        self.generation
    }

    /// True while a term or category narrows the page; the marketing sections hide.
    pub fn is_searching(&self) -> bool {
        self.criteria.is_active()
    }

    /// Starts a fetch for the current category and returns its generation.
    fn issue_fetch(&mut self, ctx: &PageContext) -> u64 {
        self.generation += 1;
        let generation = self.generation;
        let category = self.criteria.category.clone();
        self.grid.begin_loading();
        info!(generation, category = ?category, "Fetch issued");

        let catalog = Arc::clone(&ctx.catalog);
        let page = ctx.page.clone();
        tokio::spawn(async move {
            let result = catalog.fetch_products(category.as_deref()).await;
            let Some(page) = page.upgrade() else {
                debug!(generation, "Page gone before fetch finished");
                return;
            };
            if let Err(e) = page
                .perform_action(PageAction::CatalogLoaded { generation, result })
                .await
            {
                debug!(generation, error = %e, "Could not deliver fetch result");
            }
        });
        generation
    }

    fn apply_header_events(&mut self, events: Vec<HeaderEvent>, ctx: &PageContext) -> PageActionResult {
        let mut outcome = PageActionResult::Updated;
        for event in events {
            match event {
                HeaderEvent::Search(term) => {
                    self.criteria.term = term;
                    self.grid.apply_filter(&self.criteria.term);
                }
                HeaderEvent::CategorySelected(category) => {
                    if self.criteria.category != category {
                        self.criteria.category = category;
                        outcome = PageActionResult::FetchIssued(self.issue_fetch(ctx));
                    }
                }
            }
        }
        outcome
    }

    fn apply_catalog(&mut self, generation: u64, result: Result<Vec<Product>, CatalogError>) -> bool {
        if generation != self.generation {
            debug!(generation, latest = self.generation, "Stale fetch dropped");
            return false;
        }
        match &result {
            Ok(products) => info!(generation, count = products.len(), "Catalog applied"),
            Err(e) => warn!(generation, error = %e, "Catalog fetch failed"),
        }
        self.grid.apply_fetch(result, &self.criteria.term);
        true
    }

    async fn commit_selection(&mut self, ctx: &PageContext) -> Result<PageActionResult, PageError> {
        let added = self.grid.pending()?;
        let cart_quantity = ctx.cart.add(added).await?;
        self.grid.close()?;
        info!(added, cart_quantity, "Committed to cart");
        Ok(PageActionResult::Committed {
            added,
            cart_quantity,
        })
    }
}

#[async_trait]
impl ActorState for Page {
    type Action = PageAction;
    type ActionResult = PageActionResult;
    type Context = PageContext;
    type Error = PageError;

    async fn on_start(&mut self, ctx: &Self::Context) -> Result<(), PageError> {
        let catalog = Arc::clone(&ctx.catalog);
        let page = ctx.page.clone();
        tokio::spawn(async move {
            let result = catalog.fetch_categories().await;
            let Some(page) = page.upgrade() else {
                debug!("Page gone before categories arrived");
                return;
            };
            if let Err(e) = page
                .perform_action(PageAction::CategoriesLoaded(result))
                .await
            {
                debug!(error = %e, "Could not deliver categories");
            }
        });
        self.issue_fetch(ctx);
        Ok(())
    }

    async fn handle_action(
        &mut self,
        action: PageAction,
        ctx: &Self::Context,
    ) -> Result<PageActionResult, PageError> {
        match action {
            PageAction::Search(term) => {
                let event = self.header.type_search(term);
                Ok(self.apply_header_events(vec![event], ctx))
            }
            PageAction::SelectCategory(category) => {
                let events = self.header.select_category(category);
                Ok(self.apply_header_events(events, ctx))
            }
            PageAction::Retry => Ok(PageActionResult::FetchIssued(self.issue_fetch(ctx))),
            PageAction::OpenProduct(id) => {
                let selection = self.grid.open(id)?;
                Ok(PageActionResult::PendingQuantity(selection.pending))
            }
            PageAction::IncrementPending => {
                Ok(PageActionResult::PendingQuantity(self.grid.increment_pending()?))
            }
            PageAction::DecrementPending => {
                Ok(PageActionResult::PendingQuantity(self.grid.decrement_pending()?))
            }
            PageAction::CloseModal => self.commit_selection(ctx).await,
            PageAction::ToggleMenu => {
                self.header.toggle_menu();
                Ok(PageActionResult::Updated)
            }
            PageAction::ToggleSearchPanel => {
                self.header.toggle_search_panel();
                Ok(PageActionResult::Updated)
            }
            PageAction::OpenCategoryPicker => {
                self.header.open_category_picker();
                Ok(PageActionResult::Updated)
            }
            PageAction::CloseCategoryPicker => {
                self.header.close_category_picker();
                Ok(PageActionResult::Updated)
            }
            PageAction::FocusSearch => {
                self.header.focus_search();
                Ok(PageActionResult::Updated)
            }
            PageAction::BlurSearch => {
                self.header.blur_search();
                Ok(PageActionResult::Updated)
            }
            PageAction::CatalogLoaded { generation, result } => {
                Ok(PageActionResult::Applied(self.apply_catalog(generation, result)))
            }
            PageAction::CategoriesLoaded(result) => {
                let categories = result.unwrap_or_else(|e| {
                    warn!(error = %e, "Categories unavailable");
                    Vec::new()
                });
                debug!(count = categories.len(), "Categories loaded");
                self.header.set_categories(categories);
                Ok(PageActionResult::Updated)
            }
        }
    }
}
