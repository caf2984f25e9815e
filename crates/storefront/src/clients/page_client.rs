//! # Page Client
//!
//! One method per UI event on the storefront page. This is what a front end (or the
//! demo binary, or a test) drives.
use crate::model::ProductId;
use crate::page_actor::{Page, PageAction, PageActionResult, PageError};
use async_trait::async_trait;
use session_actor::{ActorClient, FrameworkError, StateClient};
use tokio::sync::watch;
use tracing::{debug, instrument};

#[derive(Clone)]
pub struct PageClient {
    inner: StateClient<Page>,
}

/// What closing the detail view did to the cart.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Commit {
    pub added: u32,
    pub cart_quantity: u32,
}

impl PageClient {
    pub fn new(inner: StateClient<Page>) -> Self {
        Self { inner }
    }

    #[instrument(skip(self))]
    pub async fn search(&self, term: &str) -> Result<(), PageError> {
        self.send(PageAction::Search(term.to_string())).await.map(|_| ())
    }

    /// Picks a category (`None` for "All Products").
    ///
    /// Returns the generation of the fetch this issued, or `None` if the category did
    /// not change.
    #[instrument(skip(self))]
    pub async fn select_category(&self, category: Option<&str>) -> Result<Option<u64>, PageError> {
        match self
            .send(PageAction::SelectCategory(category.map(str::to_string)))
            .await?
        {
            PageActionResult::FetchIssued(generation) => Ok(Some(generation)),
            PageActionResult::Updated => Ok(None),
            other => Err(unexpected("SelectCategory", other)),
        }
    }

    #[instrument(skip(self))]
    pub async fn retry(&self) -> Result<u64, PageError> {
        match self.send(PageAction::Retry).await? {
            PageActionResult::FetchIssued(generation) => Ok(generation),
            other => Err(unexpected("Retry", other)),
        }
    }

    /// Opens the detail view; returns the pending quantity (always 1).
    #[instrument(skip(self))]
    pub async fn open_product(&self, id: ProductId) -> Result<u32, PageError> {
        self.pending(PageAction::OpenProduct(id)).await
    }

    #[instrument(skip(self))]
    pub async fn increment_pending(&self) -> Result<u32, PageError> {
        self.pending(PageAction::IncrementPending).await
    }

    #[instrument(skip(self))]
    pub async fn decrement_pending(&self) -> Result<u32, PageError> {
        self.pending(PageAction::DecrementPending).await
    }

    #[instrument(skip(self))]
    pub async fn close_modal(&self) -> Result<Commit, PageError> {
        match self.send(PageAction::CloseModal).await? {
            PageActionResult::Committed {
                added,
                cart_quantity,
            } => Ok(Commit {
                added,
                cart_quantity,
            }),
            other => Err(unexpected("CloseModal", other)),
        }
    }

    pub async fn toggle_menu(&self) -> Result<(), PageError> {
        self.send(PageAction::ToggleMenu).await.map(|_| ())
    }

    pub async fn toggle_search_panel(&self) -> Result<(), PageError> {
        self.send(PageAction::ToggleSearchPanel).await.map(|_| ())
    }

    pub async fn open_category_picker(&self) -> Result<(), PageError> {
        self.send(PageAction::OpenCategoryPicker).await.map(|_| ())
    }

    pub async fn close_category_picker(&self) -> Result<(), PageError> {
        self.send(PageAction::CloseCategoryPicker).await.map(|_| ())
    }

    pub async fn focus_search(&self) -> Result<(), PageError> {
        self.send(PageAction::FocusSearch).await.map(|_| ())
    }

    pub async fn blur_search(&self) -> Result<(), PageError> {
        self.send(PageAction::BlurSearch).await.map(|_| ())
    }

    /// Every page state the actor publishes.
    pub fn subscribe(&self) -> watch::Receiver<Page> {
        self.inner.subscribe()
    }

    pub async fn wait_for(
        &self,
        predicate: impl FnMut(&Page) -> bool + Send,
    ) -> Result<Page, PageError> {
        self.inner.wait_for(predicate).await.map_err(Self::map_error)
    }

    /// Waits until the latest issued fetch has been applied or has failed.
    pub async fn wait_until_settled(&self) -> Result<Page, PageError> {
        self.wait_for(|page| page.grid().status().is_settled()).await
    }

    async fn pending(&self, action: PageAction) -> Result<u32, PageError> {
        match self.send(action).await? {
            PageActionResult::PendingQuantity(pending) => Ok(pending),
            other => Err(unexpected("pending quantity", other)),
        }
    }

    async fn send(&self, action: PageAction) -> Result<PageActionResult, PageError> {
        debug!("Sending request");
        self.inner.perform_action(action).await.map_err(Self::map_error)
    }
}

fn unexpected(action: &str, result: PageActionResult) -> PageError {
    PageError::ActorCommunicationError(format!("Unexpected result for {action}: {result:?}"))
}

#[async_trait]
impl ActorClient<Page> for PageClient {
    type Error = PageError;

    fn inner(&self) -> &StateClient<Page> {
        &self.inner
    }

    fn map_error(e: FrameworkError) -> Self::Error {
        match e {
            FrameworkError::StateError(source) => match source.downcast::<PageError>() {
                Ok(error) => *error,
                Err(other) => PageError::ActorCommunicationError(other.to_string()),
            },
            other => PageError::ActorCommunicationError(other.to_string()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::grid::ModalError;
    use session_actor::mock::{create_mock_client, expect_action};

    #[tokio::test]
    async fn test_close_modal_returns_commit() {
        let (client, mut receiver) = create_mock_client(10, Page::new());
        let page = PageClient::new(client);

        let close_task = tokio::spawn(async move { page.close_modal().await });

        let (action, responder) = expect_action(&mut receiver)
            .await
            .expect("Expected Action request");
        assert!(matches!(action, PageAction::CloseModal));
        responder
            .send(Ok(PageActionResult::Committed {
                added: 2,
                cart_quantity: 5,
            }))
            .unwrap();

        assert_eq!(
            close_task.await.unwrap(),
            Ok(Commit {
                added: 2,
                cart_quantity: 5
            })
        );
    }

    #[tokio::test]
    async fn test_state_error_keeps_its_type() {
        let (client, mut receiver) = create_mock_client(10, Page::new());
        let page = PageClient::new(client);

        let open_task = tokio::spawn(async move { page.open_product(ProductId(9)).await });

        let (_, responder) = expect_action(&mut receiver)
            .await
            .expect("Expected Action request");
        let error = PageError::Modal(ModalError::NotVisible(ProductId(9)));
        responder
            .send(Err(FrameworkError::StateError(Box::new(error.clone()))))
            .unwrap();

        assert_eq!(open_task.await.unwrap(), Err(error));
    }

    #[tokio::test]
    async fn test_mismatched_result_is_an_error() {
        let (client, mut receiver) = create_mock_client(10, Page::new());
        let page = PageClient::new(client);

        let retry_task = tokio::spawn(async move { page.retry().await });

        let (_, responder) = expect_action(&mut receiver)
            .await
            .expect("Expected Action request");
        responder.send(Ok(PageActionResult::Updated)).unwrap();

        assert!(matches!(
            retry_task.await.unwrap(),
            Err(PageError::ActorCommunicationError(_))
        ));
    }
}
