//! [`ActorState`] implementation for [`CartQuantity`].

use super::actions::CartAction;
use super::error::CartError;
use crate::model::CartQuantity;
use async_trait::async_trait;
use session_actor::ActorState;
use tracing::info;

#[async_trait]
impl ActorState for CartQuantity {
    type Action = CartAction;
    type ActionResult = u32;
    type Context = ();
    type Error = CartError;

    async fn handle_action(
        &mut self,
        action: CartAction,
        _ctx: &Self::Context,
    ) -> Result<u32, CartError> {
        let before = self.quantity;
        self.quantity = match action {
            CartAction::Set(quantity) => quantity,
            CartAction::Increment => before.saturating_add(1),
            CartAction::Decrement => before.saturating_sub(1),
            CartAction::Add(quantity) => before.saturating_add(quantity),
        };
        if self.quantity != before {
            info!(before, after = self.quantity, "Cart quantity changed");
        }
        Ok(self.quantity)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    async fn apply(cart: &mut CartQuantity, action: CartAction) -> u32 {
        cart.handle_action(action, &()).await.unwrap()
    }

    #[tokio::test]
    async fn test_transitions() {
        let mut cart = CartQuantity::default();
        assert_eq!(apply(&mut cart, CartAction::Increment).await, 1);
        assert_eq!(apply(&mut cart, CartAction::Add(3)).await, 4);
        assert_eq!(apply(&mut cart, CartAction::Decrement).await, 3);
        assert_eq!(apply(&mut cart, CartAction::Set(10)).await, 10);
        assert_eq!(apply(&mut cart, CartAction::Set(0)).await, 0);
    }

    #[tokio::test]
    async fn test_decrement_at_zero_is_a_no_op() {
        let mut cart = CartQuantity::default();
        assert_eq!(apply(&mut cart, CartAction::Decrement).await, 0);
        assert_eq!(cart, CartQuantity::new(0));
    }

    fn arb_step() -> impl Strategy<Value = bool> {
        any::<bool>()
    }

    proptest! {
        #[test]
        fn prop_matches_clamped_model(steps in prop::collection::vec(arb_step(), 0..64)) {
            let runtime = tokio::runtime::Builder::new_current_thread().build().unwrap();
            let mut cart = CartQuantity::default();
            let mut model: i64 = 0;
            for increment in steps {
                let action = if increment { CartAction::Increment } else { CartAction::Decrement };
                model = if increment { model + 1 } else { (model - 1).max(0) };
                let quantity = runtime.block_on(apply(&mut cart, action));
                prop_assert_eq!(i64::from(quantity), model);
            }
        }
    }
}
