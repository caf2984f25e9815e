//! # Session Actor
//!
//! Building blocks for single-owner state on top of Tokio: one task owns one value,
//! every change to it is a typed message, and every change is published to observers.
//!
//! ## Why an actor for a single value?
//!
//! - **Atomic transitions**: the actor handles one message at a time, so no caller can
//!   see a half-applied change and the value needs no lock.
//! - **Injectable ownership**: the value is owned by whoever spawned the actor and
//!   passed around as a cloneable client, never as a global.
//! - **Observable**: the actor publishes the value after every action on a
//!   `tokio::sync::watch` channel; clients can subscribe or wait for a condition.
//!
//! ## Architecture Overview
//!
//! 1. **State Layer** ([`ActorState`]) - the value and the actions it accepts
//! 2. **Runtime Layer** ([`StateActor`]) - the message loop
//! 3. **Interface Layer** ([`StateClient`], [`WeakStateClient`], [`ActorClient`])
//!
//! ```rust
//! use session_actor::{ActorState, StateActor};
//! use async_trait::async_trait;
//!
//! #[derive(Clone, Debug)]
//! struct Light { on: bool }
//!
//! #[derive(Debug)]
//! enum LightAction { Toggle }
//!
//! #[derive(Debug, thiserror::Error)]
//! #[error("light error")]
//! struct LightError;
//!
//! #[async_trait]
//! impl ActorState for Light {
//!     type Action = LightAction;
//!     type ActionResult = bool;
//!     type Context = ();
//!     type Error = LightError;
//!
//!     async fn handle_action(&mut self, _: LightAction, _: &()) -> Result<bool, Self::Error> {
//!         self.on = !self.on;
//!         Ok(self.on)
//!     }
//! }
//!
//! #[tokio::main]
//! async fn main() {
//!     let (actor, client) = StateActor::new(10, Light { on: false });
//!     tokio::spawn(actor.run(()));
//!
//!     assert!(client.perform_action(LightAction::Toggle).await.unwrap());
//!     let light = client.wait_for(|light| light.on).await.unwrap();
//!     assert!(light.on);
//! }
//! ```
//!
//! ## Context Injection
//!
//! Dependencies are handed to [`StateActor::run`], not to [`StateActor::new`]. An actor
//! can therefore receive a [`WeakStateClient`] of itself, which is how background work
//! it spawns reports back without keeping it alive after its last external client is
//! gone.
//!
//! ## Testing
//!
//! [`mock::MockClient`] answers a real `StateClient` from scripted expectations.

pub mod actor;
pub mod client;
pub mod client_trait;
pub mod error;
pub mod logging;
pub mod message;
pub mod mock;
pub mod state;

pub use actor::StateActor;
pub use client::{StateClient, WeakStateClient};
pub use client_trait::ActorClient;
pub use error::FrameworkError;
pub use message::{Response, StateRequest};
pub use state::ActorState;
