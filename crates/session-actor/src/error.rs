//! # Framework Errors
//!
//! Errors raised by the actor runtime itself, shared by every client and actor.

/// Errors that can occur within the actor runtime.
#[derive(Debug, thiserror::Error)]
pub enum FrameworkError {
    #[error("Actor closed")]
    ActorClosed,
    #[error("Actor dropped response channel")]
    ActorDropped,
    #[error("State error: {0}")]
    StateError(Box<dyn std::error::Error + Send + Sync>),
}
