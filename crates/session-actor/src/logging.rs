//! # Observability
//!
//! [`setup_tracing`] installs the compact `tracing-subscriber` formatter used by every
//! binary in the workspace. Levels come from `RUST_LOG`:
//!
//! ```bash
//! RUST_LOG=info cargo run          # state transitions
//! RUST_LOG=debug cargo run         # every action with its payload
//! RUST_LOG=storefront=debug cargo run
//! ```
//!
//! The actor loop tags each line with `state_type`, so the module target is hidden.
//! With `RUST_LOG=debug` a category change reads like:
//!
//! ```text
//! DEBUG Action state_type="Page" action=SelectCategory(Some("electronics"))
//! INFO  Fetch issued generation=2 category=Some("electronics")
//! DEBUG Action ok state_type="Page" outcome=FetchIssued(2)
//! INFO  Catalog applied generation=2 count=6
//! ```

/// Initializes the global subscriber. Call once, at the top of `main`.
pub fn setup_tracing() {
    tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .with_target(false)
        .compact()
        .init();
}
