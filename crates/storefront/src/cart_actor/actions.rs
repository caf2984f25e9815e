//! Transitions accepted by the cart quantity actor.

/// Every way the cart quantity can change.
///
/// Each action returns the quantity after the change.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CartAction {
    /// Replaces the quantity.
    Set(u32),
    Increment,
    /// Never goes below zero; at zero this is a no-op.
    Decrement,
    /// Adds a committed modal quantity.
    Add(u32),
}
