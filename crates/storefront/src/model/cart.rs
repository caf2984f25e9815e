/// The number of items in the cart, shown in the header badge.
///
/// Owned by the cart actor; everything else sees copies. The unsigned type makes a
/// negative quantity unrepresentable.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct CartQuantity {
    pub quantity: u32,
}

impl CartQuantity {
    pub fn new(quantity: u32) -> Self {
        Self { quantity }
    }
}
