//! Pure data structures shared by the catalog client, the actors, and the view.

pub mod cart;
pub mod product;

pub use cart::*;
pub use product::*;
