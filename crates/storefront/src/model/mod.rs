//! Pure data structures shared by the stores, the actor and the rendering layer.

pub mod cart;
pub mod links;
pub mod product;
pub mod view;

pub use cart::*;
pub use links::*;
pub use product::*;
pub use view::*;
