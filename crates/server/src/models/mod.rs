//! Domain models for the SoyCart service.
//!
//! These types represent validated domain objects separate from request
//! and response shapes, which live with their route handlers.

pub mod announcement;
pub mod cart;
pub mod order;
pub mod product;
pub mod session;
pub mod user;

pub use announcement::Announcement;
pub use cart::{Cart, CartError, CartItem};
pub use order::{NewOrder, NewOrderItem, Order, OrderItem};
pub use product::{NewProduct, Product};
pub use session::{CurrentUser, session_keys};
pub use user::{NewUser, User};
