//! Row types and request/response DTOs.

pub mod dish;
pub mod ingredient;
pub mod order;
pub mod size;
pub mod user;

pub use dish::Dish;
pub use ingredient::{Ingredient, IngredientPair};
pub use order::{OrderCreate, OrderDetails, OrderLineCreate, OrderRow};
pub use size::Size;
pub use user::User;
