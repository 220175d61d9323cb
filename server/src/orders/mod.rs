//! Order validation pipeline and its error taxonomy.

pub mod error;
pub mod validator;

pub use error::OrderError;
pub use validator::{validate_and_price, PricedLine, PricedOrder};

#[cfg(test)]
mod tests;
