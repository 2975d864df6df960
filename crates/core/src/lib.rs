pub mod config;
pub mod domain;
pub mod errors;

pub use domain::product::{ErrorResponse, Product, ProductId};
pub use errors::{ApplicationError, DomainError, ErrorClass};
