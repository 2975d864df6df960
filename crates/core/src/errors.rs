use thiserror::Error;

use crate::domain::product::ProductId;

pub const INVALID_PRODUCT_ID_MESSAGE: &str = "Invalid product ID format";
pub const INVALID_PRODUCT_DATA_MESSAGE: &str =
    "Invalid product data: name is required, price and stock must be non-negative";
pub const INTERNAL_ERROR_MESSAGE: &str = "Internal server error";

#[derive(Clone, Debug, Error, PartialEq, Eq)]
pub enum DomainError {
    #[error("invalid product id `{raw}`")]
    InvalidProductId { raw: String },
    #[error("invalid product data: {field} {reason}")]
    InvalidProductData { field: &'static str, reason: &'static str },
}

#[derive(Clone, Debug, Error, PartialEq, Eq)]
pub enum ApplicationError {
    #[error(transparent)]
    Domain(#[from] DomainError),
    #[error("product {0} not found")]
    ProductNotFound(ProductId),
    #[error("malformed payload: {0}")]
    MalformedPayload(String),
    #[error("persistence failure: {0}")]
    Persistence(String),
}

/// Transport-neutral classification of an [`ApplicationError`].
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ErrorClass {
    BadRequest,
    NotFound,
    Internal,
}

impl ErrorClass {
    pub fn status_code(self) -> u16 {
        match self {
            Self::BadRequest => 400,
            Self::NotFound => 404,
            Self::Internal => 500,
        }
    }
}

impl ApplicationError {
    pub fn class(&self) -> ErrorClass {
        match self {
            Self::Domain(_) | Self::MalformedPayload(_) => ErrorClass::BadRequest,
            Self::ProductNotFound(_) => ErrorClass::NotFound,
            Self::Persistence(_) => ErrorClass::Internal,
        }
    }

    /// Message safe to hand back to a client. Persistence details stay in the logs.
    pub fn user_message(&self) -> String {
        match self {
            Self::Domain(DomainError::InvalidProductId { .. }) => {
                INVALID_PRODUCT_ID_MESSAGE.to_string()
            }
            Self::Domain(DomainError::InvalidProductData { .. }) => {
                INVALID_PRODUCT_DATA_MESSAGE.to_string()
            }
            Self::MalformedPayload(detail) => format!("Invalid request body: {detail}"),
            Self::ProductNotFound(id) => format!("Product with ID {id} not found"),
            Self::Persistence(_) => INTERNAL_ERROR_MESSAGE.to_string(),
        }
    }
}

#[cfg(test)]
mod tests {
    use crate::domain::product::ProductId;
    use crate::errors::{ApplicationError, DomainError, ErrorClass};

    #[test]
    fn invalid_id_maps_to_bad_request() {
        let error =
            ApplicationError::from(DomainError::InvalidProductId { raw: "abc".to_owned() });

        assert_eq!(error.class(), ErrorClass::BadRequest);
        assert_eq!(error.class().status_code(), 400);
        assert_eq!(error.user_message(), "Invalid product ID format");
    }

    #[test]
    fn invalid_data_hides_which_field_failed() {
        let error = ApplicationError::from(DomainError::InvalidProductData {
            field: "price",
            reason: "must be non-negative",
        });

        assert_eq!(error.class(), ErrorClass::BadRequest);
        assert!(error.user_message().starts_with("Invalid product data"));
        assert!(error.to_string().contains("price"));
    }

    #[test]
    fn not_found_names_the_identifier() {
        let error = ApplicationError::ProductNotFound(ProductId(9999));

        assert_eq!(error.class().status_code(), 404);
        assert_eq!(error.user_message(), "Product with ID 9999 not found");
    }

    #[test]
    fn persistence_error_is_internal_with_generic_message() {
        let error = ApplicationError::Persistence("identifier space exhausted".to_owned());

        assert_eq!(error.class(), ErrorClass::Internal);
        assert_eq!(error.user_message(), "Internal server error");
    }
}
