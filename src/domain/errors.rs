use thiserror::Error;

use crate::domain::value_objects::enums::delivery_statuses::DeliveryStatus;

#[derive(Debug, Error)]
pub enum DeliveryError {
    #[error("Validation failed: {0}")]
    Validation(String),

    #[error("Invalid delivery identifier: {0}")]
    InvalidIdentifier(String),

    #[error("Delivery not found")]
    NotFound,

    #[error("Invalid delivery status: {0}")]
    InvalidStatus(String),

    #[error("Status can not change from {from} to {to}")]
    TransitionNotAllowed {
        from: DeliveryStatus,
        to: DeliveryStatus,
    },

    #[error("Storage error")]
    Storage(#[from] anyhow::Error),
}
