use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::domain::entities::deliveries::{DeliveryEntity, InsertDeliveryEntity};
use crate::domain::errors::DeliveryError;
use crate::domain::value_objects::enums::{
    delivery_statuses::DeliveryStatus, delivery_times::DeliveryTime,
    packaging_types::PackagingType,
};

pub const MIN_NAME_LENGTH: usize = 2;
pub const MIN_ADDRESS_LENGTH: usize = 10;
pub const MIN_DESCRIPTION_LENGTH: usize = 5;

/// Single entry point for identifier parsing. Every handler that receives a
/// raw id must go through here before touching the repository.
pub fn parse_delivery_id(raw_id: &str) -> Result<Uuid, DeliveryError> {
    Uuid::parse_str(raw_id).map_err(|_| DeliveryError::InvalidIdentifier(raw_id.to_string()))
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct DeliveryModel {
    pub id: Uuid,
    pub sender_name: String,
    pub sender_address: String,
    pub recipient_name: String,
    pub recipient_address: String,
    pub delivery_time: String,
    pub delivery_status: String,
    pub packaging_type: String,
    pub assigned_driver: String,
    pub amount: f64,
    pub package_description: String,
    pub weight: f64,
    pub length: f64,
    pub width: f64,
    pub height: f64,
    pub created_at: DateTime<Utc>,
}

impl From<DeliveryEntity> for DeliveryModel {
    fn from(value: DeliveryEntity) -> Self {
        Self {
            id: value.id,
            sender_name: value.sender_name,
            sender_address: value.sender_address,
            recipient_name: value.recipient_name,
            recipient_address: value.recipient_address,
            delivery_time: value.delivery_time,
            delivery_status: value.delivery_status,
            packaging_type: value.packaging_type,
            assigned_driver: value.assigned_driver,
            amount: value.amount,
            package_description: value.package_description,
            weight: value.weight,
            length: value.length,
            width: value.width,
            height: value.height,
            created_at: value.created_at,
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct InsertDeliveryModel {
    pub sender_name: String,
    pub sender_address: String,
    pub recipient_name: String,
    pub recipient_address: String,
    pub delivery_time: String,
    pub delivery_status: String,
    pub packaging_type: String,
    pub assigned_driver: String,
    pub amount: f64,
    pub package_description: String,
    pub weight: f64,
    pub length: f64,
    pub width: f64,
    pub height: f64,
}

impl InsertDeliveryModel {
    pub fn validate(&self) -> Result<(), DeliveryError> {
        let mut issues = Vec::new();

        if self.sender_name.chars().count() < MIN_NAME_LENGTH {
            issues.push(format!(
                "senderName must be at least {} characters",
                MIN_NAME_LENGTH
            ));
        }
        if self.sender_address.chars().count() < MIN_ADDRESS_LENGTH {
            issues.push(format!(
                "senderAddress must be at least {} characters",
                MIN_ADDRESS_LENGTH
            ));
        }
        if self.recipient_name.chars().count() < MIN_NAME_LENGTH {
            issues.push(format!(
                "recipientName must be at least {} characters",
                MIN_NAME_LENGTH
            ));
        }
        if self.recipient_address.chars().count() < MIN_ADDRESS_LENGTH {
            issues.push(format!(
                "recipientAddress must be at least {} characters",
                MIN_ADDRESS_LENGTH
            ));
        }
        if self.package_description.chars().count() < MIN_DESCRIPTION_LENGTH {
            issues.push(format!(
                "packageDescription must be at least {} characters",
                MIN_DESCRIPTION_LENGTH
            ));
        }
        if self.assigned_driver.is_empty() {
            issues.push("assignedDriver must not be empty".to_string());
        }

        if let Err(message) = DeliveryTime::try_from(self.delivery_time.as_str()) {
            issues.push(message);
        }
        if let Err(message) = DeliveryStatus::try_from(self.delivery_status.as_str()) {
            issues.push(message);
        }
        if let Err(message) = PackagingType::try_from(self.packaging_type.as_str()) {
            issues.push(message);
        }

        if self.amount < 0.0 {
            issues.push("amount must not be negative".to_string());
        }
        for (field, value) in [
            ("weight", self.weight),
            ("length", self.length),
            ("width", self.width),
            ("height", self.height),
        ] {
            if value <= 0.0 {
                issues.push(format!("{} must be positive", field));
            }
        }

        if issues.is_empty() {
            Ok(())
        } else {
            Err(DeliveryError::Validation(issues.join("; ")))
        }
    }

    pub fn to_entity(&self) -> InsertDeliveryEntity {
        InsertDeliveryEntity {
            sender_name: self.sender_name.clone(),
            sender_address: self.sender_address.clone(),
            recipient_name: self.recipient_name.clone(),
            recipient_address: self.recipient_address.clone(),
            delivery_time: self.delivery_time.clone(),
            delivery_status: self.delivery_status.clone(),
            packaging_type: self.packaging_type.clone(),
            assigned_driver: self.assigned_driver.clone(),
            amount: self.amount,
            package_description: self.package_description.clone(),
            weight: self.weight,
            length: self.length,
            width: self.width,
            height: self.height,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn valid_model() -> InsertDeliveryModel {
        InsertDeliveryModel {
            sender_name: "Alice Smith".to_string(),
            sender_address: "12 Harbour Road, Dockside".to_string(),
            recipient_name: "Bob Jones".to_string(),
            recipient_address: "98 Mountain View Lane".to_string(),
            delivery_time: "24-hours".to_string(),
            delivery_status: "pending".to_string(),
            packaging_type: "medium".to_string(),
            assigned_driver: "john-doe".to_string(),
            amount: 49.5,
            package_description: "Two boxes of ceramics".to_string(),
            weight: 3.2,
            length: 40.0,
            width: 30.0,
            height: 20.0,
        }
    }

    #[test]
    fn valid_model_passes() {
        assert!(valid_model().validate().is_ok());
    }

    #[test]
    fn short_name_and_address_are_rejected() {
        let mut model = valid_model();
        model.sender_name = "A".to_string();
        model.recipient_address = "short".to_string();

        let error = model.validate().unwrap_err();
        let message = error.to_string();
        assert!(message.contains("senderName"));
        assert!(message.contains("recipientAddress"));
    }

    #[test]
    fn short_description_is_rejected() {
        let mut model = valid_model();
        model.package_description = "box".to_string();
        assert!(model.validate().is_err());
    }

    #[test]
    fn unknown_enumerations_are_rejected() {
        let mut model = valid_model();
        model.delivery_time = "2-weeks".to_string();
        model.delivery_status = "lost".to_string();
        model.packaging_type = "gigantic".to_string();

        let message = model.validate().unwrap_err().to_string();
        assert!(message.contains("Invalid delivery time"));
        assert!(message.contains("Invalid delivery status"));
        assert!(message.contains("Invalid packaging type"));
    }

    #[test]
    fn negative_amount_and_zero_measurements_are_rejected() {
        let mut model = valid_model();
        model.amount = -1.0;
        model.weight = 0.0;

        let message = model.validate().unwrap_err().to_string();
        assert!(message.contains("amount must not be negative"));
        assert!(message.contains("weight must be positive"));
    }

    #[test]
    fn to_entity_keeps_all_fields() {
        let model = valid_model();
        let entity = model.to_entity();

        assert_eq!(entity.sender_name, model.sender_name);
        assert_eq!(entity.recipient_address, model.recipient_address);
        assert_eq!(entity.delivery_status, "pending");
        assert_eq!(entity.amount, model.amount);
        assert_eq!(entity.height, model.height);
    }

    #[test]
    fn malformed_identifier_is_reported_as_invalid() {
        let error = parse_delivery_id("not-a-uuid").unwrap_err();
        assert!(matches!(error, DeliveryError::InvalidIdentifier(_)));

        let parsed = parse_delivery_id("81edc02c-8df5-4a52-9b9a-18ee54173a5e");
        assert!(parsed.is_ok());
    }
}
