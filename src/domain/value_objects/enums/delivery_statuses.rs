use serde::{Deserialize, Serialize};
use std::fmt::Display;

#[derive(Default, Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "kebab-case")]
pub enum DeliveryStatus {
    #[default]
    Pending,
    Confirmed,
    InTransit,
    OutForDelivery,
    Delivered,
    Cancelled,
}

impl Display for DeliveryStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let delivery_status = match self {
            DeliveryStatus::Pending => "pending",
            DeliveryStatus::Confirmed => "confirmed",
            DeliveryStatus::InTransit => "in-transit",
            DeliveryStatus::OutForDelivery => "out-for-delivery",
            DeliveryStatus::Delivered => "delivered",
            DeliveryStatus::Cancelled => "cancelled",
        };
        write!(f, "{}", delivery_status)
    }
}

impl TryFrom<&str> for DeliveryStatus {
    type Error = String;

    fn try_from(value: &str) -> Result<Self, Self::Error> {
        match value {
            "pending" => Ok(DeliveryStatus::Pending),
            "confirmed" => Ok(DeliveryStatus::Confirmed),
            "in-transit" => Ok(DeliveryStatus::InTransit),
            "out-for-delivery" => Ok(DeliveryStatus::OutForDelivery),
            "delivered" => Ok(DeliveryStatus::Delivered),
            "cancelled" => Ok(DeliveryStatus::Cancelled),
            _ => Err(format!("Invalid delivery status: {}", value)),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_every_wire_form() {
        for raw in [
            "pending",
            "confirmed",
            "in-transit",
            "out-for-delivery",
            "delivered",
            "cancelled",
        ] {
            let status = DeliveryStatus::try_from(raw).unwrap();
            assert_eq!(status.to_string(), raw);
        }
    }

    #[test]
    fn rejects_unknown_status() {
        assert!(DeliveryStatus::try_from("shipped").is_err());
        assert!(DeliveryStatus::try_from("").is_err());
    }
}
