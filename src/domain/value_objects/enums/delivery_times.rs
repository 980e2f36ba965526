use serde::{Deserialize, Serialize};
use std::fmt::Display;

/// Delivery-time estimate offered at shipment creation.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
pub enum DeliveryTime {
    #[serde(rename = "60-minutes")]
    SixtyMinutes,
    #[serde(rename = "24-hours")]
    TwentyFourHours,
    #[serde(rename = "24-48-hours")]
    OneToTwoDays,
    #[serde(rename = "3-5-days")]
    ThreeToFiveDays,
    #[serde(rename = "1-week")]
    OneWeek,
}

impl Display for DeliveryTime {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let delivery_time = match self {
            DeliveryTime::SixtyMinutes => "60-minutes",
            DeliveryTime::TwentyFourHours => "24-hours",
            DeliveryTime::OneToTwoDays => "24-48-hours",
            DeliveryTime::ThreeToFiveDays => "3-5-days",
            DeliveryTime::OneWeek => "1-week",
        };
        write!(f, "{}", delivery_time)
    }
}

impl TryFrom<&str> for DeliveryTime {
    type Error = String;

    fn try_from(value: &str) -> Result<Self, Self::Error> {
        match value {
            "60-minutes" => Ok(DeliveryTime::SixtyMinutes),
            "24-hours" => Ok(DeliveryTime::TwentyFourHours),
            "24-48-hours" => Ok(DeliveryTime::OneToTwoDays),
            "3-5-days" => Ok(DeliveryTime::ThreeToFiveDays),
            "1-week" => Ok(DeliveryTime::OneWeek),
            _ => Err(format!("Invalid delivery time: {}", value)),
        }
    }
}
