use serde::{Deserialize, Serialize};
use std::fmt::Display;

#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "kebab-case")]
pub enum PackagingType {
    Small,
    Medium,
    Large,
    ExtraLarge,
    Oversized,
}

impl Display for PackagingType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let packaging_type = match self {
            PackagingType::Small => "small",
            PackagingType::Medium => "medium",
            PackagingType::Large => "large",
            PackagingType::ExtraLarge => "extra-large",
            PackagingType::Oversized => "oversized",
        };
        write!(f, "{}", packaging_type)
    }
}

impl TryFrom<&str> for PackagingType {
    type Error = String;

    fn try_from(value: &str) -> Result<Self, Self::Error> {
        match value {
            "small" => Ok(PackagingType::Small),
            "medium" => Ok(PackagingType::Medium),
            "large" => Ok(PackagingType::Large),
            "extra-large" => Ok(PackagingType::ExtraLarge),
            "oversized" => Ok(PackagingType::Oversized),
            _ => Err(format!("Invalid packaging type: {}", value)),
        }
    }
}
