//! Labor rate model

use serde::{Deserialize, Serialize};
use std::fmt;

use super::department::CatalogValidationError;
use super::ids::LaborRateId;
use super::money::Money;

/// How a labor rate is billed
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum LaborRateType {
    #[default]
    Hour,
    Day,
}

impl fmt::Display for LaborRateType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Hour => write!(f, "hour"),
            Self::Day => write!(f, "day"),
        }
    }
}

/// A priced labor category (e.g., "Splicer", "Bore Crew")
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LaborRate {
    /// Unique identifier
    pub id: LaborRateId,

    /// Labor category name
    pub name: String,

    /// How the rate is billed
    #[serde(rename = "type", default)]
    pub rate_type: LaborRateType,

    /// Cost per billed hour/day
    pub cost: Money,
}

impl LaborRate {
    /// Create a new labor rate
    pub fn new(name: impl Into<String>, rate_type: LaborRateType, cost: Money) -> Self {
        Self {
            id: LaborRateId::new(),
            name: name.into(),
            rate_type,
            cost,
        }
    }

    /// Validate the labor rate
    pub fn validate(&self) -> Result<(), CatalogValidationError> {
        if self.name.trim().is_empty() {
            return Err(CatalogValidationError::EmptyName);
        }

        if self.name.len() > 80 {
            return Err(CatalogValidationError::NameTooLong(self.name.len()));
        }

        if self.cost.is_negative() {
            return Err(CatalogValidationError::NegativeCost(self.cost.amount()));
        }

        Ok(())
    }
}

impl fmt::Display for LaborRate {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} ({}/{})", self.name, self.cost, self.rate_type)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_labor_rate() {
        let rate = LaborRate::new("Splicer", LaborRateType::Hour, Money::from_dollars(85.0));
        assert_eq!(rate.name, "Splicer");
        assert_eq!(rate.rate_type, LaborRateType::Hour);
        assert_eq!(rate.cost, Money::from_dollars(85.0));
    }

    #[test]
    fn test_validation() {
        let mut rate = LaborRate::new("Bore Crew", LaborRateType::Day, Money::from_dollars(2400.0));
        assert!(rate.validate().is_ok());

        rate.cost = Money::from_dollars(-5.0);
        assert!(matches!(
            rate.validate(),
            Err(CatalogValidationError::NegativeCost(_))
        ));
    }

    #[test]
    fn test_serialization() {
        let rate = LaborRate::new("Splicer", LaborRateType::Hour, Money::from_dollars(85.0));
        let json = serde_json::to_string(&rate).unwrap();
        assert!(json.contains("\"type\":\"hour\""));

        let deserialized: LaborRate = serde_json::from_str(&json).unwrap();
        assert_eq!(rate.id, deserialized.id);
        assert_eq!(rate.rate_type, deserialized.rate_type);
    }
}
