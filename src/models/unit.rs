//! Unit model
//!
//! A unit is a priced material or equipment line item (cable, conduit,
//! splice enclosures, boring per foot, ...). Every unit belongs to exactly
//! one department by id reference.

use serde::{Deserialize, Serialize};
use std::fmt;

use super::department::CatalogValidationError;
use super::ids::{DepartmentId, UnitId};
use super::money::Money;

/// How a unit is counted
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum UnitType {
    /// Counted per item
    #[default]
    Each,
    /// Counted per foot
    Foot,
    /// Counted per hour (equipment rental)
    Hour,
}

impl fmt::Display for UnitType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Each => write!(f, "each"),
            Self::Foot => write!(f, "foot"),
            Self::Hour => write!(f, "hour"),
        }
    }
}

/// A priced material/equipment catalog entry
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Unit {
    /// Unique identifier
    pub id: UnitId,

    /// The department this unit belongs to
    pub department_id: DepartmentId,

    /// Unit name
    pub name: String,

    /// Optional description
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,

    /// How the unit is counted
    #[serde(rename = "type", default)]
    pub unit_type: UnitType,

    /// Cost per counted unit
    pub cost: Money,
}

impl Unit {
    /// Create a new unit
    pub fn new(
        name: impl Into<String>,
        department_id: DepartmentId,
        unit_type: UnitType,
        cost: Money,
    ) -> Self {
        Self {
            id: UnitId::new(),
            department_id,
            name: name.into(),
            description: None,
            unit_type,
            cost,
        }
    }

    /// Validate the unit
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

impl fmt::Display for Unit {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} ({}/{})", self.name, self.cost, self.unit_type)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_unit() {
        let dept = DepartmentId::new();
        let unit = Unit::new("Drop Cable", dept, UnitType::Foot, Money::from_dollars(0.35));

        assert_eq!(unit.name, "Drop Cable");
        assert_eq!(unit.department_id, dept);
        assert_eq!(unit.unit_type, UnitType::Foot);
        assert_eq!(unit.cost, Money::from_dollars(0.35));
    }

    #[test]
    fn test_validation() {
        let dept = DepartmentId::new();
        let mut unit = Unit::new("Splice Tray", dept, UnitType::Each, Money::from_dollars(12.0));
        assert!(unit.validate().is_ok());

        unit.cost = Money::from_dollars(-1.0);
        assert!(matches!(
            unit.validate(),
            Err(CatalogValidationError::NegativeCost(_))
        ));

        unit.cost = Money::zero();
        unit.name = String::new();
        assert_eq!(unit.validate(), Err(CatalogValidationError::EmptyName));
    }

    #[test]
    fn test_unit_type_serialization() {
        assert_eq!(serde_json::to_string(&UnitType::Each).unwrap(), "\"each\"");
        assert_eq!(serde_json::to_string(&UnitType::Foot).unwrap(), "\"foot\"");
        assert_eq!(serde_json::to_string(&UnitType::Hour).unwrap(), "\"hour\"");

        let parsed: UnitType = serde_json::from_str("\"foot\"").unwrap();
        assert_eq!(parsed, UnitType::Foot);
    }

    #[test]
    fn test_serialization_uses_type_key() {
        let dept = DepartmentId::new();
        let unit = Unit::new("Conduit", dept, UnitType::Foot, Money::from_dollars(1.25));
        let json = serde_json::to_string(&unit).unwrap();
        assert!(json.contains("\"type\":\"foot\""));

        let deserialized: Unit = serde_json::from_str(&json).unwrap();
        assert_eq!(unit.id, deserialized.id);
        assert_eq!(unit.unit_type, deserialized.unit_type);
    }
}
