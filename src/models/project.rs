//! Project area model
//!
//! A project area ties usage counts against the rate catalogs together with
//! the take-rate inputs (homes passed, current customers, income and growth
//! assumptions) the ROI projection runs on. Catalog entries are referenced
//! by id, never embedded; a reference may dangle after catalog edits and the
//! estimate engine tolerates that by skipping the line.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::fmt;

use super::ids::{LaborRateId, MileageRateId, ProjectId, UnitId};
use super::money::Money;

/// A unit selected for a project with a usage quantity
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ProjectUnit {
    pub unit_id: UnitId,
    pub quantity: u32,
}

/// A labor rate selected for a project with a billed quantity
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ProjectLaborRate {
    pub labor_rate_id: LaborRateId,
    pub quantity: u32,
}

/// A mileage rate selected for a project with a round-trip count
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ProjectMileageRate {
    pub mileage_rate_id: MileageRateId,
    /// Number of round trips
    pub trips: u32,
}

/// A fiber deployment project area
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ProjectArea {
    /// Unique identifier
    pub id: ProjectId,

    /// Project name
    pub name: String,

    /// Optional map/plat image URL
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub image_url: Option<String>,

    /// Free-form notes
    #[serde(default)]
    pub notes: String,

    /// Total addressable dwellings in the project footprint
    pub homes_passed: u32,

    /// Dwellings that are paying customers today
    pub current_customers: u32,

    /// Monthly revenue assumption per customer
    pub monthly_income_per_customer: Money,

    /// Projected signup growth as a percentage (0-100) of the remaining
    /// potential customers; 0 means no growth
    #[serde(default)]
    pub projected_growth_percentage: f64,

    /// Selected units with quantities
    #[serde(default)]
    pub units: Vec<ProjectUnit>,

    /// Selected labor rates with quantities
    #[serde(default)]
    pub labor_rates: Vec<ProjectLaborRate>,

    /// Selected mileage rates with round-trip counts
    #[serde(default)]
    pub mileage_rates: Vec<ProjectMileageRate>,

    /// When the project was created
    pub created_at: DateTime<Utc>,

    /// When the project was last modified
    pub updated_at: DateTime<Utc>,
}

impl ProjectArea {
    /// Create a new project area
    pub fn new(name: impl Into<String>, homes_passed: u32, current_customers: u32) -> Self {
        let now = Utc::now();
        Self {
            id: ProjectId::new(),
            name: name.into(),
            image_url: None,
            notes: String::new(),
            homes_passed,
            current_customers,
            monthly_income_per_customer: Money::zero(),
            projected_growth_percentage: 0.0,
            units: Vec::new(),
            labor_rates: Vec::new(),
            mileage_rates: Vec::new(),
            created_at: now,
            updated_at: now,
        }
    }

    /// Stamp the modification time
    pub fn touch(&mut self) {
        self.updated_at = Utc::now();
    }

    /// Set the usage quantity for a unit; a quantity of 0 removes the line
    pub fn set_unit_quantity(&mut self, unit_id: UnitId, quantity: u32) {
        if quantity == 0 {
            self.units.retain(|u| u.unit_id != unit_id);
        } else if let Some(entry) = self.units.iter_mut().find(|u| u.unit_id == unit_id) {
            entry.quantity = quantity;
        } else {
            self.units.push(ProjectUnit { unit_id, quantity });
        }
        self.touch();
    }

    /// Set the billed quantity for a labor rate; 0 removes the line
    pub fn set_labor_quantity(&mut self, labor_rate_id: LaborRateId, quantity: u32) {
        if quantity == 0 {
            self.labor_rates.retain(|l| l.labor_rate_id != labor_rate_id);
        } else if let Some(entry) = self
            .labor_rates
            .iter_mut()
            .find(|l| l.labor_rate_id == labor_rate_id)
        {
            entry.quantity = quantity;
        } else {
            self.labor_rates.push(ProjectLaborRate {
                labor_rate_id,
                quantity,
            });
        }
        self.touch();
    }

    /// Set the round-trip count for a mileage rate; 0 removes the line
    pub fn set_mileage_trips(&mut self, mileage_rate_id: MileageRateId, trips: u32) {
        if trips == 0 {
            self.mileage_rates
                .retain(|m| m.mileage_rate_id != mileage_rate_id);
        } else if let Some(entry) = self
            .mileage_rates
            .iter_mut()
            .find(|m| m.mileage_rate_id == mileage_rate_id)
        {
            entry.trips = trips;
        } else {
            self.mileage_rates.push(ProjectMileageRate {
                mileage_rate_id,
                trips,
            });
        }
        self.touch();
    }

    /// Homes passed that are not yet customers
    pub fn remaining_potential_customers(&self) -> u32 {
        self.homes_passed.saturating_sub(self.current_customers)
    }

    /// Validate the project
    pub fn validate(&self) -> Result<(), ProjectValidationError> {
        if self.name.trim().is_empty() {
            return Err(ProjectValidationError::EmptyName);
        }

        if self.current_customers > self.homes_passed {
            return Err(ProjectValidationError::CustomersExceedHomes {
                customers: self.current_customers,
                homes: self.homes_passed,
            });
        }

        if !(0.0..=100.0).contains(&self.projected_growth_percentage) {
            return Err(ProjectValidationError::GrowthOutOfRange(
                self.projected_growth_percentage,
            ));
        }

        if self.monthly_income_per_customer.is_negative() {
            return Err(ProjectValidationError::NegativeIncome(
                self.monthly_income_per_customer.amount(),
            ));
        }

        Ok(())
    }
}

impl fmt::Display for ProjectArea {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.name)
    }
}

/// Validation errors for project areas
#[derive(Debug, Clone, PartialEq)]
pub enum ProjectValidationError {
    EmptyName,
    CustomersExceedHomes { customers: u32, homes: u32 },
    GrowthOutOfRange(f64),
    NegativeIncome(f64),
}

impl fmt::Display for ProjectValidationError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::EmptyName => write!(f, "Project name cannot be empty"),
            Self::CustomersExceedHomes { customers, homes } => write!(
                f,
                "Current customers ({}) cannot exceed homes passed ({})",
                customers, homes
            ),
            Self::GrowthOutOfRange(growth) => {
                write!(f, "Growth percentage must be 0-100, got {}", growth)
            }
            Self::NegativeIncome(income) => {
                write!(f, "Monthly income cannot be negative: {}", income)
            }
        }
    }
}

impl std::error::Error for ProjectValidationError {}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_project() {
        let project = ProjectArea::new("Cedar Ridge", 1000, 300);
        assert_eq!(project.name, "Cedar Ridge");
        assert_eq!(project.homes_passed, 1000);
        assert_eq!(project.current_customers, 300);
        assert!(project.units.is_empty());
        assert!(project.labor_rates.is_empty());
        assert!(project.mileage_rates.is_empty());
    }

    #[test]
    fn test_set_unit_quantity() {
        let mut project = ProjectArea::new("Test", 100, 10);
        let unit_id = UnitId::new();

        project.set_unit_quantity(unit_id, 5);
        assert_eq!(project.units.len(), 1);
        assert_eq!(project.units[0].quantity, 5);

        // Updating replaces the quantity instead of adding a second line
        project.set_unit_quantity(unit_id, 8);
        assert_eq!(project.units.len(), 1);
        assert_eq!(project.units[0].quantity, 8);

        // Zero removes
        project.set_unit_quantity(unit_id, 0);
        assert!(project.units.is_empty());
    }

    #[test]
    fn test_set_labor_and_mileage() {
        let mut project = ProjectArea::new("Test", 100, 10);
        let labor_id = LaborRateId::new();
        let mileage_id = MileageRateId::new();

        project.set_labor_quantity(labor_id, 40);
        project.set_mileage_trips(mileage_id, 12);
        assert_eq!(project.labor_rates[0].quantity, 40);
        assert_eq!(project.mileage_rates[0].trips, 12);

        project.set_labor_quantity(labor_id, 0);
        project.set_mileage_trips(mileage_id, 0);
        assert!(project.labor_rates.is_empty());
        assert!(project.mileage_rates.is_empty());
    }

    #[test]
    fn test_remaining_potential_customers() {
        let project = ProjectArea::new("Test", 1000, 300);
        assert_eq!(project.remaining_potential_customers(), 700);

        // Saturates instead of underflowing when the invariant is violated
        let mut broken = ProjectArea::new("Broken", 100, 10);
        broken.current_customers = 150;
        assert_eq!(broken.remaining_potential_customers(), 0);
    }

    #[test]
    fn test_validation() {
        let mut project = ProjectArea::new("Valid", 100, 20);
        assert!(project.validate().is_ok());

        project.current_customers = 150;
        assert!(matches!(
            project.validate(),
            Err(ProjectValidationError::CustomersExceedHomes { .. })
        ));

        project.current_customers = 20;
        project.projected_growth_percentage = 120.0;
        assert!(matches!(
            project.validate(),
            Err(ProjectValidationError::GrowthOutOfRange(_))
        ));

        project.projected_growth_percentage = 50.0;
        project.name = String::new();
        assert_eq!(project.validate(), Err(ProjectValidationError::EmptyName));
    }

    #[test]
    fn test_serialization() {
        let mut project = ProjectArea::new("Cedar Ridge", 1000, 300);
        project.set_unit_quantity(UnitId::new(), 3);

        let json = serde_json::to_string(&project).unwrap();
        let deserialized: ProjectArea = serde_json::from_str(&json).unwrap();
        assert_eq!(project.id, deserialized.id);
        assert_eq!(deserialized.units.len(), 1);
        assert_eq!(deserialized.units[0].quantity, 3);
    }
}
