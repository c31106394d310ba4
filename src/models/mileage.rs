//! Mileage rate model

use serde::{Deserialize, Serialize};
use std::fmt;

use super::department::CatalogValidationError;
use super::ids::MileageRateId;
use super::money::Money;

/// A priced travel-distance bracket
///
/// `distance` is one-way miles; trips recorded against a project are round
/// trips, so the estimate engine doubles the distance.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MileageRate {
    /// Unique identifier
    pub id: MileageRateId,

    /// One-way distance in miles
    pub distance: f64,

    /// Cost per mile driven
    pub cost_per_mile: Money,
}

impl MileageRate {
    /// Create a new mileage rate
    pub fn new(distance: f64, cost_per_mile: Money) -> Self {
        Self {
            id: MileageRateId::new(),
            distance,
            cost_per_mile,
        }
    }

    /// Validate the mileage rate
    pub fn validate(&self) -> Result<(), CatalogValidationError> {
        if self.distance < 0.0 || !self.distance.is_finite() {
            return Err(CatalogValidationError::NegativeDistance(self.distance));
        }

        if self.cost_per_mile.is_negative() {
            return Err(CatalogValidationError::NegativeCost(
                self.cost_per_mile.amount(),
            ));
        }

        Ok(())
    }
}

impl fmt::Display for MileageRate {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} miles @ {}/mile", self.distance, self.cost_per_mile)
    }
}
