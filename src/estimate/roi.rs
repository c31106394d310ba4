//! Take-rate and return-on-investment projection
//!
//! Projects customer adoption and translates a total build cost plus revenue
//! assumptions into payback duration under three scenarios: current
//! customers, projected customers after growth, and full build-out (every
//! home passed a customer).

use crate::models::{Money, ProjectArea};

/// Take rates and payback years for one project area
#[derive(Debug, Clone, PartialEq)]
pub struct RoiProjection {
    /// Percentage of homes passed that are customers today
    pub current_take_rate: f64,
    /// New signups projected from the growth assumption (rounded up)
    pub projected_new_customers: u32,
    /// Current plus projected customers
    pub total_projected_customers: u32,
    /// Take rate at the projected customer count
    pub projected_take_rate: f64,
    /// Annualized revenue per customer
    pub annual_income_per_customer: Money,
    /// Years to recoup the cost at current adoption
    pub current_roi_years: f64,
    /// Years to recoup at projected adoption
    pub projected_roi_years: f64,
    /// Years to recoup with every home passed a customer
    pub full_take_roi_years: f64,
}

impl RoiProjection {
    /// Project ROI using the project's own growth assumption
    pub fn compute(project: &ProjectArea, total_cost: Money) -> Self {
        Self::with_growth(project, total_cost, project.projected_growth_percentage)
    }

    /// Project ROI with an explicit growth percentage
    ///
    /// Used by annual rollups that substitute a fleet-wide default growth
    /// rate for projects that specify none.
    pub fn with_growth(project: &ProjectArea, total_cost: Money, growth_percentage: f64) -> Self {
        let homes = f64::from(project.homes_passed);
        let current = f64::from(project.current_customers);

        let current_take_rate = current / homes * 100.0;

        // Growth projections round up to whole customers, never under-promising
        // capacity. Multiply before dividing so integral cases stay exact and
        // the ceiling does not overshoot.
        let remaining = project.remaining_potential_customers();
        let projected_new_customers =
            (f64::from(remaining) * growth_percentage / 100.0).ceil() as u32;
        let total_projected_customers = project.current_customers + projected_new_customers;
        let projected_take_rate = f64::from(total_projected_customers) / homes * 100.0;

        let annual_income_per_customer = project.monthly_income_per_customer * 12.0;
        let annual_income = annual_income_per_customer.amount();

        // Plain IEEE-754 division: zero customers or zero income yields an
        // infinity/NaN sentinel the presentation layer renders as "N/A"
        let current_roi_years = total_cost.amount() / (annual_income * current);
        let projected_roi_years =
            total_cost.amount() / (annual_income * f64::from(total_projected_customers));
        let full_take_roi_years = total_cost.amount() / (annual_income * homes);

        Self {
            current_take_rate,
            projected_new_customers,
            total_projected_customers,
            projected_take_rate,
            annual_income_per_customer,
            current_roi_years,
            projected_roi_years,
            full_take_roi_years,
        }
    }
}

/// Years to recoup a cost from a flat monthly revenue figure
///
/// Returns 0 when the revenue is zero or negative; callers with a full
/// project use [`RoiProjection`] instead.
pub fn simple_roi(total_cost: Money, monthly_revenue: Money) -> f64 {
    if monthly_revenue.amount() <= 0.0 {
        return 0.0;
    }
    total_cost.amount() / (monthly_revenue.amount() * 12.0)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn project(homes: u32, customers: u32, income: f64, growth: f64) -> ProjectArea {
        let mut p = ProjectArea::new("Test", homes, customers);
        p.monthly_income_per_customer = Money::from_dollars(income);
        p.projected_growth_percentage = growth;
        p
    }

    #[test]
    fn test_end_to_end_scenario() {
        let p = project(100, 20, 30.0, 50.0);
        let roi = RoiProjection::compute(&p, Money::from_dollars(170.0));

        assert_eq!(roi.current_take_rate, 20.0);
        assert_eq!(roi.projected_new_customers, 40); // ceil(80 * 0.5)
        assert_eq!(roi.total_projected_customers, 60);
        assert_eq!(roi.projected_take_rate, 60.0);
        assert_eq!(roi.annual_income_per_customer, Money::from_dollars(360.0));
        assert!((roi.current_roi_years - 170.0 / 7200.0).abs() < 1e-12);
        assert!((roi.projected_roi_years - 170.0 / 21600.0).abs() < 1e-12);
        assert!((roi.full_take_roi_years - 170.0 / 36000.0).abs() < 1e-12);
    }

    #[test]
    fn test_growth_ceiling_integral_cases() {
        // 700 remaining at 33%: 700*33/100 = 231 exactly, no rounding up
        let p = project(1000, 300, 30.0, 33.0);
        let roi = RoiProjection::compute(&p, Money::from_dollars(1000.0));
        assert_eq!(roi.projected_new_customers, 231);

        let p = project(1000, 300, 30.0, 34.0);
        let roi = RoiProjection::compute(&p, Money::from_dollars(1000.0));
        assert_eq!(roi.projected_new_customers, 238);
    }

    #[test]
    fn test_growth_ceiling_fractional_case() {
        // 699 remaining at 33%: 230.67 rounds up to 231
        let p = project(1000, 301, 30.0, 33.0);
        let roi = RoiProjection::compute(&p, Money::from_dollars(1000.0));
        assert_eq!(roi.projected_new_customers, 231);
        assert_eq!(roi.total_projected_customers, 532);
    }

    #[test]
    fn test_full_growth_reaches_every_home() {
        let p = project(1000, 300, 30.0, 100.0);
        let roi = RoiProjection::compute(&p, Money::from_dollars(1000.0));

        assert_eq!(roi.total_projected_customers, 1000);
        assert_eq!(roi.projected_take_rate, 100.0);
    }

    #[test]
    fn test_zero_growth_projects_no_new_customers() {
        let p = project(1000, 300, 30.0, 0.0);
        let roi = RoiProjection::compute(&p, Money::from_dollars(1000.0));

        assert_eq!(roi.projected_new_customers, 0);
        assert_eq!(roi.total_projected_customers, 300);
        assert_eq!(roi.projected_take_rate, roi.current_take_rate);
    }

    #[test]
    fn test_with_growth_overrides_project_assumption() {
        let p = project(1000, 300, 30.0, 0.0);
        let roi = RoiProjection::with_growth(&p, Money::from_dollars(1000.0), 30.0);
        assert_eq!(roi.projected_new_customers, 210); // ceil(700 * 0.3)
    }

    #[test]
    fn test_roi_monotonicity() {
        // More customers means faster or equal payback
        let p = project(1000, 250, 45.0, 40.0);
        let roi = RoiProjection::compute(&p, Money::from_dollars(250_000.0));

        assert!(roi.current_roi_years >= roi.projected_roi_years);
        assert!(roi.projected_roi_years >= roi.full_take_roi_years);
    }

    #[test]
    fn test_zero_customers_yields_sentinel() {
        let p = project(100, 0, 30.0, 0.0);
        let roi = RoiProjection::compute(&p, Money::from_dollars(170.0));

        assert!(roi.current_roi_years.is_infinite());
        assert!(roi.projected_roi_years.is_infinite());
        assert!(roi.full_take_roi_years.is_finite());
        assert_eq!(roi.current_take_rate, 0.0);
    }

    #[test]
    fn test_zero_homes_yields_sentinel() {
        let p = project(0, 0, 30.0, 50.0);
        let roi = RoiProjection::compute(&p, Money::from_dollars(170.0));

        // 0/0 take rate is NaN, cost over zero annual income is infinite
        assert!(roi.current_take_rate.is_nan());
        assert!(roi.full_take_roi_years.is_infinite());
    }

    #[test]
    fn test_customers_exceeding_homes_tolerated() {
        // Invariant violations come out arithmetically consistent, not a panic
        let mut p = project(100, 10, 30.0, 50.0);
        p.current_customers = 150;
        let roi = RoiProjection::compute(&p, Money::from_dollars(170.0));

        assert_eq!(roi.projected_new_customers, 0);
        assert!(roi.current_take_rate > 100.0);
    }

    #[test]
    fn test_simple_roi() {
        assert_eq!(
            simple_roi(Money::from_dollars(1200.0), Money::from_dollars(10.0)),
            10.0
        );
        assert_eq!(simple_roi(Money::from_dollars(1200.0), Money::zero()), 0.0);
        assert_eq!(
            simple_roi(Money::from_dollars(1200.0), Money::from_dollars(-5.0)),
            0.0
        );
    }
}
