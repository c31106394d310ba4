//! Terminal display formatting
//!
//! Formatting functions for entity lists and details, plus shared helpers
//! for figures that may be IEEE sentinels (take rates and payback years on
//! empty projects divide by zero and must read as "N/A", not "inf").

pub mod catalog;
pub mod project;

pub use catalog::{
    format_department_list, format_labor_list, format_mileage_list, format_unit_list,
};
pub use project::{format_annual_list, format_project_details, format_project_list};

/// Format a percentage with one decimal, "N/A" for sentinels
pub fn format_percent(value: f64) -> String {
    if value.is_finite() {
        format!("{:.1}%", value)
    } else {
        "N/A".to_string()
    }
}

/// Format payback years with one decimal, "N/A" for sentinels
pub fn format_years(value: f64) -> String {
    if value.is_finite() {
        format!("{:.1} years", value)
    } else {
        "N/A".to_string()
    }
}
