//! Salary lookup by role, country and experience.

mod component;
pub mod lookup;

pub use component::SalaryPage;
pub use lookup::{available_countries, confidence_percent, format_salary, salaries_for};
