//! Company resource pages, visible to employees.

pub mod holiday_calendar;
pub mod office_map;
pub mod policies;
