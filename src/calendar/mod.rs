//! Month calendar picker: a navigable (year, month) cursor, the derived grid
//! of day cells and an optional selected date.

mod date;
mod grid;
mod view;

pub use date::{days_of_month, month_name, weekday_of, CalDate, MONTH_NAMES, WEEKDAY_NAMES};
pub use grid::{DayCell, GridEntry, MonthGrid};
pub use view::{Activation, CalendarView, Cursor};
