pub mod date_value;
pub mod month;
pub mod types;

pub use date_value::{CalendarDate, DateValue, LabelTimeZone};
pub use month::{MonthCode, expand_month_code};
pub use types::{ChartArea, Viewport};
