use std::fmt;

use chrono::{DateTime, Datelike, FixedOffset, Local, NaiveDate, NaiveDateTime, TimeZone, Utc};
use serde::{Deserialize, Serialize};

use crate::core::MonthCode;
use crate::error::{ChartError, ChartResult};

const NAIVE_DATE_TIME_FORMATS: [&str; 4] = [
    "%Y-%m-%dT%H:%M:%S%.f",
    "%Y-%m-%dT%H:%M",
    "%Y-%m-%d %H:%M:%S%.f",
    "%Y-%m-%d %H:%M",
];

/// Time zone used when an input carries an absolute instant.
///
/// Date-only text is always taken as a calendar date and never shifted.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
pub enum LabelTimeZone {
    /// Host default time zone.
    #[default]
    Local,
    Utc,
    FixedOffsetMinutes {
        minutes: i16,
    },
}

impl LabelTimeZone {
    /// Rejects fixed offsets outside chrono's ±24h range.
    pub fn validate(self) -> ChartResult<()> {
        if let Self::FixedOffsetMinutes { minutes } = self {
            if FixedOffset::east_opt(i32::from(minutes) * 60).is_none() {
                return Err(ChartError::InvalidData(format!(
                    "label time zone offset out of range: {minutes} minutes"
                )));
            }
        }
        Ok(())
    }

    fn offset_at(self, instant: DateTime<Utc>) -> Option<FixedOffset> {
        match self {
            Self::Local => Some(Local.offset_from_utc_datetime(&instant.naive_utc())),
            Self::Utc => FixedOffset::east_opt(0),
            Self::FixedOffsetMinutes { minutes } => FixedOffset::east_opt(i32::from(minutes) * 60),
        }
    }

    /// Calendar day of `instant` in this zone; `None` when shifting leaves chrono's range.
    fn calendar_date_of(self, instant: DateTime<Utc>) -> Option<NaiveDate> {
        let offset = self.offset_at(instant)?;
        instant
            .naive_utc()
            .checked_add_offset(offset)
            .map(|local| local.date())
    }
}

/// Raw point-in-time input for date labels.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(untagged)]
pub enum DateValue {
    /// Unix timestamp in milliseconds.
    TimestampMillis(i64),
    Text(String),
}

impl DateValue {
    /// Resolves the value into calendar fields.
    pub fn to_calendar_date(&self, zone: LabelTimeZone) -> ChartResult<CalendarDate> {
        zone.validate()?;
        let resolved = match self {
            Self::TimestampMillis(millis) => DateTime::<Utc>::from_timestamp_millis(*millis)
                .and_then(|instant| zone.calendar_date_of(instant)),
            Self::Text(text) => parse_calendar_text(text, zone),
        };
        resolved
            .map(CalendarDate::from)
            .ok_or_else(|| ChartError::InvalidDate {
                input: self.to_string(),
            })
    }
}

impl fmt::Display for DateValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::TimestampMillis(millis) => write!(f, "{millis}"),
            Self::Text(text) => f.write_str(text),
        }
    }
}

impl From<&str> for DateValue {
    fn from(text: &str) -> Self {
        Self::Text(text.to_owned())
    }
}

impl From<String> for DateValue {
    fn from(text: String) -> Self {
        Self::Text(text)
    }
}

impl From<i64> for DateValue {
    fn from(millis: i64) -> Self {
        Self::TimestampMillis(millis)
    }
}

impl From<NaiveDate> for DateValue {
    fn from(date: NaiveDate) -> Self {
        Self::Text(date.format("%Y-%m-%d").to_string())
    }
}

/// Calendar fields extracted from a `DateValue`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct CalendarDate {
    /// 1-based day of month.
    pub day: u32,
    pub month: MonthCode,
    pub year: i32,
}

impl From<NaiveDate> for CalendarDate {
    fn from(date: NaiveDate) -> Self {
        Self {
            day: date.day(),
            month: MonthCode::ALL[date.month0() as usize],
            year: date.year(),
        }
    }
}

fn parse_calendar_text(text: &str, zone: LabelTimeZone) -> Option<NaiveDate> {
    let text = text.trim();
    if text.is_empty() {
        return None;
    }

    if let Ok(instant) = DateTime::parse_from_rfc3339(text) {
        return zone.calendar_date_of(instant.with_timezone(&Utc));
    }
    if let Ok(date) = NaiveDate::parse_from_str(text, "%Y-%m-%d") {
        return Some(date);
    }
    if let Some(date_time) = NAIVE_DATE_TIME_FORMATS
        .iter()
        .find_map(|format| NaiveDateTime::parse_from_str(text, format).ok())
    {
        return Some(date_time.date());
    }
    if let Ok(date) = NaiveDate::parse_from_str(text, "%d/%m/%Y") {
        return Some(date);
    }

    parse_portuguese_long_date(text).or_else(|| parse_english_month_date(text))
}

// "15 de Janeiro de 2023", "1 de mar de 2024"
fn parse_portuguese_long_date(text: &str) -> Option<NaiveDate> {
    let mut parts = text.split(" de ");
    let day = parts.next()?.trim().parse::<u32>().ok()?;
    let month = MonthCode::from_any_name(parts.next()?)?;
    let year = parts.next()?.trim().parse::<i32>().ok()?;
    if parts.next().is_some() {
        return None;
    }
    NaiveDate::from_ymd_opt(year, month.month0() + 1, day)
}

// "Jan 15, 2023" as emitted by time-scale tick/tooltip labels.
fn parse_english_month_date(text: &str) -> Option<NaiveDate> {
    let normalized = text
        .replace(',', " ")
        .split_whitespace()
        .collect::<Vec<_>>()
        .join(" ");
    NaiveDate::parse_from_str(&normalized, "%B %d %Y").ok()
}
