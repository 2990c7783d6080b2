use tracing::{debug, trace};

use crate::core::{CalendarDate, DateValue, MonthCode};
use crate::error::{ChartError, ChartResult};

use super::{DateLabelConfig, TitleLabelFormat};

const PORTUGUESE_TIME_CONNECTOR: &str = " às ";
const MERIDIEM_MARKERS: [&str; 7] = ["a.m.", "p.m.", "am", "pm", "a.", "p.", "m."];

/// Formats a date value as `"{day} de {Mês} de {year}"` in the host time zone.
pub fn format_long_date(value: impl Into<DateValue>) -> ChartResult<String> {
    format_long_date_with(&value.into(), DateLabelConfig::default())
}

/// Formats a date value as `"{day} de {Mês} de {year}"`.
pub fn format_long_date_with(value: &DateValue, config: DateLabelConfig) -> ChartResult<String> {
    let date = value.to_calendar_date(config.time_zone).inspect_err(|err| {
        debug!(error = %err, "long date label rejected input");
    })?;
    Ok(format_calendar_date(date))
}

#[must_use]
pub fn format_calendar_date(date: CalendarDate) -> String {
    format!("{} de {} de {}", date.day, date.month.title_name(), date.year)
}

/// Removes time-of-day suffixes and punctuation left on raw x labels.
///
/// `"Jan 15, 2023, 12:00:00 a.m."` becomes `"Jan 15, 2023"`,
/// `"15/01/2023 às 10:30"` becomes `"15/01/2023"` and `"jan."` becomes `"jan"`.
#[must_use]
pub fn strip_label_artifacts(raw: &str) -> String {
    let without_connector = raw
        .split(PORTUGUESE_TIME_CONNECTOR)
        .next()
        .unwrap_or_default();

    let mut segments = Vec::new();
    for segment in without_connector.split(',') {
        let raw_tokens: Vec<&str> = segment.split_whitespace().collect();
        let has_time = raw_tokens.iter().any(|token| is_time_of_day(token));
        let tokens: Vec<&str> = raw_tokens
            .into_iter()
            .filter(|token| !(has_time && (is_time_of_day(token) || is_meridiem_marker(token))))
            .map(trim_abbreviation_period)
            .filter(|token| !token.is_empty())
            .collect();
        if !tokens.is_empty() {
            segments.push(tokens.join(" "));
        }
    }

    let joined = segments.join(", ");
    let cleaned = joined.trim_end_matches(['.', ' ']).to_owned();
    trace!(raw, cleaned = %cleaned, "stripped label artifacts");
    cleaned
}

/// Converts a raw hovered x label into a tooltip title.
pub fn format_title_label(
    raw: &str,
    format: TitleLabelFormat,
    config: DateLabelConfig,
) -> ChartResult<String> {
    let cleaned = strip_label_artifacts(raw);
    match format {
        TitleLabelFormat::FullDate => format_long_date_with(&DateValue::Text(cleaned), config)
            .map_err(|err| match err {
                ChartError::InvalidDate { .. } => ChartError::InvalidDate {
                    input: raw.to_owned(),
                },
                other => other,
            }),
        TitleLabelFormat::MonthCode => {
            let code = cleaned.to_lowercase();
            MonthCode::from_code(&code)
                .map(|month| month.full_name().to_owned())
                .ok_or(ChartError::UnknownMonthCode { code })
        }
    }
}

fn is_time_of_day(token: &str) -> bool {
    token.contains(':')
        && token
            .chars()
            .all(|c| c.is_ascii_digit() || c == ':' || c == '.')
}

fn is_meridiem_marker(token: &str) -> bool {
    let lowered = token.to_lowercase();
    MERIDIEM_MARKERS.contains(&lowered.as_str())
}

fn trim_abbreviation_period(token: &str) -> &str {
    let trimmed = token.trim_end_matches('.');
    if trimmed.chars().all(char::is_alphabetic) {
        trimmed
    } else {
        token
    }
}
