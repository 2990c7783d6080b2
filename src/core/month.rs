use std::fmt;
use std::str::FromStr;

use chrono::Month;
use serde::{Deserialize, Serialize};

use crate::error::{ChartError, ChartResult};

/// Three-letter Portuguese month abbreviation, as used on monthly x labels.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum MonthCode {
    Jan,
    Fev,
    Mar,
    Abr,
    Mai,
    Jun,
    Jul,
    Ago,
    Set,
    Out,
    Nov,
    Dez,
}

impl MonthCode {
    pub const ALL: [Self; 12] = [
        Self::Jan,
        Self::Fev,
        Self::Mar,
        Self::Abr,
        Self::Mai,
        Self::Jun,
        Self::Jul,
        Self::Ago,
        Self::Set,
        Self::Out,
        Self::Nov,
        Self::Dez,
    ];

    /// Looks up a month by zero-based index (0 = janeiro).
    #[must_use]
    pub fn from_month0(month0: u32) -> Option<Self> {
        usize::try_from(month0)
            .ok()
            .and_then(|index| Self::ALL.get(index).copied())
    }

    /// Exact, case-sensitive lookup by lowercase code.
    #[must_use]
    pub fn from_code(code: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|month| month.code() == code)
    }

    #[must_use]
    pub fn month0(self) -> u32 {
        self as u32
    }

    #[must_use]
    pub const fn code(self) -> &'static str {
        match self {
            Self::Jan => "jan",
            Self::Fev => "fev",
            Self::Mar => "mar",
            Self::Abr => "abr",
            Self::Mai => "mai",
            Self::Jun => "jun",
            Self::Jul => "jul",
            Self::Ago => "ago",
            Self::Set => "set",
            Self::Out => "out",
            Self::Nov => "nov",
            Self::Dez => "dez",
        }
    }

    /// Lowercase full name, e.g. `"março"`.
    #[must_use]
    pub const fn full_name(self) -> &'static str {
        match self {
            Self::Jan => "janeiro",
            Self::Fev => "fevereiro",
            Self::Mar => "março",
            Self::Abr => "abril",
            Self::Mai => "maio",
            Self::Jun => "junho",
            Self::Jul => "julho",
            Self::Ago => "agosto",
            Self::Set => "setembro",
            Self::Out => "outubro",
            Self::Nov => "novembro",
            Self::Dez => "dezembro",
        }
    }

    /// Capitalized full name used inside long-form dates, e.g. `"Março"`.
    #[must_use]
    pub const fn title_name(self) -> &'static str {
        match self {
            Self::Jan => "Janeiro",
            Self::Fev => "Fevereiro",
            Self::Mar => "Março",
            Self::Abr => "Abril",
            Self::Mai => "Maio",
            Self::Jun => "Junho",
            Self::Jul => "Julho",
            Self::Ago => "Agosto",
            Self::Set => "Setembro",
            Self::Out => "Outubro",
            Self::Nov => "Novembro",
            Self::Dez => "Dezembro",
        }
    }

    /// Case-insensitive lookup by full name, abbreviation or capitalized name.
    pub(crate) fn from_any_name(text: &str) -> Option<Self> {
        let lowered = text.trim().trim_end_matches('.').to_lowercase();
        Self::ALL
            .into_iter()
            .find(|month| month.code() == lowered || month.full_name() == lowered)
    }
}

impl fmt::Display for MonthCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.code())
    }
}

impl FromStr for MonthCode {
    type Err = ChartError;

    fn from_str(code: &str) -> ChartResult<Self> {
        Self::from_code(code).ok_or_else(|| ChartError::UnknownMonthCode {
            code: code.to_owned(),
        })
    }
}

impl From<MonthCode> for Month {
    fn from(code: MonthCode) -> Self {
        match code {
            MonthCode::Jan => Month::January,
            MonthCode::Fev => Month::February,
            MonthCode::Mar => Month::March,
            MonthCode::Abr => Month::April,
            MonthCode::Mai => Month::May,
            MonthCode::Jun => Month::June,
            MonthCode::Jul => Month::July,
            MonthCode::Ago => Month::August,
            MonthCode::Set => Month::September,
            MonthCode::Out => Month::October,
            MonthCode::Nov => Month::November,
            MonthCode::Dez => Month::December,
        }
    }
}

impl From<Month> for MonthCode {
    fn from(month: Month) -> Self {
        Self::ALL[month.number_from_month() as usize - 1]
    }
}

/// Expands a month code into its lowercase Portuguese name.
///
/// Only the twelve exact lowercase codes are recognized; anything else is `None`.
#[must_use]
pub fn expand_month_code(code: &str) -> Option<&'static str> {
    MonthCode::from_code(code).map(MonthCode::full_name)
}

#[cfg(test)]
mod tests {
    use super::MonthCode;

    #[test]
    fn any_name_lookup_accepts_codes_and_full_names() {
        assert_eq!(MonthCode::from_any_name("Março"), Some(MonthCode::Mar));
        assert_eq!(MonthCode::from_any_name("SET."), Some(MonthCode::Set));
        assert_eq!(MonthCode::from_any_name(" dezembro "), Some(MonthCode::Dez));
        assert_eq!(MonthCode::from_any_name("march"), None);
    }
}
