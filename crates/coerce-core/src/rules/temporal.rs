//! Date and datetime probes and the formatting coercion.

use super::Outcome;
use crate::value::Value;
use chrono::{DateTime, NaiveDate, NaiveDateTime, NaiveTime};
use std::fmt;
use std::str::FromStr;
use thiserror::Error;

/// Known date format aliases.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum DateFormat {
    /// `YYYY-MM-DD`
    IsoDate,
    /// `DD-MM-YYYY`
    DayMonthYear,
    /// `MM/DD/YYYY`
    UsDate,
    /// `DD/MM/YYYY`
    EuDate,
    /// `YYYY/MM/DD`
    YearSlash,
    /// `DD.MM.YYYY`
    DottedDate,
    /// `YYYY-MM-DD HH:MM:SS`
    IsoDateTime,
    /// `YYYY-MM-DDTHH:MM:SS`
    Rfc3339Local,
    /// `DD-MM-YYYY HH:MM:SS`
    DayMonthYearTime,
    /// `MM/DD/YYYY HH:MM`
    UsDateTime,
}

impl DateFormat {
    pub const ALL: [DateFormat; 10] = [
        DateFormat::IsoDate,
        DateFormat::DayMonthYear,
        DateFormat::UsDate,
        DateFormat::EuDate,
        DateFormat::YearSlash,
        DateFormat::DottedDate,
        DateFormat::IsoDateTime,
        DateFormat::Rfc3339Local,
        DateFormat::DayMonthYearTime,
        DateFormat::UsDateTime,
    ];

    /// The alias callers name the format by.
    pub fn alias(&self) -> &'static str {
        match self {
            DateFormat::IsoDate => "YYYY-MM-DD",
            DateFormat::DayMonthYear => "DD-MM-YYYY",
            DateFormat::UsDate => "MM/DD/YYYY",
            DateFormat::EuDate => "DD/MM/YYYY",
            DateFormat::YearSlash => "YYYY/MM/DD",
            DateFormat::DottedDate => "DD.MM.YYYY",
            DateFormat::IsoDateTime => "YYYY-MM-DD HH:MM:SS",
            DateFormat::Rfc3339Local => "YYYY-MM-DDTHH:MM:SS",
            DateFormat::DayMonthYearTime => "DD-MM-YYYY HH:MM:SS",
            DateFormat::UsDateTime => "MM/DD/YYYY HH:MM",
        }
    }

    /// The `chrono` format string.
    pub fn pattern(&self) -> &'static str {
        match self {
            DateFormat::IsoDate => "%Y-%m-%d",
            DateFormat::DayMonthYear => "%d-%m-%Y",
            DateFormat::UsDate => "%m/%d/%Y",
            DateFormat::EuDate => "%d/%m/%Y",
            DateFormat::YearSlash => "%Y/%m/%d",
            DateFormat::DottedDate => "%d.%m.%Y",
            DateFormat::IsoDateTime => "%Y-%m-%d %H:%M:%S",
            DateFormat::Rfc3339Local => "%Y-%m-%dT%H:%M:%S",
            DateFormat::DayMonthYearTime => "%d-%m-%Y %H:%M:%S",
            DateFormat::UsDateTime => "%m/%d/%Y %H:%M",
        }
    }

    pub fn has_time(&self) -> bool {
        self.pattern().contains("%H")
    }

    /// Parse text into a date, dropping any time component.
    pub fn parse_date(&self, text: &str) -> Option<NaiveDate> {
        if self.has_time() {
            NaiveDateTime::parse_from_str(text, self.pattern())
                .ok()
                .map(|dt| dt.date())
        } else {
            NaiveDate::parse_from_str(text, self.pattern()).ok()
        }
    }

    pub fn format_datetime(&self, value: &NaiveDateTime) -> String {
        value.format(self.pattern()).to_string()
    }
}

impl fmt::Display for DateFormat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.alias())
    }
}

/// Returned when a format alias is not one of [`DateFormat::ALL`].
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("unknown date format alias `{0}`")]
pub struct UnknownDateFormat(pub String);

impl FromStr for DateFormat {
    type Err = UnknownDateFormat;

    fn from_str(alias: &str) -> Result<Self, Self::Err> {
        DateFormat::ALL
            .into_iter()
            .find(|format| format.alias() == alias)
            .ok_or_else(|| UnknownDateFormat(alias.to_string()))
    }
}

/// Read an integer or float as seconds since the UNIX epoch, in UTC.
fn from_timestamp(value: &Value) -> Option<NaiveDateTime> {
    let (secs, nanos) = match value {
        Value::Int(secs) => (*secs, 0),
        Value::Float(x) if x.is_finite() => {
            let secs = x.floor();
            if secs < i64::MIN as f64 || secs >= i64::MAX as f64 {
                return None;
            }
            let nanos = ((x - secs) * 1e9) as u32;
            (secs as i64, nanos.min(999_999_999))
        }
        _ => return None,
    };
    DateTime::from_timestamp(secs, nanos).map(|dt| dt.naive_utc())
}

/// Three slash-separated parts of at most four characters each.
fn looks_like_slash_date(text: &str) -> bool {
    let parts: Vec<&str> = text.split('/').collect();
    parts.len() == 3 && parts.iter().all(|part| part.chars().count() <= 4)
}

pub(super) fn is_date(value: &Value) -> bool {
    match value {
        Value::Date(_) | Value::DateTime(_) => true,
        Value::Str(text) => {
            [DateFormat::IsoDate, DateFormat::DayMonthYear]
                .iter()
                .any(|format| format.parse_date(text).is_some())
                || looks_like_slash_date(text)
        }
        other => from_timestamp(other).is_some(),
    }
}

pub(super) fn is_datetime(value: &Value) -> bool {
    match value {
        Value::DateTime(_) => true,
        Value::Str(text) => DateFormat::ALL
            .iter()
            .filter(|format| format.has_time())
            .any(|format| NaiveDateTime::parse_from_str(text, format.pattern()).is_ok()),
        other => from_timestamp(other).is_some(),
    }
}

/// Dates are rendered with the alias pattern; text and timestamps become
/// dates.
pub(super) fn with_format(current: &Value, alias: &str) -> Outcome {
    let Ok(format) = alias.parse::<DateFormat>() else {
        tracing::debug!(alias, "unknown date format alias");
        return Outcome::Fail;
    };

    match current {
        Value::Date(date) => Outcome::Coerced(Value::Str(
            format.format_datetime(&date.and_time(NaiveTime::default())),
        )),
        Value::DateTime(dt) => Outcome::Coerced(Value::Str(format.format_datetime(dt))),
        Value::Str(text) => match format.parse_date(text) {
            Some(date) => Outcome::Coerced(Value::Date(date)),
            None => Outcome::Fail,
        },
        other => match from_timestamp(other) {
            Some(dt) => Outcome::Coerced(Value::Date(dt.date())),
            None => Outcome::Fail,
        },
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn ymd(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    #[test]
    fn aliases_resolve() {
        assert_eq!("YYYY-MM-DD".parse::<DateFormat>(), Ok(DateFormat::IsoDate));
        assert_eq!("MM/DD/YYYY".parse::<DateFormat>(), Ok(DateFormat::UsDate));
        assert_eq!(
            "%Y-%m-%d".parse::<DateFormat>(),
            Err(UnknownDateFormat("%Y-%m-%d".to_string()))
        );
        for format in DateFormat::ALL {
            assert_eq!(format.alias().parse::<DateFormat>(), Ok(format));
        }
    }

    #[test]
    fn date_probe_known_patterns() {
        assert!(is_date(&Value::from("2023-07-23")));
        assert!(is_date(&Value::from("23-07-2023")));
        assert!(is_date(&Value::from("07/23/2023")));
        assert!(is_date(&Value::from(ymd(2023, 7, 23))));
        assert!(is_date(&Value::from(1_690_070_400)));
    }

    #[test]
    fn date_probe_rejects_other_text() {
        assert!(!is_date(&Value::from("not_a_date")));
        assert!(!is_date(&Value::from("2023/07/23/01")));
        assert!(!is_date(&Value::from("12345/1/1")));
        assert!(!is_date(&Value::from("2023-13-40")));
        assert!(!is_date(&Value::Null));
    }

    #[test]
    fn datetime_probe() {
        assert!(is_datetime(&Value::from("2023-07-23 12:34:56")));
        assert!(is_datetime(&Value::from("2023-07-23T12:34:56")));
        assert!(is_datetime(&Value::from("07/23/2023 12:34")));
        assert!(is_datetime(&Value::from(1_690_070_400.5)));
        assert!(!is_datetime(&Value::from("2023-07-23")));
        assert!(!is_datetime(&Value::from("not_a_datetime_value")));
    }

    #[test]
    fn with_format_parses_text_into_date() {
        assert_eq!(
            with_format(&Value::from("2023-07-23"), "YYYY-MM-DD"),
            Outcome::Coerced(Value::Date(ymd(2023, 7, 23)))
        );
        assert_eq!(
            with_format(&Value::from("07/23/2023"), "MM/DD/YYYY"),
            Outcome::Coerced(Value::Date(ymd(2023, 7, 23)))
        );
        assert_eq!(
            with_format(&Value::from("23-07-2023 08:00:00"), "DD-MM-YYYY HH:MM:SS"),
            Outcome::Coerced(Value::Date(ymd(2023, 7, 23)))
        );
        assert!(with_format(&Value::from("2023-07-23"), "DD-MM-YYYY").is_fail());
    }

    #[test]
    fn with_format_renders_existing_dates() {
        assert_eq!(
            with_format(&Value::from(ymd(2023, 7, 23)), "DD.MM.YYYY"),
            Outcome::Coerced(Value::from("23.07.2023"))
        );
        let dt = ymd(2023, 7, 23).and_hms_opt(12, 34, 56).unwrap();
        assert_eq!(
            with_format(&Value::from(dt), "MM/DD/YYYY HH:MM"),
            Outcome::Coerced(Value::from("07/23/2023 12:34"))
        );
    }

    #[test]
    fn with_format_reads_timestamps_in_utc() {
        assert_eq!(
            with_format(&Value::from(0), "YYYY-MM-DD"),
            Outcome::Coerced(Value::Date(ymd(1970, 1, 1)))
        );
    }

    #[test]
    fn with_format_unknown_alias_fails() {
        assert!(with_format(&Value::from("2023-07-23"), "yyyy.mm.dd").is_fail());
        assert!(with_format(&Value::from(ymd(2023, 7, 23)), "nope").is_fail());
    }
}
