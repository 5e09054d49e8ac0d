//! Date precision tags.

use crate::DatePrecisionFormats;
use std::fmt;
use std::str::FromStr;

/// How much of a date is known, as carried by `dateOfBirthPrecision` and
/// `deceasedDatePrecision`.
///
/// The server writes the precision either by name (`"Day"`) or by its numeric code (`3`). Both are
/// accepted; the name is written. [`PrecisionValue`] keeps the form that was read.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum DatePrecision {
    Full,
    Year,
    Month,
    Day,
    Hour,
    Minute,
    Second,
}

impl DatePrecision {
    const ALL: [DatePrecision; 7] = [
        DatePrecision::Full,
        DatePrecision::Year,
        DatePrecision::Month,
        DatePrecision::Day,
        DatePrecision::Hour,
        DatePrecision::Minute,
        DatePrecision::Second,
    ];

    pub fn name(self) -> &'static str {
        match self {
            DatePrecision::Full => "Full",
            DatePrecision::Year => "Year",
            DatePrecision::Month => "Month",
            DatePrecision::Day => "Day",
            DatePrecision::Hour => "Hour",
            DatePrecision::Minute => "Minute",
            DatePrecision::Second => "Second",
        }
    }

    /// Numeric wire code (`Full` = 0 through `Second` = 6).
    pub fn code(self) -> u8 {
        self as u8
    }

    pub fn from_code(code: u64) -> Option<Self> {
        usize::try_from(code)
            .ok()
            .and_then(|index| Self::ALL.get(index).copied())
    }

    /// The matching [`DatePrecisionFormats`] pattern. `Full` has no pattern of its own.
    pub fn format_pattern(self) -> Option<&'static str> {
        match self {
            DatePrecision::Full => None,
            DatePrecision::Year => Some(DatePrecisionFormats::DATE_FORMAT_YEAR),
            DatePrecision::Month => Some(DatePrecisionFormats::DATE_FORMAT_MONTH),
            DatePrecision::Day => Some(DatePrecisionFormats::DATE_FORMAT_DAY),
            DatePrecision::Hour => Some(DatePrecisionFormats::DATE_FORMAT_HOUR),
            DatePrecision::Minute => Some(DatePrecisionFormats::DATE_FORMAT_MINUTE),
            DatePrecision::Second => Some(DatePrecisionFormats::DATE_FORMAT_SECOND),
        }
    }
}

impl fmt::Display for DatePrecision {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for DatePrecision {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .into_iter()
            .find(|p| p.name() == s)
            .ok_or_else(|| format!("unknown date precision: {s}"))
    }
}

/// A [`DatePrecision`] in the form it was written: by name or by numeric code.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum PrecisionValue {
    Named(DatePrecision),
    Coded(DatePrecision),
}

impl PrecisionValue {
    pub fn precision(self) -> DatePrecision {
        match self {
            PrecisionValue::Named(precision) | PrecisionValue::Coded(precision) => precision,
        }
    }
}

impl From<DatePrecision> for PrecisionValue {
    fn from(precision: DatePrecision) -> Self {
        PrecisionValue::Named(precision)
    }
}

#[cfg(feature = "serde")]
impl serde::Serialize for DatePrecision {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: serde::Serializer,
    {
        serializer.serialize_str(self.name())
    }
}

#[cfg(feature = "serde")]
impl<'de> serde::Deserialize<'de> for DatePrecision {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: serde::Deserializer<'de>,
    {
        <PrecisionValue as serde::Deserialize>::deserialize(deserializer)
            .map(PrecisionValue::precision)
    }
}

#[cfg(feature = "serde")]
impl serde::Serialize for PrecisionValue {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: serde::Serializer,
    {
        match self {
            PrecisionValue::Named(precision) => serializer.serialize_str(precision.name()),
            PrecisionValue::Coded(precision) => serializer.serialize_u8(precision.code()),
        }
    }
}

#[cfg(feature = "serde")]
impl<'de> serde::Deserialize<'de> for PrecisionValue {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: serde::Deserializer<'de>,
    {
        struct PrecisionVisitor;

        impl serde::de::Visitor<'_> for PrecisionVisitor {
            type Value = PrecisionValue;

            fn expecting(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                f.write_str("a date precision name or code 0-6")
            }

            fn visit_str<E: serde::de::Error>(self, v: &str) -> Result<Self::Value, E> {
                v.parse().map(PrecisionValue::Named).map_err(E::custom)
            }

            fn visit_u64<E: serde::de::Error>(self, v: u64) -> Result<Self::Value, E> {
                DatePrecision::from_code(v)
                    .map(PrecisionValue::Coded)
                    .ok_or_else(|| E::custom(format!("date precision code out of range: {v}")))
            }

            fn visit_i64<E: serde::de::Error>(self, v: i64) -> Result<Self::Value, E> {
                u64::try_from(v)
                    .map_err(|_| E::custom(format!("date precision code out of range: {v}")))
                    .and_then(|code| self.visit_u64(code))
            }
        }

        deserializer.deserialize_any(PrecisionVisitor)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn codes_follow_declaration_order() {
        assert_eq!(DatePrecision::Full.code(), 0);
        assert_eq!(DatePrecision::Second.code(), 6);
        assert_eq!(DatePrecision::from_code(3), Some(DatePrecision::Day));
        assert_eq!(DatePrecision::from_code(7), None);
    }

    #[test]
    fn patterns_come_from_the_format_table() {
        assert_eq!(DatePrecision::Full.format_pattern(), None);
        assert_eq!(DatePrecision::Day.format_pattern(), Some("YYYY-MM-DD"));
        assert_eq!(
            DatePrecision::Second.format_pattern(),
            DatePrecisionFormats::TABLE.get("DateFormatSecond")
        );
    }

    #[cfg(feature = "serde")]
    #[test]
    fn reads_names_and_codes_writes_names() {
        let by_name: DatePrecision = serde_json::from_str("\"Month\"").expect("name");
        let by_code: DatePrecision = serde_json::from_str("2").expect("code");
        assert_eq!(by_name, DatePrecision::Month);
        assert_eq!(by_code, DatePrecision::Month);
        assert_eq!(
            serde_json::to_string(&by_code).expect("serialise"),
            "\"Month\""
        );
        assert!(serde_json::from_str::<DatePrecision>("\"Fortnight\"").is_err());
        assert!(serde_json::from_str::<DatePrecision>("-1").is_err());
    }

    #[cfg(feature = "serde")]
    #[test]
    fn precision_value_writes_the_form_it_read() {
        let coded: PrecisionValue = serde_json::from_str("3").expect("code");
        assert_eq!(coded, PrecisionValue::Coded(DatePrecision::Day));
        assert_eq!(serde_json::to_string(&coded).expect("serialise"), "3");

        let named: PrecisionValue = serde_json::from_str("\"Day\"").expect("name");
        assert_eq!(named, PrecisionValue::Named(DatePrecision::Day));
        assert_eq!(serde_json::to_string(&named).expect("serialise"), "\"Day\"");

        assert_eq!(coded.precision(), named.precision());
        assert_eq!(
            PrecisionValue::from(DatePrecision::Year),
            PrecisionValue::Named(DatePrecision::Year)
        );
    }
}
