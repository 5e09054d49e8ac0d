use crate::{KeyTable, ValueKind};

/// Display patterns for each date precision.
///
/// The patterns use the `YYYY-MM-DD HH:mm:ss` token convention of the formatting library on the
/// consuming side; they are passed through as-is and never interpreted here.
#[derive(Clone, Copy, Debug)]
pub struct DatePrecisionFormats;

impl DatePrecisionFormats {
    pub const DATE_FORMAT_YEAR: &'static str = "YYYY";
    pub const DATE_FORMAT_MONTH: &'static str = "YYYY-MM";
    pub const DATE_FORMAT_DAY: &'static str = "YYYY-MM-DD";
    pub const DATE_FORMAT_HOUR: &'static str = "YYYY-MM-DD HH";
    pub const DATE_FORMAT_MINUTE: &'static str = "YYYY-MM-DD HH:mm";
    pub const DATE_FORMAT_SECOND: &'static str = "YYYY-MM-DD HH:mm:ss";

    pub const TABLE: KeyTable = KeyTable::new(
        "DatePrecisionFormats",
        ValueKind::Pattern,
        &[
            ("DateFormatYear", Self::DATE_FORMAT_YEAR),
            ("DateFormatMonth", Self::DATE_FORMAT_MONTH),
            ("DateFormatDay", Self::DATE_FORMAT_DAY),
            ("DateFormatHour", Self::DATE_FORMAT_HOUR),
            ("DateFormatMinute", Self::DATE_FORMAT_MINUTE),
            ("DateFormatSecond", Self::DATE_FORMAT_SECOND),
        ],
    );
}
