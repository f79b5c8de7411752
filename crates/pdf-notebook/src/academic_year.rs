//! Academic year label

use crate::constants::ACADEMIC_YEAR_LAST_MONTH;
use chrono::{DateTime, Datelike, FixedOffset, TimeZone, Utc};

/// Academic year containing `now`, formatted as `{start}-{end}`.
///
/// The year turns over on July 1st in the timestamp's own time zone.
pub fn academic_year<Tz: TimeZone>(now: &DateTime<Tz>) -> String {
    let year = now.year();
    if now.month() > ACADEMIC_YEAR_LAST_MONTH {
        format!("{}-{}", year, year + 1)
    } else {
        format!("{}-{}", year - 1, year)
    }
}

/// Academic year for an instant as seen from the given UTC offset
pub fn academic_year_in(now: DateTime<Utc>, offset: FixedOffset) -> String {
    academic_year(&now.with_timezone(&offset))
}
