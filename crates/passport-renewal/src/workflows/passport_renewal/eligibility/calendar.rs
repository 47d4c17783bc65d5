//! Calendar-day arithmetic shared by the renewal rules.
//!
//! Everything here works on whole calendar days. Ages and anniversaries are computed by
//! comparing (month, day) pairs rather than counting elapsed days, so leap years never
//! shift a birthday or an expiration.

use chrono::{DateTime, Datelike, Months, NaiveDate, NaiveDateTime, TimeZone, Utc};

/// Values that carry a calendar day in their own calendar/zone.
pub trait CalendarDay {
    fn calendar_day(&self) -> NaiveDate;
}

impl CalendarDay for NaiveDate {
    fn calendar_day(&self) -> NaiveDate {
        *self
    }
}

impl CalendarDay for NaiveDateTime {
    fn calendar_day(&self) -> NaiveDate {
        self.date()
    }
}

impl<Tz: TimeZone> CalendarDay for DateTime<Tz> {
    fn calendar_day(&self) -> NaiveDate {
        self.date_naive()
    }
}

/// Truncate a value to its year/month/day, dropping any time of day.
pub fn normalize_date<T: CalendarDay>(value: &T) -> NaiveDate {
    value.calendar_day()
}

/// Calendar day of `now` as observed in `zone`.
pub fn reference_today<Tz: TimeZone>(now: DateTime<Utc>, zone: &Tz) -> NaiveDate {
    now.with_timezone(zone).date_naive()
}

/// Whole years of age on `on`, for someone born on `date_of_birth`.
pub fn age_on(date_of_birth: NaiveDate, on: NaiveDate) -> i32 {
    let years = on.year() - date_of_birth.year();
    if (on.month(), on.day()) < (date_of_birth.month(), date_of_birth.day()) {
        years - 1
    } else {
        years
    }
}

/// Applicant age on the day a document was issued.
pub fn age_at_issue(date_of_birth: NaiveDate, issue_date: NaiveDate) -> i32 {
    age_on(normalize_date(&date_of_birth), normalize_date(&issue_date))
}

/// Same month and day, `years` later (or earlier when negative).
///
/// Feb 29 lands on Feb 28 in non-leap years. Results saturate at the representable range.
pub fn shift_years(date: NaiveDate, years: i32) -> NaiveDate {
    let months = Months::new(years.unsigned_abs().saturating_mul(12));
    if years >= 0 {
        date.checked_add_months(months).unwrap_or(NaiveDate::MAX)
    } else {
        date.checked_sub_months(months).unwrap_or(NaiveDate::MIN)
    }
}

/// True when `date` falls on or after the day exactly `years` before `today`.
pub fn is_within_years(date: NaiveDate, years: i32, today: NaiveDate) -> bool {
    date >= shift_years(today, -years)
}
