//! Source of "today" for date-sensitive rules.
//!
//! Renewal rules compare calendar days, and the day that counts is the one in the
//! official reference zone, not the caller's local zone. Everything that needs the
//! current date takes a [`Clock`] so tests and CLI overrides can pin it.

use chrono::{NaiveDate, Utc};
use chrono_tz::Tz;

use crate::config::EligibilityConfig;
use crate::workflows::passport_renewal::eligibility::reference_today;

/// Provides the current calendar day.
pub trait Clock: Send + Sync {
    fn today(&self) -> NaiveDate;
}

/// System clock projected into a fixed reference timezone.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ReferenceClock {
    zone: Tz,
}

impl ReferenceClock {
    pub fn new(zone: Tz) -> Self {
        Self { zone }
    }

    pub fn from_config(config: &EligibilityConfig) -> Self {
        Self::new(config.reference_timezone)
    }

    pub fn zone(&self) -> Tz {
        self.zone
    }
}

impl Clock for ReferenceClock {
    fn today(&self) -> NaiveDate {
        reference_today(Utc::now(), &self.zone)
    }
}

/// Clock that always reports the same day.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FixedClock {
    date: NaiveDate,
}

impl FixedClock {
    pub fn new(date: NaiveDate) -> Self {
        Self { date }
    }
}

impl Clock for FixedClock {
    fn today(&self) -> NaiveDate {
        self.date
    }
}
