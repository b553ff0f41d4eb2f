//! Calendar strategies for date labels.
//!
//! Every parsed timestamp is turned into a [`DateLabel`]: a display string,
//! a weekday index and a month number. Two strategies implement
//! [`Calendar`]:
//!
//! - [`JalaliCalendar`] (feature `jalali`): solar-Hijri dates such as
//!   `1399/08/14`, Persian weekday names.
//! - [`GregorianCalendar`]: the fallback, `2020/11/04`, English names.
//!
//! Both number weekdays Saturday-first (`0 = Saturday .. 6 = Friday`), so
//! weekday histograms built with either strategy are directly comparable.
//! The strategy is chosen once at startup (see
//! [`Capabilities`](crate::capabilities::Capabilities)) and injected.

use chrono::{Datelike, NaiveDate};

/// Display-ready date with its histogram keys.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct DateLabel {
    /// Formatted `YYYY/MM/DD` string in the active calendar
    pub text: String,
    /// Weekday, `0 = Saturday .. 6 = Friday`
    pub weekday: usize,
    /// Month in the active calendar, `1..=12`
    pub month: usize,
}

/// A date-labelling strategy.
pub trait Calendar: Send + Sync {
    /// Human-readable strategy name.
    fn name(&self) -> &'static str;

    /// Labels a Gregorian date.
    fn label(&self, date: NaiveDate) -> DateLabel;

    /// Weekday names indexed Saturday-first.
    fn weekday_names(&self) -> &'static [&'static str; 7];
}

/// Saturday-first weekday index of a date.
///
/// Shared by every strategy: both calendars agree on the day of week, only
/// the numbering origin needs shifting from chrono's Monday-first scheme.
pub fn saturday_index(date: NaiveDate) -> usize {
    (date.weekday().num_days_from_monday() as usize + 2) % 7
}

/// Gregorian fallback.
#[derive(Debug, Clone, Copy, Default)]
pub struct GregorianCalendar;

const EN_WEEKDAYS: [&str; 7] = ["Sat", "Sun", "Mon", "Tue", "Wed", "Thu", "Fri"];

impl Calendar for GregorianCalendar {
    fn name(&self) -> &'static str {
        "Gregorian"
    }

    fn label(&self, date: NaiveDate) -> DateLabel {
        DateLabel {
            text: date.format("%Y/%m/%d").to_string(),
            weekday: saturday_index(date),
            month: date.month() as usize,
        }
    }

    fn weekday_names(&self) -> &'static [&'static str; 7] {
        &EN_WEEKDAYS
    }
}

#[cfg(feature = "jalali")]
pub use jalali::{JalaliCalendar, JalaliDate};

#[cfg(feature = "jalali")]
mod jalali {
    use chrono::{Datelike, NaiveDate};

    use super::{Calendar, DateLabel, saturday_index};

    const FA_WEEKDAYS: [&str; 7] = [
        "شنبه",
        "یکشنبه",
        "دوشنبه",
        "سه‌شنبه",
        "چهارشنبه",
        "پنج‌شنبه",
        "جمعه",
    ];

    // Days before the first of each Gregorian month in a common year.
    const DAYS_BEFORE_MONTH: [i64; 12] = [0, 31, 59, 90, 120, 151, 181, 212, 243, 273, 304, 334];

    /// A solar-Hijri calendar date.
    #[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
    pub struct JalaliDate {
        pub year: i64,
        pub month: u32,
        pub day: u32,
    }

    impl JalaliDate {
        /// Converts a Gregorian date using the 33-year arithmetic cycle.
        pub fn from_gregorian(date: NaiveDate) -> Self {
            let gy = i64::from(date.year());
            let gm = date.month() as usize;
            let gd = i64::from(date.day());

            let gy2 = if gm > 2 { gy + 1 } else { gy };
            let mut days = 355_666 + 365 * gy + (gy2 + 3).div_euclid(4)
                - (gy2 + 99).div_euclid(100)
                + (gy2 + 399).div_euclid(400)
                + gd
                + DAYS_BEFORE_MONTH[gm - 1];

            let mut year = -1595 + 33 * days.div_euclid(12_053);
            days = days.rem_euclid(12_053);
            year += 4 * (days / 1461);
            days %= 1461;
            if days > 365 {
                year += (days - 1) / 365;
                days = (days - 1) % 365;
            }

            let (month, day) = if days < 186 {
                (1 + days / 31, 1 + days % 31)
            } else {
                (7 + (days - 186) / 30, 1 + (days - 186) % 30)
            };

            JalaliDate {
                year,
                month: month as u32,
                day: day as u32,
            }
        }
    }

    impl std::fmt::Display for JalaliDate {
        fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
            write!(f, "{:04}/{:02}/{:02}", self.year, self.month, self.day)
        }
    }

    /// Solar-Hijri strategy.
    #[derive(Debug, Clone, Copy, Default)]
    pub struct JalaliCalendar;

    impl Calendar for JalaliCalendar {
        fn name(&self) -> &'static str {
            "Jalali"
        }

        fn label(&self, date: NaiveDate) -> DateLabel {
            let jalali = JalaliDate::from_gregorian(date);
            DateLabel {
                text: jalali.to_string(),
                weekday: saturday_index(date),
                month: jalali.month as usize,
            }
        }

        fn weekday_names(&self) -> &'static [&'static str; 7] {
            &FA_WEEKDAYS
        }
    }
}
