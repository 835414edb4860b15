//! Time bucketing for the activity histograms.
//!
//! A timestamp falls into four buckets: hour of day (`"HH:00"`), weekday name,
//! calendar date (`"DD.MM.YYYY"`) and month name. Weekday and month names come
//! from the [`Locale`] tables.

use chrono::{Datelike, NaiveDateTime, Timelike};

use crate::config::Locale;

/// The buckets of one timestamp.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TimeBuckets {
    /// Hour of day, `0..24`
    pub hour: u32,
    /// Weekday, `0` = Monday
    pub weekday: usize,
    /// Month, `0` = January
    pub month: usize,
    /// Calendar date as `DD.MM.YYYY`
    pub date: String,
}

impl TimeBuckets {
    /// Computes the buckets of `timestamp`.
    ///
    /// # Example
    ///
    /// ```rust
    /// use chatstats::buckets::{TimeBuckets, hour_label};
    /// use chatstats::config::Locale;
    /// use chrono::NaiveDate;
    ///
    /// // 1 January 2023 was a Sunday
    /// let ts = NaiveDate::from_ymd_opt(2023, 1, 1).unwrap().and_hms_opt(9, 5, 0).unwrap();
    /// let buckets = TimeBuckets::of(ts);
    ///
    /// assert_eq!(buckets.date, "01.01.2023");
    /// assert_eq!(buckets.weekday_name(Locale::English), "Sunday");
    /// assert_eq!(buckets.month_name(Locale::Turkish), "Ocak");
    /// assert_eq!(hour_label(buckets.hour), "09:00");
    /// ```
    pub fn of(timestamp: NaiveDateTime) -> Self {
        Self {
            hour: timestamp.hour(),
            weekday: timestamp.weekday().num_days_from_monday() as usize,
            month: timestamp.month0() as usize,
            date: timestamp.format("%d.%m.%Y").to_string(),
        }
    }

    /// Weekday name in `locale`.
    pub fn weekday_name(&self, locale: Locale) -> &'static str {
        locale.weekday_names()[self.weekday]
    }

    /// Month name in `locale`.
    pub fn month_name(&self, locale: Locale) -> &'static str {
        locale.month_names()[self.month]
    }
}

/// Label of an hour bucket: `"00:00"` through `"23:00"`.
pub fn hour_label(hour: u32) -> String {
    format!("{hour:02}:00")
}

/// All 24 hour labels in order.
pub fn hour_labels() -> impl Iterator<Item = String> {
    (0..24).map(hour_label)
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;

    fn ts(y: i32, mo: u32, d: u32, h: u32, mi: u32) -> NaiveDateTime {
        NaiveDate::from_ymd_opt(y, mo, d)
            .unwrap()
            .and_hms_opt(h, mi, 0)
            .unwrap()
    }

    #[test]
    fn test_weekday_starts_on_monday() {
        // 2 January 2023 was a Monday
        let monday = TimeBuckets::of(ts(2023, 1, 2, 12, 0));
        assert_eq!(monday.weekday, 0);
        assert_eq!(monday.weekday_name(Locale::Turkish), "Pazartesi");

        let sunday = TimeBuckets::of(ts(2023, 1, 8, 12, 0));
        assert_eq!(sunday.weekday, 6);
        assert_eq!(sunday.weekday_name(Locale::Turkish), "Pazar");
    }

    #[test]
    fn test_month_index() {
        let b = TimeBuckets::of(ts(2024, 12, 31, 23, 59));
        assert_eq!(b.month, 11);
        assert_eq!(b.month_name(Locale::Turkish), "Aralık");
        assert_eq!(b.month_name(Locale::English), "December");
        assert_eq!(b.hour, 23);
        assert_eq!(b.date, "31.12.2024");
    }

    #[test]
    fn test_hour_labels() {
        let labels: Vec<String> = hour_labels().collect();
        assert_eq!(labels.len(), 24);
        assert_eq!(labels[0], "00:00");
        assert_eq!(labels[9], "09:00");
        assert_eq!(labels[23], "23:00");
    }

    #[test]
    fn test_date_is_zero_padded() {
        let b = TimeBuckets::of(ts(2023, 3, 5, 7, 0));
        assert_eq!(b.date, "05.03.2023");
    }
}
