use std::collections::HashSet;

use chrono::{DateTime, Datelike, Duration, NaiveDate, Utc, Weekday};

/// US federal holidays for one or more calendar years, with observed-date
/// shifting (Saturday holidays observed Friday, Sunday ones Monday).
/// Built once at process start and passed in; never module-level state.
#[derive(Debug, Clone)]
pub struct HolidayCalendar {
    holidays: HashSet<NaiveDate>,
}

impl HolidayCalendar {
    pub fn for_year(year: i32) -> Self {
        Self::for_years(year, year)
    }

    pub fn for_years(start_year: i32, end_year: i32) -> Self {
        let (start, end) = if start_year <= end_year {
            (start_year, end_year)
        } else {
            (end_year, start_year)
        };

        let mut calendar = Self {
            holidays: HashSet::new(),
        };
        for year in start..=end {
            calendar.add_federal_holidays(year);
        }
        calendar
    }

    fn add_federal_holidays(&mut self, year: i32) {
        // New Year's Day
        self.add_observed(NaiveDate::from_ymd_opt(year, 1, 1).unwrap());

        // Martin Luther King Jr. Day (3rd Monday in January)
        self.holidays
            .insert(Self::nth_weekday(year, 1, Weekday::Mon, 3));

        // Presidents' Day (3rd Monday in February)
        self.holidays
            .insert(Self::nth_weekday(year, 2, Weekday::Mon, 3));

        // Memorial Day (last Monday in May)
        self.holidays
            .insert(Self::last_weekday(year, 5, Weekday::Mon));

        // Independence Day
        self.add_observed(NaiveDate::from_ymd_opt(year, 7, 4).unwrap());

        // Labor Day (1st Monday in September)
        self.holidays
            .insert(Self::nth_weekday(year, 9, Weekday::Mon, 1));

        // Columbus Day (2nd Monday in October)
        self.holidays
            .insert(Self::nth_weekday(year, 10, Weekday::Mon, 2));

        // Veterans Day
        self.add_observed(NaiveDate::from_ymd_opt(year, 11, 11).unwrap());

        // Thanksgiving (4th Thursday in November)
        self.holidays
            .insert(Self::nth_weekday(year, 11, Weekday::Thu, 4));

        // Christmas
        self.add_observed(NaiveDate::from_ymd_opt(year, 12, 25).unwrap());
    }

    fn add_observed(&mut self, date: NaiveDate) {
        let observed = match date.weekday() {
            Weekday::Sat => date - Duration::days(1),
            Weekday::Sun => date + Duration::days(1),
            _ => date,
        };
        self.holidays.insert(observed);
    }

    fn nth_weekday(year: i32, month: u32, weekday: Weekday, n: u32) -> NaiveDate {
        let mut date = NaiveDate::from_ymd_opt(year, month, 1).unwrap();
        let mut count = 0;

        while date.month() == month {
            if date.weekday() == weekday {
                count += 1;
                if count == n {
                    return date;
                }
            }
            date += Duration::days(1);
        }
        unreachable!("every month has a {}th {}", n, weekday)
    }

    fn last_weekday(year: i32, month: u32, weekday: Weekday) -> NaiveDate {
        let mut date = if month == 12 {
            NaiveDate::from_ymd_opt(year + 1, 1, 1).unwrap()
        } else {
            NaiveDate::from_ymd_opt(year, month + 1, 1).unwrap()
        };
        date -= Duration::days(1);

        while date.weekday() != weekday {
            date -= Duration::days(1);
        }
        date
    }

    pub fn is_holiday(&self, date: NaiveDate) -> bool {
        self.holidays.contains(&date)
    }

    /// Count holidays strictly inside the open interval (from, to). A
    /// reversed or empty interval contains nothing.
    pub fn holidays_between(&self, from: NaiveDate, to: NaiveDate) -> i64 {
        self.holidays
            .iter()
            .filter(|holiday| from < **holiday && **holiday < to)
            .count() as i64
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Accounting {
    /// Signed difference from the expected duration; negative means ahead
    /// of schedule.
    pub delta: i64,
    pub actual_days: i64,
}

/// Computes holiday-adjusted business-day spans at calendar-date
/// granularity.
#[derive(Debug, Clone)]
pub struct BusinessDayAccountant {
    calendar: HolidayCalendar,
}

impl BusinessDayAccountant {
    pub fn new(calendar: HolidayCalendar) -> Self {
        Self { calendar }
    }

    pub fn assess(
        &self,
        expected_days: i64,
        from_date: DateTime<Utc>,
        to_date: DateTime<Utc>,
    ) -> Accounting {
        let from = from_date.date_naive();
        let to = to_date.date_naive();
        let actual_days = work_days_between(from, to) - self.calendar.holidays_between(from, to);

        Accounting {
            delta: actual_days - expected_days,
            actual_days,
        }
    }
}

/// Signed count of weekdays `d` with `from < d <= to`. Equal dates give
/// zero; a reversed range gives the negated count, never a panic.
pub fn work_days_between(from: NaiveDate, to: NaiveDate) -> i64 {
    if to < from {
        return -work_days_between(to, from);
    }

    let mut count = 0;
    let mut current = from + Duration::days(1);
    while current <= to {
        if !matches!(current.weekday(), Weekday::Sat | Weekday::Sun) {
            count += 1;
        }
        current += Duration::days(1);
    }
    count
}
