//! Date of birth composed from three independent selects
//!
//! The day, month and year inputs change one at a time. [`DateSelection`]
//! keeps the three parts consistent with each other and only yields a date
//! once all of them are present.

use crate::error::{FormError, FormResult};
use chrono::{Datelike, Months, NaiveDate, Utc};
use std::ops::RangeInclusive;

/// Oldest year offered by the year select.
pub const EARLIEST_YEAR: i32 = 1940;

/// Value/label pairs for the month select.
pub const MONTHS: [(&str, &str); 12] = [
	("01", "January"),
	("02", "February"),
	("03", "March"),
	("04", "April"),
	("05", "May"),
	("06", "June"),
	("07", "July"),
	("08", "August"),
	("09", "September"),
	("10", "October"),
	("11", "November"),
	("12", "December"),
];

// Restricted to 4-digit years so the DD-MM-YYYY form stays unambiguous.
const YEAR_RANGE: RangeInclusive<i32> = 1000..=9999;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DatePart {
	Day,
	Month,
	Year,
}

/// Number of selectable days for a month/year pair.
///
/// Returns 31 while either part is missing so the day select stays populated
/// before the user has picked a year.
///
/// # Examples
///
/// ```
/// use namaskar_forms::date::days_in_month;
///
/// assert_eq!(days_in_month(Some(2), Some(2024)), 29);
/// assert_eq!(days_in_month(Some(2), Some(2023)), 28);
/// assert_eq!(days_in_month(Some(4), Some(2023)), 30);
/// assert_eq!(days_in_month(Some(2), None), 31);
/// ```
pub fn days_in_month(month: Option<u32>, year: Option<i32>) -> u32 {
	let (Some(month), Some(year)) = (month, year) else {
		return 31;
	};
	let Some(first) = NaiveDate::from_ymd_opt(year, month, 1) else {
		return 31;
	};
	first
		.checked_add_months(Months::new(1))
		.map(|next| (next - first).num_days() as u32)
		.unwrap_or(31)
}

/// Years offered by the year select, newest first.
pub fn year_options(current_year: i32) -> Vec<i32> {
	(EARLIEST_YEAR..=current_year).rev().collect()
}

/// [`year_options`] for the current calendar year.
pub fn year_options_now() -> Vec<i32> {
	year_options(Utc::now().year())
}

/// The day/month/year triple behind the date of birth inputs.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct DateSelection {
	day: Option<u32>,
	month: Option<u32>,
	year: Option<i32>,
}

impl DateSelection {
	pub fn new() -> Self {
		Self::default()
	}

	pub fn day(&self) -> Option<u32> {
		self.day
	}

	pub fn month(&self) -> Option<u32> {
		self.month
	}

	pub fn year(&self) -> Option<i32> {
		self.year
	}

	/// Days available for the current month/year.
	pub fn days_in_month(&self) -> u32 {
		days_in_month(self.month, self.year)
	}

	/// Zero-padded values for the day select.
	///
	/// # Examples
	///
	/// ```
	/// use namaskar_forms::DateSelection;
	///
	/// let mut dob = DateSelection::new();
	/// dob.set_month(Some(2)).unwrap();
	/// dob.set_year(Some(2023)).unwrap();
	///
	/// let days = dob.day_options();
	/// assert_eq!(days.first().map(String::as_str), Some("01"));
	/// assert_eq!(days.last().map(String::as_str), Some("28"));
	/// ```
	pub fn day_options(&self) -> Vec<String> {
		(1..=self.days_in_month())
			.map(|day| format!("{:02}", day))
			.collect()
	}

	pub fn set_day(&mut self, day: Option<u32>) -> FormResult<()> {
		if let Some(d) = day
			&& !(1..=self.days_in_month()).contains(&d)
		{
			return Err(FormError::InvalidDate(format!(
				"day {} is not available in the selected month",
				d
			)));
		}
		self.day = day;
		Ok(())
	}

	pub fn set_month(&mut self, month: Option<u32>) -> FormResult<()> {
		if let Some(m) = month
			&& !(1..=12).contains(&m)
		{
			return Err(FormError::InvalidDate(format!("month {} is out of range", m)));
		}
		self.month = month;
		self.drop_overflowing_day();
		Ok(())
	}

	pub fn set_year(&mut self, year: Option<i32>) -> FormResult<()> {
		if let Some(y) = year
			&& !YEAR_RANGE.contains(&y)
		{
			return Err(FormError::InvalidDate(format!(
				"year {} must have four digits",
				y
			)));
		}
		self.year = year;
		self.drop_overflowing_day();
		Ok(())
	}

	/// Apply a raw select value. An empty string clears the part.
	///
	/// # Examples
	///
	/// ```
	/// use namaskar_forms::{DatePart, DateSelection};
	///
	/// let mut dob = DateSelection::new();
	/// dob.select(DatePart::Day, "31").unwrap();
	/// dob.select(DatePart::Year, "2023").unwrap();
	/// dob.select(DatePart::Month, "02").unwrap();
	///
	/// // February 2023 has no 31st; the day must be chosen again.
	/// assert_eq!(dob.day(), None);
	/// assert!(dob.select(DatePart::Month, "thirteen").is_err());
	/// ```
	pub fn select(&mut self, part: DatePart, value: &str) -> FormResult<()> {
		let value = value.trim();
		match part {
			DatePart::Day => self.set_day(parse_part(value, "day")?),
			DatePart::Month => self.set_month(parse_part(value, "month")?),
			DatePart::Year => self.set_year(parse_part(value, "year")?),
		}
	}

	pub fn is_complete(&self) -> bool {
		self.day.is_some() && self.month.is_some() && self.year.is_some()
	}

	/// The date in `DD-MM-YYYY` form, once every part is selected.
	///
	/// # Examples
	///
	/// ```
	/// use namaskar_forms::DateSelection;
	///
	/// let mut dob = DateSelection::new();
	/// dob.set_day(Some(5)).unwrap();
	/// dob.set_month(Some(3)).unwrap();
	/// assert_eq!(dob.compose(), None);
	///
	/// dob.set_year(Some(1998)).unwrap();
	/// assert_eq!(dob.compose().as_deref(), Some("05-03-1998"));
	/// ```
	pub fn compose(&self) -> Option<String> {
		let (day, month, year) = (self.day?, self.month?, self.year?);
		Some(format!("{:02}-{:02}-{:04}", day, month, year))
	}

	pub fn to_naive_date(&self) -> Option<NaiveDate> {
		NaiveDate::from_ymd_opt(self.year?, self.month?, self.day?)
	}

	pub fn clear(&mut self) {
		*self = Self::default();
	}

	// A day that no longer exists is cleared rather than clamped to month-end.
	fn drop_overflowing_day(&mut self) {
		if let Some(day) = self.day
			&& day > self.days_in_month()
		{
			tracing::debug!(
				day,
				month = ?self.month,
				year = ?self.year,
				"clearing day that does not exist in the selected month"
			);
			self.day = None;
		}
	}
}

fn parse_part<T: std::str::FromStr>(value: &str, part: &str) -> FormResult<Option<T>> {
	if value.is_empty() {
		return Ok(None);
	}
	value
		.parse::<T>()
		.map(Some)
		.map_err(|_| FormError::InvalidDate(format!("'{}' is not a valid {}", value, part)))
}
