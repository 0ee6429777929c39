//! Date rule
//!
//! Dates travel as strings in JSON. Parsed dates are written back in one
//! canonical form, RFC 3339 in UTC with millisecond precision
//! (`2024-05-01T12:30:00.000Z`), which `chrono::DateTime<Utc>` deserializes
//! directly.

use super::{Rule, RuleExt, WithDefault, issue_at, required, type_mismatch};
use crate::issue::{Issue, PathSegment};
use chrono::{DateTime, NaiveDate, NaiveDateTime, SecondsFormat, Utc};
use serde_json::Value;

/// Accepts RFC 3339 timestamps.
#[derive(Debug, Clone, Copy, Default)]
pub struct DateRule {
	coerce: bool,
}

pub fn date() -> DateRule {
	DateRule::default()
}

/// Canonical output form of a date.
pub fn format_date(date: DateTime<Utc>) -> String {
	date.to_rfc3339_opts(SecondsFormat::Millis, true)
}

impl DateRule {
	/// Also accepts plain dates (`2024-05-01`), timestamps without an
	/// offset (taken as UTC) and epoch milliseconds.
	pub fn coerce(mut self) -> Self {
		self.coerce = true;
		self
	}

	/// Defaults an absent value to the time of parsing.
	///
	/// # Examples
	///
	/// ```
	/// use courier_schema::rules::{Rule, date};
	///
	/// let mut issues = Vec::new();
	/// let created = date().coerce().default_now().parse(None, &[], &mut issues);
	///
	/// assert!(created.unwrap().as_str().unwrap().ends_with('Z'));
	/// ```
	pub fn default_now(self) -> WithDefault<Self> {
		self.default_with(|| Value::String(format_date(Utc::now())))
	}

	fn parse_str(&self, value: &str) -> Option<DateTime<Utc>> {
		if let Ok(date) = DateTime::parse_from_rfc3339(value) {
			return Some(date.with_timezone(&Utc));
		}
		if !self.coerce {
			return None;
		}
		if let Ok(date) = NaiveDateTime::parse_from_str(value, "%Y-%m-%dT%H:%M:%S%.f") {
			return Some(date.and_utc());
		}
		NaiveDate::parse_from_str(value, "%Y-%m-%d")
			.ok()
			.and_then(|date| date.and_hms_opt(0, 0, 0))
			.map(|date| date.and_utc())
	}
}

impl Rule for DateRule {
	fn parse(
		&self,
		value: Option<&Value>,
		path: &[PathSegment],
		issues: &mut Vec<Issue>,
	) -> Option<Value> {
		let parsed = match value {
			None => {
				issues.push(required(path, "date"));
				return None;
			}
			Some(Value::String(value)) => self.parse_str(value),
			Some(Value::Number(millis)) if self.coerce => millis
				.as_i64()
				.or_else(|| millis.as_f64().map(|millis| millis.trunc() as i64))
				.and_then(DateTime::from_timestamp_millis),
			Some(other) => {
				issues.push(type_mismatch(path, "date", other));
				return None;
			}
		};

		match parsed {
			Some(date) => Some(Value::String(format_date(date))),
			None => {
				issues.push(issue_at(path, "date", "Invalid date"));
				None
			}
		}
	}
}
