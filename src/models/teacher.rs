//! Teacher model.
//!
//! A teacher teaches exactly one subject and carries the availability and
//! preference constraints the search must honor: which weekdays they can
//! work, a daily period cap, an ordered period preference, and an optional
//! grade-eligibility whitelist. Teachers are read-only inputs to the
//! search and are never mutated.

use serde::{Deserialize, Serialize};

use super::{Period, Weekday};

/// A teacher available for weekly lesson assignment.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Teacher {
    /// Unique teacher identifier.
    pub id: String,
    /// Human-readable name.
    pub name: String,
    /// The single subject this teacher teaches.
    pub subject: String,
    /// Maximum periods this teacher may be scheduled on any one day.
    pub max_hours_per_day: u32,
    /// Weekdays this teacher can work.
    pub available_days: Vec<Weekday>,
    /// Periods tried first when placing this teacher. Empty = no preference.
    pub preferred_periods: Vec<Period>,
    /// Grades this teacher may teach. Empty = eligible for all grades.
    pub allowed_grades: Vec<String>,
}

impl Teacher {
    /// Creates a teacher with the given ID and subject.
    ///
    /// Defaults: available every weekday, no period preference, no grade
    /// restriction, daily cap of [`Period::COUNT`] (a full day).
    pub fn new(id: impl Into<String>, subject: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            name: String::new(),
            subject: subject.into(),
            max_hours_per_day: Period::COUNT as u32,
            available_days: Weekday::ALL.to_vec(),
            preferred_periods: Vec::new(),
            allowed_grades: Vec::new(),
        }
    }

    /// Sets the teacher name.
    pub fn with_name(mut self, name: impl Into<String>) -> Self {
        self.name = name.into();
        self
    }

    /// Sets the daily period cap.
    pub fn with_max_hours_per_day(mut self, max: u32) -> Self {
        self.max_hours_per_day = max;
        self
    }

    /// Sets the working weekdays.
    pub fn with_available_days(mut self, days: Vec<Weekday>) -> Self {
        self.available_days = days;
        self
    }

    /// Sets the preferred periods (tried first by the search).
    pub fn with_preferred_periods(mut self, periods: Vec<Period>) -> Self {
        self.preferred_periods = periods;
        self
    }

    /// Restricts this teacher to the given grades.
    pub fn with_allowed_grades(mut self, grades: Vec<String>) -> Self {
        self.allowed_grades = grades;
        self
    }

    /// Whether this teacher works on the given day.
    #[inline]
    pub fn is_available_on(&self, day: Weekday) -> bool {
        self.available_days.contains(&day)
    }

    /// Whether this teacher may teach the given grade.
    ///
    /// An empty `allowed_grades` list means no restriction.
    #[inline]
    pub fn can_teach_grade(&self, grade: &str) -> bool {
        self.allowed_grades.is_empty() || self.allowed_grades.iter().any(|g| g == grade)
    }
}
