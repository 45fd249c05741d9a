//! School class model.
//!
//! A class is a fixed group of students identified by a grade label. It
//! carries the list of subjects it must receive each week and class-level
//! constraints: a daily period cap and an inclusive allowed period window.

use serde::{Deserialize, Serialize};

use super::{Period, Weekday};

/// One subject a class must receive, with its weekly quota.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ClassSubject {
    /// Subject name.
    pub subject: String,
    /// Periods of this subject required per week.
    pub hours_per_week: u32,
    /// Weekdays tried first when placing this subject. Empty = no preference.
    pub preferred_days: Vec<Weekday>,
}

impl ClassSubject {
    /// Creates a subject requirement with no day preference.
    pub fn new(subject: impl Into<String>, hours_per_week: u32) -> Self {
        Self {
            subject: subject.into(),
            hours_per_week,
            preferred_days: Vec::new(),
        }
    }

    /// Sets the preferred weekdays.
    pub fn with_preferred_days(mut self, days: Vec<Weekday>) -> Self {
        self.preferred_days = days;
        self
    }
}

/// Class-level scheduling constraints.
///
/// The period window `[first_period, last_period]` is inclusive: every
/// lesson for the class must fall inside it.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ClassConstraints {
    /// Maximum periods the class may be scheduled on any one day.
    pub max_hours_per_day: u32,
    /// Earliest allowed period (inclusive).
    pub first_period: Period,
    /// Latest allowed period (inclusive).
    pub last_period: Period,
}

impl ClassConstraints {
    /// Creates constraints with the given daily cap and period window.
    ///
    /// # Panics
    /// Panics if `first_period` comes after `last_period` — an inverted
    /// window is a caller data-integrity bug, not a schedulable input.
    pub fn new(max_hours_per_day: u32, first_period: Period, last_period: Period) -> Self {
        assert!(
            first_period <= last_period,
            "inverted period window: {first_period:?} after {last_period:?}"
        );
        Self {
            max_hours_per_day,
            first_period,
            last_period,
        }
    }

    /// Whether a period falls inside the allowed window.
    #[inline]
    pub fn allows_period(&self, period: Period) -> bool {
        period >= self.first_period && period <= self.last_period
    }
}

impl Default for ClassConstraints {
    /// Full-day window with a daily cap of [`Period::COUNT`].
    fn default() -> Self {
        Self {
            max_hours_per_day: Period::COUNT as u32,
            first_period: Period::First,
            last_period: Period::Sixth,
        }
    }
}

/// A class to be scheduled: grade, weekly subject quotas, constraints.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SchoolClass {
    /// Unique class identifier.
    pub id: String,
    /// Human-readable name (e.g., "1A").
    pub name: String,
    /// Grade label, matched against teacher grade eligibility.
    pub grade: String,
    /// Number of students. Roster metadata; not consulted by the search.
    pub student_count: u32,
    /// Weekly subject requirements.
    pub subjects: Vec<ClassSubject>,
    /// Class-level scheduling constraints.
    pub constraints: ClassConstraints,
}

impl SchoolClass {
    /// Creates a class with default (unrestrictive) constraints.
    pub fn new(id: impl Into<String>, name: impl Into<String>, grade: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            name: name.into(),
            grade: grade.into(),
            student_count: 0,
            subjects: Vec::new(),
            constraints: ClassConstraints::default(),
        }
    }

    /// Sets the student count.
    pub fn with_student_count(mut self, count: u32) -> Self {
        self.student_count = count;
        self
    }

    /// Adds a weekly subject requirement.
    pub fn with_subject(mut self, subject: ClassSubject) -> Self {
        self.subjects.push(subject);
        self
    }

    /// Sets the class constraints.
    pub fn with_constraints(mut self, constraints: ClassConstraints) -> Self {
        self.constraints = constraints;
        self
    }

    /// Total periods required per week across all subjects.
    pub fn total_hours_per_week(&self) -> u32 {
        self.subjects.iter().map(|s| s.hours_per_week).sum()
    }
}
