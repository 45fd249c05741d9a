//! Lesson requirements: the unit of work the search schedules.
//!
//! Each `(class, subject)` pair flattens into one [`LessonRequirement`]
//! stating how many atomic periods must be placed, together with the
//! owning class's grade and constraints. The search walks requirements in
//! input order (classes outer, subjects inner), which makes the first
//! solution found reproducible for a given roster.

use serde::{Deserialize, Serialize};

use super::{ClassConstraints, SchoolClass, Weekday};

/// Counter key for periods scheduled so far: `(class_id, subject)`.
pub type RequirementKey = (String, String);

/// One class's weekly need for one subject.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LessonRequirement {
    /// Owning class identifier.
    pub class_id: String,
    /// Owning class name (denormalized for slot output).
    pub class_name: String,
    /// Owning class grade, matched against teacher eligibility.
    pub grade: String,
    /// Subject to schedule.
    pub subject: String,
    /// Atomic periods required per week.
    pub hours_needed: u32,
    /// Weekdays tried first. Empty = natural week order.
    pub preferred_days: Vec<Weekday>,
    /// Owning class's constraints (daily cap, period window).
    pub constraints: ClassConstraints,
}

impl LessonRequirement {
    /// Counter key identifying this requirement's scheduled-hours tally.
    pub fn key(&self) -> RequirementKey {
        (self.class_id.clone(), self.subject.clone())
    }
}

/// Flattens class rosters into the ordered requirement list the search
/// works over. Input order is preserved: classes outer, subjects inner.
pub fn expand_requirements(classes: &[SchoolClass]) -> Vec<LessonRequirement> {
    let mut requirements = Vec::new();
    for class in classes {
        for subject in &class.subjects {
            requirements.push(LessonRequirement {
                class_id: class.id.clone(),
                class_name: class.name.clone(),
                grade: class.grade.clone(),
                subject: subject.subject.clone(),
                hours_needed: subject.hours_per_week,
                preferred_days: subject.preferred_days.clone(),
                constraints: class.constraints.clone(),
            });
        }
    }
    requirements
}

/// Total periods required per week across all requirements.
pub fn total_hours_needed(requirements: &[LessonRequirement]) -> u32 {
    requirements.iter().map(|r| r.hours_needed).sum()
}
