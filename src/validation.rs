//! Pre-search feasibility validation.
//!
//! Static checks run before any search work: every required subject must
//! have at least one teacher, and every (subject, grade) requirement must
//! have at least one grade-eligible teacher. All requirements are checked
//! so the caller sees every problem at once — nothing short-circuits.
//!
//! Passing this gate is necessary but not sufficient: it proves a teacher
//! *could* exist for each requirement in isolation, not that a mutually
//! compatible global assignment exists. That is the search's job.

use std::collections::{HashMap, HashSet};

use serde::{Deserialize, Serialize};

use crate::models::{expand_requirements, SchoolClass, Teacher};

/// Feasibility result: `Ok(())` or every detected conflict.
pub type FeasibilityResult = Result<(), Vec<FeasibilityConflict>>;

/// A pre-search conflict making the input unschedulable.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FeasibilityConflict {
    /// Conflict category.
    pub kind: ConflictKind,
    /// Human-readable description.
    pub message: String,
}

/// Categories of feasibility conflicts.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum ConflictKind {
    /// A required subject has no teacher at all.
    MissingTeacher,
    /// A required subject has teachers, but none eligible for the grade.
    GradeMismatch,
}

impl FeasibilityConflict {
    fn missing_teacher(subject: &str) -> Self {
        Self {
            kind: ConflictKind::MissingTeacher,
            message: format!("No teacher for subject: {subject}"),
        }
    }

    fn grade_mismatch(subject: &str, grade: &str) -> Self {
        Self {
            kind: ConflictKind::GradeMismatch,
            message: format!("No teacher eligible to teach {subject} to {grade}"),
        }
    }
}

/// Checks that every requirement has at least one eligible teacher.
///
/// Runs over the full requirement set and accumulates all conflicts;
/// identical conflicts (e.g. the same missing subject required by several
/// classes) are reported once, in order of first occurrence. Pure
/// function of its inputs — calling it twice yields identical lists.
pub fn check_feasibility(teachers: &[Teacher], classes: &[SchoolClass]) -> FeasibilityResult {
    let mut teachers_by_subject: HashMap<&str, Vec<&Teacher>> = HashMap::new();
    for teacher in teachers {
        teachers_by_subject
            .entry(teacher.subject.as_str())
            .or_default()
            .push(teacher);
    }

    let mut missing: Vec<FeasibilityConflict> = Vec::new();
    let mut mismatched: Vec<FeasibilityConflict> = Vec::new();
    let mut seen: HashSet<String> = HashSet::new();

    for requirement in expand_requirements(classes) {
        match teachers_by_subject.get(requirement.subject.as_str()) {
            None => {
                let conflict = FeasibilityConflict::missing_teacher(&requirement.subject);
                if seen.insert(conflict.message.clone()) {
                    missing.push(conflict);
                }
            }
            Some(candidates) => {
                let eligible = candidates
                    .iter()
                    .any(|t| t.can_teach_grade(&requirement.grade));
                if !eligible {
                    let conflict =
                        FeasibilityConflict::grade_mismatch(&requirement.subject, &requirement.grade);
                    if seen.insert(conflict.message.clone()) {
                        mismatched.push(conflict);
                    }
                }
            }
        }
    }

    // Missing-teacher conflicts first, then grade incompatibilities.
    let mut conflicts = missing;
    conflicts.extend(mismatched);
    if conflicts.is_empty() {
        Ok(())
    } else {
        Err(conflicts)
    }
}
