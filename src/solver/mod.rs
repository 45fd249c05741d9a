//! Timetable generation: feasibility gate + backtracking search.
//!
//! [`TimetableSolver`] is the single entry point of the crate. One call
//! owns its occupancy state exclusively and runs to completion on the
//! calling thread; separate calls share nothing, so hosts may run
//! independent solves in parallel if they choose. The solver is a
//! satisfier, not an optimizer: it returns the first complete assignment
//! the deterministic search order reaches, never a ranking of
//! alternatives.
//!
//! # Reference
//! Schaerf (1999), "A Survey of Automated Timetabling"

mod engine;
mod occupancy;
mod ordering;
mod validity;

pub use occupancy::OccupancyTracker;
pub use ordering::{day_order, period_order};
pub use validity::is_valid_assignment;

use std::time::Instant;

use serde::{Deserialize, Serialize};

use crate::models::{
    expand_requirements, total_hours_needed, Period, SchoolClass, Teacher, Timetable, Weekday,
};
use crate::report::Reporter;
use crate::validation::check_feasibility;

use engine::SearchEngine;

/// Search steps between two reporter checkpoints.
const DEFAULT_CHECKPOINT_INTERVAL: u64 = 100;

/// Run statistics of one generation attempt.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct GenerationStats {
    /// Weekly capacity bound: days × periods × classes. Not necessarily
    /// all fillable.
    pub total_slots: usize,
    /// Slots actually committed (= timetable length).
    pub filled_slots: usize,
    /// Search steps performed.
    pub iterations: u64,
    /// Wall-clock duration of the call in milliseconds.
    pub duration_ms: u64,
}

/// Result of one generation attempt.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum GenerationOutcome {
    /// A complete assignment was found.
    Success {
        /// The finished timetable.
        timetable: Timetable,
        /// Run statistics.
        stats: GenerationStats,
    },
    /// No complete assignment exists (or the input failed the
    /// feasibility gate). Partial schedules are discarded, never leaked.
    Failure {
        /// Human-readable summary.
        message: String,
        /// Individual conflict descriptions. Pre-search failures name the
        /// exact missing/ineligible teachers; search exhaustion reports
        /// generic categories, since the exhaustive search does not
        /// localize which combination is unsatisfiable.
        conflicts: Vec<String>,
    },
}

impl GenerationOutcome {
    /// Whether a complete timetable was produced.
    pub fn is_success(&self) -> bool {
        matches!(self, GenerationOutcome::Success { .. })
    }

    /// The timetable, if generation succeeded.
    pub fn timetable(&self) -> Option<&Timetable> {
        match self {
            GenerationOutcome::Success { timetable, .. } => Some(timetable),
            GenerationOutcome::Failure { .. } => None,
        }
    }

    /// The run statistics, if generation succeeded.
    pub fn stats(&self) -> Option<&GenerationStats> {
        match self {
            GenerationOutcome::Success { stats, .. } => Some(stats),
            GenerationOutcome::Failure { .. } => None,
        }
    }
}

/// Weekly timetable generator.
///
/// # Example
///
/// ```
/// use timetabler::models::{ClassSubject, SchoolClass, Teacher};
/// use timetabler::report::NullReporter;
/// use timetabler::solver::TimetableSolver;
///
/// let teachers = vec![Teacher::new("T1", "Math").with_name("Alice")];
/// let classes = vec![SchoolClass::new("C1", "1A", "Grade 1")
///     .with_subject(ClassSubject::new("Math", 2))];
///
/// let outcome = TimetableSolver::new().solve(&teachers, &classes, &mut NullReporter);
/// assert!(outcome.is_success());
/// assert_eq!(outcome.timetable().unwrap().len(), 2);
/// ```
#[derive(Debug, Clone)]
pub struct TimetableSolver {
    checkpoint_interval: u64,
}

impl TimetableSolver {
    /// Creates a solver with the default checkpoint interval.
    pub fn new() -> Self {
        Self {
            checkpoint_interval: DEFAULT_CHECKPOINT_INTERVAL,
        }
    }

    /// Sets how many search steps pass between reporter checkpoints.
    ///
    /// Values below 1 are treated as 1.
    pub fn with_checkpoint_interval(mut self, interval: u64) -> Self {
        self.checkpoint_interval = interval.max(1);
        self
    }

    /// Generates a weekly timetable for the given rosters.
    ///
    /// Validates feasibility first (returning every conflict as data,
    /// without searching), then runs the exhaustive backtracking search.
    /// The reporter receives trace lines and clamped progress estimates
    /// at the checkpoint interval; see [`Reporter`](crate::report::Reporter).
    pub fn solve(
        &self,
        teachers: &[Teacher],
        classes: &[SchoolClass],
        reporter: &mut dyn Reporter,
    ) -> GenerationOutcome {
        let started = Instant::now();

        reporter.log("Starting timetable generation...");
        reporter.log(&format!("Teachers: {}", teachers.len()));
        reporter.log(&format!("Classes: {}", classes.len()));

        let requirements = expand_requirements(classes);
        reporter.log(&format!(
            "Total periods required: {}",
            total_hours_needed(&requirements)
        ));

        if let Err(conflicts) = check_feasibility(teachers, classes) {
            reporter.log("Feasibility check failed");
            return GenerationOutcome::Failure {
                message: "No suitable teachers for some subjects or grades".to_string(),
                conflicts: conflicts.into_iter().map(|c| c.message).collect(),
            };
        }

        reporter.log("Starting backtracking search...");
        let engine = SearchEngine::new(teachers, &requirements, self.checkpoint_interval);
        let mut occupancy = OccupancyTracker::new(teachers, classes);
        let outcome = engine.run(&mut occupancy, reporter);

        let duration_ms = started.elapsed().as_millis() as u64;
        reporter.log(&format!(
            "Search finished in {duration_ms}ms after {} iterations",
            outcome.iterations
        ));

        if outcome.solved {
            let timetable = occupancy.into_timetable();
            reporter.log(&format!(
                "Timetable generated: {} periods scheduled",
                timetable.len()
            ));
            let stats = GenerationStats {
                total_slots: Weekday::COUNT * Period::COUNT * classes.len(),
                filled_slots: timetable.len(),
                iterations: outcome.iterations,
                duration_ms,
            };
            GenerationOutcome::Success { timetable, stats }
        } else {
            reporter.log("No valid assignment found");
            GenerationOutcome::Failure {
                message: "No valid timetable found. Relax the constraints or add teachers."
                    .to_string(),
                conflicts: vec![
                    "Conflicting constraints".to_string(),
                    "Insufficient teachers".to_string(),
                    "Time constraints too strict".to_string(),
                ],
            }
        }
    }
}

impl Default for TimetableSolver {
    fn default() -> Self {
        Self::new()
    }
}

/// Generates a timetable with default solver settings.
pub fn generate_timetable(
    teachers: &[Teacher],
    classes: &[SchoolClass],
    reporter: &mut dyn Reporter,
) -> GenerationOutcome {
    TimetableSolver::new().solve(teachers, classes, reporter)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{ClassConstraints, ClassSubject, ScheduleSlot};
    use crate::report::{MemoryReporter, NullReporter};
    use std::collections::HashSet;

    fn solve(teachers: &[Teacher], classes: &[SchoolClass]) -> GenerationOutcome {
        TimetableSolver::new().solve(teachers, classes, &mut NullReporter)
    }

    /// Asserts the non-overlap, day-load, grade, and window properties
    /// that every returned timetable must satisfy.
    fn assert_schedule_sound(
        slots: &[ScheduleSlot],
        teachers: &[Teacher],
        classes: &[SchoolClass],
    ) {
        let mut teacher_cells = HashSet::new();
        let mut class_cells = HashSet::new();
        for slot in slots {
            assert!(
                teacher_cells.insert((slot.teacher_id.clone(), slot.day, slot.period)),
                "teacher double-booked: {slot:?}"
            );
            assert!(
                class_cells.insert((slot.class_id.clone(), slot.day, slot.period)),
                "class double-booked: {slot:?}"
            );

            let teacher = teachers.iter().find(|t| t.id == slot.teacher_id).unwrap();
            let class = classes.iter().find(|c| c.id == slot.class_id).unwrap();
            assert!(teacher.can_teach_grade(&class.grade));
            assert!(teacher.is_available_on(slot.day));
            assert!(class.constraints.allows_period(slot.period));
        }

        for teacher in teachers {
            for day in Weekday::ALL {
                let load = slots
                    .iter()
                    .filter(|s| s.teacher_id == teacher.id && s.day == day)
                    .count() as u32;
                assert!(load <= teacher.max_hours_per_day);
            }
        }
        for class in classes {
            for day in Weekday::ALL {
                let load = slots
                    .iter()
                    .filter(|s| s.class_id == class.id && s.day == day)
                    .count() as u32;
                assert!(load <= class.constraints.max_hours_per_day);
            }
        }
    }

    #[test]
    fn test_trivial_success() {
        let teachers = vec![Teacher::new("T1", "Math").with_name("Alice")];
        let classes = vec![SchoolClass::new("C1", "1A", "Grade 1")
            .with_subject(ClassSubject::new("Math", 2))];

        let outcome = solve(&teachers, &classes);
        let timetable = outcome.timetable().expect("should succeed");
        assert_eq!(timetable.len(), 2);
        assert!(timetable
            .slots()
            .iter()
            .all(|s| s.class_id == "C1" && s.teacher_id == "T1" && s.subject == "Math"));
    }

    #[test]
    fn test_missing_teacher_fails_before_search() {
        let teachers = vec![Teacher::new("T1", "Math")];
        let classes = vec![SchoolClass::new("C1", "1A", "Grade 1")
            .with_subject(ClassSubject::new("Physics", 2))];

        match solve(&teachers, &classes) {
            GenerationOutcome::Failure { conflicts, .. } => {
                assert!(conflicts.iter().any(|c| c.contains("Physics")));
            }
            GenerationOutcome::Success { .. } => panic!("expected failure"),
        }
    }

    #[test]
    fn test_grade_mismatch_fails_before_search() {
        let teachers =
            vec![Teacher::new("T1", "Art").with_allowed_grades(vec!["Grade 7".to_string()])];
        let classes = vec![SchoolClass::new("C1", "1A", "Grade 1")
            .with_subject(ClassSubject::new("Art", 1))];

        match solve(&teachers, &classes) {
            GenerationOutcome::Failure { conflicts, .. } => {
                assert!(conflicts.iter().any(|c| c.contains("Art")));
                assert!(conflicts.iter().any(|c| c.contains("Grade 1")));
            }
            GenerationOutcome::Success { .. } => panic!("expected failure"),
        }
    }

    #[test]
    fn test_overconstrained_input_exhausts_search() {
        let teachers = vec![Teacher::new("T1", "Math")
            .with_available_days(vec![Weekday::Sunday])
            .with_max_hours_per_day(1)];
        let classes = vec![SchoolClass::new("C1", "1A", "Grade 1")
            .with_subject(ClassSubject::new("Math", 2))
            .with_constraints(ClassConstraints::new(1, Period::First, Period::Sixth))];

        match solve(&teachers, &classes) {
            GenerationOutcome::Failure { conflicts, message } => {
                assert_eq!(conflicts.len(), 3);
                assert!(message.contains("No valid timetable"));
            }
            GenerationOutcome::Success { .. } => panic!("expected exhaustion failure"),
        }
    }

    #[test]
    fn test_multi_class_schedule_is_sound() {
        let teachers = vec![
            Teacher::new("T1", "Math")
                .with_name("Alice")
                .with_max_hours_per_day(4),
            Teacher::new("T2", "Art")
                .with_name("Bob")
                .with_preferred_periods(vec![Period::Fifth, Period::Sixth]),
            Teacher::new("T3", "Math").with_name("Carol"),
        ];
        let classes = vec![
            SchoolClass::new("C1", "1A", "Grade 1")
                .with_subject(ClassSubject::new("Math", 4))
                .with_subject(ClassSubject::new("Art", 2))
                .with_constraints(ClassConstraints::new(3, Period::First, Period::Fifth)),
            SchoolClass::new("C2", "2B", "Grade 2")
                .with_subject(
                    ClassSubject::new("Math", 3).with_preferred_days(vec![Weekday::Monday]),
                )
                .with_subject(ClassSubject::new("Art", 2)),
        ];

        let outcome = solve(&teachers, &classes);
        let timetable = outcome.timetable().expect("roster should be schedulable");
        assert_schedule_sound(timetable.slots(), &teachers, &classes);

        // Quota exactness per (class, subject).
        for class in &classes {
            for subject in &class.subjects {
                assert_eq!(
                    timetable.hours_for(&class.id, &subject.subject),
                    subject.hours_per_week as usize
                );
            }
        }

        let stats = outcome.stats().unwrap();
        assert_eq!(
            stats.total_slots,
            Weekday::COUNT * Period::COUNT * classes.len()
        );
        assert_eq!(stats.filled_slots, timetable.len());
        assert!(stats.iterations > 0);
    }

    #[test]
    fn test_same_input_yields_same_schedule() {
        let teachers = vec![
            Teacher::new("T1", "Math"),
            Teacher::new("T2", "Math"),
            Teacher::new("T3", "Art"),
        ];
        let classes = vec![
            SchoolClass::new("C1", "1A", "Grade 1")
                .with_subject(ClassSubject::new("Math", 3))
                .with_subject(ClassSubject::new("Art", 1)),
            SchoolClass::new("C2", "2B", "Grade 2").with_subject(ClassSubject::new("Math", 2)),
        ];

        let first = solve(&teachers, &classes);
        let second = solve(&teachers, &classes);
        assert_eq!(first.timetable(), second.timetable());
    }

    #[test]
    fn test_progress_is_monotonic_and_clamped() {
        let teachers = vec![Teacher::new("T1", "Math"), Teacher::new("T2", "Art")];
        let classes = vec![
            SchoolClass::new("C1", "1A", "Grade 1")
                .with_subject(ClassSubject::new("Math", 4))
                .with_subject(ClassSubject::new("Art", 3)),
            SchoolClass::new("C2", "2B", "Grade 2")
                .with_subject(ClassSubject::new("Math", 4))
                .with_subject(ClassSubject::new("Art", 3)),
        ];

        let mut reporter = MemoryReporter::new();
        let outcome = TimetableSolver::new()
            .with_checkpoint_interval(1)
            .solve(&teachers, &classes, &mut reporter);
        assert!(outcome.is_success());

        assert!(!reporter.percents.is_empty());
        for pair in reporter.percents.windows(2) {
            assert!(pair[1] >= pair[0], "progress decreased: {pair:?}");
        }
        assert!(reporter.percents.iter().all(|&p| p <= 95.0));
        assert!(reporter
            .lines
            .iter()
            .any(|l| l.contains("Processing requirement")));
    }

    #[test]
    fn test_trace_announces_inputs() {
        let teachers = vec![Teacher::new("T1", "Math")];
        let classes = vec![SchoolClass::new("C1", "1A", "Grade 1")
            .with_subject(ClassSubject::new("Math", 2))];

        let mut reporter = MemoryReporter::new();
        generate_timetable(&teachers, &classes, &mut reporter);

        assert!(reporter.lines.iter().any(|l| l == "Teachers: 1"));
        assert!(reporter.lines.iter().any(|l| l == "Classes: 1"));
        assert!(reporter
            .lines
            .iter()
            .any(|l| l == "Total periods required: 2"));
    }

    #[test]
    fn test_outcome_serializes() {
        let teachers = vec![Teacher::new("T1", "Math").with_name("Alice")];
        let classes = vec![SchoolClass::new("C1", "1A", "Grade 1")
            .with_subject(ClassSubject::new("Math", 1))];

        let outcome = solve(&teachers, &classes);
        let json = serde_json::to_string(&outcome).unwrap();
        let parsed: GenerationOutcome = serde_json::from_str(&json).unwrap();
        assert_eq!(parsed, outcome);
    }
}
