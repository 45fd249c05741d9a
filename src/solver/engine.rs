//! The exhaustive backtracking search.
//!
//! Depth-first search over (requirement → teacher → day → period) with
//! commit/undo against the occupancy tracker. Runs as an explicit stack
//! of choice-point frames rather than deep recursion, so very large
//! rosters cannot exhaust the call stack.
//!
//! Each frame places *one* period of its requirement: committing a cell
//! pushes a deeper frame for the same requirement until its quota is
//! reached, at which point the requirement is skipped and the next one
//! begins. Exhausting a frame's candidates pops it, undoes the parent's
//! trial cell, and resumes the parent's candidate scan — the backtrack
//! step. Requirements are visited strictly in input order and teachers in
//! input order within a subject, so the first solution found is a
//! deterministic function of the roster.
//!
//! Termination: the candidate space per frame is finite and every resume
//! consumes an alternative, so the search always terminates; the worst
//! case is exponential in the number of required periods, kept tolerable
//! by aggressive constraint pruning.
//!
//! # Reference
//! Russell & Norvig (2020), "Artificial Intelligence", Ch. 6.3
//! (Backtracking Search for CSPs); Schaerf (1999), "A Survey of Automated
//! Timetabling"

use crate::models::{LessonRequirement, Period, Teacher, Weekday};
use crate::report::Reporter;

use super::occupancy::OccupancyTracker;
use super::ordering::{day_order, period_order};
use super::validity::is_valid_assignment;

/// Progress is never reported above this until the result is known.
const PROGRESS_CEILING: f64 = 95.0;

/// What the search did, success or not.
#[derive(Debug, Clone, Copy)]
pub(crate) struct SearchOutcome {
    /// Whether every requirement reached its quota.
    pub solved: bool,
    /// Search steps performed.
    pub iterations: u64,
}

/// Precomputed trial orders for one requirement.
struct RequirementPlan {
    /// Indices into the teacher roster: right subject, eligible grade,
    /// input order preserved.
    eligible_teachers: Vec<usize>,
    /// Weekday trial order (preferred days first).
    days: Vec<Weekday>,
}

/// One choice point: a candidate cursor over
/// (eligible teacher × ordered day × ordered period).
struct Frame {
    requirement: usize,
    teacher_cursor: usize,
    day_cursor: usize,
    period_cursor: usize,
    /// The trial cell this frame currently holds committed, if any.
    committed: Option<(usize, Weekday, Period)>,
}

impl Frame {
    fn new(requirement: usize) -> Self {
        Self {
            requirement,
            teacher_cursor: 0,
            day_cursor: 0,
            period_cursor: 0,
            committed: None,
        }
    }
}

/// One search invocation over a fixed roster and requirement list.
pub(crate) struct SearchEngine<'a> {
    teachers: &'a [Teacher],
    requirements: &'a [LessonRequirement],
    plans: Vec<RequirementPlan>,
    period_orders: Vec<Vec<Period>>,
    checkpoint_interval: u64,
}

impl<'a> SearchEngine<'a> {
    /// Prepares trial orders: eligible teachers and day order per
    /// requirement, period order per teacher.
    pub fn new(
        teachers: &'a [Teacher],
        requirements: &'a [LessonRequirement],
        checkpoint_interval: u64,
    ) -> Self {
        let period_orders = teachers
            .iter()
            .map(|t| period_order(&t.preferred_periods))
            .collect();
        let plans = requirements
            .iter()
            .map(|requirement| RequirementPlan {
                eligible_teachers: teachers
                    .iter()
                    .enumerate()
                    .filter(|(_, t)| {
                        t.subject == requirement.subject && t.can_teach_grade(&requirement.grade)
                    })
                    .map(|(i, _)| i)
                    .collect(),
                days: day_order(&requirement.preferred_days),
            })
            .collect();

        Self {
            teachers,
            requirements,
            plans,
            period_orders,
            checkpoint_interval: checkpoint_interval.max(1),
        }
    }

    /// Runs the search to completion, mutating `occupancy` along the way.
    ///
    /// On success the tracker holds the complete timetable; on failure
    /// every trial commit has been undone and the tracker is empty again.
    pub fn run(
        &self,
        occupancy: &mut OccupancyTracker,
        reporter: &mut dyn Reporter,
    ) -> SearchOutcome {
        let total = self.requirements.len();
        let mut stack: Vec<Frame> = Vec::new();
        let mut iterations: u64 = 0;
        let mut best_progress: f64 = 0.0;
        let mut next_requirement = 0usize;

        loop {
            // Skip requirements whose quota is already met.
            while next_requirement < total
                && occupancy.hours_scheduled(&self.requirements[next_requirement])
                    >= self.requirements[next_requirement].hours_needed
            {
                next_requirement += 1;
            }
            if next_requirement == total {
                return SearchOutcome {
                    solved: true,
                    iterations,
                };
            }
            stack.push(Frame::new(next_requirement));

            // Scan for the next valid candidate of the top frame, popping
            // exhausted frames (and undoing their parents' trials) on the way.
            loop {
                iterations += 1;
                if iterations % self.checkpoint_interval == 0 {
                    let current = stack.last().map_or(0, |f| f.requirement);
                    let estimate = (current as f64 / total as f64) * 100.0;
                    best_progress = best_progress.max(estimate.min(PROGRESS_CEILING));
                    reporter.progress(best_progress);
                    reporter.log(&format!(
                        "Processing requirement {} of {total}",
                        current + 1
                    ));
                }

                let top = stack.len() - 1;
                match self.next_valid_candidate(&mut stack[top], occupancy) {
                    Some((teacher_idx, day, period)) => {
                        let frame = &mut stack[top];
                        occupancy.commit(
                            &self.requirements[frame.requirement],
                            &self.teachers[teacher_idx],
                            day,
                            period,
                        );
                        frame.committed = Some((teacher_idx, day, period));
                        // Re-enter the same requirement; the skip loop
                        // advances it once its quota is reached.
                        next_requirement = frame.requirement;
                        break;
                    }
                    None => {
                        stack.pop();
                        let Some(parent) = stack.last_mut() else {
                            // Root exhausted: no assignment exists.
                            return SearchOutcome {
                                solved: false,
                                iterations,
                            };
                        };
                        let (teacher_idx, day, period) = parent
                            .committed
                            .take()
                            .expect("backtracked into a frame holding no trial commit");
                        occupancy.undo(
                            &self.requirements[parent.requirement],
                            &self.teachers[teacher_idx],
                            day,
                            period,
                        );
                    }
                }
            }
        }
    }

    /// Advances the frame's cursor to its next candidate cell passing the
    /// validity predicate. `None` once the frame is exhausted.
    fn next_valid_candidate(
        &self,
        frame: &mut Frame,
        occupancy: &OccupancyTracker,
    ) -> Option<(usize, Weekday, Period)> {
        let requirement = &self.requirements[frame.requirement];
        let plan = &self.plans[frame.requirement];

        while frame.teacher_cursor < plan.eligible_teachers.len() {
            let teacher_idx = plan.eligible_teachers[frame.teacher_cursor];
            let teacher = &self.teachers[teacher_idx];
            let periods = &self.period_orders[teacher_idx];

            while frame.day_cursor < plan.days.len() {
                let day = plan.days[frame.day_cursor];
                while frame.period_cursor < periods.len() {
                    let period = periods[frame.period_cursor];
                    frame.period_cursor += 1;
                    if is_valid_assignment(occupancy, requirement, teacher, day, period) {
                        return Some((teacher_idx, day, period));
                    }
                }
                frame.period_cursor = 0;
                frame.day_cursor += 1;
            }
            frame.day_cursor = 0;
            frame.teacher_cursor += 1;
        }
        None
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{
        expand_requirements, ClassConstraints, ClassSubject, SchoolClass, Teacher,
    };
    use crate::report::NullReporter;

    fn run(teachers: &[Teacher], classes: &[SchoolClass]) -> (SearchOutcome, OccupancyTracker) {
        let requirements = expand_requirements(classes);
        let engine = SearchEngine::new(teachers, &requirements, 100);
        let mut tracker = OccupancyTracker::new(teachers, classes);
        let outcome = engine.run(&mut tracker, &mut NullReporter);
        (outcome, tracker)
    }

    #[test]
    fn test_fills_quota_of_one_requirement() {
        let teachers = vec![Teacher::new("T1", "Math").with_name("Alice")];
        let classes = vec![SchoolClass::new("C1", "1A", "Grade 1")
            .with_subject(ClassSubject::new("Math", 3))];

        let (outcome, tracker) = run(&teachers, &classes);
        assert!(outcome.solved);
        assert!(outcome.iterations > 0);
        assert_eq!(tracker.slots().len(), 3);
        assert!(tracker.slots().iter().all(|s| s.subject == "Math"));
    }

    #[test]
    fn test_backtracks_out_of_a_dead_end() {
        // One Math teacher, Sundays only. C2 may only use the first
        // period, so the search must first try C1 at Sunday/First, hit
        // the dead end at C2, undo, and shift C1 later in the day.
        let teachers =
            vec![Teacher::new("T1", "Math").with_available_days(vec![Weekday::Sunday])];
        let classes = vec![
            SchoolClass::new("C1", "1A", "Grade 1").with_subject(ClassSubject::new("Math", 1)),
            SchoolClass::new("C2", "2B", "Grade 2")
                .with_subject(ClassSubject::new("Math", 1))
                .with_constraints(ClassConstraints::new(6, Period::First, Period::First)),
        ];

        let (outcome, tracker) = run(&teachers, &classes);
        assert!(outcome.solved);

        let slots = tracker.slots();
        let c1 = slots.iter().find(|s| s.class_id == "C1").unwrap();
        let c2 = slots.iter().find(|s| s.class_id == "C2").unwrap();
        assert_eq!(c2.period, Period::First);
        assert_eq!(c1.period, Period::Second);
        assert!(slots.iter().all(|s| s.day == Weekday::Sunday));
    }

    #[test]
    fn test_exhaustion_leaves_tracker_empty() {
        // Two periods needed, but the teacher can give at most one: a
        // single working day capped at one period.
        let teachers = vec![Teacher::new("T1", "Math")
            .with_available_days(vec![Weekday::Sunday])
            .with_max_hours_per_day(1)];
        let classes = vec![SchoolClass::new("C1", "1A", "Grade 1")
            .with_subject(ClassSubject::new("Math", 2))];

        let (outcome, tracker) = run(&teachers, &classes);
        assert!(!outcome.solved);
        assert!(tracker.slots().is_empty());
    }

    #[test]
    fn test_preferred_slots_tried_first() {
        let teachers =
            vec![Teacher::new("T1", "Math").with_preferred_periods(vec![Period::Fourth])];
        let classes = vec![SchoolClass::new("C1", "1A", "Grade 1").with_subject(
            ClassSubject::new("Math", 1).with_preferred_days(vec![Weekday::Wednesday]),
        )];

        let (outcome, tracker) = run(&teachers, &classes);
        assert!(outcome.solved);
        assert_eq!(tracker.slots()[0].day, Weekday::Wednesday);
        assert_eq!(tracker.slots()[0].period, Period::Fourth);
    }

    #[test]
    fn test_zero_hour_requirement_is_skipped() {
        let teachers = vec![Teacher::new("T1", "Math")];
        let classes = vec![SchoolClass::new("C1", "1A", "Grade 1")
            .with_subject(ClassSubject::new("Math", 0))
            .with_subject(ClassSubject::new("Math", 1))];

        let (outcome, tracker) = run(&teachers, &classes);
        assert!(outcome.solved);
        assert_eq!(tracker.slots().len(), 1);
    }
}
