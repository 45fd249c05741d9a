//! Mutable search state: occupancy grids and the in-progress timetable.
//!
//! The tracker holds a boolean `(day, period)` grid per teacher and per
//! class, a scheduled-hours counter per `(class, subject)` requirement,
//! and the list of committed slots. `commit`/`undo` are the only
//! mutations and keep all three views consistent with each other — the
//! grids are never an independent source of truth.
//!
//! `commit` does not re-validate: the validity predicate is checked by
//! the engine before every commit, keeping the policy in one place.

use std::collections::HashMap;

use crate::models::{
    LessonRequirement, Period, RequirementKey, ScheduleSlot, SchoolClass, Teacher, Timetable,
    Weekday,
};

/// Boolean occupancy surface over the weekly grid.
#[derive(Debug, Clone, Default)]
struct OccupancyGrid {
    cells: [[bool; Period::COUNT]; Weekday::COUNT],
}

impl OccupancyGrid {
    #[inline]
    fn is_free(&self, day: Weekday, period: Period) -> bool {
        !self.cells[day.index()][period.index()]
    }

    #[inline]
    fn set(&mut self, day: Weekday, period: Period, occupied: bool) {
        self.cells[day.index()][period.index()] = occupied;
    }

    /// Occupied periods on one day.
    fn day_load(&self, day: Weekday) -> u32 {
        self.cells[day.index()].iter().filter(|&&busy| busy).count() as u32
    }
}

/// The single mutable state of one search invocation.
///
/// Created empty at search start, mutated by commit/undo during search,
/// and either converted into the result timetable or discarded. Never
/// shared across invocations.
#[derive(Debug, Clone)]
pub struct OccupancyTracker {
    teacher_busy: HashMap<String, OccupancyGrid>,
    class_busy: HashMap<String, OccupancyGrid>,
    hours_scheduled: HashMap<RequirementKey, u32>,
    slots: Vec<ScheduleSlot>,
}

impl OccupancyTracker {
    /// Creates an empty tracker with a grid per teacher and per class.
    pub fn new(teachers: &[Teacher], classes: &[SchoolClass]) -> Self {
        Self {
            teacher_busy: teachers
                .iter()
                .map(|t| (t.id.clone(), OccupancyGrid::default()))
                .collect(),
            class_busy: classes
                .iter()
                .map(|c| (c.id.clone(), OccupancyGrid::default()))
                .collect(),
            hours_scheduled: HashMap::new(),
            slots: Vec::new(),
        }
    }

    /// Whether the teacher is unoccupied at the given cell.
    pub fn is_teacher_free(&self, teacher_id: &str, day: Weekday, period: Period) -> bool {
        self.teacher_busy[teacher_id].is_free(day, period)
    }

    /// Whether the class is unoccupied at the given cell.
    pub fn is_class_free(&self, class_id: &str, day: Weekday, period: Period) -> bool {
        self.class_busy[class_id].is_free(day, period)
    }

    /// Periods the teacher is already scheduled for on one day.
    pub fn teacher_load(&self, teacher_id: &str, day: Weekday) -> u32 {
        self.teacher_busy[teacher_id].day_load(day)
    }

    /// Periods the class is already scheduled for on one day.
    pub fn class_load(&self, class_id: &str, day: Weekday) -> u32 {
        self.class_busy[class_id].day_load(day)
    }

    /// Periods committed so far toward one `(class, subject)` requirement.
    pub fn hours_scheduled(&self, requirement: &LessonRequirement) -> u32 {
        self.hours_scheduled
            .get(&requirement.key())
            .copied()
            .unwrap_or(0)
    }

    /// Committed slots in insertion order.
    pub fn slots(&self) -> &[ScheduleSlot] {
        &self.slots
    }

    /// Commits one period of the requirement to `(teacher, day, period)`.
    ///
    /// The caller must have established validity beforehand; both grid
    /// cells are required to be free.
    pub fn commit(
        &mut self,
        requirement: &LessonRequirement,
        teacher: &Teacher,
        day: Weekday,
        period: Period,
    ) {
        debug_assert!(self.is_teacher_free(&teacher.id, day, period));
        debug_assert!(self.is_class_free(&requirement.class_id, day, period));

        self.slots.push(ScheduleSlot {
            day,
            period,
            class_id: requirement.class_id.clone(),
            class_name: requirement.class_name.clone(),
            subject: requirement.subject.clone(),
            teacher_id: teacher.id.clone(),
            teacher_name: teacher.name.clone(),
        });

        if let Some(grid) = self.teacher_busy.get_mut(&teacher.id) {
            grid.set(day, period, true);
        }
        if let Some(grid) = self.class_busy.get_mut(&requirement.class_id) {
            grid.set(day, period, true);
        }
        *self.hours_scheduled.entry(requirement.key()).or_insert(0) += 1;
    }

    /// Exactly reverses the matching [`commit`](Self::commit).
    ///
    /// Removes the one slot identified by class + teacher + day + period,
    /// clears both grid cells, and decrements the hours counter.
    ///
    /// # Panics
    /// Panics if no matching slot was ever committed — that is a call-
    /// discipline bug in the search, not a recoverable condition.
    pub fn undo(
        &mut self,
        requirement: &LessonRequirement,
        teacher: &Teacher,
        day: Weekday,
        period: Period,
    ) {
        let index = self
            .slots
            .iter()
            .position(|s| {
                s.day == day
                    && s.period == period
                    && s.class_id == requirement.class_id
                    && s.teacher_id == teacher.id
            })
            .unwrap_or_else(|| {
                panic!(
                    "undo of never-committed slot: class {} teacher {} {:?} {:?}",
                    requirement.class_id, teacher.id, day, period
                )
            });
        self.slots.remove(index);

        if let Some(grid) = self.teacher_busy.get_mut(&teacher.id) {
            grid.set(day, period, false);
        }
        if let Some(grid) = self.class_busy.get_mut(&requirement.class_id) {
            grid.set(day, period, false);
        }

        let count = self
            .hours_scheduled
            .get_mut(&requirement.key())
            .unwrap_or_else(|| {
                panic!(
                    "undo with no scheduled hours for {}/{}",
                    requirement.class_id, requirement.subject
                )
            });
        *count -= 1;
    }

    /// Consumes the tracker, yielding the committed timetable.
    pub fn into_timetable(self) -> Timetable {
        Timetable::from_slots(self.slots)
    }
}
