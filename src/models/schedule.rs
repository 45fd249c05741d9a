//! Timetable (solution) model.
//!
//! A finished timetable is a sequence of committed slots, each binding one
//! period of one class's subject to one teacher at a concrete
//! `(day, period)` cell. The presentation layer consumes the slot sequence
//! as its only contract with this core.

use serde::{Deserialize, Serialize};

use super::{Period, Weekday};

/// One committed atomic assignment.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ScheduleSlot {
    /// Day of the week.
    pub day: Weekday,
    /// Period within the day.
    pub period: Period,
    /// Assigned class identifier.
    pub class_id: String,
    /// Assigned class name (denormalized for display).
    pub class_name: String,
    /// Subject taught in this slot.
    pub subject: String,
    /// Assigned teacher identifier.
    pub teacher_id: String,
    /// Assigned teacher name (denormalized for display).
    pub teacher_name: String,
}

/// A complete weekly timetable: committed slots in insertion order.
///
/// Uniqueness invariant (upheld by the search, checkable here): no two
/// slots share `(teacher_id, day, period)` and no two slots share
/// `(class_id, day, period)`.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Timetable {
    slots: Vec<ScheduleSlot>,
}

impl Timetable {
    /// Creates an empty timetable.
    pub fn new() -> Self {
        Self::default()
    }

    /// Wraps an existing slot sequence.
    pub fn from_slots(slots: Vec<ScheduleSlot>) -> Self {
        Self { slots }
    }

    /// All slots in insertion order.
    pub fn slots(&self) -> &[ScheduleSlot] {
        &self.slots
    }

    /// Number of committed slots.
    pub fn len(&self) -> usize {
        self.slots.len()
    }

    /// Whether the timetable has no slots.
    pub fn is_empty(&self) -> bool {
        self.slots.is_empty()
    }

    /// Slots belonging to one class.
    pub fn slots_for_class<'a>(
        &'a self,
        class_id: &'a str,
    ) -> impl Iterator<Item = &'a ScheduleSlot> {
        self.slots.iter().filter(move |s| s.class_id == class_id)
    }

    /// Slots taught by one teacher.
    pub fn slots_for_teacher<'a>(
        &'a self,
        teacher_id: &'a str,
    ) -> impl Iterator<Item = &'a ScheduleSlot> {
        self.slots
            .iter()
            .filter(move |s| s.teacher_id == teacher_id)
    }

    /// Periods scheduled for a `(class, subject)` pair.
    pub fn hours_for(&self, class_id: &str, subject: &str) -> usize {
        self.slots
            .iter()
            .filter(|s| s.class_id == class_id && s.subject == subject)
            .count()
    }
}

impl IntoIterator for Timetable {
    type Item = ScheduleSlot;
    type IntoIter = std::vec::IntoIter<ScheduleSlot>;

    fn into_iter(self) -> Self::IntoIter {
        self.slots.into_iter()
    }
}
