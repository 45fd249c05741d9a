//! Timetabling domain models.
//!
//! Value types describing the inputs and output of weekly lesson
//! assignment. All of them are immutable during search: the solver reads
//! rosters, derives [`LessonRequirement`]s, and produces a [`Timetable`]
//! of [`ScheduleSlot`]s without touching the inputs.
//!
//! | Type | Role |
//! |------|------|
//! | [`Teacher`] | Who can teach what, when, and to which grades |
//! | [`SchoolClass`] / [`ClassSubject`] | What each class needs per week |
//! | [`LessonRequirement`] | Flattened (class, subject) unit of search work |
//! | [`ScheduleSlot`] / [`Timetable`] | Committed assignments (the output) |
//! | [`Weekday`] / [`Period`] | The fixed weekly time grid |

mod requirement;
mod schedule;
mod school_class;
mod teacher;
mod time;

pub use requirement::{expand_requirements, total_hours_needed, LessonRequirement, RequirementKey};
pub use schedule::{ScheduleSlot, Timetable};
pub use school_class::{ClassConstraints, ClassSubject, SchoolClass};
pub use teacher::Teacher;
pub use time::{Period, Weekday};
