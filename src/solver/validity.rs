//! The assignment validity predicate.
//!
//! One pure function over current tracker state deciding whether a trial
//! `(teacher, day, period)` cell may receive one period of a requirement.
//! The engine re-evaluates it fresh on every trial — occupancy changes
//! between trials, so nothing here may be cached across the search tree.

use crate::models::{LessonRequirement, Period, Teacher, Weekday};

use super::occupancy::OccupancyTracker;

/// Whether one period of `requirement` may be committed at the trial cell.
///
/// All of the following must hold:
/// 1. the teacher works on `day`;
/// 2. the teacher may teach the requirement's grade;
/// 3. the teacher is free at `(day, period)`;
/// 4. the class is free at `(day, period)`;
/// 5. `period` lies inside the class's allowed window;
/// 6. the teacher's load on `day` is below their daily cap;
/// 7. the class's load on `day` is below its daily cap.
pub fn is_valid_assignment(
    occupancy: &OccupancyTracker,
    requirement: &LessonRequirement,
    teacher: &Teacher,
    day: Weekday,
    period: Period,
) -> bool {
    teacher.is_available_on(day)
        && teacher.can_teach_grade(&requirement.grade)
        && occupancy.is_teacher_free(&teacher.id, day, period)
        && occupancy.is_class_free(&requirement.class_id, day, period)
        && requirement.constraints.allows_period(period)
        && occupancy.teacher_load(&teacher.id, day) < teacher.max_hours_per_day
        && occupancy.class_load(&requirement.class_id, day) < requirement.constraints.max_hours_per_day
}
