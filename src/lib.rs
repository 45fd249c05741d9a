//! Weekly school timetable generation.
//!
//! Assigns recurring weekly lessons — a class, a subject, a required
//! number of periods — to concrete `(day, period, teacher)` slots such
//! that no teacher or class is double-booked, daily load limits hold,
//! and day/period preferences and grade-eligibility rules are honored
//! wherever a solution permits.
//!
//! # Modules
//!
//! - **`models`**: Domain types — `Teacher`, `SchoolClass`,
//!   `ClassSubject`, `LessonRequirement`, `ScheduleSlot`, `Timetable`,
//!   and the fixed `Weekday`/`Period` grid
//! - **`validation`**: Pre-search feasibility gate (missing teachers,
//!   grade incompatibilities), reported as a complete conflict list
//! - **`solver`**: Occupancy tracking, trial-order heuristics, and the
//!   exhaustive backtracking search
//! - **`report`**: Host callback surface for trace lines and progress
//!
//! # Architecture
//!
//! The crate is the algorithmic core of a timetabling system. Entity
//! entry forms, persistence, and grid/spreadsheet rendering are external
//! collaborators: callers hand in teacher and class rosters and receive
//! either a complete slot assignment with statistics or a structured
//! failure with diagnosed conflicts. The solver is a satisfier — it
//! returns the first feasible schedule its deterministic search order
//! finds, and does not rank alternatives.
//!
//! # Example
//!
//! ```
//! use timetabler::models::{ClassSubject, SchoolClass, Teacher, Weekday};
//! use timetabler::report::MemoryReporter;
//! use timetabler::solver::generate_timetable;
//!
//! let teachers = vec![
//!     Teacher::new("T1", "Math").with_name("Alice"),
//!     Teacher::new("T2", "Art")
//!         .with_name("Bob")
//!         .with_available_days(vec![Weekday::Sunday, Weekday::Tuesday]),
//! ];
//! let classes = vec![SchoolClass::new("C1", "1A", "Grade 1")
//!     .with_subject(ClassSubject::new("Math", 3))
//!     .with_subject(ClassSubject::new("Art", 1))];
//!
//! let mut reporter = MemoryReporter::new();
//! let outcome = generate_timetable(&teachers, &classes, &mut reporter);
//!
//! assert!(outcome.is_success());
//! assert_eq!(outcome.timetable().unwrap().len(), 4);
//! ```
//!
//! # References
//!
//! - Schaerf (1999), "A Survey of Automated Timetabling"
//! - Russell & Norvig (2020), "Artificial Intelligence: A Modern
//!   Approach", Ch. 6 (Constraint Satisfaction Problems)

pub mod models;
pub mod report;
pub mod solver;
pub mod validation;
