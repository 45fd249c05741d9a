//! The fixed weekly time grid.
//!
//! A school week is five teaching days (Sunday through Thursday) of six
//! periods each. Both enumerations are closed: the search indexes its
//! occupancy grids directly by `(Weekday, Period)`, and class period
//! windows are inclusive ranges over the `Period` order.

use serde::{Deserialize, Serialize};

/// A teaching day of the school week.
///
/// The derived `Ord` follows the natural week order, which is also the
/// fallback trial order of the search when a lesson has no day preference.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum Weekday {
    Sunday,
    Monday,
    Tuesday,
    Wednesday,
    Thursday,
}

impl Weekday {
    /// All teaching days in week order.
    pub const ALL: [Weekday; 5] = [
        Weekday::Sunday,
        Weekday::Monday,
        Weekday::Tuesday,
        Weekday::Wednesday,
        Weekday::Thursday,
    ];

    /// Number of teaching days per week.
    pub const COUNT: usize = Self::ALL.len();

    /// Position of this day in the week (0-based).
    #[inline]
    pub fn index(self) -> usize {
        self as usize
    }
}

/// A teaching period within a day.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum Period {
    First,
    Second,
    Third,
    Fourth,
    Fifth,
    Sixth,
}

impl Period {
    /// All periods in day order.
    pub const ALL: [Period; 6] = [
        Period::First,
        Period::Second,
        Period::Third,
        Period::Fourth,
        Period::Fifth,
        Period::Sixth,
    ];

    /// Number of periods per day.
    pub const COUNT: usize = Self::ALL.len();

    /// Position of this period in the day (0-based).
    #[inline]
    pub fn index(self) -> usize {
        self as usize
    }
}
