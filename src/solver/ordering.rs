//! Trial-order heuristics.
//!
//! Preferred days and periods are tried before the rest, with the natural
//! order preserved inside each part (a stable partition). These orderings
//! only bias which feasible solution the search finds first — they never
//! exclude a slot, so they are heuristics, not constraints.

use crate::models::{Period, Weekday};

/// Weekday trial order for a requirement: preferred days first.
///
/// An empty preference yields the natural week order unchanged.
pub fn day_order(preferred_days: &[Weekday]) -> Vec<Weekday> {
    stable_partition(&Weekday::ALL, |day| preferred_days.contains(day))
}

/// Period trial order for a teacher: preferred periods first.
///
/// An empty preference yields the natural day order unchanged.
pub fn period_order(preferred_periods: &[Period]) -> Vec<Period> {
    stable_partition(&Period::ALL, |period| preferred_periods.contains(period))
}

fn stable_partition<T: Copy>(items: &[T], mut is_preferred: impl FnMut(&T) -> bool) -> Vec<T> {
    let mut ordered = Vec::with_capacity(items.len());
    ordered.extend(items.iter().filter(|i| is_preferred(i)));
    ordered.extend(items.iter().filter(|i| !is_preferred(i)));
    ordered
}
