//! Chore ranking and overdue classification.
//!
//! # Responsibility
//! - Order a chore snapshot for display and flag each chore as overdue.
//!
//! # Invariants
//! - Incomplete chores always precede completed ones.
//! - Completed chores are never overdue.
//! - The sort is stable: equal-ranking chores keep their snapshot order.

use crate::model::chore::Chore;
use chrono::{DateTime, Utc};
use std::cmp::Ordering;

/// Chore paired with its derived overdue flag.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RankedChore {
    pub chore: Chore,
    /// True iff the chore is incomplete and its effective due instant lies
    /// strictly before the instant the ranking was computed for.
    pub overdue: bool,
}

/// Orders `chores` for display at instant `now`.
///
/// The order is built from four tie-break stages:
/// 1. incomplete before completed;
/// 2. among incomplete, overdue before upcoming;
/// 3. within the same overdue group, ascending absolute distance between
///    the effective due instant and `now` — the least-overdue and the
///    soonest-upcoming chores surface first, an attention queue rather
///    than a plain deadline sort;
/// 4. among completed, descending effective due instant, so recently
///    finished work stays easiest to find.
///
/// Today-items rank by their `created_at` (see
/// [`Chore::effective_due_instant`]), which makes them count as overdue as
/// soon as any time has passed since creation.
pub fn rank_chores(chores: Vec<Chore>, now: DateTime<Utc>) -> Vec<RankedChore> {
    let mut entries: Vec<Entry> = chores
        .into_iter()
        .map(|chore| {
            let due = chore.effective_due_instant();
            let overdue = !chore.is_completed && due < now;
            Entry { chore, due, overdue }
        })
        .collect();

    entries.sort_by(|a, b| compare(a, b, now));

    entries
        .into_iter()
        .map(|entry| RankedChore {
            chore: entry.chore,
            overdue: entry.overdue,
        })
        .collect()
}

struct Entry {
    chore: Chore,
    due: DateTime<Utc>,
    overdue: bool,
}

fn compare(a: &Entry, b: &Entry, now: DateTime<Utc>) -> Ordering {
    match (a.chore.is_completed, b.chore.is_completed) {
        (false, true) => return Ordering::Less,
        (true, false) => return Ordering::Greater,
        // Completed pair: most recently due first.
        (true, true) => return b.due.cmp(&a.due),
        (false, false) => {}
    }

    match (a.overdue, b.overdue) {
        (true, false) => Ordering::Less,
        (false, true) => Ordering::Greater,
        _ => {
            let distance_a = (now - a.due).abs();
            let distance_b = (now - b.due).abs();
            distance_a.cmp(&distance_b)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::{compare, Entry};
    use crate::model::chore::Chore;
    use chrono::{Duration, TimeZone, Utc};
    use std::cmp::Ordering;

    fn entry(minutes_from_now: i64, is_completed: bool) -> (Entry, chrono::DateTime<Utc>) {
        let now = Utc.with_ymd_and_hms(2026, 5, 1, 12, 0, 0).unwrap();
        let due = now + Duration::minutes(minutes_from_now);
        let mut chore = Chore::new("user-1", "chore", due);
        chore.is_completed = is_completed;
        let overdue = !is_completed && due < now;
        (Entry { chore, due, overdue }, now)
    }

    #[test]
    fn incomplete_sorts_before_completed() {
        let (open, now) = entry(-10, false);
        let (done, _) = entry(-60, true);
        assert_eq!(compare(&open, &done, now), Ordering::Less);
        assert_eq!(compare(&done, &open, now), Ordering::Greater);
    }

    #[test]
    fn overdue_sorts_before_upcoming() {
        let (late, now) = entry(-10, false);
        let (soon, _) = entry(5, false);
        assert_eq!(compare(&late, &soon, now), Ordering::Less);
    }

    #[test]
    fn same_group_orders_by_distance_to_now() {
        let (barely_late, now) = entry(-5, false);
        let (long_late, _) = entry(-90, false);
        assert_eq!(compare(&barely_late, &long_late, now), Ordering::Less);

        let (soon, _) = entry(15, false);
        let (later, _) = entry(120, false);
        assert_eq!(compare(&soon, &later, now), Ordering::Less);
    }

    #[test]
    fn completed_pair_orders_by_most_recent_due() {
        let (recent, now) = entry(-5, true);
        let (old, _) = entry(-300, true);
        assert_eq!(compare(&recent, &old, now), Ordering::Less);
    }

    #[test]
    fn identical_entries_compare_equal() {
        let (a, now) = entry(-5, false);
        let (b, _) = entry(-5, false);
        assert_eq!(compare(&a, &b, now), Ordering::Equal);
    }
}
