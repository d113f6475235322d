//! Deterministic daily exercise rotation
//!
//! The same calendar day always yields the same selection, so a user who
//! opens the app twice on one day sees the same workout.

use chrono::NaiveDate;

/// Hash the ISO date string into a shuffle seed
fn day_seed(date: NaiveDate) -> u32 {
    let key = date.format("%Y-%m-%d").to_string();
    let mut hash: i32 = 0;
    for byte in key.bytes() {
        hash = hash
            .wrapping_shl(5)
            .wrapping_sub(hash)
            .wrapping_add(i32::from(byte));
    }
    hash.unsigned_abs()
}

/// Fisher-Yates shuffle driven by a linear congruential generator
pub(super) fn shuffle_with_seed<T: Clone>(items: &[T], seed: u32) -> Vec<T> {
    let mut out = items.to_vec();
    let mut state = seed;
    for i in (1..out.len()).rev() {
        state = state.wrapping_mul(1_103_515_245).wrapping_add(12_345) & 0x7fff_ffff;
        let j = state as usize % (i + 1);
        out.swap(i, j);
    }
    out
}

/// Pick the first `count` items of the date-seeded shuffle
pub(super) fn rotate_for_day<T: Clone>(items: &[T], date: NaiveDate, count: usize) -> Vec<T> {
    let mut shuffled = shuffle_with_seed(items, day_seed(date));
    shuffled.truncate(count);
    shuffled
}

#[cfg(test)]
mod tests {
    use super::*;

    fn day(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    #[test]
    fn same_day_same_selection() {
        let items: Vec<u32> = (0..14).collect();
        let a = rotate_for_day(&items, day(2026, 3, 14), 6);
        let b = rotate_for_day(&items, day(2026, 3, 14), 6);
        assert_eq!(a, b);
        assert_eq!(a.len(), 6);
    }

    #[test]
    fn shuffle_is_a_permutation() {
        let items: Vec<u32> = (0..14).collect();
        let mut shuffled = shuffle_with_seed(&items, 987_654_321);
        shuffled.sort_unstable();
        assert_eq!(shuffled, items);
    }

    #[test]
    fn count_larger_than_catalog_returns_everything() {
        let items = vec!["a", "b", "c"];
        assert_eq!(rotate_for_day(&items, day(2026, 1, 1), 10).len(), 3);
    }

    #[test]
    fn seed_differs_between_days() {
        assert_ne!(day_seed(day(2026, 3, 14)), day_seed(day(2026, 3, 15)));
    }
}
