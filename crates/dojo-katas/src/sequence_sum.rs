//! Sum of an arithmetic sequence `begin, begin+step, ...`.
//!
//! A positive step sums ascending terms while they stay `<= end`; a
//! negative step sums descending terms while they stay `>= end`. Either
//! way an empty sequence sums to 0. `step` must be nonzero; the caller
//! (the registry) rejects `step == 0` before these functions run.
//!
//! Returns `None` when the sum leaves the i64 range, so extreme inputs
//! surface as a refusal instead of a wrapped total.

/// Loop solution with checked accumulation. A term that steps past the
/// i64 range is necessarily past `end` as well, so that case ends the
/// loop rather than the computation.
pub fn sequence_sum(begin: i64, end: i64, step: i64) -> Option<i64> {
    debug_assert!(step != 0);
    let mut sum = 0i64;
    let mut term = begin;
    if step > 0 {
        while term <= end {
            sum = sum.checked_add(term)?;
            match term.checked_add(step) {
                Some(next) => term = next,
                None => break,
            }
        }
    } else {
        while term >= end {
            sum = sum.checked_add(term)?;
            match term.checked_add(step) {
                Some(next) => term = next,
                None => break,
            }
        }
    }
    Some(sum)
}

/// Closed-form solution: count the terms in i128 (the count itself can
/// exceed i64), pair first with last, and narrow at the end.
pub fn sequence_sum_closed(begin: i64, end: i64, step: i64) -> Option<i64> {
    debug_assert!(step != 0);
    let (begin_wide, end_wide, step_wide) =
        (i128::from(begin), i128::from(end), i128::from(step));
    let count = if step > 0 {
        if begin > end {
            0
        } else {
            (end_wide - begin_wide) / step_wide + 1
        }
    } else if begin < end {
        0
    } else {
        (begin_wide - end_wide) / (-step_wide) + 1
    };
    if count == 0 {
        return Some(0);
    }
    let last = begin_wide + step_wide * (count - 1);
    let doubled = (begin_wide + last).checked_mul(count)?;
    i64::try_from(doubled / 2).ok()
}
