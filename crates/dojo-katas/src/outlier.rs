//! Parity outlier.
//!
//! Given integers where exactly one element has a parity different from
//! all the others, find that element. Zero is even; negative odd numbers
//! are odd. When the input has no unique outlier (all one parity, or a
//! tie), both solutions return `None` rather than indexing into an empty
//! partition.

/// Partition solution: split evens from odds, the singleton side wins.
pub fn find_outlier(values: &[i64]) -> Option<i64> {
    let (evens, odds): (Vec<i64>, Vec<i64>) =
        values.iter().copied().partition(|value| value % 2 == 0);
    match (evens.as_slice(), odds.as_slice()) {
        ([only], [_, _, ..]) => Some(*only),
        ([_, _, ..], [only]) => Some(*only),
        _ => None,
    }
}

/// Counting solution: determine the majority parity, then scan for the
/// first element that breaks it.
pub fn find_outlier_majority(values: &[i64]) -> Option<i64> {
    let even_count = values.iter().filter(|value| *value % 2 == 0).count();
    let odd_count = values.len() - even_count;
    if even_count == 1 && odd_count >= 2 {
        values.iter().copied().find(|value| value % 2 == 0)
    } else if odd_count == 1 && even_count >= 2 {
        values.iter().copied().find(|value| value % 2 != 0)
    } else {
        None
    }
}
