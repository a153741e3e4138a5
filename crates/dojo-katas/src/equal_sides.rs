//! Equal sides of an array.
//!
//! Find the lowest index `i` where the sum of elements strictly left of
//! `i` equals the sum of elements strictly right of `i`. Both edges are
//! candidates (an empty side sums to 0). Returns `-1` as the in-band
//! sentinel when no index qualifies.
//!
//! Side sums are taken in i128 so slices of extreme i64 values compare
//! exactly instead of wrapping.

/// Rescan solution: re-sum both sides at every candidate index.
pub fn find_even_index(values: &[i64]) -> i64 {
    for index in 0..values.len() {
        let left: i128 = values[..index].iter().map(|&value| i128::from(value)).sum();
        let right: i128 = values[index + 1..]
            .iter()
            .map(|&value| i128::from(value))
            .sum();
        if left == right {
            return index as i64;
        }
    }
    -1
}

/// Running-total solution: one pass with the grand total precomputed.
pub fn find_even_index_running(values: &[i64]) -> i64 {
    let total: i128 = values.iter().map(|&value| i128::from(value)).sum();
    let mut left = 0i128;
    for (index, &value) in values.iter().enumerate() {
        if left == total - left - i128::from(value) {
            return index as i64;
        }
        left += i128::from(value);
    }
    -1
}
