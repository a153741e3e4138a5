//! Tribonacci sequence: each element past the seed is the sum of the
//! previous three (added left to right). For `n <= 3` the seed is
//! truncated; for `n > 3` the sequence is extended out to length `n`.
//!
//! Terms are i64; an extension step that would overflow yields `None`
//! so the caller can refuse the input instead of wrapping.

/// Extend-then-truncate solution.
pub fn tribonacci(seed: &[i64; 3], n: usize) -> Option<Vec<i64>> {
    let mut sequence = seed.to_vec();
    for index in 0..n.saturating_sub(3) {
        let next = sequence[index]
            .checked_add(sequence[index + 1])?
            .checked_add(sequence[index + 2])?;
        sequence.push(next);
    }
    sequence.truncate(n);
    Some(sequence)
}

/// Grow-while-short solution: start truncated and push until length `n`.
pub fn tribonacci_grow(seed: &[i64; 3], n: usize) -> Option<Vec<i64>> {
    let mut sequence: Vec<i64> = seed.iter().copied().take(n).collect();
    while sequence.len() < n {
        let window = &sequence[sequence.len() - 3..];
        let next = window[0].checked_add(window[1])?.checked_add(window[2])?;
        sequence.push(next);
    }
    Some(sequence)
}
