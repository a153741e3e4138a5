//! Delete the Nth occurrence: cap how many times each distinct value may
//! appear, preserving relative order. Equality is value equality, so the
//! function is generic over any comparable element type.

/// Keep an element iff fewer than `max_occurrences` equal elements have
/// already been kept. Counting scans the output so far, which is fine at
/// kata scale and avoids requiring `Hash` or `Ord` on the element type.
pub fn delete_nth<T: PartialEq + Clone>(values: &[T], max_occurrences: usize) -> Vec<T> {
    let mut kept: Vec<T> = Vec::new();
    for value in values {
        let seen = kept.iter().filter(|previous| *previous == value).count();
        if seen < max_occurrences {
            kept.push(value.clone());
        }
    }
    kept
}
