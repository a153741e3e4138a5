//! Remove the minimum: drop one occurrence of the smallest number,
//! the first occurrence when duplicates tie. Empty input stays empty.

pub fn remove_smallest(numbers: &[i64]) -> Vec<i64> {
    let Some(min) = numbers.iter().min().copied() else {
        return Vec::new();
    };
    let mut result = numbers.to_vec();
    if let Some(index) = numbers.iter().position(|value| *value == min) {
        result.remove(index);
    }
    result
}
