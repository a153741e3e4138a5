//! Multiplicative persistence: the number of digit-multiplication rounds
//! needed to reduce a number to a single digit. Single-digit input is
//! already reduced and yields 0.

/// Loop solution.
pub fn persistence(mut n: u64) -> u64 {
    let mut rounds = 0;
    while n >= 10 {
        n = digit_product(n);
        rounds += 1;
    }
    rounds
}

/// Recursive solution. Each round strictly shrinks the digit count, so
/// the recursion depth is tiny.
pub fn persistence_recursive(n: u64) -> u64 {
    if n < 10 {
        0
    } else {
        1 + persistence_recursive(digit_product(n))
    }
}

fn digit_product(mut n: u64) -> u64 {
    let mut product = 1;
    while n > 0 {
        product *= n % 10;
        n /= 10;
    }
    product
}
