//! Digital root: repeatedly sum decimal digits until one digit remains.

/// Iterative digit-sum solution.
pub fn digital_root(mut n: u64) -> u64 {
    while n >= 10 {
        n = digit_sum(n);
    }
    n
}

/// Congruence solution: the digital root of a positive `n` is
/// `1 + (n - 1) % 9`, and 0 maps to 0.
pub fn digital_root_mod9(n: u64) -> u64 {
    if n == 0 { 0 } else { 1 + (n - 1) % 9 }
}

fn digit_sum(mut n: u64) -> u64 {
    let mut sum = 0;
    while n > 0 {
        sum += n % 10;
        n /= 10;
    }
    sum
}
