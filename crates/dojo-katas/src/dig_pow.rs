//! Playing with digits.
//!
//! For `n >= 1` with digits `d0 d1 ... dk` (most significant first),
//! compute `s = d0^p + d1^(p+1) + ... + dk^(p+k)`. If `s` is a multiple
//! of `n`, return `s / n`; otherwise return the in-band sentinel `-1`.
//!
//! Returns `None` when a positional power or the quotient leaves the
//! representable range; a truncated quotient would be a silently wrong
//! answer, so the caller gets to refuse the input instead.

/// Divisibility solution: sum the positional powers with checked u128
/// arithmetic, then a single modulus check.
pub fn dig_pow(n: u64, p: u32) -> Option<i64> {
    let mut sum: u128 = 0;
    for (index, digit) in n
        .to_string()
        .chars()
        .filter_map(|ch| ch.to_digit(10))
        .enumerate()
    {
        let exponent = p.checked_add(u32::try_from(index).ok()?)?;
        let term = u128::from(digit).checked_pow(exponent)?;
        sum = sum.checked_add(term)?;
    }
    if sum % u128::from(n) == 0 {
        i64::try_from(sum / u128::from(n)).ok()
    } else {
        Some(-1)
    }
}
