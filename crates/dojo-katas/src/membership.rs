//! Categorize new members: a `(age, handicap)` pair is "Senior" iff
//! age >= 55 and handicap > 7, otherwise "Open". The archive kept two
//! solutions spelling the age bound `>= 55` and `> 54`; they are
//! equivalent over integers and the `>= 55` spelling is kept.

pub const SENIOR: &str = "Senior";
pub const OPEN: &str = "Open";

pub fn open_or_senior(members: &[(i64, i64)]) -> Vec<&'static str> {
    members
        .iter()
        .map(|(age, handicap)| {
            if *age >= 55 && *handicap > 7 {
                SENIOR
            } else {
                OPEN
            }
        })
        .collect()
}
