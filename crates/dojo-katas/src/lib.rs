//! # Dojo katas
//!
//! A personal archive of solutions to small coding exercises. Each kata
//! lives in its own module as one or more pure functions; where the
//! archive kept alternative solutions, all of them survive here under
//! distinct names and must agree on every input in the declared domain.
//!
//! No module here reads or writes state outside its parameters and
//! return value, and none performs I/O. The dynamic call surface over
//! these functions lives in `dojo-registry`.

pub mod delete_nth;
pub mod dig_pow;
pub mod digital_root;
pub mod disemvowel;
pub mod dna;
pub mod equal_sides;
pub mod high_low;
pub mod membership;
pub mod outlier;
pub mod persistence;
pub mod pin;
pub mod remove_smallest;
pub mod sequence_sum;
pub mod spin_words;
pub mod tribonacci;
pub mod valid_walk;
