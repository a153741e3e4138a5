//! The canonical kata catalog.
//!
//! This module is the single authority on which katas exist, what they
//! are named, what signatures they declare, and which implementation is
//! canonical. Each archive solution is bound under its own id; nothing
//! relies on name shadowing.
//!
//! The adapters here translate validated JSON arguments into the native
//! types of `dojo-katas` and enforce the per-kata domain constraints
//! that signature checking cannot express (a nonzero step, a 3-element
//! seed, tokens drawn from the compass alphabet).

use dojo_katas as katas;
use serde_json::{Value, json};

use crate::args;
use crate::error::KataError;
use crate::signature::{ParamType, ReturnType, Signature};

/// Adapter from validated JSON arguments to a JSON result.
pub type KataFn = fn(&[Value]) -> Result<Value, KataError>;

/// One named solution of a kata.
#[derive(Debug, Clone, Copy)]
pub struct Implementation {
    pub id: &'static str,
    pub run: KataFn,
}

/// A kata record. The canonical implementation answers
/// [`Registry::evaluate`](crate::Registry::evaluate); alternates stay
/// addressable by id and must agree with it on the declared domain.
#[derive(Debug, Clone, Copy)]
pub struct KataRecord {
    pub name: &'static str,
    pub summary: &'static str,
    pub signature: Signature,
    pub canonical: Implementation,
    pub alternates: &'static [Implementation],
}

impl KataRecord {
    /// Canonical implementation first, then the alternates in order.
    pub fn implementations(&self) -> impl Iterator<Item = &Implementation> {
        std::iter::once(&self.canonical).chain(self.alternates.iter())
    }

    pub fn implementation(&self, id: &str) -> Option<&Implementation> {
        self.implementations().find(|imp| imp.id == id)
    }
}

pub const CATALOG: &[KataRecord] = &[
    KataRecord {
        name: "pin",
        summary: "true iff the string is exactly 4 or 6 ASCII digits",
        signature: Signature {
            params: &[ParamType::Str],
            returns: ReturnType::Bool,
        },
        canonical: Implementation {
            id: "length-scan",
            run: eval_pin_scan,
        },
        alternates: &[Implementation {
            id: "regex",
            run: eval_pin_regex,
        }],
    },
    KataRecord {
        name: "dna",
        summary: "complement strand via A<->T, G<->C; other characters pass through",
        signature: Signature {
            params: &[ParamType::Str],
            returns: ReturnType::Str,
        },
        canonical: Implementation {
            id: "map",
            run: eval_dna_map,
        },
        alternates: &[Implementation {
            id: "pairs",
            run: eval_dna_pairs,
        }],
    },
    KataRecord {
        name: "outlier",
        summary: "the one integer whose parity differs from all others",
        signature: Signature {
            params: &[ParamType::IntSeq],
            returns: ReturnType::Int,
        },
        canonical: Implementation {
            id: "partition",
            run: eval_outlier_partition,
        },
        alternates: &[Implementation {
            id: "majority-scan",
            run: eval_outlier_majority,
        }],
    },
    KataRecord {
        name: "equalSides",
        summary: "lowest index whose left and right sums match, else -1",
        signature: Signature {
            params: &[ParamType::IntSeq],
            returns: ReturnType::Int,
        },
        canonical: Implementation {
            id: "rescan",
            run: eval_equal_sides_rescan,
        },
        alternates: &[Implementation {
            id: "running-total",
            run: eval_equal_sides_running,
        }],
    },
    KataRecord {
        name: "digitalRoot",
        summary: "repeated decimal digit sum down to a single digit",
        signature: Signature {
            params: &[ParamType::Uint],
            returns: ReturnType::Int,
        },
        canonical: Implementation {
            id: "digit-sum",
            run: eval_digital_root_sum,
        },
        alternates: &[Implementation {
            id: "mod9",
            run: eval_digital_root_mod9,
        }],
    },
    KataRecord {
        name: "spinWords",
        summary: "reverse each word longer than five characters in place",
        signature: Signature {
            params: &[ParamType::Str],
            returns: ReturnType::Str,
        },
        canonical: Implementation {
            id: "split-map",
            run: eval_spin_words,
        },
        alternates: &[],
    },
    KataRecord {
        name: "digPow",
        summary: "k with sum(digit_i ^ (p+i)) == k*n, else -1",
        signature: Signature {
            params: &[ParamType::Uint, ParamType::Uint],
            returns: ReturnType::Int,
        },
        canonical: Implementation {
            id: "divisibility",
            run: eval_dig_pow,
        },
        alternates: &[],
    },
    KataRecord {
        name: "tribonacci",
        summary: "extend a 3-element seed by summing the previous three",
        signature: Signature {
            params: &[ParamType::IntSeq, ParamType::Uint],
            returns: ReturnType::IntSeq,
        },
        canonical: Implementation {
            id: "extend",
            run: eval_tribonacci_extend,
        },
        alternates: &[Implementation {
            id: "grow",
            run: eval_tribonacci_grow,
        }],
    },
    KataRecord {
        name: "highAndLow",
        summary: "\"max min\" over a string of space-separated integers",
        signature: Signature {
            params: &[ParamType::Str],
            returns: ReturnType::Str,
        },
        canonical: Implementation {
            id: "minmax",
            run: eval_high_and_low,
        },
        alternates: &[],
    },
    KataRecord {
        name: "sequenceSum",
        summary: "sum of the arithmetic sequence begin, begin+step, ... bounded by end",
        signature: Signature {
            params: &[ParamType::Int, ParamType::Int, ParamType::Int],
            returns: ReturnType::Int,
        },
        canonical: Implementation {
            id: "loop",
            run: eval_sequence_sum_loop,
        },
        alternates: &[Implementation {
            id: "closed-form",
            run: eval_sequence_sum_closed,
        }],
    },
    KataRecord {
        name: "deleteNth",
        summary: "cap each distinct value's occurrences at n, order preserved",
        signature: Signature {
            params: &[ParamType::ValueSeq, ParamType::Uint],
            returns: ReturnType::ValueSeq,
        },
        canonical: Implementation {
            id: "counter",
            run: eval_delete_nth,
        },
        alternates: &[],
    },
    KataRecord {
        name: "removeSmallest",
        summary: "drop the first occurrence of the minimum",
        signature: Signature {
            params: &[ParamType::IntSeq],
            returns: ReturnType::IntSeq,
        },
        canonical: Implementation {
            id: "index-of-min",
            run: eval_remove_smallest,
        },
        alternates: &[],
    },
    KataRecord {
        name: "isValidWalk",
        summary: "true iff exactly ten compass steps return to the start",
        signature: Signature {
            params: &[ParamType::StrSeq],
            returns: ReturnType::Bool,
        },
        canonical: Implementation {
            id: "displacement",
            run: eval_is_valid_walk,
        },
        alternates: &[],
    },
    KataRecord {
        name: "persistence",
        summary: "digit-multiplication rounds until a single digit remains",
        signature: Signature {
            params: &[ParamType::Uint],
            returns: ReturnType::Int,
        },
        canonical: Implementation {
            id: "loop",
            run: eval_persistence_loop,
        },
        alternates: &[Implementation {
            id: "recursive",
            run: eval_persistence_recursive,
        }],
    },
    KataRecord {
        name: "openOrSenior",
        summary: "\"Senior\" iff age >= 55 and handicap > 7, else \"Open\"",
        signature: Signature {
            params: &[ParamType::PairSeq],
            returns: ReturnType::StrSeq,
        },
        canonical: Implementation {
            id: "map",
            run: eval_open_or_senior,
        },
        alternates: &[],
    },
    KataRecord {
        name: "disemvowel",
        summary: "remove a/e/i/o/u in either case, preserve the rest",
        signature: Signature {
            params: &[ParamType::Str],
            returns: ReturnType::Str,
        },
        canonical: Implementation {
            id: "retain",
            run: eval_disemvowel,
        },
        alternates: &[],
    },
];

fn eval_pin_scan(call_args: &[Value]) -> Result<Value, KataError> {
    let pin = args::str_arg("pin", call_args, 0)?;
    Ok(Value::Bool(katas::pin::validate_pin(pin)))
}

fn eval_pin_regex(call_args: &[Value]) -> Result<Value, KataError> {
    let pin = args::str_arg("pin", call_args, 0)?;
    Ok(Value::Bool(katas::pin::validate_pin_regex(pin)))
}

fn eval_dna_map(call_args: &[Value]) -> Result<Value, KataError> {
    let dna = args::str_arg("dna", call_args, 0)?;
    Ok(Value::String(katas::dna::complement(dna)))
}

fn eval_dna_pairs(call_args: &[Value]) -> Result<Value, KataError> {
    let dna = args::str_arg("dna", call_args, 0)?;
    Ok(Value::String(katas::dna::complement_pairs(dna)))
}

fn outlier_domain(values: &[i64]) -> Result<(), KataError> {
    if values.len() < 3 {
        return Err(KataError::invalid("outlier", "requires at least 3 integers"));
    }
    Ok(())
}

fn outlier_result(found: Option<i64>) -> Result<Value, KataError> {
    match found {
        Some(value) => Ok(json!(value)),
        None => Err(KataError::invalid("outlier", "no unique parity outlier")),
    }
}

fn eval_outlier_partition(call_args: &[Value]) -> Result<Value, KataError> {
    let values = args::int_seq_arg("outlier", call_args, 0)?;
    outlier_domain(&values)?;
    outlier_result(katas::outlier::find_outlier(&values))
}

fn eval_outlier_majority(call_args: &[Value]) -> Result<Value, KataError> {
    let values = args::int_seq_arg("outlier", call_args, 0)?;
    outlier_domain(&values)?;
    outlier_result(katas::outlier::find_outlier_majority(&values))
}

fn eval_equal_sides_rescan(call_args: &[Value]) -> Result<Value, KataError> {
    let values = args::int_seq_arg("equalSides", call_args, 0)?;
    Ok(json!(katas::equal_sides::find_even_index(&values)))
}

fn eval_equal_sides_running(call_args: &[Value]) -> Result<Value, KataError> {
    let values = args::int_seq_arg("equalSides", call_args, 0)?;
    Ok(json!(katas::equal_sides::find_even_index_running(&values)))
}

fn eval_digital_root_sum(call_args: &[Value]) -> Result<Value, KataError> {
    let n = args::u64_arg("digitalRoot", call_args, 0)?;
    Ok(json!(katas::digital_root::digital_root(n)))
}

fn eval_digital_root_mod9(call_args: &[Value]) -> Result<Value, KataError> {
    let n = args::u64_arg("digitalRoot", call_args, 0)?;
    Ok(json!(katas::digital_root::digital_root_mod9(n)))
}

fn eval_spin_words(call_args: &[Value]) -> Result<Value, KataError> {
    let sentence = args::str_arg("spinWords", call_args, 0)?;
    Ok(Value::String(katas::spin_words::spin_words(sentence)))
}

fn eval_dig_pow(call_args: &[Value]) -> Result<Value, KataError> {
    let n = args::u64_arg("digPow", call_args, 0)?;
    let p = args::u64_arg("digPow", call_args, 1)?;
    if n == 0 {
        return Err(KataError::invalid("digPow", "n must be >= 1"));
    }
    let p = u32::try_from(p)
        .map_err(|_| KataError::invalid("digPow", "p is out of range"))?;
    match katas::dig_pow::dig_pow(n, p) {
        Some(multiplier) => Ok(json!(multiplier)),
        None => Err(KataError::invalid("digPow", "result is out of range")),
    }
}

/// Cap on the requested sequence length. Overflow checks already stop
/// growing seeds, but an all-zero seed never overflows, so the count
/// itself needs a bound.
const TRIBONACCI_MAX_COUNT: usize = 10_000;

fn tribonacci_args(call_args: &[Value]) -> Result<([i64; 3], usize), KataError> {
    let seed = args::int_seq_arg("tribonacci", call_args, 0)?;
    let seed: [i64; 3] = seed
        .try_into()
        .map_err(|_| KataError::invalid("tribonacci", "seed must have exactly 3 elements"))?;
    let n = args::u64_arg("tribonacci", call_args, 1)?;
    let n = usize::try_from(n)
        .map_err(|_| KataError::invalid("tribonacci", "count is out of range"))?;
    if n > TRIBONACCI_MAX_COUNT {
        return Err(KataError::invalid(
            "tribonacci",
            format!("count must be at most {TRIBONACCI_MAX_COUNT}"),
        ));
    }
    Ok((seed, n))
}

fn tribonacci_result(sequence: Option<Vec<i64>>) -> Result<Value, KataError> {
    match sequence {
        Some(sequence) => Ok(json!(sequence)),
        None => Err(KataError::invalid(
            "tribonacci",
            "sequence overflows 64-bit integers",
        )),
    }
}

fn eval_tribonacci_extend(call_args: &[Value]) -> Result<Value, KataError> {
    let (seed, n) = tribonacci_args(call_args)?;
    tribonacci_result(katas::tribonacci::tribonacci(&seed, n))
}

fn eval_tribonacci_grow(call_args: &[Value]) -> Result<Value, KataError> {
    let (seed, n) = tribonacci_args(call_args)?;
    tribonacci_result(katas::tribonacci::tribonacci_grow(&seed, n))
}

fn eval_high_and_low(call_args: &[Value]) -> Result<Value, KataError> {
    let numbers = args::str_arg("highAndLow", call_args, 0)?;
    match katas::high_low::high_and_low(numbers) {
        Some(result) => Ok(Value::String(result)),
        None => Err(KataError::invalid(
            "highAndLow",
            "requires a non-empty string of space-separated integers",
        )),
    }
}

fn sequence_sum_args(call_args: &[Value]) -> Result<(i64, i64, i64), KataError> {
    let begin = args::i64_arg("sequenceSum", call_args, 0)?;
    let end = args::i64_arg("sequenceSum", call_args, 1)?;
    let step = args::i64_arg("sequenceSum", call_args, 2)?;
    if step == 0 {
        return Err(KataError::invalid("sequenceSum", "step must be nonzero"));
    }
    Ok((begin, end, step))
}

fn sequence_sum_result(sum: Option<i64>) -> Result<Value, KataError> {
    match sum {
        Some(sum) => Ok(json!(sum)),
        None => Err(KataError::invalid("sequenceSum", "sum is out of range")),
    }
}

fn eval_sequence_sum_loop(call_args: &[Value]) -> Result<Value, KataError> {
    let (begin, end, step) = sequence_sum_args(call_args)?;
    sequence_sum_result(katas::sequence_sum::sequence_sum(begin, end, step))
}

fn eval_sequence_sum_closed(call_args: &[Value]) -> Result<Value, KataError> {
    let (begin, end, step) = sequence_sum_args(call_args)?;
    sequence_sum_result(katas::sequence_sum::sequence_sum_closed(begin, end, step))
}

fn eval_delete_nth(call_args: &[Value]) -> Result<Value, KataError> {
    let values = args::value_seq_arg("deleteNth", call_args, 0)?;
    let max_occurrences = args::u64_arg("deleteNth", call_args, 1)?;
    let max_occurrences = usize::try_from(max_occurrences)
        .map_err(|_| KataError::invalid("deleteNth", "threshold is out of range"))?;
    Ok(Value::Array(katas::delete_nth::delete_nth(
        values,
        max_occurrences,
    )))
}

fn eval_remove_smallest(call_args: &[Value]) -> Result<Value, KataError> {
    let numbers = args::int_seq_arg("removeSmallest", call_args, 0)?;
    Ok(json!(katas::remove_smallest::remove_smallest(&numbers)))
}

fn eval_is_valid_walk(call_args: &[Value]) -> Result<Value, KataError> {
    let tokens = args::str_seq_arg("isValidWalk", call_args, 0)?;
    let walk: Vec<katas::valid_walk::Direction> = tokens
        .iter()
        .map(|token| {
            katas::valid_walk::Direction::from_token(token).ok_or_else(|| {
                KataError::invalid(
                    "isValidWalk",
                    format!("unknown direction {token:?}, expected n, s, e or w"),
                )
            })
        })
        .collect::<Result<_, _>>()?;
    Ok(Value::Bool(katas::valid_walk::is_valid_walk(&walk)))
}

fn eval_persistence_loop(call_args: &[Value]) -> Result<Value, KataError> {
    let n = args::u64_arg("persistence", call_args, 0)?;
    Ok(json!(katas::persistence::persistence(n)))
}

fn eval_persistence_recursive(call_args: &[Value]) -> Result<Value, KataError> {
    let n = args::u64_arg("persistence", call_args, 0)?;
    Ok(json!(katas::persistence::persistence_recursive(n)))
}

fn eval_open_or_senior(call_args: &[Value]) -> Result<Value, KataError> {
    let members = args::pair_seq_arg("openOrSenior", call_args, 0)?;
    Ok(json!(katas::membership::open_or_senior(&members)))
}

fn eval_disemvowel(call_args: &[Value]) -> Result<Value, KataError> {
    let text = args::str_arg("disemvowel", call_args, 0)?;
    Ok(Value::String(katas::disemvowel::disemvowel(text)))
}
