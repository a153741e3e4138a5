//! Decoding validated JSON arguments into kernel-native types.
//!
//! [`Signature::check`](crate::signature::Signature::check) runs before
//! any of these, so the happy path always succeeds; every helper still
//! returns `Result` so the adapters stay total without unwrapping.

use crate::error::KataError;
use serde_json::Value;

pub(crate) fn str_arg<'a>(kata: &str, args: &'a [Value], index: usize) -> Result<&'a str, KataError> {
    args.get(index)
        .and_then(Value::as_str)
        .ok_or_else(|| KataError::invalid(kata, format!("args[{index}] must be a string")))
}

pub(crate) fn i64_arg(kata: &str, args: &[Value], index: usize) -> Result<i64, KataError> {
    args.get(index)
        .and_then(Value::as_i64)
        .ok_or_else(|| KataError::invalid(kata, format!("args[{index}] must be an integer")))
}

pub(crate) fn u64_arg(kata: &str, args: &[Value], index: usize) -> Result<u64, KataError> {
    args.get(index)
        .and_then(Value::as_u64)
        .ok_or_else(|| {
            KataError::invalid(kata, format!("args[{index}] must be a non-negative integer"))
        })
}

pub(crate) fn int_seq_arg(kata: &str, args: &[Value], index: usize) -> Result<Vec<i64>, KataError> {
    let items = args.get(index).and_then(Value::as_array).ok_or_else(|| {
        KataError::invalid(kata, format!("args[{index}] must be an array of integers"))
    })?;
    items
        .iter()
        .map(|item| {
            item.as_i64().ok_or_else(|| {
                KataError::invalid(kata, format!("args[{index}] must be an array of integers"))
            })
        })
        .collect()
}

pub(crate) fn str_seq_arg<'a>(
    kata: &str,
    args: &'a [Value],
    index: usize,
) -> Result<Vec<&'a str>, KataError> {
    let items = args.get(index).and_then(Value::as_array).ok_or_else(|| {
        KataError::invalid(kata, format!("args[{index}] must be an array of strings"))
    })?;
    items
        .iter()
        .map(|item| {
            item.as_str().ok_or_else(|| {
                KataError::invalid(kata, format!("args[{index}] must be an array of strings"))
            })
        })
        .collect()
}

pub(crate) fn pair_seq_arg(
    kata: &str,
    args: &[Value],
    index: usize,
) -> Result<Vec<(i64, i64)>, KataError> {
    let items = args.get(index).and_then(Value::as_array).ok_or_else(|| {
        KataError::invalid(kata, format!("args[{index}] must be an array of pairs"))
    })?;
    items
        .iter()
        .map(|item| {
            let pair = item.as_array().filter(|pair| pair.len() == 2);
            match pair {
                Some(pair) => match (pair[0].as_i64(), pair[1].as_i64()) {
                    (Some(first), Some(second)) => Ok((first, second)),
                    _ => Err(KataError::invalid(
                        kata,
                        format!("args[{index}] pairs must hold two integers"),
                    )),
                },
                None => Err(KataError::invalid(
                    kata,
                    format!("args[{index}] must be an array of two-element pairs"),
                )),
            }
        })
        .collect()
}

pub(crate) fn value_seq_arg<'a>(
    kata: &str,
    args: &'a [Value],
    index: usize,
) -> Result<&'a [Value], KataError> {
    args.get(index)
        .and_then(Value::as_array)
        .map(Vec::as_slice)
        .ok_or_else(|| KataError::invalid(kata, format!("args[{index}] must be an array")))
}
