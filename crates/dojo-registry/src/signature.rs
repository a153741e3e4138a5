//! Declared kata signatures and argument-shape validation.
//!
//! Validation is structural and coercion-free: a `Str` position accepts
//! only a JSON string, `Int` only an integral JSON number, and so on. A
//! kata that takes a string of digits does not accept a number, per the
//! registry contract.

use crate::error::KataError;
use serde_json::Value;

/// JSON-level type accepted at one argument position.
#[derive(Debug, Clone, Copy, PartialEq, Eq, serde::Serialize)]
#[serde(rename_all = "snake_case")]
pub enum ParamType {
    /// Any JSON string.
    Str,
    /// An integral JSON number in i64 range.
    Int,
    /// A non-negative integral JSON number.
    Uint,
    /// An array of integral JSON numbers.
    IntSeq,
    /// An array of JSON strings.
    StrSeq,
    /// An array of two-element integer arrays.
    PairSeq,
    /// An array of arbitrary JSON values.
    ValueSeq,
}

/// Semantic return type of a kata. Catalog description only; results are
/// always returned as `serde_json::Value`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, serde::Serialize)]
#[serde(rename_all = "snake_case")]
pub enum ReturnType {
    Bool,
    Int,
    Str,
    IntSeq,
    StrSeq,
    ValueSeq,
}

/// The ordered parameter list a kata declares, plus its return type.
#[derive(Debug, Clone, Copy, serde::Serialize)]
pub struct Signature {
    pub params: &'static [ParamType],
    pub returns: ReturnType,
}

impl ParamType {
    fn matches(self, value: &Value) -> bool {
        match self {
            ParamType::Str => value.is_string(),
            ParamType::Int => value.as_i64().is_some(),
            ParamType::Uint => value.as_u64().is_some(),
            ParamType::IntSeq => value
                .as_array()
                .is_some_and(|items| items.iter().all(|item| item.as_i64().is_some())),
            ParamType::StrSeq => value
                .as_array()
                .is_some_and(|items| items.iter().all(Value::is_string)),
            ParamType::PairSeq => value.as_array().is_some_and(|items| {
                items.iter().all(|item| {
                    item.as_array().is_some_and(|pair| {
                        pair.len() == 2 && pair.iter().all(|entry| entry.as_i64().is_some())
                    })
                })
            }),
            ParamType::ValueSeq => value.is_array(),
        }
    }

    fn describe(self) -> &'static str {
        match self {
            ParamType::Str => "a string",
            ParamType::Int => "an integer",
            ParamType::Uint => "a non-negative integer",
            ParamType::IntSeq => "an array of integers",
            ParamType::StrSeq => "an array of strings",
            ParamType::PairSeq => "an array of [age, handicap] integer pairs",
            ParamType::ValueSeq => "an array",
        }
    }
}

impl Signature {
    /// Check arity, then each position in order. The first mismatch wins
    /// and is reported with its argument index.
    pub fn check(&self, kata: &str, args: &[Value]) -> Result<(), KataError> {
        if args.len() != self.params.len() {
            return Err(KataError::invalid(
                kata,
                format!(
                    "expected {} argument(s), got {}",
                    self.params.len(),
                    args.len()
                ),
            ));
        }
        for (index, (param, value)) in self.params.iter().zip(args).enumerate() {
            if !param.matches(value) {
                return Err(KataError::invalid(
                    kata,
                    format!("args[{index}] must be {}", param.describe()),
                ));
            }
        }
        Ok(())
    }
}
