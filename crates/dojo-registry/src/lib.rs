//! # Dojo registry
//!
//! A uniform call surface over the kata archive in `dojo-katas`.
//!
//! Every kata is registered once under a stable name with a declared
//! [`Signature`] and one-or-more implementations; the first listed is
//! canonical and the rest are observationally-equivalent alternates kept
//! for comparison. [`Registry::evaluate`] looks the kata up, validates
//! the JSON arguments against the signature (arity first, then each
//! position, with no type coercion), runs the canonical implementation,
//! and returns the result as a `serde_json::Value`.
//!
//! Failure is always explicit: an unknown name is [`KataError::NotFound`],
//! an argument-shape mismatch is [`KataError::InvalidArgument`]. Katas
//! that model "no answer" (`equalSides`, `digPow`) return their in-band
//! `-1` sentinel as a value, never as an error.

mod args;
pub mod catalog;
pub mod error;
pub mod registry;
pub mod signature;

pub use catalog::{Implementation, KataRecord};
pub use error::KataError;
pub use registry::{KataSummary, Registry};
pub use signature::{ParamType, ReturnType, Signature};
