//! Error taxonomy for registry evaluation.
//!
//! Both conditions are local and recoverable; nothing in the registry
//! panics on caller input.

/// Errors surfaced by [`Registry`](crate::Registry) lookups and calls.
#[derive(Debug, thiserror::Error)]
pub enum KataError {
    /// The requested kata name (or `kata::implementation` id) is not in
    /// the catalog.
    #[error("unknown kata: {name}")]
    NotFound { name: String },

    /// The supplied arguments do not match the kata's declared
    /// signature, or violate a documented per-kata domain constraint.
    #[error("invalid argument for {kata}: {reason}")]
    InvalidArgument { kata: String, reason: String },
}

impl KataError {
    pub(crate) fn not_found(name: impl Into<String>) -> Self {
        Self::NotFound { name: name.into() }
    }

    pub(crate) fn invalid(kata: &str, reason: impl Into<String>) -> Self {
        Self::InvalidArgument {
            kata: kata.to_string(),
            reason: reason.into(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn display_strings_name_the_offender() {
        let err = KataError::not_found("nope");
        assert_eq!(err.to_string(), "unknown kata: nope");

        let err = KataError::invalid("pin", "args[0] must be a string");
        assert_eq!(
            err.to_string(),
            "invalid argument for pin: args[0] must be a string"
        );
    }
}
