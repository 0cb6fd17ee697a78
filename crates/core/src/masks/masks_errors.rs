use std::fmt;
use thiserror::Error;

/// Which kind of identifier was being masked.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum IdentifierKind {
    Card,
    Account,
}

impl fmt::Display for IdentifierKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            IdentifierKind::Card => write!(f, "card"),
            IdentifierKind::Account => write!(f, "account"),
        }
    }
}

/// Digit count an identifier must have.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LengthRequirement {
    Exactly(usize),
    AtLeast(usize),
}

impl fmt::Display for LengthRequirement {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            LengthRequirement::Exactly(n) => write!(f, "exactly {}", n),
            LengthRequirement::AtLeast(n) => write!(f, "at least {}", n),
        }
    }
}

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum MaskError {
    #[error("{kind} number must contain {expected} digits, got {actual}")]
    InvalidLength {
        kind: IdentifierKind,
        expected: LengthRequirement,
        actual: usize,
    },
}
