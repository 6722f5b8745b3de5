//! Literals are atoms paired with a (boolean) polarity.
//!
//! The implementation used throughout the library is [IntLiteral], a signed integer with the sign indicating polarity, as in the DIMACS representation.
//!
//! ```rust
//! # use rand_cnf::structures::literal::{IntLiteral, Literal};
//! let literal = IntLiteral::new(79, false);
//!
//! assert!(!literal.polarity());
//! assert_eq!(literal.atom(), 79);
//! assert_eq!(literal.as_int(), -79);
//!
//! assert!(literal.negate().polarity());
//! ```

use crate::structures::atom::Atom;

/// Something which has methods for returning an atom and a polarity, etc.
pub trait Literal: std::cmp::Ord + std::hash::Hash {
    /// A fresh literal, specified by pairing an atom with a boolean.
    fn new(atom: Atom, polarity: bool) -> Self;

    /// The negation of the literal.
    fn negate(&self) -> Self;

    /// The atom of the literal.
    fn atom(&self) -> Atom;

    /// The polarity of the literal.
    fn polarity(&self) -> bool;

    /// The literal in its integer form, with sign indicating polarity.
    fn as_int(&self) -> isize;
}

/// The representation of a literal as a signed integer.
pub type IntLiteral = i32;

impl Literal for IntLiteral {
    fn new(atom: Atom, polarity: bool) -> Self {
        match polarity {
            true => atom as IntLiteral,
            false => -(atom as IntLiteral),
        }
    }

    fn negate(&self) -> Self {
        -self
    }

    fn atom(&self) -> Atom {
        self.unsigned_abs()
    }

    fn polarity(&self) -> bool {
        self.is_positive()
    }

    fn as_int(&self) -> isize {
        *self as isize
    }
}

#[cfg(test)]
mod literal_tests {
    use super::*;

    #[test]
    fn polarity_is_sign() {
        assert_eq!(IntLiteral::new(3, true), 3);
        assert_eq!(IntLiteral::new(3, false), -3);
        assert!(IntLiteral::new(1, true).polarity());
        assert!(!IntLiteral::new(1, false).polarity());
    }

    #[test]
    fn negation_keeps_atom() {
        let literal = IntLiteral::new(12, true);
        assert_eq!(literal.negate().atom(), 12);
        assert_eq!(literal.negate().negate(), literal);
    }
}
