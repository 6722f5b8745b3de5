//! Clauses, aka. a collection of literals, interpreted as the disjunction of those literals.
//!
//! The canonical representation of a clause is as a vector of literals.
//!
//! ```rust
//! # use rand_cnf::structures::clause::{CClause, Clause};
//! let clause: CClause = vec![23, -41, 3];
//!
//! assert_eq!(clause.size(), 3);
//! assert_eq!(clause.as_dimacs(true), "23 -41 3 0");
//! assert_eq!(clause.as_dimacs(false), "23 -41 3");
//! ```

use crate::structures::{
    atom::Atom,
    literal::{IntLiteral, Literal},
};

/// The clause trait.
pub trait Clause {
    /// A string of the clause in DIMACS form, with the terminating `0` as optional.
    fn as_dimacs(&self, zero: bool) -> String;

    /// An iterator over all literals in the clause, in the order the literals were added.
    fn literals(&self) -> impl Iterator<Item = &IntLiteral>;

    /// The number of literals in the clause.
    fn size(&self) -> usize;

    /// An iterator over all atoms in the clause.
    /// An atom occurring with both polarities is returned twice.
    fn atoms(&self) -> impl Iterator<Item = Atom>;
}

/// The canonical implementation of a clause.
pub type CClause = Vec<IntLiteral>;

impl Clause for CClause {
    fn as_dimacs(&self, zero: bool) -> String {
        let mut the_string = String::new();
        for literal in self.literals() {
            the_string.push_str(&literal.as_int().to_string());
            the_string.push(' ');
        }
        match zero {
            true => the_string.push('0'),
            false => {
                the_string.pop();
            }
        }
        the_string
    }

    fn literals(&self) -> impl Iterator<Item = &IntLiteral> {
        self.iter()
    }

    fn size(&self) -> usize {
        self.len()
    }

    fn atoms(&self) -> impl Iterator<Item = Atom> {
        self.iter().map(|literal| literal.atom())
    }
}

#[cfg(test)]
mod clause_tests {
    use super::*;

    #[test]
    fn empty_dimacs() {
        let clause = CClause::default();
        assert_eq!(clause.as_dimacs(true), "0");
        assert_eq!(clause.as_dimacs(false), "");
    }

    #[test]
    fn atoms_ignore_polarity() {
        let clause: CClause = vec![-1, 2, 1];
        assert_eq!(clause.atoms().collect::<Vec<_>>(), vec![1, 2, 1]);
    }
}
