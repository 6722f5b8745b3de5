//! Abstract elements of a formula and their representation.
//!
//! - [Atoms](atom) are identifiers to which a value may be assigned.
//! - [Literals](literal) pair an atom with a polarity.
//! - [Clauses](clause) are collections of literals, read as a disjunction.
//! - [Formulas](formula) are collections of clauses, read as a conjunction, alongside a count of declared atoms.

pub mod atom;
pub mod clause;
pub mod formula;
pub mod literal;
