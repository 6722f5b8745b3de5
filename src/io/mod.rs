//! Input and output.
//!
//! For the moment, only output of formulas in the [DIMACS](dimacs) representation.

pub mod dimacs;
