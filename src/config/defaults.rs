use crate::{config::ClauseSampling, structures::atom::Atom};

pub const ATOMS: Atom = 30;
pub const CLAUSES: usize = 30;
pub const CLAUSE_LENGTH: usize = 3;
pub const CLAUSE_SAMPLING: ClauseSampling = ClauseSampling::Strict;
pub const MAX_ATTEMPTS: usize = 64;

pub const OUTPUT_PATH: &str = "random.cnf";
