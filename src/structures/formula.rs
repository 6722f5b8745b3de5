/*!
A formula, aka. a conjunction of clauses, together with a count of declared atoms.

The declared count of atoms need not match the atoms occurring in the clauses of the formula.
Some atom may be declared and never used, which is common for small random formulas.

```rust
# use rand_cnf::structures::formula::Formula;
let mut formula = Formula::new(3);
formula.push(vec![1, -2, 3]);
formula.push(vec![-1, 2]);

assert_eq!(formula.atom_count(), 3);
assert_eq!(formula.clause_count(), 2);
assert_eq!(formula.to_string(), "p cnf 3 2\n1 -2 3 0\n-1 2 0\n");
```
*/

use crate::structures::{atom::Atom, clause::CClause};

/// A formula.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct Formula {
    /// The count of atoms declared in the header of the formula.
    atoms: Atom,

    /// The clauses of the formula, in order of addition.
    clauses: Vec<CClause>,
}

impl Formula {
    /// A formula over the given count of atoms, without clauses.
    pub fn new(atoms: Atom) -> Self {
        Formula {
            atoms,
            clauses: Vec::default(),
        }
    }

    /// A formula over the given count of atoms, with capacity for some count of clauses.
    pub fn with_capacity(atoms: Atom, clauses: usize) -> Self {
        Formula {
            atoms,
            clauses: Vec::with_capacity(clauses),
        }
    }

    pub fn push(&mut self, clause: CClause) {
        self.clauses.push(clause);
    }

    pub fn atom_count(&self) -> Atom {
        self.atoms
    }

    pub fn clause_count(&self) -> usize {
        self.clauses.len()
    }

    pub fn clauses(&self) -> impl Iterator<Item = &CClause> {
        self.clauses.iter()
    }
}

impl std::fmt::Display for Formula {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let mut buffer = Vec::default();
        if self.write_dimacs(&mut buffer).is_err() {
            return Err(std::fmt::Error);
        }
        match std::str::from_utf8(&buffer) {
            Ok(dimacs) => write!(f, "{dimacs}"),
            Err(_) => Err(std::fmt::Error),
        }
    }
}
