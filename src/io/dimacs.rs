/*!
Output of formulas in the DIMACS representation.

A formula in the DIMACS representation is a header line `p cnf <atoms> <clauses>` followed by one line for each clause.
Each clause line is the literals of the clause, as signed integers separated by a space, and terminated by `0`.

```text
p cnf 3 2
1 -2 3 0
-1 2 0
```

Clauses may be written in two ways:
- From a [generator](GenericGenerator::write_dimacs), with each clause written as soon as it is generated.
  In this case the formula is never held in memory.
- From a [formula](Formula::write_dimacs).
*/

use std::{
    fs::File,
    io::{BufWriter, Write},
    path::Path,
};

use crate::{
    generator::GenericGenerator,
    misc::log::targets::{self},
    structures::{
        atom::Atom,
        clause::{CClause, Clause},
        formula::Formula,
    },
    types::err::{self},
};

/// Writes the header line of a formula.
pub fn write_header(writer: &mut impl Write, atoms: Atom, clauses: usize) -> std::io::Result<()> {
    writeln!(writer, "p cnf {atoms} {clauses}")
}

/// Writes a clause line, terminated by `0`.
pub fn write_clause(writer: &mut impl Write, clause: &CClause) -> std::io::Result<()> {
    for literal in clause.literals() {
        write!(writer, "{literal} ")?;
    }
    writeln!(writer, "0")
}

/// Notes the error before passing its kind on.
fn io_error(e: std::io::Error) -> err::ErrorKind {
    log::error!(target: targets::DIMACS, "Write failed: {e}");
    e.into()
}

impl<R: rand::Rng> GenericGenerator<R> {
    /// Writes a freshly generated formula to the given writer, with clauses written as generated.
    ///
    /// ```rust
    /// # use rand_cnf::config::Config;
    /// # use rand_cnf::generator::Generator;
    /// let mut config = Config::default();
    /// config.clauses.value = 0;
    ///
    /// let mut dimacs = vec![];
    /// let mut generator = Generator::from_config(config).unwrap();
    /// assert!(generator.write_dimacs(&mut dimacs).is_ok());
    ///
    /// assert_eq!(dimacs, b"p cnf 30 0\n");
    /// ```
    pub fn write_dimacs(&mut self, mut writer: impl Write) -> Result<(), err::ErrorKind> {
        let atoms = self.config().atoms.value;
        let clauses = self.config().clauses.value;

        log::debug!(target: targets::DIMACS, "Header: p cnf {atoms} {clauses}");
        write_header(&mut writer, atoms, clauses).map_err(io_error)?;

        for _ in 0..clauses {
            let clause = self.clause()?;
            write_clause(&mut writer, &clause).map_err(io_error)?;
        }

        writer.flush().map_err(io_error)?;
        Ok(())
    }

    /// Writes a freshly generated formula to the file at the given path.
    ///
    /// The file is created if it does not exist, and truncated if it does.
    /// On an error the file is left as it is, which may be partially written.
    pub fn write_dimacs_file(&mut self, path: impl AsRef<Path>) -> Result<(), err::ErrorKind> {
        let path = path.as_ref();

        let file = File::create(path).map_err(io_error)?;
        self.write_dimacs(BufWriter::new(file))?;

        log::info!(target: targets::DIMACS, "{} clauses written to {path:?}", self.config().clauses.value);
        Ok(())
    }
}

impl Formula {
    /// Writes the formula to the given writer.
    pub fn write_dimacs(&self, mut writer: impl Write) -> std::io::Result<()> {
        write_header(&mut writer, self.atom_count(), self.clause_count())?;
        for clause in self.clauses() {
            write_clause(&mut writer, clause)?;
        }
        writer.flush()
    }
}
