/*!
Sampling of clauses.

Clauses are sampled by one of two methods, as set by the [ClauseSampling] of the configuration of a generator.

- [Strict](ClauseSampling::Strict): the atoms of a clause are sampled without replacement, and each atom is paired with a polarity chosen uniformly at random.
  As the atoms are fixed before any polarity is chosen, each draw contributes a literal to the clause.
- [Signed](ClauseSampling::Signed): literals are drawn with replacement, an atom chosen uniformly at random paired with a polarity chosen uniformly at random, and any literal already in the clause is discarded.
  The count of draws for a clause is bounded by the `max_attempts` option of the configuration, multiplied by the length of the clause.
  Completing a clause of every literal over *m* atoms takes around 2*m* ln(2*m*) draws, well within the default bound.

In either case the literals of a clause are given in the order they were sampled.
*/

use std::collections::HashSet;

use rand::{seq::index, Rng};

use crate::{
    config::ClauseSampling,
    generator::GenericGenerator,
    misc::log::targets::{self},
    structures::{
        atom::Atom,
        clause::{CClause, Clause},
        literal::{IntLiteral, Literal},
    },
    types::err::{self, SamplingError},
};

impl<R: rand::Rng> GenericGenerator<R> {
    /// A freshly generated clause.
    ///
    /// ```rust
    /// # use rand_cnf::config::{ClauseSampling, Config};
    /// # use rand_cnf::generator::Generator;
    /// # use rand_cnf::structures::clause::Clause;
    /// let mut config = Config::default();
    /// config.atoms.value = 2;
    /// config.clause_length.value = 4;
    /// config.sampling.value = ClauseSampling::Signed;
    ///
    /// let mut generator = Generator::from_config(config).unwrap();
    /// let mut clause = generator.clause().unwrap();
    /// clause.sort_unstable();
    ///
    /// assert_eq!(clause, vec![-2, -1, 1, 2]);
    /// ```
    pub fn clause(&mut self) -> Result<CClause, err::ErrorKind> {
        self.config.validate_clause()?;

        let clause = match self.config.sampling.value {
            ClauseSampling::Strict => self.strict_clause(),
            ClauseSampling::Signed => self.signed_clause()?,
        };

        self.counters.clauses += 1;
        log::trace!(target: targets::SAMPLING, "Clause {}: {}", self.counters.clauses, clause.as_dimacs(false));

        Ok(clause)
    }

    /// A clause of distinct atoms.
    fn strict_clause(&mut self) -> CClause {
        let atom_count = self.config.atoms.value as usize;
        let length = self.config.clause_length.value;

        let clause = index::sample(&mut self.rng, atom_count, length)
            .into_iter()
            .map(|index| {
                let atom = (index + 1) as Atom;
                IntLiteral::new(atom, self.rng.gen_bool(0.5))
            })
            .collect::<CClause>();

        self.counters.draws += length;
        clause
    }

    /// A clause of distinct literals, though not (necessarily) distinct atoms.
    fn signed_clause(&mut self) -> Result<CClause, err::ErrorKind> {
        let atom_count = self.config.atoms.value;
        let length = self.config.clause_length.value;
        let max_attempts = self.config.max_attempts.value.saturating_mul(length);

        let mut clause = CClause::with_capacity(length);
        let mut present = HashSet::<IntLiteral>::with_capacity(length);
        let mut attempts = 0;

        while clause.size() < length {
            if attempts == max_attempts {
                log::error!(target: targets::SAMPLING, "Clause incomplete after {attempts} draws: {}", clause.as_dimacs(false));
                return Err(SamplingError::AttemptsExhausted { attempts }.into());
            }
            attempts += 1;

            let atom = self.rng.gen_range(1..=atom_count);
            let literal = IntLiteral::new(atom, self.rng.gen_bool(0.5));

            if present.insert(literal) {
                clause.push(literal);
            }
        }

        log::trace!(target: targets::SAMPLING, "{} draws discarded", attempts - length);
        self.counters.draws += attempts;
        Ok(clause)
    }
}
