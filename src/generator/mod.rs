/*!
The generator, from which random clauses are drawn.

A generator pairs a [configuration](crate::config) with a source of randomness.
The generator is generic over the source of randomness, and [Generator] fixes the source to [StdRng], seeded from the configuration when a seed is given.

```rust
# use rand_cnf::config::Config;
# use rand_cnf::generator::Generator;
# use rand_cnf::structures::clause::Clause;
let mut config = Config::default();
config.atoms.value = 1;
config.clause_length.value = 1;

let mut generator = Generator::from_config(config).unwrap();
let clause = generator.clause().unwrap();

assert!(clause.as_dimacs(true) == "1 0" || clause.as_dimacs(true) == "-1 0");
```

A generator may also be used with any source of randomness, via [from_rng](GenericGenerator::from_rng).
This allows for reproducible clauses in tests without relying on any global state.
*/

mod sample;

use rand::{rngs::StdRng, SeedableRng};

use crate::{
    config::Config,
    misc::log::targets::{self},
    structures::formula::Formula,
    types::err::{self},
};

/// Counts of the work done by a generator.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct Counters {
    /// The count of clauses generated.
    pub clauses: usize,

    /// The count of literal draws, i.e. candidate literals drawn, including any discarded as duplicates.
    ///
    /// This is not a count of calls to the source of randomness.
    pub draws: usize,
}

/// A generator, parameterised by a source of randomness.
pub struct GenericGenerator<R: rand::Rng> {
    /// The configuration of the generator, valid at the time of building the generator.
    config: Config,

    /// The source of randomness.
    rng: R,

    counters: Counters,
}

/// A generator using the standard source of randomness.
pub type Generator = GenericGenerator<StdRng>;

impl Generator {
    /// A generator from the given configuration.
    ///
    /// If the configuration contains a seed the generator is seeded with it, and otherwise the generator is seeded from the entropy of the system.
    pub fn from_config(config: Config) -> Result<Self, err::ErrorKind> {
        let rng = match config.seed {
            Some(seed) => StdRng::seed_from_u64(seed),
            None => StdRng::from_entropy(),
        };
        Self::from_rng(config, rng)
    }
}

impl<R: rand::Rng> GenericGenerator<R> {
    /// A generator from the given configuration and source of randomness.
    ///
    /// Any seed in the configuration is ignored.
    pub fn from_rng(config: Config, rng: R) -> Result<Self, err::ErrorKind> {
        if let Err(e) = config.validate() {
            log::error!(target: targets::GENERATOR, "Invalid configuration: {e}");
            return Err(e.into());
        }

        log::info!(target: targets::GENERATOR,
            "Generator for {} clauses of {} literals over {} atoms, with {} sampling and seed {:?}",
            config.clauses.value,
            config.clause_length.value,
            config.atoms.value,
            config.sampling.value,
            config.seed
        );

        Ok(GenericGenerator {
            config,
            rng,
            counters: Counters::default(),
        })
    }

    pub fn config(&self) -> &Config {
        &self.config
    }

    pub fn counters(&self) -> &Counters {
        &self.counters
    }

    /// A formula of freshly generated clauses, with as many clauses as configured.
    pub fn formula(&mut self) -> Result<Formula, err::ErrorKind> {
        let clause_count = self.config.clauses.value;
        let mut formula = Formula::with_capacity(self.config.atoms.value, clause_count);

        for _ in 0..clause_count {
            formula.push(self.clause()?);
        }

        Ok(formula)
    }
}
