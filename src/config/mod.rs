/*!
Configuration of a generator.

All configuration for a generator is contained within [Config].
Bounded options are [ConfigOption]s, and the default value of each option is found in [defaults].

A configuration is [validated](Config::validate) when a generator is built, so a generator only ever holds a configuration from which each requested clause may be sampled.
*/

mod config_option;
pub use config_option::ConfigOption;

pub mod defaults;

mod sampling;
pub use sampling::ClauseSampling;

use crate::{
    structures::atom::{Atom, MAX_ATOM},
    types::err::ConfigError,
};

/// The primary configuration structure.
#[derive(Clone, Debug)]
pub struct Config {
    /// The count of atoms declared by a formula.
    pub atoms: ConfigOption<Atom>,

    /// The count of clauses in a formula.
    pub clauses: ConfigOption<usize>,

    /// The count of literals in each clause.
    pub clause_length: ConfigOption<usize>,

    /// Which literals may occur together in a clause.
    pub sampling: ConfigOption<ClauseSampling>,

    /// The bound on draws for each literal of a clause, when sampling with replacement.
    ///
    /// A clause of *n* literals is abandoned after *n* times this many draws.
    pub max_attempts: ConfigOption<usize>,

    /// A seed for the source of randomness, if reproducible formulas are wanted.
    pub seed: Option<u64>,
}

impl Default for Config {
    fn default() -> Self {
        use defaults::*;
        Config {
            atoms: ConfigOption {
                name: "vars",
                min: 0,
                max: MAX_ATOM,
                value: ATOMS,
            },

            clauses: ConfigOption {
                name: "clauses",
                min: 0,
                max: usize::MAX,
                value: CLAUSES,
            },

            clause_length: ConfigOption {
                name: "lits",
                min: 1,
                max: usize::MAX,
                value: CLAUSE_LENGTH,
            },

            sampling: ConfigOption {
                name: "sampling",
                min: ClauseSampling::MIN,
                max: ClauseSampling::MAX,
                value: CLAUSE_SAMPLING,
            },

            max_attempts: ConfigOption {
                name: "max_attempts",
                min: 1,
                max: usize::MAX,
                value: MAX_ATTEMPTS,
            },

            seed: None,
        }
    }
}

impl Config {
    /// Ok if every clause requested by the configuration may be sampled.
    ///
    /// ```rust
    /// # use rand_cnf::config::Config;
    /// # use rand_cnf::types::err::ConfigError;
    /// let mut config = Config::default();
    /// config.atoms.value = 2;
    /// config.clause_length.value = 3;
    ///
    /// assert_eq!(
    ///     config.validate(),
    ///     Err(ConfigError::ClauseTooLong { literals: 3, available: 2 })
    /// );
    ///
    /// config.clauses.value = 0;
    /// assert!(config.validate().is_ok());
    /// ```
    pub fn validate(&self) -> Result<(), ConfigError> {
        self.atoms.validate()?;
        self.clauses.validate()?;
        self.clause_length.validate()?;
        self.sampling.validate()?;
        self.max_attempts.validate()?;

        match self.clauses.value {
            0 => Ok(()),
            _ => self.validate_clause(),
        }
    }

    /// Ok if a single clause may be sampled.
    pub fn validate_clause(&self) -> Result<(), ConfigError> {
        if self.atoms.value == 0 {
            return Err(ConfigError::NoVariables);
        }

        let available = self.sampling.value.available_literals(self.atoms.value);
        if self.clause_length.value as u64 > available {
            return Err(ConfigError::ClauseTooLong {
                literals: self.clause_length.value,
                available,
            });
        }

        Ok(())
    }
}

#[cfg(test)]
mod config_tests {
    use super::*;

    #[test]
    fn default_is_valid() {
        assert!(Config::default().validate().is_ok());
    }

    #[test]
    fn empty_clause_rejected() {
        let mut config = Config::default();
        config.clause_length.value = 0;
        assert!(matches!(
            config.validate(),
            Err(ConfigError::OutOfRange { option: "lits", .. })
        ));
    }

    #[test]
    fn no_variables() {
        let mut config = Config::default();
        config.atoms.value = 0;
        assert_eq!(config.validate(), Err(ConfigError::NoVariables));

        config.clauses.value = 0;
        assert!(config.validate().is_ok());
    }

    #[test]
    fn signed_sampling_doubles_available_literals() {
        let mut config = Config::default();
        config.atoms.value = 3;
        config.clause_length.value = 6;
        assert_eq!(
            config.validate(),
            Err(ConfigError::ClauseTooLong {
                literals: 6,
                available: 3
            })
        );

        config.sampling.value = ClauseSampling::Signed;
        assert!(config.validate().is_ok());

        config.clause_length.value = 7;
        assert_eq!(
            config.validate(),
            Err(ConfigError::ClauseTooLong {
                literals: 7,
                available: 6
            })
        );
    }
}
