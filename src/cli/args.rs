use std::path::PathBuf;

use clap::Parser;

use rand_cnf::{
    config::{defaults, ClauseSampling, Config},
    structures::atom::Atom,
    types::err::ConfigError,
};

/// Generates a random formula in conjunctive normal form, written in the DIMACS format
#[derive(Parser, Debug)]
#[command(version, about, long_about = None)]
pub struct Args {
    /// Number of variables
    #[arg(long, default_value_t = defaults::ATOMS)]
    pub vars: Atom,

    /// Number of clauses
    #[arg(long, default_value_t = defaults::CLAUSES)]
    pub clauses: usize,

    /// Literals per clause
    #[arg(long, default_value_t = defaults::CLAUSE_LENGTH)]
    pub lits: usize,

    /// Output CNF file
    #[arg(long, default_value = defaults::OUTPUT_PATH)]
    pub out: PathBuf,

    /// Seed for the source of randomness, for reproducible output
    #[arg(long)]
    pub seed: Option<u64>,

    /// Whether an atom may occur with both polarities in a clause ('signed') or at most once ('strict')
    #[arg(long, default_value_t = defaults::CLAUSE_SAMPLING, value_enum)]
    pub sampling: ClauseSampling,

    /// The most draws made for each literal of a clause with 'signed' sampling
    #[arg(long, default_value_t = defaults::MAX_ATTEMPTS)]
    pub max_attempts: usize,
}

/// A [Config] from the given arguments, if each argument is within the bounds of its option.
pub fn config_from_args(args: &Args) -> Result<Config, ConfigError> {
    let mut the_config = Config::default();

    the_config.atoms.set(args.vars)?;
    the_config.clauses.set(args.clauses)?;
    the_config.clause_length.set(args.lits)?;
    the_config.sampling.set(args.sampling)?;
    the_config.max_attempts.set(args.max_attempts)?;
    the_config.seed = args.seed;

    Ok(the_config)
}

#[cfg(test)]
mod args_tests {
    use super::*;

    #[test]
    fn defaults() {
        let args = Args::parse_from(["rand_cnf"]);
        assert_eq!(args.vars, 30);
        assert_eq!(args.clauses, 30);
        assert_eq!(args.lits, 3);
        assert_eq!(args.out, PathBuf::from("random.cnf"));
        assert_eq!(args.sampling, ClauseSampling::Strict);
        assert!(args.seed.is_none());
    }

    #[test]
    fn all_flags() {
        let args = Args::parse_from([
            "rand_cnf",
            "--vars",
            "4",
            "--clauses",
            "2",
            "--lits",
            "5",
            "--out",
            "x.cnf",
            "--seed",
            "8",
            "--sampling",
            "signed",
        ]);
        let config = config_from_args(&args).unwrap();
        assert_eq!(config.atoms.value, 4);
        assert_eq!(config.clauses.value, 2);
        assert_eq!(config.clause_length.value, 5);
        assert_eq!(config.sampling.value, ClauseSampling::Signed);
        assert_eq!(config.seed, Some(8));
        assert!(config.validate().is_ok());
    }

    #[test]
    fn non_numeric_refused() {
        assert!(Args::try_parse_from(["rand_cnf", "--vars", "many"]).is_err());
        assert!(Args::try_parse_from(["rand_cnf", "--lits", "-1"]).is_err());
    }

    #[test]
    fn zero_literals_refused() {
        let args = Args::parse_from(["rand_cnf", "--lits", "0"]);
        assert!(matches!(
            config_from_args(&args),
            Err(ConfigError::OutOfRange { option: "lits", .. })
        ));
    }
}
