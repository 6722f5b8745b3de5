//! A library for generating random boolean formulas in conjunctive normal form.
//!
//! rand_cnf writes formulas in the DIMACS representation, for use as test data for satisfiability solvers.
//! A formula is parameterised by a count of atoms (aka. variables), a count of clauses, and a count of literals in each clause.
//!
//! # Orientation
//!
//! The library is designed around a [generator](crate::generator).
//!
//! Generators are built from a [configuration](crate::config) and a source of randomness.
//! Clauses may be taken from a generator one at a time, collected as a [formula](crate::structures::formula), or streamed directly to a writer in the [DIMACS](crate::io::dimacs) representation.
//!
//! Useful starting points, then, may be:
//! - The [generator] to see how clauses are sampled.
//! - The [structures] for the representation of atoms, literals, clauses, and formulas.
//! - The [configuration](crate::config) to see what features are supported.
//!
//! # Examples
//!
//! + Write a reproducible formula to a buffer.
//!
//! ```rust
//! # use rand_cnf::config::Config;
//! # use rand_cnf::generator::Generator;
//! let mut config = Config::default();
//! config.atoms.value = 5;
//! config.clauses.value = 4;
//! config.clause_length.value = 3;
//! config.seed = Some(73);
//!
//! let mut first = vec![];
//! let mut generator = Generator::from_config(config.clone()).unwrap();
//! assert!(generator.write_dimacs(&mut first).is_ok());
//!
//! let mut second = vec![];
//! let mut generator = Generator::from_config(config).unwrap();
//! assert!(generator.write_dimacs(&mut second).is_ok());
//!
//! assert_eq!(first, second);
//!
//! let dimacs = String::from_utf8(first).unwrap();
//! assert_eq!(dimacs.lines().next(), Some("p cnf 5 4"));
//! assert_eq!(dimacs.lines().count(), 5);
//! ```
//!
//! + Build a formula in memory, with a source of randomness of your choosing.
//!
//! ```rust
//! # use rand_cnf::config::Config;
//! # use rand_cnf::generator::GenericGenerator;
//! # use rand_cnf::structures::clause::Clause;
//! use rand::{rngs::StdRng, SeedableRng};
//!
//! let mut config = Config::default();
//! config.atoms.value = 3;
//! config.clause_length.value = 3;
//!
//! let mut generator = GenericGenerator::from_rng(config, StdRng::seed_from_u64(2)).unwrap();
//! let formula = generator.formula().unwrap();
//!
//! for clause in formula.clauses() {
//!     let mut atoms = clause.atoms().collect::<Vec<_>>();
//!     atoms.sort_unstable();
//!     assert_eq!(atoms, vec![1, 2, 3]);
//! }
//! ```
//!
//! # Logging
//!
//! Calls to the [log] macro are made throughout the library, against the targets listed in [misc::log].
//! No log implementation is provided by the library.
//! The binary installs [env_logger](https://docs.rs/env_logger/latest/env_logger/) when built with the `log` feature, e.g.
//!
//! ```sh
//! RUST_LOG=sampling=trace cargo run --features log -- --vars 4 --lits 4
//! ```

pub mod config;
pub mod generator;
pub mod io;
pub mod misc;
pub mod structures;
pub mod types;
