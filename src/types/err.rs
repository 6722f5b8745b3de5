//! Error types used in the library.
//!
//! - Configuration errors are found before any clause is generated, and before any file is opened.
//! - Sampling errors guard against a sampler which fails to find a clause.
//! - IO errors are the kind of error returned when writing a formula fails.
//!
//! Names of the error enums --- for the most part --- overlap with corresponding structs.
//  As such, throughout the library err::{self} is often used to prefix use of the types with `err::`.

#[derive(Clone, Debug, Eq, PartialEq)]
pub enum ErrorKind {
    Config(ConfigError),
    Sampling(SamplingError),
    Io(std::io::ErrorKind),
}

impl std::fmt::Display for ErrorKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Config(e) => write!(f, "configuration error: {e}"),
            Self::Sampling(e) => write!(f, "sampling error: {e}"),
            Self::Io(e) => write!(f, "io error: {e}"),
        }
    }
}

impl std::error::Error for ErrorKind {}

/// Noted errors in a configuration.
#[derive(Clone, Debug, Eq, PartialEq)]
pub enum ConfigError {
    /// Some clause is required, though no atoms are available to write one.
    NoVariables,

    /// An option is outside of the bounds of the option.
    OutOfRange {
        option: &'static str,
        value: String,
        min: String,
        max: String,
    },

    /// There are fewer (distinct) literals available than are required for a clause.
    ClauseTooLong { literals: usize, available: u64 },
}

impl std::fmt::Display for ConfigError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::NoVariables => write!(f, "clauses were requested over zero variables"),

            Self::OutOfRange {
                option,
                value,
                min,
                max,
            } => write!(f, "{option} requires a value between {min} and {max}, found {value}"),

            Self::ClauseTooLong {
                literals,
                available,
            } => write!(
                f,
                "clauses of {literals} literals were requested, though only {available} literals are available"
            ),
        }
    }
}

impl From<ConfigError> for ErrorKind {
    fn from(e: ConfigError) -> Self {
        ErrorKind::Config(e)
    }
}

/// Noted errors when sampling a clause.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum SamplingError {
    /// The bound on draws for a single clause was reached before the clause was complete.
    AttemptsExhausted { attempts: usize },
}

impl std::fmt::Display for SamplingError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::AttemptsExhausted { attempts } => {
                write!(f, "no clause was completed within {attempts} draws")
            }
        }
    }
}

impl From<SamplingError> for ErrorKind {
    fn from(e: SamplingError) -> Self {
        ErrorKind::Sampling(e)
    }
}

impl From<std::io::Error> for ErrorKind {
    fn from(e: std::io::Error) -> Self {
        ErrorKind::Io(e.kind())
    }
}
