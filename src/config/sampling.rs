use crate::structures::atom::Atom;

/// Variant readings of which literals may occur together in a clause.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, clap::ValueEnum)]
pub enum ClauseSampling {
    /// Each atom occurs at most once in a clause.
    ///
    /// Atoms are sampled without replacement, and then paired with a random polarity.
    Strict,

    /// Each literal occurs at most once in a clause, though an atom may occur with both polarities.
    ///
    /// Literals are drawn with replacement, and duplicate draws are discarded.
    Signed,
}

impl std::fmt::Display for ClauseSampling {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Strict => write!(f, "strict"),
            Self::Signed => write!(f, "signed"),
        }
    }
}

impl ClauseSampling {
    /// The minimum ClauseSampling type.
    pub const MIN: ClauseSampling = ClauseSampling::Strict;

    /// The maximum ClauseSampling type.
    pub const MAX: ClauseSampling = ClauseSampling::Signed;

    /// The count of distinct literals which may be sampled for a single clause over the given count of atoms.
    pub fn available_literals(&self, atoms: Atom) -> u64 {
        match self {
            Self::Strict => atoms as u64,
            Self::Signed => 2 * atoms as u64,
        }
    }
}
