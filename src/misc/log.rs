/*!
Miscelanous items related to [logging](log).

Calls to the log macro are made throughout the library.
These are intended to provide useful information when checking the output of a generator.

Note, no log implementation is provided.
For more details, see [log].
*/

/// Targets to be used within a [log]! macro.
pub mod targets {
    /// Logs related to the [generator](crate::generator)
    pub const GENERATOR: &str = "generator";

    /// Logs related to sampling a clause
    pub const SAMPLING: &str = "sampling";

    /// Logs related to [DIMACS](crate::io::dimacs) output
    pub const DIMACS: &str = "dimacs";
}
