/*!
An atom (aka. a 'variable').

Atoms are positive integers.
A formula declares some count *m* of atoms, and each atom of the formula is drawn from [1..=*m*].

```rust
# use rand_cnf::structures::atom::Atom;
let m: Atom = 30;
let atoms = (1..=m).collect::<Vec<Atom>>();
assert_eq!(atoms.len(), 30);
```

Zero is never an atom, as in the DIMACS representation `0` terminates a clause.

# Notes
- In the SAT literature these are often called 'variables' while in the logic literature these are often called 'atoms'.
- As literals are signed integers, the largest atom is bounded by [MAX_ATOM].
*/

/// An atom, aka. a 'variable'.
pub type Atom = u32;

/// The largest atom which may be paired with a polarity as an [IntLiteral](crate::structures::literal::IntLiteral).
pub const MAX_ATOM: Atom = i32::MAX as Atom;
