/*!
(The representation of) a symbol.

Symbols name sentence letters, predicates, and the letters bound by quantifiers.

By convention lowercase symbols are used for variables and instantial letters, and uppercase symbols for sentence letters and predicates.
Though, nothing in the library depends on this convention: a symbol is bound or free only with respect to the quantifiers of an expression.

```rust
# use deduction_lint::structures::symbol::Symbol;
let x: Symbol = 'x';
let f: Symbol = 'F';
assert_ne!(x, f);
```

# Notes
- Symbols are single characters, matching the surface syntax of the proofs checked.
  As such symbols are [Copy] and may be compared without allocation.
*/

/// A symbol, aka. a 'letter'.
pub type Symbol = char;
