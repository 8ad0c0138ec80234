//! Literal types for radix.
//!
//! A `Variable` is an opaque handle issued by a `VariableAllocator`. It has
//! no value of its own and exposes exactly two literals: its true-sense
//! projection (`one_literal`) and its false-sense projection
//! (`zero_literal`).

mod literal;

pub use literal::{Literal, Variable};

/// Unique identifier for a variable, 0-based.
pub type VarId = u64;
