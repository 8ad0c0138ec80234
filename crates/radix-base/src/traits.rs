//! Capability traits separating the encoders from the formula sink.
//!
//! Every encoder in the workspace is generic over these two traits, so the
//! same networks can be emitted into an in-memory `Formula`, streamed to a
//! file, or fed straight into a solver.

use crate::types::{Literal, Variable};

/// Source of fresh Boolean variables.
///
/// Implementations must never hand out the same variable twice during one
/// compilation.
pub trait VariableAllocator {
    /// Allocates a fresh variable.
    fn allocate(&mut self) -> Variable;

    /// Allocates `n` fresh variables.
    fn allocate_n(&mut self, n: usize) -> Vec<Variable> {
        (0..n).map(|_| self.allocate()).collect()
    }
}

/// Sink for finished clauses.
pub trait ClauseEmitter {
    /// Records one clause. Call order is preserved; no simplification.
    fn emit(&mut self, clause: &[Literal]);
}

/// Anything that can both allocate variables and record clauses.
///
/// Implemented automatically for every type with both capabilities.
pub trait CnfSink: VariableAllocator + ClauseEmitter {}

impl<T: VariableAllocator + ClauseEmitter + ?Sized> CnfSink for T {}

impl<T: VariableAllocator + ?Sized> VariableAllocator for &mut T {
    fn allocate(&mut self) -> Variable {
        (**self).allocate()
    }
}

impl<T: ClauseEmitter + ?Sized> ClauseEmitter for &mut T {
    fn emit(&mut self, clause: &[Literal]) {
        (**self).emit(clause);
    }
}
