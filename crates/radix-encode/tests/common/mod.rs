//! Shared helpers for brute-force checks of encodings.

#![allow(dead_code)]

use radix_base::{Literal, VariableAllocator};
use radix_encode::gates::one_literals;
use radix_format::Formula;

/// Allocates `n` unconstrained input literals.
pub fn free_inputs(formula: &mut Formula, n: usize) -> Vec<Literal> {
    one_literals(&formula.allocate_n(n))
}

/// Fixes every input according to the bits of `mask`.
pub fn assume(ins: &[Literal], mask: u32) -> Vec<Literal> {
    ins.iter()
        .enumerate()
        .map(|(i, &lit)| if mask >> i & 1 == 1 { lit } else { !lit })
        .collect()
}

/// Whether the input assignment `mask` extends to a model.
///
/// Every auxiliary variable of the encodings under test is fixed by unit
/// propagation once the inputs are, so no search is needed.
pub fn is_model(formula: &Formula, ins: &[Literal], mask: u32) -> bool {
    match formula.propagate(&assume(ins, mask)) {
        Some(assignment) => {
            assert!(assignment.is_complete(), "propagation left variables open");
            true
        }
        None => false,
    }
}

/// Counts input assignments that extend to a model.
pub fn count_models(formula: &Formula, ins: &[Literal]) -> usize {
    (0..1u32 << ins.len())
        .filter(|&mask| is_model(formula, ins, mask))
        .count()
}

/// Value of `lit` once the inputs are fixed by `mask`.
pub fn value_under(formula: &Formula, ins: &[Literal], mask: u32, lit: Literal) -> bool {
    let assignment = formula
        .propagate(&assume(ins, mask))
        .expect("inputs alone must not conflict");
    assignment.value(lit).expect("literal left unassigned")
}

/// Binomial coefficient.
pub fn binomial(n: usize, k: usize) -> usize {
    if k > n {
        return 0;
    }
    (0..k).fold(1, |acc, i| acc * (n - i) / (i + 1))
}

/// Weighted sum of the inputs set in `mask`.
pub fn weighted_sum(weights: &[u64], mask: u32) -> u64 {
    weights
        .iter()
        .enumerate()
        .filter(|&(i, _)| mask >> i & 1 == 1)
        .map(|(_, &w)| w)
        .sum()
}
