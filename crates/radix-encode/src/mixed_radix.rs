//! Mixed-radix weighted threshold networks.
//!
//! A weighted sum is written digit by digit in a `Base`. Each digit gets its
//! own sorter, fed with every literal repeated as often as its weight's digit
//! says plus the carries out of the previous digit's sorter. The carry of a
//! sorter with radix `r` above it is every `r`-th output, so a sorter counts
//! in unary what a positional adder would count in binary.

use radix_base::{CnfSink, Literal};

use crate::base::Base;
use crate::gates::{compute_and, compute_or, compute_or_n};
use crate::sorting::PairwiseNetwork;

/// Outputs of one digit's sorter, in thermometer order.
pub type SorterLits = Vec<Literal>;

/// The per-digit sorters of a weighted sum, least significant digit first.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SorterNetwork {
    base: Base,
    sorters: Vec<SorterLits>,
    /// Literal forced false, doubles as the constant for trivial comparisons.
    null: Literal,
}

impl SorterNetwork {
    /// Builds one sorter per digit of `base` over the weighted literals.
    ///
    /// # Panics
    /// Panics if `lits` and `weights` differ in length.
    pub fn build<S: CnfSink + ?Sized>(
        sink: &mut S,
        network: &PairwiseNetwork,
        lits: &[Literal],
        weights: &[u64],
        base: &Base,
    ) -> Self {
        assert_eq!(lits.len(), weights.len(), "one weight per literal");

        let digits: Vec<Vec<u64>> = weights.iter().map(|&w| base.convert(w)).collect();
        let mut sorters: Vec<SorterLits> = Vec::with_capacity(base.digit_count());

        for k in 0..base.digit_count() {
            let mut ins = Vec::new();

            // carries out of the previous digit
            if let Some(prev) = sorters.last() {
                let radix = base.radix(k - 1) as usize;
                ins.extend(prev.iter().skip(radix - 1).step_by(radix).copied());
            }

            for (&lit, weight) in lits.iter().zip(&digits) {
                ins.extend(std::iter::repeat(lit).take(weight[k] as usize));
            }

            let outs = network.sort(sink, &ins);
            tracing::debug!("Size of sorter {}: {}", k, outs.len());
            sorters.push(outs);
        }

        Self {
            base: base.clone(),
            sorters,
            null: network.null_literal(),
        }
    }

    /// The base this network was built for.
    pub fn base(&self) -> &Base {
        &self.base
    }

    /// The per-digit sorters, least significant first.
    pub fn sorters(&self) -> &[SorterLits] {
        &self.sorters
    }

    /// Total number of sorter outputs across all digits.
    pub fn size(&self) -> usize {
        self.sorters.iter().map(Vec::len).sum()
    }

    /// Returns a literal true iff the weighted sum is at least the number
    /// whose digits in this network's base are `rhs` (least significant
    /// first).
    ///
    /// Digits are compared most significant first: the result at digit `i`
    /// is `GT(i) OR (GE(i) AND result(i - 1))`, starting from true.
    ///
    /// # Panics
    /// Panics if `rhs` does not have one entry per digit.
    pub fn ge<S: CnfSink + ?Sized>(&self, sink: &mut S, rhs: &[u64]) -> Literal {
        assert_eq!(rhs.len(), self.sorters.len(), "one threshold digit per sorter");

        let top = self.sorters.len() - 1;
        let mut result = !self.null;

        for (i, (sorter, &digit)) in self.sorters.iter().zip(rhs).enumerate() {
            let above = digit.saturating_add(1);
            let (gt, ge) = if i == top {
                (
                    sorter_ge(sorter, above, self.null),
                    sorter_ge(sorter, digit, self.null),
                )
            } else {
                let divisor = self.base.radix(i);
                (
                    sorter_remainder_ge(sink, sorter, divisor, above, self.null),
                    sorter_remainder_ge(sink, sorter, divisor, digit, self.null),
                )
            };

            let carried = compute_and(sink, ge, result);
            result = compute_or(sink, gt, carried);
        }

        result
    }

    /// Returns a literal true iff the weighted sum is at least `threshold`.
    pub fn ge_threshold<S: CnfSink + ?Sized>(&self, sink: &mut S, threshold: u64) -> Literal {
        let rhs = self.base.convert(threshold);
        self.ge(sink, &rhs)
    }
}

/// Literal for `count(sorter) >= target`.
///
/// Needs no clauses: a target of zero is the constant true, a target beyond
/// the sorter is the constant false, anything else is a sorter output.
pub fn sorter_ge(sorter: &[Literal], target: u64, null: Literal) -> Literal {
    if target == 0 {
        // every number is >= 0
        return !null;
    }
    if target > sorter.len() as u64 {
        return null;
    }
    sorter[target as usize - 1]
}

/// Literal for `count(sorter) % divisor >= target`.
///
/// For every window `[w, w + divisor)` of the count, the window matches when
/// output `w + target - 1` is true and output `w + divisor - 1` is false. The
/// last window may be cut short by the end of the sorter, in which case only
/// the lower end is tested.
pub fn sorter_remainder_ge<S: CnfSink + ?Sized>(
    sink: &mut S,
    sorter: &[Literal],
    divisor: u64,
    target: u64,
    null: Literal,
) -> Literal {
    if target == 0 {
        return !null;
    }
    if target > sorter.len() as u64 {
        // the sorter is not big enough to reach the target
        return null;
    }
    if divisor <= target {
        // no remainder reaches the target
        return null;
    }

    let target = target as usize;
    let divisor = usize::try_from(divisor).unwrap_or(usize::MAX);
    let mut disjunction = Vec::new();
    let mut start = 0usize;

    while start + target - 1 < sorter.len() {
        let reached = sorter[start + target - 1];
        match start.checked_add(divisor - 1).filter(|&end| end < sorter.len()) {
            Some(end) => disjunction.push(compute_and(sink, reached, !sorter[end])),
            None => disjunction.push(reached),
        }
        start = match start.checked_add(divisor) {
            Some(next) => next,
            None => break,
        };
    }

    compute_or_n(sink, &disjunction)
}
