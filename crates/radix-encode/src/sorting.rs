//! Pairwise odd-even sorting networks.
//!
//! A sorter turns `n` input literals into `n` output literals in thermometer
//! order: output `k - 1` is true iff at least `k` inputs are true. Every
//! comparator is encoded in both directions, so the outputs are functionally
//! determined by the inputs.
//!
//! Odd-length sequences are padded with a single literal forced false, the
//! network's null literal. One null literal is shared by every recursive call
//! of one network.

use radix_base::{ClauseEmitter, CnfSink, Literal};

use crate::gates::{force_contradiction, force_false, force_true};

/// Encodes a comparator cell: `y1 = x1 OR x2` and `y2 = x1 AND x2`.
///
/// `y1` and `y2` must already be allocated.
pub fn force_comparator<E: ClauseEmitter + ?Sized>(
    sink: &mut E,
    x1: Literal,
    x2: Literal,
    y1: Literal,
    y2: Literal,
) {
    // min(x1, x2) <= y1, max(x1, x2) <= y2
    sink.emit(&[!x1, y1]);
    sink.emit(&[!x2, y1]);
    sink.emit(&[!x1, !x2, y2]);

    // min(x1, x2) >= y1, max(x1, x2) >= y2
    sink.emit(&[!y2, x1]);
    sink.emit(&[!y2, x2]);
    sink.emit(&[!y1, x1, x2]);
}

/// Builder for pairwise sorting networks sharing one null literal.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PairwiseNetwork {
    /// Literal forced false, used as padding.
    null: Literal,
    /// Emit `out[i + 1] => out[i]` after every merge.
    ordering_clauses: bool,
}

impl PairwiseNetwork {
    /// Allocates the null literal and forces it false.
    pub fn new<S: CnfSink + ?Sized>(sink: &mut S) -> Self {
        let null = sink.allocate().one_literal();
        force_false(sink, null);
        Self::with_null(null)
    }

    /// Reuses an existing literal that the caller has already forced false.
    #[must_use]
    pub const fn with_null(null: Literal) -> Self {
        Self {
            null,
            ordering_clauses: false,
        }
    }

    /// Enables the redundant ordering clauses between adjacent merge outputs.
    ///
    /// They do not change the set of models, only what unit propagation can
    /// derive on partial assignments.
    #[must_use]
    pub fn with_ordering_clauses(mut self, enabled: bool) -> Self {
        self.ordering_clauses = enabled;
        self
    }

    /// The shared literal forced false.
    #[must_use]
    pub const fn null_literal(&self) -> Literal {
        self.null
    }

    /// The inverse of the null literal, true in every model.
    #[must_use]
    pub const fn true_literal(&self) -> Literal {
        self.null.inverse()
    }

    /// Whether ordering clauses are emitted.
    #[must_use]
    pub const fn ordering_clauses(&self) -> bool {
        self.ordering_clauses
    }

    /// Routes consecutive input pairs through comparators.
    ///
    /// Returns the OR rail and the AND rail, each half the input length.
    ///
    /// # Panics
    /// Panics if the input length is odd.
    pub fn split<S: CnfSink + ?Sized>(
        &self,
        sink: &mut S,
        ins: &[Literal],
    ) -> (Vec<Literal>, Vec<Literal>) {
        assert!(ins.len() % 2 == 0, "split needs an even number of inputs");

        let mut upper = Vec::with_capacity(ins.len() / 2);
        let mut lower = Vec::with_capacity(ins.len() / 2);

        for pair in ins.chunks_exact(2) {
            let a = sink.allocate().one_literal();
            let b = sink.allocate().one_literal();
            upper.push(a);
            lower.push(b);
            force_comparator(sink, pair[0], pair[1], a, b);
        }

        (upper, lower)
    }

    /// Merges two sorted sequences of equal length into one of twice the
    /// length.
    ///
    /// `a` must dominate `b` position by position, which holds for the two
    /// rails produced by `split` once each is sorted.
    ///
    /// # Panics
    /// Panics if the inputs are empty or differ in length.
    pub fn merge<S: CnfSink + ?Sized>(
        &self,
        sink: &mut S,
        a: &[Literal],
        b: &[Literal],
    ) -> Vec<Literal> {
        assert!(!a.is_empty(), "merge needs non-empty inputs");
        assert_eq!(a.len(), b.len(), "merge inputs must have equal length");

        let n = a.len();
        if n == 1 {
            return vec![a[0], b[0]];
        }
        if n % 2 == 1 {
            let padded_a = self.padded(a);
            let padded_b = self.padded(b);
            let mut outs = self.merge(sink, &padded_a, &padded_b);
            outs.truncate(2 * n);
            return outs;
        }

        let (even_a, odd_a) = deinterleave(a);
        let (even_b, odd_b) = deinterleave(b);

        let evens = self.merge(sink, &even_a, &even_b);
        let odds = self.merge(sink, &odd_a, &odd_b);
        debug_assert_eq!(evens.len(), n);
        debug_assert_eq!(odds.len(), n);

        // number of bits that actually have to be merged
        let inner = n - 1;

        let mut outs = Vec::with_capacity(2 * n);
        outs.push(evens[0]);
        for _ in 0..2 * inner {
            outs.push(sink.allocate().one_literal());
        }
        outs.push(odds[n - 1]);

        for i in 0..inner {
            force_comparator(sink, evens[i + 1], odds[i], outs[2 * i + 1], outs[2 * i + 2]);
        }

        if self.ordering_clauses {
            for pair in outs.windows(2) {
                sink.emit(&[pair[0], !pair[1]]);
            }
        }

        outs
    }

    /// Sorts `ins` into thermometer order.
    pub fn sort<S: CnfSink + ?Sized>(&self, sink: &mut S, ins: &[Literal]) -> Vec<Literal> {
        match ins.len() {
            0 => Vec::new(),
            1 => ins.to_vec(),
            n if n % 2 == 1 => {
                let mut outs = self.sort(sink, &self.padded(ins));
                outs.pop();
                outs
            }
            _ => {
                let (upper, lower) = self.split(sink, ins);
                let upper = self.sort(sink, &upper);
                let lower = self.sort(sink, &lower);
                self.merge(sink, &upper, &lower)
            }
        }
    }

    /// Forces at least `k` of `ins` to be true.
    ///
    /// `k <= 0` is vacuous; `k > ins.len()` emits a contradiction.
    pub fn force_at_least<S: CnfSink + ?Sized>(&self, sink: &mut S, ins: &[Literal], k: i64) {
        let Ok(k) = usize::try_from(k) else {
            return;
        };
        if k == 0 {
            return;
        }
        if ins.len() < k {
            tracing::debug!("At-least-{} over {} inputs is infeasible", k, ins.len());
            force_contradiction(sink);
            return;
        }

        let outs = self.sort(sink, ins);
        force_true(sink, outs[k - 1]);
    }

    /// Forces at most `k` of `ins` to be true.
    ///
    /// `k < 0` emits a contradiction; `k >= ins.len()` is vacuous.
    pub fn force_at_most<S: CnfSink + ?Sized>(&self, sink: &mut S, ins: &[Literal], k: i64) {
        let Ok(k) = usize::try_from(k) else {
            tracing::debug!("At-most-{} is infeasible", k);
            force_contradiction(sink);
            return;
        };
        if ins.len() <= k {
            return;
        }

        let outs = self.sort(sink, ins);
        force_false(sink, outs[k]);
    }

    /// Forces exactly `k` of `ins` to be true, sharing one sorter for both
    /// bounds.
    pub fn force_exactly<S: CnfSink + ?Sized>(&self, sink: &mut S, ins: &[Literal], k: i64) {
        let k = match usize::try_from(k) {
            Ok(k) if k <= ins.len() => k,
            _ => {
                tracing::debug!("Exactly-{} over {} inputs is infeasible", k, ins.len());
                force_contradiction(sink);
                return;
            }
        };
        if ins.is_empty() {
            return;
        }
        let outs = self.sort(sink, ins);
        if k > 0 {
            force_true(sink, outs[k - 1]);
        }
        if k < outs.len() {
            force_false(sink, outs[k]);
        }
    }

    fn padded(&self, lits: &[Literal]) -> Vec<Literal> {
        let mut padded = Vec::with_capacity(lits.len() + 1);
        padded.extend_from_slice(lits);
        padded.push(self.null);
        padded
    }
}

/// Splits a sequence into its even-indexed and odd-indexed elements.
fn deinterleave(lits: &[Literal]) -> (Vec<Literal>, Vec<Literal>) {
    let evens = lits.iter().step_by(2).copied().collect();
    let odds = lits.iter().skip(1).step_by(2).copied().collect();
    (evens, odds)
}
