//! Tseitin gate encodings.
//!
//! `force_*` functions only emit clauses. `compute_*` functions allocate one
//! fresh variable per gate and return the literal that is equivalent to the
//! gate's output.

use radix_base::{ClauseEmitter, CnfSink, Literal, Variable};

/// Projects variables onto their true-sense literals.
pub fn one_literals(vars: &[Variable]) -> Vec<Literal> {
    vars.iter().map(Variable::one_literal).collect()
}

/// Projects variables onto their false-sense literals.
pub fn zero_literals(vars: &[Variable]) -> Vec<Literal> {
    vars.iter().map(Variable::zero_literal).collect()
}

/// Emits the empty clause, making the formula unsatisfiable.
pub fn force_contradiction<E: ClauseEmitter + ?Sized>(sink: &mut E) {
    sink.emit(&[]);
}

/// Pins `lit` to true.
pub fn force_true<E: ClauseEmitter + ?Sized>(sink: &mut E, lit: Literal) {
    sink.emit(&[lit]);
}

/// Pins `lit` to false.
pub fn force_false<E: ClauseEmitter + ?Sized>(sink: &mut E, lit: Literal) {
    sink.emit(&[!lit]);
}

/// Emits `lit => implied`.
pub fn force_implies<E: ClauseEmitter + ?Sized>(sink: &mut E, lit: Literal, implied: Literal) {
    sink.emit(&[!lit, implied]);
}

/// Emits `a <=> b`.
pub fn force_equivalent<E: ClauseEmitter + ?Sized>(sink: &mut E, a: Literal, b: Literal) {
    force_implies(sink, a, b);
    force_implies(sink, b, a);
}

/// Creates an OR gate: r <=> (a OR b).
pub fn compute_or<S: CnfSink + ?Sized>(sink: &mut S, a: Literal, b: Literal) -> Literal {
    let r = sink.allocate();

    sink.emit(&[a, b, r.zero_literal()]);
    sink.emit(&[r.one_literal(), !a]);
    sink.emit(&[r.one_literal(), !b]);

    r.one_literal()
}

/// Creates an N-ary OR gate: r <=> OR(lits).
///
/// An empty input yields a literal forced false.
pub fn compute_or_n<S: CnfSink + ?Sized>(sink: &mut S, lits: &[Literal]) -> Literal {
    let r = sink.allocate();

    let mut clause = Vec::with_capacity(lits.len() + 1);
    clause.extend_from_slice(lits);
    clause.push(r.zero_literal());
    sink.emit(&clause);

    for &lit in lits {
        sink.emit(&[r.one_literal(), !lit]);
    }

    r.one_literal()
}

/// Creates an AND gate: r <=> (a AND b).
pub fn compute_and<S: CnfSink + ?Sized>(sink: &mut S, a: Literal, b: Literal) -> Literal {
    let r = sink.allocate();

    sink.emit(&[!a, !b, r.one_literal()]);
    sink.emit(&[r.zero_literal(), a]);
    sink.emit(&[r.zero_literal(), b]);

    r.one_literal()
}

/// Creates an XOR gate: r <=> (a XOR b).
pub fn compute_xor<S: CnfSink + ?Sized>(sink: &mut S, a: Literal, b: Literal) -> Literal {
    let r = sink.allocate();

    sink.emit(&[!a, !b, r.zero_literal()]);
    sink.emit(&[!a, b, r.one_literal()]);
    sink.emit(&[a, !b, r.one_literal()]);
    sink.emit(&[a, b, r.zero_literal()]);

    r.one_literal()
}

/// Creates a half adder. Returns `(sum, carry)`.
pub fn compute_half_add<S: CnfSink + ?Sized>(
    sink: &mut S,
    a: Literal,
    b: Literal,
) -> (Literal, Literal) {
    let sum = compute_xor(sink, a, b);
    let carry = compute_and(sink, a, b);
    (sum, carry)
}

/// Creates a full adder from two half adders. Returns `(sum, carry)`.
pub fn compute_full_add<S: CnfSink + ?Sized>(
    sink: &mut S,
    a: Literal,
    b: Literal,
    carry: Literal,
) -> (Literal, Literal) {
    let (partial, first_carry) = compute_half_add(sink, a, b);
    let (sum, second_carry) = compute_half_add(sink, partial, carry);
    (sum, compute_or(sink, first_carry, second_carry))
}

/// Creates a ripple-carry adder over little-endian bit vectors.
///
/// Returns the sum bits; the carry out of the top bit is dropped.
///
/// # Panics
/// Panics if the inputs differ in length or are empty.
pub fn compute_add_n<S: CnfSink + ?Sized>(
    sink: &mut S,
    a: &[Literal],
    b: &[Literal],
) -> Vec<Literal> {
    assert_eq!(a.len(), b.len(), "adder operands must have equal width");
    assert!(!a.is_empty(), "adder operands must not be empty");

    let mut sum = Vec::with_capacity(a.len());
    let (bit, mut carry) = compute_half_add(sink, a[0], b[0]);
    sum.push(bit);

    for (&ai, &bi) in a.iter().zip(b).skip(1) {
        let (bit, next) = compute_full_add(sink, ai, bi, carry);
        sum.push(bit);
        carry = next;
    }

    sum
}

/// Pairwise at-most-one: one binary clause per unordered pair.
pub fn force_at_most_one<E: ClauseEmitter + ?Sized>(sink: &mut E, lits: &[Literal]) {
    for (i, &a) in lits.iter().enumerate() {
        for &b in &lits[i + 1..] {
            sink.emit(&[!a, !b]);
        }
    }
}
