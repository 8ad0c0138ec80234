//! Truth-table tests for the Tseitin gates.

mod common;

use common::{free_inputs, value_under};
use radix_encode::gates::*;
use radix_format::Formula;

const BOOLS: [bool; 2] = [false, true];

fn mask_of(bits: &[bool]) -> u32 {
    bits.iter()
        .enumerate()
        .map(|(i, &b)| u32::from(b) << i)
        .sum()
}

#[test]
fn test_binary_gate_truth_tables() {
    for a in BOOLS {
        for b in BOOLS {
            let mut formula = Formula::new();
            let x = free_inputs(&mut formula, 2);
            let or = compute_or(&mut formula, x[0], x[1]);
            let and = compute_and(&mut formula, x[0], x[1]);
            let xor = compute_xor(&mut formula, x[0], x[1]);

            let mask = mask_of(&[a, b]);
            assert_eq!(value_under(&formula, &x, mask, or), a || b, "OR({a}, {b})");
            assert_eq!(value_under(&formula, &x, mask, and), a && b, "AND({a}, {b})");
            assert_eq!(value_under(&formula, &x, mask, xor), a ^ b, "XOR({a}, {b})");
        }
    }
}

#[test]
fn test_half_adder() {
    for a in BOOLS {
        for b in BOOLS {
            let mut formula = Formula::new();
            let x = free_inputs(&mut formula, 2);
            let (sum, carry) = compute_half_add(&mut formula, x[0], x[1]);

            let mask = mask_of(&[a, b]);
            let total = u8::from(a) + u8::from(b);
            assert_eq!(value_under(&formula, &x, mask, sum), total & 1 == 1);
            assert_eq!(value_under(&formula, &x, mask, carry), total >= 2);
        }
    }
}

#[test]
fn test_full_adder() {
    for mask in 0..8u32 {
        let mut formula = Formula::new();
        let x = free_inputs(&mut formula, 3);
        let (sum, carry) = compute_full_add(&mut formula, x[0], x[1], x[2]);

        let total = mask.count_ones();
        assert_eq!(value_under(&formula, &x, mask, sum), total % 2 == 1, "mask {mask:03b}");
        assert_eq!(value_under(&formula, &x, mask, carry), total >= 2, "mask {mask:03b}");
    }
}

#[test]
fn test_or_n() {
    for n in 0..5 {
        let mut formula = Formula::new();
        let x = free_inputs(&mut formula, n);
        let r = compute_or_n(&mut formula, &x);

        for mask in 0..1u32 << n {
            assert_eq!(value_under(&formula, &x, mask, r), mask != 0);
        }
    }
}

#[test]
fn test_add_n_wraps() {
    let mut formula = Formula::new();
    let x = free_inputs(&mut formula, 4);
    let (a, b) = x.split_at(2);
    let sum = compute_add_n(&mut formula, a, b);
    assert_eq!(sum.len(), 2);

    for mask in 0..16u32 {
        let lhs = mask & 0b11;
        let rhs = mask >> 2;
        let expected = (lhs + rhs) % 4;
        let got = sum
            .iter()
            .enumerate()
            .map(|(i, &bit)| u32::from(value_under(&formula, &x, mask, bit)) << i)
            .sum::<u32>();
        assert_eq!(got, expected, "{lhs} + {rhs}");
    }
}

#[test]
fn test_at_most_one() {
    for n in 0..=5 {
        let mut formula = Formula::new();
        let x = free_inputs(&mut formula, n);
        force_at_most_one(&mut formula, &x);

        for mask in 0..1u32 << n {
            let values: Vec<bool> = (0..n).map(|i| mask >> i & 1 == 1).collect();
            assert_eq!(formula.evaluate(&values), mask.count_ones() <= 1, "n={n} mask={mask:b}");
        }
    }
}

#[test]
fn test_implication_and_equivalence() {
    for mask in 0..4u32 {
        let mut formula = Formula::new();
        let x = free_inputs(&mut formula, 2);
        force_implies(&mut formula, x[0], x[1]);
        let values = [mask & 1 == 1, mask & 2 == 2];
        assert_eq!(formula.evaluate(&values), !values[0] || values[1]);

        let mut formula = Formula::new();
        let x = free_inputs(&mut formula, 2);
        force_equivalent(&mut formula, x[0], x[1]);
        assert_eq!(formula.evaluate(&values), values[0] == values[1]);
    }
}

#[test]
fn test_literal_projections() {
    use radix_base::VariableAllocator;

    let mut formula = Formula::new();
    let vars = formula.allocate_n(3);
    let ones = one_literals(&vars);
    let zeros = zero_literals(&vars);
    for (one, zero) in ones.iter().zip(&zeros) {
        assert_eq!(!*one, *zero);
    }
}
