//! Brute-force checks of mixed-radix weighted threshold networks.

mod common;

use common::{count_models, free_inputs, value_under, weighted_sum};
use radix_base::Error;
use radix_encode::{
    optimal_base, Base, BaseStrategy, Encoder, EncoderConfig, PairwiseNetwork, SorterNetwork,
};
use radix_format::Formula;

/// Checks `ge_threshold` for every threshold up to one past the total.
fn check_thresholds(weights: &[u64], base: &Base) {
    let total: u64 = weights.iter().sum();

    for threshold in 0..=total + 1 {
        let mut formula = Formula::new();
        let network = PairwiseNetwork::new(&mut formula);
        let lits = free_inputs(&mut formula, weights.len());
        let net = SorterNetwork::build(&mut formula, &network, &lits, weights, base);
        let ge = net.ge_threshold(&mut formula, threshold);

        for mask in 0..1u32 << weights.len() {
            assert_eq!(
                value_under(&formula, &lits, mask, ge),
                weighted_sum(weights, mask) >= threshold,
                "weights {weights:?} base {base} threshold {threshold} mask {mask:b}"
            );
        }
    }
}

#[test]
fn test_small_weights_every_base() {
    let weights = [1, 2, 3];
    for radices in [vec![], vec![2], vec![3], vec![2, 2], vec![2, 3], vec![3, 2], vec![4]] {
        check_thresholds(&weights, &Base::new(radices));
    }
}

#[test]
fn test_optimal_base_networks() {
    for weights in [
        vec![5, 3, 3, 1, 7],
        vec![6, 6, 4, 2],
        vec![9, 3, 1],
        vec![10, 10, 1, 1, 5],
    ] {
        check_thresholds(&weights, &optimal_base(&weights));
    }
}

#[test]
fn test_unit_and_zero_weights() {
    check_thresholds(&[1, 1, 1, 1], &Base::empty());
    check_thresholds(&[0, 4, 0, 2], &Base::new(vec![2, 2]));
}

#[test]
fn test_explicit_digit_vector() {
    let weights = [4, 3, 2, 1];
    let base = Base::new(vec![3]);
    let mut formula = Formula::new();
    let network = PairwiseNetwork::new(&mut formula);
    let lits = free_inputs(&mut formula, weights.len());
    let net = SorterNetwork::build(&mut formula, &network, &lits, &weights, &base);

    // 7 = 1 + 2 * 3
    let ge = net.ge(&mut formula, &[1, 2]);
    for mask in 0..16 {
        assert_eq!(value_under(&formula, &lits, mask, ge), weighted_sum(&weights, mask) >= 7);
    }
}

#[test]
fn test_encoder_force_weighted_bounds() {
    let weights = [3, 5, 2, 4];

    for strategy in [
        BaseStrategy::Optimal,
        BaseStrategy::Binary,
        BaseStrategy::Fixed(Base::new(vec![3])),
    ] {
        for ordering_clauses in [false, true] {
            let config = EncoderConfig {
                ordering_clauses,
                base: strategy.clone(),
            };
            for threshold in 0..=15 {
                let mut formula = Formula::new();
                let lits = free_inputs(&mut formula, weights.len());
                let mut encoder = Encoder::with_config(&mut formula, config.clone());
                encoder.force_weighted_ge(&lits, &weights, threshold).unwrap();
                let expected = (0..16u32)
                    .filter(|&m| weighted_sum(&weights, m) >= threshold)
                    .count();
                assert_eq!(count_models(&formula, &lits), expected, "sum >= {threshold}");

                let mut formula = Formula::new();
                let lits = free_inputs(&mut formula, weights.len());
                let mut encoder = Encoder::with_config(&mut formula, config.clone());
                encoder.force_weighted_le(&lits, &weights, threshold).unwrap();
                let expected = (0..16u32)
                    .filter(|&m| weighted_sum(&weights, m) <= threshold)
                    .count();
                assert_eq!(count_models(&formula, &lits), expected, "sum <= {threshold}");
            }
        }
    }
}

#[test]
fn test_encoder_cardinality() {
    let mut formula = Formula::new();
    let lits = free_inputs(&mut formula, 5);
    let mut encoder = Encoder::new(&mut formula);
    encoder.at_least(&lits, 2);
    encoder.at_most(&lits, 3);
    // C(5,2) + C(5,3)
    assert_eq!(count_models(&formula, &lits), 20);

    let mut formula = Formula::new();
    let lits = free_inputs(&mut formula, 5);
    let mut encoder = Encoder::new(&mut formula);
    encoder.exactly(&lits, 1);
    assert_eq!(count_models(&formula, &lits), 5);

    let mut formula = Formula::new();
    let lits = free_inputs(&mut formula, 5);
    let mut encoder = Encoder::new(&mut formula);
    encoder.at_most_one(&lits);
    assert_eq!(count_models(&formula, &lits), 6);
}

#[test]
fn test_encoder_rejects_mismatch() {
    let mut formula = Formula::new();
    let lits = free_inputs(&mut formula, 3);
    let mut encoder = Encoder::new(&mut formula);
    assert!(matches!(
        encoder.force_weighted_ge(&lits, &[1, 2], 1),
        Err(Error::LengthMismatch { literals: 3, weights: 2 })
    ));
}

#[test]
fn test_sorted_outputs_via_encoder() {
    let mut formula = Formula::new();
    let lits = free_inputs(&mut formula, 4);
    let mut encoder = Encoder::new(&mut formula);
    let outs = encoder.sort(&lits);
    for mask in 0..16u32 {
        let k = mask.count_ones() as usize;
        for (i, &out) in outs.iter().enumerate() {
            assert_eq!(value_under(&formula, &lits, mask, out), i < k);
        }
    }
}
