//! Branch-and-bound search for the mixed-radix base.
//!
//! The cost of a base is the total number of digits (counted with
//! multiplicity) needed to write every weight in it, which is the number of
//! literal copies the weighted network feeds into its sorters.

use crate::base::Base;

/// Sum of all digits of every weight under `base`, top digit included.
pub fn cost(base: &Base, weights: &[u64]) -> u64 {
    weights
        .iter()
        .map(|&w| base.convert(w).iter().sum::<u64>())
        .sum()
}

/// Sum of the digits below the open-ended top digit.
///
/// Every extension `b'` of `b` satisfies `cost(b') >= partial(b)`: extending
/// never changes the lower digits and only adds non-negative ones.
pub fn partial(base: &Base, weights: &[u64]) -> u64 {
    weights
        .iter()
        .map(|&w| base.convert(w)[..base.len()].iter().sum::<u64>())
        .sum()
}

/// Number of weights exceeding the product of `base`.
///
/// Each such weight keeps at least one non-zero digit above the current
/// ones in every extension, so `partial + heuristic` is still a lower bound.
pub fn heuristic(base: &Base, weights: &[u64]) -> u64 {
    let product = base.product();
    weights.iter().filter(|&&w| w > product).count() as u64
}

/// Depth-first branch and bound from `current`, updating `best` in place.
///
/// Only radices `p` with `current.product() * p <= max` are tried.
pub fn dfs_base(current: &Base, weights: &[u64], max: u64, best: &mut Base) {
    let mut search = Search {
        weights,
        max,
        best_cost: cost(best, weights),
        best: best.clone(),
        visited: 0,
    };
    search.visit(current);
    tracing::trace!("Base search visited {} nodes", search.visited);
    *best = search.best;
}

/// Returns the base minimizing `cost` over all bases with product at most
/// the largest weight.
///
/// The search starts from the all-binary base, which is always feasible.
/// An empty weight set yields the empty base, whose positional form is `[1]`.
pub fn optimal_base(weights: &[u64]) -> Base {
    let Some(&max) = weights.iter().max() else {
        return Base::empty();
    };

    let mut best = Base::binary_for(max);
    dfs_base(&Base::empty(), weights, max, &mut best);

    tracing::debug!("Base: {} (cost {})", best, cost(&best, weights));
    best
}

struct Search<'w> {
    weights: &'w [u64],
    max: u64,
    best: Base,
    best_cost: u64,
    visited: u64,
}

impl Search<'_> {
    fn visit(&mut self, current: &Base) {
        self.visited += 1;

        let bound = partial(current, self.weights) + heuristic(current, self.weights);
        if bound > self.best_cost {
            return;
        }

        let current_cost = cost(current, self.weights);
        if current_cost < self.best_cost {
            tracing::trace!("Improved base {} with cost {}", current, current_cost);
            self.best = current.clone();
            self.best_cost = current_cost;
        }

        let product = current.product();
        for p in 2.. {
            match product.checked_mul(p) {
                Some(next) if next <= self.max => self.visit(&current.extended(p)),
                _ => break,
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_cost_components() {
        let weights = [5, 7, 1];
        let base = Base::new(vec![2]);
        // 5 = 1 + 2*2, 7 = 1 + 2*3, 1 = 1
        assert_eq!(cost(&base, &weights), 3 + 4 + 1);
        assert_eq!(partial(&base, &weights), 3);
        assert_eq!(heuristic(&base, &weights), 2);
    }

    #[test]
    fn test_empty_weights() {
        let base = optimal_base(&[]);
        assert!(base.is_empty());
        assert_eq!(base.positional(), vec![1]);
    }

    #[test]
    fn test_prefers_matching_radix() {
        // Every weight is a multiple of 3: radix 3 packs each into one digit.
        let base = optimal_base(&[3, 3, 3, 9]);
        assert_eq!(cost(&base, &[3, 3, 3, 9]), 4);
        assert_eq!(base.radices()[0], 3);
    }

    #[test]
    fn test_never_worse_than_binary() {
        let weights = [13, 6, 22, 1, 17];
        let best = optimal_base(&weights);
        assert!(cost(&best, &weights) <= cost(&Base::binary_for(22), &weights));
        assert!(best.product() <= 22);
    }

    #[test]
    fn test_unit_weights_need_no_radix() {
        assert!(optimal_base(&[1, 1, 1]).is_empty());
    }
}
