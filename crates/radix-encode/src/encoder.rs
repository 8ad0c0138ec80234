//! High-level constraint encoder.
//!
//! `Encoder` borrows a caller-owned sink for the duration of one compilation
//! and shares a single null literal between every network it builds. Unlike
//! the functions underneath it, it validates its input and reports bad
//! requests as errors instead of panicking.

use radix_base::{CnfSink, Error, Literal, Result};

use crate::base::Base;
use crate::base_search::optimal_base;
use crate::config::{BaseStrategy, EncoderConfig};
use crate::gates::{force_at_most_one, force_true};
use crate::mixed_radix::SorterNetwork;
use crate::sorting::PairwiseNetwork;

/// Compiles cardinality and pseudo-Boolean constraints into a sink.
pub struct Encoder<'s, S: CnfSink + ?Sized> {
    /// Destination for variables and clauses.
    sink: &'s mut S,
    /// Sorter builder holding the shared null literal.
    network: PairwiseNetwork,
    /// Configuration.
    config: EncoderConfig,
}

impl<'s, S: CnfSink + ?Sized> Encoder<'s, S> {
    /// Creates an encoder with default configuration.
    pub fn new(sink: &'s mut S) -> Self {
        Self::with_config(sink, EncoderConfig::default())
    }

    /// Creates an encoder with custom configuration.
    ///
    /// Allocates the null literal immediately.
    pub fn with_config(sink: &'s mut S, config: EncoderConfig) -> Self {
        let network = PairwiseNetwork::new(sink).with_ordering_clauses(config.ordering_clauses);
        Self {
            sink,
            network,
            config,
        }
    }

    /// The underlying sink.
    pub fn sink(&mut self) -> &mut S {
        self.sink
    }

    /// The sorter builder shared by all constraints.
    pub fn network(&self) -> &PairwiseNetwork {
        &self.network
    }

    /// The configuration in use.
    pub fn config(&self) -> &EncoderConfig {
        &self.config
    }

    /// A literal true in every model.
    pub fn true_literal(&self) -> Literal {
        self.network.true_literal()
    }

    /// A literal false in every model.
    pub fn false_literal(&self) -> Literal {
        self.network.null_literal()
    }

    /// Sorts `lits` into thermometer order.
    pub fn sort(&mut self, lits: &[Literal]) -> Vec<Literal> {
        self.network.sort(self.sink, lits)
    }

    /// Forces at least `k` of `lits` to be true.
    pub fn at_least(&mut self, lits: &[Literal], k: i64) {
        self.network.force_at_least(self.sink, lits, k);
    }

    /// Forces at most `k` of `lits` to be true.
    pub fn at_most(&mut self, lits: &[Literal], k: i64) {
        self.network.force_at_most(self.sink, lits, k);
    }

    /// Forces exactly `k` of `lits` to be true.
    pub fn exactly(&mut self, lits: &[Literal], k: i64) {
        self.network.force_exactly(self.sink, lits, k);
    }

    /// Forces at most one of `lits` to be true, without auxiliary variables.
    pub fn at_most_one(&mut self, lits: &[Literal]) {
        force_at_most_one(self.sink, lits);
    }

    /// Picks the numeral base for `weights` according to the configuration.
    pub fn choose_base(&self, weights: &[u64]) -> Base {
        match &self.config.base {
            BaseStrategy::Optimal => optimal_base(weights),
            BaseStrategy::Binary => Base::binary_for(weights.iter().copied().max().unwrap_or(0)),
            BaseStrategy::Fixed(base) => base.clone(),
        }
    }

    /// Builds the per-digit sorter network for a weighted sum.
    pub fn weighted_network(&mut self, lits: &[Literal], weights: &[u64]) -> Result<SorterNetwork> {
        validate_weights(lits, weights)?;
        let base = self.choose_base(weights);
        tracing::debug!(
            "Encoding weighted sum of {} literals in base {}",
            lits.len(),
            base
        );
        Ok(SorterNetwork::build(self.sink, &self.network, lits, weights, &base))
    }

    /// Returns a literal true iff `Σ weights[i] * lits[i] >= threshold`.
    pub fn weighted_ge(
        &mut self,
        lits: &[Literal],
        weights: &[u64],
        threshold: u64,
    ) -> Result<Literal> {
        if threshold == 0 {
            validate_weights(lits, weights)?;
            return Ok(self.true_literal());
        }
        let network = self.weighted_network(lits, weights)?;
        Ok(network.ge_threshold(self.sink, threshold))
    }

    /// Returns a literal true iff `Σ weights[i] * lits[i] <= threshold`.
    pub fn weighted_le(
        &mut self,
        lits: &[Literal],
        weights: &[u64],
        threshold: u64,
    ) -> Result<Literal> {
        let above = threshold.checked_add(1).ok_or_else(|| {
            Error::ThresholdOverflow(format!("threshold {threshold} has no successor"))
        })?;
        Ok(!self.weighted_ge(lits, weights, above)?)
    }

    /// Forces `Σ weights[i] * lits[i] >= threshold`.
    pub fn force_weighted_ge(
        &mut self,
        lits: &[Literal],
        weights: &[u64],
        threshold: u64,
    ) -> Result<()> {
        let lit = self.weighted_ge(lits, weights, threshold)?;
        force_true(self.sink, lit);
        Ok(())
    }

    /// Forces `Σ weights[i] * lits[i] <= threshold`.
    pub fn force_weighted_le(
        &mut self,
        lits: &[Literal],
        weights: &[u64],
        threshold: u64,
    ) -> Result<()> {
        let lit = self.weighted_le(lits, weights, threshold)?;
        force_true(self.sink, lit);
        Ok(())
    }
}

fn validate_weights(lits: &[Literal], weights: &[u64]) -> Result<()> {
    if lits.len() != weights.len() {
        return Err(Error::LengthMismatch {
            literals: lits.len(),
            weights: weights.len(),
        });
    }
    weights
        .iter()
        .try_fold(0u64, |acc, &w| acc.checked_add(w))
        .ok_or_else(|| Error::ThresholdOverflow("sum of weights exceeds u64".to_string()))?;
    Ok(())
}
