//! # radix-encode
//!
//! Compiles cardinality and pseudo-Boolean constraints into CNF.
//!
//! This crate provides:
//! - Tseitin gate encodings (`gates`)
//! - Pairwise odd-even sorting networks and cardinality constraints (`sorting`)
//! - Mixed-radix weighted threshold networks (`mixed_radix`)
//! - Branch-and-bound search for the numeral base (`base_search`)
//! - The `Encoder` facade tying them to a caller-owned sink
//!
//! # Example
//!
//! ```no_run
//! use radix_base::VariableAllocator;
//! use radix_encode::gates::one_literals;
//! use radix_encode::Encoder;
//! use radix_format::Formula;
//!
//! fn main() -> radix_base::Result<()> {
//!     let mut formula = Formula::new();
//!     let xs = one_literals(&formula.allocate_n(3));
//!
//!     let mut encoder = Encoder::new(&mut formula);
//!     encoder.force_weighted_ge(&xs, &[1, 2, 3], 4)?;
//!     encoder.at_most(&xs, 2);
//!
//!     print!("{}", formula.to_dimacs());
//!     Ok(())
//! }
//! ```

pub mod base;
pub mod base_search;
pub mod config;
pub mod encoder;
pub mod gates;
pub mod mixed_radix;
pub mod sorting;

pub use base::Base;
pub use base_search::optimal_base;
pub use config::{BaseStrategy, EncoderConfig};
pub use encoder::Encoder;
pub use mixed_radix::SorterNetwork;
pub use sorting::PairwiseNetwork;
