//! # radix-format
//!
//! Formula storage and file formats for radix.
//!
//! Supports:
//! - **Formula**: in-memory sink implementing both capability traits
//! - **DIMACS CNF**: Standard SAT competition format
//! - **Propagation**: unit propagation for checking finished encodings

pub mod dimacs;
pub mod formula;
pub mod propagate;

pub use dimacs::DimacsCnf;
pub use formula::Formula;
pub use propagate::{propagate, Assignment};
