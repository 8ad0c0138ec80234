//! # radix-base
//!
//! Core types shared by the radix constraint compiler crates.
//!
//! This crate provides the foundational building blocks used across all other
//! radix crates, including:
//!
//! - **Literals**: `Variable` handles and their two `Literal` projections
//! - **Capabilities**: the `VariableAllocator` and `ClauseEmitter` traits the
//!   encoders are generic over
//! - **Error Types**: Unified error handling across the workspace

pub mod error;
pub mod traits;
pub mod types;

pub use error::{Error, Result};
pub use traits::{ClauseEmitter, CnfSink, VariableAllocator};
pub use types::{Literal, VarId, Variable};
