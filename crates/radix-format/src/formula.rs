//! In-memory CNF formula.

use radix_base::{ClauseEmitter, Literal, Result, VariableAllocator, Variable};
use serde::{Deserialize, Serialize};
use std::io::Write;

use crate::propagate::{self, Assignment};

/// A CNF formula built by the encoders.
///
/// Variables are numbered in allocation order; clauses are kept in emission
/// order.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Formula {
    /// Number of allocated variables.
    num_vars: u64,
    /// Emitted clauses.
    clauses: Vec<Vec<Literal>>,
}

impl Formula {
    /// Creates an empty formula.
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns the number of allocated variables.
    pub fn num_vars(&self) -> u64 {
        self.num_vars
    }

    /// Returns the number of emitted clauses.
    pub fn num_clauses(&self) -> usize {
        self.clauses.len()
    }

    /// Returns all emitted clauses.
    pub fn clauses(&self) -> &[Vec<Literal>] {
        &self.clauses
    }

    /// Writes the formula in DIMACS CNF format.
    pub fn write_dimacs<W: Write>(&self, mut writer: W) -> Result<()> {
        writeln!(writer, "p cnf {} {}", self.num_vars, self.clauses.len())?;
        for clause in &self.clauses {
            for lit in clause {
                write!(writer, "{lit} ")?;
            }
            writeln!(writer, "0")?;
        }
        Ok(())
    }

    /// Converts to DIMACS string.
    #[must_use]
    pub fn to_dimacs(&self) -> String {
        let mut out = Vec::new();
        // Writing into a Vec<u8> cannot fail.
        let _ = self.write_dimacs(&mut out);
        String::from_utf8_lossy(&out).into_owned()
    }

    /// Serializes the formula as JSON.
    pub fn to_json(&self) -> Result<String> {
        serde_json::to_string(self).map_err(|e| radix_base::Error::Serialization(e.to_string()))
    }

    /// Checks a complete assignment, indexed by variable ID.
    ///
    /// # Panics
    /// Panics if `values` is shorter than the number of variables.
    pub fn evaluate(&self, values: &[bool]) -> bool {
        assert!(values.len() as u64 >= self.num_vars, "assignment too short");
        self.clauses.iter().all(|clause| {
            clause
                .iter()
                .any(|lit| values[lit.var.id() as usize] != lit.negated)
        })
    }

    /// Runs unit propagation from the given assumptions.
    ///
    /// Returns `None` if propagation reaches a conflict.
    pub fn propagate(&self, assumptions: &[Literal]) -> Option<Assignment> {
        propagate::propagate(self.num_vars as usize, &self.clauses, assumptions)
    }
}

impl VariableAllocator for Formula {
    fn allocate(&mut self) -> Variable {
        let var = Variable::new(self.num_vars);
        self.num_vars += 1;
        var
    }
}

impl ClauseEmitter for Formula {
    fn emit(&mut self, clause: &[Literal]) {
        self.clauses.push(clause.to_vec());
    }
}
