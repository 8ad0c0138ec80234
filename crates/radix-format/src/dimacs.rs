//! DIMACS CNF reader and writer.
//!
//! Standard format used in SAT competitions.

use radix_base::{ClauseEmitter, Error, Literal, Result, VariableAllocator};
use std::fmt::Display;
use std::io::Read;
use std::str::FromStr;

use crate::formula::Formula;

/// A DIMACS CNF formula in raw signed-integer form.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DimacsCnf {
    /// Number of variables.
    pub num_vars: usize,
    /// Clauses as vectors of literals.
    pub clauses: Vec<Vec<i64>>,
}

impl DimacsCnf {
    /// Parses DIMACS CNF from a reader.
    pub fn from_reader<R: Read>(mut reader: R) -> Result<Self> {
        let mut text = String::new();
        reader.read_to_string(&mut text)?;
        Self::from_str(&text)
    }

    /// Parses DIMACS CNF from a string.
    ///
    /// Comment lines are dropped and the rest is read as one token stream,
    /// so a clause may span lines. Only `0` ends a clause; a lone `0` is the
    /// empty clause.
    pub fn from_str(s: &str) -> Result<Self> {
        let mut tokens = s
            .lines()
            .map(str::trim)
            .filter(|line| !line.starts_with('c'))
            .flat_map(str::split_whitespace);

        let (num_vars, declared) = parse_header(&mut tokens)?;
        let mut clauses = Vec::with_capacity(declared);
        let mut clause = Vec::new();

        for token in tokens {
            match parse_number::<i64>(Some(token), "literal")? {
                0 => clauses.push(std::mem::take(&mut clause)),
                lit => clause.push(lit),
            }
        }
        if !clause.is_empty() {
            clauses.push(clause);
        }

        if clauses.len() != declared {
            tracing::debug!(
                "DIMACS header declares {} clauses, found {}",
                declared,
                clauses.len()
            );
        }

        Ok(Self { num_vars, clauses })
    }

    /// Converts to DIMACS string.
    #[must_use]
    pub fn to_dimacs(&self) -> String {
        let mut out = String::new();
        out.push_str(&format!("p cnf {} {}\n", self.num_vars, self.clauses.len()));
        for clause in &self.clauses {
            for lit in clause {
                out.push_str(&format!("{lit} "));
            }
            out.push_str("0\n");
        }
        out
    }

    /// Rebuilds a typed `Formula`.
    ///
    /// Fails if a literal refers to a variable beyond the declared count.
    pub fn to_formula(&self) -> Result<Formula> {
        let mut formula = Formula::new();
        let _ = formula.allocate_n(self.num_vars);
        for raw in &self.clauses {
            let clause = raw
                .iter()
                .map(|&value| {
                    Literal::from_dimacs(value)
                        .filter(|lit| (lit.var.to_dimacs() as usize) <= self.num_vars)
                        .ok_or_else(|| {
                            Error::Serialization(format!("Literal {value} out of range"))
                        })
                })
                .collect::<Result<Vec<_>>>()?;
            formula.emit(&clause);
        }
        Ok(formula)
    }
}

impl From<&Formula> for DimacsCnf {
    fn from(formula: &Formula) -> Self {
        Self {
            num_vars: formula.num_vars() as usize,
            clauses: formula
                .clauses()
                .iter()
                .map(|clause| clause.iter().map(Literal::to_dimacs).collect())
                .collect(),
        }
    }
}

/// Reads `p cnf <vars> <clauses>`, returning both counts.
fn parse_header<'a>(tokens: &mut impl Iterator<Item = &'a str>) -> Result<(usize, usize)> {
    if !matches!((tokens.next(), tokens.next()), (Some("p"), Some("cnf"))) {
        return Err(Error::Serialization(
            "DIMACS header 'p cnf ...' not found".to_string(),
        ));
    }
    let num_vars = parse_number(tokens.next(), "variable count")?;
    let num_clauses = parse_number(tokens.next(), "clause count")?;
    Ok((num_vars, num_clauses))
}

fn parse_number<T>(token: Option<&str>, what: &str) -> Result<T>
where
    T: FromStr,
    T::Err: Display,
{
    let token = token.ok_or_else(|| Error::Serialization(format!("Missing {what}")))?;
    token
        .parse()
        .map_err(|e| Error::Serialization(format!("Invalid {what} '{token}': {e}")))
}
