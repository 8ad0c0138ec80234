//! Unit propagation over a finished clause list.
//!
//! A plain fixed-point loop, not a watched-literal scheme: it is meant for
//! checking encodings where every auxiliary variable is functionally
//! determined by the inputs, not for solving.

use radix_base::Literal;

/// Partial assignment produced by propagation, indexed by variable ID.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Assignment {
    values: Vec<Option<bool>>,
}

impl Assignment {
    /// Returns the truth value of a literal, if its variable is assigned.
    pub fn value(&self, lit: Literal) -> Option<bool> {
        self.values[lit.var.id() as usize].map(|v| v != lit.negated)
    }

    /// Whether every variable received a value.
    pub fn is_complete(&self) -> bool {
        self.values.iter().all(Option::is_some)
    }

    /// Number of assigned variables.
    pub fn assigned(&self) -> usize {
        self.values.iter().filter(|v| v.is_some()).count()
    }

    fn assign(&mut self, lit: Literal) -> bool {
        let slot = &mut self.values[lit.var.id() as usize];
        match *slot {
            Some(v) => v != lit.negated,
            None => {
                *slot = Some(!lit.negated);
                true
            }
        }
    }
}

/// Propagates `assumptions` through `clauses` until a fixed point.
///
/// Returns `None` on conflict, including conflicting assumptions and empty
/// clauses.
pub fn propagate(
    num_vars: usize,
    clauses: &[Vec<Literal>],
    assumptions: &[Literal],
) -> Option<Assignment> {
    let mut assignment = Assignment {
        values: vec![None; num_vars],
    };

    for &lit in assumptions {
        if !assignment.assign(lit) {
            return None;
        }
    }

    let mut rounds = 0usize;
    loop {
        let mut changed = false;
        for clause in clauses {
            let mut satisfied = false;
            let mut open = 0usize;
            let mut unit = None;
            for &lit in clause {
                match assignment.value(lit) {
                    Some(true) => {
                        satisfied = true;
                        break;
                    }
                    Some(false) => {}
                    None => {
                        open += 1;
                        unit = Some(lit);
                    }
                }
            }
            if satisfied {
                continue;
            }
            match (open, unit) {
                (0, _) => return None,
                (1, Some(lit)) => {
                    assignment.assign(lit);
                    changed = true;
                }
                _ => {}
            }
        }
        rounds += 1;
        if !changed {
            break;
        }
    }

    tracing::trace!(
        "Propagation settled after {} rounds, {} of {} vars assigned",
        rounds,
        assignment.assigned(),
        num_vars
    );
    Some(assignment)
}
