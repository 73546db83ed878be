//! Collected outcomes of one run and their tally.

use super::outcome::{Outcome, Status};
use serde::Serialize;
use std::fmt;

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
pub struct Summary {
    pub matched: usize,
    pub mismatched: usize,
    pub not_found: usize,
    pub errors: usize,
}

impl Summary {
    pub fn total(&self) -> usize {
        self.matched + self.mismatched + self.not_found + self.errors
    }

    pub fn failed(&self) -> usize {
        self.total() - self.matched
    }
}

impl fmt::Display for Summary {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{} checked: {} matched, {} mismatched, {} not found, {} errors",
            self.total(),
            self.matched,
            self.mismatched,
            self.not_found,
            self.errors
        )
    }
}

/// Ordered outcomes, one per manifest entry.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
#[serde(transparent)]
pub struct Report {
    outcomes: Vec<Outcome>,
}

impl Report {
    pub fn new(outcomes: Vec<Outcome>) -> Self {
        Self { outcomes }
    }

    pub fn outcomes(&self) -> &[Outcome] {
        &self.outcomes
    }

    pub fn into_outcomes(self) -> Vec<Outcome> {
        self.outcomes
    }

    pub fn len(&self) -> usize {
        self.outcomes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.outcomes.is_empty()
    }

    pub fn summary(&self) -> Summary {
        let mut s = Summary::default();
        for o in &self.outcomes {
            match o.status() {
                Status::Match => s.matched += 1,
                Status::Mismatch => s.mismatched += 1,
                Status::NotFound => s.not_found += 1,
                Status::Error => s.errors += 1,
            }
        }
        s
    }

    pub fn all_matched(&self) -> bool {
        self.outcomes.iter().all(|o| o.status().is_ok())
    }
}
