//! A calculator session: one owned selection plus the outputs derived from it.

use crate::engine::{self, Formula};
use crate::error::Result;
use crate::types::selection::Selection;
use crate::vector;
use serde::Serialize;
use std::fmt;
use tracing::{debug, info};

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "status", content = "value", rename_all = "lowercase")]
pub enum ScoreOutput {
    Valid(f64),
    Invalid(String),
}

impl fmt::Display for ScoreOutput {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ScoreOutput::Valid(score) => write!(f, "{score:.1}"),
            ScoreOutput::Invalid(_) => f.write_str("Error: Invalid selection"),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Outcome {
    pub score: ScoreOutput,
    pub vector: Option<String>,
}

impl Outcome {
    pub fn evaluate(selection: &Selection, formula: Formula) -> Self {
        let score = match engine::compute_score_with(selection, formula) {
            Ok(score) => ScoreOutput::Valid(score),
            Err(e) => ScoreOutput::Invalid(e.to_string()),
        };
        let vector = vector::encode_vector(selection).ok();
        Self { score, vector }
    }
}

#[derive(Debug, Clone)]
pub struct Calculator {
    selection: Selection,
    formula: Formula,
    outcome: Outcome,
}

impl Default for Calculator {
    fn default() -> Self {
        Self::new(Formula::default())
    }
}

impl Calculator {
    pub fn new(formula: Formula) -> Self {
        Self::with_selection(Selection::default(), formula)
    }

    pub fn with_selection(selection: Selection, formula: Formula) -> Self {
        let outcome = Outcome::evaluate(&selection, formula);
        Self {
            selection,
            formula,
            outcome,
        }
    }

    /// Apply one change and recompute both outputs before returning.
    /// On error neither the selection nor the last outcome changes.
    pub fn select(&mut self, code: &str, label: &str) -> Result<&Outcome> {
        self.selection.set(code, label)?;
        self.outcome = Outcome::evaluate(&self.selection, self.formula);
        info!(metric = code, value = label, score = %self.outcome.score, "selection changed");
        Ok(&self.outcome)
    }

    pub fn set_formula(&mut self, formula: Formula) -> &Outcome {
        debug!(?formula, "formula changed");
        self.formula = formula;
        self.outcome = Outcome::evaluate(&self.selection, formula);
        &self.outcome
    }

    pub fn selection(&self) -> &Selection {
        &self.selection
    }

    pub fn formula(&self) -> Formula {
        self.formula
    }

    pub fn outcome(&self) -> &Outcome {
        &self.outcome
    }
}
