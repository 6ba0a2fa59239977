use crate::engine::{self, Formula, SubScores};
use crate::error::Result;
use crate::severity::Severity;
use crate::types::selection::{BaseMetrics, Selection};
use crate::vector;
use serde::Serialize;

/// Everything the CLI prints for one scored selection.
#[derive(Debug, Clone, Serialize)]
pub struct Calculation {
    pub score: f64,
    pub severity: Severity,
    pub vector: String,
    pub formula: Formula,
    pub sub_scores: SubScores,
    pub selection: Selection,
}

impl Calculation {
    pub fn new(selection: &Selection, formula: Formula, vector_prefix: bool) -> Result<Self> {
        let metrics = BaseMetrics::try_from(selection)?;
        let score = engine::base_score(&metrics, formula);
        let bare = vector::encode_metrics(&metrics);
        Ok(Self {
            score,
            severity: Severity::from_score(score),
            vector: if vector_prefix {
                vector::with_prefix(&bare)
            } else {
                bare
            },
            formula,
            sub_scores: engine::sub_scores(&metrics, formula),
            selection: selection.clone(),
        })
    }
}
