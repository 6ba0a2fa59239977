//! CVSS 3.1 Base Score computation.

use crate::error::Result;
use crate::types::metric::{MetricValue, Scope};
use crate::types::selection::{BaseMetrics, Selection};
use serde::{Deserialize, Serialize};
use tracing::debug;

/// Which Base Score equation to apply.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Formula {
    /// `ceil((6.42*ISS + 8.22*AV*AC*PR*UI) * 10) / 10`. Scope is ignored and
    /// the result is not capped. Kept as the default so scores match earlier output.
    #[default]
    Simplified,
    /// The full CVSS 3.1 equations with the Scope Changed branch and the 10.0 cap.
    Official,
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct SubScores {
    pub iss: f64,
    pub impact: f64,
    pub exploitability: f64,
}

pub fn compute_score(selection: &Selection) -> Result<f64> {
    compute_score_with(selection, Formula::Simplified)
}

pub fn compute_score_with(selection: &Selection, formula: Formula) -> Result<f64> {
    let metrics = BaseMetrics::try_from(selection)?;
    Ok(base_score(&metrics, formula))
}

pub fn sub_scores(metrics: &BaseMetrics, formula: Formula) -> SubScores {
    let c = metrics.confidentiality.weight();
    let i = metrics.integrity.weight();
    let a = metrics.availability.weight();
    let iss = 1.0 - ((1.0 - c) * (1.0 - i) * (1.0 - a));

    match formula {
        Formula::Simplified => SubScores {
            iss,
            impact: 6.42 * iss,
            exploitability: 8.22
                * metrics.attack_vector.weight()
                * metrics.attack_complexity.weight()
                * metrics.privileges_required.weight()
                * metrics.user_interaction.weight(),
        },
        Formula::Official => {
            let impact = match metrics.scope {
                Scope::Unchanged => 6.42 * iss,
                Scope::Changed => 7.52 * (iss - 0.029) - 3.25 * (iss - 0.02).powi(15),
            };
            SubScores {
                iss,
                impact,
                exploitability: 8.22
                    * metrics.attack_vector.weight()
                    * metrics.attack_complexity.weight()
                    * metrics.privileges_required.weight_for(metrics.scope)
                    * metrics.user_interaction.weight(),
            }
        }
    }
}

pub fn base_score(metrics: &BaseMetrics, formula: Formula) -> f64 {
    let subs = sub_scores(metrics, formula);
    let score = match formula {
        Formula::Simplified => ((subs.impact + subs.exploitability) * 10.0).ceil() / 10.0,
        Formula::Official => {
            if subs.impact <= 0.0 {
                0.0
            } else {
                match metrics.scope {
                    Scope::Unchanged => roundup((subs.impact + subs.exploitability).min(10.0)),
                    Scope::Changed => {
                        roundup((1.08 * (subs.impact + subs.exploitability)).min(10.0))
                    }
                }
            }
        }
    };
    debug!(
        ?formula,
        iss = subs.iss,
        impact = subs.impact,
        exploitability = subs.exploitability,
        score,
        "computed base score"
    );
    score
}

/// Round up to one decimal, working on an integer scale so that values such
/// as 4.000000000000001 do not become 4.1.
pub fn roundup(value: f64) -> f64 {
    let int_input = (value * 100_000.0).round() as i64;
    if int_input % 10_000 == 0 {
        int_input as f64 / 100_000.0
    } else {
        ((int_input / 10_000) + 1) as f64 / 10.0
    }
}
