//! Vector string encoding and decoding.
//!
//! The encoded form is the bare metric string `AV:N/AC:L/PR:N/UI:N/S:U/C:H/I:N/A:L`;
//! the `CVSS:3.1/` prefix is only added by callers that ask for it.

use crate::catalog;
use crate::error::{CvssError, Result};
use crate::types::metric::{MetricKey, MetricValue};
use crate::types::selection::{BaseMetrics, Selection};
use strum::IntoEnumIterator;

pub const VECTOR_PREFIX: &str = "CVSS:3.1/";

pub fn encode_vector(selection: &Selection) -> Result<String> {
    let metrics = BaseMetrics::try_from(selection)?;
    Ok(encode_metrics(&metrics))
}

pub fn encode_metrics(metrics: &BaseMetrics) -> String {
    let pairs = [
        (MetricKey::AV, metrics.attack_vector.initial()),
        (MetricKey::AC, metrics.attack_complexity.initial()),
        (MetricKey::PR, metrics.privileges_required.initial()),
        (MetricKey::UI, metrics.user_interaction.initial()),
        (MetricKey::S, metrics.scope.initial()),
        (MetricKey::C, metrics.confidentiality.initial()),
        (MetricKey::I, metrics.integrity.initial()),
        (MetricKey::A, metrics.availability.initial()),
    ];
    pairs
        .iter()
        .map(|(key, initial)| format!("{}:{}", key, initial))
        .collect::<Vec<_>>()
        .join("/")
}

pub fn with_prefix(vector: &str) -> String {
    format!("{VECTOR_PREFIX}{vector}")
}

/// Parse a vector back into a complete selection. Pairs may come in any
/// order, but each of the eight keys must appear exactly once.
pub fn decode_vector(vector: &str) -> Result<Selection> {
    let body = vector.trim();
    let body = body.strip_prefix(VECTOR_PREFIX).unwrap_or(body);
    if body.is_empty() {
        return Err(CvssError::InvalidSelection("empty vector".to_string()));
    }

    let mut selection = Selection::empty();
    for pair in body.split('/') {
        let (code, initial) = pair.split_once(':').ok_or_else(|| {
            CvssError::InvalidSelection(format!("malformed vector component '{pair}'"))
        })?;
        let def = catalog::lookup(code)?;
        if selection.get(def.key).is_some() {
            return Err(CvssError::InvalidSelection(format!(
                "{} appears more than once",
                def.key
            )));
        }
        let mut chars = initial.chars();
        let label = match (chars.next(), chars.next()) {
            (Some(letter), None) => def.values.iter().find(|value| value.starts_with(letter)),
            _ => None,
        }
        .ok_or_else(|| {
            CvssError::InvalidSelection(format!(
                "{} ({}) has no value abbreviated '{}'",
                def.name, def.key, initial
            ))
        })?;
        selection.set_key(def.key, label)?;
    }

    if let Some(missing) = MetricKey::iter().find(|key| selection.get(*key).is_none()) {
        return Err(CvssError::InvalidSelection(format!(
            "vector is missing {}",
            missing
        )));
    }
    Ok(selection)
}
