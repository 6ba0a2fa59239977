//! Static definitions of the eight CVSS 3.1 Base metrics.

use crate::error::{CvssError, Result};
use crate::types::metric::{
    AttackComplexity, AttackVector, ImpactLevel, MetricKey, PrivilegesRequired, Scope,
    UserInteraction,
};
use serde::Serialize;
use strum::VariantNames;

#[derive(Debug, Clone, Copy, Serialize)]
pub struct MetricDefinition {
    pub name: &'static str,
    pub key: MetricKey,
    /// Valid labels, in display order. The first one is the default.
    pub values: &'static [&'static str],
}

impl MetricDefinition {
    pub fn default_value(&self) -> &'static str {
        self.values[0]
    }

    pub fn contains(&self, label: &str) -> bool {
        self.values.contains(&label)
    }
}

static CATALOG: [MetricDefinition; 8] = [
    MetricDefinition {
        name: "Attack Vector",
        key: MetricKey::AV,
        values: AttackVector::VARIANTS,
    },
    MetricDefinition {
        name: "Attack Complexity",
        key: MetricKey::AC,
        values: AttackComplexity::VARIANTS,
    },
    MetricDefinition {
        name: "Privileges Required",
        key: MetricKey::PR,
        values: PrivilegesRequired::VARIANTS,
    },
    MetricDefinition {
        name: "User Interaction",
        key: MetricKey::UI,
        values: UserInteraction::VARIANTS,
    },
    MetricDefinition {
        name: "Scope",
        key: MetricKey::S,
        values: Scope::VARIANTS,
    },
    MetricDefinition {
        name: "Confidentiality",
        key: MetricKey::C,
        values: ImpactLevel::VARIANTS,
    },
    MetricDefinition {
        name: "Integrity",
        key: MetricKey::I,
        values: ImpactLevel::VARIANTS,
    },
    MetricDefinition {
        name: "Availability",
        key: MetricKey::A,
        values: ImpactLevel::VARIANTS,
    },
];

/// All metric definitions in vector order (AV, AC, PR, UI, S, C, I, A).
pub fn all() -> &'static [MetricDefinition; 8] {
    &CATALOG
}

pub fn definition(key: MetricKey) -> &'static MetricDefinition {
    // CATALOG is declared in MetricKey order.
    &CATALOG[key as usize]
}

pub fn lookup(code: &str) -> Result<&'static MetricDefinition> {
    let key = code.parse::<MetricKey>()?;
    Ok(definition(key))
}

/// Resolve a label for `key`, returning the catalog's own `'static` copy.
pub fn resolve_label(key: MetricKey, label: &str) -> Result<&'static str> {
    let def = definition(key);
    def.values
        .iter()
        .copied()
        .find(|value| *value == label)
        .ok_or_else(|| {
            CvssError::InvalidSelection(format!(
                "{} ({}) does not accept '{}'; expected one of: {}",
                def.name,
                def.key,
                label,
                def.values.join(", ")
            ))
        })
}
