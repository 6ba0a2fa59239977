use crate::catalog;
use crate::error::{CvssError, Result};
use crate::types::metric::{
    AttackComplexity, AttackVector, ImpactLevel, MetricKey, MetricValue, PrivilegesRequired,
    Scope, UserInteraction,
};
use serde::Serialize;
use std::collections::BTreeMap;
use strum::IntoEnumIterator;

/// One chosen label per metric key, as supplied by a host.
///
/// Labels are validated against the catalog on `set`, but a record may still
/// lack keys when a host assembles it from scratch; conversion to
/// [`BaseMetrics`] catches that.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(transparent)]
pub struct Selection {
    values: BTreeMap<MetricKey, &'static str>,
}

impl Default for Selection {
    fn default() -> Self {
        let values = catalog::all()
            .iter()
            .map(|def| (def.key, def.default_value()))
            .collect();
        Self { values }
    }
}

impl Selection {
    pub fn empty() -> Self {
        Self {
            values: BTreeMap::new(),
        }
    }

    pub fn from_pairs<I, K, V>(pairs: I) -> Result<Self>
    where
        I: IntoIterator<Item = (K, V)>,
        K: AsRef<str>,
        V: AsRef<str>,
    {
        let mut selection = Self::empty();
        for (code, label) in pairs {
            selection.set(code.as_ref(), label.as_ref())?;
        }
        Ok(selection)
    }

    /// Change one metric. A rejected change leaves the record as it was.
    pub fn set(&mut self, code: &str, label: &str) -> Result<()> {
        let key = code.parse::<MetricKey>()?;
        self.set_key(key, label)
    }

    pub fn set_key(&mut self, key: MetricKey, label: &str) -> Result<()> {
        let label = catalog::resolve_label(key, label)?;
        self.values.insert(key, label);
        Ok(())
    }

    pub fn get(&self, key: MetricKey) -> Option<&'static str> {
        self.values.get(&key).copied()
    }

    pub fn remove(&mut self, key: MetricKey) -> Option<&'static str> {
        self.values.remove(&key)
    }

    pub fn is_complete(&self) -> bool {
        MetricKey::iter().all(|key| self.values.contains_key(&key))
    }

    pub fn iter(&self) -> impl Iterator<Item = (MetricKey, &'static str)> + '_ {
        self.values.iter().map(|(key, label)| (*key, *label))
    }

    pub(crate) fn require(&self, key: MetricKey) -> Result<&'static str> {
        self.get(key).ok_or_else(|| {
            CvssError::InvalidSelection(format!(
                "missing value for {} ({})",
                catalog::definition(key).name,
                key
            ))
        })
    }
}

/// Typed Base metric record. Every field is always present and in domain.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct BaseMetrics {
    pub attack_vector: AttackVector,
    pub attack_complexity: AttackComplexity,
    pub privileges_required: PrivilegesRequired,
    pub user_interaction: UserInteraction,
    pub scope: Scope,
    pub confidentiality: ImpactLevel,
    pub integrity: ImpactLevel,
    pub availability: ImpactLevel,
}

impl BaseMetrics {
    pub fn labels(&self) -> [(MetricKey, &'static str); 8] {
        [
            (MetricKey::AV, self.attack_vector.label()),
            (MetricKey::AC, self.attack_complexity.label()),
            (MetricKey::PR, self.privileges_required.label()),
            (MetricKey::UI, self.user_interaction.label()),
            (MetricKey::S, self.scope.label()),
            (MetricKey::C, self.confidentiality.label()),
            (MetricKey::I, self.integrity.label()),
            (MetricKey::A, self.availability.label()),
        ]
    }
}

fn field<T: MetricValue>(selection: &Selection, key: MetricKey) -> Result<T> {
    let label = selection.require(key)?;
    label.parse::<T>().map_err(|_| {
        CvssError::InvalidSelection(format!(
            "{} ({}) does not accept '{}'",
            catalog::definition(key).name,
            key,
            label
        ))
    })
}

impl TryFrom<&Selection> for BaseMetrics {
    type Error = CvssError;

    fn try_from(selection: &Selection) -> Result<Self> {
        Ok(Self {
            attack_vector: field(selection, MetricKey::AV)?,
            attack_complexity: field(selection, MetricKey::AC)?,
            privileges_required: field(selection, MetricKey::PR)?,
            user_interaction: field(selection, MetricKey::UI)?,
            scope: field(selection, MetricKey::S)?,
            confidentiality: field(selection, MetricKey::C)?,
            integrity: field(selection, MetricKey::I)?,
            availability: field(selection, MetricKey::A)?,
        })
    }
}

impl From<BaseMetrics> for Selection {
    fn from(metrics: BaseMetrics) -> Self {
        Self {
            values: metrics.labels().into_iter().collect(),
        }
    }
}
