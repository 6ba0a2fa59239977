use crate::error::CvssError;
use serde::{Deserialize, Serialize};
use std::str::FromStr;
use strum::{Display, EnumIter, EnumString, IntoStaticStr, VariantNames};

/// The eight Base metric keys, declared in vector order.
#[derive(
    Debug,
    Clone,
    Copy,
    PartialEq,
    Eq,
    PartialOrd,
    Ord,
    Hash,
    Display,
    EnumIter,
    IntoStaticStr,
    Serialize,
    Deserialize,
)]
pub enum MetricKey {
    AV,
    AC,
    PR,
    UI,
    S,
    C,
    I,
    A,
}

impl MetricKey {
    pub fn code(self) -> &'static str {
        self.into()
    }
}

impl FromStr for MetricKey {
    type Err = CvssError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "AV" => Ok(MetricKey::AV),
            "AC" => Ok(MetricKey::AC),
            "PR" => Ok(MetricKey::PR),
            "UI" => Ok(MetricKey::UI),
            "S" => Ok(MetricKey::S),
            "C" => Ok(MetricKey::C),
            "I" => Ok(MetricKey::I),
            "A" => Ok(MetricKey::A),
            other => Err(CvssError::UnknownMetric(other.to_string())),
        }
    }
}

/// Shared behaviour of every metric value enum.
pub trait MetricValue: Copy + FromStr + Into<&'static str> {
    fn weight(self) -> f64;

    fn label(self) -> &'static str {
        self.into()
    }

    /// Vector initial; every label is non-empty ASCII.
    fn initial(self) -> char {
        self.label().chars().next().unwrap_or('?')
    }
}

#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Display, EnumIter, EnumString, IntoStaticStr, VariantNames,
)]
pub enum AttackVector {
    Network,
    Adjacent,
    Local,
    Physical,
}

impl MetricValue for AttackVector {
    fn weight(self) -> f64 {
        match self {
            AttackVector::Network => 0.85,
            AttackVector::Adjacent => 0.62,
            AttackVector::Local => 0.55,
            AttackVector::Physical => 0.2,
        }
    }
}

#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Display, EnumIter, EnumString, IntoStaticStr, VariantNames,
)]
pub enum AttackComplexity {
    Low,
    High,
}

impl MetricValue for AttackComplexity {
    fn weight(self) -> f64 {
        match self {
            AttackComplexity::Low => 0.77,
            AttackComplexity::High => 0.44,
        }
    }
}

#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Display, EnumIter, EnumString, IntoStaticStr, VariantNames,
)]
pub enum PrivilegesRequired {
    None,
    Low,
    High,
}

impl PrivilegesRequired {
    /// Weight used by the official formula, which raises Low and High when scope changes.
    pub fn weight_for(self, scope: Scope) -> f64 {
        match (self, scope) {
            (PrivilegesRequired::Low, Scope::Changed) => 0.68,
            (PrivilegesRequired::High, Scope::Changed) => 0.5,
            _ => self.weight(),
        }
    }
}

impl MetricValue for PrivilegesRequired {
    fn weight(self) -> f64 {
        match self {
            PrivilegesRequired::None => 0.85,
            PrivilegesRequired::Low => 0.62,
            PrivilegesRequired::High => 0.27,
        }
    }
}

#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Display, EnumIter, EnumString, IntoStaticStr, VariantNames,
)]
pub enum UserInteraction {
    None,
    Required,
}

impl MetricValue for UserInteraction {
    fn weight(self) -> f64 {
        match self {
            UserInteraction::None => 0.85,
            UserInteraction::Required => 0.62,
        }
    }
}

#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Display, EnumIter, EnumString, IntoStaticStr, VariantNames,
)]
pub enum Scope {
    Unchanged,
    Changed,
}

impl MetricValue for Scope {
    // Scope has no weight of its own; it only switches formula branches.
    fn weight(self) -> f64 {
        0.0
    }
}

/// Confidentiality, Integrity and Availability share one domain.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Display, EnumIter, EnumString, IntoStaticStr, VariantNames,
)]
pub enum ImpactLevel {
    None,
    Low,
    High,
}

impl MetricValue for ImpactLevel {
    fn weight(self) -> f64 {
        match self {
            ImpactLevel::None => 0.0,
            ImpactLevel::Low => 0.22,
            ImpactLevel::High => 0.56,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use strum::IntoEnumIterator;

    #[test]
    fn metric_keys_iterate_in_vector_order() {
        let codes: Vec<_> = MetricKey::iter().map(MetricKey::code).collect();
        assert_eq!(codes, ["AV", "AC", "PR", "UI", "S", "C", "I", "A"]);
    }

    #[test]
    fn unknown_key_is_rejected() {
        let err = "XX".parse::<MetricKey>().expect_err("XX is not a metric");
        assert!(matches!(err, CvssError::UnknownMetric(code) if code == "XX"));
    }

    #[test]
    fn labels_parse_back_to_variants() {
        assert_eq!(
            "Adjacent".parse::<AttackVector>().ok(),
            Some(AttackVector::Adjacent)
        );
        assert!("adjacent".parse::<AttackVector>().is_err());
        assert_eq!(ImpactLevel::High.initial(), 'H');
        assert_eq!(UserInteraction::Required.label(), "Required");
    }

    #[test]
    fn privileges_weight_depends_on_scope_only_for_low_and_high() {
        assert_eq!(PrivilegesRequired::None.weight_for(Scope::Changed), 0.85);
        assert_eq!(PrivilegesRequired::Low.weight_for(Scope::Unchanged), 0.62);
        assert_eq!(PrivilegesRequired::Low.weight_for(Scope::Changed), 0.68);
        assert_eq!(PrivilegesRequired::High.weight_for(Scope::Changed), 0.5);
    }
}
