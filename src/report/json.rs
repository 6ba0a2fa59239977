use crate::catalog::MetricDefinition;
use crate::types::report::Calculation;

pub fn to_json(calculation: &Calculation) -> Result<String, serde_json::Error> {
    serde_json::to_string_pretty(calculation)
}

pub fn catalog_to_json(definitions: &[MetricDefinition]) -> Result<String, serde_json::Error> {
    serde_json::to_string_pretty(definitions)
}
