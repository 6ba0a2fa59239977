use crate::catalog::{self, MetricDefinition};
use crate::types::report::Calculation;

pub fn to_markdown(calculation: &Calculation) -> String {
    let mut output = String::new();
    output.push_str("# CVSS 3.1 Base Score\n\n");
    output.push_str(&format!(
        "Score: **{:.1}** ({})\n\n",
        calculation.score, calculation.severity
    ));
    output.push_str(&format!("Vector: `{}`\n\n", calculation.vector));

    output.push_str("## Metrics\n\n");
    output.push_str("| Metric | Key | Value |\n|---|---|---|\n");
    for (key, label) in calculation.selection.iter() {
        output.push_str(&format!(
            "| {} | {} | {} |\n",
            catalog::definition(key).name,
            key,
            label
        ));
    }
    output.push('\n');

    output.push_str("## Sub-scores\n\n");
    output.push_str(&format!(
        "- ISS: {:.4}\n- impact: {:.4}\n- exploitability: {:.4}\n",
        calculation.sub_scores.iss,
        calculation.sub_scores.impact,
        calculation.sub_scores.exploitability
    ));
    output
}

pub fn catalog_to_markdown(definitions: &[MetricDefinition]) -> String {
    let mut output = String::from("| Metric | Key | Values |\n|---|---|---|\n");
    for def in definitions {
        output.push_str(&format!(
            "| {} | {} | {} |\n",
            def.name,
            def.key,
            def.values.join(", ")
        ));
    }
    output
}
