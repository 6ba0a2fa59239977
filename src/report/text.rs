use crate::catalog::MetricDefinition;
use crate::types::report::Calculation;

pub fn to_text(calculation: &Calculation) -> String {
    format!(
        "score: {:.1} ({})\nvector: {}\n",
        calculation.score, calculation.severity, calculation.vector
    )
}

pub fn catalog_to_text(definitions: &[MetricDefinition]) -> String {
    definitions
        .iter()
        .map(|def| {
            format!(
                "{:<3}{:<20}{}\n",
                def.key.code(),
                def.name,
                def.values.join(" | ")
            )
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::engine::Formula;
    use crate::types::selection::Selection;

    #[test]
    fn text_report_shows_score_severity_and_vector() {
        let calculation = Calculation::new(&Selection::default(), Formula::Simplified, false)
            .expect("default selection is complete");
        assert_eq!(
            to_text(&calculation),
            "score: 3.9 (Low)\nvector: AV:N/AC:L/PR:N/UI:N/S:U/C:N/I:N/A:N\n"
        );
    }

    #[test]
    fn catalog_text_has_one_line_per_metric() {
        let rendered = catalog_to_text(crate::catalog::all());
        assert_eq!(rendered.lines().count(), 8);
        assert!(rendered.starts_with("AV Attack Vector"));
    }
}
