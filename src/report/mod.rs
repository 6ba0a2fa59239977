pub mod json;
pub mod md;
pub mod text;

use crate::catalog::MetricDefinition;
use crate::error::CvssError;
use crate::types::config::OutputFormat;
use crate::types::report::Calculation;

pub fn render(calculation: &Calculation, format: OutputFormat) -> Result<String, CvssError> {
    match format {
        OutputFormat::Json => json::to_json(calculation).map_err(CvssError::Json),
        OutputFormat::Md => Ok(md::to_markdown(calculation)),
        OutputFormat::Text => Ok(text::to_text(calculation)),
    }
}

pub fn render_catalog(
    definitions: &[MetricDefinition],
    format: OutputFormat,
) -> Result<String, CvssError> {
    match format {
        OutputFormat::Json => json::catalog_to_json(definitions).map_err(CvssError::Json),
        OutputFormat::Md => Ok(md::catalog_to_markdown(definitions)),
        OutputFormat::Text => Ok(text::catalog_to_text(definitions)),
    }
}
