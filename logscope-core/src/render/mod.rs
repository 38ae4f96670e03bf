mod structured;
mod text;

#[cfg(test)]
mod tests;

pub use structured::*;
pub use text::*;

use crate::aggregate::Aggregation;
use crate::config::{OutputFormat, ReportSettings};
use thiserror::Error;

pub const DEFAULT_TOP_N: usize = 20;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RenderOptions {
    pub top_n: usize,
    pub identify: bool,
}

impl Default for RenderOptions {
    fn default() -> Self {
        Self {
            top_n: DEFAULT_TOP_N,
            identify: false,
        }
    }
}

impl From<&ReportSettings> for RenderOptions {
    fn from(settings: &ReportSettings) -> Self {
        Self {
            top_n: settings.top,
            identify: settings.identify,
        }
    }
}

#[derive(Debug, Error)]
pub enum RenderError {
    #[error("failed to encode report as JSON: {0}")]
    Json(#[from] serde_json::Error),

    #[error("failed to encode report as YAML: {0}")]
    Yaml(#[from] serde_yaml::Error),
}

/// Renders the whole aggregation in the requested format.
pub fn render(
    aggregation: &Aggregation,
    format: OutputFormat,
    options: RenderOptions,
) -> Result<String, RenderError> {
    match format {
        OutputFormat::Text => Ok(render_text(aggregation, options)),
        OutputFormat::Json => {
            let view = ReportView::build(aggregation, options);
            let mut out = serde_json::to_string_pretty(&view)?;
            out.push('\n');
            Ok(out)
        }
        OutputFormat::Yaml => {
            let view = ReportView::build(aggregation, options);
            Ok(serde_yaml::to_string(&view)?)
        }
    }
}
