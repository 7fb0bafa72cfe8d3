//! Run configuration for the generator.
//! Collects the knobs that shape a run: enumeration order, marker suffixes
//! and the batch failure policy.

use crate::cli::Args;
use crate::constants::DEFAULT_MARKERS;
use crate::template::TemplateOrder;

/// Settings shared by every document processed in one run.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GeneratorConfig {
    /// Ordering of template and source directory entries.
    pub order: TemplateOrder,
    /// Marker suffixes, without the leading dot.
    pub markers: Vec<String>,
    /// Abort the batch at the first failing document.
    pub fail_fast: bool,
}

impl Default for GeneratorConfig {
    fn default() -> Self {
        Self {
            order: TemplateOrder::default(),
            markers: DEFAULT_MARKERS.iter().map(|m| m.to_string()).collect(),
            fail_fast: false,
        }
    }
}

impl GeneratorConfig {
    /// Replaces the marker set. Leading dots are tolerated (`.tmpl` == `tmpl`).
    pub fn with_markers<I, S>(mut self, markers: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        self.markers = markers
            .into_iter()
            .map(|m| m.as_ref().trim_start_matches('.').to_string())
            .filter(|m| !m.is_empty())
            .collect();
        self
    }
}

impl From<&Args> for GeneratorConfig {
    fn from(args: &Args) -> Self {
        let config =
            GeneratorConfig { order: args.order, fail_fast: args.fail_fast, ..Default::default() };
        if args.markers.is_empty() {
            config
        } else {
            config.with_markers(&args.markers)
        }
    }
}
