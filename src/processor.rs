//! Generation driver.
//! Runs every process directive of every source document: resolves the
//! templates, works out where each one goes, renders it and writes it.

use indexmap::IndexMap;
use log::{debug, error, warn};
use serde_json::Value;
use std::fs;
use std::path::{Path, PathBuf};

use crate::{
    config::GeneratorConfig,
    constants::FILENAME_KEY,
    document::{Document, ProcessDirective},
    error::{Error, Result},
    output::{ensure_parent_dir, resolve_output, OutputFile, OutputTarget},
    renderer::TemplateRenderer,
    template::{list_files, resolve_templates, TemplateOrder, TemplateSet},
};

/// Outcome of a batch run.
#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct RunSummary {
    /// Number of source documents attempted.
    pub documents: usize,
    /// Source documents that failed.
    pub failed: Vec<PathBuf>,
    /// Every file written, in write order.
    pub written: Vec<PathBuf>,
}

impl RunSummary {
    pub fn is_success(&self) -> bool {
        self.failed.is_empty()
    }

    /// Converts a summary with failed documents into `Error::BatchFailed`.
    pub fn into_result(self) -> Result<Self> {
        if self.is_success() {
            Ok(self)
        } else {
            Err(Error::BatchFailed { failed: self.failed.len(), total: self.documents })
        }
    }
}

/// Lists the source documents named by `source`.
///
/// A file is a single document; every regular file directly inside a
/// directory is a document, whatever its extension.
///
/// # Errors
/// * `Error::SourceNotFound` if `source` does not exist
pub fn collect_sources(source: &Path, order: TemplateOrder) -> Result<Vec<PathBuf>> {
    if !source.exists() {
        return Err(Error::SourceNotFound { path: source.to_path_buf() });
    }
    if source.is_dir() {
        list_files(source, order)
    } else {
        Ok(vec![source.to_path_buf()])
    }
}

/// Builds the variables for one render: a copy of the document's data with
/// `filename` defaulted to the output's base name. An explicit `filename`
/// in the data always wins.
pub fn render_context(template_data: &IndexMap<String, Value>, output: &OutputFile) -> Value {
    let mut vars: serde_json::Map<String, Value> =
        template_data.iter().map(|(k, v)| (k.clone(), v.clone())).collect();
    vars.entry(FILENAME_KEY).or_insert_with(|| Value::String(output.stem.clone()));
    Value::Object(vars)
}

fn write_file(path: &Path, content: &str) -> Result<()> {
    fs::write(path, content).map_err(|source| Error::IoWrite { path: path.to_path_buf(), source })
}

/// Applies source documents with a renderer and a run configuration.
pub struct Generator<'a> {
    renderer: &'a dyn TemplateRenderer,
    config: &'a GeneratorConfig,
}

impl<'a> Generator<'a> {
    pub fn new(renderer: &'a dyn TemplateRenderer, config: &'a GeneratorConfig) -> Self {
        Self { renderer, config }
    }

    /// Processes every document under `source`.
    ///
    /// A failing document is logged and skipped unless `fail_fast` is set, in
    /// which case its error is returned. Files written before a failure stay
    /// on disk.
    pub fn run(&self, source: &Path) -> Result<RunSummary> {
        let sources = collect_sources(source, self.config.order)?;
        if sources.is_empty() {
            warn!("No source documents found in '{}'", source.display());
        }

        let mut summary = RunSummary::default();
        for path in sources {
            summary.documents += 1;
            match self.process_document(&path) {
                Ok(written) => summary.written.extend(written),
                Err(e) if self.config.fail_fast => return Err(e),
                Err(e) => {
                    error!("Skipping '{}': {e}", path.display());
                    summary.failed.push(path);
                }
            }
        }
        Ok(summary)
    }

    /// Loads one source document and applies its directives in order.
    ///
    /// # Returns
    /// * `Result<Vec<PathBuf>>` - The files written, in write order
    pub fn process_document(&self, path: &Path) -> Result<Vec<PathBuf>> {
        let document = Document::load(path)?;
        debug!(
            "Processing '{}' ({} directives)",
            path.display(),
            document.metadata.process.len()
        );

        let mut written = Vec::new();
        for directive in &document.metadata.process {
            written.extend(self.process_directive(&document, directive)?);
        }
        Ok(written)
    }

    /// Renders every template of one directive.
    ///
    /// Templates that infer the same output name overwrite each other; the
    /// last one in template order wins.
    pub fn process_directive(
        &self,
        document: &Document,
        directive: &ProcessDirective,
    ) -> Result<Vec<PathBuf>> {
        let templates =
            resolve_templates(&directive.template_path(&document.source_dir), self.config.order)?;
        let target = OutputTarget::classify(&directive.output_path(&document.source_dir));

        let mut written = Vec::with_capacity(templates.files.len());
        for template_file in &templates.files {
            let output = resolve_output(
                &document.metadata.filename,
                template_file,
                &target,
                templates.files.len(),
                self.config.markers.as_slice(),
            )?;
            self.materialize(document, &templates, template_file, &output)?;
            written.push(output.path);
        }
        Ok(written)
    }

    /// Renders `template_file` and writes the result to `output`, creating
    /// parent directories and overwriting any existing file.
    pub fn materialize(
        &self,
        document: &Document,
        templates: &TemplateSet,
        template_file: &Path,
        output: &OutputFile,
    ) -> Result<()> {
        let context = render_context(&document.template_data, output);
        let name = TemplateSet::template_name(template_file);
        let content = self.renderer.render_file(&templates.base_dir, &name, &context)?;

        ensure_parent_dir(&output.path)?;
        debug!("Writing {} from {}", output.path.display(), template_file.display());
        write_file(&output.path, &content)
    }
}
