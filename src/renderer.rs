//! Template renderer and rendering functionality for stencil.
//! Loads templates from their base directory so includes, imports and
//! `extends` resolve next to the template rather than the source document.
use crate::error::{Error, Result};
use crate::filters::FilterRegistry;
use minijinja::{path_loader, AutoEscape, Environment, UndefinedBehavior};
use std::path::Path;

/// Trait for template rendering engines.
pub trait TemplateRenderer {
    /// Renders the template `name` found in `base_dir` with the given context.
    ///
    /// # Arguments
    /// * `base_dir` - Directory templates and their includes are loaded from
    /// * `name` - Template file name relative to `base_dir`
    /// * `context` - Context variables for rendering
    ///
    /// # Returns
    /// * `Result<String>` - Rendered template text
    fn render_file(
        &self,
        base_dir: &Path,
        name: &str,
        context: &serde_json::Value,
    ) -> Result<String>;
}

/// MiniJinja-based template rendering engine.
pub struct MiniJinjaRenderer {
    /// Filters registered on every environment this renderer builds
    filters: FilterRegistry,
}

impl MiniJinjaRenderer {
    /// Creates a renderer exposing `filters` to templates.
    pub fn new(filters: FilterRegistry) -> Self {
        Self { filters }
    }

    fn environment(&self, base_dir: &Path) -> Environment<'static> {
        let mut env = Environment::new();
        env.set_loader(path_loader(base_dir.to_path_buf()));
        env.set_undefined_behavior(UndefinedBehavior::Strict);
        // output files are source code, never HTML or JSON to be escaped
        env.set_auto_escape_callback(|_| AutoEscape::None);
        for (name, transform) in self.filters.iter() {
            env.add_filter(name.to_string(), move |value: String| transform(&value));
        }
        env
    }
}

impl Default for MiniJinjaRenderer {
    fn default() -> Self {
        MiniJinjaRenderer::new(FilterRegistry::builtin())
    }
}

impl TemplateRenderer for MiniJinjaRenderer {
    /// Renders a template file using MiniJinja.
    ///
    /// # Errors
    /// * `Error::IoError` if the template file cannot be read
    /// * `Error::RenderError` if:
    ///   - The template cannot be loaded or has a syntax error
    ///   - The template references an undefined variable
    ///   - A filter receives an argument it cannot handle
    fn render_file(
        &self,
        base_dir: &Path,
        name: &str,
        context: &serde_json::Value,
    ) -> Result<String> {
        let render_error =
            |source: minijinja::Error| Error::RenderError { template: base_dir.join(name), source };

        // the entry template is registered directly: the path loader only serves
        // includes and refuses names with a leading dot such as `.env.j2`
        let source = std::fs::read_to_string(base_dir.join(name)).map_err(Error::IoError)?;
        let mut env = self.environment(base_dir);
        env.add_template_owned(name.to_string(), source).map_err(render_error)?;
        let tmpl = env.get_template(name).map_err(render_error)?;
        tmpl.render(context).map_err(render_error)
    }
}
