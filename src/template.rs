//! Template source resolution.
//! Expands a directive's template path into the ordered list of template
//! files to render and the directory their includes resolve against.

use crate::error::{Error, Result};
use clap::ValueEnum;
use log::{debug, warn};
use std::path::{Path, PathBuf};
use walkdir::WalkDir;

/// Order in which directory entries are visited.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, ValueEnum)]
pub enum TemplateOrder {
    /// Lexicographic by file name. Reruns are reproducible.
    #[default]
    Sorted,
    /// Whatever order the filesystem enumerates entries in.
    Filesystem,
}

/// Template files resolved from one template source.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TemplateSet {
    /// Directory the template engine loads templates (and their includes) from.
    pub base_dir: PathBuf,
    /// Template files, in rendering order. Each is a direct child of `base_dir`.
    pub files: Vec<PathBuf>,
}

impl TemplateSet {
    /// Name under which `file` is known to a loader rooted at `base_dir`.
    pub fn template_name(file: &Path) -> String {
        file.file_name().map(|n| n.to_string_lossy().into_owned()).unwrap_or_default()
    }
}

/// Resolves a template source into a [`TemplateSet`].
///
/// # Arguments
/// * `template_path` - A template file or a directory of templates
/// * `order` - Ordering applied when `template_path` is a directory
///
/// # Errors
/// * `Error::TemplateNotFound` if `template_path` does not exist
/// * `Error::IoError` if the directory cannot be read
pub fn resolve_templates(template_path: &Path, order: TemplateOrder) -> Result<TemplateSet> {
    if !template_path.exists() {
        return Err(Error::TemplateNotFound { path: template_path.to_path_buf() });
    }

    if template_path.is_dir() {
        let files = list_files(template_path, order)?;
        if files.is_empty() {
            warn!("Template directory '{}' contains no templates", template_path.display());
        }
        return Ok(TemplateSet { base_dir: template_path.to_path_buf(), files });
    }

    let base_dir = match template_path.parent() {
        Some(parent) if !parent.as_os_str().is_empty() => parent.to_path_buf(),
        _ => PathBuf::from("."),
    };
    Ok(TemplateSet { base_dir, files: vec![template_path.to_path_buf()] })
}

/// Lists the regular files directly inside `dir`.
///
/// Sub-directories are skipped; symlinks to files are followed.
pub fn list_files(dir: &Path, order: TemplateOrder) -> Result<Vec<PathBuf>> {
    let mut walker = WalkDir::new(dir).min_depth(1).max_depth(1);
    if order == TemplateOrder::Sorted {
        walker = walker.sort_by_file_name();
    }

    let mut files = Vec::new();
    for entry in walker {
        let entry = entry.map_err(|e| Error::IoError(e.into()))?;
        let path = entry.path();
        if path.is_file() {
            files.push(path.to_path_buf());
        } else {
            debug!("Skipping non-file entry {}", path.display());
        }
    }
    Ok(files)
}
