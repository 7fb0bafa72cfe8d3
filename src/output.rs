//! Output path resolution.
//! Decides where a rendered template is written: inside a target directory
//! under an inferred name, or at an exact file path.

use crate::error::{Error, Result};
use log::debug;
use std::path::{Path, PathBuf, MAIN_SEPARATOR};

/// Where a directive's output goes.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum OutputTarget {
    /// Outputs are named `<filename><inferred extension>` inside this directory.
    Directory(PathBuf),
    /// The single output is written to exactly this path.
    File(PathBuf),
}

impl OutputTarget {
    /// Classifies `path` as a directory or a file target.
    ///
    /// Existing directories, paths ending in a separator and non-existent
    /// paths without an extension are directories; everything else is a file.
    pub fn classify(path: &Path) -> Self {
        let raw = path.as_os_str().to_string_lossy();
        let directory_like = path.is_dir()
            || raw.ends_with('/')
            || raw.ends_with(MAIN_SEPARATOR)
            || (!path.exists() && path.extension().is_none());

        if directory_like {
            Self::Directory(path.to_path_buf())
        } else {
            Self::File(path.to_path_buf())
        }
    }
}

/// A resolved destination for one rendered template.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct OutputFile {
    pub path: PathBuf,
    /// Base name of the output without any extension.
    pub stem: String,
}

/// Returns the suffixes of `file_name` without their dots.
///
/// A leading dot starts a suffix too, so dotfile templates keep their name as
/// the output extension (`.env.j2` has the suffixes `env` and `j2`). A name
/// ending in a dot has none.
pub fn suffixes(file_name: &str) -> Vec<&str> {
    if file_name.ends_with('.') {
        return Vec::new();
    }
    file_name.split('.').skip(1).filter(|s| !s.is_empty()).collect()
}

/// Strips the whole suffix chain from `file_name`.
fn strip_suffixes(file_name: &str) -> &str {
    if file_name.ends_with('.') {
        return file_name;
    }
    let leading = file_name.len() - file_name.trim_start_matches('.').len();
    match file_name[leading..].find('.') {
        Some(idx) => &file_name[..leading + idx],
        None => file_name,
    }
}

/// Infers the output extension of `template_file`: its suffix chain, minus
/// the last suffix when that one is a marker.
///
/// `widget.config.yaml.jinja` gives `.config.yaml`, `Widget.ts.tmpl` gives `.ts`.
pub fn infer_extension<S: AsRef<str>>(template_file: &Path, markers: &[S]) -> String {
    let name = template_file.file_name().map(|n| n.to_string_lossy()).unwrap_or_default();
    let mut exts = suffixes(&name);
    if exts.last().is_some_and(|last| markers.iter().any(|m| m.as_ref() == *last)) {
        exts.pop();
    }
    exts.iter().map(|ext| format!(".{ext}")).collect()
}

/// Computes the output file for one template of a directive.
///
/// # Arguments
/// * `filename` - The document's logical base name (`metadata.filename`)
/// * `template_file` - The template being rendered
/// * `target` - The directive's output target
/// * `template_count` - Number of templates resolved for the directive
/// * `markers` - Marker suffixes stripped from the inferred extension
///
/// # Errors
/// * `Error::AmbiguousOutput` if `target` is a file and more than one template
///   was resolved for it
pub fn resolve_output<S: AsRef<str>>(
    filename: &str,
    template_file: &Path,
    target: &OutputTarget,
    template_count: usize,
    markers: &[S],
) -> Result<OutputFile> {
    match target {
        OutputTarget::Directory(dir) => {
            let ext = infer_extension(template_file, markers);
            let path = dir.join(format!("{filename}{ext}"));
            debug!("Output for {} inferred as {}", template_file.display(), path.display());
            Ok(OutputFile { path, stem: filename.to_string() })
        }
        OutputTarget::File(path) => {
            if template_count > 1 {
                return Err(Error::AmbiguousOutput { output: path.clone(), count: template_count });
            }
            let name = path.file_name().map(|n| n.to_string_lossy()).unwrap_or_default();
            Ok(OutputFile { path: path.clone(), stem: strip_suffixes(&name).to_string() })
        }
    }
}

/// Creates every missing parent directory of `output`. No-op if they exist.
pub fn ensure_parent_dir(output: &Path) -> Result<()> {
    match output.parent() {
        Some(parent) if !parent.as_os_str().is_empty() => std::fs::create_dir_all(parent)
            .map_err(|source| Error::IoWrite { path: parent.to_path_buf(), source }),
        _ => Ok(()),
    }
}
