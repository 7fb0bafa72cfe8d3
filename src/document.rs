//! Source document model.
//! Loads a YAML (or JSON) source document, fills in the documented defaults
//! and exposes the typed metadata, process directives and template data.

use crate::constants::{FILENAME_KEY, METADATA_KEY, PROCESS_KEY, TEMPLATE_DATA_KEY};
use crate::error::{Error, Result};
use indexmap::IndexMap;
use log::debug;
use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};
use std::path::{Path, PathBuf};

/// One template-source/output-target pairing of a source document.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ProcessDirective {
    /// Template file or directory, relative to the source document.
    pub template: PathBuf,
    /// Output directory or file, relative to the source document.
    pub output: PathBuf,
}

impl ProcessDirective {
    pub fn template_path(&self, source_dir: &Path) -> PathBuf {
        source_dir.join(&self.template)
    }

    pub fn output_path(&self, source_dir: &Path) -> PathBuf {
        source_dir.join(&self.output)
    }
}

/// Generator metadata of a source document.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Metadata {
    /// Logical base name used to name outputs.
    pub filename: String,
    /// Directives, applied in document order.
    #[serde(default)]
    pub process: Vec<ProcessDirective>,
}

#[derive(Debug, Deserialize)]
struct RawDocument {
    metadata: Metadata,
    #[serde(default)]
    template_data: IndexMap<String, Value>,
}

/// A normalized source document.
#[derive(Debug, Clone, PartialEq)]
pub struct Document {
    /// Where the document was read from.
    pub path: PathBuf,
    /// Directory every directive path is resolved against.
    pub source_dir: PathBuf,
    pub metadata: Metadata,
    /// Data handed to templates, in document order.
    pub template_data: IndexMap<String, Value>,
}

impl Document {
    /// Reads and parses the source document at `path`.
    ///
    /// # Errors
    /// * `Error::IoError` if the file cannot be read
    /// * `Error::ParseError` if the content is not valid YAML/JSON
    /// * `Error::NotAMapping` if the top level is not a mapping
    /// * `Error::SectionNotAMapping` if `metadata` or `template_data` is not a mapping
    pub fn load<P: AsRef<Path>>(path: P) -> Result<Self> {
        let path = path.as_ref();
        debug!("Loading source document {}", path.display());
        let content = std::fs::read_to_string(path).map_err(Error::IoError)?;
        Self::parse(&content, path)
    }

    /// Parses `content` as if it had been read from `path`.
    pub fn parse(content: &str, path: &Path) -> Result<Self> {
        let parse_error = |reason: String| Error::ParseError { path: path.to_path_buf(), reason };

        if content.trim().is_empty() {
            return Err(Error::NotAMapping { path: path.to_path_buf() });
        }

        let mut yaml: serde_yaml::Value =
            serde_yaml::from_str(content).map_err(|e| parse_error(e.to_string()))?;
        // resolve `<<: *anchor` merge keys before the YAML tree is flattened to JSON
        yaml.apply_merge().map_err(|e| parse_error(e.to_string()))?;
        let value = serde_json::to_value(yaml).map_err(|e| parse_error(e.to_string()))?;
        let Value::Object(mut root) = value else {
            return Err(Error::NotAMapping { path: path.to_path_buf() });
        };

        normalize(&mut root, path)?;

        let raw: RawDocument = serde_json::from_value(Value::Object(root))
            .map_err(|e| parse_error(e.to_string()))?;

        Ok(Self {
            path: path.to_path_buf(),
            source_dir: path.parent().map(Path::to_path_buf).unwrap_or_default(),
            metadata: raw.metadata,
            template_data: raw.template_data,
        })
    }
}

/// Returns the file name without its final extension.
pub fn file_stem(path: &Path) -> String {
    path.file_stem().map(|s| s.to_string_lossy().into_owned()).unwrap_or_default()
}

/// Inserts the defaults for `metadata`, `metadata.filename`, `metadata.process`
/// and `template_data` of the document read from `path`. Missing and null
/// values get the default; existing values are kept, so applying it twice
/// is a no-op.
///
/// # Errors
/// * `Error::SectionNotAMapping` if `metadata` or `template_data` is present
///   but not a mapping
pub fn normalize(root: &mut Map<String, Value>, path: &Path) -> Result<()> {
    let metadata = mapping_entry(root, METADATA_KEY, path)?;

    if matches!(metadata.get(FILENAME_KEY), None | Some(Value::Null)) {
        metadata.insert(FILENAME_KEY.to_string(), Value::String(file_stem(path)));
    }
    if matches!(metadata.get(PROCESS_KEY), None | Some(Value::Null)) {
        metadata.insert(PROCESS_KEY.to_string(), Value::Array(Vec::new()));
    }

    mapping_entry(root, TEMPLATE_DATA_KEY, path)?;
    Ok(())
}

/// Returns the mapping stored under `key`, inserting an empty one when the
/// key is missing or null.
fn mapping_entry<'a>(
    root: &'a mut Map<String, Value>,
    key: &'static str,
    path: &Path,
) -> Result<&'a mut Map<String, Value>> {
    let entry = root.entry(key).or_insert(Value::Null);
    if entry.is_null() {
        *entry = Value::Object(Map::new());
    }
    entry
        .as_object_mut()
        .ok_or_else(|| Error::SectionNotAMapping { path: path.to_path_buf(), section: key })
}
