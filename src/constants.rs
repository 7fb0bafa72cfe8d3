//! Common constants used throughout stencil.

/// Top-level key holding the generator metadata.
pub const METADATA_KEY: &str = "metadata";

/// Metadata key holding the logical output base name.
pub const FILENAME_KEY: &str = "filename";

/// Metadata key holding the ordered process directives.
pub const PROCESS_KEY: &str = "process";

/// Top-level key holding the data passed to templates.
pub const TEMPLATE_DATA_KEY: &str = "template_data";

/// Marker suffixes stripped from template names when inferring output extensions.
pub const DEFAULT_MARKERS: [&str; 3] = ["jinja", "j2", "tmpl"];
