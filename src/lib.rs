//! stencil generates code, docs and config from declarative source documents.
//! A source document lists process directives pairing template sources with
//! output targets; every template is rendered against the document's data.

/// Command-line interface module for the stencil application
pub mod cli;

/// Run configuration: enumeration order, marker suffixes, failure policy
pub mod config;

/// Common constants used across modules
pub mod constants;

/// Source document loading and normalization
pub mod document;

/// Error types and handling for the stencil application
pub mod error;

/// Case conversion filters exposed to templates
pub mod filters;

/// Logger initialization
pub mod logger;

/// Output path resolution
/// Infers output names from template suffix chains
pub mod output;

/// Core generation orchestration
/// Combines all components to generate the final output
pub mod processor;

/// Template rendering with MiniJinja
pub mod renderer;

/// Template source resolution
pub mod template;
