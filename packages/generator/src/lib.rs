//! MasterCV Generator - Render a tailored Markdown CV from a master
//! YAML document.
//!
//! A master document is a superset CV: every job, degree, skill, and
//! interest the author has ever listed, each carrying a `selected`
//! flag. This crate parses that document, keeps only the selected
//! entries (an unselected section suppresses everything under it), and
//! renders the result as a Markdown file.
//!
//! # Example
//!
//! ```
//! use mastercv_generator::config;
//!
//! // Validate a summary wrap width
//! assert!(config::validate_wrap_width(100).is_ok());
//! assert!(config::validate_wrap_width(5).is_err());
//! ```
//!
//! # Architecture
//!
//! The generator is organized into several modules:
//!
//! - [`config`]: Configuration constants and validation
//! - [`types`]: Core data types (MasterCv, Identity, Job, etc.)
//! - [`error`]: Error types and Result alias
//! - [`loader`]: Master document loading and parsing
//! - [`filter`]: Selection filtering into an immutable view
//! - [`markdown`]: Markdown rendering and output writing
//! - [`cli`]: Command-line interface
//! - [`generator`]: Main generator service

pub mod cli;
pub mod config;
pub mod error;
pub mod filter;
pub mod generator;
pub mod loader;
pub mod markdown;
pub mod types;

// Re-export main functions
pub use generator::{build_cv, default_output_path, BuiltCv};

// Re-export commonly used items
pub use error::{GeneratorError, Result};
pub use filter::{select, selected_texts, CvStats, SelectedCv};
pub use loader::load_master_cv;
pub use markdown::{render_markdown, save_markdown, RenderOptions};
pub use types::{Degree, Identity, ItemEntry, Job, MasterCv, SelectableItem, SkillCategory};
