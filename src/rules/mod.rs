//! Rule implementations for fraplint.
//!
//! This module contains pure functions that check a single file's content
//! for convention violations. Each function takes the file path (for issue
//! attribution) and the full text, and returns the issues it found; none of
//! them touch the filesystem or fail.
//!
//! ## Module Structure
//!
//! - `helpers`: Shared translation-pass utilities (wrapped-form check,
//!   exemption test)
//! - `schema`: DocType definition file checks (whole-document)
//! - `python`: Python naming and translation passes
//! - `javascript`: JavaScript naming and translation passes

pub mod helpers;
pub mod javascript;
pub mod python;
pub mod schema;

pub use javascript::{check_javascript_naming, check_javascript_translations};
pub use python::{check_python_naming, check_python_translations};
pub use schema::check_doctype_schema;
