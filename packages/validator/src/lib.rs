//! # FormCraft Validator
//!
//! Schema-driven structural validation. Walks every node of a document
//! against the registry's nesting rules and accumulates human-readable
//! diagnostics; one call reports every problem in the document.
//!
//! Violations are non-fatal: they never block editing, only an explicit
//! finalize/export action.

mod diagnostic;
mod validator;

pub use diagnostic::{Diagnostic, DiagnosticLevel};
pub use validator::{validate_document, ValidateOptions};
