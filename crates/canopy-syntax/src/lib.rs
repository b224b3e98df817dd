//! Canopy: resilient, lossless parsing for Java-flavored sources.
//!
//! # Example
//!
//! ```
//! use canopy_syntax::parse_file;
//!
//! let source = r#"
//!     package demo.shapes;
//!
//!     import java.util.List;
//!
//!     public class Circle {}
//! "#;
//!
//! let parse = parse_file(source);
//! assert!(!parse.diagnostics().has_errors());
//! eprintln!("{}", parse.dump());
//! ```
//!
//! The parser never fails: every input produces a complete syntax tree whose
//! leaves concatenate back to the original text, with problems reported as
//! [`Diagnostics`] alongside.

#![cfg_attr(coverage_nightly, feature(coverage_attribute))]

pub mod diagnostics;
pub mod parser;

pub use diagnostics::{Diagnostic, DiagnosticKind, Diagnostics, DiagnosticsPrinter, Severity};
pub use parser::{Parse, SyntaxKind, SyntaxNode, SyntaxToken, parse_file, parse_pattern};
