// scss-refactor - Line-based SCSS refactoring library
//!
//! Extracts a selected literal value (a hex color, a length) into a named
//! SCSS variable, synthesizing a semantic default name from the enclosing
//! selector nesting, and aligns runs of variable declarations.
//!
//! The core works line-by-line with regex matchers and brace counting — it
//! is not a CSS parser. Hosts (the bundled CLI, an editor plugin) supply
//! the document lines, the selection and a name resolver, and commit the
//! resulting edit plan as one transaction.

pub mod editing;
pub mod prompt;
pub mod refactor;
pub mod tools;

#[cfg(test)]
pub mod tests;

// Re-export the common surface
pub use prompt::{AutoNameResolver, NameResolver, StdinNameResolver};
pub use refactor::{extract_variable, ExtractOutcome, Position, RefactorError, Selection};
pub use tools::{ExtractVariableTool, FormatVariablesTool, RefactorResult};
