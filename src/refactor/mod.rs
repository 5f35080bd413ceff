//! Line-based SCSS refactoring core.
//!
//! Pure functions over a slice of document lines: no editor state, no file
//! I/O. Hosts feed in lines and a selection, get back an [`EditPlan`], and
//! apply it however they commit edits.

pub mod error;
pub mod extract;
pub mod format;
pub mod name;
pub mod plan;
pub mod scanner;
pub mod selection;

pub use error::RefactorError;
pub use extract::{extract_variable, prepare_extraction, ExtractOutcome, Extraction, ExtractionContext};
pub use format::{align_region, align_variable_declarations};
pub use name::synthesize_default_name;
pub use plan::{apply_plan, resolve_insertion_point, EditPlan, InsertionPoint};
pub use scanner::{scan_context, NameFragment, ScanResult};
pub use selection::{adjust_selection, selected_text, Position, Selection};
