// Test infrastructure for scss-refactor
//
// Unit tests for the scanner, synthesizer, planner and formatter live in
// #[cfg(test)] modules next to the code. The modules here cover whole
// pipelines: editor-session scenarios over in-memory documents, and the
// file-backed tools.

pub mod tool_tests; // file-backed tools: transactions, dry runs, line endings
