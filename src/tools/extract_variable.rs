//! Extract-variable tool: turns a selected literal in an SCSS file into a
//! named variable, declaring it at the resolved insertion point.

use anyhow::{anyhow, Context, Result};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;
use tracing::{debug, info};

use crate::editing::EditTransaction;
use crate::prompt::NameResolver;
use crate::refactor::{apply_plan, extract_variable, ExtractOutcome, Position, Selection};

use super::{detect_line_ending, join_lines, split_lines, RefactorResult};

#[derive(Debug, Deserialize, Serialize)]
pub struct ExtractVariableTool {
    /// File to refactor
    pub file_path: String,
    /// Selection start line (1-indexed)
    pub start_line: u32,
    /// Selection start column (1-indexed)
    pub start_column: u32,
    /// Selection end line (1-indexed)
    pub end_line: u32,
    /// Selection end column (1-indexed, exclusive)
    pub end_column: u32,
    /// Preview changes without applying (default: false)
    #[serde(default)]
    pub dry_run: bool,
}

impl ExtractVariableTool {
    pub fn run(&self, resolver: &dyn NameResolver) -> Result<RefactorResult> {
        self.validate()?;
        let path = Path::new(&self.file_path);
        info!(
            "Extract variable: {}:{}:{}-{}:{}",
            self.file_path, self.start_line, self.start_column, self.end_line, self.end_column
        );

        let content = fs::read_to_string(path)
            .with_context(|| format!("failed to read '{}'", self.file_path))?;
        let newline = detect_line_ending(&content);
        let trailing_newline = content.ends_with('\n');
        let lines = split_lines(&content);
        debug!("document has {} lines", lines.len());

        let outcome = extract_variable(&lines, self.selection(), resolver)
            .context("extraction failed before any edit was made")?;

        let (name, plan) = match outcome {
            ExtractOutcome::EmptySelection => {
                info!("nothing selected, no-op");
                return Ok(RefactorResult::noop(
                    "extract_variable",
                    &self.file_path,
                    "nothing selected",
                ));
            }
            ExtractOutcome::Cancelled => {
                info!("name prompt cancelled, no-op");
                return Ok(RefactorResult::noop(
                    "extract_variable",
                    &self.file_path,
                    "name prompt cancelled",
                ));
            }
            ExtractOutcome::Edit { name, plan } => (name, plan),
        };

        let new_lines = apply_plan(&lines, &plan)?;

        let mut message = format!(
            "extract_variable — {} → ${} [{} → {} lines]",
            self.file_path,
            name,
            lines.len(),
            new_lines.len()
        );

        if self.dry_run {
            let target = plan.selection.start.line;
            let shifted = target + plan.inserted_line_count();
            message.push_str(&format!(
                "\n--- Before:\n  {}: {}\n",
                target + 1,
                lines[target]
            ));
            message.push_str(&format!(
                "+++ After:\n  {}: {}\n  {}: {}\n",
                plan.insertion_line + 1,
                plan.insertion_text.split('\n').next().unwrap_or(""),
                shifted + 1,
                new_lines[shifted]
            ));
            message.push_str("(dry run — no changes applied)");
            info!("dry run: would declare ${}", name);
        } else {
            let final_content = join_lines(&new_lines, newline, trailing_newline);
            let transaction = EditTransaction::begin(path)?;
            transaction.commit(&final_content)?;
            info!("declared ${} in {}", name, self.file_path);
        }

        Ok(RefactorResult {
            tool: "extract_variable".to_string(),
            success: true,
            applied: !self.dry_run,
            file: self.file_path.clone(),
            variable: Some(name),
            dry_run: self.dry_run,
            message,
        })
    }

    fn validate(&self) -> Result<()> {
        if self.start_line == 0 || self.end_line == 0 {
            return Err(anyhow!("line numbers are 1-indexed and must be >= 1"));
        }
        if self.start_column == 0 || self.end_column == 0 {
            return Err(anyhow!("column numbers are 1-indexed and must be >= 1"));
        }
        if (self.end_line, self.end_column) < (self.start_line, self.start_column) {
            return Err(anyhow!(
                "selection end ({}:{}) precedes selection start ({}:{})",
                self.end_line,
                self.end_column,
                self.start_line,
                self.start_column
            ));
        }
        Ok(())
    }

    /// Convert the 1-indexed tool coordinates to the core's 0-indexed model.
    fn selection(&self) -> Selection {
        Selection::new(
            Position::new(self.start_line as usize - 1, self.start_column as usize - 1),
            Position::new(self.end_line as usize - 1, self.end_column as usize - 1),
        )
    }
}
