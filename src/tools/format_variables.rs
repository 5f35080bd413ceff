//! Format-variables tool: aligns the value column of consecutive variable
//! declarations in an SCSS file.

use anyhow::{anyhow, Context, Result};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;
use tracing::{debug, info};

use crate::editing::EditTransaction;
use crate::refactor::{align_region, align_variable_declarations};

use super::{detect_line_ending, join_lines, split_lines, RefactorResult};

#[derive(Debug, Deserialize, Serialize)]
pub struct FormatVariablesTool {
    /// File to format
    pub file_path: String,
    /// First line of the region to format (1-indexed; whole file if omitted)
    #[serde(default)]
    pub start_line: Option<u32>,
    /// Last line of the region to format (1-indexed, inclusive)
    #[serde(default)]
    pub end_line: Option<u32>,
    /// Preview changes without applying (default: false)
    #[serde(default)]
    pub dry_run: bool,
}

impl FormatVariablesTool {
    pub fn run(&self) -> Result<RefactorResult> {
        self.validate()?;
        let path = Path::new(&self.file_path);
        info!("Format variables: {}", self.file_path);

        let content = fs::read_to_string(path)
            .with_context(|| format!("failed to read '{}'", self.file_path))?;
        let newline = detect_line_ending(&content);
        let trailing_newline = content.ends_with('\n');
        let lines = split_lines(&content);

        let formatted = match (self.start_line, self.end_line) {
            (Some(start), end) => {
                let end = end.map(|e| e as usize).unwrap_or(lines.len());
                align_region(&lines, start as usize - 1, end)
            }
            (None, Some(end)) => align_region(&lines, 0, end as usize),
            (None, None) => align_variable_declarations(&lines),
        };

        let changed: Vec<usize> = lines
            .iter()
            .zip(&formatted)
            .enumerate()
            .filter(|(_, (old, new))| old != new)
            .map(|(i, _)| i)
            .collect();
        debug!("{} line(s) need realignment", changed.len());

        if changed.is_empty() {
            return Ok(RefactorResult::noop(
                "format_variables",
                &self.file_path,
                "declarations already aligned",
            ));
        }

        let mut message = format!(
            "format_variables — {} ({} line(s) realigned)",
            self.file_path,
            changed.len()
        );

        if self.dry_run {
            for &i in &changed {
                message.push_str(&format!("\n  {}: {}", i + 1, formatted[i]));
            }
            message.push_str("\n(dry run — no changes applied)");
        } else {
            let final_content = join_lines(&formatted, newline, trailing_newline);
            let transaction = EditTransaction::begin(path)?;
            transaction.commit(&final_content)?;
            info!("realigned {} line(s) in {}", changed.len(), self.file_path);
        }

        Ok(RefactorResult {
            tool: "format_variables".to_string(),
            success: true,
            applied: !self.dry_run,
            file: self.file_path.clone(),
            variable: None,
            dry_run: self.dry_run,
            message,
        })
    }

    fn validate(&self) -> Result<()> {
        if self.start_line == Some(0) || self.end_line == Some(0) {
            return Err(anyhow!("line numbers are 1-indexed and must be >= 1"));
        }
        if let (Some(start), Some(end)) = (self.start_line, self.end_line) {
            if end < start {
                return Err(anyhow!(
                    "end_line ({}) must be >= start_line ({})",
                    end,
                    start
                ));
            }
        }
        Ok(())
    }
}
