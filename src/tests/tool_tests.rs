//! File-backed tool tests: transactional writes, dry runs, line-ending
//! preservation.

use anyhow::Result;
use std::fs;
use std::path::PathBuf;
use tempfile::TempDir;

use crate::prompt::AutoNameResolver;
use crate::tools::{ExtractVariableTool, FormatVariablesTool};

fn write_test_file(content: &str) -> Result<(TempDir, PathBuf)> {
    let temp_dir = TempDir::new()?;
    let path = temp_dir.path().join("style.scss");
    fs::write(&path, content)?;
    Ok((temp_dir, path))
}

#[test]
fn extract_rewrites_the_file() -> Result<()> {
    let (_dir, path) = write_test_file(".foo {\n    background-color: #f8f8f8;\n}\n")?;

    let tool = ExtractVariableTool {
        file_path: path.to_string_lossy().to_string(),
        start_line: 2,
        start_column: 24,
        end_line: 2,
        end_column: 30,
        dry_run: false,
    };
    let result = tool.run(&AutoNameResolver::default())?;

    assert!(result.success);
    assert!(result.applied);
    assert_eq!(result.variable.as_deref(), Some("foo-bg-color"));
    assert_eq!(
        fs::read_to_string(&path)?,
        "$foo-bg-color: #f8f8f8;\n\n.foo {\n    background-color: $foo-bg-color;\n}\n"
    );
    Ok(())
}

#[test]
fn extract_dry_run_leaves_the_file_alone() -> Result<()> {
    let content = ".foo {\n    background-color: #f8f8f8;\n}\n";
    let (_dir, path) = write_test_file(content)?;

    let tool = ExtractVariableTool {
        file_path: path.to_string_lossy().to_string(),
        start_line: 2,
        start_column: 24,
        end_line: 2,
        end_column: 30,
        dry_run: true,
    };
    let result = tool.run(&AutoNameResolver::default())?;

    assert!(result.success);
    assert!(!result.applied);
    assert!(result.message.contains("dry run"));
    assert!(result.message.contains("$foo-bg-color: #f8f8f8;"));
    assert_eq!(fs::read_to_string(&path)?, content);
    Ok(())
}

#[test]
fn extract_empty_selection_noops_without_touching_the_file() -> Result<()> {
    let content = ".foo {\n    color: #333;\n}\n";
    let (_dir, path) = write_test_file(content)?;

    let tool = ExtractVariableTool {
        file_path: path.to_string_lossy().to_string(),
        start_line: 2,
        start_column: 12,
        end_line: 2,
        end_column: 12,
        dry_run: false,
    };
    let result = tool.run(&AutoNameResolver::default())?;

    assert!(result.success);
    assert!(!result.applied);
    assert_eq!(fs::read_to_string(&path)?, content);
    Ok(())
}

#[test]
fn extract_preserves_crlf_and_trailing_newline() -> Result<()> {
    let (_dir, path) = write_test_file(".foo {\r\n    color: #333;\r\n}\r\n")?;

    let tool = ExtractVariableTool {
        file_path: path.to_string_lossy().to_string(),
        start_line: 2,
        start_column: 12,
        end_line: 2,
        end_column: 16,
        dry_run: false,
    };
    tool.run(&AutoNameResolver::default())?;

    assert_eq!(
        fs::read_to_string(&path)?,
        "$foo-text-color: #333;\r\n\r\n.foo {\r\n    color: $foo-text-color;\r\n}\r\n"
    );
    Ok(())
}

#[test]
fn extract_rejects_zero_based_coordinates() -> Result<()> {
    let (_dir, path) = write_test_file(".foo {}\n")?;

    let tool = ExtractVariableTool {
        file_path: path.to_string_lossy().to_string(),
        start_line: 0,
        start_column: 1,
        end_line: 1,
        end_column: 2,
        dry_run: false,
    };
    assert!(tool.run(&AutoNameResolver::default()).is_err());
    Ok(())
}

#[test]
fn extract_missing_file_fails_cleanly() {
    let tool = ExtractVariableTool {
        file_path: "/nonexistent/style.scss".to_string(),
        start_line: 1,
        start_column: 1,
        end_line: 1,
        end_column: 2,
        dry_run: false,
    };
    let err = tool.run(&AutoNameResolver::default()).unwrap_err();
    assert!(err.to_string().contains("failed to read"));
}

#[test]
fn format_aligns_declarations_on_disk() -> Result<()> {
    let (_dir, path) = write_test_file("$foo-text-color: #333;\n$foo-bg-color: #ffffff;\n")?;

    let tool = FormatVariablesTool {
        file_path: path.to_string_lossy().to_string(),
        start_line: None,
        end_line: None,
        dry_run: false,
    };
    let result = tool.run()?;

    assert!(result.applied);
    assert_eq!(
        fs::read_to_string(&path)?,
        "$foo-text-color: #333;\n$foo-bg-color:   #ffffff;\n"
    );
    Ok(())
}

#[test]
fn format_noops_when_already_aligned() -> Result<()> {
    let content = "$foo-text-color: #333;\n$foo-bg-color:   #ffffff;\n";
    let (_dir, path) = write_test_file(content)?;

    let tool = FormatVariablesTool {
        file_path: path.to_string_lossy().to_string(),
        start_line: None,
        end_line: None,
        dry_run: false,
    };
    let result = tool.run()?;

    assert!(result.success);
    assert!(!result.applied);
    assert_eq!(fs::read_to_string(&path)?, content);
    Ok(())
}

#[test]
fn format_region_is_bounded() -> Result<()> {
    let (_dir, path) = write_test_file("$aaaa: 1;\n$b: 2;\n$cccccc: 3;\n")?;

    let tool = FormatVariablesTool {
        file_path: path.to_string_lossy().to_string(),
        start_line: Some(1),
        end_line: Some(2),
        dry_run: false,
    };
    tool.run()?;

    assert_eq!(
        fs::read_to_string(&path)?,
        "$aaaa: 1;\n$b:    2;\n$cccccc: 3;\n"
    );
    Ok(())
}

#[test]
fn format_dry_run_reports_without_writing() -> Result<()> {
    let content = "$foo-text-color: #333;\n$foo-bg-color: #ffffff;\n";
    let (_dir, path) = write_test_file(content)?;

    let tool = FormatVariablesTool {
        file_path: path.to_string_lossy().to_string(),
        start_line: None,
        end_line: None,
        dry_run: true,
    };
    let result = tool.run()?;

    assert!(!result.applied);
    assert!(result.message.contains("$foo-bg-color:   #ffffff;"));
    assert_eq!(fs::read_to_string(&path)?, content);
    Ok(())
}
