//! Name resolution port.
//!
//! The one interactive suspension point in an extraction: given the
//! synthesized default, produce the final variable name or cancel. The rest
//! of the pipeline is plain synchronous logic around this call.

use std::io::{self, BufRead, Write};

pub trait NameResolver {
    /// Resolve the default into the final name. `Ok(None)` means the user
    /// cancelled; the whole operation then becomes a silent no-op.
    fn resolve(&self, default_name: &str, selected_text: &str) -> io::Result<Option<String>>;
}

/// Accepts the default (or a preset override) without prompting. Used for
/// scripted invocations.
#[derive(Debug, Default)]
pub struct AutoNameResolver {
    pub preset: Option<String>,
}

impl AutoNameResolver {
    pub fn with_preset(name: impl Into<String>) -> Self {
        Self {
            preset: Some(name.into()),
        }
    }
}

impl NameResolver for AutoNameResolver {
    fn resolve(&self, default_name: &str, _selected_text: &str) -> io::Result<Option<String>> {
        Ok(Some(
            self.preset
                .clone()
                .unwrap_or_else(|| default_name.to_string()),
        ))
    }
}

/// Prompts on stderr and reads the answer from stdin. An empty answer (or
/// closed stdin) cancels the extraction.
#[derive(Debug, Default)]
pub struct StdinNameResolver;

impl NameResolver for StdinNameResolver {
    fn resolve(&self, default_name: &str, selected_text: &str) -> io::Result<Option<String>> {
        let mut err = io::stderr();
        write!(
            err,
            "Variable name for '{selected_text}' (suggested: {default_name}, empty cancels): "
        )?;
        err.flush()?;

        let mut answer = String::new();
        let read = io::stdin().lock().read_line(&mut answer)?;
        if read == 0 {
            return Ok(None);
        }
        let answer = answer.trim();
        if answer.is_empty() {
            return Ok(None);
        }
        Ok(Some(answer.to_string()))
    }
}
