use crate::error::{GroceryError, Result};
use std::io::Write;
use std::process::{Command, Stdio};

/// A clipboard program and the arguments that make it read stdin.
type Copier = (&'static str, &'static [&'static str]);

// The first entry is the primary mechanism; the rest are legacy fallbacks.
#[cfg(target_os = "macos")]
const COPIERS: &[Copier] = &[("pbcopy", &[])];

#[cfg(target_os = "linux")]
const COPIERS: &[Copier] = &[
    ("wl-copy", &[]),
    ("xclip", &["-selection", "clipboard"]),
    ("xsel", &["--clipboard", "--input"]),
];

#[cfg(target_os = "windows")]
const COPIERS: &[Copier] = &[("clip", &[])];

#[cfg(not(any(target_os = "macos", target_os = "linux", target_os = "windows")))]
const COPIERS: &[Copier] = &[];

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CopyOutcome {
    Copied,
    CopiedWithFallback,
    NotCopied,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CopyKind {
    Link,
    Text,
}

impl CopyOutcome {
    /// What to tell the user. Nothing is said when the copy failed.
    pub fn message(&self, kind: CopyKind) -> Option<&'static str> {
        match (self, kind) {
            (CopyOutcome::Copied, CopyKind::Link) => Some("Link copied! The goblin approves!"),
            (CopyOutcome::CopiedWithFallback, CopyKind::Link) => Some("Link copied!"),
            (CopyOutcome::Copied, CopyKind::Text) => Some("List copied to clipboard!"),
            (CopyOutcome::CopiedWithFallback, CopyKind::Text) => Some("List copied!"),
            (CopyOutcome::NotCopied, _) => None,
        }
    }
}

/// Copies text to the system clipboard, best effort.
/// - macOS: pbcopy
/// - Linux: wl-copy, falling back to xclip or xsel
/// - Windows: clip.exe
pub fn copy_to_clipboard(text: &str) -> CopyOutcome {
    copy_with(COPIERS, text)
}

fn copy_with(copiers: &[Copier], text: &str) -> CopyOutcome {
    for (attempt, (program, args)) in copiers.iter().enumerate() {
        match pipe_into(program, args, text) {
            Ok(()) if attempt == 0 => return CopyOutcome::Copied,
            Ok(()) => return CopyOutcome::CopiedWithFallback,
            Err(e) => tracing::debug!(program, error = %e, "clipboard copy failed"),
        }
    }
    CopyOutcome::NotCopied
}

fn pipe_into(program: &str, args: &[&str], text: &str) -> Result<()> {
    let mut child = Command::new(program)
        .args(args)
        .stdin(Stdio::piped())
        .stdout(Stdio::null())
        .stderr(Stdio::null())
        .spawn()
        .map_err(|e| GroceryError::Api(format!("Failed to spawn {}: {}", program, e)))?;

    if let Some(mut stdin) = child.stdin.take() {
        stdin
            .write_all(text.as_bytes())
            .map_err(|e| GroceryError::Api(format!("Failed to write to {}: {}", program, e)))?;
    }

    let status = child
        .wait()
        .map_err(|e| GroceryError::Api(format!("Failed to wait for {}: {}", program, e)))?;

    if status.success() {
        Ok(())
    } else {
        Err(GroceryError::Api(format!("{} exited with error", program)))
    }
}
