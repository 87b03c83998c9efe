//! Terminal output and prompts

use std::io::{self, BufRead, Write};

use ghostpress_core::{ConfirmPublish, PublishObserver};
use ghostpress_domain::{BatchSummary, FolderEntry, PublishProgress};

/// Prints batch progress to stdout.
#[derive(Debug, Default)]
pub struct TerminalObserver;

impl PublishObserver for TerminalObserver {
    fn on_batch_started(&self, total: usize) {
        println!("Starting batch publish of {total} files...");
    }

    fn on_progress(&self, progress: &PublishProgress) {
        println!("{progress}");
    }

    fn on_summary(&self, summary: &BatchSummary) {
        tracing::debug!(total = summary.total, failed = summary.failed, "Batch summary ready");
    }
}

/// Lists the notes and asks for a yes/no answer on stdin.
#[derive(Debug, Default)]
pub struct PromptConfirm;

impl ConfirmPublish for PromptConfirm {
    fn confirm(&self, entries: &[FolderEntry]) -> bool {
        let mut out = io::stdout().lock();
        let listed = write_prompt(&mut out, entries).is_ok();
        drop(out);
        if !listed {
            return false;
        }

        let mut answer = String::new();
        match io::stdin().lock().read_line(&mut answer) {
            Ok(_) => is_yes(&answer),
            Err(e) => {
                tracing::warn!(error = %e, "Could not read confirmation");
                false
            }
        }
    }
}

fn write_prompt(out: &mut impl Write, entries: &[FolderEntry]) -> io::Result<()> {
    writeln!(out, "Publish Folder to Ghost")?;
    writeln!(out, "Found {} markdown files in this folder:", entries.len())?;
    for entry in entries {
        writeln!(out, "  - {}", entry.identifier())?;
    }
    write!(out, "Publish all? [y/N] ")?;
    out.flush()
}

fn is_yes(answer: &str) -> bool {
    matches!(answer.trim().to_ascii_lowercase().as_str(), "y" | "yes")
}
