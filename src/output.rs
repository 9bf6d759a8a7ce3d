//! Glyph-prefixed status output for the checklist.
//!
//! Human-readable only; the machine-readable surface is the JSON report and
//! the process exit code.

use owo_colors::OwoColorize;

/// Console reporter for checklist progress.
///
/// Informational lines go to stdout and can be silenced with `quiet`;
/// failures always go to stderr.
#[derive(Debug, Clone, Copy)]
pub struct Reporter {
    quiet: bool,
}

impl Reporter {
    pub fn new(quiet: bool) -> Self {
        Self { quiet }
    }

    /// Numbered step header, e.g. `"2. Locating model..."`.
    pub fn section(&self, index: usize, title: &str) {
        if !self.quiet {
            println!();
            println!("{}. {}", index, title);
        }
    }

    /// A passed check.
    pub fn pass(&self, msg: impl std::fmt::Display) {
        if !self.quiet {
            println!("{} {}", "✓".green(), msg);
        }
    }

    /// A failed check. Always printed.
    pub fn fail(&self, msg: impl std::fmt::Display) {
        eprintln!("{} {}", "✗".red(), msg);
    }

    /// Neutral information.
    pub fn info(&self, msg: impl std::fmt::Display) {
        if !self.quiet {
            println!("{} {}", "ℹ".dimmed(), msg);
        }
    }

    /// Remediation hint following a failure. Always printed.
    pub fn hint(&self, msg: impl std::fmt::Display) {
        eprintln!("  {}", msg.dimmed());
    }

    /// Final banner for the whole run.
    pub fn summary(&self, passed: bool) {
        if passed {
            if !self.quiet {
                println!();
                println!("{}", "✓ All checks passed. Speech recognition is ready.".green());
            }
        } else {
            eprintln!();
            eprintln!("{}", "✗ Smoke-test failed.".red());
        }
    }
}
