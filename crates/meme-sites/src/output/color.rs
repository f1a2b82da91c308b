//! Color and styling helpers for CLI output.
//!
//! Semantic Color Theme:
//!   - Heading:  bold cyan (block headings)
//!   - Warning:  yellow    (discarded sections)
//!   - Muted:    dimmed    (field labels)

use colored::Colorize;

use super::OutputConfig;

/// Apply heading style (bold cyan) to text.
pub fn heading(text: &str, config: &OutputConfig) -> String {
    if !config.use_colors {
        return text.to_string();
    }
    text.cyan().bold().to_string()
}

/// Apply semantic "warning" color (yellow) to text.
pub fn warning(text: &str, config: &OutputConfig) -> String {
    if !config.use_colors {
        return text.to_string();
    }
    text.yellow().to_string()
}

/// Apply dimmed style to text (for labels/field names).
pub(crate) fn dimmed(text: &str, config: &OutputConfig) -> String {
    if !config.use_colors {
        return text.to_string();
    }
    text.dimmed().to_string()
}
