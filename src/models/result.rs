// SPDX-License-Identifier: MIT
// SPDX-FileCopyrightText: 2026 Utility Tools contributors

//! Single text slot holding the outcome of the last operation.

use crate::error::ToolResult;

/// Text shown before any operation has run on the current tool.
pub const RESULT_PLACEHOLDER: &str = "Result will be shown here";

/// Shared result display. Every write replaces the previous text.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ResultSink {
    text: String,
}

impl Default for ResultSink {
    fn default() -> Self {
        Self {
            text: RESULT_PLACEHOLDER.to_string(),
        }
    }
}

impl ResultSink {
    /// Current text.
    pub fn text(&self) -> &str {
        &self.text
    }

    /// Overwrite the slot.
    pub fn set(&mut self, text: impl Into<String>) {
        self.text = text.into();
    }

    /// Write a success payload or the display text of an error.
    pub fn record(&mut self, outcome: ToolResult<String>) {
        match outcome {
            Ok(text) => self.set(text),
            Err(err) => self.set(err.to_string()),
        }
    }

    /// Restore the placeholder.
    pub fn reset(&mut self) {
        self.set(RESULT_PLACEHOLDER);
    }

    pub fn is_placeholder(&self) -> bool {
        self.text == RESULT_PLACEHOLDER
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::ToolError;

    #[test]
    fn starts_with_placeholder() {
        let sink = ResultSink::default();
        assert_eq!(sink.text(), RESULT_PLACEHOLDER);
        assert!(sink.is_placeholder());
    }

    #[test]
    fn record_overwrites_instead_of_appending() {
        let mut sink = ResultSink::default();
        sink.record(Ok("first".into()));
        sink.record(Err(ToolError::Parse));

        assert_eq!(sink.text(), "Invalid JSON");

        sink.reset();
        assert!(sink.is_placeholder());
    }

    #[test]
    fn reset_after_long_output_leaves_only_placeholder() {
        let mut sink = ResultSink::default();
        sink.set("x".repeat(4096));

        sink.reset();

        assert_eq!(sink.text(), RESULT_PLACEHOLDER);
    }
}
