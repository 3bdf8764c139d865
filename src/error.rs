// SPDX-License-Identifier: MIT
// SPDX-FileCopyrightText: 2026 Utility Tools contributors

//! Error taxonomy for tool operations.
//!
//! Every variant renders to the exact text written into the result panel, so
//! callers convert errors with `to_string()` at the point of origin.

use thiserror::Error;

/// Failure of a single tool operation.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ToolError {
    /// Input is not valid standard Base64.
    #[error("Error decoding Base64")]
    Decode,

    /// Input is not a syntactically valid JSON object.
    #[error("Invalid JSON")]
    Parse,

    /// A required selection is missing.
    #[error("{0}")]
    Validation(String),

    /// The external generator failed to launch or exited non-zero.
    #[error("Error: {reason}\n{output}")]
    Execution { reason: String, output: String },

    /// A native file/folder dialog returned no selection.
    #[error(transparent)]
    Dialog(#[from] DialogError),
}

/// Outcome of a native picker that produced no path.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum DialogError {
    #[error("No file selected")]
    NoFileSelected,
    #[error("No directory selected")]
    NoDirectorySelected,
}

/// Result alias for tool operations.
pub type ToolResult<T> = Result<T, ToolError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn execution_error_appends_output_on_new_line() {
        let err = ToolError::Execution {
            reason: "exit status: 1".into(),
            output: "foo.proto:3:1: Expected \"message\".".into(),
        };

        assert_eq!(
            err.to_string(),
            "Error: exit status: 1\nfoo.proto:3:1: Expected \"message\"."
        );
    }

    #[test]
    fn dialog_errors_convert_into_tool_errors() {
        let err: ToolError = DialogError::NoDirectorySelected.into();

        assert_eq!(err.to_string(), "No directory selected");
    }
}
