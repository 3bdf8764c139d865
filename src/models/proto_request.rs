// SPDX-License-Identifier: MIT
// SPDX-FileCopyrightText: 2026 Utility Tools contributors

//! Validated input for a code generation run.

use std::path::{Path, PathBuf};

use crate::error::{ToolError, ToolResult};

/// Message shown when the user triggers generation without both selections.
pub const MISSING_SELECTION: &str = "Please select both .proto file and output directory";

/// Source `.proto` file plus destination directory, both selected.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ProtoGenerationRequest {
    source: PathBuf,
    output_dir: PathBuf,
}

impl ProtoGenerationRequest {
    /// Build a request from the two picker selections.
    ///
    /// # Errors
    ///
    /// Returns [`ToolError::Validation`] when either selection is missing or empty.
    pub fn new(source: Option<&Path>, output_dir: Option<&Path>) -> ToolResult<Self> {
        match (non_empty(source), non_empty(output_dir)) {
            (Some(source), Some(output_dir)) => Ok(Self {
                source: source.to_path_buf(),
                output_dir: output_dir.to_path_buf(),
            }),
            _ => Err(ToolError::Validation(MISSING_SELECTION.to_string())),
        }
    }

    pub fn source(&self) -> &Path {
        &self.source
    }

    pub fn output_dir(&self) -> &Path {
        &self.output_dir
    }

    /// Directory containing the source file, used as the import search path.
    pub fn source_dir(&self) -> &Path {
        match self.source.parent() {
            Some(parent) if !parent.as_os_str().is_empty() => parent,
            _ => Path::new("."),
        }
    }

    /// File name of the source, falling back to the full path.
    pub fn source_name(&self) -> String {
        self.source
            .file_name()
            .map(|name| name.to_string_lossy().into_owned())
            .unwrap_or_else(|| self.source.display().to_string())
    }
}

fn non_empty(path: Option<&Path>) -> Option<&Path> {
    path.filter(|p| !p.as_os_str().is_empty())
}
