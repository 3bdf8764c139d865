// SPDX-License-Identifier: MIT
// SPDX-FileCopyrightText: 2026 Utility Tools contributors

//! Registry of the user-selectable tools.

/// Identity of one form instance. A new id is issued on every tool selection,
/// so replies to side effects can be matched to the form that requested them.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub struct FormId(pub u64);

/// Identifier of one of the fixed set of tools shown in the sidebar.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum ToolKind {
    Hash,
    Base64,
    JsonFormat,
    ProtoGenerate,
}

impl ToolKind {
    /// All tools in sidebar order.
    pub const ALL: [ToolKind; 4] = [
        ToolKind::Hash,
        ToolKind::Base64,
        ToolKind::JsonFormat,
        ToolKind::ProtoGenerate,
    ];

    /// Short label used on the sidebar button.
    pub fn label(self) -> &'static str {
        match self {
            ToolKind::Hash => "MD5",
            ToolKind::Base64 => "Base64",
            ToolKind::JsonFormat => "JSON",
            ToolKind::ProtoGenerate => "Proto",
        }
    }

    /// Heading shown above the tool's form.
    pub fn title(self) -> &'static str {
        match self {
            ToolKind::Hash => "MD5 hash",
            ToolKind::Base64 => "Base64 encode / decode",
            ToolKind::JsonFormat => "JSON formatter",
            ToolKind::ProtoGenerate => "Generate Go code from .proto",
        }
    }

    /// Phosphor glyph for the sidebar.
    pub fn icon(self) -> &'static str {
        match self {
            ToolKind::Hash => egui_phosphor::regular::HASH,
            ToolKind::Base64 => egui_phosphor::regular::BINARY,
            ToolKind::JsonFormat => egui_phosphor::regular::BRACKETS_CURLY,
            ToolKind::ProtoGenerate => egui_phosphor::regular::GEAR,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    #[test]
    fn registry_lists_each_tool_once_in_sidebar_order() {
        let labels: Vec<_> = ToolKind::ALL.iter().map(|t| t.label()).collect();
        assert_eq!(labels, vec!["MD5", "Base64", "JSON", "Proto"]);

        let unique: HashSet<_> = ToolKind::ALL.iter().collect();
        assert_eq!(unique.len(), ToolKind::ALL.len());
    }
}
