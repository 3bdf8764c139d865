// SPDX-License-Identifier: MIT
// SPDX-FileCopyrightText: 2026 Utility Tools contributors

//! JSON pretty-printer form.

use eframe::egui;

use crate::error::ToolResult;
use crate::logic::codec;

/// Raw JSON text as typed.
#[derive(Clone, Default, Debug, PartialEq, Eq)]
pub struct JsonModel {
    input: String,
}

/// Messages emitted by the JSON form.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum JsonMsg {
    InputChanged(String),
    Format,
}

/// Apply a message; formatting yields either the indented text or a parse error.
pub fn update(model: &mut JsonModel, msg: JsonMsg) -> Option<ToolResult<String>> {
    match msg {
        JsonMsg::InputChanged(text) => {
            model.input = text;
            None
        }
        JsonMsg::Format => Some(codec::format_json(&model.input)),
    }
}

/// Multi-line editor with a format button underneath.
pub fn view(ui: &mut egui::Ui, model: &JsonModel) -> Vec<JsonMsg> {
    let mut msgs = Vec::new();

    let mut input = model.input.clone();
    if ui
        .add(
            egui::TextEdit::multiline(&mut input)
                .hint_text("Enter JSON to format")
                .code_editor()
                .desired_rows(8)
                .desired_width(f32::INFINITY),
        )
        .changed()
    {
        msgs.push(JsonMsg::InputChanged(input));
    }

    if ui.button("Format JSON").clicked() {
        msgs.push(JsonMsg::Format);
    }

    msgs
}
