// SPDX-License-Identifier: MIT
// SPDX-FileCopyrightText: 2026 Utility Tools contributors

//! Base64 encode/decode form.

use eframe::egui;

use crate::error::ToolResult;
use crate::logic::codec;

/// Text waiting to be encoded or decoded.
#[derive(Clone, Default, Debug, PartialEq, Eq)]
pub struct Base64Model {
    input: String,
}

/// Messages emitted by the Base64 form.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Base64Msg {
    InputChanged(String),
    Encode,
    Decode,
}

/// Apply a message; encode and decode both produce an outcome.
pub fn update(model: &mut Base64Model, msg: Base64Msg) -> Option<ToolResult<String>> {
    match msg {
        Base64Msg::InputChanged(text) => {
            model.input = text;
            None
        }
        Base64Msg::Encode => Some(Ok(codec::base64_encode(&model.input))),
        Base64Msg::Decode => Some(codec::base64_decode(&model.input)),
    }
}

/// Render the input field with encode and decode buttons.
pub fn view(ui: &mut egui::Ui, model: &Base64Model) -> Vec<Base64Msg> {
    let mut msgs = Vec::new();

    let mut input = model.input.clone();
    if ui
        .add(
            egui::TextEdit::singleline(&mut input)
                .hint_text("Enter text to encode/decode")
                .desired_width(f32::INFINITY),
        )
        .changed()
    {
        msgs.push(Base64Msg::InputChanged(input));
    }

    ui.horizontal(|ui| {
        if ui.button("Encode Base64").clicked() {
            msgs.push(Base64Msg::Encode);
        }
        if ui.button("Decode Base64").clicked() {
            msgs.push(Base64Msg::Decode);
        }
    });

    msgs
}
