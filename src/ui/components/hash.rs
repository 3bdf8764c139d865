// SPDX-License-Identifier: MIT
// SPDX-FileCopyrightText: 2026 Utility Tools contributors

//! MD5 form.

use eframe::egui;

use crate::error::ToolResult;
use crate::logic::codec;

/// Text waiting to be hashed.
#[derive(Clone, Default, Debug, PartialEq, Eq)]
pub struct HashModel {
    input: String,
}

/// Messages emitted by the MD5 form.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum HashMsg {
    InputChanged(String),
    Generate,
}

/// Apply a message; returns an outcome for the result panel when one was produced.
pub fn update(model: &mut HashModel, msg: HashMsg) -> Option<ToolResult<String>> {
    match msg {
        HashMsg::InputChanged(text) => {
            model.input = text;
            None
        }
        HashMsg::Generate => Some(Ok(codec::hash_text(&model.input))),
    }
}

/// Render the input field and the hash button.
pub fn view(ui: &mut egui::Ui, model: &HashModel) -> Vec<HashMsg> {
    let mut msgs = Vec::new();

    let mut input = model.input.clone();
    let resp = ui.add(
        egui::TextEdit::singleline(&mut input)
            .hint_text("Enter text to hash")
            .desired_width(f32::INFINITY),
    );
    if resp.changed() {
        msgs.push(HashMsg::InputChanged(input));
    }
    let submitted = resp.lost_focus() && ui.input(|i| i.key_pressed(egui::Key::Enter));

    if ui.button("Generate MD5").clicked() || submitted {
        msgs.push(HashMsg::Generate);
    }

    msgs
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn generate_hashes_current_input() {
        let mut model = HashModel::default();
        assert_eq!(update(&mut model, HashMsg::InputChanged("abc".into())), None);

        let outcome = update(&mut model, HashMsg::Generate);

        assert_eq!(
            outcome,
            Some(Ok("900150983cd24fb0d6963f7d28e17f72".to_string()))
        );
    }

    #[test]
    fn empty_input_still_hashes() {
        let mut model = HashModel::default();

        let outcome = update(&mut model, HashMsg::Generate).unwrap().unwrap();

        assert_eq!(outcome.len(), 32);
    }
}
