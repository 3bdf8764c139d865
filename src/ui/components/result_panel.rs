// SPDX-License-Identifier: MIT
// SPDX-FileCopyrightText: 2026 Utility Tools contributors

//! Read-only result display with a copy button.

use eframe::egui;

use crate::models::result::ResultSink;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ResultPanelMsg {
    CopyRequested,
}

/// Render the current result text and the copy action.
pub fn view(ui: &mut egui::Ui, sink: &ResultSink) -> Vec<ResultPanelMsg> {
    let mut msgs = Vec::new();

    egui::Frame::group(ui.style()).show(ui, |ui| {
        ui.set_width(ui.available_width());
        egui::ScrollArea::vertical()
            .max_height(240.0)
            .auto_shrink([false, true])
            .show(ui, |ui| {
                let text = if sink.is_placeholder() {
                    egui::RichText::new(sink.text())
                        .italics()
                        .color(egui::Color32::from_gray(110))
                } else {
                    egui::RichText::new(sink.text()).monospace()
                };
                ui.add(egui::Label::new(text).selectable(true).wrap());
            });
    });

    ui.add_space(6.0);
    if ui
        .button(format!("{} Copy Result", egui_phosphor::regular::COPY))
        .clicked()
    {
        msgs.push(ResultPanelMsg::CopyRequested);
    }

    msgs
}
