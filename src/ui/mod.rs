// SPDX-License-Identifier: MIT
// SPDX-FileCopyrightText: 2026 Utility Tools contributors

//! Top-level egui application shell: tool sidebar, active form, result panel.

pub mod components;

use std::sync::Arc;

use eframe::egui;

use crate::config::AppConfig;
use crate::logic::protoc::CodeGenerator;
use crate::models::tool::ToolKind;
use crate::mvu::{self, AppModel, Command, Msg, ToolForm};
use crate::ui::components::result_panel::{self, ResultPanelMsg};
use crate::ui::components::{base64, hash, json, proto};

/// Stateful egui application hosting the tool forms.
pub struct UtilityApp {
    model: AppModel,
    inbox: Vec<Msg>,
    sidebar_width: f32,
    cmd_tx: crossbeam_channel::Sender<Command>,
    msg_rx: crossbeam_channel::Receiver<Msg>,
}

impl UtilityApp {
    /// Create the app and start the background workers that run commands.
    pub fn new(config: &AppConfig, generator: Arc<dyn CodeGenerator>) -> Self {
        let (cmd_tx, cmd_rx) = crossbeam_channel::unbounded::<Command>();
        let (msg_tx, msg_rx) = crossbeam_channel::unbounded::<Msg>();

        for _ in 0..config.worker_threads.max(1) {
            let cmd_rx = cmd_rx.clone();
            let msg_tx = msg_tx.clone();
            let generator = Arc::clone(&generator);
            std::thread::spawn(move || {
                for cmd in cmd_rx.iter() {
                    tracing::debug!(?cmd, "running command");
                    let msg = mvu::run_command(cmd, generator.as_ref());
                    let _ = msg_tx.send(msg);
                }
            });
        }

        Self {
            model: AppModel::default(),
            inbox: Vec::new(),
            sidebar_width: config.inner_size[0] * config.sidebar_fraction,
            cmd_tx,
            msg_rx,
        }
    }

    /// Apply queued messages in arrival order and dispatch resulting commands.
    fn process_inbox(&mut self) {
        while let Ok(msg) = self.msg_rx.try_recv() {
            self.model.pending_commands = self.model.pending_commands.saturating_sub(1);
            self.inbox.push(msg);
        }

        for msg in std::mem::take(&mut self.inbox) {
            let mut commands = Vec::new();
            mvu::update(&mut self.model, msg, &mut commands);
            for cmd in commands {
                if self.cmd_tx.send(cmd).is_ok() {
                    self.model.pending_commands += 1;
                }
            }
        }
    }
}

impl eframe::App for UtilityApp {
    /// Drives a single UI frame: drains worker replies, reduces messages, hands any
    /// staged copy to the clipboard, then renders the sidebar, status bar and detail pane.
    fn ui(&mut self, ui: &mut egui::Ui, _frame: &mut eframe::Frame) {
        let ctx = ui.ctx().clone();
        ctx.style_mut(|style| {
            style.spacing.item_spacing = egui::vec2(6.0, 6.0);
        });

        self.process_inbox();

        if let Some(text) = self.model.clipboard.take() {
            ctx.copy_text(text);
        }

        egui::SidePanel::left("tool_sidebar")
            .resizable(true)
            .default_width(self.sidebar_width)
            .show_inside(ui, |ui| {
                self.render_sidebar(ui);
            });

        egui::TopBottomPanel::bottom("status_panel")
            .resizable(false)
            .show_inside(ui, |ui| {
                self.render_status(ui);
            });

        egui::CentralPanel::default().show_inside(ui, |ui| {
            egui::ScrollArea::vertical().show(ui, |ui| {
                self.render_detail(ui);
            });
        });

        // Messages emitted by this frame's views are reduced on the next one.
        if !self.inbox.is_empty() {
            ctx.request_repaint();
        }
    }
}

impl UtilityApp {
    /// One selectable button per registered tool.
    fn render_sidebar(&mut self, ui: &mut egui::Ui) {
        ui.add_space(8.0);
        ui.heading("Tools");
        ui.add_space(4.0);

        let active = self.model.active_kind();
        for kind in ToolKind::ALL {
            let button = egui::Button::new(format!("{} {}", kind.icon(), kind.label()))
                .selected(active == Some(kind))
                .min_size(egui::vec2(ui.available_width(), 0.0));
            if ui.add(button).on_hover_text(kind.title()).clicked() {
                self.inbox.push(Msg::SelectTool(kind));
            }
        }
    }

    /// Active form followed by the shared result panel.
    fn render_detail(&mut self, ui: &mut egui::Ui) {
        ui.add_space(8.0);

        let Some(form) = &self.model.active else {
            ui.label(
                egui::RichText::new("Select a tool")
                    .italics()
                    .color(egui::Color32::from_gray(110)),
            );
            return;
        };

        ui.heading(form.kind().title());
        ui.add_space(8.0);

        match form {
            ToolForm::Hash(m) => {
                let msgs = hash::view(ui, m);
                self.inbox.extend(msgs.into_iter().map(Msg::Hash));
            }
            ToolForm::Base64(m) => {
                let msgs = base64::view(ui, m);
                self.inbox.extend(msgs.into_iter().map(Msg::Base64));
            }
            ToolForm::Json(m) => {
                let msgs = json::view(ui, m);
                self.inbox.extend(msgs.into_iter().map(Msg::Json));
            }
            ToolForm::Proto(m) => {
                let msgs = proto::view(ui, m);
                self.inbox.extend(msgs.into_iter().map(Msg::Proto));
            }
        }

        ui.add_space(12.0);
        ui.separator();
        ui.add_space(6.0);

        for msg in result_panel::view(ui, &self.model.result) {
            match msg {
                ResultPanelMsg::CopyRequested => self.inbox.push(Msg::CopyResult),
            }
        }
    }

    /// Render latest status message and a spinner while commands run.
    fn render_status(&self, ui: &mut egui::Ui) {
        ui.horizontal(|ui| {
            if let Some(text) = &self.model.status {
                ui.label(egui::RichText::new(text).color(egui::Color32::from_gray(68)));
            }
            if self.model.pending_commands > 0 {
                ui.add(egui::Spinner::new().size(14.0))
                    .on_hover_text(format!(
                        "{} task(s) running in background",
                        self.model.pending_commands
                    ));
            }
        });
    }
}
