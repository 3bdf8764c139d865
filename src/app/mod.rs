// SPDX-License-Identifier: MIT
// SPDX-FileCopyrightText: 2026 Utility Tools contributors

//! Application entry point wiring egui/eframe to launch the tool window.

use std::sync::Arc;

use eframe::egui;
use egui_phosphor::Variant;

use crate::config::AppConfig;
use crate::logic::protoc::{CodeGenerator, ProtocGenerator};
use crate::ui::UtilityApp;

/// Bootstrap the desktop application and run the main egui event loop.
pub fn run(config: AppConfig) -> eframe::Result<()> {
    // Register Phosphor icon font.
    let mut fonts = egui::FontDefinitions::default();
    egui_phosphor::add_to_fonts(&mut fonts, Variant::Regular);

    let options = eframe::NativeOptions {
        viewport: egui::ViewportBuilder::default()
            .with_title(config.window_title.clone())
            .with_inner_size(config.inner_size)
            .with_min_inner_size(config.min_inner_size),
        ..Default::default()
    };

    let generator: Arc<dyn CodeGenerator> =
        Arc::new(ProtocGenerator::new(config.generator.clone()));
    let title = config.window_title.clone();

    eframe::run_native(
        &title,
        options,
        Box::new(move |cc| {
            cc.egui_ctx.set_fonts(fonts);
            Ok(Box::new(UtilityApp::new(&config, generator)))
        }),
    )
}
