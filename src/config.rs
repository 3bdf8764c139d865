// SPDX-License-Identifier: MIT
// SPDX-FileCopyrightText: 2026 Utility Tools contributors

//! Built-in application settings. Nothing is read from disk or the environment.

/// How the external code generator is launched.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct GeneratorConfig {
    /// Executable name or path.
    pub program: String,
    /// Flag naming the plugin output directory, e.g. `--go_out`.
    pub plugin_out_flag: String,
}

impl Default for GeneratorConfig {
    fn default() -> Self {
        Self {
            program: "protoc".to_string(),
            plugin_out_flag: "--go_out".to_string(),
        }
    }
}

/// Top-level settings assembled at startup.
#[derive(Clone, Debug)]
pub struct AppConfig {
    pub window_title: String,
    pub inner_size: [f32; 2],
    pub min_inner_size: [f32; 2],
    /// Fraction of the window width given to the tool sidebar.
    pub sidebar_fraction: f32,
    /// Background threads running dialogs and generator calls.
    pub worker_threads: usize,
    pub generator: GeneratorConfig,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            window_title: "Utility Tools".to_string(),
            inner_size: [800.0, 600.0],
            min_inner_size: [600.0, 400.0],
            sidebar_fraction: 0.3,
            worker_threads: 2,
            generator: GeneratorConfig::default(),
        }
    }
}
