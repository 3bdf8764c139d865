// SPDX-License-Identifier: MIT
// SPDX-FileCopyrightText: 2026 Utility Tools contributors

use anyhow::Result;
use tracing_subscriber::EnvFilter;
use utility_tools::app;
use utility_tools::config::AppConfig;

fn main() -> Result<()> {
    let filter = if cfg!(debug_assertions) {
        EnvFilter::new("utility_tools=debug,warn")
    } else {
        EnvFilter::new("utility_tools=info,warn")
    };
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .init();

    let config = AppConfig::default();
    tracing::info!(generator = %config.generator.program, "starting {}", config.window_title);

    app::run(config).map_err(|err| anyhow::anyhow!("Failed to run application: {err}"))
}
