// Copyright 2025 the Pantograph Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Recorded input scripts.

use std::fs;
use std::path::Path;

use anyhow::{Context, Result};
use kurbo::Size;
use pantograph_controller::{ControllerConfig, InputEvent};
use serde::Deserialize;

/// A recorded input session.
#[derive(Clone, Debug, Deserialize)]
pub(crate) struct Script {
    /// Size of the window the events were recorded in.
    #[serde(default = "default_viewport")]
    pub(crate) viewport: Size,
    /// Fit the content into the viewport before replaying.
    #[serde(default)]
    pub(crate) fit_content: bool,
    pub(crate) events: Vec<InputEvent>,
}

fn default_viewport() -> Size {
    Size::new(800.0, 600.0)
}

impl Script {
    pub(crate) fn parse(json: &str) -> Result<Self> {
        let script: Self = serde_json::from_str(json).context("malformed input script")?;
        if !(script.viewport.width > 0.0 && script.viewport.height > 0.0) {
            anyhow::bail!(
                "viewport must have a positive size, got {}x{}",
                script.viewport.width,
                script.viewport.height
            );
        }
        Ok(script)
    }

    pub(crate) fn load(path: &Path) -> Result<Self> {
        let json = fs::read_to_string(path)
            .with_context(|| format!("failed to read script {}", path.display()))?;
        Self::parse(&json).with_context(|| format!("in {}", path.display()))
    }
}

/// Reads a controller configuration; missing fields keep their defaults.
pub(crate) fn load_config(path: &Path) -> Result<ControllerConfig> {
    let json = fs::read_to_string(path)
        .with_context(|| format!("failed to read config {}", path.display()))?;
    let config: ControllerConfig = serde_json::from_str(&json)
        .with_context(|| format!("malformed config {}", path.display()))?;
    config
        .validate()
        .with_context(|| format!("invalid config {}", path.display()))?;
    Ok(config)
}
